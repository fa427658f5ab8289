/*
 * // Copyright (c) Radzivon Bartoshyk 8/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::common::{f_fmla, pow2i, scalbn};

/// Computes exponent for given value
#[inline]
pub fn f_exp(d: f64) -> f64 {
    const EXP_POLY_1_D: f64 = 2f64;
    const EXP_POLY_2_D: f64 = 0.16666666666666674f64;
    const EXP_POLY_3_D: f64 = -0.0027777777777777614f64;
    const EXP_POLY_4_D: f64 = 6.613756613755705e-5f64;
    const EXP_POLY_5_D: f64 = -1.6534391534392554e-6f64;
    const EXP_POLY_6_D: f64 = 4.17535139757361979584e-8f64;

    const L2_U: f64 = 0.693_147_180_559_662_956_511_601_805_686_950_683_593_75;
    const L2_L: f64 = 0.282_352_905_630_315_771_225_884_481_750_134_360_255_254_120_68_e-12;
    const R_LN2: f64 =
        1.442_695_040_888_963_407_359_924_681_001_892_137_426_645_954_152_985_934_135_449_406_931;

    // exp overflows past 709.78271289338397, underflows to zero below
    // -745.13321910194111
    const O_THRESHOLD: f64 = f64::from_bits(0x40862e42fefa39ef);
    const U_THRESHOLD: f64 = f64::from_bits(0xc0874910d52d3052);

    if d.is_nan() {
        return d + d;
    }
    if d > O_THRESHOLD {
        return f64::INFINITY;
    }
    if d < U_THRESHOLD {
        return 0.0;
    }

    let qf = (d * R_LN2).round();
    let q = qf as i32;

    let mut r = f_fmla(qf, -L2_U, d);
    r = f_fmla(qf, -L2_L, r);

    let f = r * r;
    // Poly for u = r*(exp(r)+1)/(exp(r)-1)
    let mut u = EXP_POLY_6_D;
    u = f_fmla(u, f, EXP_POLY_5_D);
    u = f_fmla(u, f, EXP_POLY_4_D);
    u = f_fmla(u, f, EXP_POLY_3_D);
    u = f_fmla(u, f, EXP_POLY_2_D);
    u = f_fmla(u, f, EXP_POLY_1_D);
    let u = f_fmla(2f64, r / (u - r), 1.);
    if !(-1021..=1023).contains(&q) {
        // subnormal results and the very top of the range
        return scalbn(u, q);
    }
    u * pow2i(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_test() {
        assert!(
            (f_exp(0f64) - 1f64).abs() < 1e-8,
            "Invalid result {}",
            f_exp(0f64)
        );
        assert!(
            (f_exp(5f64) - 148.4131591025766034211155800405522796f64).abs() < 1e-8,
            "Invalid result {}",
            f_exp(5f64)
        );
        assert!((f_exp(-3.5) - 0.0301973834223185).abs() < 1e-13);
    }

    #[test]
    fn exp_edges() {
        assert_eq!(f_exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(f_exp(f64::NEG_INFINITY), 0.0);
        assert!(f_exp(f64::NAN).is_nan());
        assert_eq!(f_exp(710.0), f64::INFINITY);
        assert_eq!(f_exp(-746.0), 0.0);
        // stays finite right below the overflow threshold
        let top = f_exp(709.78);
        assert!(top.is_finite() && top > 1e308);
        // subnormal but nonzero near the underflow threshold
        let bottom = f_exp(-744.0);
        assert!(bottom > 0.0 && bottom < f64::MIN_POSITIVE);
    }
}
