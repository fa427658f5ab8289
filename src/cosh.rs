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
use crate::exp::f_exp;
use crate::expm1::f_expm1;

/// Computes the hyperbolic cosine (exp(x) + exp(-x))/2.
///
/// Near zero it runs through expm1 so cosh stays exactly 1 where it should,
/// past ln(f64::MAX) the half scale moves inside the exponential to dodge a
/// premature overflow.
pub fn f_cosh(x: f64) -> f64 {
    let ix = ((x.to_bits() >> 32) as u32) & 0x7fff_ffff;
    if ix >= 0x7ff0_0000 {
        // cosh(NaN) = NaN, cosh(+-inf) = +inf
        return x * x;
    }
    let ax = f64::from_bits(x.to_bits() & 0x7fff_ffff_ffff_ffff);

    if ix < 0x3fd6_2e43 {
        // |x| < 0.5 ln2: 1 + (exp(|x|)-1)^2 / (2 exp(|x|))
        let t = f_expm1(ax);
        let w = 1.0 + t;
        if ix < 0x3c80_0000 {
            return w; // cosh of a tiny value rounds to 1
        }
        return 1.0 + (t * t) / (w + w);
    }

    if ix < 0x4036_0000 {
        // 0.5 ln2 <= |x| < 22
        let t = f_exp(ax);
        return 0.5 * t + 0.5 / t;
    }

    if ix < 0x4086_2e42 {
        // exp(-|x|) is already invisible next to exp(|x|)
        return 0.5 * f_exp(ax);
    }

    let lx = x.to_bits() as u32;
    if ix < 0x4086_33ce || (ix == 0x4086_33ce && lx <= 0x8fb9_f87d) {
        // |x| <= ln(2 * f64::MAX), exp(|x|) overflows but cosh does not yet
        let w = f_exp(0.5 * ax);
        let t = 0.5 * w;
        return t * w;
    }

    f64::INFINITY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, rel: f64) {
        assert!((a - b).abs() <= rel * b.abs(), "{} vs {}", a, b);
    }

    #[test]
    fn cosh_spot_values() {
        assert_eq!(f_cosh(0.0), 1.0);
        assert_eq!(f_cosh(-0.0), 1.0);
        assert_close(f_cosh(0.1), 1.0050041680558035, 1e-13);
        assert_close(f_cosh(0.5), 1.1276259652063807, 1e-13);
        assert_close(f_cosh(1.0), 1.5430806348152437, 1e-13);
        assert_close(f_cosh(-1.0), 1.5430806348152437, 1e-13);
        assert_close(f_cosh(5.0), 74.20994852478785, 1e-13);
        assert_close(f_cosh(22.0), 1792456423.065796, 1e-13);
    }

    #[test]
    fn cosh_near_overflow() {
        assert_close(f_cosh(710.0), 1.1169973830808555e308, 1e-12);
        assert_close(f_cosh(710.475), 1.7961476505485222e308, 1e-12);
        assert_eq!(f_cosh(711.0), f64::INFINITY);
        assert_eq!(f_cosh(-711.0), f64::INFINITY);
    }

    #[test]
    fn cosh_edges() {
        assert!(f_cosh(f64::NAN).is_nan());
        assert_eq!(f_cosh(f64::INFINITY), f64::INFINITY);
        assert_eq!(f_cosh(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(f_cosh(1e-30), 1.0);
    }
}
