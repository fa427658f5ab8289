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
use crate::common::copysign;
use crate::expm1::f_expm1;

/// Computes the hyperbolic tangent.
///
/// Both mid-range branches go through expm1 of the doubled argument, the
/// |x| < 1 one with a negated argument so the subtraction never cancels.
/// Saturates to +-1 past |x| = 22 where the tail is below half an ulp.
pub fn f_tanh(x: f64) -> f64 {
    const TINY: f64 = 1.0e-300;

    let ix = ((x.to_bits() >> 32) as u32) & 0x7fff_ffff;
    if ix >= 0x7ff0_0000 {
        if x.is_nan() {
            return x + x;
        }
        // tanh(+-inf) = +-1
        return copysign(1.0, x);
    }
    let ax = f64::from_bits(x.to_bits() & 0x7fff_ffff_ffff_ffff);

    let z;
    if ix < 0x4036_0000 {
        // |x| < 22
        if ix < 0x3e30_0000 {
            // |x| < 2^-28, tanh(x) rounds to x, raise inexact when nonzero
            return x * (1.0 + x);
        }
        if ix >= 0x3ff0_0000 {
            // 1 <= |x|
            let t = f_expm1(2.0 * ax);
            z = 1.0 - 2.0 / (t + 2.0);
        } else {
            let t = f_expm1(-2.0 * ax);
            z = -t / (t + 2.0);
        }
    } else {
        // the result is +-1 up to half an ulp, keep inexact raised
        z = 1.0 - TINY;
    }
    copysign(z, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, rel: f64) {
        assert!((a - b).abs() <= rel * b.abs(), "{} vs {}", a, b);
    }

    #[test]
    fn tanh_spot_values() {
        assert_close(f_tanh(0.25), 0.24491866240370913, 1e-14);
        assert_close(f_tanh(0.5), 0.46211715726000974, 1e-14);
        assert_close(f_tanh(1.0), 0.7615941559557649, 1e-14);
        assert_close(f_tanh(2.0), 0.9640275800758169, 1e-14);
        assert_close(f_tanh(5.0), 0.9999092042625951, 1e-14);
        assert_close(f_tanh(0.0017), 0.0016999983623352264, 1e-14);
        assert_close(f_tanh(-1.0), -0.7615941559557649, 1e-14);
    }

    #[test]
    fn tanh_saturates() {
        assert_eq!(f_tanh(22.5), 1.0);
        assert_eq!(f_tanh(-22.5), -1.0);
        assert_eq!(f_tanh(1e300), 1.0);
    }

    #[test]
    fn tanh_edges() {
        assert_eq!(f_tanh(0.0), 0.0);
        assert!(f_tanh(-0.0).is_sign_negative());
        assert_eq!(f_tanh(1e-10), 1e-10);
        assert!(f_tanh(f64::NAN).is_nan());
        assert_eq!(f_tanh(f64::INFINITY), 1.0);
        assert_eq!(f_tanh(f64::NEG_INFINITY), -1.0);
    }

    #[test]
    fn tanh_is_odd() {
        for x in [0.1, 0.5, 0.9, 1.5, 3.0, 10.0] {
            assert_eq!(f_tanh(-x), -f_tanh(x));
        }
    }
}
