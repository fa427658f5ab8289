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

const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;
const O_THRESHOLD: f64 = f64::from_bits(0x40862e42fefa39ef);
const LN2_HI: f64 = f64::from_bits(0x3fe62e42fee00000);
const LN2_LO: f64 = f64::from_bits(0x3dea39ef35793c76);
const INV_LN2: f64 = f64::from_bits(0x3ff71547652b82fe);
// Minimax coefficients for the rational kernel on |x| <= 0.5 ln2
const Q1: f64 = f64::from_bits(0xbfa11111111110f4);
const Q2: f64 = f64::from_bits(0x3f5a01a019fe5585);
const Q3: f64 = f64::from_bits(0xbf14ce199eaadbb7);
const Q4: f64 = f64::from_bits(0x3ed0cfca86e65239);
const Q5: f64 = f64::from_bits(0xbe8afdb76e09c32d);

// Adds k to the biased exponent, k must keep the result in normal range
#[inline]
fn ldexpk(y: f64, k: i32) -> f64 {
    f64::from_bits(y.to_bits().wrapping_add((k as u64) << 52))
}

/// Computes exp(x) - 1 without cancellation near zero.
///
/// The argument is pushed onto the ln2 grid, a degree-5 rational kernel
/// covers the remainder and the `2^k` scale is folded back with dedicated
/// paths for the small k where `2^k - 1` eats the leading digits. The
/// evaluation order is load-bearing and kept as is.
pub fn f_expm1(x: f64) -> f64 {
    let mut x = x;
    let ux = x.to_bits();
    let mut hx = (ux >> 32) as u32;
    let xsb = hx & 0x8000_0000;
    hx &= 0x7fff_ffff;

    // |x| >= 56 ln2: the sum collapses to exp(x) or to -1
    if hx >= 0x4043_687a {
        if hx >= 0x4086_2e42 {
            if hx >= 0x7ff0_0000 {
                if ((hx & 0xfffff) as u64 | (ux & 0xffff_ffff)) != 0 {
                    return x + x; // NaN
                }
                return if xsb == 0 { x } else { -1.0 };
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE; // overflow
            }
        }
        if xsb != 0 {
            // rounds to -1 and raises inexact
            return TINY - 1.0;
        }
    }

    let mut k = 0i32;
    let mut c = 0.0;

    if hx > 0x3fd6_2e42 {
        // |x| > 0.5 ln2, reduce onto the ln2 grid keeping the residual
        // error in c
        let (hi, lo) = if hx < 0x3ff0_a2b2 {
            if xsb == 0 {
                k = 1;
                (x - LN2_HI, LN2_LO)
            } else {
                k = -1;
                (x + LN2_HI, -LN2_LO)
            }
        } else {
            k = (INV_LN2 * x + if xsb == 0 { 0.5 } else { -0.5 }) as i32;
            let t = k as f64;
            (x - t * LN2_HI, t * LN2_LO)
        };
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < 0x3c90_0000 {
        // |x| < 2^-54, x itself is the answer, the dance raises inexact
        let t = HUGE + x;
        return x - (t - (HUGE + x));
    }

    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = 1.0 + hxs * Q1;
    let h2 = hxs * hxs;
    let r2 = Q2 + hxs * Q3;
    let h4 = h2 * h2;
    let r3 = Q4 + hxs * Q5;
    let r1 = (r1 + h2 * r2) + h4 * r3;
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));

    if k == 0 {
        return x - (x * e - hxs);
    }

    e = (x * (e - c) - c) - hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return 1.0 + 2.0 * (x - e);
    }

    if !(-1..=56).contains(&k) {
        let y = 1.0 - (e - x);
        if k == 1024 {
            // one exponent step past the largest normal scale
            let y = y * 2.0 * f64::from_bits(0x7fe0000000000000);
            return y - 1.0;
        }
        return ldexpk(y, k) - 1.0;
    }

    if k < 20 {
        // t = 1 - 2^-k, low word stays zero
        let t = f64::from_bits((0x3ff0_0000u64 - (0x0020_0000u64 >> k)) << 32);
        let y = t - (e - x);
        return ldexpk(y, k);
    }

    let t = f64::from_bits((0x3ffu64 - k as u64) << 52); // 2^-k
    let y = (x - (e + t)) + 1.0;
    ldexpk(y, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expm1_near_zero() {
        assert_eq!(f_expm1(0.0), 0.0);
        assert!(f_expm1(-0.0).is_sign_negative());
        // no cancellation where exp(x)-1 would lose digits
        assert!((f_expm1(1e-10) - 1.00000000005e-10).abs() < 1e-24);
        assert!((f_expm1(-1e-10) + 9.9999999995e-11).abs() < 1e-24);
    }

    #[test]
    fn expm1_spot_values() {
        assert!((f_expm1(1.0) - 1.7182818284590453).abs() < 1e-15);
        assert!((f_expm1(-1.0) + 0.6321205588285577).abs() < 1e-16);
        assert!((f_expm1(0.5) - 0.6487212707001282).abs() < 1e-16);
        assert!((f_expm1(34.7) - 1174947663720106.8).abs() < 1e1);
    }

    #[test]
    fn expm1_edges() {
        assert!(f_expm1(f64::NAN).is_nan());
        assert_eq!(f_expm1(f64::INFINITY), f64::INFINITY);
        assert_eq!(f_expm1(f64::NEG_INFINITY), -1.0);
        assert_eq!(f_expm1(-60.0), -1.0);
        assert_eq!(f_expm1(710.0), f64::INFINITY);
        let top = f_expm1(709.78);
        assert!(top.is_finite() && top > 1e308);
    }
}
