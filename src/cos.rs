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
use crate::common::f_fmla;
use crate::dekker::Dekker;
use crate::rem_pio2::reduce_large;
use crate::sincos_table::angle_entry;

/// Decomposition x = n*pi/32 + r + c with |r| <= pi/64 plus a few ulps,
/// c being the low part of the remainder.
pub(crate) struct ReducedAngle {
    pub(crate) r: f64,
    pub(crate) c: f64,
    pub(crate) n: i32,
}

// pi/32 split into three parts. P1 and P2 carry 32 mantissa bits each, so
// kd * P1 and kd * P2 stay exact for |kd| <= 932560, wide enough for the
// whole fast path.
const P1: f64 = f64::from_bits(0x3fb921fb54400000);
const P2: f64 = f64::from_bits(0x3d90b4611a600000);
const P3: f64 = f64::from_bits(0x3b63198a2e037073);
const INV_32_OVER_PI: f64 = f64::from_bits(0x40245f306dc9c883);
// 1.5 * 2^52, adding then subtracting it rounds to the nearest integer
// in round-to-nearest-even without a branch.
const TO_INT: f64 = f64::from_bits(0x4338000000000000);

// For |x| < 90112, return n, r, c such that:
//   n = round(x * 32/pi)
//   x - n * pi/32 ~ r + c, |r| <= pi/64 + few ulps
#[inline]
pub(crate) fn reduce_fast(x: f64) -> ReducedAngle {
    let kd = (x * INV_32_OVER_PI + TO_INT) - TO_INT;
    let n = kd as i64 as i32;
    let r1 = f_fmla(kd, -P1, x); // Exact
    let r = f_fmla(kd, -P2, r1);
    let c1 = r1 - r; // Exact
    let c2 = f_fmla(kd, -P2, c1);
    let c = f_fmla(kd, -P3, c2);
    ReducedAngle { r, c, n }
}

/// Evaluates sin(n*pi/32 + r + c) against the angle table.
///
/// The head `s_hi + sigma*r + c_hl*r` is accumulated through exact two-sums
/// so its rounding errors land in the tail together with the polynomial
/// terms; the summation order of the tail is load-bearing for the error
/// bound and must not be reordered.
pub(crate) fn sin_from_table(n: i32, r: f64, c: f64) -> f64 {
    // cos(r) - 1 on |r| <= pi/64, even powers through r^8
    const C1: f64 = f64::from_bits(0xbfe0000000000000);
    const C2: f64 = f64::from_bits(0x3fa5555555555555);
    const C3: f64 = f64::from_bits(0xbf56c16c16c16c17);
    const C4: f64 = f64::from_bits(0x3efa01a01a01a01a);
    // sin(r) - r, odd powers through r^9
    const S1: f64 = f64::from_bits(0xbfc5555555555555);
    const S2: f64 = f64::from_bits(0x3f81111111111111);
    const S3: f64 = f64::from_bits(0xbf2a01a01a01a01a);

    let e = angle_entry(n);

    let r2 = r * r;
    let cosm1 = r2 * f_fmla(r2, f_fmla(r2, f_fmla(r2, C4, C3), C2), C1);
    let r3 = r2 * r;
    let sinmr = r3 * f_fmla(r2, f_fmla(r2, S3, S2), S1);

    let ch = e.c_hl + e.sigma;
    let pols = f_fmla(e.s_hi, cosm1, ch * sinmr);
    let corr = f_fmla(c, f_fmla(e.s_hi, -r, ch), e.s_lo);

    // sigma*r is exact, c_hl*r lands below it
    let v0 = Dekker::from_exact_add(e.s_hi, e.sigma * r);
    let v1 = Dekker::from_exact_add(v0.hi, e.c_hl * r);
    let res_lo = (pols + corr + v0.lo) + v1.lo;
    v1.hi + res_lo
}

const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;
// |x| below this bound keeps round(x*32/pi) within the exactness budget
// of the P1/P2 split
const FAST_BOUND: u64 = 0x40f6_0000_0000_0000; // 90112

/// Computes cosine with ~1 ulp accuracy over the whole double range
#[inline]
pub fn f_cos(x: f64) -> f64 {
    let ax = x.to_bits() & ABS_MASK;
    if ax >= EXP_MASK {
        // NaN propagates, Inf raises invalid
        return x - x;
    }
    let red;
    if ax < 0x3f80_0000_0000_0000 {
        // |x| < 2^-7
        if ax < 0x3030_0000_0000_0000 {
            // |x| < 2^-252, cos rounds to 1 from below
            return 1.0 - f64::from_bits(ax);
        }
        red = ReducedAngle { r: x, c: 0.0, n: 0 };
    } else if ax < FAST_BOUND {
        red = reduce_fast(x);
    } else {
        red = reduce_large(x);
    }
    // cos(x) = sin(x + pi/2), a quarter turn is 16 grid steps
    sin_from_table(red.n + 16, red.r, red.c)
}

/// Computes sine with ~1 ulp accuracy over the whole double range
#[inline]
pub fn f_sin(x: f64) -> f64 {
    let ax = x.to_bits() & ABS_MASK;
    if ax >= EXP_MASK {
        return x - x;
    }
    if ax < 0x3e50_0000_0000_0000 {
        // |x| < 2^-26, sin(x) rounds to x, nudge keeps inexact raised
        if x == 0.0 {
            return x;
        }
        return f_fmla(x, f64::from_bits(0xbc90000000000000), x);
    }
    let red = if ax < FAST_BOUND {
        reduce_fast(x)
    } else {
        reduce_large(x)
    };
    sin_from_table(red.n, red.r, red.c)
}

/// Computes cosine of a single precision value through the double core
#[inline]
pub fn f_cosf(x: f32) -> f32 {
    f_cos(x as f64) as f32
}

/// Computes sine of a single precision value through the double core
#[inline]
pub fn f_sinf(x: f32) -> f32 {
    f_sin(x as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn ulp_diff(a: f64, b: f64) -> u64 {
        let ia = a.to_bits() as i64;
        let ib = b.to_bits() as i64;
        let ka = if ia < 0 { i64::MIN - ia } else { ia };
        let kb = if ib < 0 { i64::MIN - ib } else { ib };
        ka.abs_diff(kb)
    }

    #[test]
    fn cos_special_cases() {
        assert_eq!(f_cos(0.0), 1.0);
        assert_eq!(f_cos(-0.0), 1.0);
        assert!(f_cos(f64::NAN).is_nan());
        assert!(f_cos(f64::INFINITY).is_nan());
        assert!(f_cos(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn sin_special_cases() {
        assert_eq!(f_sin(0.0), 0.0);
        assert!(f_sin(-0.0).is_sign_negative());
        assert_eq!(f_sin(-0.0), 0.0);
        assert!(f_sin(f64::NAN).is_nan());
        assert!(f_sin(f64::INFINITY).is_nan());
        assert!(f_sin(f64::NEG_INFINITY).is_nan());
    }

    // The references are correctly rounded; the evaluator's fma chains may
    // land one ulp off them depending on the lowering of f_fmla.
    fn assert_ulp(got: f64, want: f64) {
        assert!(
            ulp_diff(got, want) <= 1,
            "Invalid result {}, expected {}",
            got,
            want
        );
    }

    #[test]
    fn cos_spot_values() {
        assert_ulp(f_cos(1.0), 0.5403023058681398);
        assert_ulp(f_cos(0.5), 0.8775825618903728);
        assert_ulp(f_cos(-0.5), 0.8775825618903728);
        assert_ulp(f_cos(2.0), -0.4161468365471424);
        assert_ulp(f_cos(3.141592653589793), -1.0);
        assert_ulp(f_cos(1.5707963267948966), 6.123233995736766e-17);
        assert_ulp(f_cos(12345.6789), 0.7107527442152148);
        assert_ulp(f_cos(1e6), 0.9367521275331447);
    }

    #[test]
    fn sin_spot_values() {
        assert_ulp(f_sin(1.0), 0.8414709848078965);
        assert_ulp(f_sin(-0.5), -0.479425538604203);
        assert_ulp(f_sin(2.0), 0.9092974268256817);
        assert_ulp(f_sin(3.141592653589793), 1.2246467991473532e-16);
        assert_ulp(f_sin(1.5707963267948966), 1.0);
        assert_ulp(f_sin(12345.6789), -0.7034419212632563);
    }

    #[test]
    fn cos_huge_arguments() {
        assert_ulp(f_cos(1e22), 0.523214785395139);
        assert_ulp(f_sin(1e22), -0.8522008497671888);
        assert_ulp(f_cos(1e308), -0.8913089376870335);
        assert_ulp(f_sin(1e308), 0.4533964905016491);
        assert_ulp(f_cos(90112.5), 0.5868158117285602);
        assert_ulp(f_sin(90112.5), -0.809720447503551);
    }

    #[test]
    fn cos_tiny_arguments() {
        assert_eq!(f_cos(f64::from_bits(0x3020000000000000)), 1.0);
        assert_eq!(f_cos(-f64::from_bits(0x3020000000000000)), 1.0);
        assert_eq!(f_cos(f64::MIN_POSITIVE), 1.0);
        assert_eq!(f_sin(1e-10), 1e-10);
        assert_eq!(f_sin(-1e-10), -1e-10);
    }

    #[test]
    fn cos_is_even_sin_is_odd() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let x: f64 = rng.random_range(-1e10..1e10);
            assert_eq!(f_cos(x).to_bits(), f_cos(-x).to_bits(), "x = {}", x);
            assert_eq!(f_sin(x).to_bits(), (-f_sin(-x)).to_bits(), "x = {}", x);
        }
    }

    #[test]
    fn cos_is_periodic_in_two_pi() {
        // x + 2pi*k carries ~half an ulp of the shifted magnitude plus
        // k times the representation error of 2pi, so the tolerance
        // grows with k
        let two_pi = 2.0 * std::f64::consts::PI;
        for x in [0.25, 1.0, 2.5, 4.0] {
            let c = f_cos(x);
            let s = f_sin(x);
            for k in 1..=8 {
                let shifted = f_fmla(k as f64, two_pi, x);
                let tol = (k as f64) * 1e-14;
                assert!(
                    (f_cos(shifted) - c).abs() <= tol,
                    "cos period broken at x = {}, k = {}: {} vs {}",
                    x,
                    k,
                    f_cos(shifted),
                    c
                );
                assert!(
                    (f_sin(shifted) - s).abs() <= tol,
                    "sin period broken at x = {}, k = {}: {} vs {}",
                    x,
                    k,
                    f_sin(shifted),
                    s
                );
            }
        }
    }

    #[test]
    fn cos_matches_system_libm() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let x: f64 = rng.random_range(-90000.0..90000.0);
            assert!(
                ulp_diff(f_cos(x), x.cos()) <= 4,
                "cos mismatch at {}: {} vs {}",
                x,
                f_cos(x),
                x.cos()
            );
            assert!(
                ulp_diff(f_sin(x), x.sin()) <= 4,
                "sin mismatch at {}: {} vs {}",
                x,
                f_sin(x),
                x.sin()
            );
        }
    }

    #[test]
    fn fast_reduction_invariants() {
        let mut rng = rand::rng();
        let pi_over_32 = std::f64::consts::PI / 32.0;
        for _ in 0..5000 {
            let x: f64 = rng.random_range(-90000.0..90000.0);
            let red = reduce_fast(x);
            assert!(red.r.abs() <= 0.0492, "|r| too big at {}: {}", x, red.r);
            let recon = f_fmla(red.n as f64, pi_over_32, red.r + red.c);
            assert!(
                (recon - x).abs() < 1e-10,
                "reconstruction broken at {}: {}",
                x,
                recon
            );
        }
    }

    #[test]
    fn reduction_paths_agree_at_boundary() {
        for i in 0..200 {
            let x = 90111.0 + (i as f64) * 0.01;
            let rf = reduce_fast(x);
            let rl = reduce_large(x);
            let vf = sin_from_table(rf.n + 16, rf.r, rf.c);
            let vl = sin_from_table(rl.n + 16, rl.r, rl.c);
            assert!(
                (vf - vl).abs() < 1e-15,
                "paths disagree at {}: {} vs {}",
                x,
                vf,
                vl
            );
        }
    }

    #[test]
    fn narrow_entry_points() {
        assert!((f_cosf(1.0) - 0.54030234f32).abs() < 1e-6);
        assert!((f_sinf(1.0) - 0.84147096f32).abs() < 1e-6);
        assert!(f_cosf(f32::NAN).is_nan());
        assert!(f_sinf(f32::INFINITY).is_nan());
        assert_eq!(f_cosf(0.0), 1.0);
    }
}
