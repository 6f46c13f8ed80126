/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
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
use crate::math::bits::SfBits;
use crate::math::qfmt::mul_hi;
use crate::math::reduce::{QUARTER_TURN, reduce};
use crate::math::sinpi::sin_half_turns;

/// From here on the argument goes through the reciprocal table.
const REDUCED_MIN_EXPONENT: u32 = 127 - 4;
/// Below this `x^2 / 2` is under half an ulp of `1.0`.
const SMALL_ANGLE_MIN_EXPONENT: u32 = 127 - 12;

/// 1/6 in Q32, rounded up.
const ONE_SIXTH_Q32: u32 = 0x2aaa_aaab;

/// `cos(x) ~= 1 - (x^2/2 - (x^2/2)^2/6)` for `2^-12 <= |x| < 2^-4`.
///
/// The result lies in `(1 - 2^-9, 1)` where the ulp is `2^-24`, so the
/// correction is rounded to that grid and subtracted from the bits of `1.0`.
#[inline]
const fn small_angle(x: SfBits) -> u32 {
    // |x| * 2^32, exact once the exponent reaches 118
    let xq = x.significand_q31() >> (126 - x.biased_exponent());
    let h = mul_hi(xq, xq) >> 1;
    let c = mul_hi(mul_hi(ONE_SIXTH_Q32, h), h);
    SfBits::ONE.to_u32() - ((h - c + 0x80) >> 8)
}

/// Cosine of a single precision bit pattern.
///
/// Uses only integer arithmetic: the argument is reduced against a wide
/// `1/pi` table and `sin(x + pi/2)` is evaluated from a segment table, so
/// the result does not depend on any floating point unit.
///
/// Infinities and NaN give the quiet NaN `0x7fc0_0000`.
///
/// Max found ULP 1.2
#[inline]
pub const fn cosf_bits(x: u32) -> u32 {
    let x = SfBits::from_u32(x);
    let e = x.biased_exponent();
    if e >= REDUCED_MIN_EXPONENT {
        if x.is_non_finite() {
            return SfBits::NAN.to_u32();
        }
        return sin_half_turns(reduce(x, QUARTER_TURN));
    }
    if e >= SMALL_ANGLE_MIN_EXPONENT {
        return small_angle(x);
    }
    SfBits::ONE.to_u32()
}

/// Computes cosine
///
/// See [`cosf_bits`].
#[inline]
pub const fn cosf(x: f32) -> f32 {
    f32::from_bits(cosf_bits(x.to_bits()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxfm::f_cosf;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ulp_distance(a: f32, b: f32) -> u32 {
        let key = |v: f32| {
            let b = v.to_bits() as i64;
            if b < 0x8000_0000 { b } else { 0x8000_0000 - b }
        };
        (key(a) - key(b)).unsigned_abs() as u32
    }

    #[test]
    fn cosf_test() {
        assert_eq!(cosf(0.0), 1.0);
        assert_eq!(cosf(-0.0), 1.0);
        assert_eq!(cosf(std::f32::consts::PI), -1f32);
        assert_eq!(cosf(-std::f32::consts::PI), -1f32);
        assert_eq!(cosf(1e-10), 1.0);
        assert_eq!(cosf(f32::MIN_POSITIVE), 1.0);
        assert_eq!(cosf(f32::from_bits(1)), 1.0);
        assert!(cosf(std::f32::consts::FRAC_PI_2).abs() < 1e-7);
        assert_eq!(cosf(std::f32::consts::FRAC_PI_2), f_cosf(std::f32::consts::FRAC_PI_2));
        assert!(cosf(f32::INFINITY).is_nan());
        assert!(cosf(f32::NEG_INFINITY).is_nan());
        assert!(cosf(f32::NAN).is_nan());
        assert_eq!(cosf_bits(0x7f80_0001), 0x7fc0_0000);
    }

    #[test]
    fn cosf_is_const() {
        const C: f32 = cosf(0.5);
        assert_eq!(C, cosf(0.5));
        assert!(ulp_distance(C, f_cosf(0.5)) <= 1);
    }

    #[test]
    fn cosf_small_angles() {
        let mut x = f32::from_bits(0x3700_0000);
        while x < 0.0625 {
            assert!(ulp_distance(cosf(x), f_cosf(x)) <= 1, "x = {x}");
            x *= 1.0137;
        }
        // boundary of the flat region and of the reduction
        for bits in [0x3980_0000u32, 0x397f_ffff, 0x3d80_0000, 0x3d7f_ffff] {
            let x = f32::from_bits(bits);
            assert!(ulp_distance(cosf(x), f_cosf(x)) <= 1, "x = {x}");
        }
    }

    #[test]
    fn cosf_is_even() {
        let mut rng = StdRng::seed_from_u64(0x5f37_59df);
        for _ in 0..100_000 {
            let bits = rng.random::<u32>() & 0x7fff_ffff;
            assert_eq!(cosf_bits(bits), cosf_bits(bits | 0x8000_0000));
        }
    }

    #[test]
    fn cosf_random_bits() {
        let mut rng = StdRng::seed_from_u64(0x2545_f491);
        for _ in 0..200_000 {
            let x = f32::from_bits(rng.random_range(0..0x7f80_0000u32));
            let got = cosf(x);
            let expected = f_cosf(x);
            assert!(
                ulp_distance(got, expected) <= 2,
                "x = {x} ({:#010x}): {got} vs {expected}",
                x.to_bits()
            );
            assert!(got.abs() <= 1.0);
        }
    }

    #[test]
    fn cosf_moderate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200_000 {
            let x = rng.random_range(-1000.0f32..1000.0);
            assert!(ulp_distance(cosf(x), f_cosf(x)) <= 2, "x = {x}");
        }
    }

    #[test]
    fn cosf_near_zeros() {
        // cancellation against multiples of pi/2
        for k in 1..20_000 {
            let base = (k as f64 * std::f64::consts::FRAC_PI_2) as f32;
            for delta in -2i32..=2 {
                let x = f32::from_bits((base.to_bits() as i32 + delta) as u32);
                let got = cosf(x);
                let expected = f_cosf(x);
                assert!(
                    ulp_distance(got, expected) <= 2,
                    "x = {x}: {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn cosf_periodicity() {
        for k in 1..6 {
            for i in 1..2000 {
                let x = i as f32 * 0.001;
                let y = (x as f64 + 2.0 * std::f64::consts::PI * k as f64) as f32;
                assert!((cosf(x) - cosf(y)).abs() < 4e-6, "x = {x}, k = {k}");
            }
        }
    }
}
