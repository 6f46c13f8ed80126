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
use crate::math::qfmt::{clrsb, clrsb64, mul_hi, mul_lo, mul_wide};
use crate::math::tables::ONE_BY_2P31PI;

/// Smallest biased exponent the reciprocal table has a window for.
pub(crate) const REDUCTION_MIN_EXPONENT: u32 = 96;

/// A quarter of a full turn in Q32; adding it maps `cos` onto `sin`.
pub(crate) const QUARTER_TURN: u32 = 0x4000_0000;

// Redundant sign bits of the folded value above which the current
// precision is not trusted.
const STANDARD_MAX_MARGIN: u32 = 4;
const ESCALATED_MAX_MARGIN: u32 = 6;

/// Precision used to reach the folded argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tier {
    /// 32 bit product, folded value at least `2^-5` half turns.
    Standard,
    /// 64 bit product with one more limb, folded value at least `2^-7`.
    Escalated,
    /// 64 bit product closer than `2^-7` half turns to a zero of the
    /// result, evaluated by the relative error polynomial.
    NearZero,
}

/// Argument reduced to `t` half turns with `sin(pi * t)` carrying the result.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Reduction {
    pub(crate) tier: Tier,
    /// Turns of `2 pi` in Q32 before folding. Bit 31 is the result sign.
    pub(crate) turn: u32,
    /// `t` in `[0, 1/2)` as Q63. Standard tier only fills the top word.
    pub(crate) folded: u64,
}

impl Reduction {
    #[inline(always)]
    pub(crate) const fn sign(&self) -> u32 {
        self.turn & SfBits::SIGN_MASK
    }
}

/// Three limbs of `1/pi` aligned to a biased exponent. A fourth limb
/// supplies the bits shifted into the last one.
#[derive(Copy, Clone, Debug)]
struct PiWindow {
    p0: u32,
    p1: u32,
    p2: u32,
}

impl PiWindow {
    #[inline(always)]
    const fn new(exponent: u32) -> PiWindow {
        let i = (exponent / 32 - REDUCTION_MIN_EXPONENT / 32) as usize;
        let l = exponent & 31;
        let (p0, p1, p2, p3) = (
            ONE_BY_2P31PI[i],
            ONE_BY_2P31PI[i + 1],
            ONE_BY_2P31PI[i + 2],
            ONE_BY_2P31PI[i + 3],
        );
        if l == 0 {
            return PiWindow { p0, p1, p2 };
        }
        let r = 32 - l;
        PiWindow {
            p0: (p0 << l) | (p1 >> r),
            p1: (p1 << l) | (p2 >> r),
            p2: (p2 << l) | (p3 >> r),
        }
    }
}

/// `sin(pi/2 + t) == sin(pi/2 - t)`: complement the quarter turn away and
/// drop the sign.
#[inline(always)]
const fn fold32(turn: u32) -> u32 {
    let v = if turn & QUARTER_TURN != 0 { !turn } else { turn };
    v & SfBits::ABS_MASK
}

#[inline(always)]
const fn fold64(turn: u64) -> u64 {
    let v = if turn & ((QUARTER_TURN as u64) << 32) != 0 {
        !turn
    } else {
        turn
    };
    v & (u64::MAX >> 1)
}

/// Reduces `|x|` to half turns and folds into `[0, 1/2)`.
///
/// `offset` is added to the Q32 turn count before folding; a
/// [`QUARTER_TURN`] turns the sine evaluation into cosine.
///
/// Requires a finite `x` with biased exponent of at least
/// [`REDUCTION_MIN_EXPONENT`].
#[inline]
pub(crate) const fn reduce(x: SfBits, offset: u32) -> Reduction {
    let w = PiWindow::new(x.biased_exponent());
    let m = x.significand_q31();

    // Integer turns fall off the top of the 32 bit word, so only the two
    // limbs straddling the binary point matter here.
    let turn = mul_lo(m, w.p0)
        .wrapping_add(mul_hi(m, w.p1))
        .wrapping_add(offset);
    let folded = fold32(turn);
    if clrsb(folded as i32) <= STANDARD_MAX_MARGIN {
        return Reduction {
            tier: Tier::Standard,
            turn,
            folded: (folded as u64) << 32,
        };
    }

    // Cancellation ate the top bits; redo with 64 bits and the next limb.
    let wide = (mul_wide(m, w.p0) << 32)
        .wrapping_add(mul_wide(m, w.p1))
        .wrapping_add(mul_wide(m, w.p2) >> 32)
        .wrapping_add((offset as u64) << 32);
    let folded = fold64(wide);
    // The carry from the low limb may move the value away from the zero,
    // so the tier is chosen from the recomputed margin.
    let tier = if clrsb64(folded as i64) > ESCALATED_MAX_MARGIN {
        Tier::NearZero
    } else {
        Tier::Escalated
    };
    Reduction {
        tier,
        turn: (wide >> 32) as u32,
        folded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_turns(r: &Reduction) -> f64 {
        r.folded as f64 / 2f64.powi(63)
    }

    #[test]
    fn window_is_one_by_pi() {
        // 2^(127 - 127) / pi in Q32 sits in the second word.
        let w = PiWindow::new(127);
        assert_eq!(w.p0, 0);
        assert_eq!(w.p1, (4294967296f64 / std::f64::consts::PI) as u32);
        // One binade up per 32 exponents: the integer part moves into p0.
        let w = PiWindow::new(127 + 32);
        assert_eq!(w.p0, 0x517c_c1b7);
        // Aligned exponent skips the shift.
        let w = PiWindow::new(128);
        assert_eq!(w.p0, ONE_BY_2P31PI[1]);
        assert_eq!(w.p1, ONE_BY_2P31PI[2]);
        assert_eq!(w.p2, ONE_BY_2P31PI[3]);
    }

    #[test]
    fn standard_tier() {
        let r = reduce(SfBits::from_f32(1.0), QUARTER_TURN);
        assert_eq!(r.tier, Tier::Standard);
        assert_eq!(r.folded as u32, 0);
        assert_eq!(r.sign(), 0);
        // cos(1) = sin(pi * t)
        let t = half_turns(&r);
        assert!((t - (0.5 - 1.0 / std::f64::consts::PI)).abs() < 2e-9);
    }

    #[test]
    fn escalated_tier() {
        let x = std::f32::consts::FRAC_PI_2 + 0.05;
        let r = reduce(SfBits::from_f32(x), QUARTER_TURN);
        assert_eq!(r.tier, Tier::Escalated);
        assert_ne!(r.sign(), 0);
        let t = half_turns(&r);
        let expected = (x as f64 - std::f64::consts::FRAC_PI_2) / std::f64::consts::PI;
        assert!((t - expected).abs() < 1e-12);
    }

    #[test]
    fn near_zero_tier() {
        let x = std::f32::consts::FRAC_PI_2;
        let r = reduce(SfBits::from_f32(x), QUARTER_TURN);
        assert_eq!(r.tier, Tier::NearZero);
        // f32 pi/2 overshoots, cos is slightly negative.
        assert_ne!(r.sign(), 0);
        let t = half_turns(&r);
        let expected = (x as f64 - std::f64::consts::FRAC_PI_2) / std::f64::consts::PI;
        assert!((t / expected - 1.0).abs() < 1e-6);

        let r = reduce(SfBits::from_f32(3.0 * std::f32::consts::FRAC_PI_2), QUARTER_TURN);
        assert_eq!(r.tier, Tier::NearZero);
    }

    #[test]
    fn sine_without_offset() {
        let r = reduce(SfBits::from_f32(0.0625), 0);
        assert_eq!(r.tier, Tier::Escalated);
        assert_eq!(r.sign(), 0);
        let t = half_turns(&r);
        assert!((t - 0.0625 / std::f64::consts::PI).abs() < 1e-12);

        let r = reduce(SfBits::from_f32(1e-8), 0);
        assert_eq!(r.tier, Tier::NearZero);
        let t = half_turns(&r);
        assert!((t / (1e-8f32 as f64 / std::f64::consts::PI) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn huge_arguments_stay_in_table() {
        for bits in [0x7f7f_ffffu32, 0x7f00_0000, 0x6000_0000, 0x5000_0000] {
            let r = reduce(SfBits::from_u32(bits), QUARTER_TURN);
            assert!(r.folded < 1 << 62);
        }
    }
}
