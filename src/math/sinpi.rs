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
use crate::math::reduce::{Reduction, Tier};
use crate::math::tables::{NEAR_ZERO_CUBIC_Q29, NEAR_ZERO_PI_Q30, SIN_PI_TAB};

const SEGMENT_BITS: u32 = 5;
// Bits of the folded word below the segment index; the two above it are
// the sign and the quarter turn.
const OFFSET_BITS: u32 = 32 - SEGMENT_BITS - 2;

/// `sin(pi * t)` for a folded `t = folded / 2^31`, `2^-7 <= t < 1/2`,
/// as IEEE magnitude bits.
#[inline]
const fn segment(folded: u32) -> u32 {
    let i = ((folded >> OFFSET_BITS) & ((1 << SEGMENT_BITS) - 1)) as usize;
    let [c3, c2, c1, c0] = SIN_PI_TAB[i];
    let d = folded & ((1 << OFFSET_BITS) - 1);

    let mut acc = mul_hi(c3, d).wrapping_add(c2);
    let d = d << 3;
    acc = c1.wrapping_sub(mul_hi(acc, d));
    acc = mul_hi(acc, d).wrapping_add(c0);

    // acc is sin(pi * t) in Q32 and at least sin(pi / 128), so nz <= 5.
    // The leading one lands on the implicit bit and bumps the exponent
    // field by one, hence 0x7d rather than 0x7e.
    let nz = acc.leading_zeros();
    let r = (acc.wrapping_sub(0x80 >> nz) >> (8 - nz)) + 1;
    r + ((0x7d - nz) << SfBits::EXP_SHIFT)
}

/// `sin(pi * t)` for `t = folded / 2^63 < 2^-7` with relative accuracy,
/// as IEEE magnitude bits.
///
/// Evaluates `(pi - k * t^2) * t`, where `k` is `pi^3 / 6` corrected for
/// the dropped higher order terms.
#[inline]
const fn near_zero(folded: u64) -> u32 {
    if folded == 0 {
        return 0;
    }
    let lz = folded.leading_zeros();
    let nsign = lz - 1;
    // t * 2^(32 + nsign), top bit set
    let norm = ((folded << lz) >> 32) as u32;
    // t * 2^31
    let hi = (folded >> 32) as u32;
    let t34 = if nsign - 2 < 32 { norm >> (nsign - 2) } else { 0 };

    let mut m = mul_hi(NEAR_ZERO_CUBIC_Q29, hi);
    m = mul_hi(m, t34);
    // sin(pi * t) * 2^(30 + nsign), top bit is 30 or 31
    m = mul_hi(NEAR_ZERO_PI_Q30 - m, norm);

    let mut scale = nsign;
    let mut r = m + 0x7f;
    if r & 0x8000_0000 == 0 {
        r += m;
        scale += 1;
    }
    (r >> 8) + ((0x7f - scale) << SfBits::EXP_SHIFT)
}

/// IEEE bits of `sin(pi * t)` for a reduced argument, sign included.
#[inline]
pub(crate) const fn sin_half_turns(r: Reduction) -> u32 {
    let magnitude = match r.tier {
        Tier::NearZero => near_zero(r.folded),
        Tier::Standard | Tier::Escalated => segment((r.folded >> 32) as u32),
    };
    magnitude | r.sign()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxfm::f_sinpi;

    fn ulp_distance(a: f32, b: f32) -> u32 {
        (a.to_bits() as i64 - b.to_bits() as i64).unsigned_abs() as u32
    }

    #[test]
    fn segment_covers_table_range() {
        // every segment, start, middle and end
        for i in 0..32u32 {
            for d in [0u32, 1 << 24, (1 << 25) - 1] {
                let folded = (i << OFFSET_BITS) | d;
                if folded < 1 << 24 {
                    continue;
                }
                let t = folded as f64 / 2f64.powi(31);
                let got = f32::from_bits(segment(folded));
                let expected = f_sinpi(t) as f32;
                assert!(
                    ulp_distance(got, expected) <= 1,
                    "segment {i} t {t}: {got} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn segment_top_stays_below_one() {
        let got = f32::from_bits(segment(0x3fff_ffff));
        assert!(got <= 1.0);
        assert!(got > 0.99999);
    }

    #[test]
    fn near_zero_is_relative() {
        for shift in 8..62 {
            for tail in [0u64, 0x5555_5555, 0x1234_5678_9abc] {
                let folded = (1u64 << (62 - shift)) | (tail & ((1u64 << (62 - shift)) - 1));
                let t = folded as f64 / 2f64.powi(63);
                let got = f32::from_bits(near_zero(folded));
                let expected = f_sinpi(t) as f32;
                assert!(
                    ulp_distance(got, expected) <= 1,
                    "shift {shift}: {got} vs {expected}"
                );
            }
        }
        assert_eq!(near_zero(0), 0);
    }

    #[test]
    fn sign_is_spliced() {
        let r = Reduction {
            tier: Tier::Standard,
            turn: 0x8000_0000,
            folded: 0x2000_0000u64 << 32,
        };
        assert_eq!(f32::from_bits(sin_half_turns(r)), -std::f32::consts::FRAC_1_SQRT_2);
    }
}
