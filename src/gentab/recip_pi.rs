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

//! `1/pi` to a few hundred bits.
//!
//! The evaluator's reduction needs 256 correct bits, well past any native
//! float, so the reciprocal is formed with MPFR at a chosen precision and
//! cut into 32 bit limbs.

use crate::err::TableGenError;
use rug::Float;
use rug::float::{Constant, Round};

/// Limbs needed so exponent 254 sees four limbs from index `254 / 32 - 3`.
pub(crate) const MIN_LIMBS: usize = 8;

/// Big-endian limbs of `2^-63 / pi`: limb `k` carries the bits of weight
/// `2^(-32k - 1) ..= 2^(-32k - 32)`.
///
/// `guard_bits` is the MPFR precision `pi` and its reciprocal are computed
/// with; it is raised to `32 * limbs` when smaller.
pub(crate) fn one_by_2p31pi(limbs: usize, guard_bits: usize) -> Result<Vec<u32>, TableGenError> {
    if limbs < MIN_LIMBS {
        return Err(TableGenError::TooFewLimbs {
            requested: limbs,
            required: MIN_LIMBS,
        });
    }
    let bits = 32 * limbs;
    let precision = guard_bits.max(bits) as u32;
    let recip = Float::with_val(precision, Constant::Pi).recip();
    // floor(2^(32 * limbs - 63) / pi), one limb per 32 bits from the top
    let scaled = recip << (bits - 63) as u32;
    // Only non-finite values have no integer part.
    let q = scaled
        .to_integer_round(Round::Down)
        .map(|(q, _)| q)
        .unwrap_or_default();
    let out: Vec<u32> = (0..limbs)
        .map(|j| rug::Integer::from(&q >> (32 * (limbs - 1 - j)) as u32).to_u32_wrapping())
        .collect();
    tracing::trace!(limbs = ?out, precision, "reciprocal of pi");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reciprocal_limbs() {
        let limbs = one_by_2p31pi(8, 320).unwrap();
        // 2/pi = 0.a2f9836e4e441529fc2757d1f534ddc0db6295993c439041...
        assert_eq!(
            limbs,
            vec![
                0, 0, 0xa2f9836e, 0x4e441529, 0xfc2757d1, 0xf534ddc0, 0xdb629599, 0x3c439041
            ]
        );
        let longer = one_by_2p31pi(10, 384).unwrap();
        assert_eq!(&longer[..8], &limbs[..]);
        assert_eq!(&longer[8..], &[0xfe51_63abu32, 0xdebb_c561]);
    }

    #[test]
    fn precision_is_raised_to_the_table_width() {
        let low = one_by_2p31pi(8, 64).unwrap();
        let high = one_by_2p31pi(8, 1024).unwrap();
        assert_eq!(low, high);
        assert_eq!(high, one_by_2p31pi(8, 320).unwrap());
    }

    #[test]
    fn too_few_limbs() {
        assert_eq!(
            one_by_2p31pi(6, 320),
            Err(TableGenError::TooFewLimbs {
                requested: 6,
                required: 8
            })
        );
    }
}
