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

/// A single precision bit pattern.
///
/// The same 32 bits are read as an IEEE-754 `f32`, as an unsigned word and
/// as a signed word. The views are produced by explicit reinterpretation,
/// so there is only ever one copy of the storage.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SfBits(u32);

impl SfBits {
    /// Canonical quiet NaN returned for non-finite inputs.
    pub const NAN: SfBits = SfBits(0x7fc0_0000);
    /// `1.0`, the cosine of every argument below `2^-12`.
    pub const ONE: SfBits = SfBits(0x3f80_0000);

    pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
    pub(crate) const ABS_MASK: u32 = 0x7fff_ffff;
    pub(crate) const IMPLICIT_BIT: u32 = 0x0080_0000;
    pub(crate) const EXP_SHIFT: u32 = 23;

    #[inline(always)]
    pub const fn from_f32(v: f32) -> Self {
        Self(v.to_bits())
    }

    #[inline(always)]
    pub const fn from_u32(v: u32) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub const fn from_i32(v: i32) -> Self {
        Self(v as u32)
    }

    #[inline(always)]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    #[inline(always)]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    /// Sign bit in place, either `0` or `0x8000_0000`.
    #[inline(always)]
    pub const fn sign(self) -> u32 {
        self.0 & Self::SIGN_MASK
    }

    #[inline(always)]
    pub const fn magnitude(self) -> u32 {
        self.0 & Self::ABS_MASK
    }

    /// Biased exponent field, `0..=255`.
    #[inline(always)]
    pub const fn biased_exponent(self) -> u32 {
        self.magnitude() >> Self::EXP_SHIFT
    }

    /// Exponent field is all ones: infinity or NaN.
    #[inline(always)]
    pub const fn is_non_finite(self) -> bool {
        self.biased_exponent() == 0xff
    }

    /// Significand with the implicit bit restored, left aligned so the
    /// leading one sits in bit 31.
    ///
    /// For a normal number `x` with biased exponent `e` this is
    /// `|x| * 2^(158 - e)`, i.e. the significand in Q31.
    #[inline(always)]
    pub const fn significand_q31(self) -> u32 {
        (self.magnitude() | Self::IMPLICIT_BIT) << 8
    }

    #[inline(always)]
    pub const fn with_sign(self, sign: u32) -> Self {
        Self(self.0 | (sign & Self::SIGN_MASK))
    }
}

impl From<f32> for SfBits {
    #[inline]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<SfBits> for f32 {
    #[inline]
    fn from(value: SfBits) -> Self {
        value.to_f32()
    }
}

impl From<u32> for SfBits {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<SfBits> for u32 {
    #[inline]
    fn from(value: SfBits) -> Self {
        value.to_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_share_storage() {
        let b = SfBits::from_f32(-1.5);
        assert_eq!(b.to_u32(), 0xbfc0_0000);
        assert_eq!(b.to_i32(), 0xbfc0_0000u32 as i32);
        assert!(b.to_i32() < 0);
        assert_eq!(SfBits::from_i32(b.to_i32()), b);
        assert_eq!(b.to_f32(), -1.5);
    }

    #[test]
    fn fields() {
        let b = SfBits::from_f32(-1.5);
        assert_eq!(b.sign(), 0x8000_0000);
        assert_eq!(b.magnitude(), 0x3fc0_0000);
        assert_eq!(b.biased_exponent(), 127);
        assert_eq!(b.significand_q31(), 0xc000_0000);
        assert!(!b.is_non_finite());
        assert!(SfBits::from_f32(f32::INFINITY).is_non_finite());
        assert!(SfBits::from_f32(f32::NAN).is_non_finite());
        assert!(SfBits::NAN.to_f32().is_nan());
        assert_eq!(SfBits::ONE.to_f32(), 1.0);
        assert_eq!(SfBits::ONE.with_sign(0x8000_0000).to_f32(), -1.0);
    }
}
