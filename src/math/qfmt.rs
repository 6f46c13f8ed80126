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

//! Q32 fixed-point primitives.
//!
//! Everything the evaluator needs is built from a 32x32->64 bit multiply and
//! leading zero/sign counts, which software float targets provide cheaply.

/// High half of the 64 bit product, i.e. `a * b` with `b` read as a Q32
/// fraction.
#[inline(always)]
pub(crate) const fn mul_hi(a: u32, b: u32) -> u32 {
    ((a as u64 * b as u64) >> 32) as u32
}

/// Low half of the 64 bit product.
#[inline(always)]
pub(crate) const fn mul_lo(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

#[inline(always)]
pub(crate) const fn mul_wide(a: u32, b: u32) -> u64 {
    a as u64 * b as u64
}

/// Number of redundant sign bits below the sign bit, `0..=31`.
#[inline(always)]
pub(crate) const fn clrsb(v: i32) -> u32 {
    ((v ^ (v >> 31)) as u32).leading_zeros() - 1
}

/// Same count for a 64 bit word, `0..=63`.
#[inline(always)]
pub(crate) const fn clrsb64(v: i64) -> u32 {
    ((v ^ (v >> 63)) as u64).leading_zeros() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q32_multiply() {
        assert_eq!(mul_hi(0x8000_0000, 0x8000_0000), 0x4000_0000);
        assert_eq!(mul_hi(u32::MAX, u32::MAX), 0xffff_fffe);
        assert_eq!(mul_lo(u32::MAX, u32::MAX), 1);
        assert_eq!(mul_wide(u32::MAX, 2), 0x1_ffff_fffe);
    }

    #[test]
    fn redundant_sign_bits() {
        assert_eq!(clrsb(0), 31);
        assert_eq!(clrsb(-1), 31);
        assert_eq!(clrsb(1), 30);
        assert_eq!(clrsb(0x7fff_ffff), 0);
        assert_eq!(clrsb(0x0100_0000), 6);
        assert_eq!(clrsb(i32::MIN), 0);
        assert_eq!(clrsb(-2), 30);
        assert_eq!(clrsb64(1), 62);
        assert_eq!(clrsb64(0x0100_0000_0000_0000), 6);
        assert_eq!(clrsb64(0), 63);
    }
}
