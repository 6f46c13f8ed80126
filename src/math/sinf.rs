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
use crate::math::reduce::{REDUCTION_MIN_EXPONENT, reduce};
use crate::math::sinpi::sin_half_turns;

/// Sine of a single precision bit pattern, integer arithmetic only.
///
/// Shares the reduction and the segment table with [`crate::cosf_bits`].
/// Small arguments are carried by the near-zero polynomial, which keeps the
/// error relative; below `2^-31` the argument is returned unchanged.
///
/// Max found ULP 1.2
#[inline]
pub const fn sinf_bits(x: u32) -> u32 {
    let x = SfBits::from_u32(x);
    if x.is_non_finite() {
        return SfBits::NAN.to_u32();
    }
    if x.biased_exponent() < REDUCTION_MIN_EXPONENT {
        return x.to_u32();
    }
    sin_half_turns(reduce(x, 0)) ^ x.sign()
}

/// Sine function
///
/// See [`sinf_bits`].
#[inline]
pub const fn sinf(x: f32) -> f32 {
    f32::from_bits(sinf_bits(x.to_bits()))
}
