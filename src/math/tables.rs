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

//! Constants consumed by the evaluator.
//!
//! Produced by [`crate::generate_tables`] with the default
//! [`crate::TableOptions`]; [`crate::verify_embedded`] checks that the
//! generator still reproduces them bit for bit.

/// `2^-63 / pi` as big-endian 32 bit limbs: limb `k` holds the bits of
/// weight `2^(-32k - 1) .. 2^(-32k - 32)`.
///
/// For a biased exponent `e >= 96` the window starting at limb `e / 32 - 3`,
/// shifted left by `e % 32`, is `2^(e - 127) / pi` modulo 2^32 in Q32,
/// which turns the Q31 significand into turns of `2 pi`.
pub const ONE_BY_2P31PI: [u32; 8] = [
    0x00000000,
    0x00000000,
    0xa2f9836e,
    0x4e441529,
    0xfc2757d1,
    0xf534ddc0,
    0xdb629599,
    0x3c439041,
];

/// Segment coefficients `[c3, c2, c1, c0]` of `sin(pi * t)` over
/// `t in [i/64, (i+1)/64)`, in Q29, Q28, Q30 and Q32.
///
/// With `d = t - i/64` the segment evaluates `c0 + d * (c1 - d * (c2 + d * c3))`.
/// Row 0 is fitted on `[1/128, 1/64]`; its `c0` is slightly negative and is
/// stored as a wrapped two's complement word.
pub const SIN_PI_TAB: [[u32; 4]; 32] = [
    [0xa540d19c, 0x00005575, 0xc90fdd84, 0xfffffff8],
    [0xa4e99ba8, 0x03e02504, 0xc8d1dbbd, 0x0c8fb2f7],
    [0xa41df35a, 0x07bdce3e, 0xc81802b0, 0x1917a6bb],
    [0xa2ed13ef, 0x0b96b13e, 0xc6e2c271, 0x259020db],
    [0xa157b96d, 0x0f686e9a, 0xc532d9b7, 0x31f17077],
    [0x9f5eddd1, 0x1330ab53, 0xc30952e1, 0x3e33f2f4],
    [0x9d03b879, 0x16ed1246, 0xc0678350, 0x4a5018b8],
    [0x9a47bd5d, 0x1a9b559d, 0xbd4f0a91, 0x563e69d3],
    [0x972c9c30, 0x1e39303a, 0xb9c1d163, 0x61f78a97],
    [0x93b43f53, 0x21c4671b, 0xb5c20882, 0x6d744023],
    [0x8fe0caa6, 0x253acac1, 0xb1522754, 0x78ad74dc],
    [0x8bb49a37, 0x289a3884, 0xac74ea60, 0x839c3cc4],
    [0x873240cf, 0x2be09be2, 0xa72d519f, 0x8e39d9c8],
    [0x825c8658, 0x2f0befce, 0xa17e9ea1, 0x987fbfe2],
    [0x7d366629, 0x321a3fe9, 0x9b6c528c, 0xa2679922],
    [0x77c30d2f, 0x3509a9bb, 0x94fa2bf6, 0xabeb499e],
    [0x7205d7f5, 0x37d85dd9, 0x8e2c248d, 0xb504f32e],
    [0x6c025096, 0x3a84a104, 0x87066eaf, 0xbdaef90d],
    [0x65bc2c88, 0x3d0ccd3c, 0x7f8d72c8, 0xc5e40352],
    [0x5f374a5a, 0x3f6f52c3, 0x77c5cca2, 0xcd9f0238],
    [0x5877af48, 0x41aab911, 0x6fb4488c, 0xd4db3141],
    [0x518184ca, 0x43bd9fc1, 0x675de060, 0xdb941a21],
    [0x4a5915fa, 0x45a6bf67, 0x5ec7b876, 0xe1c59784],
    [0x4302ccf6, 0x4764ea5c, 0x55f71c7a, 0xe76bd79a],
    [0x3b833020, 0x48f70d76, 0x4cf17c1f, 0xec835e72],
    [0x33dedf58, 0x4a5c30b2, 0x43bc67ce, 0xf1090820],
    [0x2c1a9122, 0x4b9377cf, 0x3a5d8d34, 0xf4fa0aae],
    [0x243b0fbb, 0x4c9c22d4, 0x30dab3c1, 0xf853f7d4],
    [0x1c453627, 0x4d758e86, 0x2739b917, 0xfb14be77],
    [0x143ded32, 0x4e1f34cf, 0x1d808d6e, 0xfd3aabf0],
    [0x0c2a2869, 0x4e98ad0e, 0x13b52fea, 0xfec46d16],
    [0x040ee30a, 0x4ee1ac59, 0x09ddaae5, 0xffb10f13],
];

/// `pi` in Q30, leading coefficient of the near-zero polynomial.
pub const NEAR_ZERO_PI_Q30: u32 = 0xc90fdaa1;

/// `pi^3 / 6` in Q29, adjusted by the economization for the dropped
/// fifth order term.
pub const NEAR_ZERO_CUBIC_Q29: u32 = 0xa55ca0c7;
