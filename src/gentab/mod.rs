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

//! Generator for the evaluator's constant tables.
//!
//! Fits `sin(pi * t)` with Chebyshev economized Taylor series, converts the
//! coefficients to the fixed-point words the evaluator consumes and derives
//! the `1/pi` bit string used by the argument reduction.

mod emit;
mod poly;
mod recip_pi;
mod segments;

use crate::err::TableGenError;
use crate::math::{NEAR_ZERO_CUBIC_Q29, NEAR_ZERO_PI_Q30, ONE_BY_2P31PI, SIN_PI_TAB};
use poly::Economizer;

pub use emit::{TableDisplay, TableFormat};
pub use segments::{NearZeroFit, SEGMENTS, SegmentFit};

/// Generator settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Degree of the per-segment polynomials, `1..=3`.
    pub grade: usize,
    /// Number of 32 bit limbs of `2^-63 / pi`, at least 8.
    pub recip_limbs: usize,
    /// MPFR precision of `pi` and its reciprocal, raised to `32 * recip_limbs`.
    pub guard_bits: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            grade: 3,
            recip_limbs: 8,
            guard_bits: 320,
        }
    }
}

/// Everything the generator produces.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedTables {
    pub one_by_2p31pi: Vec<u32>,
    pub segments: Vec<SegmentFit>,
    pub near_zero: NearZeroFit,
    /// Accumulator at the very top of the last segment.
    pub max_accumulator: u32,
}

impl GeneratedTables {
    /// Segment words in the layout of [`crate::SIN_PI_TAB`].
    pub fn sin_pi_tab(&self) -> Vec<[u32; 4]> {
        self.segments.iter().map(|s| s.words).collect()
    }

    pub fn max_segment_error(&self) -> f64 {
        self.segments
            .iter()
            .map(SegmentFit::max_error)
            .fold(0., f64::max)
    }

    /// Renders the tables as source text.
    pub fn display(&self, format: TableFormat) -> TableDisplay<'_> {
        TableDisplay {
            tables: self,
            format,
        }
    }
}

/// Runs the whole generator.
///
/// Fails without producing anything once a discarded coefficient survives
/// the economization or a segment would leave the evaluator's `u32`
/// accumulator.
pub fn generate_tables(options: &TableOptions) -> Result<GeneratedTables, TableGenError> {
    if !(1..=3).contains(&options.grade) {
        return Err(TableGenError::UnsupportedGrade {
            grade: options.grade,
        });
    }
    let econ = Economizer::new();
    let near_zero = segments::fit_near_zero(&econ, segments::START)?;
    let (segments, max_accumulator) = segments::fit_segments(&econ, options.grade)?;
    let one_by_2p31pi = recip_pi::one_by_2p31pi(options.recip_limbs, options.guard_bits)?;

    let tables = GeneratedTables {
        one_by_2p31pi,
        segments,
        near_zero,
        max_accumulator,
    };
    tracing::info!(
        max_error = tables.max_segment_error(),
        max_accumulator = format_args!("{:#x}", tables.max_accumulator),
        "generated {} segments",
        tables.segments.len()
    );
    Ok(tables)
}

/// Checks generated tables against the constants compiled into the
/// evaluator.
///
/// A longer reciprocal passes as long as it starts with the embedded limbs.
pub fn verify_embedded(tables: &GeneratedTables) -> Result<(), TableGenError> {
    if tables.near_zero.pi_q30 != NEAR_ZERO_PI_Q30 {
        return Err(TableGenError::NearZeroMismatch {
            name: "NEAR_ZERO_PI_Q30",
            generated: tables.near_zero.pi_q30,
            embedded: NEAR_ZERO_PI_Q30,
        });
    }
    if tables.near_zero.cubic_q29 != NEAR_ZERO_CUBIC_Q29 {
        return Err(TableGenError::NearZeroMismatch {
            name: "NEAR_ZERO_CUBIC_Q29",
            generated: tables.near_zero.cubic_q29,
            embedded: NEAR_ZERO_CUBIC_Q29,
        });
    }
    for index in 0..ONE_BY_2P31PI.len() {
        if tables.one_by_2p31pi.get(index) != Some(&ONE_BY_2P31PI[index]) {
            return Err(TableGenError::TableMismatch {
                table: "ONE_BY_2P31PI",
                index,
            });
        }
    }
    for index in 0..SIN_PI_TAB.len().max(tables.segments.len()) {
        let generated = tables.segments.get(index).map(|s| s.words);
        if generated.as_ref() != SIN_PI_TAB.get(index) {
            return Err(TableGenError::TableMismatch {
                table: "SIN_PI_TAB",
                index,
            });
        }
    }
    tracing::debug!("generated tables match the embedded constants");
    Ok(())
}
