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
use thiserror::Error;

/// Violated numerical invariant while generating the evaluator tables.
///
/// The generator never emits a table once one of these fires.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableGenError {
    #[error("polynomial grade {grade} is not supported, the segment table holds cubics")]
    UnsupportedGrade { grade: usize },
    #[error("discarded coefficient of degree {degree} is {value:e} ({})", segment_name(.segment))]
    ResidualTerm {
        segment: Option<usize>,
        degree: usize,
        value: f64,
    },
    #[error("segment {segment} accumulator reaches {value:#x}, outside of u32")]
    AccumulatorOverflow { segment: usize, value: i64 },
    #[error("reciprocal table needs at least {required} limbs, {requested} requested")]
    TooFewLimbs { requested: usize, required: usize },
    #[error("{name} is {generated:#010x} but the evaluator embeds {embedded:#010x}")]
    NearZeroMismatch {
        name: &'static str,
        generated: u32,
        embedded: u32,
    },
    #[error("{table} differs from the embedded table at index {index}")]
    TableMismatch { table: &'static str, index: usize },
}

fn segment_name(segment: &Option<usize>) -> String {
    match segment {
        Some(i) => format!("segment {i}"),
        None => "near zero fit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = TableGenError::ResidualTerm {
            segment: Some(3),
            degree: 5,
            value: 1e-12,
        };
        assert_eq!(
            e.to_string(),
            "discarded coefficient of degree 5 is 1e-12 (segment 3)"
        );
        let e = TableGenError::ResidualTerm {
            segment: None,
            degree: 4,
            value: 2.5e-19,
        };
        assert!(e.to_string().ends_with("(near zero fit)"));
        let e = TableGenError::AccumulatorOverflow {
            segment: 31,
            value: 0x1_0000_0038,
        };
        assert_eq!(
            e.to_string(),
            "segment 31 accumulator reaches 0x100000038, outside of u32"
        );
    }
}
