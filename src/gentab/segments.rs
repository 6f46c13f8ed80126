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
use crate::err::TableGenError;
use crate::gentab::poly::{Economizer, Poly, divide_by_x, horner, sine_series};
use pxfm::f_sinpi;
use std::f64::consts::PI;

/// Number of rows of the segment table.
pub const SEGMENTS: usize = 32;
/// Width of one segment in half turns.
const STEP: f64 = 0.5 / SEGMENTS as f64;
/// Lower end of the first segment; the near-zero polynomial owns `[0, START)`.
pub(crate) const START: f64 = STEP * 0.5;
/// Coefficients above the fit grade must have been cancelled to this.
const RESIDUAL_LIMIT: f64 = 1e-20;
/// Degree of the Taylor series the near-zero fit is economized to.
const NEAR_ZERO_GRADE: usize = 3;

/// One fitted row of the sine segment table.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentFit {
    /// Interval `[lower, upper]` in half turns.
    pub lower: f64,
    pub upper: f64,
    /// Point the polynomial is centred on.
    pub base: f64,
    /// `sin(pi * (base + d))` coefficients of `d^0 ..= d^3`.
    pub coefficients: [f64; 4],
    /// Fixed-point words `[c3, c2, c1, c0]` as the evaluator reads them.
    pub words: [u32; 4],
    /// Relative error `1 - p / sin` at both ends.
    pub error_lower: f64,
    pub error_upper: f64,
}

impl SegmentFit {
    pub fn max_error(&self) -> f64 {
        self.error_lower.abs().max(self.error_upper.abs())
    }
}

/// Even fit of `sin(pi * t) / t` around zero.
#[derive(Clone, Debug, PartialEq)]
pub struct NearZeroFit {
    pub half_width: f64,
    /// Coefficients of `t^0` and `t^2`.
    pub pi_term: f64,
    pub cubic_term: f64,
    /// `pi` in Q30, rounded.
    pub pi_q30: u32,
    /// Negated `t^2` coefficient in Q29, rounded.
    pub cubic_q29: u32,
    /// Relative error at `half_width`.
    pub error: f64,
}

fn check_residuals(p: &Poly, grade: usize, segment: Option<usize>) -> Result<(), TableGenError> {
    for (degree, &value) in p.iter().enumerate().skip(grade + 1) {
        if value.abs() > RESIDUAL_LIMIT {
            return Err(TableGenError::ResidualTerm {
                segment,
                degree,
                value,
            });
        }
    }
    Ok(())
}

/// Odd terms up to `grade` of a fit to an even function must vanish.
fn check_even(p: &Poly, grade: usize) -> Result<(), TableGenError> {
    for (degree, &value) in p.iter().enumerate().take(grade + 1).skip(1).step_by(2) {
        if value.abs() > RESIDUAL_LIMIT {
            return Err(TableGenError::ResidualTerm {
                segment: None,
                degree,
                value,
            });
        }
    }
    Ok(())
}

/// Fits `sin(pi * t) ~= (p0 + p2 * t^2) * t` on `[-half_width, half_width]`.
///
/// The series is divided by `t` before fitting so the economization bounds
/// the relative rather than the absolute error.
pub(crate) fn fit_near_zero(
    econ: &Economizer,
    half_width: f64,
) -> Result<NearZeroFit, TableGenError> {
    let s = econ.transform(&sine_series(), PI, 0.);
    let s = divide_by_x(&s);
    let sa = econ.approximate(&s, -half_width, half_width, NEAR_ZERO_GRADE);

    check_residuals(&sa, NEAR_ZERO_GRADE, None)?;
    check_even(&sa, NEAR_ZERO_GRADE)?;

    let a = half_width;
    let error = 1. - horner(&sa[..=NEAR_ZERO_GRADE], a) * a / f_sinpi(a);
    let fit = NearZeroFit {
        half_width,
        pi_term: sa[0],
        cubic_term: sa[2],
        pi_q30: (sa[0] * (1u64 << 30) as f64 + 0.5) as u32,
        cubic_q29: (-sa[2] * (1u64 << 29) as f64 + 0.5) as u32,
        error,
    };
    tracing::info!(
        pi = format_args!("{:#010x}", fit.pi_q30),
        cubic = format_args!("{:#010x}", fit.cubic_q29),
        error = fit.error,
        "near zero polynomial"
    );
    Ok(fit)
}

/// Largest offset within a segment, in units of `2^-31` half turns.
const SEGMENT_TOP: i64 = (1 << 25) - 1;

/// Runs the evaluator's fixed-point Horner scheme on the signed words
/// without wrapping, failing if any stage leaves the `u32` range.
fn accumulate(segment: usize, words: [i64; 4], d: i64) -> Result<u32, TableGenError> {
    let in_range = |value: i64| {
        if (0..=u32::MAX as i64).contains(&value) {
            Ok(value)
        } else {
            Err(TableGenError::AccumulatorOverflow { segment, value })
        }
    };
    let [c3, c2, c1, c0] = words;
    let acc = in_range(((c3 * d) >> 32) + c2)?;
    let d = d << 3;
    let acc = in_range(c1 - ((acc * d) >> 32))?;
    let acc = in_range(((acc * d) >> 32) + c0)?;
    Ok(acc as u32)
}

/// Checks both ends of the part of a segment the evaluator reaches and
/// returns the accumulator at the top.
fn check_accumulator(segment: usize, words: [i64; 4]) -> Result<u32, TableGenError> {
    // Row 0 is only entered from 2^-7 half turns on.
    let bottom = if segment == 0 { 1 << 24 } else { 0 };
    accumulate(segment, words, bottom)?;
    accumulate(segment, words, SEGMENT_TOP)
}

/// Fits every segment of `[0, 1/2)` half turns with a polynomial of the
/// given grade, re-centred at the segment start.
///
/// Returns the rows and the accumulator at the top of the last segment,
/// the largest value the evaluator ever forms.
pub(crate) fn fit_segments(
    econ: &Economizer,
    grade: usize,
) -> Result<(Vec<SegmentFit>, u32), TableGenError> {
    let series = sine_series();
    let mut fits = Vec::with_capacity(SEGMENTS);
    let mut max_accumulator = 0;
    let mut a = START;
    while a < 0.5 {
        // The first segment runs from START up to the first full step.
        let b = if a == START { STEP } else { a + STEP };
        let base = if a == START { 0. } else { a };
        let segment = fits.len();

        let sa = econ.transform(&series, PI, base * PI);
        let sa = econ.approximate(&sa, a - base, b - base, grade);
        check_residuals(&sa, grade, Some(segment))?;

        let coefficients = [sa[0], sa[1], sa[2], sa[3]];
        let eval = |t: f64| horner(&coefficients, t - base);
        let error_lower = 1. - eval(a) / f_sinpi(a);
        let error_upper = 1. - eval(b) / f_sinpi(b);

        // Truncated towards zero; row 0's constant term is slightly
        // negative and wraps.
        let signed = [
            (-sa[3] * (1u64 << 29) as f64) as i64,
            (-sa[2] * (1u64 << 28) as f64) as i64,
            (sa[1] * (1u64 << 30) as f64) as i64,
            (sa[0] * (1u64 << 32) as f64) as i64,
        ];
        let fit = SegmentFit {
            lower: a,
            upper: b,
            base,
            coefficients,
            words: signed.map(|w| w as u32),
            error_lower,
            error_upper,
        };
        max_accumulator = check_accumulator(segment, signed)?;
        tracing::debug!(
            segment,
            lower = a,
            upper = b,
            error_lower,
            error_upper,
            "fitted sine segment"
        );
        fits.push(fit);
        a = b;
    }
    Ok((fits, max_accumulator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gentab::poly::MAX_DEGREE;

    #[test]
    fn near_zero_words() {
        let econ = Economizer::new();
        let fit = fit_near_zero(&econ, START).unwrap();
        assert_eq!(fit.pi_q30, 0xc90f_daa1);
        assert_eq!(fit.cubic_q29, 0xa55c_a0c7);
        // The dropped t^4 term, pi^5 / 120 * t^4, shifts the constant term by
        // about an eighth of its size at the interval end.
        assert!((fit.pi_term - PI).abs() < 2e-9, "{}", fit.pi_term - PI);
        assert!(fit.error.abs() < 1e-9, "{}", fit.error);
    }

    #[test]
    fn segments_tile_the_quarter_turn() {
        let econ = Economizer::new();
        let (fits, top) = fit_segments(&econ, 3).unwrap();
        assert_eq!(fits.len(), SEGMENTS);
        assert_eq!(fits[0].lower, START);
        assert_eq!(fits[0].base, 0.);
        assert_eq!(fits[SEGMENTS - 1].upper, 0.5);
        for pair in fits.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
            assert_eq!(pair[1].base, pair[1].lower);
        }
        for (i, fit) in fits.iter().enumerate() {
            assert!(fit.max_error() < 5e-9, "segment {i}: {}", fit.max_error());
        }
        assert_eq!(top, 0xffff_fff7);
    }

    #[test]
    fn first_row_constant_wraps() {
        let econ = Economizer::new();
        let (fits, _) = fit_segments(&econ, 3).unwrap();
        assert_eq!(fits[0].words, [0xa540_d19c, 0x0000_5575, 0xc90f_dd84, 0xffff_fff8]);
        assert!(fits[0].coefficients[0] < 0.);
    }

    #[test]
    fn accumulator_range_is_checked() {
        let err = accumulate(7, [0, 0, 0, -1], 0).unwrap_err();
        assert_eq!(
            err,
            TableGenError::AccumulatorOverflow {
                segment: 7,
                value: -1
            }
        );
        assert_eq!(accumulate(0, [0, 0, 0, 5], SEGMENT_TOP), Ok(5));
    }

    #[test]
    fn quadratic_overflows_last_segment() {
        let econ = Economizer::new();
        let err = fit_segments(&econ, 2).unwrap_err();
        assert!(
            matches!(err, TableGenError::AccumulatorOverflow { segment: 31, value } if value > u32::MAX as i64),
            "{err:?}"
        );
    }

    #[test]
    fn residual_above_grade_is_rejected() {
        let mut p = [0f64; MAX_DEGREE + 1];
        p[..4].copy_from_slice(&[1., 2., 3., 4.]);
        assert_eq!(check_residuals(&p, 3, Some(4)), Ok(()));
        p[6] = 1e-12;
        assert!(matches!(
            check_residuals(&p, 3, Some(4)),
            Err(TableGenError::ResidualTerm {
                segment: Some(4),
                degree: 6,
                ..
            })
        ));
        // Below the limit counts as cancelled.
        p[6] = 1e-21;
        assert_eq!(check_residuals(&p, 3, None), Ok(()));
    }

    #[test]
    fn odd_term_in_even_fit_is_rejected() {
        let econ = Economizer::new();
        let s = divide_by_x(&econ.transform(&sine_series(), PI, 0.));
        let mut sa = econ.approximate(&s, -START, START, NEAR_ZERO_GRADE);
        assert_eq!(check_even(&sa, NEAR_ZERO_GRADE), Ok(()));
        // An odd term outside the grade is left to the residual check.
        sa[5] = 1.;
        assert_eq!(check_even(&sa, NEAR_ZERO_GRADE), Ok(()));
        sa[3] = -1e-10;
        assert!(matches!(
            check_even(&sa, NEAR_ZERO_GRADE),
            Err(TableGenError::ResidualTerm {
                segment: None,
                degree: 3,
                ..
            })
        ));
        sa[1] = 1e-15;
        assert!(matches!(
            check_even(&sa, NEAR_ZERO_GRADE),
            Err(TableGenError::ResidualTerm {
                segment: None,
                degree: 1,
                ..
            })
        ));
    }
}
