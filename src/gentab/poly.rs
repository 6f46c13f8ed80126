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

//! Polynomial algebra for the Chebyshev economization.
//!
//! Polynomials are dense coefficient arrays, index `i` holding the
//! coefficient of `x^i`.

use num_traits::Float;

/// Highest degree carried through the economization.
pub(crate) const MAX_DEGREE: usize = 17;
const LEN: usize = MAX_DEGREE + 1;

pub(crate) type Poly = [f64; LEN];

/// Pascal's triangle up to [`MAX_DEGREE`].
#[derive(Clone, Debug)]
struct Binomials {
    rows: [[u32; LEN]; LEN],
}

impl Binomials {
    fn new() -> Binomials {
        let mut rows = [[0u32; LEN]; LEN];
        for i in 0..LEN {
            rows[i][0] = 1;
            for j in 1..i {
                rows[i][j] = rows[i - 1][j - 1] + rows[i - 1][j];
            }
            rows[i][i] = 1;
        }
        Binomials { rows }
    }

    #[inline]
    fn get(&self, n: usize, k: usize) -> f64 {
        self.rows[n][k] as f64
    }
}

/// Chebyshev polynomials of the first kind, `T_0 ..= T_17`.
fn chebyshev() -> [Poly; LEN] {
    let mut t = [[0f64; LEN]; LEN];
    t[0][0] = 1.;
    t[1][1] = 1.;
    for n in 1..MAX_DEGREE {
        t[n + 1][0] = -t[n - 1][0];
        for i in 1..LEN {
            t[n + 1][i] = 2. * t[n][i - 1] - t[n - 1][i];
        }
    }
    t
}

/// Taylor series of `sin(x)`, odd terms only.
pub(crate) fn sine_series() -> Poly {
    let mut s = [0f64; LEN];
    let mut f = 1f64;
    let mut i = 1i64;
    while i <= MAX_DEGREE as i64 {
        s[i as usize] = 1. / f;
        i += 2;
        f *= ((1 - i) * i) as f64;
    }
    s
}

/// Divides a polynomial with no constant term by `x`.
pub(crate) fn divide_by_x(p: &Poly) -> Poly {
    let mut q = [0f64; LEN];
    q[..MAX_DEGREE].copy_from_slice(&p[1..]);
    q
}

/// Horner evaluation, coefficients in ascending order.
pub(crate) fn horner<T: Float>(coeffs: &[T], x: T) -> T {
    coeffs.iter().rev().fold(T::zero(), |acc, &c| acc * x + c)
}

/// Near minimax fitting by Chebyshev economization.
#[derive(Clone, Debug)]
pub(crate) struct Economizer {
    binomials: Binomials,
    t: [Poly; LEN],
}

impl Economizer {
    pub(crate) fn new() -> Economizer {
        Economizer {
            binomials: Binomials::new(),
            t: chebyshev(),
        }
    }

    /// Affine substitution: `P(x) -> Pa(z)` with `x = f * z + s`.
    pub(crate) fn transform(&self, p: &Poly, f: f64, s: f64) -> Poly {
        let mut sn = [1f64; LEN];
        let mut fn_ = [1f64; LEN];
        for n in 1..LEN {
            fn_[n] = fn_[n - 1] * f;
            sn[n] = sn[n - 1] * s;
        }
        let mut pa = [0f64; LEN];
        for i in 0..LEN {
            for j in 0..=i {
                pa[j] += p[i] * self.binomials.get(i, j) * sn[i - j] * fn_[j];
            }
        }
        pa
    }

    /// Chebyshev basis mapped from `[-1, 1]` onto `[a, b]`.
    fn basis_on(&self, a: f64, b: f64) -> [Poly; LEN] {
        let f = 2. / (b - a);
        let s = -1. - a * f;
        let mut ta = [[0f64; LEN]; LEN];
        for (n, t) in self.t.iter().enumerate() {
            ta[n] = self.transform(t, f, s);
        }
        ta
    }

    /// Reduces `p` to degree `grade`, approximately minimizing the maximum
    /// absolute error on `[a, b]`.
    ///
    /// Terms above `grade` are cancelled from the top down by subtracting
    /// scaled Chebyshev polynomials; their leftovers stay in the array so
    /// callers can check they vanished.
    pub(crate) fn approximate(&self, p: &Poly, a: f64, b: f64, grade: usize) -> Poly {
        let ta = self.basis_on(a, b);
        let mut p = *p;
        for i in (grade + 1..LEN).rev() {
            let f = p[i] / ta[i][i];
            for j in 0..=i {
                p[j] -= ta[i][j] * f;
            }
        }
        p
    }
}
