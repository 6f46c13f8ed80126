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
use crate::gentab::GeneratedTables;
use std::fmt;

/// Source language of the rendered tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TableFormat {
    /// C initializers for `__one_by_2p31pi` and `__sf_sin_pi_tab`.
    #[default]
    C,
    /// Constants in the layout of this crate's own table module.
    Rust,
}

/// Lazily rendered tables, see [`GeneratedTables::display`].
#[derive(Copy, Clone, Debug)]
pub struct TableDisplay<'a> {
    pub(crate) tables: &'a GeneratedTables,
    pub(crate) format: TableFormat,
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            TableFormat::C => write_c(self.tables, f),
            TableFormat::Rust => write_rust(self.tables, f),
        }
    }
}

fn write_c(t: &GeneratedTables, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let nz = &t.near_zero;
    writeln!(
        f,
        "/* near zero: {:e} {:e} Err {:e} */",
        nz.cubic_term, nz.pi_term, nz.error
    )?;
    writeln!(f, "/* K {:#x} PI {:#x} */", nz.cubic_q29, nz.pi_q30)?;
    writeln!(f)?;
    writeln!(
        f,
        "const uint32_t __one_by_2p31pi[{}] = {{",
        t.one_by_2p31pi.len()
    )?;
    for limb in &t.one_by_2p31pi {
        writeln!(f, "\t{limb:#010x},")?;
    }
    writeln!(f, "}};")?;
    writeln!(f)?;
    writeln!(
        f,
        "const uint32_t __sf_sin_pi_tab[{}][4] = {{",
        t.segments.len()
    )?;
    for s in &t.segments {
        let [c0, c1, c2, c3] = s.coefficients;
        writeln!(f, "/* {c3:e} {c2:e} {c1:e} {c0:e} Err {:e} */", s.max_error())?;
        let [w3, w2, w1, w0] = s.words;
        writeln!(f, "\t{w3:#x}, {w2:#x}, {w1:#x}, {w0:#x},")?;
    }
    writeln!(f, "/* max m: {:x} */", t.max_accumulator)?;
    writeln!(f, "}};")
}

fn write_rust(t: &GeneratedTables, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "pub const ONE_BY_2P31PI: [u32; {}] = [",
        t.one_by_2p31pi.len()
    )?;
    for limb in &t.one_by_2p31pi {
        writeln!(f, "    {limb:#010x},")?;
    }
    writeln!(f, "];")?;
    writeln!(f)?;
    writeln!(
        f,
        "pub const SIN_PI_TAB: [[u32; 4]; {}] = [",
        t.segments.len()
    )?;
    for s in &t.segments {
        let [w3, w2, w1, w0] = s.words;
        writeln!(f, "    [{w3:#010x}, {w2:#010x}, {w1:#010x}, {w0:#010x}],")?;
    }
    writeln!(f, "];")?;
    writeln!(f)?;
    writeln!(
        f,
        "pub const NEAR_ZERO_PI_Q30: u32 = {:#010x};",
        t.near_zero.pi_q30
    )?;
    writeln!(f)?;
    writeln!(
        f,
        "pub const NEAR_ZERO_CUBIC_Q29: u32 = {:#010x};",
        t.near_zero.cubic_q29
    )
}
