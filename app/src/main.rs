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
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sftrig::{TableFormat, TableOptions, generate_tables, verify_embedded};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// C initializers for __one_by_2p31pi and __sf_sin_pi_tab
    C,
    /// Rust constants for `src/math/tables.rs`
    Rust,
}

impl From<Format> for TableFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::C => TableFormat::C,
            Format::Rust => TableFormat::Rust,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generates the sin(pi x) segment table and the 1/pi limbs")]
struct Args {
    /// Degree of the per segment polynomials
    #[arg(long, default_value_t = TableOptions::default().grade)]
    grade: usize,
    /// Number of 32 bit limbs of 2^-63 / pi
    #[arg(long, default_value_t = TableOptions::default().recip_limbs)]
    limbs: usize,
    /// MPFR precision of pi and its reciprocal
    #[arg(long, default_value_t = TableOptions::default().guard_bits)]
    guard_bits: usize,
    #[arg(long, value_enum, default_value_t = Format::C)]
    format: Format,
    /// Write the tables here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Fail unless the result matches the tables compiled into sftrig
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let options = TableOptions {
        grade: args.grade,
        recip_limbs: args.limbs,
        guard_bits: args.guard_bits,
    };
    let tables = generate_tables(&options).context("generating tables")?;
    if args.verify {
        verify_embedded(&tables).context("comparing with the embedded tables")?;
        info!("tables match sftrig's embedded constants");
    }

    let rendered = tables.display(args.format.into());
    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write!(out, "{rendered}")?;
            out.flush()?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            write!(out, "{rendered}")?;
            out.flush()?;
        }
    }
    Ok(())
}
