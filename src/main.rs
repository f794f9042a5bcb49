use std::f64::consts::PI;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use ndarray::{Array1, Array2};
use rusty_spectrum::{
    frequency_bins, power_spectrum, Complex64, MatrixTransform, Signal, Spectrum, Transformer,
    VectorTransform,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// compute the DFT of a sequence or of a matrix's columns/rows
    Transform {
        #[arg(short, long, value_enum, default_value_t = Kind::Vector)]
        kind: Kind,
        /// comma-separated samples; rows of a matrix are separated by ';' (e.g. "0,8;1,7;")
        #[arg(short, long)]
        data: Option<String>,
        /// transform length, defaults to the native length
        #[arg(short)]
        n: Option<usize>,
        /// transform axis: 1 = columns, 2 = rows
        #[arg(long)]
        dim: Option<usize>,
        /// matrix only: process lanes one after another instead of on the thread pool
        #[arg(long, conflicts_with = "threads")]
        serial: bool,
        /// matrix only: number of worker threads for lane processing
        #[arg(long)]
        threads: Option<usize>,
    },
    /// print the one-sided power spectrum of a sequence
    Power {
        /// comma-separated samples, defaults to 64 samples of 2·sin(10 Hz) + sin(20 Hz)
        #[arg(short, long)]
        samples: Option<String>,
        /// transform length, defaults to the number of samples
        #[arg(short)]
        n: Option<usize>,
        /// sampling rate in Hz
        #[arg(long, default_value_t = 100.0)]
        sample_rate: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Vector,
    Matrix,
}

fn main() -> Result<()> {
    // initialize the logger
    env_logger::init();

    // parse command-line arguments
    let args = Args::parse();

    match args.command {
        Command::Transform {
            kind,
            data,
            n,
            dim,
            serial,
            threads,
        } => {
            let signal = match data {
                Some(data) => parse_signal(&data)?,
                None => default_signal(kind),
            };
            let mut transformer = match kind {
                Kind::Vector => Transformer::vector(),
                Kind::Matrix => {
                    let mut matrix = MatrixTransform::new().with_parallel(!serial);
                    if let Some(threads) = threads {
                        let pool = rayon::ThreadPoolBuilder::new()
                            .num_threads(threads)
                            .build()
                            .context("failed to build the lane thread pool")?;
                        matrix = matrix.with_thread_pool(Arc::new(pool));
                    }
                    Transformer::Matrix(matrix)
                }
            };

            info!("running {} transform", transformer.name());
            let spectrum = transformer.apply(&signal, n, dim)?;
            print_spectrum(&spectrum);
        }
        Command::Power {
            samples,
            n,
            sample_rate,
        } => {
            let x = match samples {
                Some(samples) => Array1::from(parse_row(&samples)?),
                None => two_tone(64, sample_rate),
            };
            let n = n.unwrap_or(x.len());

            info!("computing {}-point power spectrum at {} Hz", n, sample_rate);
            let spectrum = VectorTransform::new().transform_n(x.view(), n)?;
            let power = power_spectrum(spectrum.view());
            let bins = frequency_bins(n, sample_rate)?;

            println!("{:>12}\t{:>12}", "frequency", "power");
            for (freq, p) in bins.iter().zip(power.iter()) {
                println!("{:>9.4} Hz\t{:>12.6}", freq, p);
            }
        }
    }

    Ok(())
}

fn ramp() -> Array1<f64> {
    Array1::range(0.0, 8.0, 1.0)
}

/// `2·sin(2π·10t) + sin(2π·20t)` sampled `len` times at `sample_rate`.
fn two_tone(len: usize, sample_rate: f64) -> Array1<f64> {
    Array1::from_shape_fn(len, |i| {
        let t = i as f64 / sample_rate;
        2.0 * (2.0 * PI * 10.0 * t).sin() + (2.0 * PI * 20.0 * t).sin()
    })
}

fn default_signal(kind: Kind) -> Signal {
    match kind {
        Kind::Vector => Signal::Sequence(ramp()),
        Kind::Matrix => Signal::Matrix(Array2::from_shape_fn((8, 2), |(r, c)| {
            if c == 0 {
                r as f64
            } else {
                8.0 - r as f64
            }
        })),
    }
}

/// A `;` anywhere in `data` makes it a matrix, one row per non-empty segment.
fn parse_signal(data: &str) -> Result<Signal> {
    if !data.contains(';') {
        return Ok(Signal::Sequence(Array1::from(parse_row(data)?)));
    }

    let rows = data
        .split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(parse_row)
        .collect::<Result<Vec<_>>>()?;

    let width = rows.first().map_or(0, Vec::len);
    if let Some(bad) = rows.iter().position(|row| row.len() != width) {
        bail!(
            "matrix row {} has {} samples, expected {}",
            bad,
            rows[bad].len(),
            width
        );
    }

    let height = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((height, width), flat).context("invalid matrix shape")?;
    Ok(Signal::Matrix(matrix))
}

fn parse_row(row: &str) -> Result<Vec<f64>> {
    row.split(',')
        .map(|value| {
            let value = value.trim();
            value
                .parse::<f64>()
                .with_context(|| format!("invalid sample `{}`", value))
        })
        .collect()
}

fn format_complex(c: &Complex64) -> String {
    format!("({:.4},{:.4})", c.re, c.im)
}

fn print_spectrum(spectrum: &Spectrum) {
    match spectrum {
        Spectrum::Sequence(y) => {
            for value in y.iter() {
                println!("{}", format_complex(value));
            }
        }
        Spectrum::Matrix(y) => {
            for row in y.rows() {
                let line: Vec<String> = row.iter().map(format_complex).collect();
                println!("{}", line.join("  "));
            }
        }
    }
}
