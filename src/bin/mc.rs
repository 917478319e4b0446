use clap::{Parser, Subcommand};
use log::debug;
use maclaurin::prelude::*;

/// MC: Maclaurin calculator.
///
/// Approximates cosine and arctangent by truncated Maclaurin series, and
/// converts angles from radians to degrees. An educational tool: crank the
/// term count up and down and watch the approximation tighten and fray.
#[derive(Parser, Debug)]
#[clap(name = "mc")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Approximate cos(x), x given in radians
    Cos {
        /// Number of series terms to sum
        #[clap(short, long, default_value_t = DEFAULT_TERMS)]
        terms: usize,

        /// Reduce the angle to [-π, π) before summation
        #[clap(short, long)]
        reduce: bool,

        /// Angles, in radians
        #[clap(required = true)]
        args: Vec<f64>,
    },

    /// Approximate atan(x), x a ratio in [-1, 1]
    Atan {
        /// Number of series terms to sum
        #[clap(short, long, default_value_t = DEFAULT_TERMS)]
        terms: usize,

        /// Ratios, in [-1, 1]
        #[clap(required = true)]
        args: Vec<f64>,
    },

    /// Convert angles from radians to degrees
    Deg {
        /// Angles, in radians
        #[clap(required = true)]
        args: Vec<f64>,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    match options.command {
        Command::Cos {
            terms,
            reduce,
            args,
        } => {
            for x in args {
                let arg = if reduce {
                    angular::normalize_symmetric(x)
                } else {
                    x
                };
                debug!("summing {terms} cosine terms at x = {arg}");
                println!("x = {:.2}°", angular::to_degrees(x));
                println!("cos({x}) ≈ {:.6}", series::cosine(arg, terms));
            }
        }

        Command::Atan { terms, args } => {
            for x in args {
                debug!("summing {terms} arctangent terms at x = {x}");
                // A bad value only spoils its own slot, not the whole run
                match series::arctangent(x, terms) {
                    Ok(result) => {
                        println!("x = {:.2}°", angular::to_degrees(x));
                        println!("atan({x}) ≈ {result:.6}");
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
        }

        Command::Deg { args } => {
            for x in args {
                println!("{:.2}°", angular::to_degrees(x));
            }
        }
    }

    Ok(())
}
