use std::error::Error;

use clap::{error::ErrorKind, Parser};
use tracing::info;

use crate::constants::demo::{SORTED_HEADING, UNSORTED_HEADING};
use crate::dataset;
use crate::metrics::value_summary;
use crate::sort::{merge_sort, par_merge_sort};

#[derive(Debug, Parser)]
#[command(
    name = "population_demo",
    disable_help_subcommand = true,
    about = "Sort the bundled country dataset by population",
    long_about = "Print the bundled country dataset in its published order, sort it into descending population order without leaving the chain representation, and print the sorted listing."
)]
struct PopulationDemoCli {
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_positive_usize,
        help = "Limit the dataset to its first N records"
    )]
    limit: Option<usize>,
    #[arg(long, help = "Sort the chain halves on rayon worker threads")]
    parallel: bool,
    #[arg(long, help = "Print aggregate value statistics after sorting")]
    summary: bool,
}

/// Runs the population demo: print the dataset, sort it, print it again.
///
/// `args_iter` carries the process arguments without the binary name, the
/// same calling convention the thin binary shim uses.
pub fn run_population_demo<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<PopulationDemoCli, _>(
        std::iter::once("population_demo".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let chain = dataset::country_population_chain_with_limit(cli.limit)?;
    info!(records = chain.len(), "built population chain");

    println!("{UNSORTED_HEADING}");
    println!("{chain}");

    let sorted = if cli.parallel {
        par_merge_sort(chain)
    } else {
        merge_sort(chain)
    };

    println!();
    println!("{SORTED_HEADING}");
    println!("{sorted}");

    if cli.summary {
        let summary = value_summary(&sorted);
        println!();
        println!(
            "{} records, total population {}, largest {}, smallest {}, mean {:.1}",
            summary.count, summary.total, summary.max, summary.min, summary.mean
        );
    }

    Ok(())
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .parse::<usize>()
        .map_err(|_| format!("Could not parse --limit value '{}' as a positive integer", raw))?;
    if parsed == 0 {
        return Err("--limit must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_usize_accepts_positive_values() {
        assert_eq!(parse_positive_usize("12"), Ok(12));
    }

    #[test]
    fn parse_positive_usize_rejects_zero_and_garbage() {
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("ten").is_err());
    }
}
