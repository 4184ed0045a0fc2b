mod app;
mod config;
mod error;
mod filter;
mod helpers;
mod logging;
mod manager;
mod output;
mod ranker;
mod record;

use std::{path::PathBuf, process::ExitCode};

use gumdrop::Options;
use tracing::debug;

use crate::{
    config::Config,
    error::Result,
    filter::FilterSpec,
    helpers::nice_kib,
    manager::SysinfoLister,
    ranker::Ranking,
};

#[derive(Options)]
struct Args {
    #[options(help = "File holding the process name pattern", meta = "<FILE>")]
    input: Option<PathBuf>,

    #[options(help = "File to write the ranked pids to", meta = "<FILE>")]
    output: Option<PathBuf>,

    #[options(help = "Use this pattern instead of reading the input file", meta = "<NAME>")]
    pattern: Option<String>,

    #[options(help = "Print the ranked processes to stdout")]
    list: bool,

    #[options(help = "Exit with status 2 when no process matches")]
    strict: bool,

    #[options(help = "Verbose logging")]
    verbose: bool,

    #[options(help = "Print help message")]
    help: bool,
}

fn main() -> ExitCode {
    let ops = Args::parse_args_default_or_exit();
    logging::init(ops.verbose);

    let mut config = Config::load();
    if let Some(input) = ops.input {
        config.input = input;
    }
    if let Some(output) = ops.output {
        config.output = output;
    }
    config.strict |= ops.strict;
    debug!(?config, "effective config");

    match run(&config, ops.pattern.as_deref()) {
        Ok(ranking) => {
            if ops.list {
                print_ranking(&ranking);
            }
            if ranking.is_empty() && config.strict {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

///the pattern is resolved before the process table is read
fn run(config: &Config, pattern: Option<&str>) -> Result<Ranking> {
    let filter = match pattern {
        Some(p) => FilterSpec::new(p)?,
        None => FilterSpec::from_file(&config.input)?,
    };
    let mut lister = SysinfoLister::new();
    app::run(&mut lister, &filter, &config.output)
}

fn print_ranking(ranking: &Ranking) {
    let mut lines: Vec<Vec<String>> = vec![];
    lines.push(vec![
        "rank".to_string(),
        "pid".to_string(),
        "name".to_string(),
        "rss".to_string(),
    ]);
    for (i, p) in ranking.entries.iter().enumerate() {
        lines.push(vec![
            (i + 1).to_string(),
            p.pid.to_string(),
            p.name.to_string(),
            nice_kib(p.memory),
        ]);
    }
    let widths: Vec<usize> = lines[0]
        .iter()
        .enumerate()
        .map(|(i, _)| lines.iter().map(|a| a[i].len()).max().unwrap_or_default() + 1)
        .collect();
    //output each line, buffered by space
    for line in lines {
        for (i, &col) in widths.iter().enumerate() {
            print!("{: <col$}", line[i]);
        }
        println!();
    }
}
