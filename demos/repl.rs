use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{error, info};

use symdelete::{
    CorrectorKind, DictionaryEntry, LinearCorrector, SpellingCorrector, SymDeleteCorrector,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    SymDelete,
    Linear,
}

/// Interactive spelling-correction REPL: build time, memory delta and entry
/// count on startup, then ranked suggestions per line of input.
#[derive(Debug, Parser)]
#[command(name = "repl")]
struct Cli {
    /// Dictionary file, one `word frequency` pair per line.
    #[arg(default_value = "words_100k.txt")]
    dictionary: PathBuf,

    /// Maximum edit distance considered (build bound and per-query bound).
    #[arg(long, default_value_t = 2)]
    max_edit_distance: usize,

    /// Number of suggestions returned per query.
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Deletion-neighborhood prefix cap; 0 disables truncation.
    #[arg(long, default_value_t = 7)]
    prefix_cap: usize,

    /// Correction strategy to run.
    #[arg(long, value_enum, default_value_t = Strategy::SymDelete)]
    strategy: Strategy,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prefix_cap = if cli.prefix_cap == 0 {
        None
    } else {
        Some(cli.prefix_cap)
    };

    let build_start = Instant::now();
    let (load_result, memory_delta) = symdelete::memory::measure_delta(|| {
        symdelete::load_dictionary(&cli.dictionary)
    });
    let entries: Vec<DictionaryEntry> = match load_result {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to load dictionary {:?}: {err}", cli.dictionary);
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let entry_count = entries.len();

    let corrector = match cli.strategy {
        Strategy::SymDelete => {
            let config = symdelete::IndexConfig {
                max_edit_distance: cli.max_edit_distance,
                prefix_cap,
            };
            match SymDeleteCorrector::from_entries(config, entries.into_iter().map(|e| (e.word, e.frequency))) {
                Ok(c) => CorrectorKind::SymDelete(c),
                Err(err) => {
                    error!("failed to build index: {err}");
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        Strategy::Linear => {
            match LinearCorrector::from_entries(cli.max_edit_distance, entries.into_iter().map(|e| (e.word, e.frequency))) {
                Ok(c) => CorrectorKind::Linear(c),
                Err(err) => {
                    error!("failed to build index: {err}");
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
    };
    let build_time = build_start.elapsed();

    info!("dictionary {:?}: {entry_count} entries in {build_time:?}", cli.dictionary);
    println!("symdelete REPL - dictionary: {:?}", cli.dictionary);
    println!("  build time: {build_time:?}");
    match memory_delta {
        Some(delta) => println!("  memory delta: {delta} bytes"),
        None => println!("  memory delta: unavailable on this platform"),
    }
    println!("  entries: {entry_count}");
    println!(":type text, :q to quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                error!("error reading stdin: {err}");
                std::process::exit(1);
            }
            None => break, // clean EOF
        };

        if line.trim() == ":q" {
            break;
        }

        let query_start = Instant::now();
        for token in line.split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            match corrector.correct(&word, cli.max_edit_distance, cli.top_k) {
                Ok(suggestions) => {
                    for s in suggestions {
                        println!("{} - {} - {}", s.word, s.distance, s.frequency);
                    }
                }
                Err(err) => error!("query {word:?} failed: {err}"),
            }
        }
        println!("  ({:?} elapsed)", query_start.elapsed());
    }

    std::process::exit(0);
}
