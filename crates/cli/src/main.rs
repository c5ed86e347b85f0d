use anyhow::Result;
use bee_query::QueryEngine;
use clap::Parser;
use std::env;
use std::path::PathBuf;

const DEFAULT_CORPUS: &str = "/usr/share/dict/american-english";
const DEFAULT_INDEX: &str = "spelling-bee-map.json";

#[derive(Parser)]
#[command(name = "spelling-bee")]
#[command(about = "Spelling Bee puzzle solver", long_about = None)]
#[command(version)]
struct Cli {
    /// The seven puzzle letters, in any order (repeats collapse)
    letters: String,

    /// The letter every answer must contain
    center_letter: char,

    /// Index file path (falls back to SPELLING_BEE_INDEX)
    #[arg(long)]
    index: Option<PathBuf>,

    /// Word list used to (re)build the index (falls back to SPELLING_BEE_CORPUS)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Worker threads for index builds (defaults to available cores)
    #[arg(long)]
    workers: Option<usize>,

    /// Rebuild the index before querying, even if it loads cleanly
    #[arg(long)]
    rebuild: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let index = cli
        .index
        .or_else(|| env::var_os("SPELLING_BEE_INDEX").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX));
    let corpus = cli
        .corpus
        .or_else(|| env::var_os("SPELLING_BEE_CORPUS").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));

    let engine = if cli.rebuild {
        QueryEngine::rebuild(&index, &corpus, cli.workers)
    } else {
        QueryEngine::load_or_rebuild(&index, &corpus, cli.workers)
    };
    let engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let words = match engine.query(&cli.letters, cli.center_letter) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", serde_json::to_string_pretty(&words)?);
    Ok(())
}
