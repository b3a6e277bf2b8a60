use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use catena::{DEFAULT_TOP_K, FinderConfig, Report, Vocabulary, find_concatenated, read_words};

/// Concatenated-words finder CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word-list file, whitespace-separated words (plain or gzip)
    words: String,

    /// Use the dynamic-programming checker instead of the trie (trie is default)
    #[arg(long)]
    use_dp: bool,

    /// Number of longest concatenated words to report
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Enable threaded DP scanning (requires the `parallel` build feature)
    #[arg(long, default_value_t = false)]
    threads: bool,

    /// Number of worker threads for the DP scan (default: max available - 1)
    #[arg(long, default_value_t = num_cpus::get().saturating_sub(1).max(1))]
    max_workers: usize,

    /// Optional output file for the result summary (JSON)
    #[arg(long)]
    report_json: Option<String>,

    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', alias = "info")]
    verbose: bool,

    /// Debug output
    #[arg(long)]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

fn main() {
    let args = Args::parse();
    // Set log level based on CLI flags
    let log_level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "error"
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(error) = run_pipeline(
        &args.words,
        args.use_dp,
        args.top_k,
        args.threads,
        args.max_workers,
        args.report_json.as_deref(),
    ) {
        eprintln!("Word search failed: {error:?}");
        std::process::exit(1);
    }
}

fn run_pipeline(
    words_path: &str,
    use_dp: bool,
    top_k: usize,
    use_threads: bool,
    max_workers: usize,
    report_json: Option<&str>,
) -> Result<Report> {
    let words = read_words(Path::new(words_path))
        .with_context(|| format!("Failed to read word list from {}", words_path))?;
    info!("Read {} words from {}", words.len(), words_path);

    let vocab = Vocabulary::build(&words);
    info!(
        "Vocabulary holds {} distinct words (~{} bytes)",
        vocab.len(),
        vocab.approx_bytes()
    );

    let config = FinderConfig {
        top_k,
        use_trie: !use_dp,
        use_threads,
        max_workers,
    };

    let started = Instant::now();
    let report = find_concatenated(&vocab, config);
    let elapsed = started.elapsed();

    for (rank, word) in report.longest.iter().enumerate() {
        println!(
            "#{} longest concatenated word: {} (length = {})",
            rank + 1,
            word,
            word.chars().count()
        );
    }
    println!(
        "Total number of concatenated words: {}",
        report.concatenated
    );
    println!("Time taken: {} milliseconds", elapsed.as_millis());

    if let Some(path) = report_json {
        use serde_json::json;
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let summary = json!({
            "concatenated": report.concatenated,
            "longest": report.longest,
            "elapsed_ms": elapsed.as_millis() as u64,
        });
        let mut file = File::create(path)?;
        writeln!(file, "{}", serde_json::to_string_pretty(&summary)?)?;
        info!("Result summary written to {}", path);
    }

    Ok(report)
}

#[cfg(test)]
mod smoke {
    use super::*;

    #[test]
    fn smoke_run() {
        use std::io::Write;

        let tmp = tempfile::NamedTempFile::new().expect("tmpfile");
        for word in [
            "cat",
            "cats",
            "catsdogcats",
            "dog",
            "dogcatsdog",
            "hippopotamuses",
            "rat",
            "ratcatdogcat",
        ] {
            writeln!(tmp.as_file(), "{word}").unwrap();
        }

        let report = run_pipeline(tmp.path().to_str().unwrap(), false, 2, false, 1, None)
            .expect("pipeline should succeed");
        assert_eq!(report.concatenated, 3);
        assert_eq!(report.longest, vec!["ratcatdogcat", "catsdogcats"]);
    }

    #[test]
    fn smoke_run_dp_path() {
        use std::io::Write;

        let tmp = tempfile::NamedTempFile::new().expect("tmpfile");
        writeln!(tmp.as_file(), "cat dog catdog").unwrap();

        let report = run_pipeline(tmp.path().to_str().unwrap(), true, 2, false, 1, None)
            .expect("pipeline should succeed");
        assert_eq!(report.concatenated, 1);
        assert_eq!(report.longest, vec!["catdog"]);
    }
}
