//! esplay - replays captured search queries against a live Elasticsearch cluster
//!
//! Reads one query string per line, wraps each in a search event, and feeds
//! them to the Elasticsearch query sink from a configurable number of worker
//! threads. Per-event outcome is logged; nothing is retried.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use esplay::{PlayerConfig, SimpleQueryEsSink, SimpleSearchEvent, Sink, TransportPool};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "esplay",
    about = "Replays captured search queries against an Elasticsearch cluster",
    version
)]
struct Args {
    /// Player configuration file (key=value lines)
    #[arg(long)]
    config: Option<PathBuf>,

    /// File with one query string per line (stdin when omitted)
    #[arg(long)]
    queries: Option<PathBuf>,

    /// Number of replay worker threads
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Configuration overrides, e.g. --set simpleEsSink.indexName=logs
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PlayerConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PlayerConfig::new(),
    };
    for entry in &args.overrides {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --set entry {:?}, expected KEY=VALUE", entry))?;
        config.set(key.trim(), value.trim());
    }

    let transport = Arc::new(
        TransportPool::builder()
            .timeout(args.timeout_secs.map(Duration::from_secs))
            .build()?,
    );
    let mut sink = SimpleQueryEsSink::new(transport);
    sink.init(&config)?;
    let sink = Arc::new(sink);

    let queries = read_queries(&args)?;
    let total = queries.len();
    info!("Replaying {} search events", total);

    let failed = Arc::new(AtomicU64::new(0));
    let (tx, rx) = mpsc::channel::<SimpleSearchEvent>();
    let rx = Arc::new(Mutex::new(rx));

    let mut workers = Vec::new();
    for _ in 0..args.workers.max(1) {
        let sink = Arc::clone(&sink);
        let rx = Arc::clone(&rx);
        let failed = Arc::clone(&failed);
        workers.push(thread::spawn(move || {
            loop {
                let event = match rx.lock().expect("receiver lock poisoned").recv() {
                    Ok(event) => event,
                    Err(_) => break,
                };
                if !sink.write(&event) {
                    failed.fetch_add(1, Ordering::Relaxed);
                }
            }
        }));
    }

    for query in queries {
        tx.send(SimpleSearchEvent::new(query))
            .expect("worker threads exited early");
    }
    drop(tx);
    for worker in workers {
        worker
            .join()
            .map_err(|_| anyhow!("replay worker panicked"))?;
    }

    info!(
        "Replayed {} events, {} failed",
        total,
        failed.load(Ordering::Relaxed)
    );
    Ok(())
}

/// Reads query strings, one per line, skipping blank lines.
fn read_queries(args: &Args) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match &args.queries {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening query file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(queries)
}
