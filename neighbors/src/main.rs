use anyhow::{bail, Context, Result};
use bagofwords::{encode_word_counts, Corpus, EngineConfig};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "neighbors")]
#[command(about = "Find the nearest articles by bag-of-words similarity", long_about = None)]
struct Cli {
    /// Input path (an XML article or a directory of them)
    #[arg(long)]
    input: String,
    /// JSON file with `vocab_size` and/or `neighbors`; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of most frequent corpus terms used as dimensions (default 20000)
    #[arg(long)]
    vocab_size: Option<usize>,
    /// Number of neighbors to report (default 5)
    #[arg(long)]
    neighbors: Option<usize>,
    /// Title of the article to query
    #[arg(long, conflicts_with = "index")]
    title: Option<String>,
    /// Position of the article to query in the title listing
    #[arg(long)]
    index: Option<usize>,
    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct NeighborsOut<'a> {
    title: &'a str,
    neighbors: Vec<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;

    let files = collect_inputs(Path::new(&cli.input))?;
    if files.is_empty() {
        bail!("no .xml articles found under {}", cli.input);
    }
    let corpus = Corpus::from_paths(&files).context("building corpus")?;
    let dtm = encode_word_counts(&corpus, cfg.vocab_size);

    let title = match (cli.title.as_deref(), cli.index) {
        (Some(t), _) => t.to_string(),
        (None, Some(i)) => match dtm.titles.get(i) {
            Some(t) => t.clone(),
            None => bail!("index must be between 0 and {}, inclusive", dtm.titles.len() - 1),
        },
        (None, None) => {
            for (i, t) in dtm.titles.iter().enumerate() {
                println!("\t{i}. {t}");
            }
            return Ok(());
        }
    };

    let neighbors = dtm
        .nearest_neighbors(&title, cfg.neighbors)
        .with_context(|| format!("querying {title:?}"))?;
    if cli.json {
        let out = NeighborsOut { title: &title, neighbors };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("The {} nearest neighbors of {} are:", cfg.neighbors, title);
        for n in neighbors {
            println!("\t{n}");
        }
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(k) = cli.vocab_size { cfg.vocab_size = k; }
    if let Some(m) = cli.neighbors { cfg.neighbors = m; }
    Ok(cfg)
}

fn collect_inputs(input_path: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking {}", input_path.display()))?;
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("xml") {
                files.push(p.to_path_buf());
            }
        }
    } else {
        // A single file; unreadable paths surface when the corpus is built.
        files.push(input_path.to_path_buf());
    }
    tracing::debug!(count = files.len(), "collected inputs");
    Ok(files)
}
