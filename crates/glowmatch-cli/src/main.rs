#![allow(clippy::doc_markdown)]
//! glowmatch CLI - build catalog snapshots and query recommendations.

mod output;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use glowmatch_core::{
    load_products, snapshot, CatalogIndex, GlowConfig, Recommender, DEFAULT_CONFIG_FILE,
};
use tracing_subscriber::EnvFilter;

use output::{BuildSummary, OutputFormat};

/// glowmatch - content-based skincare recommendations
#[derive(Parser, Debug)]
#[command(name = "glowmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_CONFIG_FILE,
        env = "GLOWMATCH_CONFIG"
    )]
    config: PathBuf,

    /// Product dataset (CSV or JSON), overrides catalog.dataset
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Prebuilt snapshot, overrides catalog.snapshot
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a catalog snapshot from the dataset
    Build {
        /// Snapshot file to write
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Products most similar to a catalog product
    Similar {
        /// Exact product name
        name: String,
        /// Number of results (defaults to recommend.default_k)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Products matching a skin type and category
    Match {
        /// Skin type, e.g. "Oily"
        #[arg(long)]
        skin_type: String,
        /// Secondary category, e.g. "Moisturizers"
        #[arg(long)]
        category: String,
        /// Number of results (defaults to recommend.default_k)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Most-loved products
    Top {
        /// Number of products (defaults to recommend.top_loved_count)
        #[arg(short)]
        n: Option<usize>,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<GlowConfig> {
        let mut config = GlowConfig::load_from(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;
        config
            .catalog
            .override_source(self.dataset.clone(), self.snapshot.clone());
        Ok(config)
    }
}

fn init_tracing(level: &str) {
    // Logs go to stderr so that JSON output stays parseable
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn recommender(config: &GlowConfig) -> anyhow::Result<Recommender> {
    let index = config.load_index().context("Failed to load catalog")?;
    Ok(Recommender::new(Arc::new(index)))
}

fn resolve_k(requested: Option<usize>, config: &GlowConfig) -> anyhow::Result<usize> {
    let k = requested.unwrap_or(config.recommend.default_k);
    anyhow::ensure!(
        (1..=config.recommend.max_k).contains(&k),
        "k must be between 1 and {}, got {k}",
        config.recommend.max_k
    );
    Ok(k)
}

fn cmd_build(config: &GlowConfig, out_path: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let start = Instant::now();
    let records = load_products(&config.catalog.dataset, config.catalog.format)
        .with_context(|| format!("Failed to read {}", config.catalog.dataset.display()))?;
    let index = CatalogIndex::build_with(records, config.vectorizer)?;
    snapshot::save(&index, &out_path)?;

    output::print_build_summary(
        &BuildSummary {
            products: index.len(),
            vocabulary: index.vocabulary_size(),
            snapshot: out_path.display().to_string(),
        },
        format,
    )?;
    if format == OutputFormat::Table {
        println!("  {}", format!("Done in {:.2?}", start.elapsed()).dimmed());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config.logging.level);
    tracing::debug!(config = %cli.config.display(), "Configuration loaded");

    let format = cli.format;
    match cli.command {
        Commands::Build { output } => cmd_build(&config, output, format),
        Commands::Similar { name, k } => {
            let k = resolve_k(k, &config)?;
            let results = recommender(&config)?.recommend_by_product(&name, k)?;
            output::print_recommendations(&results, format)
        }
        Commands::Match {
            skin_type,
            category,
            k,
        } => {
            let k = resolve_k(k, &config)?;
            let results = recommender(&config)?.recommend_by_attributes(&skin_type, &category, k)?;
            output::print_recommendations(&results, format)
        }
        Commands::Top { n } => {
            let n = n.unwrap_or(config.recommend.top_loved_count);
            let entries = config.load_index().context("Failed to load catalog")?.top_loved(n);
            output::print_top_loved(&entries, format)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
