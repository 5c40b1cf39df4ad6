//! Output formatting for CLI results.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use glowmatch_core::{Recommendation, TopLovedEntry};
use serde::Serialize;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Outcome of `glowmatch build`.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub products: usize,
    pub vocabulary: usize,
    pub snapshot: String,
}

fn header(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|l| {
            Cell::new(l)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        })
        .collect()
}

fn new_table(labels: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(labels));
    table
}

/// Table of recommendations, best first.
pub fn recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = new_table(&["#", "Product", "Brand", "Skin type", "Price", "Score"]);
    for (rank, r) in recommendations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&r.product_name),
            Cell::new(&r.brand_name),
            Cell::new(&r.combined_skin_type),
            Cell::new(format!("${:.2}", r.price_usd)),
            Cell::new(format!("{:.4}", r.score)),
        ]);
    }
    table
}

/// Table of the most-loved products.
pub fn top_loved_table(entries: &[TopLovedEntry]) -> Table {
    let mut table = new_table(&["#", "Product", "Brand", "Price", "Loves"]);
    for (rank, e) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&e.product_name),
            Cell::new(&e.brand_name),
            Cell::new(format!("${:.2}", e.price_usd)),
            Cell::new(e.loves_count),
        ]);
    }
    table
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_recommendations(
    recommendations: &[Recommendation],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(recommendations),
        OutputFormat::Table if recommendations.is_empty() => {
            println!("{}", "No recommendations found.".yellow());
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", recommendations_table(recommendations));
            Ok(())
        }
    }
}

pub fn print_top_loved(entries: &[TopLovedEntry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(entries),
        OutputFormat::Table => {
            println!("{}", top_loved_table(entries));
            Ok(())
        }
    }
}

pub fn print_build_summary(summary: &BuildSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Table => {
            println!(
                "{} {} products, {} terms",
                "Built catalog:".green().bold(),
                summary.products,
                summary.vocabulary
            );
            println!("  Snapshot: {}", summary.snapshot);
            Ok(())
        }
    }
}
