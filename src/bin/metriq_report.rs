// ABOUTME: Command-line report printing the Metriq dashboard snapshot
// ABOUTME: Loads an exercise catalog and a JSON data export, then prints every derived metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard report for a data export.
//!
//! Usage:
//! ```bash
//! # Report with the catalog from METRIQ_EXERCISE_CATALOG
//! cargo run --bin metriq-report -- --data export.json
//!
//! # Explicit catalog, 12 weeks of volume, compact JSON
//! cargo run --bin metriq-report -- --catalog exercises.json --data export.json --weeks 12 --format json
//! ```
//!
//! The export is a JSON object with optional `profile`, `goals`, `logs`,
//! `foods` and `day_offset` fields. Logs go to stderr; the report goes to stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use metriq::catalog::CatalogLoader;
use metriq::config::{AppConfig, IntelligenceConfig};
use metriq::dashboard::{DashboardInputs, DashboardSnapshot};
use metriq::logging::LoggingConfig;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

#[derive(Parser)]
#[command(
    name = "metriq-report",
    about = "Metriq dashboard report",
    long_about = "Compute goals, recovery, training volume and nutrient metrics for a data export"
)]
struct ReportArgs {
    /// Exercise catalog JSON (overrides METRIQ_EXERCISE_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Data export with profile, goals, workout logs and foods
    #[arg(long)]
    data: Option<PathBuf>,

    /// Weeks of training volume to report
    #[arg(long)]
    weeks: Option<u32>,

    /// Diary day to report, in days before today
    #[arg(long)]
    day_offset: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();

    // Before AppConfig so that configuration loading is logged
    LoggingConfig::from_env().init()?;
    let app_config = AppConfig::from_env().context("invalid environment configuration")?;

    let mut config = IntelligenceConfig::load().context("invalid intelligence configuration")?;
    if let Some(weeks) = args.weeks {
        config.volume.weeks = weeks;
        config.validate().context("invalid --weeks")?;
    }

    let mut inputs = match &args.data {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<DashboardInputs>(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => DashboardInputs::default(),
    };
    if let Some(offset) = args.day_offset {
        inputs.day_offset = offset;
    }

    let loader = CatalogLoader::from_optional_path(args.catalog.or(app_config.catalog_path));
    let catalog = loader.get_or_load();

    info!(
        exercises = catalog.len(),
        logs = inputs.logs.len(),
        foods = inputs.foods.len(),
        "Computing dashboard report"
    );

    let snapshot = DashboardSnapshot::compute(&inputs, &catalog, &config, &Local::now());
    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string(&snapshot)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&snapshot)?,
    };
    println!("{rendered}");

    Ok(())
}
