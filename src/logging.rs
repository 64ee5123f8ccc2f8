// ABOUTME: Structured logging setup for Metriq binaries and services
// ABOUTME: Builds per-component tracing filters and a stderr formatter from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging setup
//!
//! Log output goes to stderr so that command-line reports on stdout stay
//! machine-readable.
//!
//! `METRIQ_LOG` sets the level for every Metriq crate. Each component can be
//! tuned on its own (`METRIQ_LOG_SESSION=debug` traces the workout timer
//! without the calculators). Third-party crates stay at `warn`. A `RUST_LOG`
//! value replaces the generated filter entirely.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `METRIQ_LOG` is unset
pub const DEFAULT_LEVEL: &str = "info";

/// Metriq component whose log level can be set independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogComponent {
    /// Goal, recovery, volume and nutrient calculators
    Intelligence,
    /// Active workout session and its timer
    Session,
    /// Dashboard view assembly
    Dashboard,
    /// Food database lookups and diary ingestion
    FoodLookup,
}

impl LogComponent {
    /// Every component, in filter order
    pub const ALL: [Self; 4] = [
        Self::Intelligence,
        Self::Session,
        Self::Dashboard,
        Self::FoodLookup,
    ];

    /// Tracing targets covered by the component
    #[must_use]
    pub const fn targets(self) -> &'static [&'static str] {
        match self {
            Self::Intelligence => &["metriq_intelligence"],
            Self::Session => &["metriq::session"],
            Self::Dashboard => &["metriq::dashboard"],
            Self::FoodLookup => &["metriq::external", "metriq::nutrition"],
        }
    }

    /// Environment variable holding the component's level
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Intelligence => "METRIQ_LOG_INTELLIGENCE",
            Self::Session => "METRIQ_LOG_SESSION",
            Self::Dashboard => "METRIQ_LOG_DASHBOARD",
            Self::FoodLookup => "METRIQ_LOG_FOOD_LOOKUP",
        }
    }
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single-line output without targets
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for all Metriq crates (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Per-component overrides of `level`
    pub component_levels: Vec<(LogComponent, String)>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            component_levels: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Read `METRIQ_LOG`, `METRIQ_LOG_<COMPONENT>`, `LOG_FORMAT` and
    /// `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let component_levels = LogComponent::ALL
            .into_iter()
            .filter_map(|component| {
                let level = env::var(component.env_var()).ok()?;
                let level = level.trim();
                (!level.is_empty()).then(|| (component, level.to_owned()))
            })
            .collect();

        Self {
            level: env::var("METRIQ_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.to_owned()),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            component_levels,
        }
    }

    /// Filter directives: `warn` for dependencies, `level` for Metriq crates,
    /// then component overrides
    #[must_use]
    pub fn filter_directives(&self) -> Vec<String> {
        let mut directives = vec!["warn".to_owned()];
        directives.extend(
            ["metriq", "metriq_core", "metriq_intelligence"]
                .iter()
                .map(|target| format!("{target}={}", self.level)),
        );
        for (component, level) in &self.component_levels {
            directives.extend(
                component
                    .targets()
                    .iter()
                    .map(|target| format!("{target}={level}")),
            );
        }
        directives
    }

    fn stderr_layer<S>(&self) -> fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr> {
        fmt::layer()
            .with_writer(io::stderr as fn() -> io::Stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        if let Ok(rust_log) = env::var("RUST_LOG") {
            return EnvFilter::try_new(&rust_log)
                .with_context(|| format!("invalid RUST_LOG filter '{rust_log}'"));
        }
        let directives = self.filter_directives().join(",");
        EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid Metriq log filter '{directives}'"))
    }

    /// Initialize the global tracing subscriber on stderr
    ///
    /// # Errors
    ///
    /// Returns an error if a level is not a valid filter directive or a
    /// global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let (json, pretty, compact) = match self.format {
            LogFormat::Json => (Some(self.stderr_layer().json()), None, None),
            LogFormat::Pretty => (None, Some(self.stderr_layer()), None),
            LogFormat::Compact => (
                None,
                None,
                Some(self.stderr_layer().compact().with_target(false)),
            ),
        };

        tracing_subscriber::registry()
            .with(self.env_filter()?)
            .with(json)
            .with(pretty)
            .with(compact)
            .try_init()?;

        info!(
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            format = ?self.format,
            overrides = self.component_levels.len(),
            "Metriq logging initialized"
        );
        Ok(())
    }
}
