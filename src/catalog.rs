// ABOUTME: One-time loading of the exercise catalog from a file or in-memory feed
// ABOUTME: Shares a single immutable catalog; load failures degrade to an empty catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog loading
//!
//! The catalog is parsed at most once per [`CatalogLoader`]. Concurrent first
//! callers block until the single load finishes and all observe the same
//! fully built catalog.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use metriq_core::errors::AppResult;
use metriq_intelligence::ExerciseCatalog;
use tracing::{info, warn};

/// Where the exercise feed comes from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// JSON array of exercise records on disk
    Path(PathBuf),
    /// JSON array of exercise records already in memory
    Json(String),
    /// No feed configured
    Empty,
}

/// Lazily loads and shares one exercise catalog
#[derive(Debug)]
pub struct CatalogLoader {
    source: CatalogSource,
    catalog: OnceLock<Arc<ExerciseCatalog>>,
    loads: AtomicUsize,
}

impl CatalogLoader {
    /// Create a loader for `source`; nothing is read until first use
    #[must_use]
    pub const fn new(source: CatalogSource) -> Self {
        Self {
            source,
            catalog: OnceLock::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Loader for an optional path, empty when `None`
    #[must_use]
    pub fn from_optional_path(path: Option<PathBuf>) -> Self {
        Self::new(path.map_or(CatalogSource::Empty, CatalogSource::Path))
    }

    /// The catalog, loading it on the first call
    ///
    /// Read or parse failures are logged and produce an empty catalog.
    pub fn get_or_load(&self) -> Arc<ExerciseCatalog> {
        Arc::clone(self.catalog.get_or_init(|| {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let catalog = match self.read_catalog() {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!(
                        source = %self.source_label(),
                        error = %e,
                        "Exercise catalog unavailable, using empty catalog"
                    );
                    ExerciseCatalog::default()
                }
            };
            info!(exercises = catalog.len(), "Exercise catalog loaded");
            Arc::new(catalog)
        }))
    }

    /// Whether the catalog has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Number of times the feed was actually read
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn read_catalog(&self) -> AppResult<ExerciseCatalog> {
        match &self.source {
            CatalogSource::Path(path) => {
                let json = fs::read_to_string(path)?;
                ExerciseCatalog::from_json_str(&json)
            }
            CatalogSource::Json(json) => ExerciseCatalog::from_json_str(json),
            CatalogSource::Empty => Ok(ExerciseCatalog::default()),
        }
    }

    fn source_label(&self) -> String {
        match &self.source {
            CatalogSource::Path(path) => path.display().to_string(),
            CatalogSource::Json(_) => "inline".to_owned(),
            CatalogSource::Empty => "none".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_empty_catalog() {
        let loader = CatalogLoader::new(CatalogSource::Empty);
        assert!(!loader.is_loaded());
        assert!(loader.get_or_load().is_empty());
        assert!(loader.is_loaded());
        assert_eq!(loader.load_count(), 1);
    }

    #[test]
    fn second_call_returns_same_catalog() {
        let loader = CatalogLoader::new(CatalogSource::Json(
            r#"[{"name":"Squat","primaryMuscles":["quadriceps"],"secondaryMuscles":[]}]"#
                .to_owned(),
        ));
        let first = loader.get_or_load();
        let second = loader.get_or_load();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
        assert_eq!(loader.load_count(), 1);
    }
}
