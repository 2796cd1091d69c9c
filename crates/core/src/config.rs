//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services. Request handling never reads process-wide environment variables;
//! binaries parse the environment in `main` and hand the result here.

use crate::catalog_file;
use crate::error::{CatalogError, CatalogResult};
use crate::repository::InMemoryCatalog;
use crate::seed;
use std::fs;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    catalog_file: Option<PathBuf>,
    hide_business_listings: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// * `catalog_file` - optional YAML catalog overriding the built-in seed.
    /// * `hide_business_listings` - capability gate: when set, business
    ///   listings are excluded from every query regardless of the requested
    ///   type filter.
    pub fn new(catalog_file: Option<PathBuf>, hide_business_listings: bool) -> Self {
        Self {
            catalog_file,
            hide_business_listings,
        }
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    /// Whether queries may surface business listings at all.
    pub fn include_business_listings(&self) -> bool {
        !self.hide_business_listings
    }

    /// Loads the catalog this configuration points at.
    ///
    /// Reads and validates the configured YAML file, or falls back to the
    /// built-in seed when no file is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::FileRead`] if the configured file cannot be
    /// read, or the relevant parse/validation error if its content is
    /// invalid. The built-in seed only fails if the seed itself is broken.
    pub fn load_catalog(&self) -> CatalogResult<InMemoryCatalog> {
        let catalog = match &self.catalog_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog file");
                let text = fs::read_to_string(path).map_err(CatalogError::FileRead)?;
                catalog_file::parse(&text)?
            }
            None => seed::builtin_catalog()?,
        };
        Ok(InMemoryCatalog::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CatalogRepository;
    use std::io::Write;

    #[test]
    fn defaults_to_the_builtin_seed() {
        let config = CoreConfig::default();
        let repo = config.load_catalog().expect("seed loads");
        assert_eq!(repo.opportunities().len(), 9);
        assert!(config.include_business_listings());
    }

    #[test]
    fn loads_a_catalog_file_when_configured() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"opportunities:
  - id: obnl-mini
    name: Mini
    neighborhood: Villeray
    type: nonprofit
    verified: true
    distance_km: 1.0
    categories: ["Divers"]
    short_description: ""
    map_position: {{ x: 10, y: 20 }}
"#
        )
        .expect("write temp file");

        let config = CoreConfig::new(Some(file.path().to_path_buf()), false);
        let repo = config.load_catalog().expect("file loads");
        assert_eq!(repo.opportunities().len(), 1);
        assert_eq!(repo.opportunities()[0].id, "obnl-mini");
        assert!(repo.service_points().is_empty());
    }

    #[test]
    fn missing_catalog_file_is_a_read_error() {
        let config = CoreConfig::new(Some(PathBuf::from("/nonexistent/catalog.yaml")), false);
        match config.load_catalog() {
            Err(CatalogError::FileRead(_)) => {}
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn hide_business_listings_flips_the_gate() {
        let config = CoreConfig::new(None, true);
        assert!(!config.include_business_listings());
    }
}
