use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::CatalogError;
use crate::part::PartRecord;
use crate::snapshot::CatalogSnapshot;

const BUNDLED_CATALOG_JSON: &str = include_str!("../data/default_catalog.json");

/// Where catalog rows come from.
/// Implementations do the I/O; the matcher and builder only ever see a
/// [`CatalogSnapshot`].
pub trait CatalogSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;
    /// Fetch every row, in catalog order.
    fn load(&self) -> Result<Vec<PartRecord>, CatalogError>;
}

/// Parse a JSON array of catalog rows.
pub fn parse_catalog_json(json: &str) -> Result<Vec<PartRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON export of the parts table from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Vec<PartRecord>, CatalogError> {
        let content = fs::read_to_string(&self.path)?;
        parse_catalog_json(&content)
    }
}

/// Rows already in memory, e.g. handed over by a remote client.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<PartRecord>,
}

impl StaticSource {
    pub fn new(rows: Vec<PartRecord>) -> Self {
        Self { rows }
    }
}

impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn load(&self) -> Result<Vec<PartRecord>, CatalogError> {
        Ok(self.rows.clone())
    }
}

/// The default dataset compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl CatalogSource for BundledSource {
    fn name(&self) -> &str {
        "bundled"
    }

    fn load(&self) -> Result<Vec<PartRecord>, CatalogError> {
        parse_catalog_json(BUNDLED_CATALOG_JSON)
    }
}

/// Serializable selection of the primary catalog source.
///
/// ```
/// use catalog::SourceConfig;
///
/// let bundled = SourceConfig::bundled();
/// let file = SourceConfig::json_file("/srv/catalog/bellows_parts.json");
/// assert!(matches!(file, SourceConfig::JsonFile { .. }));
/// assert_eq!(bundled, SourceConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Only the bundled dataset.
    #[default]
    Bundled,
    /// A JSON export on disk, falling back to the bundled dataset.
    JsonFile { path: PathBuf },
}

impl SourceConfig {
    pub fn bundled() -> Self {
        SourceConfig::Bundled
    }

    pub fn json_file<P: Into<PathBuf>>(path: P) -> Self {
        SourceConfig::JsonFile { path: path.into() }
    }

    /// Build the primary source. `None` means "bundled only".
    pub fn build(&self) -> Option<Box<dyn CatalogSource>> {
        match self {
            SourceConfig::Bundled => None,
            SourceConfig::JsonFile { path } => Some(Box::new(JsonFileSource::new(path))),
        }
    }
}

/// Resolve the session catalog once: the primary source when it loads and
/// yields at least one valid row, otherwise the bundled dataset.
pub fn resolve_catalog(primary: Option<&dyn CatalogSource>) -> CatalogSnapshot {
    let start = Instant::now();

    if let Some(source) = primary {
        match source.load() {
            Ok(rows) => {
                let snapshot = CatalogSnapshot::from_rows(rows);
                if !snapshot.is_empty() {
                    info!(
                        source = source.name(),
                        parts = snapshot.len(),
                        elapsed_micros = start.elapsed().as_micros(),
                        "catalog_resolved"
                    );
                    return snapshot;
                }
                warn!(source = source.name(), "catalog_source_empty_using_bundled");
            }
            Err(err) => {
                warn!(source = source.name(), error = %err, "catalog_source_failed_using_bundled");
            }
        }
    }

    match BundledSource.load() {
        Ok(rows) => {
            let snapshot = CatalogSnapshot::from_rows(rows);
            info!(
                source = BundledSource.name(),
                parts = snapshot.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_resolved"
            );
            snapshot
        }
        Err(err) => {
            error!(error = %err, "bundled_catalog_unreadable");
            CatalogSnapshot::default()
        }
    }
}
