use super::{Catalog, CatalogError, CatalogLoader};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Loads the catalog from disk at most once and hands out the shared copy.
///
/// A failed load leaves the cell empty so the next call retries.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Wraps an already built catalog, skipping the backing file entirely.
    pub fn preloaded(catalog: Catalog) -> Self {
        Self {
            path: PathBuf::new(),
            cell: OnceCell::with_value(Arc::new(catalog)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Arc<Catalog>, CatalogError> {
        self.cell
            .get_or_try_init(|| CatalogLoader::from_path(&self.path).map(Arc::new))
            .map(|catalog| {
                debug!(careers = catalog.len(), "serving cached catalog");
                Arc::clone(catalog)
            })
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
