//! Career catalog: CSV loading, field normalization, and the memoized cache.

mod cache;
mod normalizer;
mod options;
mod parser;

pub use cache::CatalogCache;
pub use normalizer::MISSING_VALUE_TOKEN;
pub use options::CatalogOptions;

use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// One row of the career catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Career {
    pub name: String,
    pub courses: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub interests: BTreeSet<String>,
}

impl Career {
    pub fn new(name: &str, courses: &[&str], skills: &[&str], interests: &[&str]) -> Self {
        fn to_set(values: &[&str]) -> BTreeSet<String> {
            values.iter().map(|value| value.to_string()).collect()
        }

        Self {
            name: name.to_string(),
            courses: to_set(courses),
            skills: to_set(skills),
            interests: to_set(interests),
        }
    }
}

/// The loaded careers in file order, with the selectable options derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    careers: Vec<Career>,
    options: CatalogOptions,
}

impl Catalog {
    pub fn new(careers: Vec<Career>) -> Self {
        let options = CatalogOptions::from_careers(&careers);
        Self { careers, options }
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read career catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid career catalog data: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// Advice for the operator, shown after the error when the file is absent.
    pub fn hint(&self) -> Option<String> {
        match self {
            CatalogError::Io { path, .. } => Some(format!(
                "Please ensure '{}' is in the same directory as the app.",
                path.display()
            )),
            CatalogError::Csv(_) => None,
        }
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), careers = catalog.len(), "career catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let careers = parser::parse_careers(reader)?;
        Ok(Catalog::new(careers))
    }
}
