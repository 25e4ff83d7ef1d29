//! Where the showcased product comes from, and the view state built from it

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Serialize;

use super::{Product, ProductCard};
use crate::error::ProductError;

/// Fixed message shown whenever the product cannot be loaded
pub const PRODUCT_LOAD_FAILED: &str = "Failed to load product";

/// Supplies the single product shown on the page
pub trait ProductSource: Send + Sync {
    fn fetch(&self) -> Result<Product, ProductError>;
}

/// Reads a catalog entry saved as JSON on disk
#[derive(Debug, Clone)]
pub struct FileProductSource {
    path: PathBuf,
}

impl FileProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileProductSource {
    fn fetch(&self) -> Result<Product, ProductError> {
        debug!("Loading product from {}", self.path.display());
        let bytes = fs::read(&self.path)?;
        Ok(Product::from_slice(&bytes)?)
    }
}

/// Used when no product source is configured; always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProductSource;

impl ProductSource for UnconfiguredProductSource {
    fn fetch(&self) -> Result<Product, ProductError> {
        Err(ProductError::NotConfigured)
    }
}

/// Product panel state
///
/// `Loading` is never produced by `load`, which blocks until the source
/// answers. A client renders it while its own request is in flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ProductView {
    Loading,
    Ready { card: ProductCard },
    Failed { message: String },
}

impl ProductView {
    /// Fold a fetch result into a view; any error becomes the fixed failure state
    pub fn from_fetch(result: Result<Product, ProductError>) -> Self {
        match result {
            Ok(product) => ProductView::Ready {
                card: ProductCard::from(product),
            },
            Err(e) => {
                warn!("Product fetch failed: {}", e);
                ProductView::Failed {
                    message: PRODUCT_LOAD_FAILED.to_string(),
                }
            }
        }
    }

    pub fn load(source: &dyn ProductSource) -> Self {
        Self::from_fetch(source.fetch())
    }
}
