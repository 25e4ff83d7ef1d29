//! Illustrative external product display

mod catalog;
mod source;

pub use catalog::{Product, ProductCard, StockLevel};
pub use source::{
    FileProductSource, ProductSource, ProductView, UnconfiguredProductSource, PRODUCT_LOAD_FAILED,
};
