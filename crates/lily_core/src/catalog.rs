//! Immutable product catalog.
//!
//! Loaded once per session by the host application; the core only
//! reads it. Row order is preserved and is the order results are
//! returned in - no re-ranking happens anywhere downstream.

use serde::{Deserialize, Serialize};

/// One row of the catalog.
///
/// `category` and `subcategory` are stored lowercase so substring
/// matching never has to renormalize. `title` keeps its original
/// casing for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: &str,
        subcategory: &str,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.to_lowercase(),
            subcategory: subcategory.to_lowercase(),
            price,
        }
    }
}

/// Catalog validation failures. All of these are fatal for the
/// session: a query must never be accepted against a catalog that
/// failed validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("product at row {row} has no id")]
    MissingId { row: usize },

    #[error("duplicate product id: {id}")]
    DuplicateId { id: String },

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: String, price: f64 },
}

/// Immutable, insertion-ordered product table for one session.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and seal a product list.
    ///
    /// Invariants checked: at least one row, every id present and
    /// unique, every price non-negative.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for (row, product) in products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::MissingId { row });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
            if product.price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
        }

        Ok(Self { products })
    }

    /// All rows, in original order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels, first-seen order, each exactly once.
    pub fn categories(&self) -> Vec<String> {
        distinct_in_order(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct subcategory labels, first-seen order, each exactly once.
    pub fn subcategories(&self) -> Vec<String> {
        distinct_in_order(self.products.iter().map(|p| p.subcategory.as_str()))
    }
}

fn distinct_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for label in labels {
        if seen.insert(label) {
            out.push(label.to_string());
        }
    }
    out
}
