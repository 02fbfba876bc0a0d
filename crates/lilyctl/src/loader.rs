//! CSV catalog loader.
//!
//! The catalog export does not use a fixed id column name; the
//! loader probes the header for the first of `product_id`, `id`,
//! `pid`, `product_code`. Prices come from `selling_price`, falling
//! back to `price`. Category and subcategory text are lowercased at
//! load so the core never renormalizes.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::info;

use lily_core::{Catalog, Product};

/// Recognized id column names, in probe order.
const ID_COLUMNS: [&str; 4] = ["product_id", "id", "pid", "product_code"];

/// Recognized price column names, in probe order.
const PRICE_COLUMNS: [&str; 2] = ["selling_price", "price"];

/// Load and validate a catalog from a CSV file.
///
/// Any failure here is fatal for the session: a query must never be
/// accepted against a missing or malformed catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog {}", path.display()))?;

    let headers = reader
        .headers()
        .context("failed to read catalog header row")?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);

    let id_col = ID_COLUMNS
        .iter()
        .find_map(|name| column(name))
        .ok_or_else(|| {
            anyhow!(
                "no product id column found (expected one of: {})",
                ID_COLUMNS.join(", ")
            )
        })?;
    let price_col = PRICE_COLUMNS
        .iter()
        .find_map(|name| column(name))
        .ok_or_else(|| {
            anyhow!(
                "no price column found (expected one of: {})",
                PRICE_COLUMNS.join(", ")
            )
        })?;
    let title_col = column("title").ok_or_else(|| anyhow!("no 'title' column found"))?;
    let category_col = column("category").ok_or_else(|| anyhow!("no 'category' column found"))?;
    let subcategory_col =
        column("sub_category").ok_or_else(|| anyhow!("no 'sub_category' column found"))?;

    let mut products = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read catalog row {}", row))?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let price: f64 = field(price_col)
            .parse()
            .with_context(|| format!("row {}: unparseable price '{}'", row, field(price_col)))?;

        products.push(Product::new(
            field(id_col),
            field(title_col),
            field(category_col),
            field(subcategory_col),
            price,
        ));
    }

    let catalog = Catalog::new(products).context("catalog failed validation")?;
    info!(
        path = %path.display(),
        products = catalog.len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );
    Ok(catalog)
}
