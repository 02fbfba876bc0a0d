//! Query router - classifies one query into exactly one intent.
//!
//! Fixed precedence: FAQ triggers, then catalog metadata triggers,
//! then fuzzy product search, then `Unhandled` for the caller's LLM
//! fallback. Pure function of its inputs; identical inputs always
//! produce the identical intent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::faq::FaqTable;
use crate::matcher::FuzzyMatcher;
use crate::resolver::{
    resolve_products, PriceRange, ProductHit, ProductSelection, ProductSelector, ResolveError,
    DEFAULT_LIMIT,
};

/// Default fuzzy acceptance threshold on the 0-100 scale.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Which metadata listing a trigger selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    Categories,
    Subcategories,
}

/// Router configuration. Trigger lists are ordered: earlier entries
/// win, so overlapping triggers ("subcategories" contains
/// "categories") must be listed most-specific-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Minimum fuzzy score to accept a category/subcategory match.
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Maximum products returned per search.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Ordered metadata triggers.
    #[serde(default = "default_metadata_triggers")]
    pub metadata_triggers: Vec<(String, MetadataKind)>,

    /// Substrings that mark a query as a product search.
    #[serde(default = "default_search_triggers")]
    pub search_triggers: Vec<String>,
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_metadata_triggers() -> Vec<(String, MetadataKind)> {
    vec![
        ("subcategories".to_string(), MetadataKind::Subcategories),
        ("categories".to_string(), MetadataKind::Categories),
    ]
}

fn default_search_triggers() -> Vec<String> {
    vec!["find".to_string(), "show me".to_string()]
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            limit: default_limit(),
            metadata_triggers: default_metadata_triggers(),
            search_triggers: default_search_triggers(),
        }
    }
}

/// The router's single output: one tagged variant per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolvedIntent {
    /// Canned answer from the FAQ table.
    FaqAnswer { answer: String },
    /// Distinct catalog categories, first-seen order.
    CategoryList { categories: Vec<String> },
    /// Distinct catalog subcategories, first-seen order.
    SubcategoryList { subcategories: Vec<String> },
    /// Accepted fuzzy match resolved against the catalog.
    ProductResults {
        selector: ProductSelector,
        products: Vec<ProductHit>,
    },
    /// Accepted fuzzy match, but no product survived the price
    /// filter. Rendered as "no results for X", never a blank list.
    NoProductsFound { selector: String },
    /// Search query, but no catalog label cleared the threshold.
    NoMatch,
    /// Not classifiable here; the caller routes this to the LLM.
    Unhandled { query: String },
}

/// Classify one query.
///
/// The price range is only validated when a branch actually needs it:
/// an FAQ hit answers regardless of the slider values, but a product
/// search with `min > max` is a caller contract violation.
pub fn route(
    query: &str,
    min_price: f64,
    max_price: f64,
    catalog: &Catalog,
    faq: &FaqTable,
    matcher: &dyn FuzzyMatcher,
    config: &RouterConfig,
) -> Result<ResolvedIntent, ResolveError> {
    let normalized = query.to_lowercase();

    // 1. FAQ triggers, first match wins.
    if let Some(entry) = faq.lookup(&normalized) {
        info!(trigger = %entry.trigger, "routed to FAQ");
        return Ok(ResolvedIntent::FaqAnswer {
            answer: entry.answer.clone(),
        });
    }

    // 2. Metadata triggers, in configured order.
    for (trigger, kind) in &config.metadata_triggers {
        if normalized.contains(trigger.as_str()) {
            info!(trigger = %trigger, "routed to metadata listing");
            return Ok(match kind {
                MetadataKind::Categories => ResolvedIntent::CategoryList {
                    categories: catalog.categories(),
                },
                MetadataKind::Subcategories => ResolvedIntent::SubcategoryList {
                    subcategories: catalog.subcategories(),
                },
            });
        }
    }

    // 3. Product search triggers.
    let is_search = config
        .search_triggers
        .iter()
        .any(|trigger| normalized.contains(trigger.as_str()));

    if is_search {
        let range = PriceRange::new(min_price, max_price)?;
        return Ok(search(&normalized, range, catalog, matcher, config));
    }

    // 4. Everything else goes to the caller's fallback.
    info!("query unhandled, deferring to fallback");
    Ok(ResolvedIntent::Unhandled {
        query: query.to_string(),
    })
}

/// Fuzzy-match the query against subcategory and category labels
/// independently; subcategory wins when both clear the threshold.
fn search(
    normalized: &str,
    range: PriceRange,
    catalog: &Catalog,
    matcher: &dyn FuzzyMatcher,
    config: &RouterConfig,
) -> ResolvedIntent {
    let subcategory_match = matcher
        .best_match(normalized, &catalog.subcategories())
        .filter(|m| m.score >= config.threshold);
    let category_match = matcher
        .best_match(normalized, &catalog.categories())
        .filter(|m| m.score >= config.threshold);

    debug!(
        subcategory = ?subcategory_match,
        category = ?category_match,
        threshold = config.threshold,
        "fuzzy match results"
    );

    let selector = if let Some(m) = subcategory_match {
        ProductSelector::Subcategory(m.label)
    } else if let Some(m) = category_match {
        ProductSelector::Category(m.label)
    } else {
        info!("no label cleared the threshold");
        return ResolvedIntent::NoMatch;
    };

    info!(selector = %selector, "routed to product search");
    match resolve_products(&selector, range, config.limit, catalog) {
        ProductSelection::Found(products) => ResolvedIntent::ProductResults { selector, products },
        ProductSelection::NoneFound { selector } => ResolvedIntent::NoProductsFound { selector },
    }
}
