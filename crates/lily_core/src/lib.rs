//! Lily Core - catalog routing and product resolution.
//!
//! Pure decision core: classifies a user query into a tagged intent
//! (FAQ answer, catalog metadata, product search, or unhandled) and
//! resolves product searches against an immutable catalog. No I/O,
//! no network, no global state - every collaborator is an explicit
//! argument, so the whole crate is testable without a catalog file
//! or an LLM backend.

pub mod catalog;
pub mod faq;
pub mod matcher;
pub mod resolver;
pub mod router;


pub use catalog::{Catalog, CatalogError, Product};
pub use faq::{FaqEntry, FaqError, FaqTable};
pub use matcher::{FuzzyMatcher, JaroWinklerMatcher, ScoredMatch};
pub use resolver::{
    resolve_products, PriceRange, ProductHit, ProductSelection, ProductSelector, ResolveError,
};
pub use router::{route, MetadataKind, ResolvedIntent, RouterConfig};
