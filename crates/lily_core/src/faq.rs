//! Canned FAQ answers keyed by trigger phrase.
//!
//! The table is an explicit ordered list, not a map: lookup scans in
//! table order and the first trigger found as a substring of the
//! query wins. Overlapping triggers ("international shipping" vs
//! "shipping") must therefore be listed most-specific-first.

use serde::{Deserialize, Serialize};

/// A (trigger phrase, answer text) pair. Triggers are lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub trigger: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(trigger: &str, answer: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FaqError {
    #[error("FAQ entry {index} has an empty trigger")]
    EmptyTrigger { index: usize },
}

/// Ordered trigger table. Static for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    /// Build a table, rejecting empty triggers. Order is preserved
    /// and is the lookup precedence.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, FaqError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.trigger.trim().is_empty() {
                return Err(FaqError::EmptyTrigger { index });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// First entry whose trigger is a substring of the normalized
    /// query. The query must already be lowercase.
    pub fn lookup(&self, normalized_query: &str) -> Option<&FaqEntry> {
        self.entries
            .iter()
            .find(|entry| normalized_query.contains(entry.trigger.as_str()))
    }
}

impl Default for FaqTable {
    /// Storefront answers. "international shipping" is listed before
    /// "shipping" so the more specific trigger wins under the
    /// first-match rule.
    fn default() -> Self {
        let entries = vec![
            FaqEntry::new(
                "return policy",
                "You can return items within 30 days for a full refund. \
                 Visit our 'Returns & Refunds' page for more details.",
            ),
            FaqEntry::new(
                "international shipping",
                "Yes! We ship worldwide, but shipping fees may vary based on your location.",
            ),
            FaqEntry::new(
                "shipping",
                "We offer free shipping for orders above $50. \
                 Standard delivery takes 3-5 business days.",
            ),
            FaqEntry::new(
                "payment methods",
                "We accept Visa, Mastercard, PayPal, Klarna, and Apple Pay.",
            ),
            FaqEntry::new(
                "order tracking",
                "You can track your order by logging into your account and \
                 visiting the 'Track Order' section.",
            ),
            FaqEntry::new(
                "customer support",
                "You can contact our customer support at support@fashionstore.com \
                 or call +1 800 123 4567.",
            ),
        ];
        // Entries above are all non-empty; construction cannot fail.
        Self { entries }
    }
}
