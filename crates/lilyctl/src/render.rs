//! Terminal rendering of resolved intents.

use owo_colors::OwoColorize;

use lily_core::{FaqTable, ProductHit, ResolvedIntent};

/// Print one intent the way the chat UI shows it. `Unhandled` is not
/// handled here - the caller sends it to the LLM and prints the
/// reply text as-is.
pub fn print_intent(intent: &ResolvedIntent) {
    match intent {
        ResolvedIntent::FaqAnswer { answer } => {
            println!("{}", answer);
        }
        ResolvedIntent::CategoryList { categories } => {
            print_labels("Available categories:", categories);
        }
        ResolvedIntent::SubcategoryList { subcategories } => {
            print_labels("Available subcategories:", subcategories);
        }
        ResolvedIntent::ProductResults { products, .. } => {
            println!("{}", "Here are some matching products:".bold());
            for product in products {
                print_product(product);
            }
        }
        ResolvedIntent::NoProductsFound { selector } => {
            println!(
                "{}",
                format!("No products found for '{}' in this price range.", selector).yellow()
            );
        }
        ResolvedIntent::NoMatch => {
            println!(
                "{}",
                "No matching products found. Try searching by category or subcategory.".yellow()
            );
        }
        ResolvedIntent::Unhandled { query } => {
            // Only reached in --no-llm runs.
            println!("I couldn't answer \"{}\" from the catalog.", query);
        }
    }
}

fn print_labels(heading: &str, labels: &[String]) {
    println!("{}", heading.bold());
    for label in labels {
        println!("  - {}", label);
    }
}

fn print_product(product: &ProductHit) {
    println!(
        "  {} - {} (ID: {})",
        product.title.bold(),
        format!("${:.2}", product.price).green(),
        product.id.dimmed()
    );
}

/// Print the canned answers, in lookup order.
pub fn print_faq(faq: &FaqTable) {
    for entry in faq.entries() {
        println!("{}", entry.trigger.bold());
        println!("  {}", entry.answer);
    }
}

/// Machine-readable dump for --json runs.
pub fn print_intent_json(intent: &ResolvedIntent) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(intent)?);
    Ok(())
}
