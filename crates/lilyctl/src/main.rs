//! Lily Control - chat with the catalog from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use lily_core::{route, Catalog, FaqTable, JaroWinklerMatcher, ResolvedIntent};
use lilyctl::config::{LilyConfig, CONFIG_PATH};
use lilyctl::llm::LlmClient;
use lilyctl::loader::load_catalog;
use lilyctl::render;

#[derive(Parser)]
#[command(name = "lilyctl")]
#[command(about = "Lily - AI shopping assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,

    /// Catalog CSV path (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// The question
        query: String,

        /// Minimum price filter
        #[arg(long, default_value_t = 0.0)]
        min_price: f64,

        /// Maximum price filter
        #[arg(long, default_value_t = 999_999.0)]
        max_price: f64,

        /// Print the resolved intent as JSON instead of rendering it
        #[arg(long)]
        json: bool,

        /// Never call the LLM fallback
        #[arg(long)]
        no_llm: bool,
    },

    /// Interactive chat loop
    Chat {
        /// Minimum price filter
        #[arg(long, default_value_t = 0.0)]
        min_price: f64,

        /// Maximum price filter
        #[arg(long, default_value_t = 999_999.0)]
        max_price: f64,

        /// Never call the LLM fallback
        #[arg(long)]
        no_llm: bool,
    },

    /// List catalog categories
    Categories,

    /// List catalog subcategories
    Subcategories,

    /// List the canned FAQ answers
    Faq,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = LilyConfig::load(&cli.config)?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path.display().to_string();
    }

    // Catalog problems are fatal before any query is accepted.
    let catalog = load_catalog(Path::new(&config.catalog.path))?;
    let faq = FaqTable::default();

    match cli.command {
        Commands::Ask {
            query,
            min_price,
            max_price,
            json,
            no_llm,
        } => {
            answer_one(
                &query, min_price, max_price, json, no_llm, &catalog, &faq, &config,
            )
            .await?;
        }
        Commands::Chat {
            min_price,
            max_price,
            no_llm,
        } => {
            chat_loop(min_price, max_price, no_llm, &catalog, &faq, &config).await?;
        }
        Commands::Categories => {
            render::print_intent(&ResolvedIntent::CategoryList {
                categories: catalog.categories(),
            });
        }
        Commands::Subcategories => {
            render::print_intent(&ResolvedIntent::SubcategoryList {
                subcategories: catalog.subcategories(),
            });
        }
        Commands::Faq => {
            render::print_faq(&faq);
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn answer_one(
    query: &str,
    min_price: f64,
    max_price: f64,
    json: bool,
    no_llm: bool,
    catalog: &Catalog,
    faq: &FaqTable,
    config: &LilyConfig,
) -> Result<()> {
    // InvalidRange surfaces here as-is; bounds are never swapped.
    let intent = route(
        query,
        min_price,
        max_price,
        catalog,
        faq,
        &JaroWinklerMatcher,
        &config.router,
    )?;

    if json {
        return render::print_intent_json(&intent);
    }

    if let ResolvedIntent::Unhandled { query } = &intent {
        if !no_llm {
            // The client is built per unhandled query; catalog-only
            // usage never needs an API key.
            let llm = LlmClient::from_config(&config.llm)?;
            let answer = llm.ask(query).await?;
            println!("{}", answer);
            return Ok(());
        }
    }

    render::print_intent(&intent);
    Ok(())
}

async fn chat_loop(
    min_price: f64,
    max_price: f64,
    no_llm: bool,
    catalog: &Catalog,
    faq: &FaqTable,
    config: &LilyConfig,
) -> Result<()> {
    println!("Lily - ask about products, categories, or store policies. Empty line quits.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        if let Err(err) = answer_one(
            query, min_price, max_price, false, no_llm, catalog, faq, config,
        )
        .await
        {
            eprintln!("error: {:#}", err);
        }
    }

    Ok(())
}
