//! CLI for querying the catalog from a terminal
//!
//! Runs the same entry points as the API against the Postgres store and
//! prints JSON to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketplace_core::common::{Actor, TagId};
use marketplace_core::config::Config;
use marketplace_core::domains::catalog::actions::best_match;
use marketplace_core::domains::catalog::models::ItemType;
use marketplace_core::domains::resources::actions::get_resources;
use marketplace_core::domains::resources::query::{GetResourcesParams, ResourceScope, SortMode};
use marketplace_core::domains::tag::actions::get_available_filter_tags;
use marketplace_core::kernel::ServerDeps;
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog_cli")]
#[command(about = "Query catalog filters and resources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter groups offered for a category
    Filters {
        item_type: ItemType,
        item_slug: String,
        category: String,
    },

    /// One page of resources
    Resources {
        item_type: ItemType,
        item_slug: String,
        #[arg(long)]
        category: Option<String>,
        /// Tag id a resource must carry; repeat for several
        #[arg(long = "tag")]
        tags: Vec<TagId>,
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Best-scoring item for a query
    BestMatch {
        query: String,
        #[arg(long)]
        item_type: Option<ItemType>,
    },
}

fn output<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

async fn get_deps() -> Result<ServerDeps> {
    let config = Config::from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    Ok(ServerDeps::postgres(pool, config.page_defaults()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let deps = get_deps().await?;
    let actor = Actor::system();

    match cli.command {
        Commands::Filters {
            item_type,
            item_slug,
            category,
        } => {
            let filters =
                get_available_filter_tags(&item_slug, item_type, &category, &actor, &deps).await?;
            output(&filters)
        }
        Commands::Resources {
            item_type,
            item_slug,
            category,
            tags,
            query,
            sort,
            page,
            limit,
        } => {
            let params = GetResourcesParams {
                scope: ResourceScope::new(item_slug, item_type).with_optional_category(category),
                selected_tag_ids: tags,
                query,
                sort: SortMode::parse_lenient(sort.as_deref()),
                page,
                limit,
            };
            let response = get_resources(&params, &actor, &deps).await?;
            output(&response)
        }
        Commands::BestMatch { query, item_type } => {
            let item = best_match(item_type, &query, &actor, &deps).await?;
            output(&item)
        }
    }
}
