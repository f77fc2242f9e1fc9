use anyhow::{Context, Result};
use arcade_api::store::{CatalogStore, PgCatalog};
use arcade_shared::{default_catalog, NewCatalogItem};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::time::Instant;

const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/arcade";

#[derive(Parser)]
#[command(name = "arcade-seeder")]
#[command(about = "Seed the popular-items catalog database")]
struct Args {
    /// Falls back to DATABASE_URL, then to a local default
    #[arg(long)]
    database_url: Option<String>,

    /// JSON array of catalog items to load instead of the built-in catalog
    #[arg(long)]
    data_file: Option<String>,

    /// Delete existing items before seeding
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    println!("{}", "=".repeat(80).cyan());
    println!("{}", "Arcade Catalog Seeder".bold().cyan());
    println!("{}", "=".repeat(80).cyan());
    println!();

    let database_url = args
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let catalog = PgCatalog::connect(&database_url, 5)
        .await
        .context("Failed to connect to database")?;

    catalog.migrate().await.context("Failed to run migrations")?;

    let start_time = Instant::now();

    let items = match args.data_file {
        Some(ref file_path) => {
            println!("{} Loading catalog data from: {}", "ℹ".blue(), file_path);
            load_catalog_file(file_path)?
        }
        None => default_catalog(),
    };

    if args.force {
        let removed = catalog.clear().await.context("Failed to clear catalog")?;
        println!("{} Removed {} existing items", "✓".green(), removed);
    }

    let inserted = catalog
        .seed_if_empty(items)
        .await
        .context("Failed to seed catalog")?;
    if inserted == 0 {
        println!(
            "{} Catalog already holds {} items, nothing inserted (use --force to reseed)",
            "ℹ".blue(),
            catalog.count().await?
        );
    } else {
        println!("{} Inserted {} catalog items", "✓".green(), inserted);
    }

    let elapsed = start_time.elapsed();
    println!();
    println!("{}", "=".repeat(80).cyan());
    println!(
        "{} Seeding completed in {:.2}s",
        "✓".green().bold(),
        elapsed.as_secs_f64()
    );
    println!("{}", "=".repeat(80).cyan());

    Ok(())
}

fn load_catalog_file(file_path: &str) -> Result<Vec<NewCatalogItem>> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read data file: {}", file_path))?;
    parse_catalog(&content).with_context(|| format!("Failed to parse JSON: {}", file_path))
}

fn parse_catalog(content: &str) -> Result<Vec<NewCatalogItem>> {
    let items: Vec<NewCatalogItem> = serde_json::from_str(content)?;
    if let Some(position) = items.iter().position(|item| {
        [&item.name, &item.price, &item.description, &item.rating]
            .iter()
            .any(|field| field.trim().is_empty())
    }) {
        anyhow::bail!("item {} has an empty required field", position);
    }
    Ok(items)
}
