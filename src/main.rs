use clap::Parser;
use rocket_cart::domain::ports::ConfigProvider;
use rocket_cart::utils::{logger, validation::Validate};
use rocket_cart::{CartStore, CatalogApi, CliConfig, JsonFileStorage, TomlConfig, TracingNotifier};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            logger::init_cli_logger(config.verbose());
            check_config(&config);
            run(config).await
        }
        None => {
            logger::init_cli_logger(cli.verbose);
            check_config(&cli);
            run(cli).await
        }
    }
}

fn check_config(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: impl ConfigProvider) -> anyhow::Result<()> {
    tracing::info!("Starting rocket-cart CLI");
    if config.verbose() {
        tracing::debug!(
            "Catalog endpoint: {}, storage path: {}",
            config.api_endpoint(),
            config.storage_path()
        );
    }

    let catalog = CatalogApi::from_config(&config);
    let storage = JsonFileStorage::from_config(&config);
    let mut store = CartStore::new(catalog, storage, TracingNotifier).await;

    println!("Loaded cart with {} item(s).", store.len());
    println!("Commands: add <id> | remove <id> | update <id> <amount> | show | total | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["add", id] => match id.parse() {
                Ok(id) => store.add_product(id).await?,
                Err(_) => println!("invalid product id"),
            },
            ["remove", id] => match id.parse() {
                Ok(id) => store.remove_product(id).await?,
                Err(_) => println!("invalid product id"),
            },
            ["update", id, amount] => match (id.parse(), amount.parse()) {
                (Ok(id), Ok(amount)) => store.update_product_amount(id, amount).await?,
                _ => println!("invalid product id or amount"),
            },
            ["show"] => {
                if store.is_empty() {
                    println!("cart is empty");
                }
                for item in store.cart() {
                    println!(
                        "{:>4}  {}  {} x {:.2} = {:.2}",
                        item.id,
                        item.title,
                        item.amount,
                        item.price,
                        item.subtotal()
                    );
                }
            }
            ["total"] => println!("total: {:.2}", store.total()),
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => println!("unknown command"),
        }
    }

    Ok(())
}
