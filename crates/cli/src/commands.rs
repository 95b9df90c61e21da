use anyhow::{Context, Result, bail};
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore, LoadOutcome};

use crate::config::{CliConfig, Command};

pub fn run(command: Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Add { item, quantity } => cmd_add(config, &item, quantity),
        Command::Remove { item, quantity } => cmd_remove(config, &item, quantity),
        Command::Get { item } => cmd_get(config, &item),
        Command::Low { threshold } => cmd_low(config, threshold),
        Command::Report => cmd_report(config),
        Command::Demo => cmd_demo(config),
    }
}

/// Load the data file for a command that will write it back.
///
/// A missing file starts an empty store; an unreadable one is left alone
/// rather than overwritten.
fn open_for_update(config: &CliConfig) -> Result<InventoryStore> {
    let mut store = InventoryStore::new();
    match store.load_from(&config.data_file) {
        LoadOutcome::Loaded { .. } | LoadOutcome::NotFound => Ok(store),
        LoadOutcome::Malformed(reason) | LoadOutcome::InvalidFormat(reason) => bail!(
            "refusing to overwrite {}: {reason}",
            config.data_file.display()
        ),
    }
}

/// Load the data file for a read-only command; any failure yields an empty store.
fn open_for_read(config: &CliConfig) -> InventoryStore {
    let mut store = InventoryStore::new();
    store.load_from(&config.data_file);
    store
}

fn cmd_add(config: &CliConfig, item: &str, quantity: i64) -> Result<()> {
    let mut store = open_for_update(config)?;
    let line = store.add(item, quantity)?.to_string();
    store
        .save_to(&config.data_file)
        .with_context(|| format!("failed to save {}", config.data_file.display()))?;
    println!("{line}");
    Ok(())
}

fn cmd_remove(config: &CliConfig, item: &str, quantity: i64) -> Result<()> {
    let mut store = open_for_update(config)?;
    store.remove(item, quantity)?;
    store
        .save_to(&config.data_file)
        .with_context(|| format!("failed to save {}", config.data_file.display()))?;
    match store.get_quantity(item) {
        Some(left) => println!("{item}: {left}"),
        None => println!("{item}: removed"),
    }
    Ok(())
}

fn cmd_get(config: &CliConfig, item: &str) -> Result<()> {
    let store = open_for_read(config);
    match store.get_quantity(item) {
        Some(quantity) => {
            println!("{quantity}");
            Ok(())
        }
        None => bail!("{item}: not found"),
    }
}

fn cmd_low(config: &CliConfig, threshold: i64) -> Result<()> {
    let store = open_for_read(config);
    for name in store.list_low_stock(threshold) {
        println!("{name}");
    }
    Ok(())
}

fn cmd_report(config: &CliConfig) -> Result<()> {
    let store = open_for_read(config);
    print!("{}", store.report());
    Ok(())
}

/// Walk through every store operation once. Soft failures are expected here
/// and only show up in the log.
fn cmd_demo(config: &CliConfig) -> Result<()> {
    let mut store = InventoryStore::new();

    if let Ok(entry) = store.add("apple", 10) {
        println!("{entry}");
    }
    let _ = store.add("banana", -2);
    let _ = store.remove("apple", 3);
    let _ = store.remove("orange", 1);

    match store.get_quantity("apple") {
        Some(quantity) => println!("Apple stock: {quantity}"),
        None => println!("Apple stock: none"),
    }
    println!("Low items: {:?}", store.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD));

    let _ = store.save_to(&config.data_file);
    store.load_from(&config.data_file);
    print!("{}", store.report());
    Ok(())
}
