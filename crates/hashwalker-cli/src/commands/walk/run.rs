//! Walk command: Checksum a directory tree and print the report

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use hashwalker_core::{write_report, Inventory, InventoryBuilder};
use tracing::info;

use crate::signal::{abort_on_interrupt, race, shutdown_signal, Outcome};

/// Run the walk command
///
/// Walking, rendering, and writing to stdout all happen on one blocking
/// task raced against SIGINT/SIGTERM. A signal at any point before the
/// report is fully written aborts the process.
///
/// # Errors
/// Returns an error if the root is invalid or the report cannot be written.
pub async fn run(root: &Path, trim: &str) -> Result<()> {
    let signal = shutdown_signal();
    info!("Walking {}", root.display());

    let builder = InventoryBuilder::new(root).with_trim_prefix(trim);
    let task =
        tokio::task::spawn_blocking(move || walk_and_emit(&builder, std::io::stdout().lock()));

    match race(task, signal).await {
        Outcome::Completed(joined) => joined?,
        Outcome::Interrupted(signal) => abort_on_interrupt(signal),
    }
}

/// Build the inventory and write its report to `writer`
///
/// # Errors
/// Returns an error if the walk fails at the root or the report cannot be written.
pub fn walk_and_emit(builder: &InventoryBuilder, writer: impl Write) -> Result<()> {
    let inventory = build_inventory(builder)?;
    emit_report(writer, &inventory)
}

/// Walk the tree and collect records
///
/// # Errors
/// Returns an error if the root is missing, not a directory, or unreadable.
pub fn build_inventory(builder: &InventoryBuilder) -> Result<Inventory> {
    let inventory = builder.build()?;
    log_walk_summary(&inventory);
    Ok(inventory)
}

/// Write the finished inventory as a JSON report
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn emit_report(writer: impl Write, inventory: &Inventory) -> Result<()> {
    write_report(writer, inventory.records())?;
    Ok(())
}

fn log_walk_summary(inventory: &Inventory) {
    info!(
        "✓ Walk completed: {} files, {} skipped",
        inventory.len(),
        inventory.skipped()
    );
}
