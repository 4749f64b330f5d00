//! Walk module: Build an inventory and print it as JSON

mod run;

pub use run::{build_inventory, emit_report, run, walk_and_emit};
