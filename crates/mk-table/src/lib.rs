//! Loads the overlay CSV tables into id-keyed maps.

mod loader;

pub use loader::{load_table, read_table, Table};
pub use mk_core::TableRecord;
