//! Flat-file persistence for the stock ledger and the failed-order log.
//!
//! The on-disk format is deliberately plain: delimited text, one record per
//! line, documented in [`row`]. All IO here fails soft — a missing input file
//! is a normal first run, and a write failure is reported to the caller
//! without touching in-memory state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod failed_orders_file;
pub mod inventory_file;
pub mod row;

pub use failed_orders_file::save_failed_orders;
pub use inventory_file::{LoadedInventory, load_inventory, save_inventory};
pub use row::{FAILED_ORDER_HEADER, REASON_SUBSTITUTE, RowError};

/// Store-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened, read, or written.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A written file came back empty on verification.
    #[error("{path}: file is empty after write")]
    EmptyAfterWrite { path: PathBuf },
}

impl StoreError {
    fn io(path: &std::path::Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
