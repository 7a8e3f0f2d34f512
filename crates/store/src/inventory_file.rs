//! Load and save of the inventory file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use stockroom_inventory::StockLedger;

use crate::StoreError;
use crate::row::InventoryRow;

/// Result of loading the inventory file.
#[derive(Debug)]
pub struct LoadedInventory {
    pub ledger: StockLedger,
    /// False when the file did not exist (normal first-run state).
    pub found: bool,
    /// Lines dropped because they failed to decode.
    pub skipped: usize,
}

/// Read the inventory file at `path`.
///
/// A missing file is not an error: the result carries an empty ledger with
/// `found = false`. A line that fails to decode is warned about and skipped;
/// duplicate identifiers keep the last occurrence.
pub fn load_inventory(path: &Path) -> Result<LoadedInventory, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(LoadedInventory {
                ledger: StockLedger::new(),
                found: false,
                skipped: 0,
            });
        }
        Err(source) => return Err(StoreError::io(path, source)),
    };

    let mut ledger = StockLedger::new();
    let mut skipped = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| StoreError::io(path, source))?;
        if line.is_empty() {
            continue;
        }
        match InventoryRow::parse(&line) {
            Ok(row) => ledger.set_stock(row.product_id, row.quantity),
            Err(e) => {
                skipped += 1;
                tracing::warn!(error = %e, line = %line, "skipping undecodable inventory line");
            }
        }
    }

    Ok(LoadedInventory { ledger, found: true, skipped })
}

/// Overwrite `path` with one line per record, in ledger iteration order.
///
/// On failure the in-memory ledger is unaffected; the caller reports the
/// changes as not durably saved and continues.
pub fn save_inventory(path: &Path, ledger: &StockLedger) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|source| StoreError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    for (product_id, quantity) in ledger.iter() {
        let row = InventoryRow { product_id: product_id.clone(), quantity };
        writeln!(writer, "{}", row.encode()).map_err(|source| StoreError::io(path, source))?;
    }
    writer.flush().map_err(|source| StoreError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use stockroom_core::ProductId;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn missing_file_loads_as_empty_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_inventory(&dir.path().join("inventory.csv")).unwrap();

        assert!(!loaded.found);
        assert!(loaded.ledger.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn malformed_quantity_skips_only_that_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, "A,10\nB,many\nC,3\n").unwrap();

        let loaded = load_inventory(&path).unwrap();
        assert!(loaded.found);
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.ledger.len(), 2);
        assert_eq!(loaded.ledger.stock(&pid("A")), Some(10));
        assert_eq!(loaded.ledger.stock(&pid("B")), None);
        assert_eq!(loaded.ledger.stock(&pid("C")), Some(3));
    }

    #[test]
    fn line_without_delimiter_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, "A,10\njunk\n").unwrap();

        let loaded = load_inventory(&path).unwrap();
        assert_eq!(loaded.skipped, 1);
        assert_eq!(loaded.ledger.len(), 1);
    }

    #[test]
    fn duplicate_identifiers_keep_the_last_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        fs::write(&path, "A,10\nA,4\n").unwrap();

        let loaded = load_inventory(&path).unwrap();
        assert_eq!(loaded.ledger.stock(&pid("A")), Some(4));
    }

    #[test]
    fn save_load_save_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");

        let ledger =
            StockLedger::from_iter([(pid("B"), 2), (pid("A"), 10), (pid("C"), 0)]);
        save_inventory(&path, &ledger).unwrap();
        let first = fs::read(&path).unwrap();

        let reloaded = load_inventory(&path).unwrap().ledger;
        assert_eq!(reloaded, ledger);
        save_inventory(&path, &reloaded).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn save_is_ordered_ascending_by_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");

        let ledger = StockLedger::from_iter([(pid("C"), 1), (pid("A"), 2)]);
        save_inventory(&path, &ledger).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A,2\nC,1\n");
    }

    #[test]
    fn save_to_an_unwritable_path_reports_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not creatable as a file.
        let err = save_inventory(dir.path(), &StockLedger::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
