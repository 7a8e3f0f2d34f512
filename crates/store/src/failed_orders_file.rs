//! Save of the failed-orders file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use stockroom_inventory::FailedOrderLog;

use crate::StoreError;
use crate::row::{FAILED_ORDER_HEADER, encode_failed_order};

/// Write the failed-order log to `path`: the fixed header row, then one row
/// per entry in insertion order. Returns the number of entries written.
///
/// After writing, the file is checked and an empty result is reported as
/// [`StoreError::EmptyAfterWrite`]; the caller treats that as a warning, not
/// a reason to retry.
pub fn save_failed_orders(path: &Path, log: &FailedOrderLog) -> Result<usize, StoreError> {
    let file = File::create(path).map_err(|source| StoreError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{FAILED_ORDER_HEADER}").map_err(|source| StoreError::io(path, source))?;
    for order in log.entries() {
        writeln!(writer, "{}", encode_failed_order(order))
            .map_err(|source| StoreError::io(path, source))?;
    }
    writer.flush().map_err(|source| StoreError::io(path, source))?;

    let written = fs::metadata(path)
        .map_err(|source| StoreError::io(path, source))?
        .len();
    if written == 0 {
        return Err(StoreError::EmptyAfterWrite { path: path.to_path_buf() });
    }

    Ok(log.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    use stockroom_core::ProductId;

    fn pid(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn writes_header_then_entries_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failed_orders.csv");

        let mut log = FailedOrderLog::new();
        log.record(pid("B"), 1, "not found");
        log.record(pid("A"), 100, "insufficient stock, requested=100, available=5");

        let count = save_failed_orders(&path, &log).unwrap();
        assert_eq!(count, 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ProductID,Quantity,Reason",
                "B,1,not found",
                "A,100,insufficient stock; requested=100; available=5",
            ]
        );
    }

    #[test]
    fn every_row_has_exactly_three_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failed_orders.csv");

        let mut log = FailedOrderLog::new();
        log.record(pid("A"), 9, "a, very, comma, heavy, reason");
        save_failed_orders(&path, &log).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        for line in contents.lines() {
            assert_eq!(line.split(',').count(), 3, "bad row: {line:?}");
        }
    }

    #[test]
    fn unwritable_path_reports_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_failed_orders(dir.path(), &FailedOrderLog::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
