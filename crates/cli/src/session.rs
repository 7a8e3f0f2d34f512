//! The interactive session state machine.
//!
//! Startup -> optional restock -> order loop -> shutdown. Each state runs
//! exactly once (the order loop repeats internally); nothing is retried or
//! rolled back, and every failure path degrades to "operator informed,
//! process continues".

use std::io::{BufRead, Write};
use std::path::PathBuf;

use stockroom_inventory::{FailedOrderLog, OrderOutcome, Restock, StockLedger};
use stockroom_store as store;

use crate::prompt::Console;

/// File locations for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub inventory_path: PathBuf,
    pub failed_orders_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.csv"),
            failed_orders_path: PathBuf::from("failed_orders.csv"),
        }
    }
}

/// One interactive run: owns the ledger, the failed-order log, and the
/// console for its whole lifetime.
pub struct Session<R, W> {
    console: Console<R, W>,
    config: SessionConfig,
    ledger: StockLedger,
    failed_orders: FailedOrderLog,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, config: SessionConfig) -> Self {
        Self {
            console,
            config,
            ledger: StockLedger::new(),
            failed_orders: FailedOrderLog::new(),
        }
    }

    /// Give back the console (tests inspect the transcript this way).
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Drive the whole session.
    ///
    /// The only hard errors here are console IO failures (operator closed the
    /// input stream); file trouble is reported and degraded past.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.console.say("=== Inventory Management System ===")?;
        self.startup()?;
        self.restock()?;
        self.display_inventory()?;
        self.order_loop()?;
        self.shutdown()?;
        Ok(())
    }

    fn startup(&mut self) -> anyhow::Result<()> {
        match store::load_inventory(&self.config.inventory_path) {
            Ok(loaded) => {
                if loaded.found {
                    self.console.say(format!(
                        "Existing inventory loaded from {}.",
                        self.config.inventory_path.display()
                    ))?;
                    self.console.say(format!(
                        "Current inventory contains {} products.",
                        loaded.ledger.len()
                    ))?;
                    if loaded.skipped > 0 {
                        self.console.say(format!(
                            "Warning: {} line(s) could not be read and were skipped.",
                            loaded.skipped
                        ))?;
                    }
                } else {
                    self.console
                        .say("No existing inventory file found. Starting with empty inventory.")?;
                }
                self.ledger = loaded.ledger;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read inventory file");
                self.console.say(
                    "Warning: inventory file could not be read. Starting with empty inventory.",
                )?;
            }
        }
        Ok(())
    }

    fn restock(&mut self) -> anyhow::Result<()> {
        if !self
            .console
            .yes_no("Do you want to add new items to inventory? (y/n): ")?
        {
            return Ok(());
        }

        let count = self
            .console
            .quantity("Enter number of products to add to inventory: ")?;
        for i in 0..count {
            self.console.say(format!("\nProduct {}:", i + 1))?;
            let id = self.console.product_id("Enter Product ID: ")?;
            let amount = self.console.quantity("Enter Stock Count: ")?;

            if let Restock::Merged { total } = self.ledger.add_stock(id, amount) {
                self.console.say(format!(
                    "Product already exists. Adding to current stock (now {total})."
                ))?;
            }
        }
        Ok(())
    }

    fn display_inventory(&mut self) -> anyhow::Result<()> {
        self.console.say("\nCurrent Inventory:")?;
        self.console.say("-------------------")?;
        self.console.say("Product ID | Quantity")?;
        for (id, quantity) in self.ledger.iter() {
            self.console.say(format!("{id} | {quantity}"))?;
        }
        self.console.say("-------------------")?;
        Ok(())
    }

    fn order_loop(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.say("\nPlace an Order")?;
            let id = self.console.product_id("Enter Product ID: ")?;
            let quantity = self.console.quantity("Enter Quantity: ")?;

            match self.ledger.place_order(&id, quantity) {
                OrderOutcome::Fulfilled { remaining } => {
                    self.console
                        .say(format!("Order processed. Remaining stock: {remaining}"))?;
                }
                OrderOutcome::Rejected(reason) => {
                    self.console.say(format!("Order rejected: {reason}"))?;
                    self.console
                        .say("This order has been recorded in the failed orders log.")?;
                    self.failed_orders.record(id, quantity, reason.to_string());
                }
            }

            if !self.console.yes_no("Place another order? (y/n): ")? {
                return Ok(());
            }
        }
    }

    fn shutdown(&mut self) -> anyhow::Result<()> {
        match store::save_inventory(&self.config.inventory_path, &self.ledger) {
            Ok(()) => self.console.say(format!(
                "\nInventory saved to {}.",
                self.config.inventory_path.display()
            ))?,
            Err(e) => {
                tracing::error!(error = %e, "failed to save inventory");
                self.console.say(
                    "\nWarning: inventory could not be saved; changes from this session are not durable.",
                )?;
            }
        }

        if self.failed_orders.is_empty() {
            self.console.say("No failed orders to save.")?;
            return Ok(());
        }

        match store::save_failed_orders(&self.config.failed_orders_path, &self.failed_orders) {
            Ok(count) => self.console.say(format!(
                "{} failed orders saved to {}.",
                count,
                self.config.failed_orders_path.display()
            ))?,
            Err(e) => {
                tracing::warn!(error = %e, "failed-order log may not have been written");
                self.console
                    .say("Warning: failed orders file may be empty or not written correctly.")?;
            }
        }
        Ok(())
    }
}
