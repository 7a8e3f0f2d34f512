//! Conveyor-belt dispatch demo: sort package records by priority, then
//! weight, and render the result as a fixed-width table.

pub mod package;

pub use package::{Package, dispatch_order, render_table, sample_packages, sort_packages};
