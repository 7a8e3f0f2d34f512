use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One package on the conveyor belt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    /// Lower value = more urgent.
    pub priority: u32,
    pub weight_kg: f32,
}

impl Package {
    pub fn new(id: impl Into<String>, priority: u32, weight_kg: f32) -> Self {
        Self {
            id: id.into(),
            priority,
            weight_kg,
        }
    }
}

/// Dispatch order: ascending priority, ties broken by ascending weight.
pub fn dispatch_order(a: &Package, b: &Package) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.weight_kg.total_cmp(&b.weight_kg))
}

/// Sort packages into dispatch order.
///
/// Stable: packages with equal priority and weight keep their relative order.
pub fn sort_packages(packages: &mut [Package]) {
    packages.sort_by(dispatch_order);
}

/// Render the fixed-width three-column dispatch table.
pub fn render_table(packages: &[Package]) -> String {
    let mut out = String::from("=== Sorted Conveyor Belt ===\n");
    out.push_str(&format!(
        "{:<10}{:<10}{:<10}\n",
        "ID", "Priority", "Weight (kg)"
    ));
    for package in packages {
        out.push_str(&format!(
            "{:<10}{:<10}{:<10.1}\n",
            package.id, package.priority, package.weight_kg
        ));
    }
    out
}

/// The demo's fixed input set.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("PKG1", 3, 5.2),
        Package::new("PKG2", 1, 7.5),
        Package::new("PKG3", 2, 4.0),
        Package::new("PKG4", 1, 2.3),
        Package::new("PKG5", 3, 5.2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_sorts_by_priority_then_weight() {
        let mut packages = sample_packages();
        sort_packages(&mut packages);

        let ids: Vec<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PKG4", "PKG2", "PKG3", "PKG1", "PKG5"]);
    }

    #[test]
    fn equal_priority_and_weight_keep_insertion_order() {
        let mut packages = vec![
            Package::new("LATER", 2, 1.0),
            Package::new("FIRST", 1, 5.0),
            Package::new("SECOND", 1, 5.0),
        ];
        sort_packages(&mut packages);

        let ids: Vec<&str> = packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["FIRST", "SECOND", "LATER"]);
    }

    #[test]
    fn table_renders_one_fixed_width_row_per_package() {
        let table = render_table(&[Package::new("PKG4", 1, 2.3)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "=== Sorted Conveyor Belt ===");
        assert!(lines[1].starts_with("ID        Priority  "));
        assert_eq!(lines[2], "PKG4      1         2.3       ");
    }
}
