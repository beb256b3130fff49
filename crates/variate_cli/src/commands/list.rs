//! List command implementation
//!
//! Prints the distribution catalogue with parameter symbols and bounds.

use variate_core::catalog::entries;

use crate::Result;

/// Renders the catalogue as a plain-text table.
pub fn render() -> String {
    let mut out = format!("{:<12} {:<20} {}\n", "ID", "Distribution", "Bounds");
    for spec in entries() {
        out.push_str(&format!(
            "{:<12} {:<20} {}\n",
            spec.id,
            spec.distribution.to_string(),
            spec.bounds.join(", ")
        ));
    }
    out
}

/// Run the list command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}
