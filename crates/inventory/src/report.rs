//! Printable stock report.

use stockroom_core::Quantity;

/// Snapshot of the store rendered one item per line, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    lines: Vec<(String, Quantity)>,
}

impl Report {
    pub(crate) fn new(lines: Vec<(String, Quantity)>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[(String, Quantity)] {
        &self.lines
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report")?;
        for (name, quantity) in &self.lines {
            writeln!(f, "{name} -> {quantity}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_only_header() {
        assert_eq!(Report::default().to_string(), "Items Report\n");
    }

    #[test]
    fn one_line_per_item() {
        let report = Report::new(vec![("apple".to_string(), 7), ("pear".to_string(), 0)]);
        assert_eq!(report.to_string(), "Items Report\napple -> 7\npear -> 0\n");
    }
}
