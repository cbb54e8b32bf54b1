//! Report generation business logic.
//!
//! Builds the ledger table: one row per item, followed by a footer with the
//! grand total, each payee's total and the settlement line. The report is
//! structured data first; `render` turns it into a fixed-width text table.

use crate::{
    core::settlement::{self, Participants, Settlement},
    entities::Item,
};
use chrono::NaiveDate;
use std::fmt;

/// One line of the ledger table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Who paid
    pub payee: String,
    /// When the expense was recorded
    pub date: NaiveDate,
    /// Expense description
    pub description: String,
    /// Amount paid
    pub expense: u64,
    /// Rows paid by the first participant are highlighted
    pub highlighted: bool,
}

/// Total spent by a single payee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeTotal {
    /// Payee name
    pub payee: String,
    /// Sum of that payee's expenses
    pub total: u64,
}

/// Complete ledger report with per-payee totals and the settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerReport {
    /// Item rows in ledger order
    pub rows: Vec<ReportRow>,
    /// Sum of both payees' totals
    pub grand_total: u64,
    /// First participant's total
    pub first: PayeeTotal,
    /// Second participant's total
    pub second: PayeeTotal,
    /// Who has to pay whom
    pub settlement: Settlement,
}

impl LedgerReport {
    /// Generates the report for the current items.
    #[must_use]
    pub fn build(items: &[Item], participants: &Participants) -> Self {
        let rows = items
            .iter()
            .map(|item| ReportRow {
                payee: item.payee_name.clone(),
                date: item.set_date,
                description: item.product.clone(),
                expense: item.price,
                highlighted: item.payee_name == participants.first(),
            })
            .collect();

        Self {
            rows,
            grand_total: settlement::grand_total(items, participants),
            first: PayeeTotal {
                payee: participants.first().to_string(),
                total: settlement::total_for(items, participants.first()),
            },
            second: PayeeTotal {
                payee: participants.second().to_string(),
                total: settlement::total_for(items, participants.second()),
            },
            settlement: settlement::settle(items, participants),
        }
    }

    /// Footer lines as `(label, value)` pairs, in display order.
    #[must_use]
    pub fn footer(&self) -> Vec<(String, String)> {
        vec![
            ("Total Expenses".to_string(), self.grand_total.to_string()),
            (
                format!("Total amount spent by {}", self.first.payee),
                self.first.total.to_string(),
            ),
            (
                format!("Total amount spent by {}", self.second.payee),
                self.second.total.to_string(),
            ),
            (
                self.settlement.message(),
                format_payable(self.settlement.payable),
            ),
        ]
    }

    /// Renders the report as a fixed-width text table.
    ///
    /// Highlighted rows are marked with `*` in the leftmost column.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date_w = "YYYY-MM-DD".len();

        let footer = self.footer();
        let payee_w = self
            .rows
            .iter()
            .map(|r| r.payee.chars().count())
            .chain(std::iter::once("Payee".len()))
            .max()
            .unwrap_or_default();
        let mut desc_w = self
            .rows
            .iter()
            .map(|r| r.description.chars().count())
            .chain(std::iter::once("Description".len()))
            .max()
            .unwrap_or_default();
        let expense_w = self
            .rows
            .iter()
            .map(|r| r.expense.to_string().len())
            .chain(footer.iter().map(|(_, value)| value.len()))
            .chain(std::iter::once("Expense".len()))
            .max()
            .unwrap_or_default();

        // Footer labels span the marker, payee, date and description columns
        let longest_label = footer
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let columns_w = 2 + payee_w + 3 + date_w + 3 + desc_w;
        desc_w += longest_label.saturating_sub(columns_w);
        let label_w = 2 + payee_w + 3 + date_w + 3 + desc_w;
        let rule = "-".repeat(label_w + 3 + expense_w);

        writeln!(
            f,
            "  {:<payee_w$} | {:<date_w$} | {:<desc_w$} | {:>expense_w$}",
            "Payee", "Date", "Description", "Expense"
        )?;
        writeln!(f, "{rule}")?;

        for row in &self.rows {
            let marker = if row.highlighted { '*' } else { ' ' };
            let date = row.date.format("%Y-%m-%d").to_string();
            writeln!(
                f,
                "{marker} {:<payee_w$} | {date:<date_w$} | {:<desc_w$} | {:>expense_w$}",
                row.payee, row.description, row.expense
            )?;
        }

        writeln!(f, "{rule}")?;
        for (label, value) in footer {
            writeln!(f, "{label:>label_w$} | {value:>expense_w$}")?;
        }

        Ok(())
    }
}

/// Formats a payable amount: whole rupees without decimals, halves with `.5`.
#[must_use]
pub fn format_payable(payable: f64) -> String {
    if payable.fract().abs() < f64::EPSILON {
        format!("{payable:.0}")
    } else {
        format!("{payable:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_format_payable_whole() {
        assert_eq!(format_payable(0.0), "0");
        assert_eq!(format_payable(30.0), "30");
    }

    #[test]
    fn test_format_payable_half() {
        assert_eq!(format_payable(50.5), "50.5");
    }

    #[test]
    fn test_build_report_totals() {
        let items = vec![
            test_item(1, "Rahul", 100),
            test_item(2, "Ramesh", 40),
            test_item(3, "Suresh", 500),
        ];
        let report = LedgerReport::build(&items, &Participants::default());

        assert_eq!(report.rows.len(), 3);
        assert!(report.rows[0].highlighted);
        assert!(!report.rows[1].highlighted);
        assert_eq!(report.grand_total, 140);
        assert_eq!(report.first.total, 100);
        assert_eq!(report.second.total, 40);
        assert_eq!(report.settlement.debtor, "Ramesh");
    }

    #[test]
    fn test_footer_lines() {
        let items = vec![test_item(1, "Rahul", 100), test_item(2, "Ramesh", 40)];
        let report = LedgerReport::build(&items, &Participants::default());

        assert_eq!(
            report.footer(),
            vec![
                ("Total Expenses".to_string(), "140".to_string()),
                ("Total amount spent by Rahul".to_string(), "100".to_string()),
                ("Total amount spent by Ramesh".to_string(), "40".to_string()),
                ("Ramesh has to pay".to_string(), "30".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_contains_rows_and_footer() {
        let items = vec![test_item(1, "Rahul", 100), test_item(2, "Ramesh", 40)];
        let rendered = LedgerReport::build(&items, &Participants::default()).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].contains("Payee"));
        assert!(lines[0].ends_with("Expense"));
        assert!(lines[2].starts_with("* Rahul "));
        assert!(lines[2].ends_with("100"));
        assert!(lines[3].starts_with("  Ramesh"));
        assert!(lines.iter().any(|l| l.contains("Ramesh has to pay |")));
        assert!(lines.last().is_some_and(|l| l.ends_with(" 30")));
    }

    #[test]
    fn test_render_columns_align() {
        let items = vec![
            test_item(1, "Rahul", 5),
            test_item(2, "Ramesh", 12_345),
        ];
        let rendered = LedgerReport::build(&items, &Participants::default()).render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_display_matches_render() {
        let items = vec![test_item(1, "Rahul", 7), test_item(2, "Ramesh", 8)];
        let report = LedgerReport::build(&items, &Participants::default());
        assert_eq!(format!("{report}"), report.render());
        let rendered = report.render();
        assert!(rendered.contains("Rahul has to pay |"));
        assert!(rendered.ends_with("    0.5\n"));
    }

    #[test]
    fn test_render_empty_ledger() {
        let rendered = LedgerReport::build(&[], &Participants::default()).render();
        assert!(rendered.contains("Total Expenses | "));
        assert!(rendered.contains("Ramesh has to pay"));
    }
}
