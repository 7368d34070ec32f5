//! # Derived Spending Aggregates
//!
//! Pure sums and group-bys over the expense list currently on screen. The
//! backend owns the records; these numbers exist only to feed the overview
//! charts and are recomputed from whatever slice was last fetched.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shared::Expense;

/// Total spend within one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Total spend on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Everything the overview screen charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingSummary {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    /// Per-category totals, largest first (ties break alphabetically).
    pub by_category: Vec<CategoryTotal>,
    /// Per-day totals in ascending date order.
    pub daily: Vec<DailyTotal>,
}

/// Compute the spending summary for a slice of expenses.
pub fn summarize(expenses: &[Expense]) -> SpendingSummary {
    if expenses.is_empty() {
        return SpendingSummary::default();
    }

    let mut total = 0.0;
    let mut categories: BTreeMap<&str, f64> = BTreeMap::new();
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for expense in expenses {
        total += expense.amount;
        *categories.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
        *days.entry(expense.expense_date).or_insert(0.0) += expense.amount;
    }

    let mut by_category: Vec<CategoryTotal> = categories
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    // BTreeMap iteration is already alphabetical, and the sort is stable.
    by_category.sort_by(|a, b| b.total.total_cmp(&a.total));

    let daily = days
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect();

    SpendingSummary {
        total,
        count: expenses.len(),
        average: total / expenses.len() as f64,
        by_category,
        daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::test_expense;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, day).unwrap()
    }

    #[test]
    fn empty_slice_yields_default_summary() {
        assert_eq!(summarize(&[]), SpendingSummary::default());
    }

    #[test]
    fn totals_and_average() {
        let expenses = vec![
            test_expense("e-1", 10.0, "groceries", date(1)),
            test_expense("e-2", 30.0, "transport", date(2)),
        ];
        let summary = summarize(&expenses);
        assert_eq!(summary.total, 40.0);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, 20.0);
    }

    #[test]
    fn categories_ordered_by_descending_spend() {
        let expenses = vec![
            test_expense("e-1", 5.0, "coffee", date(1)),
            test_expense("e-2", 100.0, "rent", date(1)),
            test_expense("e-3", 7.0, "coffee", date(2)),
            test_expense("e-4", 12.0, "groceries", date(3)),
        ];
        let summary = summarize(&expenses);
        let order: Vec<&str> = summary
            .by_category
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(order, vec!["rent", "coffee", "groceries"]);
        assert_eq!(summary.by_category[1].total, 12.0);
    }

    #[test]
    fn equal_category_totals_break_alphabetically() {
        let expenses = vec![
            test_expense("e-1", 10.0, "zoo", date(1)),
            test_expense("e-2", 10.0, "aquarium", date(1)),
        ];
        let summary = summarize(&expenses);
        assert_eq!(summary.by_category[0].category, "aquarium");
        assert_eq!(summary.by_category[1].category, "zoo");
    }

    #[test]
    fn daily_series_is_date_ordered_and_grouped() {
        let expenses = vec![
            test_expense("e-1", 4.0, "coffee", date(9)),
            test_expense("e-2", 6.0, "coffee", date(2)),
            test_expense("e-3", 1.0, "coffee", date(9)),
        ];
        let summary = summarize(&expenses);
        assert_eq!(
            summary.daily,
            vec![
                DailyTotal {
                    date: date(2),
                    total: 6.0
                },
                DailyTotal {
                    date: date(9),
                    total: 5.0
                },
            ]
        );
    }
}
