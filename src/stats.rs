//! Derived dashboard statistics. Everything here is pure and synchronous;
//! the dashboard recomputes on every render from whatever snapshots the
//! store currently holds, so partially-arrived data simply yields partial
//! numbers until the remaining fetches land.

use crate::models::{Expense, InventoryItem, Sale, SaleRecord, UdhaarRecord};

pub fn total_sales(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.total_amount).sum()
}

pub fn total_inventory(inventory: &[InventoryItem]) -> usize {
    inventory.len()
}

/// Sum of amounts due over records that are not settled. The dashboard
/// feeds this the pre-filtered unpaid list, but the filter is applied
/// here as well so a full snapshot sums correctly too.
pub fn pending_udhaar(records: &[UdhaarRecord]) -> f64 {
    records
        .iter()
        .filter(|record| record.status.is_open())
        .map(|record| record.amount_due)
        .sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Sale,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Sale => "Sale",
            TransactionKind::Expense => "Expense",
        }
    }
}

/// One row of the recent-transactions feed: a sale record or an expense
/// normalised to a single date and amount.
#[derive(Clone, PartialEq)]
pub struct RecentTransaction {
    pub kind: TransactionKind,
    pub date: String,
    pub amount: f64,
}

/// Merge sale records and expenses into one feed, newest first, capped
/// at five entries. Dates are ISO-8601 strings so lexicographic order is
/// chronological; ties keep merge order (sales ahead of expenses), which
/// is deliberately unspecified beyond being stable.
pub fn recent_transactions(sales: &[SaleRecord], expenses: &[Expense]) -> Vec<RecentTransaction> {
    let mut feed: Vec<RecentTransaction> = sales
        .iter()
        .map(|sale| RecentTransaction {
            kind: TransactionKind::Sale,
            date: sale.sale_date.clone(),
            amount: sale.total_amount,
        })
        .chain(expenses.iter().map(|expense| RecentTransaction {
            kind: TransactionKind::Expense,
            date: expense.expense_date.clone(),
            amount: expense.amount,
        }))
        .collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(5);
    feed
}

/// Calendar-day portion of a timestamp: the substring before the time
/// separator, or the whole string for date-only values.
pub fn day_of(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// Bucket sales by calendar day and sum the totals per bucket. Output
/// order is first-seen order of days in the source list, preserved with
/// a pair vector rather than a map.
pub fn sales_by_day(sales: &[Sale]) -> Vec<(String, f64)> {
    let mut buckets: Vec<(String, f64)> = Vec::new();
    for sale in sales {
        let day = day_of(&sale.sale_date);
        match buckets.iter_mut().find(|(key, _)| key.as_str() == day) {
            Some((_, total)) => *total += sale.total_amount,
            None => buckets.push((day.to_string(), sale.total_amount)),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UdhaarStatus;

    fn sale(id: i64, date: &str, amount: f64) -> Sale {
        Sale {
            sale_id: id,
            sale_date: date.to_string(),
            total_amount: amount,
        }
    }

    fn sale_record(id: i64, date: &str, amount: f64) -> SaleRecord {
        SaleRecord {
            sale_id: id,
            customer_name: "Asha".to_string(),
            sale_date: date.to_string(),
            total_amount: amount,
            payment_mode: "CASH".to_string(),
            sales_items: Vec::new(),
            udhaar: None,
        }
    }

    fn expense(id: i64, date: &str, amount: f64) -> Expense {
        Expense {
            expense_id: id,
            amount,
            category: "RENT".to_string(),
            description: String::new(),
            expense_date: date.to_string(),
        }
    }

    fn udhaar(amount_due: f64, status: UdhaarStatus) -> UdhaarRecord {
        UdhaarRecord {
            udhaar_id: 1,
            customer_name: "Ravi".to_string(),
            amount_due,
            due_date: String::new(),
            status,
        }
    }

    #[test]
    fn total_sales_is_zero_for_empty_list() {
        assert_eq!(total_sales(&[]), 0.0);
    }

    #[test]
    fn total_sales_sums_every_sale() {
        let sales = vec![
            sale(1, "2024-01-01T10:00", 100.0),
            sale(2, "2024-01-01T15:00", 50.0),
            sale(3, "2024-01-02T09:00", 30.0),
        ];
        assert_eq!(total_sales(&sales), 180.0);
    }

    #[test]
    fn sales_by_day_buckets_and_sums_without_duplicate_days() {
        let sales = vec![
            sale(1, "2024-01-01T10:00", 100.0),
            sale(2, "2024-01-01T15:00", 50.0),
            sale(3, "2024-01-02T09:00", 30.0),
        ];
        let buckets = sales_by_day(&sales);
        assert_eq!(
            buckets,
            vec![
                ("2024-01-01".to_string(), 150.0),
                ("2024-01-02".to_string(), 30.0),
            ]
        );
    }

    #[test]
    fn sales_by_day_keeps_first_seen_order() {
        let sales = vec![
            sale(1, "2024-02-05T09:00", 10.0),
            sale(2, "2024-02-01T09:00", 20.0),
            sale(3, "2024-02-05T17:00", 5.0),
        ];
        let buckets = sales_by_day(&sales);
        assert_eq!(buckets[0], ("2024-02-05".to_string(), 15.0));
        assert_eq!(buckets[1], ("2024-02-01".to_string(), 20.0));
    }

    #[test]
    fn day_of_handles_date_only_values() {
        assert_eq!(day_of("2024-01-01T10:00"), "2024-01-01");
        assert_eq!(day_of("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn pending_udhaar_counts_only_open_records() {
        let records = vec![
            udhaar(200.0, UdhaarStatus::Pending),
            udhaar(50.0, UdhaarStatus::Paid),
        ];
        assert_eq!(pending_udhaar(&records), 200.0);
    }

    #[test]
    fn pending_udhaar_includes_overdue() {
        let records = vec![
            udhaar(200.0, UdhaarStatus::Pending),
            udhaar(75.0, UdhaarStatus::Overdue),
            udhaar(50.0, UdhaarStatus::Paid),
        ];
        assert_eq!(pending_udhaar(&records), 275.0);
    }

    #[test]
    fn feed_is_capped_at_five_and_sorted_newest_first() {
        let sales = vec![
            sale_record(1, "2024-01-01T10:00", 10.0),
            sale_record(2, "2024-01-03T10:00", 20.0),
            sale_record(3, "2024-01-05T10:00", 30.0),
        ];
        let expenses = vec![
            expense(1, "2024-01-02T10:00", 5.0),
            expense(2, "2024-01-04T10:00", 15.0),
            expense(3, "2024-01-06T10:00", 25.0),
        ];
        let feed = recent_transactions(&sales, &expenses);
        assert_eq!(feed.len(), 5);
        for pair in feed.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(feed[0].kind, TransactionKind::Expense);
        assert_eq!(feed[0].date, "2024-01-06T10:00");
    }

    #[test]
    fn feed_is_shorter_than_five_when_sources_are_small() {
        let sales = vec![sale_record(1, "2024-01-01T10:00", 10.0)];
        let expenses = vec![expense(1, "2024-01-02T10:00", 5.0)];
        let feed = recent_transactions(&sales, &expenses);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn feed_tags_follow_the_source_list() {
        let sales = vec![sale_record(1, "2024-01-05T10:00", 10.0)];
        let expenses = vec![expense(1, "2024-01-01T10:00", 5.0)];
        let feed = recent_transactions(&sales, &expenses);
        assert_eq!(feed[0].kind, TransactionKind::Sale);
        assert_eq!(feed[0].amount, 10.0);
        assert_eq!(feed[1].kind, TransactionKind::Expense);
        assert_eq!(feed[1].amount, 5.0);
    }

    #[test]
    fn feed_ties_keep_sales_ahead_of_expenses() {
        let sales = vec![sale_record(1, "2024-01-01T10:00", 10.0)];
        let expenses = vec![expense(1, "2024-01-01T10:00", 5.0)];
        let feed = recent_transactions(&sales, &expenses);
        assert_eq!(feed[0].kind, TransactionKind::Sale);
        assert_eq!(feed[1].kind, TransactionKind::Expense);
    }

    #[test]
    fn empty_sources_produce_an_empty_feed() {
        assert!(recent_transactions(&[], &[]).is_empty());
        assert_eq!(total_inventory(&[]), 0);
    }
}
