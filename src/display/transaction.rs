//! Transaction list formatting

use crate::models::{Transaction, TransactionKind};

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

fn kind_label(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Expense => "expense",
        TransactionKind::Meal => "meal",
    }
}

/// Format one transaction as a register row
pub fn format_transaction_row(txn: &Transaction, currency: &str) -> String {
    format!(
        "{} {:8} {} {:>10}",
        txn.date.format("%Y-%m-%d"),
        kind_label(txn.kind),
        truncate(&txn.description, 28),
        txn.amount.format_with_symbol(currency)
    )
}

/// Format transactions as a register with a header
pub fn format_transaction_register(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format!("{:10} {:8} {:28} {:>10}\n", "Date", "Type", "Description", "Amount");
    output.push_str(&"-".repeat(59));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency));
        output.push('\n');
    }

    output
}

/// Compact indented list used on the dashboard
pub fn format_transaction_feed(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "  No transactions yet\n".to_string();
    }

    transactions
        .iter()
        .map(|txn| format!("  {}\n", format_transaction_row(txn, currency)))
        .collect()
}
