//! Table output formatting for CLI commands using comfy-table.

use comfy_table::{presets, Cell, ContentArrangement, Table};

use crate::domain::models::{Account, CategoryTotal, Transaction};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format accounts as a table
pub fn format_accounts(accounts: &[Account]) -> String {
    let mut table = base_table();
    table.set_header(vec!["Account ID", "Name", "Type", "Currency", "Provider"]);

    for account in accounts {
        table.add_row(vec![
            Cell::new(&account.account_id),
            Cell::new(account.display_name.as_deref().unwrap_or("-")),
            Cell::new(account.account_type.as_deref().unwrap_or("-")),
            Cell::new(account.currency.as_deref().unwrap_or("-")),
            Cell::new(
                account
                    .provider
                    .as_ref()
                    .and_then(|p| p.display_name.as_deref())
                    .unwrap_or("-"),
            ),
        ]);
    }

    table.to_string()
}

/// Format transactions as a table
pub fn format_transactions(transactions: &[Transaction]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        "Timestamp",
        "Description",
        "Amount",
        "Currency",
        "Category",
    ]);

    for txn in transactions {
        table.add_row(vec![
            Cell::new(txn.timestamp.to_rfc3339()),
            Cell::new(txn.description.as_deref().unwrap_or("-")),
            Cell::new(txn.amount.to_string()),
            Cell::new(txn.currency.as_deref().unwrap_or("-")),
            Cell::new(txn.transaction_category.as_deref().unwrap_or("(none)")),
        ]);
    }

    table.to_string()
}

/// Format category totals as a table
pub fn format_totals(totals: &[CategoryTotal]) -> String {
    let mut table = base_table();
    table.set_header(vec!["Category", "Total (7 days)"]);

    for entry in totals {
        table.add_row(vec![
            Cell::new(entry.category.as_deref().unwrap_or("(unclassified)")),
            Cell::new(entry.total.to_string()),
        ]);
    }

    table.to_string()
}
