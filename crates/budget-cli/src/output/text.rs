//! Text and table output formatting.

use rust_decimal::Decimal;

use budget_core::aggregate::{Breakdown, Standing, Summary};
use budget_core::{Kind, Transaction};

use crate::constants::CHART_BAR_WIDTH;
use crate::ui::format::{format_amount, pad_right, single_line};
use crate::ui::render::blank_line;
use crate::ui::theme::{slice_style, styled, styles};
use crate::ui::{
    bar, format_date, format_money, header, hint, kv, print, short_id, simple_table, truncate,
    Column, UiContext,
};

const NOTE_MAX: usize = 40;

/// Amount with a leading sign for the transaction's direction.
fn signed_money(transaction: &Transaction, currency: &str) -> String {
    let sign = match transaction.kind {
        Kind::Income => "+",
        Kind::Expense => "-",
    };
    format!("{}{}", sign, format_money(transaction.amount, currency))
}

/// Print transactions as a table (pretty) or one line each (plain).
pub fn print_transaction_list(
    ui: &UiContext,
    transactions: &[&Transaction],
    currency: &str,
    context: Option<&str>,
    quiet: bool,
) {
    if transactions.is_empty() {
        if !quiet {
            print(ui, "No transactions found");
        }
        return;
    }

    if ui.mode.is_pretty() {
        if !quiet {
            print(ui, &header(ui, "list", context));
            blank_line(ui);
        }
        let columns = [
            Column::new("ID"),
            Column::new("Date"),
            Column::new("Category"),
            Column::numeric("Amount"),
            Column::new("Description"),
        ];
        let rows: Vec<Vec<String>> = transactions
            .iter()
            .map(|t| {
                vec![
                    short_id(&t.id),
                    format_date(&t.occurred_on, false),
                    t.category.clone(),
                    signed_money(t, currency),
                    truncate(&single_line(t.note.as_deref().unwrap_or_default()), NOTE_MAX),
                ]
            })
            .collect();
        print(ui, &simple_table(ui, &columns, &rows));
        return;
    }

    let columns = [
        Column::new("id"),
        Column::new("date"),
        Column::new("type"),
        Column::new("category"),
        Column::new("amount"),
        Column::new("description"),
    ];
    let rows: Vec<Vec<String>> = transactions.iter().map(|t| plain_row(t)).collect();
    print(ui, &simple_table(ui, &columns, &rows));
}

/// Space-separated fields for scripts. The first five never contain spaces;
/// the description, when present, runs to the end of the line.
fn plain_row(t: &Transaction) -> Vec<String> {
    let mut row = vec![
        t.id.to_string(),
        format_date(&t.occurred_on, false),
        t.kind.as_str().to_string(),
        t.category.replace(' ', "_"),
        format_amount(t.amount),
    ];
    let note = single_line(t.note.as_deref().unwrap_or_default());
    if !note.trim().is_empty() {
        row.push(note.trim().to_string());
    }
    row
}

/// Print a single transaction's details.
pub fn print_transaction(ui: &UiContext, transaction: &Transaction, currency: &str) {
    let amount = if ui.mode.is_pretty() {
        signed_money(transaction, currency)
    } else {
        format_amount(transaction.amount)
    };
    let lines = [
        kv(ui, "ID", transaction.id.as_str()),
        kv(ui, "Type", transaction.kind.as_str()),
        kv(ui, "Amount", &amount),
        kv(ui, "Category", &transaction.category),
        kv(
            ui,
            "Date",
            &format_date(&transaction.occurred_on, ui.mode.is_pretty()),
        ),
        kv(
            ui,
            "Description",
            &single_line(transaction.note.as_deref().unwrap_or_default()),
        ),
    ];
    print(ui, &lines.join("\n"));
}

/// Render the dashboard: totals, highest expense category and balance.
pub fn summary_lines(ui: &UiContext, summary: &Summary, currency: &str) -> Vec<String> {
    let money = |amount: Decimal| {
        if ui.mode.is_pretty() {
            format_money(amount, currency)
        } else {
            format_amount(amount)
        }
    };
    let mut lines = Vec::new();

    if ui.mode.is_pretty() {
        lines.push(kv(
            ui,
            "Total Income",
            &styled(&money(summary.income), styles::income(), ui.color),
        ));
        lines.push(kv(
            ui,
            "Total Expenses",
            &styled(&money(summary.expenses), styles::expense(), ui.color),
        ));
        let highest = match &summary.top_expense {
            Some(top) => format!("Highest: {} ({})", top.category, money(top.amount)),
            None => "No expense data".to_string(),
        };
        lines.push(format!("  {}", styled(&highest, styles::dim(), ui.color)));
        lines.push(kv(ui, "Balance", &money(summary.balance)));
        let standing = match summary.standing() {
            Standing::Saving(amount) => format!("Saving {} this period", money(amount)),
            Standing::Overspent(amount) => format!("Overspent by {}", money(amount)),
        };
        lines.push(format!("  {}", styled(&standing, styles::dim(), ui.color)));
    } else {
        lines.push(kv(ui, "Income", &money(summary.income)));
        lines.push(kv(ui, "Expenses", &money(summary.expenses)));
        lines.push(kv(ui, "Balance", &money(summary.balance)));
        if let Some(top) = &summary.top_expense {
            lines.push(kv(ui, "Top Expense", &top.category));
            lines.push(kv(ui, "Top Expense Amount", &money(top.amount)));
        }
        let standing = match summary.standing() {
            Standing::Saving(_) => "saving",
            Standing::Overspent(_) => "overspent",
        };
        lines.push(kv(ui, "Standing", standing));
    }

    lines
}

pub fn print_summary(ui: &UiContext, summary: &Summary, currency: &str, quiet: bool) {
    if ui.mode.is_pretty() && !quiet {
        print(ui, &header(ui, "summary", None));
        blank_line(ui);
    }
    print(ui, &summary_lines(ui, summary, currency).join("\n"));
}

/// Render a breakdown as one bar per category, largest first.
pub fn breakdown_lines(ui: &UiContext, kind: Kind, breakdown: &Breakdown, currency: &str) -> Vec<String> {
    let slices = match breakdown {
        Breakdown::NoData => {
            return vec![format!("No {} data available", kind.as_str())];
        }
        Breakdown::Slices { slices, .. } => slices,
    };

    if !ui.mode.is_pretty() {
        return slices
            .iter()
            .map(|s| {
                format!(
                    "{} {} {:.1}",
                    s.category.replace(' ', "_"),
                    format_amount(s.amount),
                    s.percentage
                )
            })
            .collect();
    }

    let name_width = slices
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0);
    slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}  {}  {:>5.1}%  {}",
                pad_right(&s.category, name_width),
                bar(ui, s.percentage, CHART_BAR_WIDTH, slice_style(i)),
                s.percentage,
                format_money(s.amount, currency)
            )
        })
        .collect()
}

pub fn print_breakdown(
    ui: &UiContext,
    kind: Kind,
    breakdown: &Breakdown,
    currency: &str,
    quiet: bool,
) {
    if ui.mode.is_pretty() && !quiet {
        print(ui, &header(ui, "chart", Some(kind.as_str())));
        blank_line(ui);
    }
    print(ui, &breakdown_lines(ui, kind, breakdown, currency).join("\n"));
    if let Breakdown::Slices { total, .. } = breakdown {
        if ui.mode.is_pretty() && !quiet {
            blank_line(ui);
            print(ui, &kv(ui, "Total", &format_money(*total, currency)));
        }
    } else if ui.mode.is_pretty() && !quiet {
        print(ui, &hint(ui, "Add one with `budget add`."));
    }
}

/// Print the category catalogue grouped by type.
pub fn print_categories(ui: &UiContext, groups: &[(Kind, &[&str])], unlisted: &[&str]) {
    if ui.mode.is_pretty() {
        let mut blocks = Vec::new();
        for (kind, names) in groups {
            let mut lines = vec![styled(kind.label(), styles::bold(), ui.color)];
            lines.extend(names.iter().map(|n| format!("  {}", n)));
            blocks.push(lines.join("\n"));
        }
        if !unlisted.is_empty() {
            let mut lines = vec![styled("In ledger only", styles::bold(), ui.color)];
            lines.extend(unlisted.iter().map(|n| format!("  {}", n)));
            blocks.push(lines.join("\n"));
        }
        print(ui, &blocks.join("\n\n"));
        return;
    }

    let mut lines = Vec::new();
    for (kind, names) in groups {
        lines.extend(names.iter().map(|n| format!("{} {}", kind.as_str(), n)));
    }
    lines.extend(unlisted.iter().map(|n| format!("unlisted {}", n)));
    print(ui, &lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use budget_core::aggregate::{breakdown, summarize};
    use budget_core::TransactionId;

    use super::*;
    use crate::ui::mode::OutputMode;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode,
        }
    }

    fn tx(kind: Kind, amount: Decimal, category: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(format!("{}-{}", category, amount)),
            kind,
            amount,
            category: category.to_string(),
            occurred_on: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            note: None,
        }
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            tx(Kind::Income, dec!(2500), "Salary"),
            tx(Kind::Expense, dec!(800), "Housing"),
            tx(Kind::Expense, dec!(120), "Utilities"),
        ]
    }

    #[test]
    fn test_plain_row_carries_description() {
        let mut rent = tx(Kind::Expense, dec!(800), "Personal Care");
        rent.id = TransactionId::new("t1");
        rent.note = Some("Rent payment\nfor October".to_string());
        assert_eq!(
            plain_row(&rent).join(" "),
            "t1 2023-10-05 expense Personal_Care 800.00 Rent payment for October"
        );

        let mut bare = tx(Kind::Income, dec!(2500), "Salary");
        bare.id = TransactionId::new("t2");
        bare.note = Some("  ".to_string());
        assert_eq!(
            plain_row(&bare).join(" "),
            "t2 2023-10-05 income Salary 2500.00"
        );
    }

    #[test]
    fn test_summary_pretty_lines() {
        let lines = summary_lines(&ctx(OutputMode::Pretty), &summarize(&scenario()), "$");
        assert_eq!(lines[0], "Total Income: $2500.00");
        assert_eq!(lines[1], "Total Expenses: $920.00");
        assert_eq!(lines[2], "  Highest: Housing ($800.00)");
        assert_eq!(lines[3], "Balance: $1580.00");
        assert_eq!(lines[4], "  Saving $1580.00 this period");
    }

    #[test]
    fn test_summary_overspent_and_empty() {
        let ledger = vec![tx(Kind::Expense, dec!(20), "Food")];
        let lines = summary_lines(&ctx(OutputMode::Pretty), &summarize(&ledger), "$");
        assert_eq!(lines[3], "Balance: -$20.00");
        assert_eq!(lines[4], "  Overspent by $20.00");

        let lines = summary_lines(&ctx(OutputMode::Pretty), &summarize(&[]), "$");
        assert_eq!(lines[2], "  No expense data");
    }

    #[test]
    fn test_summary_plain_lines() {
        let lines = summary_lines(&ctx(OutputMode::Plain), &summarize(&scenario()), "$");
        assert!(lines.contains(&"income=2500.00".to_string()));
        assert!(lines.contains(&"top_expense=Housing".to_string()));
        assert!(lines.contains(&"standing=saving".to_string()));
    }

    #[test]
    fn test_breakdown_no_data() {
        let lines = breakdown_lines(
            &ctx(OutputMode::Pretty),
            Kind::Expense,
            &breakdown(&[], Kind::Expense),
            "$",
        );
        assert_eq!(lines, ["No expense data available"]);
    }

    #[test]
    fn test_breakdown_plain_rows() {
        let lines = breakdown_lines(
            &ctx(OutputMode::Plain),
            Kind::Expense,
            &breakdown(&scenario(), Kind::Expense),
            "$",
        );
        assert_eq!(lines, ["Housing 800.00 87.0", "Utilities 120.00 13.0"]);
    }

    #[test]
    fn test_breakdown_pretty_rows() {
        let lines = breakdown_lines(
            &ctx(OutputMode::Pretty),
            Kind::Expense,
            &breakdown(&scenario(), Kind::Expense),
            "$",
        );
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Housing  "));
        assert!(lines[0].ends_with(" 87.0%  $800.00"));
        assert!(lines[1].starts_with("Utilities"));
    }
}
