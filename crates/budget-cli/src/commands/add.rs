use chrono::Local;
use tracing::info;

use budget_core::form::TransactionDraft;
use budget_core::Kind;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::{from_ledger, CliError};
use crate::helpers::{
    parse_date, parse_kind, prompt_amount, prompt_category, prompt_kind, prompt_note,
};
use crate::output::transaction_json;
use crate::ui::format::format_money;
use crate::ui::notify::Notice;
use crate::ui::{print, receipt, short_id, UiContext};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let interactive = !args.no_input && UiContext::is_interactive();

    let kind = match args.kind.as_deref() {
        Some(value) => parse_kind(value)?,
        None if interactive => prompt_kind()?,
        None => Kind::Expense,
    };
    let occurred_on = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };

    let mut draft = TransactionDraft::new(kind, occurred_on);
    draft.amount = match &args.amount {
        Some(value) => value.clone(),
        None if interactive => prompt_amount()?,
        None => String::new(),
    };
    draft.category = match &args.category {
        Some(value) => value.clone(),
        None if interactive => prompt_category(kind)?,
        None => String::new(),
    };
    draft.note = match &args.note {
        Some(value) => value.clone(),
        None if interactive => prompt_note()?,
        None => String::new(),
    };

    let new = draft.validate().map_err(CliError::from)?;
    let mut store = ctx.open_store()?;
    let added = store.add(new).map_err(from_ledger)?;
    info!(id = %added.id, "transaction added");

    let ui = ctx.ui_context(args.json, None);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&transaction_json(&added))?);
        return Ok(());
    }
    if !ctx.quiet() {
        let id = if ui.mode.is_pretty() {
            short_id(&added.id)
        } else {
            added.id.to_string()
        };
        let amount = format_money(added.amount, ctx.currency()?);
        let items = [
            ("ID", id.as_str()),
            ("Type", added.kind.as_str()),
            ("Amount", amount.as_str()),
            ("Category", added.category.as_str()),
        ];
        print(&ui, &receipt(&ui, Notice::Added.description(), &items));
    }
    Ok(())
}
