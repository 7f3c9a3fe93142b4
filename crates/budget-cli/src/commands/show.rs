use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::{from_ledger, CliError};
use crate::output::{print_transaction, transaction_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let transaction = store.find(&args.id).map_err(from_ledger)?.ok_or_else(|| {
        CliError::not_found(
            format!("Transaction not found: {}", args.id),
            "Hint: Run `budget list` to find transaction IDs.",
        )
    })?;

    let ui = ctx.ui_context(args.json, None);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&transaction_json(transaction))?);
    } else {
        print_transaction(&ui, transaction, ctx.currency()?);
    }
    Ok(())
}
