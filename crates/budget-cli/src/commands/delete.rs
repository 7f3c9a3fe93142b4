use dialoguer::Confirm;
use tracing::{debug, info};

use budget_core::confirm::DeleteFlow;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::{from_ledger, CliError};
use crate::ui::format::format_money;
use crate::ui::notify::{notify, Notice};
use crate::ui::{format_date, UiContext};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);

    let target = store.find(&args.id).map_err(from_ledger)?.cloned();
    let Some(target) = target else {
        debug!(id = %args.id, "no transaction to delete");
        notify(&ui, ctx.quiet(), Notice::NothingDeleted);
        return Ok(());
    };

    let mut flow = DeleteFlow::new();
    flow.request(target.id.clone());

    if !args.yes {
        if !UiContext::is_interactive() {
            flow.cancel();
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation.\nHint: Pass --yes to delete non-interactively.",
            )
            .into());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} {} in {} on {}? This action cannot be undone.",
                target.kind.as_str(),
                format_money(target.amount, ctx.currency()?),
                target.category,
                format_date(&target.occurred_on, true),
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            flow.cancel();
            notify(&ui, ctx.quiet(), Notice::Cancelled);
            return Ok(());
        }
    }

    match flow.confirm(&mut store).map_err(from_ledger)? {
        Some(removed) => {
            info!(id = %removed.id, "transaction deleted");
            notify(&ui, ctx.quiet(), Notice::Deleted);
        }
        None => notify(&ui, ctx.quiet(), Notice::NothingDeleted),
    }
    Ok(())
}
