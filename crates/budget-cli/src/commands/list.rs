use budget_core::filter::{filter_transactions, TransactionQuery};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::{parse_category_selection, parse_kind_selection, parse_output_format};
use crate::output::{print_transaction_list, transactions_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let search = args.search.clone().unwrap_or_default();
    let query = TransactionQuery::new()
        .search(search.clone())
        .category(parse_category_selection(args.category.as_deref()))
        .kind(parse_kind_selection(args.kind.as_deref())?);

    let store = ctx.open_store()?;
    let mut matches = filter_transactions(store.snapshot(), &query);

    let filtered = query != TransactionQuery::new();
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    } else if !filtered {
        matches.truncate(DEFAULT_LIST_LIMIT);
    }

    let ui = ctx.ui_context(args.json, format.map(|f| f.as_flag()));
    if ui.mode.is_json() {
        let output = serde_json::to_string_pretty(&transactions_json(&matches))?;
        println!("{}", output);
        return Ok(());
    }

    let context = (!search.trim().is_empty()).then_some(search.trim());
    print_transaction_list(&ui, &matches, ctx.currency()?, context, ctx.quiet());
    Ok(())
}
