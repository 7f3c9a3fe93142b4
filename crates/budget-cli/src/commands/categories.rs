use budget_core::categories;
use budget_core::filter::categories_in;
use budget_core::Kind;

use crate::app::AppContext;
use crate::cli::CategoriesArgs;
use crate::helpers::parse_kind_selection;
use crate::output::{categories_json, print_categories};

pub fn handle_categories(ctx: &AppContext, args: &CategoriesArgs) -> anyhow::Result<()> {
    let selection = parse_kind_selection(args.kind.as_deref())?;
    let groups: Vec<(Kind, &[&str])> = Kind::ALL
        .into_iter()
        .filter(|kind| selection.accepts(kind))
        .map(|kind| (kind, categories::for_kind(kind)))
        .collect();

    let store = if args.used {
        Some(ctx.open_store()?)
    } else {
        None
    };
    let unlisted: Vec<&str> = match &store {
        Some(store) => categories_in(store.snapshot())
            .into_iter()
            .filter(|name| {
                !Kind::ALL
                    .iter()
                    .any(|kind| categories::for_kind(*kind).contains(name))
            })
            .collect(),
        None => Vec::new(),
    };

    let ui = ctx.ui_context(args.json, None);
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&categories_json(&groups, &unlisted))?
        );
    } else {
        print_categories(&ui, &groups, &unlisted);
    }
    Ok(())
}
