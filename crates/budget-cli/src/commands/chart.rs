use budget_core::aggregate::breakdown;
use budget_core::Kind;

use crate::app::AppContext;
use crate::cli::ChartArgs;
use crate::helpers::{parse_kind, parse_output_format};
use crate::output::{breakdown_json, print_breakdown};

pub fn handle_chart(ctx: &AppContext, args: &ChartArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let kind = match args.kind.as_deref() {
        Some(value) => parse_kind(value)?,
        None => Kind::Expense,
    };

    let store = ctx.open_store()?;
    let chart = breakdown(store.snapshot(), kind);

    let ui = ctx.ui_context(args.json, format.map(|f| f.as_flag()));
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&breakdown_json(kind, &chart))?);
    } else {
        print_breakdown(&ui, kind, &chart, ctx.currency()?, ctx.quiet());
    }
    Ok(())
}
