use budget_core::aggregate::summarize;

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::helpers::parse_output_format;
use crate::output::{print_summary, summary_json};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let store = ctx.open_store()?;
    let summary = summarize(store.snapshot());

    let ui = ctx.ui_context(args.json, format.map(|f| f.as_flag()));
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary_json(&summary))?);
    } else {
        print_summary(&ui, &summary, ctx.currency()?, ctx.quiet());
    }
    Ok(())
}
