//! Interactive prompts used by `budget add`.

use dialoguer::{Input, Select};

use budget_core::categories;
use budget_core::Kind;

/// Ask for income or expense; expense is preselected.
pub fn prompt_kind() -> anyhow::Result<Kind> {
    let labels: Vec<&str> = Kind::ALL.iter().map(Kind::label).collect();
    let default = Kind::ALL
        .iter()
        .position(|k| *k == Kind::Expense)
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Type")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Kind::ALL[choice])
}

/// Ask for an amount. Validation happens when the draft is submitted.
pub fn prompt_amount() -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Pick a category from the catalogue for `kind`.
pub fn prompt_category(kind: Kind) -> anyhow::Result<String> {
    let options = categories::for_kind(kind);
    let choice = Select::new()
        .with_prompt("Category")
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[choice].to_string())
}

/// Ask for an optional description.
pub fn prompt_note() -> anyhow::Result<String> {
    let value: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
