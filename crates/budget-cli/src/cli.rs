use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use budget_core::VERSION;

/// Budget - track income and expenses from the command line
#[derive(Parser)]
#[command(name = "budget")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the ledger data
    #[arg(short, long, global = true, env = "BUDGET_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Amount (non-negative decimal)
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Category (see `budget categories`)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date (YYYY-MM-DD, "today" or "yesterday"; defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Optional description
    #[arg(short, long)]
    pub note: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Print the stored transaction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against description and category
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only this category ("all" for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only this type: income, expense or all
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON (exact values, preferred for scripts)
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain). Plain rows are
    /// `id date type category amount description`, with spaces in the
    /// category written as `_`.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Transaction ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `summary` command
#[derive(Args, Default)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `chart` command
#[derive(Args)]
pub struct ChartArgs {
    /// Which side to break down: expense (default) or income
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `categories` command
#[derive(Args)]
pub struct CategoriesArgs {
    /// Only categories for this type: income, expense or all
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Also list categories found in the ledger that are not in the catalogue
    #[arg(long)]
    pub used: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a transaction
    Add(AddArgs),

    /// List transactions, optionally searched and filtered
    List(ListArgs),

    /// Show a single transaction
    Show(ShowArgs),

    /// Delete a transaction (asks for confirmation)
    Delete(DeleteArgs),

    /// Income, expenses and balance overview
    Summary(SummaryArgs),

    /// Per-category breakdown with percentages
    Chart(ChartArgs),

    /// List the categories offered when adding transactions
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
