//! Command handlers, one module per subcommand.

mod add;
mod categories;
mod chart;
mod delete;
mod list;
mod misc;
mod show;
mod summary;

pub use add::handle_add;
pub use categories::handle_categories;
pub use chart::handle_chart;
pub use delete::handle_delete;
pub use list::handle_list;
pub use misc::handle_completions;
pub use show::handle_show;
pub use summary::handle_summary;
