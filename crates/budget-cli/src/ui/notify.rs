//! Feedback shown after a transaction is added or deleted.

use super::context::UiContext;
use super::render::{badge, print};
use super::theme::Badge;

/// Outcome messages for the mutating commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Deleted,
    NothingDeleted,
    Cancelled,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Added => "Success",
            Notice::Deleted => "Transaction deleted",
            Notice::NothingDeleted => "Nothing deleted",
            Notice::Cancelled => "Cancelled",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Notice::Added => "Transaction added successfully",
            Notice::Deleted => "The transaction has been removed successfully",
            Notice::NothingDeleted => "No transaction with that id exists",
            Notice::Cancelled => "The transaction was kept",
        }
    }

    fn badge(&self) -> Badge {
        match self {
            Notice::Added | Notice::Deleted => Badge::Ok,
            Notice::NothingDeleted => Badge::Warn,
            Notice::Cancelled => Badge::Info,
        }
    }

    /// Machine-readable status for plain output.
    pub fn status(&self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Deleted => "deleted",
            Notice::NothingDeleted => "not_found",
            Notice::Cancelled => "cancelled",
        }
    }
}

/// Render a notice for the current output mode.
pub fn notice_line(ctx: &UiContext, notice: Notice) -> String {
    if ctx.mode.is_pretty() {
        format!(
            "{} {}",
            badge(ctx, notice.badge(), notice.title()),
            notice.description()
        )
    } else {
        format!("status={}", notice.status())
    }
}

/// Print a notice unless quiet.
pub fn notify(ctx: &UiContext, quiet: bool, notice: Notice) {
    if !quiet {
        print(ctx, &notice_line(ctx, notice));
    }
}
