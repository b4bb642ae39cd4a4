/// Log target for lines that should be rendered verbatim, without a status symbol.
pub const PRINT_TARGET: &str = "netplan_trainer::print";

/// Log target for events that report a completed action.
pub const SUCCESS_TARGET: &str = "netplan_trainer::success";

/// Emits an info event tagged as a success, rendered with its own symbol by the CLI.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

/// Emits a raw line of terminal output through the logging pipeline.
#[macro_export]
macro_rules! raw {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::PRINT_TARGET, $($arg)*)
    };
}
