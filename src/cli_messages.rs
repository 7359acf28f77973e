//! CLI command messaging system
//!
//! Consistent, colored output for the one-shot subcommands (`locations`,
//! `set-default-location`, `reset`, headless `weather`).

const INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// Tagged title, followed by tab-separated details when there are any.
fn format_tagged(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", format_tagged(INFO, title, details));
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_tagged(WARN, title, details));
}

/// Print CLI command error. Goes to stderr so `weather --json` output stays clean.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", ERROR, details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    println!("{}", format_tagged(SUCCESS, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
