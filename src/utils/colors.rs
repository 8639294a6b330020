/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Green when clocked in, grey otherwise.
pub fn color_for_state(clocked_in: bool) -> &'static str {
    if clocked_in { GREEN } else { GREY }
}
