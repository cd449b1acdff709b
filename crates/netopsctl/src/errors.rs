//! Exit codes for netopsctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (unreadable input, bad config file)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code for invalid command-line usage (EX_USAGE)
pub const EXIT_USAGE: i32 = 64;
