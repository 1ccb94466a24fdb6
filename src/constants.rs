//! Constants used throughout the template-sync application

/// Default executable providing the synthesis capability
pub const DEFAULT_SYNTH_TOOL: &str = "synthtool";

/// Subcommand of the synthesis tool that regenerates common templates
pub const SYNTH_SUBCOMMAND: &str = "common-templates";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
