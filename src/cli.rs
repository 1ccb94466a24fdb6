use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::{verbosity, DEFAULT_SYNTH_TOOL};
use crate::error::Result;
use crate::manifest;
use crate::synth::{synthesize, SynthTool};

/// CLI arguments for template-sync.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Repository root the synthesis pass runs against.
    #[arg(value_name = "REPO_ROOT", default_value = ".")]
    pub repo_root: PathBuf,

    /// Executable providing the synthesis capability.
    #[arg(long, default_value = DEFAULT_SYNTH_TOOL)]
    pub tool: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the exclusion manifest without invoking the tool.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

pub fn run(args: Args) -> Result<()> {
    let excludes = manifest::excluded_templates()?;

    for entry in manifest::stale_entries(&args.repo_root, &excludes) {
        log::warn!(
            "Exclusion '{}' does not exist under {}",
            entry,
            args.repo_root.display()
        );
    }

    if args.dry_run {
        for entry in &excludes {
            println!("{entry}");
        }
        return Ok(());
    }

    let tool = SynthTool::new(args.tool, args.repo_root);
    synthesize(&tool)?;

    println!("Template synthesis completed successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(
            get_log_level_from_verbose(verbosity::TRACE + 1),
            LevelFilter::Trace
        );
    }

    #[test]
    fn parses_default_args() {
        let args = Args::parse_from(["template-sync"]);
        assert_eq!(args.repo_root, PathBuf::from("."));
        assert_eq!(args.tool, PathBuf::from(DEFAULT_SYNTH_TOOL));
        assert_eq!(args.verbose, 0);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "template-sync",
            "some/repo",
            "--tool",
            "/opt/bin/synthtool",
            "-vv",
            "--dry-run",
        ]);
        assert_eq!(args.repo_root, PathBuf::from("some/repo"));
        assert_eq!(args.tool, PathBuf::from("/opt/bin/synthtool"));
        assert_eq!(args.verbose, 2);
        assert!(args.dry_run);
    }
}
