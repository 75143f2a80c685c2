//! Flag definitions for the Pomodoro timer CLI.
//!
//! Uses clap derive macro for argument parsing. There are no subcommands;
//! the binary always launches the timer UI, configured by these flags.

use clap::Parser;

use crate::types::TimerConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Terminal Pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "tomatui",
    version,
    about = "A terminal Pomodoro timer with desktop notifications",
    long_about = "A full-screen terminal Pomodoro timer.\n\
                  Alternates fixed-length work and break sessions, shows the countdown\n\
                  with a progress bar, and raises a desktop notification at every\n\
                  transition. Session lengths are fixed once the timer starts."
)]
pub struct Cli {
    /// Work session duration in minutes (1-120)
    #[arg(
        short,
        long,
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: u32,

    /// Break duration in minutes (1-60)
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub break_time: u32,

    /// Disable desktop notifications
    #[arg(long)]
    pub no_notify: bool,
}

impl Cli {
    /// Builds the immutable timer configuration from the parsed flags.
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::from_minutes(self.work, self.break_time)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Parsing Tests
    // ------------------------------------------------------------------------

    mod parsing_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let cli = Cli::try_parse_from(["tomatui"]).unwrap();
            assert_eq!(cli.work, 25);
            assert_eq!(cli.break_time, 5);
            assert!(!cli.no_notify);
        }

        #[test]
        fn test_long_flags() {
            let cli =
                Cli::try_parse_from(["tomatui", "--work", "50", "--break-time", "10"]).unwrap();
            assert_eq!(cli.work, 50);
            assert_eq!(cli.break_time, 10);
        }

        #[test]
        fn test_short_flags() {
            let cli = Cli::try_parse_from(["tomatui", "-w", "45", "-b", "15"]).unwrap();
            assert_eq!(cli.work, 45);
            assert_eq!(cli.break_time, 15);
        }

        #[test]
        fn test_no_notify_flag() {
            let cli = Cli::try_parse_from(["tomatui", "--no-notify"]).unwrap();
            assert!(cli.no_notify);
        }

        #[test]
        fn test_work_range_rejected() {
            assert!(Cli::try_parse_from(["tomatui", "--work", "0"]).is_err());
            assert!(Cli::try_parse_from(["tomatui", "--work", "121"]).is_err());
        }

        #[test]
        fn test_break_range_rejected() {
            assert!(Cli::try_parse_from(["tomatui", "--break-time", "0"]).is_err());
            assert!(Cli::try_parse_from(["tomatui", "--break-time", "61"]).is_err());
        }

        #[test]
        fn test_boundary_values_accepted() {
            let cli =
                Cli::try_parse_from(["tomatui", "--work", "1", "--break-time", "60"]).unwrap();
            assert_eq!(cli.work, 1);
            assert_eq!(cli.break_time, 60);

            let cli = Cli::try_parse_from(["tomatui", "--work", "120"]).unwrap();
            assert_eq!(cli.work, 120);
        }

        #[test]
        fn test_unknown_flag_rejected() {
            assert!(Cli::try_parse_from(["tomatui", "--sessions", "4"]).is_err());
        }
    }

    // ------------------------------------------------------------------------
    // Config Conversion Tests
    // ------------------------------------------------------------------------

    mod config_tests {
        use super::*;

        #[test]
        fn test_default_flags_match_default_config() {
            let cli = Cli::try_parse_from(["tomatui"]).unwrap();
            assert_eq!(cli.timer_config(), TimerConfig::default());
        }

        #[test]
        fn test_flags_convert_to_seconds() {
            let cli =
                Cli::try_parse_from(["tomatui", "--work", "2", "--break-time", "1"]).unwrap();
            let config = cli.timer_config();
            assert_eq!(config.work_secs, 120);
            assert_eq!(config.break_secs, 60);
        }
    }
}
