use crate::config::Config;
use crate::pipeline::ProcessOptions;
use clap::Parser;
use std::path::PathBuf;

/// Convert Quicken Interchange Format files to CSV
#[derive(Parser, Debug)]
#[command(name = "qif-reader")]
#[command(about = "Convert Quicken Interchange Format files to CSV", long_about = None)]
pub struct CliArgs {
    /// Input QIF file path
    #[arg(value_name = "INPUT", help = "Path to the input QIF file")]
    pub input_file: PathBuf,

    /// Read numeric dates as dd/mm instead of mm/dd
    #[arg(
        long = "day-first",
        help = "Interpret numeric dates as day/month/year (default: month/day/year)"
    )]
    pub day_first: bool,

    /// Keep an unterminated final record
    #[arg(
        long = "allow-truncated",
        help = "Keep a final record that is missing its '^' terminator instead of failing"
    )]
    pub allow_truncated: bool,
}

impl CliArgs {
    /// Create ProcessOptions from CLI arguments
    pub fn to_options(&self) -> ProcessOptions {
        ProcessOptions {
            config: Config::new(self.day_first),
            allow_truncated: self.allow_truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program", "input.qif"], false, false)]
    #[case::day_first(&["program", "--day-first", "input.qif"], true, false)]
    #[case::allow_truncated(&["program", "--allow-truncated", "input.qif"], false, true)]
    #[case::all_flags(
        &["program", "--day-first", "--allow-truncated", "input.qif"],
        true,
        true
    )]
    fn test_flag_parsing(
        #[case] args: &[&str],
        #[case] day_first: bool,
        #[case] allow_truncated: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("input.qif"));
        assert_eq!(parsed.day_first, day_first);
        assert_eq!(parsed.allow_truncated, allow_truncated);
    }

    #[rstest]
    #[case::defaults(&["program", "input.qif"], Config::month_first(), false)]
    #[case::day_first(&["program", "--day-first", "input.qif"], Config::day_first(), false)]
    #[case::allow_truncated(
        &["program", "--allow-truncated", "input.qif"],
        Config::month_first(),
        true
    )]
    fn test_options_conversion(
        #[case] args: &[&str],
        #[case] config: Config,
        #[case] allow_truncated: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(
            parsed.to_options(),
            ProcessOptions {
                config,
                allow_truncated,
            }
        );
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::unknown_flag(&["program", "--verbose", "input.qif"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
