use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Feedmix - nitrogen utilization and ration optimization for dairy cattle fed grass silage, maize silage and hay.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Configuration sources shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a TOML feed table replacing the built-in CVB values.
    #[arg(long, global = true, value_name = "PATH")]
    pub feed_table: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.max-hay-share=50
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute nutrient levels, nitrogen balance and health verdict of a feed mix.
    Evaluate(EvaluateArgs),
    /// Search for the feasible feed mix with the best protein utilization.
    Optimize(OptimizeArgs),
    /// Show the feed table in use.
    Feeds,
}

/// Shares of the feed mix, as percentages. Shares are normalized by their
/// total, so they do not have to add up to 100.
#[derive(Args, Debug, Clone, Default)]
pub struct MixArgs {
    /// The whole mix as GRASS/MAIZE/HAY (e.g., '70/15/15').
    #[arg(short, long, value_name = "G/M/H")]
    pub mix: Option<String>,

    /// Share of a single feed as FEED=PERCENT, by key or Dutch name
    /// (e.g., 'hooi=20'). Can be used multiple times.
    #[arg(short, long = "share", value_name = "FEED=PERCENT")]
    pub shares: Vec<String>,

    /// Share of grass silage, overriding the value from --mix or the config file.
    #[arg(long, value_name = "PERCENT")]
    pub grass_silage: Option<u32>,

    /// Share of maize silage, overriding the value from --mix or the config file.
    #[arg(long, value_name = "PERCENT")]
    pub maize_silage: Option<u32>,

    /// Share of hay, overriding the value from --mix or the config file.
    #[arg(long, value_name = "PERCENT")]
    pub hay: Option<u32>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub mix: MixArgs,
}

/// Arguments for the `optimize` subcommand.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// The current mix, kept when the search finds no feasible alternative.
    #[command(flatten)]
    pub mix: MixArgs,

    /// Also print the full evaluation of the resulting mix.
    #[arg(short, long)]
    pub report: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn evaluate_parses_mix_and_overrides() {
        let cli =
            Cli::try_parse_from(["feedmix", "evaluate", "--mix", "70/15/15", "--hay", "20"])
                .unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate command");
        };
        assert_eq!(args.mix.mix.as_deref(), Some("70/15/15"));
        assert_eq!(args.mix.hay, Some(20));
        assert_eq!(args.mix.grass_silage, None);
    }

    #[test]
    fn share_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "feedmix", "evaluate", "-s", "hooi=20", "--share", "grass-silage=60",
        ])
        .unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate command");
        };
        assert_eq!(args.mix.shares, vec!["hooi=20", "grass-silage=60"]);
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "feedmix",
            "optimize",
            "--report",
            "-vv",
            "-S",
            "search.max-hay-share=50",
            "--feed-table",
            "feeds.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.set_values, vec!["search.max-hay-share=50"]);
        assert_eq!(cli.config.feed_table, Some(PathBuf::from("feeds.toml")));
        assert!(matches!(cli.command, Commands::Optimize(OptimizeArgs { report: true, .. })));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["feedmix", "feeds", "-q", "-v"]).is_err());
    }

    #[test]
    fn negative_shares_are_rejected() {
        assert!(Cli::try_parse_from(["feedmix", "evaluate", "--hay", "-5"]).is_err());
    }
}
