mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use strum::{Display, EnumIter};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Plane equations, parallelism and coincidence checks.
#[derive(Debug, Parser)]
#[command(name = "planar")]
pub struct PlanarCli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    pub verbose: u8,

    #[clap(subcommand)]
    pub sub_command: RunCommand,
}
impl PlanarCli {
    /// Log level requested on the command line.
    /// Warnings are always shown.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parser for the subcommands of the planar binary using clap.
#[derive(Debug, Subcommand)]
pub enum RunCommand {
    #[command(name = "compare")]
    /// Compare every pair of planes in a config file.
    Compare(CompareArgs),

    #[command(name = "show")]
    /// Print the equation of every plane in a config file.
    Show(ShowArgs),

    #[command(name = "example")]
    /// Print an example plane config file.
    Example(ExampleArgs),
}

/// Output and config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Human readable text.
    Text,
    Yaml,
    Json,
    Toml,
}

/// Compiled arguments for the compare command. Compiled with clap.
#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(short, long = "input")]
    /// Path to the plane config file (.json, .toml, .yaml/.yml).
    pub input_path: String,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    /// Output format.
    pub format: Format,
}

/// Compiled arguments for the show command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(short, long = "input")]
    /// Path to the plane config file (.json, .toml, .yaml/.yml).
    pub input_path: String,
}

/// Compiled arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Config format to print (yaml, json or toml).
    pub format: Format,
}

/// Parse the command line arguments for the planar binary.
/// Bad input comes back as `ArgError::ClapError`, help and version requests included.
pub fn parse_cli_args() -> ProcResult<PlanarCli> {
    parse_cli_args_from(std::env::args_os())
}

/// Parse arguments from an explicit list, returning clap errors instead of exiting.
pub fn parse_cli_args_from<I, T>(args: I) -> ProcResult<PlanarCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(PlanarCli::try_parse_from(args)?)
}
