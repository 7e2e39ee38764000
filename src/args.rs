use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::io::Format;
use crate::report::LabelMapping;

/// Grain growth simulation driver for Surface Evolver.
#[derive(Debug, Parser)]
#[command(name = "grain_evolver")]
pub struct GrainCli {
    #[clap(subcommand)]
    pub sub_command: GrainCommand,
}

/// Parser for the subcommands of the grain_evolver binary using clap.
#[derive(Debug, Subcommand)]
pub enum GrainCommand {
    #[command(name = "run")]
    /// Run the full simulation workflow described by a config file.
    Run(RunArgs),

    #[command(name = "parse")]
    /// Parse existing simulation reports into curves.
    Parse(ParseArgs),

    #[command(name = "example")]
    /// Print an example run config.
    Example(ExampleArgs),

    #[command(name = "presets")]
    /// List the available simulation presets.
    Presets,
}

/// Arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Path to the run config file (.yaml, .yml, .json or .toml).
    pub cfg_path: String,

    #[arg(short, long = "keep")]
    /// Keep the generated .fe file and reports, overriding the config.
    pub keep_intermediate: bool,
}

/// Arguments for the parse command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ParseArgs {
    #[arg(short, long = "general")]
    /// Path to the area, grain count and energy report.
    pub general_path: String,

    #[arg(short, long = "sides")]
    /// Path to the sides-per-grain report.
    pub sides_path: String,

    #[arg(short, long = "output")]
    /// Output file for the curves (format from the extension). Printed to stdout if left out.
    pub output_path: Option<String>,

    #[arg(short, long, value_enum, default_value_t = LabelMapping::Legacy)]
    /// How color labels in the general report map to area series.
    pub mapping: LabelMapping,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Format used when printing to stdout.
    pub format: Format,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Config format to print.
    pub format: Format,
}

/// Parse the command line arguments.
pub fn parse_cli_args() -> GrainCli {
    GrainCli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = GrainCli::try_parse_from(["grain_evolver", "parse", "-g", "a.txt", "-s", "b.txt"]).unwrap();
        match cli.sub_command {
            GrainCommand::Parse(args) => {
                assert_eq!(args.general_path, "a.txt");
                assert_eq!(args.sides_path, "b.txt");
                assert_eq!(args.output_path, None);
                assert_eq!(args.mapping, LabelMapping::Legacy);
                assert_eq!(args.format, Format::Yaml);
            },
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn run_needs_a_cfg() {
        assert!(GrainCli::try_parse_from(["grain_evolver", "run"]).is_err());
        let cli = GrainCli::try_parse_from(["grain_evolver", "run", "--cfg", "run.yaml", "--keep"]).unwrap();
        assert!(matches!(cli.sub_command, GrainCommand::Run(RunArgs{keep_intermediate: true, ..})));
    }

    #[test]
    fn mapping_accepts_trailing() {
        let cli = GrainCli::try_parse_from([
            "grain_evolver", "parse", "-g", "a", "-s", "b", "--mapping", "trailing", "--format", "toml",
        ]).unwrap();
        match cli.sub_command {
            GrainCommand::Parse(args) => {
                assert_eq!(args.mapping, LabelMapping::Trailing);
                assert_eq!(args.format, Format::Toml);
            },
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }
}
