pub mod args;
pub mod io;
pub mod output;
pub mod report;
pub mod sim;
mod crate_errors;

pub use crate_errors::{
    GrainError,
    GrainResult,
};

use sim::CommandRunner;

/// Install the `tracing` subscriber.
/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Dispatch a parsed command line.
/// Returns a `GrainResult` with `()` or an `Err`.
pub fn handle_cli_args(cli: args::GrainCli) -> GrainResult<()> {
    match cli.sub_command {
        args::GrainCommand::Run(run_args) => {
            let sim_target = build_target(run_args)?;
            run_process(sim_target, &sim::SystemRunner)
        },
        args::GrainCommand::Parse(parse_args) => parse_reports(parse_args),
        args::GrainCommand::Example(example_args) => example_config(example_args),
        args::GrainCommand::Presets => {
            println!("Available presets:");
            for name in sim::available_presets() {
                println!("    {}", name);
            }
            Ok(())
        },
    }
}

/// [Stage 1.]
/// Load the run config named on the command line and resolve its preset.
/// Returns a `GrainResult` with the `SimTarget` or an `Err`.
pub fn build_target(run_args: args::RunArgs) -> GrainResult<sim::SimTarget> {
    println!("Loading run config file: {}...", run_args.cfg_path);
    let mut sim_target = sim::SimTarget::from_cfg_file(&run_args.cfg_path)?;
    sim_target.run_cfg.keep_intermediate |= run_args.keep_intermediate;
    Ok(sim_target)
}

/// [Stage 2.]
/// Run the simulation, write the output document, then clean up.
/// Returns a `GrainResult` with `()` or an `Err`.
pub fn run_process(sim_target: sim::SimTarget, runner: &dyn CommandRunner) -> GrainResult<()> {
    println!();
    println!("#####################");
    println!("Running simulation...");
    println!("#####################");
    println!();

    let progress = sim::progress_bar();
    let output = match sim::do_simulation(&sim_target, runner, &progress) {
        Ok(output) => output,
        Err(error) => {
            progress.abandon();
            return Err(error.into());
        },
    };

    let run_cfg = &sim_target.run_cfg;
    output.save(&run_cfg.output_path)?;

    // Only once the output is safely written
    if !run_cfg.keep_intermediate {
        sim::cleanup(run_cfg);
    }

    progress.set_position(100);
    progress.finish_with_message("Done");
    Ok(())
}

/// Parse existing reports into curves without running anything.
/// Prints the curves in the requested format, or writes them to the output path.
pub fn parse_reports(parse_args: args::ParseArgs) -> GrainResult<()> {
    let general = report::parse_general(&io::read_to_string(&parse_args.general_path)?, parse_args.mapping)?;
    let sides = report::parse_sides(&io::read_to_string(&parse_args.sides_path)?)?;

    let mut output = output::RunOutput::new();
    output.add_general_curves(&general);
    output.add_side_curves(&sides);

    match parse_args.output_path {
        Some(output_path) => output.save(&output_path)?,
        None => println!("{}", parse_args.format.serialize(&output)?),
    }
    Ok(())
}

/// Display an example run config in the requested format.
pub fn example_config(example_args: args::ExampleArgs) -> GrainResult<()> {
    println!("{}", example_args.format.serialize(&sim::example_cfg())?);
    Ok(())
}
