mod proc_errors;
mod cfg;
mod methods;
pub mod external;
pub mod fe_file;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io;
use crate::output::RunOutput;
use crate::report;

// Re-export errors
pub use proc_errors::{
    SimError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    PathCfg,
    RunCfg,
    SimTarget,
    example_cfg,
};
// Re-export simulation presets
pub use methods::{
    SimChoice,
    SimMethod,
    available_presets,
};
pub use external::{
    CommandOutput,
    CommandRunner,
    SystemRunner,
};

/// PNG conversions of the snapshots, as handed to the output.
const IMAGES: [(&str, &str, &str); 2] = [
    ("grainImageBefore", fe_file::BEFORE_PS, "grainBefore.png"),
    ("grainImageAfter", fe_file::AFTER_PS, "grainAfter.png"),
];

/// Progress bar for the workflow stages, in percent.
pub fn progress_bar() -> ProgressBar {
    let progress = ProgressBar::new(100);
    if let Ok(style) = ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos:>3}% {msg}") {
        progress.set_style(style);
    }
    progress
}

/// Run the simulation and collect its curves and images.
/// Leaves the intermediate files in place, see `cleanup`.
/// Returns a `ProcResult` with the `RunOutput` or an `Err`.
pub fn do_simulation(
    sim_target: &SimTarget,
    runner: &dyn CommandRunner,
    progress: &ProgressBar,
) -> ProcResult<RunOutput> {
    let run_cfg = &sim_target.run_cfg;
    let paths = &run_cfg.paths;

    progress.set_position(0);
    progress.set_message("Starting...");
    println!("Simulation preset: {}", sim_target.sim_method.get_method_name());

    progress.set_position(25);
    progress.set_message("Loading data...");
    let geometry = runner.run(
        &io::join(&paths.bin_dir, "vor2fe"),
        &["-s101".to_string(), format!("-n{}", run_cfg.number_of_grains)],
        None,
    )?.stdout;
    let fe_name = write_fe_file(sim_target, &geometry)?;

    progress.set_position(50);
    progress.set_message("Simulating growth... (this may take a while)");
    runner.run(&paths.evolver, &[fe_name], Some(&paths.working_dir))?;
    for (_, ps_name, png_name) in IMAGES {
        runner.run(&paths.convert, &[ps_name.to_string(), png_name.to_string()], Some(&paths.working_dir))?;
    }

    progress.set_position(75);
    progress.set_message("Generating graphs... (this may take a while)");
    let mut output = RunOutput::new();
    for (image_name, _, png_name) in IMAGES {
        output.add_image(image_name, &io::join(&paths.working_dir, png_name));
    }
    let (general, sides) = load_reports(paths, run_cfg.label_mapping)?;
    output.add_general_curves(&general);
    output.add_side_curves(&sides);

    Ok(output)
}

/// Assemble the `.fe` script from the preset files and the `vor2fe` geometry.
/// Returns the file name, relative to the working directory.
fn write_fe_file(sim_target: &SimTarget, geometry: &str) -> ProcResult<String> {
    let run_cfg = &sim_target.run_cfg;
    let data_dir = &run_cfg.paths.data_dir;
    let sim_method = &sim_target.sim_method;

    let preamble = match sim_method.preamble_file() {
        Some(preamble_file) => Some(io::read_to_string(&io::join(data_dir, preamble_file))?),
        None => None,
    };
    let commands = io::read_to_string(&io::join(data_dir, sim_method.commands_file()))?;

    let script = fe_file::FeScript{
        preamble: preamble.as_deref(),
        geometry,
        commands: &commands,
        enable_color: run_cfg.enable_color,
        number_of_iterations: run_cfg.number_of_iterations,
    }.render();

    let fe_name = fe_file::fe_file_name(run_cfg.number_of_grains);
    let fe_path = io::join(&run_cfg.paths.working_dir, &fe_name);
    println!("Writing {}...", fe_path);
    io::write_to_file(&fe_path, &script)?;
    Ok(fe_name)
}

/// Read and parse both reports from the working directory.
pub fn load_reports(
    paths: &PathCfg,
    label_mapping: report::LabelMapping,
) -> ProcResult<(report::GeneralData, report::SideData)> {
    let general_path = io::join(&paths.working_dir, &paths.general_report);
    println!("Loading report {}...", general_path);
    let general = report::parse_general(&io::read_to_string(&general_path)?, label_mapping)?;

    let sides_path = io::join(&paths.working_dir, &paths.sides_report);
    println!("Loading report {}...", sides_path);
    let sides = report::parse_sides(&io::read_to_string(&sides_path)?)?;

    Ok((general, sides))
}

/// Remove the `.fe` file and both reports.
/// Files that cannot be removed are logged and skipped.
pub fn cleanup(run_cfg: &RunCfg) {
    let paths = &run_cfg.paths;
    let intermediate = [
        fe_file::fe_file_name(run_cfg.number_of_grains),
        paths.general_report.clone(),
        paths.sides_report.clone(),
    ];
    for name in intermediate.iter() {
        let path = io::join(&paths.working_dir, name);
        match io::remove_file(&path) {
            Ok(()) => tracing::debug!("removed {}", path),
            Err(error) => tracing::warn!("could not remove intermediate file:\n{}", error),
        }
    }
}
