use crate::report::LabelMapping;
use crate::sim::{
    self,
    SimChoice,
    SimMethod,
};
use serde::{Serialize, Deserialize};

/// Locations of the external tools, data files and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathCfg {
    /// Directory the simulation runs in (the `.fe` file and reports live here).
    #[serde(default = "PathCfg::default_working_dir", alias = "work")]
    pub working_dir: String,
    /// Directory holding the preset command files.
    #[serde(default = "PathCfg::default_data_dir", alias = "data")]
    pub data_dir: String,
    /// Directory holding the `vor2fe` executable.
    #[serde(default = "PathCfg::default_bin_dir", alias = "bin")]
    pub bin_dir: String,
    /// Surface Evolver executable.
    #[serde(default = "PathCfg::default_evolver")]
    pub evolver: String,
    /// PostScript to PNG converter.
    #[serde(default = "PathCfg::default_convert")]
    pub convert: String,
    /// Area, grain count and energy report written by the simulation.
    #[serde(default = "PathCfg::default_general_report")]
    pub general_report: String,
    /// Sides-per-grain report written by the simulation.
    #[serde(default = "PathCfg::default_sides_report")]
    pub sides_report: String,
}
impl PathCfg {
    pub fn default_working_dir() -> String {
        ".".to_string()
    }
    pub fn default_data_dir() -> String {
        "data".to_string()
    }
    pub fn default_bin_dir() -> String {
        "bin".to_string()
    }
    pub fn default_evolver() -> String {
        "evolver".to_string()
    }
    pub fn default_convert() -> String {
        "convert".to_string()
    }
    pub fn default_general_report() -> String {
        "xxx-report.txt".to_string()
    }
    pub fn default_sides_report() -> String {
        "sides.txt".to_string()
    }
}
impl Default for PathCfg {
    fn default() -> Self {
        PathCfg{
            working_dir: PathCfg::default_working_dir(),
            data_dir: PathCfg::default_data_dir(),
            bin_dir: PathCfg::default_bin_dir(),
            evolver: PathCfg::default_evolver(),
            convert: PathCfg::default_convert(),
            general_report: PathCfg::default_general_report(),
            sides_report: PathCfg::default_sides_report(),
        }
    }
}

/// Arguments for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunCfg {
    /// Number of grains generated by `vor2fe`.
    #[serde(alias = "grains")]
    pub number_of_grains: u32,

    /// Simulation preset name.
    #[serde(alias = "type_of_simulation")]
    pub simulation: String,

    /// Optional preset config file overriding its command files.
    #[serde(default)]
    pub method_cfg: Option<String>,

    /// Color the grains in the snapshots.
    #[serde(default)]
    pub enable_color: bool,

    /// Number of `gogo` iterations to run.
    #[serde(alias = "iterations")]
    pub number_of_iterations: u32,

    /// How color labels in the general report map to area series.
    #[serde(default)]
    pub label_mapping: LabelMapping,

    /// Output document path (.yaml, .yml, .json or .toml).
    #[serde(alias = "output", alias = "out", alias = "o")]
    pub output_path: String,

    /// Keep the `.fe` file and reports after the output is written.
    #[serde(default)]
    pub keep_intermediate: bool,

    #[serde(default)]
    pub paths: PathCfg,
}

/// Simulation target struct.
/// Contains the resolved preset and the run arguments.
pub struct SimTarget {
    /// Simulation preset.
    pub sim_method: SimChoice,
    /// Run arguments.
    pub run_cfg: RunCfg,
}
impl SimTarget {
    /// Construct a simulation target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> sim::ProcResult<Self> {
        let run_cfg: RunCfg = crate::io::read_cfg_file(cfg_file)?;
        SimTarget::from_cfg(run_cfg)
    }

    /// Validate the run arguments and resolve the preset.
    pub fn from_cfg(run_cfg: RunCfg) -> sim::ProcResult<Self> {
        if run_cfg.number_of_grains == 0 {
            return sim::err_str("number_of_grains must be positive");
        }
        if run_cfg.number_of_iterations == 0 {
            return sim::err_str("number_of_iterations must be positive");
        }
        // Check the output format up front, before any simulation time is spent
        crate::io::Format::from_path(&run_cfg.output_path)?;

        let mut sim_method = SimChoice::from_name(&run_cfg.simulation)?;
        if let Some(method_cfg) = run_cfg.method_cfg.as_ref() {
            sim_method.parse_method_cfg(method_cfg)?;
        }

        Ok(SimTarget{sim_method, run_cfg})
    }
}

/// Example run config, printed by the `example` subcommand.
pub fn example_cfg() -> RunCfg {
    RunCfg{
        number_of_grains: 100,
        simulation: "3phase-iso".to_string(),
        method_cfg: None,
        enable_color: true,
        number_of_iterations: 50,
        label_mapping: LabelMapping::default(),
        output_path: "grains.json".to_string(),
        keep_intermediate: false,
        paths: PathCfg::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = "\
grains: 20
simulation: 3phase-mm4-octagon
iterations: 5
output: out.yaml
";
        let cfg: RunCfg = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.number_of_grains, 20);
        assert!(!cfg.enable_color);
        assert_eq!(cfg.label_mapping, LabelMapping::Legacy);
        assert_eq!(cfg.paths, PathCfg::default());

        let target = SimTarget::from_cfg(cfg).unwrap();
        assert_eq!(target.sim_method.commands_file(), "3phase-mm4-octagon.txt");
    }

    #[test]
    fn zero_grains_is_rejected() {
        let mut cfg = example_cfg();
        cfg.number_of_grains = 0;
        assert!(SimTarget::from_cfg(cfg).is_err());
    }

    #[test]
    fn unsupported_output_format_is_rejected() {
        let mut cfg = example_cfg();
        cfg.output_path = "grains.csv".to_string();
        assert!(SimTarget::from_cfg(cfg).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = "grains: 2\nsimulation: 3phase-iso\niterations: 1\noutput: o.json\ncolour: true\n";
        assert!(serde_yaml::from_str::<RunCfg>(yaml).is_err());
    }
}
