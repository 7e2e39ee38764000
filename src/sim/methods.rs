/*!
 * This is the simulation presets module.
 * Adding new presets should be done here.
 *
 * New presets need:
 * - A struct implementing `SimMethod`
 * - An enum variant containing that struct in `SimChoice`
 * - A constructor arg_name and function in `SIM_TARGET_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;

use crate::sim;

//
// ------------------------------------------------------------
// Code that requires modification to add a new simulation preset
//      |
//      V
//

// Source files for the simulation presets
mod three_phase_iso;
mod three_phase_mm4;

/// Simulation presets enum.
/// To add a new preset:
/// include it here,
/// add handling for its constructor in `SIM_TARGET_CONSTRUCTION`,
/// and implement the `SimMethod` trait for it.
#[derive(Debug)]
#[enum_dispatch(SimMethod)]
pub enum SimChoice {
    /// Isotropic three-phase grain growth, no extra preamble.
    ThreePhaseIso(three_phase_iso::Method),
    /// Three-phase growth with the cosine mobility model.
    ThreePhaseMm4Cos(three_phase_mm4::CosMethod),
    /// Three-phase growth with the octagon mobility model.
    ThreePhaseMm4Octagon(three_phase_mm4::OctagonMethod),
}

/// Simulation construction array -- Written out in once place for easy modification.
/// To add a new preset:
/// include it in the `SimChoice` enum,
/// add handling for its constructor here,
/// and implement the `SimMethod` trait for it.
const SIM_TARGET_CONSTRUCTION: &[SimConstructor] = &[
    SimConstructor{
        arg_name: "3phase-iso",
        constructor: || SimChoice::ThreePhaseIso(three_phase_iso::Method::default()),
    },
    SimConstructor{
        arg_name: "3phase-mm4-cos",
        constructor: || SimChoice::ThreePhaseMm4Cos(three_phase_mm4::CosMethod::default()),
    },
    SimConstructor{
        arg_name: "3phase-mm4-octagon",
        constructor: || SimChoice::ThreePhaseMm4Octagon(three_phase_mm4::OctagonMethod::default()),
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new preset
//      |
//      V
//

/// Sim method trait.
/// This trait defines the functions that all simulation presets must implement.
/// To add a new preset:
/// include it in the `SimChoice` enum,
/// add handling for its constructor in `SIM_TARGET_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait SimMethod {
    /// Get the display name of the simulation preset.
    fn get_method_name(&self) -> &'static str;

    /// Parse the preset config file (allows overriding the command files).
    /// Takes a `&str` with the path to the config file.
    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> sim::ProcResult<()>;

    /// Commands written before the `vor2fe` geometry, relative to the data directory.
    fn preamble_file(&self) -> Option<&str>;

    /// Commands written after the `vor2fe` geometry, relative to the data directory.
    fn commands_file(&self) -> &str;
}

/// Sim constructor struct. Used to construct the presets from the arg_name string.
struct SimConstructor {
    /// Name of the simulation preset.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn() -> SimChoice,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Sim target construction
impl SimChoice {
    /// Construct a simulation preset from a name (given in the config file).
    pub fn from_name(arg_name: &str) -> sim::ProcResult<Self> {
        for constructor in SIM_TARGET_CONSTRUCTION.iter() {
            if constructor.arg_name == arg_name {
                return Ok((constructor.constructor)());
            }
        }

        // If the arg_name is not found, return an error with the available presets
        let mut error_str = format!("Simulation preset not found: {arg_name}\n");
        error_str.push('\n');
        error_str.push_str("Available presets:\n");
        for name in available_presets() {
            error_str.push_str(&format!("    {}\n", name));
        }
        sim::err_str(&error_str)
    }
}

/// Names accepted by `SimChoice::from_name`.
pub fn available_presets() -> Vec<&'static str> {
    SIM_TARGET_CONSTRUCTION.iter().map(|constructor| constructor.arg_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_their_command_files() {
        let iso = SimChoice::from_name("3phase-iso").unwrap();
        assert_eq!(iso.preamble_file(), None);
        assert_eq!(iso.commands_file(), "3phase-iso.txt");

        let cos = SimChoice::from_name("3phase-mm4-cos").unwrap();
        assert_eq!(cos.preamble_file(), Some("mm4-cos-Commands.txt"));
        assert_eq!(cos.commands_file(), "3phase-mm4-cos.txt");

        let octagon = SimChoice::from_name("3phase-mm4-octagon").unwrap();
        assert_eq!(octagon.preamble_file(), Some("mm4-octagon-Commands.txt"));
        assert_eq!(octagon.commands_file(), "3phase-mm4-octagon.txt");
    }

    #[test]
    fn unknown_preset_lists_the_available_ones() {
        let error = SimChoice::from_name("4phase").unwrap_err();
        let message = format!("{error}");
        assert!(message.contains("4phase"));
        for name in available_presets() {
            assert!(message.contains(name));
        }
    }

    #[test]
    fn method_cfg_overrides_command_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_path = crate::io::join(dir.path().to_str().unwrap(), "cos.yaml");
        crate::io::write_to_file(&cfg_path, "commands_file: custom.txt\n").unwrap();

        let mut cos = SimChoice::from_name("3phase-mm4-cos").unwrap();
        cos.parse_method_cfg(&cfg_path).unwrap();
        assert_eq!(cos.commands_file(), "custom.txt");
        assert_eq!(cos.preamble_file(), Some("mm4-cos-Commands.txt"));
    }
}
