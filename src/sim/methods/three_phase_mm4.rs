use crate::sim;

use sim::methods;

use serde::Deserialize;

/// Anisotropic (mm4) three-phase presets.
/// Both prepend a mobility-model preamble before the `vor2fe` geometry.
macro_rules! mm4_method {
    ($name:ident, $display:expr, $preamble:expr, $commands:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            preamble_file: String,
            commands_file: String,
        }
        impl Default for $name {
            fn default() -> Self {
                $name{
                    preamble_file: $preamble.to_string(),
                    commands_file: $commands.to_string(),
                }
            }
        }

        impl methods::SimMethod for $name {
            fn get_method_name(&self) -> &'static str {
                $display
            }

            fn parse_method_cfg(&mut self, method_cfg_file: &str) -> sim::ProcResult<()> {
                let overrides: Overrides = crate::io::read_cfg_file(method_cfg_file)?;
                if let Some(preamble_file) = overrides.preamble_file {
                    self.preamble_file = preamble_file;
                }
                if let Some(commands_file) = overrides.commands_file {
                    self.commands_file = commands_file;
                }
                Ok(())
            }

            fn preamble_file(&self) -> Option<&str> {
                Some(&self.preamble_file)
            }

            fn commands_file(&self) -> &str {
                &self.commands_file
            }
        }
    };
}

/// Partial method config, fields left out keep the preset defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    #[serde(default, alias = "preamble")]
    preamble_file: Option<String>,
    #[serde(default, alias = "commands")]
    commands_file: Option<String>,
}

mm4_method!(CosMethod, "Three-phase mm4 (cosine)", "mm4-cos-Commands.txt", "3phase-mm4-cos.txt");
mm4_method!(OctagonMethod, "Three-phase mm4 (octagon)", "mm4-octagon-Commands.txt", "3phase-mm4-octagon.txt");
