use crate::sim;

use sim::methods;

use serde::{Serialize, Deserialize};

/// Isotropic three-phase preset.
/// The `vor2fe` geometry is used as-is, followed by the preset commands.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Method {
    #[serde(default = "Method::default_commands_file", alias = "commands")]
    commands_file: String,
}
impl Method {
    pub fn default_commands_file() -> String {
        "3phase-iso.txt".to_string()
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            commands_file: Method::default_commands_file(),
        }
    }
}

impl methods::SimMethod for Method {
    fn get_method_name(&self) -> &'static str {
        "Three-phase isotropic"
    }

    fn parse_method_cfg(&mut self, method_cfg_file: &str) -> sim::ProcResult<()> {
        *self = crate::io::read_cfg_file(method_cfg_file)?;
        Ok(())
    }

    fn preamble_file(&self) -> Option<&str> {
        None
    }

    fn commands_file(&self) -> &str {
        &self.commands_file
    }
}
