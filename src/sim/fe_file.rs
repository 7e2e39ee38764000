/*!
 * Assembly of the Surface Evolver input script (`<N>grains.fe`).
 */

/// PostScript snapshot taken before the run.
pub const BEFORE_PS: &str = "grainsBefore.ps";
/// PostScript snapshot taken after the run.
pub const AFTER_PS: &str = "grainsAfter.ps";

const COLOR_ON: &str = "show facet where 1;\n";
const COLOR_OFF: &str = "show facet where 0;\n";

/// Name of the `.fe` file for a grain count.
pub fn fe_file_name(number_of_grains: u32) -> String {
    format!("{}grains.fe", number_of_grains)
}

/// Pieces of the `.fe` script, in file order.
pub struct FeScript<'a> {
    /// Preset preamble, written before the geometry.
    pub preamble: Option<&'a str>,
    /// Geometry printed by `vor2fe`.
    pub geometry: &'a str,
    /// Preset commands, written after the geometry.
    pub commands: &'a str,
    pub enable_color: bool,
    pub number_of_iterations: u32,
}
impl<'a> FeScript<'a> {
    /// Render the full script.
    pub fn render(&self) -> String {
        let mut script = String::new();
        if let Some(preamble) = self.preamble {
            script.push_str(preamble);
        }
        script.push_str(self.geometry);
        script.push_str(self.commands);

        if self.enable_color {
            script.push_str(COLOR_ON);
        }
        push_postscript(&mut script, BEFORE_PS);

        // Color off while iterating, it slows the run down
        if self.enable_color {
            script.push_str(COLOR_OFF);
        }
        script.push_str(&format!("gogo {}\n", self.number_of_iterations));
        if self.enable_color {
            script.push_str(COLOR_ON);
        }
        push_postscript(&mut script, AFTER_PS);

        script.push_str("q\nq\n");
        script
    }
}

/// Evolver keystrokes for a PostScript dump to `ps_path`.
fn push_postscript(script: &mut String, ps_path: &str) {
    script.push_str("P\n3\ny\n\n");
    script.push_str(ps_path);
    script.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorless_script() {
        let script = FeScript{
            preamble: None,
            geometry: "vertices\n",
            commands: "read\n",
            enable_color: false,
            number_of_iterations: 7,
        }.render();
        assert_eq!(script, "\
vertices
read
P
3
y

grainsBefore.ps
gogo 7
P
3
y

grainsAfter.ps
q
q
");
    }

    #[test]
    fn color_toggles_wrap_the_run() {
        let script = FeScript{
            preamble: Some("mm4\n"),
            geometry: "vertices\n",
            commands: "read\n",
            enable_color: true,
            number_of_iterations: 3,
        }.render();
        assert!(script.starts_with("mm4\nvertices\nread\nshow facet where 1;\nP\n"));
        assert!(script.contains("grainsBefore.ps\nshow facet where 0;\ngogo 3\nshow facet where 1;\nP\n"));
        assert!(script.ends_with("grainsAfter.ps\nq\nq\n"));
    }

    #[test]
    fn file_name_carries_grain_count() {
        assert_eq!(fe_file_name(250), "250grains.fe");
    }
}
