mod proc_errors;

use itertools::{EitherOrBoth, Itertools};
use serde::{Serialize, Deserialize};

use crate::report::{
    Color,
    GeneralData,
    SideData,
};

// Re-export errors
pub use proc_errors::{
    OutputError,
    ProcResult,
};

/// Order the per-color curves are emitted in.
const CURVE_COLORS: [Color; 3] = [Color::Green, Color::Red, Color::White];
const TOTAL_STYLE: &str = "-color orange";
const ENERGY_STYLE: &str = "-color blue";

impl Color {
    /// Capitalized name, as used inside curve names.
    pub fn title(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::White => "White",
        }
    }

    /// Plot style. White grains are drawn in blue so they show on a white background.
    pub fn style(&self) -> &'static str {
        match self {
            Color::Red => "-color red",
            Color::Green => "-color green",
            Color::White => "-color blue",
        }
    }
}

/// Named image artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    pub path: String,
}

/// Named XY curve with a display style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub name: String,
    pub style: String,
    pub xy: Vec<(f64, f64)>,
}
impl Curve {
    /// Pair up x and y columns.
    /// Columns of different length are cut to the shorter one.
    pub fn from_columns<Y>(name: &str, style: &str, xs: &[f64], ys: &[Y]) -> Self
    where Y: Copy + Into<f64>
    {
        let mut dropped = 0;
        let xy = xs.iter()
            .zip_longest(ys.iter())
            .filter_map(|pair| match pair {
                EitherOrBoth::Both(x, y) => Some((*x, (*y).into())),
                _ => {
                    dropped += 1;
                    None
                },
            })
            .collect();
        if dropped > 0 {
            tracing::warn!(
                "curve {}: {} x values but {} y values, dropped {} points",
                name, xs.len(), ys.len(), dropped,
            );
        }
        Curve{name: name.to_string(), style: style.to_string(), xy}
    }
}

/// Everything handed to the output document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunOutput {
    pub images: Vec<Image>,
    pub curves: Vec<Curve>,
}
impl RunOutput {
    pub fn new() -> Self {
        RunOutput::default()
    }

    pub fn add_image(&mut self, name: &str, path: &str) {
        self.images.push(Image{name: name.to_string(), path: path.to_string()});
    }

    /// Area, grain count and energy curves.
    pub fn add_general_curves(&mut self, data: &GeneralData) {
        for color in CURVE_COLORS {
            self.curves.push(Curve::from_columns(
                &format!("{}AreaCurve", color),
                color.style(),
                &data.area_iterations(color),
                &data.area_values(color),
            ));
        }

        let grain_iterations = data.grain_iterations();
        for color in CURVE_COLORS {
            self.curves.push(Curve::from_columns(
                &format!("numberOf{}GrainsCurve", color.title()),
                color.style(),
                &grain_iterations,
                &data.grains(color),
            ));
        }
        self.curves.push(Curve::from_columns(
            "totalNumberOfGrainsCurve",
            TOTAL_STYLE,
            &grain_iterations,
            &data.total_grains(),
        ));
        self.curves.push(Curve::from_columns(
            "avgCurvaturePerGrainCurve",
            ENERGY_STYLE,
            &grain_iterations,
            &data.energy_values(),
        ));
    }

    /// Average sides per grain curves.
    pub fn add_side_curves(&mut self, data: &SideData) {
        for color in CURVE_COLORS {
            self.curves.push(Curve::from_columns(
                &format!("avgSides{}Curve", color.title()),
                color.style(),
                &data.iterations,
                data.average(color),
            ));
        }
        self.curves.push(Curve::from_columns(
            "avgSidesTotalCurve",
            TOTAL_STYLE,
            &data.iterations,
            &data.total_avg,
        ));
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves.iter().find(|curve| curve.name == name)
    }

    /// Write the output document, format picked from the extension.
    pub fn save(&self, output_path: &str) -> ProcResult<()> {
        println!("Saving output to {}...", output_path);
        crate::io::write_cfg_file(output_path, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{
        parse_general,
        parse_sides,
        LabelMapping,
    };

    const GENERAL: &str = "\
Iterations: 1.0 Red: 2 Green: 3 White: 1
Total Energy: 12.0
0.0 - 2.0 4
Green
2.0 - 4.0 2
Red
1.0 - 3.0 1
White
";

    const SIDES: &str = "Iterations: 1\nred: 2\n3\n4\ngreen: 1\n5\nwhite: 1\n6\n";

    #[test]
    fn curves_cover_every_series() {
        let mut output = RunOutput::new();
        output.add_general_curves(&parse_general(GENERAL, LabelMapping::Trailing).unwrap());
        output.add_side_curves(&parse_sides(SIDES).unwrap());

        let names: Vec<&str> = output.curves.iter().map(|curve| curve.name.as_str()).collect();
        assert_eq!(names, vec![
            "greenAreaCurve", "redAreaCurve", "whiteAreaCurve",
            "numberOfGreenGrainsCurve", "numberOfRedGrainsCurve", "numberOfWhiteGrainsCurve",
            "totalNumberOfGrainsCurve", "avgCurvaturePerGrainCurve",
            "avgSidesGreenCurve", "avgSidesRedCurve", "avgSidesWhiteCurve", "avgSidesTotalCurve",
        ]);

        assert_eq!(output.curve("greenAreaCurve").unwrap().xy, vec![(1.0, 4.0)]);
        assert_eq!(output.curve("numberOfGreenGrainsCurve").unwrap().xy, vec![(1.0, 3.0)]);
        assert_eq!(output.curve("totalNumberOfGrainsCurve").unwrap().style, "-color orange");
        assert_eq!(output.curve("avgCurvaturePerGrainCurve").unwrap().xy, vec![(1.0, 2.0)]);
        assert_eq!(output.curve("avgSidesRedCurve").unwrap().xy, vec![(1.0, 3.5)]);
        assert_eq!(output.curve("whiteAreaCurve").unwrap().style, "-color blue");
    }

    #[test]
    fn mismatched_columns_are_truncated() {
        let curve = Curve::from_columns("c", "-color red", &[0.0, 1.0, 2.0], &[5u32, 6]);
        assert_eq!(curve.xy, vec![(0.0, 5.0), (1.0, 6.0)]);
    }

    #[test]
    fn saved_output_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut output = RunOutput::new();
        output.add_image("grainImageBefore", "grainBefore.png");
        output.add_side_curves(&parse_sides(SIDES).unwrap());
        for ext in ["json", "yaml", "toml"] {
            let path = crate::io::join(dir.path().to_str().unwrap(), &format!("out.{ext}"));
            output.save(&path).unwrap();
            let loaded: RunOutput = crate::io::read_cfg_file(&path).unwrap();
            assert_eq!(loaded, output);
        }
    }

    #[test]
    fn unsupported_extension_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = crate::io::join(dir.path().to_str().unwrap(), "out.csv");
        let error = RunOutput::new().save(&path).unwrap_err();
        assert!(matches!(error, OutputError::IoError(_)));
        assert!(error.to_string().starts_with("- IO Error:\n"));
        assert!(!dir.path().join("out.csv").exists());
    }
}
