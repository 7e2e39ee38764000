/*!
 * Parser for the sides report (`sides.txt`).
 *
 * Record kinds, by first token:
 * - `Iterations: <iter>`, iteration at token 1.
 * - `red: <n>`, `green: <n>`, `white: <n>`, a color block holding `n` grains.
 * - `<sides>`, side count of one grain of the active color.
 */

use serde::{Serialize, Deserialize};

use crate::report::{
    Color,
    ReportLine,
    ProcResult,
    state_err,
};

/// Average side counts read from the sides report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideData {
    pub green_avg: Vec<f64>,
    pub red_avg: Vec<f64>,
    pub white_avg: Vec<f64>,
    /// Average over all colors, one entry per block.
    pub total_avg: Vec<f64>,
    pub iterations: Vec<f64>,
}
impl SideData {
    pub fn average(&self, color: Color) -> &[f64] {
        match color {
            Color::Red => &self.red_avg,
            Color::Green => &self.green_avg,
            Color::White => &self.white_avg,
        }
    }

    fn average_mut(&mut self, color: Color) -> &mut Vec<f64> {
        match color {
            Color::Red => &mut self.red_avg,
            Color::Green => &mut self.green_avg,
            Color::White => &mut self.white_avg,
        }
    }
}

/// The color block currently being read.
#[derive(Debug, Clone, Copy)]
struct ActiveColor {
    color: Color,
    grains: u32,
}

#[derive(Default)]
struct SideScanner {
    active: Option<ActiveColor>,
    sides: u64,
    total_sides_all: u64,
    total_grains_all: u64,
    data: SideData,
}

impl SideScanner {
    fn step(&mut self, line: &ReportLine) -> ProcResult<()> {
        match line.label() {
            "Iterations:" => {
                let iteration: f64 = line.field(1, "iteration number")?;
                self.data.iterations.push(iteration);
                self.flush_total();
            },
            "red:" => self.begin_color(line, Color::Red)?,
            "green:" => self.begin_color(line, Color::Green)?,
            "white:" => self.begin_color(line, Color::White)?,
            _ => {
                if self.active.is_none() {
                    return state_err(Some(line.number), "side count before any color label");
                }
                let sides: u32 = line.field(0, "integer side count")?;
                self.sides += sides as u64;
                self.total_sides_all += sides as u64;
                self.total_grains_all += 1;
            },
        }
        Ok(())
    }

    fn begin_color(&mut self, line: &ReportLine, color: Color) -> ProcResult<()> {
        let grains: u32 = line.field(1, "grain count")?;
        self.flush_color();
        self.active = Some(ActiveColor{color, grains});
        Ok(())
    }

    /// Close the active color block. A block with zero grains averages to 0.
    fn flush_color(&mut self) {
        if let Some(active) = self.active.take() {
            let average = if active.grains == 0 {
                0.0
            } else {
                self.sides as f64 / active.grains as f64
            };
            self.data.average_mut(active.color).push(average);
            self.sides = 0;
        }
    }

    fn flush_total(&mut self) {
        if self.total_grains_all > 0 {
            let average = self.total_sides_all as f64 / self.total_grains_all as f64;
            self.data.total_avg.push(average);
        }
        self.total_sides_all = 0;
        self.total_grains_all = 0;
    }

    fn finish(mut self) -> ProcResult<SideData> {
        self.flush_color();
        if self.total_grains_all == 0 && self.data.total_avg.is_empty() {
            return state_err(None, "no grains found in sides report");
        }
        self.flush_total();
        Ok(self.data)
    }
}

/// Parse the sides report.
/// Returns per-color and overall average sides per grain, or the first error met.
pub fn parse_sides(text: &str) -> ProcResult<SideData> {
    let mut scanner = SideScanner::default();
    for line in ReportLine::scan(text) {
        scanner.step(&line)?;
    }
    let data = scanner.finish()?;
    tracing::debug!("sides report: {} blocks", data.iterations.len());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportError;

    const TWO_BLOCKS: &str = "\
Iterations: 0
red: 2
5
6
green: 0
white: 1
7
Iterations: 5
red: 1
6
green: 1
4
white: 0
";

    #[test]
    fn averages_without_iteration_lines() {
        let data = parse_sides("red: 2\n3\n4\ngreen: 1\n5\n").unwrap();
        assert_eq!(data.red_avg, vec![3.5]);
        assert_eq!(data.green_avg, vec![5.0]);
        assert!(data.white_avg.is_empty());
        assert_eq!(data.total_avg, vec![4.0]);
        assert!(data.iterations.is_empty());
    }

    #[test]
    fn two_full_blocks() {
        let data = parse_sides(TWO_BLOCKS).unwrap();
        assert_eq!(data.iterations, vec![0.0, 5.0]);
        assert_eq!(data.red_avg, vec![5.5, 6.0]);
        assert_eq!(data.green_avg, vec![0.0, 4.0]);
        assert_eq!(data.white_avg, vec![7.0, 0.0]);
        assert_eq!(data.total_avg, vec![6.0, 5.0]);
    }

    #[test]
    fn one_cycle_gives_one_entry_each() {
        let data = parse_sides("Iterations: 1\nred: 1\n6\ngreen: 1\n5\nwhite: 1\n7\n").unwrap();
        for color in [Color::Red, Color::Green, Color::White] {
            assert_eq!(data.average(color).len(), 1);
        }
        assert_eq!(data.total_avg, vec![6.0]);
        assert_eq!(data.iterations, vec![1.0]);
    }

    #[test]
    fn zero_grain_block_averages_to_zero() {
        let data = parse_sides("red: 0\ngreen: 0\nwhite: 1\n4\n").unwrap();
        assert_eq!(data.red_avg, vec![0.0]);
        assert_eq!(data.green_avg, vec![0.0]);
        assert_eq!(data.white_avg, vec![4.0]);
    }

    #[test]
    fn empty_report_is_a_state_error() {
        assert!(matches!(parse_sides(""), Err(ReportError::StateError{line_number: None, ..})));
        assert!(matches!(parse_sides("Iterations: 1\nred: 0\n"), Err(ReportError::StateError{..})));
    }

    #[test]
    fn side_count_needs_a_color() {
        let error = parse_sides("Iterations: 1\n6\n").unwrap_err();
        assert!(matches!(error, ReportError::StateError{line_number: Some(2), ..}));
    }

    #[test]
    fn non_numeric_tokens_fail() {
        let error = parse_sides("red: 1\nsix\n").unwrap_err();
        assert_eq!(error, ReportError::ParseError{
            line_number: 2,
            line: "six".to_string(),
            expected: "integer side count at token 0".to_string(),
        });
        assert!(matches!(parse_sides("green: many\n"), Err(ReportError::ParseError{line_number: 1, ..})));
    }

    #[test]
    fn parsing_is_repeatable() {
        assert_eq!(parse_sides(TWO_BLOCKS).unwrap(), parse_sides(TWO_BLOCKS).unwrap());
    }
}
