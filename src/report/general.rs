/*!
 * Parser for the general data report (`xxx-report.txt`).
 *
 * Record kinds, by first token (token offsets are 0-based):
 * - `Iterations: <iter> Red: <r> Green: <g> White: <w>`
 *   iteration at 1, grain counts at 3, 5 and 7.
 * - `Total <label> <energy>`, total energy at 2.
 * - `Red`, `Green`, `White`, color labels closing a histogram section.
 * - anything else is a histogram bin `<lower> - <upper> <frequency>`,
 *   bounds at 0 and 2, frequency at 3. Bounds must satisfy `0 <= lower <= upper`.
 */

use clap::ValueEnum;
use serde::{Serialize, Deserialize};

use crate::report::{
    Color,
    ReportLine,
    Sample,
    ProcResult,
    parse_err,
    state_err,
};

/// Which area series a color label flushes into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LabelMapping {
    /// Mapping used by the existing report pipeline:
    /// `Green` flushes into white (only when non-empty),
    /// `Red` into green and `White` into red.
    /// Remaining area at the end of the report goes to white.
    #[default]
    Legacy,
    /// Every label closes the section of its own color.
    Trailing,
}

/// Flush target for one label.
struct FlushRule {
    target: Color,
    skip_empty: bool,
}

impl LabelMapping {
    fn flush_rule(&self, label: Color) -> FlushRule {
        match (self, label) {
            (LabelMapping::Legacy, Color::Green) => FlushRule{target: Color::White, skip_empty: true},
            (LabelMapping::Legacy, Color::Red) => FlushRule{target: Color::Green, skip_empty: false},
            (LabelMapping::Legacy, Color::White) => FlushRule{target: Color::Red, skip_empty: false},
            (LabelMapping::Trailing, color) => FlushRule{target: color, skip_empty: false},
        }
    }
}

/// Grain counts reported on one `Iterations:` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrainCount {
    pub iteration: f64,
    pub red: u32,
    pub green: u32,
    pub white: u32,
    pub total: u32,
}
impl GrainCount {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Green => self.green,
            Color::White => self.white,
        }
    }
}

/// Everything read from the general data report.
///
/// The twelve series, in their documented order, are available through:
/// `grains(Green)`, `grains(Red)`, `grains(White)`, `total_grains()`, `grain_iterations()`,
/// `area_values(Green)`, `area_iterations(Green)`, `area_values(Red)`, `area_iterations(Red)`,
/// `area_values(White)`, `area_iterations(White)`, `energy_values()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralData {
    pub grain_counts: Vec<GrainCount>,
    pub green_area: Vec<Sample>,
    pub red_area: Vec<Sample>,
    pub white_area: Vec<Sample>,
    /// Total energy divided by total grain count, stamped with the block iteration.
    pub energy_per_grain: Vec<Sample>,
}
impl GeneralData {
    pub fn grains(&self, color: Color) -> Vec<u32> {
        self.grain_counts.iter().map(|count| count.get(color)).collect()
    }

    pub fn total_grains(&self) -> Vec<u32> {
        self.grain_counts.iter().map(|count| count.total).collect()
    }

    pub fn grain_iterations(&self) -> Vec<f64> {
        self.grain_counts.iter().map(|count| count.iteration).collect()
    }

    pub fn area(&self, color: Color) -> &[Sample] {
        match color {
            Color::Red => &self.red_area,
            Color::Green => &self.green_area,
            Color::White => &self.white_area,
        }
    }

    pub fn area_values(&self, color: Color) -> Vec<f64> {
        self.area(color).iter().map(|sample| sample.value).collect()
    }

    pub fn area_iterations(&self, color: Color) -> Vec<f64> {
        self.area(color).iter().map(|sample| sample.iteration).collect()
    }

    pub fn energy_values(&self) -> Vec<f64> {
        self.energy_per_grain.iter().map(|sample| sample.value).collect()
    }

    fn area_mut(&mut self, color: Color) -> &mut Vec<Sample> {
        match color {
            Color::Red => &mut self.red_area,
            Color::Green => &mut self.green_area,
            Color::White => &mut self.white_area,
        }
    }
}

/// Scanner state between lines.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// No `Iterations:` line seen yet.
    AwaitingIteration,
    /// Inside an iteration block.
    InBlock {
        iteration: f64,
        total_grains: u32,
    },
}

struct GeneralScanner {
    mapping: LabelMapping,
    state: ScanState,
    area: f64,
    /// Histogram bins accumulated since the last flush.
    pending: bool,
    data: GeneralData,
}

impl GeneralScanner {
    fn new(mapping: LabelMapping) -> Self {
        GeneralScanner{
            mapping,
            state: ScanState::AwaitingIteration,
            area: 0.0,
            pending: false,
            data: GeneralData::default(),
        }
    }

    /// Current block, or a `StateError` naming what needed it.
    fn block(&self, line: &ReportLine, what: &str) -> ProcResult<(f64, u32)> {
        match self.state {
            ScanState::InBlock{iteration, total_grains} => Ok((iteration, total_grains)),
            ScanState::AwaitingIteration => state_err(
                Some(line.number),
                &format!("{} before any \"Iterations:\" line", what),
            ),
        }
    }

    fn step(&mut self, line: &ReportLine) -> ProcResult<()> {
        match line.label() {
            "Iterations:" => {
                if self.mapping == LabelMapping::Trailing && self.pending {
                    return state_err(Some(line.number), "histogram section not closed by a color label");
                }
                let iteration: f64 = line.field(1, "iteration number")?;
                let red: u32 = line.field(3, "red grain count")?;
                let green: u32 = line.field(5, "green grain count")?;
                let white: u32 = line.field(7, "white grain count")?;
                let total = match red.checked_add(green).and_then(|sum| sum.checked_add(white)) {
                    Some(total) => total,
                    None => return parse_err(line.number, line.raw, "grain counts whose sum fits in u32"),
                };
                self.data.grain_counts.push(GrainCount{iteration, red, green, white, total});
                self.state = ScanState::InBlock{iteration, total_grains: total};
            },
            "Total" => {
                let (iteration, total_grains) = self.block(line, "energy total")?;
                let energy: f64 = line.field(2, "total energy")?;
                if total_grains == 0 {
                    return state_err(Some(line.number), "energy total for a block with zero grains");
                }
                self.data.energy_per_grain.push(Sample::new(iteration, energy / total_grains as f64));
            },
            "Red" => self.label(line, Color::Red)?,
            "Green" => self.label(line, Color::Green)?,
            "White" => self.label(line, Color::White)?,
            _ => {
                self.block(line, "histogram data")?;
                let lower: f64 = line.field(0, "bin lower bound")?;
                let upper: f64 = line.field(2, "bin upper bound")?;
                let frequency: u64 = line.field(3, "integer bin frequency")?;
                if !(lower >= 0.0 && upper >= lower) {
                    return parse_err(line.number, line.raw, "non-negative bin bounds");
                }
                self.area += (lower + upper) / 2.0 * frequency as f64;
                self.pending = true;
            },
        }
        Ok(())
    }

    fn label(&mut self, line: &ReportLine, color: Color) -> ProcResult<()> {
        let (iteration, _) = self.block(line, &format!("\"{}\" label", line.label()))?;
        let rule = self.mapping.flush_rule(color);
        self.flush(rule, iteration);
        Ok(())
    }

    fn flush(&mut self, rule: FlushRule, iteration: f64) {
        if rule.skip_empty && self.area <= 0.0 {
            return;
        }
        tracing::trace!("area {} -> {} at iteration {}", self.area, rule.target, iteration);
        let area = self.area;
        self.data.area_mut(rule.target).push(Sample::new(iteration, area));
        self.area = 0.0;
        self.pending = false;
    }

    fn finish(mut self) -> ProcResult<GeneralData> {
        match (self.mapping, self.state) {
            (LabelMapping::Legacy, ScanState::InBlock{iteration, ..}) => {
                let rule = self.mapping.flush_rule(Color::Green);
                self.flush(rule, iteration);
            },
            (LabelMapping::Trailing, _) if self.pending => {
                return state_err(None, "histogram section not closed by a color label");
            },
            _ => (),
        }
        Ok(self.data)
    }
}

/// Parse the general data report.
/// Returns grain counts, per-color areas and energy per grain, or the first error met.
pub fn parse_general(text: &str, mapping: LabelMapping) -> ProcResult<GeneralData> {
    let mut scanner = GeneralScanner::new(mapping);
    for line in ReportLine::scan(text) {
        scanner.step(&line)?;
    }
    let data = scanner.finish()?;
    tracing::debug!(
        "general report: {} blocks, {}/{}/{} red/green/white area samples",
        data.grain_counts.len(), data.red_area.len(), data.green_area.len(), data.white_area.len(),
    );
    Ok(data)
}
