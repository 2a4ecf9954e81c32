// File: crates/pancake-demo/src/data.rs
// Summary: Tab-separated monthly CO₂ readings (date, average, trend) loaded with the csv crate.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use pancake_core::Datum;
use tracing::info;

/// Marker the source data uses for a month without a measured average.
pub const MISSING_AVG: &str = "-99.99";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Fractional year, e.g. `1958.2027`.
    pub date: f64,
    /// Monthly mean in ppm.
    pub avg: f64,
    /// Seasonally corrected trend in ppm.
    pub trend: f64,
}

impl Datum for Reading {
    fn x(&self) -> f64 { self.date }
    fn y(&self) -> f64 { self.avg }
}

pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_readings(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse `date<TAB>avg<TAB>trend` rows, skipping rows whose average is the
/// missing-value marker. Blank lines are ignored.
pub fn read_readings<R: io::Read>(input: R) -> Result<Vec<Reading>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if rec.len() != 3 {
            anyhow::bail!("line {}: expected 3 tab-separated fields, found {}", line + 1, rec.len());
        }
        if &rec[1] == MISSING_AVG {
            dropped += 1;
            continue;
        }
        let field = |i: usize| -> Result<f64> {
            rec[i]
                .parse::<f64>()
                .with_context(|| format!("line {}: bad number {:?}", line + 1, &rec[i]))
        };
        out.push(Reading { date: field(0)?, avg: field(1)?, trend: field(2)? });
    }

    info!(rows = out.len(), dropped, "loaded readings");
    Ok(out)
}

/// The reading with the largest average; the later one wins a tie.
pub fn highest(readings: &[Reading]) -> Option<&Reading> {
    readings.iter().max_by(|a, b| a.avg.total_cmp(&b.avg))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1958.2027\t315.70\t314.43\n\
                          1958.2877\t317.45\t315.16\n\
                          1958.4548\t-99.99\t314.71\n\
                          \n\
                          1958.5370\t315.86\t314.85\n";

    #[test]
    fn missing_averages_are_dropped() {
        let rows = read_readings(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.avg > 0.0));
        assert_eq!(rows[2], Reading { date: 1958.537, avg: 315.86, trend: 314.85 });
    }

    #[test]
    fn malformed_number_reports_the_line() {
        let err = read_readings("1958.2\tabc\t314.4\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"), "{err:#}");
    }

    #[test]
    fn short_row_is_rejected() {
        assert!(read_readings("1958.2\t315.7\n".as_bytes()).is_err());
    }

    #[test]
    fn highest_prefers_the_last_tie() {
        let rows = [
            Reading { date: 1.0, avg: 2.0, trend: 0.0 },
            Reading { date: 2.0, avg: 3.0, trend: 0.0 },
            Reading { date: 3.0, avg: 3.0, trend: 0.0 },
        ];
        assert_eq!(highest(&rows).map(|r| r.date), Some(3.0));
        assert!(highest(&[]).is_none());
    }
}
