//! Parsing of acquisition sample files.
//!
//! The serial instruments stream tab-delimited lines. Lines carrying data
//! start with a fixed header token (`IPT` on the wind-tunnel rig); every
//! other line is chatter and is ignored:
//!
//! ```text
//! IPT\t1022\t2731\t2740
//! IPT\t1023\t2729\t2738
//! ```
//!
//! [`SampleFile`] keeps the numeric columns after the token and averages
//! them, and [`AdcConversion`] turns averaged ADC counts into volts.

use std::io::Read;

use log::debug;
use thiserror::Error;
use uom::si::{electric_potential::volt, f64::ElectricPotential};

/// Header token used by the wind-tunnel instruments.
pub const DEFAULT_HEADER: &str = "IPT";

/// Errors that can occur while reading a sample file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The underlying reader or delimited-text parser failed.
    #[error("failed to read samples")]
    Csv(#[from] csv::Error),

    /// A data line holds a field that is not a number.
    #[error("line {line}: field {field:?} is not a number")]
    Malformed { line: u64, field: String },

    /// A data line has a different number of columns than the first one.
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// No data lines were found.
    #[error("no lines start with the header token")]
    Empty,
}

/// Numeric samples read from one acquisition file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFile {
    rows: Vec<Vec<f64>>,
}

impl SampleFile {
    /// Parses the data lines of `reader` that start with `header`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if reading fails, a data field is not a
    /// number, or data lines disagree on their column count.
    pub fn parse<R: Read>(reader: R, header: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut skipped = 0_usize;

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);

            if !record.get(0).is_some_and(|token| token.starts_with(header)) {
                skipped += 1;
                continue;
            }

            let row = record
                .iter()
                .skip(1)
                .filter(|field| !field.is_empty())
                .map(|field| {
                    field.parse::<f64>().map_err(|_| DatasetError::Malformed {
                        line,
                        field: field.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(DatasetError::Ragged {
                        line,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }

            rows.push(row);
        }

        debug!(
            "parsed {} sample lines, skipped {skipped} without header {header:?}",
            rows.len()
        );

        Ok(Self { rows })
    }

    /// Returns the parsed rows, one per data line.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Averages every column over all data lines.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`] if the file had no data lines.
    pub fn column_means(&self) -> Result<Vec<f64>, DatasetError> {
        let first = self.rows.first().ok_or(DatasetError::Empty)?;
        let mut sums = vec![0.0; first.len()];

        for row in &self.rows {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let n = self.rows.len() as f64;
        Ok(sums.into_iter().map(|sum| sum / n).collect())
    }
}

/// Linear conversion from raw ADC counts to volts: `E = counts·V_ref/full_scale − offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcConversion {
    pub reference_voltage: ElectricPotential,
    pub full_scale: f64,
    pub offset: ElectricPotential,
}

impl Default for AdcConversion {
    /// The 12-bit, 3.3 V converter of the anemometer board.
    fn default() -> Self {
        Self {
            reference_voltage: ElectricPotential::new::<volt>(3.3),
            full_scale: 4095.0,
            offset: ElectricPotential::new::<volt>(0.146),
        }
    }
}

impl AdcConversion {
    /// Converts a (possibly averaged) count to a voltage.
    #[must_use]
    pub fn voltage(&self, counts: f64) -> ElectricPotential {
        self.reference_voltage * (counts / self.full_scale) - self.offset
    }
}
