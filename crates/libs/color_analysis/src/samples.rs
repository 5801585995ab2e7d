use crate::error::{ColorError, Result};
use common_types::RgbColor;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column names the training table must provide, matched case-insensitively.
const REQUIRED_COLUMNS: [&str; 4] = ["red", "green", "blue", "name"];

/// Cell values that count as missing, besides an empty cell.
const MISSING_MARKERS: [&str; 6] = ["na", "n/a", "nan", "null", "none", "#n/a"];

/// One labeled training row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub name: String,
}

impl ColorSample {
    pub fn new(red: u8, green: u8, blue: u8, name: impl Into<String>) -> Self {
        Self {
            red,
            green,
            blue,
            name: name.into(),
        }
    }

    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        RgbColor::new(self.red, self.green, self.blue)
    }
}

/// The immutable training corpus, loaded once from a CSV table.
#[derive(Debug, Clone)]
pub struct ColorSampleStore {
    samples: Vec<ColorSample>,
    dropped_rows: usize,
}

impl ColorSampleStore {
    /// Loads samples from a CSV file with a `red,green,blue,name` header.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads samples from any CSV source.
    ///
    /// Rows where any of the required fields is missing are dropped, never
    /// filled in. A channel value that is present but not an integer in
    /// `0..=255` fails the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = locate_columns(csv_reader.headers()?)?;

        let mut samples = Vec::new();
        let mut dropped_rows = 0;
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let fields = columns.map(|index| record.get(index).unwrap_or_default());
            if fields.iter().any(|field| is_missing(field)) {
                dropped_rows += 1;
                continue;
            }
            let [red, green, blue, name] = fields;
            samples.push(ColorSample {
                red: parse_channel(red, "red", line)?,
                green: parse_channel(green, "green", line)?,
                blue: parse_channel(blue, "blue", line)?,
                name: name.to_owned(),
            });
        }

        if samples.is_empty() {
            return Err(ColorError::DataFormat(format!(
                "no complete rows found ({dropped_rows} incomplete rows dropped)"
            )));
        }

        Ok(Self {
            samples,
            dropped_rows,
        })
    }

    #[must_use]
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of rows skipped because a required field was missing.
    #[must_use]
    pub const fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

fn locate_columns(headers: &csv::StringRecord) -> Result<[usize; 4]> {
    let positions = REQUIRED_COLUMNS.map(|column| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(column))
    });

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .zip(positions)
        .filter(|(_, position)| position.is_none())
        .map(|(column, _)| *column)
        .collect();
    if !missing.is_empty() {
        return Err(ColorError::DataFormat(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )));
    }

    Ok(positions.map(Option::unwrap_or_default))
}

fn is_missing(field: &str) -> bool {
    field.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| field.eq_ignore_ascii_case(marker))
}

fn parse_channel(value: &str, column: &str, line: u64) -> Result<u8> {
    if let Ok(channel) = value.parse::<u8>() {
        return Ok(channel);
    }
    // Spreadsheet exports often write whole numbers as `12.0`.
    match value.parse::<f64>() {
        Ok(float) if float.fract() == 0.0 && (0.0..=255.0).contains(&float) => Ok(float as u8),
        _ => Err(ColorError::DataFormat(format!(
            "line {line}: `{column}` must be an integer between 0 and 255, got `{value}`"
        ))),
    }
}
