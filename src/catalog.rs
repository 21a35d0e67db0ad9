//! Star catalog loading from delimited text.
//!
//! Accepts comma/tab/semicolon/pipe separated files with a header row.
//! Required columns (after trimming and lowercasing the header): a
//! `star_name` column, and either `ra` + `dec` columns or a single `coord`
//! column holding "ra,dec" pairs. A column whose name contains `mag_v`
//! supplies optional magnitudes. Any non-numeric or empty required cell
//! fails the whole load; magnitude problems only raise a warning.

use csv::{ReaderBuilder, StringRecord};
use log::warn;

use crate::api::{CatalogWarning, StarCatalog, StarRecord};
use crate::error::{Error, Result};

const DELIMITER_CANDIDATES: &[u8] = b",\t;|";

/// Where the row's coordinates come from.
enum CoordSource {
    /// Separate `ra` and `dec` columns (wins when both forms are present)
    Pair { ra: usize, dec: usize },
    /// A single `coord` column with comma-separated "ra,dec" text
    Packed(usize),
}

/// Resolved positions of the columns of interest.
struct ColumnMap {
    name: usize,
    coords: CoordSource,
    mag: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |wanted: &str| normalized.iter().position(|h| h == wanted);

        let name = find("star_name").ok_or_else(|| {
            Error::MissingColumns("star names not found: expected a 'star_name' column".into())
        })?;

        let coords = match (find("ra"), find("dec")) {
            (Some(ra), Some(dec)) => CoordSource::Pair { ra, dec },
            _ => match find("coord") {
                Some(index) => CoordSource::Packed(index),
                None => {
                    return Err(Error::MissingColumns(
                        "no RA/DEC data found: expected 'ra' and 'dec' columns \
                         or a combined 'coord' column"
                            .into(),
                    ))
                }
            },
        };

        let mag = normalized.iter().position(|h| h.contains("mag_v"));

        Ok(Self { name, coords, mag })
    }
}

/// Parse an uploaded catalog file.
///
/// The delimiter is detected from the header line. Row order is preserved.
/// Fails with [`Error::MissingColumns`] or [`Error::InvalidValues`] per the
/// column rules above, or [`Error::FileRead`] when the bytes cannot be read
/// as delimited text at all.
pub fn load_catalog(bytes: &[u8]) -> Result<StarCatalog> {
    let delimiter = sniff_delimiter(bytes);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut stars = Vec::new();
    let mut invalid_magnitudes = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let line = row + 2; // 1-based, after the header

        let name = cell(&record, columns.name);
        if name.is_empty() {
            return Err(Error::InvalidValues(format!(
                "line {}: star name is empty",
                line
            )));
        }

        let (ra_deg, dec_deg) = match columns.coords {
            CoordSource::Pair { ra, dec } => (
                parse_coordinate(cell(&record, ra), "ra", line)?,
                parse_coordinate(cell(&record, dec), "dec", line)?,
            ),
            CoordSource::Packed(index) => {
                let packed = cell(&record, index);
                let mut parts = packed.splitn(3, ',');
                let ra = parts.next().unwrap_or("").trim();
                let dec = parts.next().unwrap_or("").trim();
                (
                    parse_coordinate(ra, "ra", line)?,
                    parse_coordinate(dec, "dec", line)?,
                )
            }
        };

        let mag = match columns.mag {
            Some(index) => match cell(&record, index).parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    invalid_magnitudes += 1;
                    None
                }
            },
            None => None,
        };

        stars.push(StarRecord {
            name: name.to_string(),
            ra_deg,
            dec_deg,
            mag,
        });
    }

    let mut warnings = Vec::new();
    if invalid_magnitudes > 0 {
        let warning = CatalogWarning::InvalidMagnitudes {
            count: invalid_magnitudes,
        };
        warn!("catalog load: {}", warning);
        warnings.push(warning);
    }

    Ok(StarCatalog {
        stars,
        warnings,
        has_magnitudes: columns.mag.is_some(),
    })
}

/// Pick the delimiter with the highest count in the header line.
/// Falls back to comma, which leaves a one-column header to fail the
/// column checks with a clear message.
fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|&b| b == b'\n').next().unwrap_or(b"");
    let mut best = (b',', 0usize);
    for &candidate in DELIMITER_CANDIDATES {
        let count = header.iter().filter(|&&b| b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn parse_coordinate(text: &str, column: &str, line: usize) -> Result<f64> {
    if text.is_empty() {
        return Err(Error::InvalidValues(format!(
            "line {}: required column '{}' is empty",
            line, column
        )));
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidValues(format!(
            "line {}: '{}' value '{}' is not numeric",
            line, column, text
        ))),
    }
}
