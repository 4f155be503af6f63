//! # VSOP87B fixed-column reader
//!
//! Parses the fixed-width text distribution files of the VSOP87B theory into
//! the coefficient tables of a [`Vsop87Model`].
//!
//! ## File layout
//!
//! Every record spans at least 132 columns (0-indexed):
//! - column 17 — format version character, must be `'2'` (VSOP87B);
//! - columns 22..29 — body name, 7 characters, space padded;
//! - column 41 — series index: `'1'` longitude, `'2'` latitude, `'3'`
//!   radius; a change of index (or a short line) ends the current quantity
//!   section;
//! - column 59 — power-of-time digit (0–5) for the following term block;
//! - columns 60..67 — decimal term count N; exactly N data lines follow.
//!
//! Each data line supplies amplitude (columns 79..97, trimmed), phase
//! (columns 98..111, taken verbatim) and frequency (columns 111..131,
//! trimmed). The layout and offsets are bit-exact for compatibility with
//! the distributed files.
//!
//! ## Error Handling
//!
//! All failures are [`Vsop87FormatError`]s carrying the 1-based line number
//! and a cause; the first error aborts the whole load and no partial model
//! is ever returned.

use std::ops::Range;

use camino::Utf8Path;

use crate::errors::{HeliposError, Vsop87FormatError, Vsop87FormatErrorKind};

use super::{Body, SeriesTable, Term, Vsop87Model};

/// Supported VSOP87 format version character (VSOP87B: spherical, J2000).
const SUPPORTED_VERSION: char = '2';

/// Minimum record width of the fixed-column layout.
const RECORD_WIDTH: usize = 132;

impl Vsop87Model {
    /// Construct a model from the VSOP87B file of `body` in `directory`.
    ///
    /// The file is expected under its distribution name,
    /// `VSOP87B.<extension>` (e.g. `VSOP87B.ear` for the Earth). The
    /// location is always supplied by the caller; the library never
    /// consults process environment state.
    pub fn from_path(body: Body, directory: &Utf8Path) -> Result<Self, HeliposError> {
        let path = directory.join(format!("VSOP87B.{}", body.file_extension()));
        let source = std::fs::read_to_string(&path)?;
        Ok(Self::from_source(body, &source)?)
    }

    /// Construct a model for `body` from an in-memory VSOP87B source.
    ///
    /// The three quantity sections (longitude, latitude, radius) must appear
    /// in that order, each as a run of header + term blocks sharing the
    /// section's series index.
    pub fn from_source(body: Body, source: &str) -> Result<Self, Vsop87FormatError> {
        let lines: Vec<&str> = source.lines().collect();
        let mut cursor = 0;
        let longitude = parse_quantity(b'1', body, &lines, &mut cursor)?;
        let latitude = parse_quantity(b'2', body, &lines, &mut cursor)?;
        let radius = parse_quantity(b'3', body, &lines, &mut cursor)?;
        Ok(Vsop87Model {
            longitude,
            latitude,
            radius,
        })
    }
}

/// Parse one quantity section starting at `*cursor`.
///
/// Advances the cursor past every block whose series-index column matches
/// `marker` and returns the populated table. The section ends without error
/// at the first line that is too short or carries a different index.
fn parse_quantity(
    marker: u8,
    body: Body,
    lines: &[&str],
    cursor: &mut usize,
) -> Result<SeriesTable, Vsop87FormatError> {
    let mut table: SeriesTable = Default::default();

    while *cursor < lines.len() {
        let line = lines[*cursor];
        let header_number = *cursor + 1;
        if line.len() < RECORD_WIDTH {
            break;
        }
        let bytes = line.as_bytes();
        if bytes[41] != marker {
            break;
        }

        let version = bytes[17] as char;
        if version != SUPPORTED_VERSION {
            return Err(Vsop87FormatError::new(
                header_number,
                Vsop87FormatErrorKind::VersionMismatch {
                    expected: SUPPORTED_VERSION,
                    found: version,
                },
            ));
        }

        let name = &line[22..29];
        if name != body.record_name() {
            return Err(Vsop87FormatError::new(
                header_number,
                Vsop87FormatErrorKind::BodyMismatch {
                    expected: body.record_name(),
                    found: name.to_string(),
                },
            ));
        }

        let power = (bytes[59] as char)
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|digit| *digit < table.len())
            .ok_or_else(|| {
                Vsop87FormatError::new(
                    header_number,
                    Vsop87FormatErrorKind::InvalidPowerIndex(bytes[59] as char),
                )
            })?;

        let count_field = line[60..67].trim();
        let count: usize = count_field.parse().map_err(|_| {
            Vsop87FormatError::new(
                header_number,
                Vsop87FormatErrorKind::InvalidTermCount(count_field.to_string()),
            )
        })?;

        if count == 0 {
            // valid: the slot simply stays empty for this power
            *cursor += 1;
            continue;
        }

        let remaining = lines.len() - header_number;
        if count > remaining {
            return Err(Vsop87FormatError::new(
                header_number,
                Vsop87FormatErrorKind::UnexpectedEndOfInput {
                    declared: count,
                    remaining,
                },
            ));
        }

        *cursor += 1;
        let mut terms = Vec::with_capacity(count);
        for offset in 0..count {
            let data = lines[*cursor + offset];
            let data_number = *cursor + offset + 1;
            if data.len() < RECORD_WIDTH {
                return Err(Vsop87FormatError::new(
                    data_number,
                    Vsop87FormatErrorKind::TruncatedRecord,
                ));
            }
            terms.push(Term {
                amplitude: numeric_field(data, 79..97, true, "amplitude", data_number)?,
                phase: numeric_field(data, 98..111, false, "phase", data_number)?,
                frequency: numeric_field(data, 111..131, true, "frequency", data_number)?,
            });
        }
        table[power] = terms;
        *cursor += count;
    }

    Ok(table)
}

/// Parse one fixed-column decimal field, rejecting non-finite spellings.
fn numeric_field(
    line: &str,
    columns: Range<usize>,
    trim: bool,
    field: &'static str,
    line_number: usize,
) -> Result<f64, Vsop87FormatError> {
    let raw = &line[columns];
    let text = if trim { raw.trim() } else { raw };
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            Vsop87FormatError::new(
                line_number,
                Vsop87FormatErrorKind::InvalidNumericField {
                    field,
                    value: text.to_string(),
                },
            )
        })
}
