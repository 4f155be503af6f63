//! Shared fixtures for the integration tests: builders producing bit-exact
//! 132-column VSOP87B records.

/// Build a block header line for the given version/body/series-index/power,
/// with the term count rendered into columns 60..67.
pub fn header_line(version: char, body: &str, index: char, power: u8, count: usize) -> String {
    header_line_with_count(version, body, index, power, &format!("{count:7}"))
}

/// Same as [`header_line`] but with a caller-supplied raw term-count field,
/// for exercising malformed counts.
pub fn header_line_with_count(
    version: char,
    body: &str,
    index: char,
    power: u8,
    count_field: &str,
) -> String {
    assert_eq!(body.len(), 7, "body field is 7 space-padded characters");
    assert_eq!(count_field.len(), 7, "count field spans columns 60..67");
    let mut line = vec![b' '; 132];
    line[17] = version as u8;
    line[22..29].copy_from_slice(body.as_bytes());
    line[41] = index as u8;
    line[59] = b'0' + power;
    line[60..67].copy_from_slice(count_field.as_bytes());
    String::from_utf8(line).unwrap()
}

/// Build a term data line: amplitude in columns 79..97 (right-justified),
/// phase filling columns 98..111 exactly, frequency in columns 111..131.
pub fn term_line(amplitude: f64, phase: f64, frequency: f64) -> String {
    format!(
        "{:79}{:>18.10} {:013.10}{:>20.10} ",
        "", amplitude, phase, frequency
    )
}

/// A term data line whose amplitude field holds arbitrary (possibly
/// malformed) text.
pub fn term_line_with_amplitude(amplitude_field: &str) -> String {
    format!(
        "{:79}{:>18} {:013.10}{:>20.10} ",
        "", amplitude_field, 0.0, 0.0
    )
}

/// A complete, well-formed VSOP87B source for the Earth with small
/// hand-picked coefficients:
/// longitude 2.10 + 0.50τ, latitude 0.20, radius 1.0161 + 0.30τ at zero
/// frequency (all phases zero).
pub fn earth_sample_source() -> String {
    [
        header_line('2', "EARTH  ", '1', 0, 2),
        term_line(1.75, 0.0, 0.0),
        term_line(0.35, 0.0, 0.0),
        header_line('2', "EARTH  ", '1', 1, 1),
        term_line(0.50, 0.0, 0.0),
        header_line('2', "EARTH  ", '2', 0, 1),
        term_line(0.20, 0.0, 0.0),
        header_line('2', "EARTH  ", '3', 0, 2),
        term_line(1.0001, 0.0, 0.0),
        term_line(0.016, 0.0, 0.0),
        header_line('2', "EARTH  ", '3', 1, 1),
        term_line(0.30, 0.0, 0.0),
    ]
    .join("\n")
}
