use approx::assert_relative_eq;

use heliopos::constants::J2000;
use heliopos::{Body, Vsop87FormatErrorKind, Vsop87Model};

mod common;
use common::{
    earth_sample_source, header_line, header_line_with_count, term_line,
    term_line_with_amplitude,
};

#[test]
fn test_load_and_evaluate_sample_model() {
    let model = Vsop87Model::from_source(Body::Earth, &earth_sample_source()).unwrap();

    // τ = 0 collapses the Horner combination to the power-0 sums, which for
    // zero-frequency, zero-phase terms are plain amplitude sums
    let at_epoch = model.spherical_position(J2000);
    assert_relative_eq!(at_epoch.longitude, 2.10, epsilon = 1e-12);
    assert_relative_eq!(at_epoch.latitude, 0.20, epsilon = 1e-12);
    assert_relative_eq!(at_epoch.radius, 1.0161, epsilon = 1e-12);

    // one Julian century later, τ = 0.1: the power-1 sums contribute linearly
    let later = model.spherical_position(J2000 + 36_525.0);
    assert_relative_eq!(later.longitude, 2.10 + 0.1 * 0.50, epsilon = 1e-12);
    assert_relative_eq!(later.latitude, 0.20, epsilon = 1e-12);
    assert_relative_eq!(later.radius, 1.0161 + 0.1 * 0.30, epsilon = 1e-12);
}

#[test]
fn test_version_mismatch_reports_offending_line() {
    let source = [
        header_line('2', "EARTH  ", '1', 0, 1),
        term_line(1.75, 0.0, 0.0),
        // second header carries an unsupported version byte
        header_line('3', "EARTH  ", '1', 1, 1),
        term_line(0.50, 0.0, 0.0),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(
        err.kind,
        Vsop87FormatErrorKind::VersionMismatch {
            expected: '2',
            found: '3'
        }
    );
}

#[test]
fn test_body_mismatch() {
    let source = [
        header_line('2', "VENUS  ", '1', 0, 1),
        term_line(1.75, 0.0, 0.0),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        Vsop87FormatErrorKind::BodyMismatch {
            expected: "EARTH  ",
            found: "VENUS  ".to_string()
        }
    );
}

#[test]
fn test_declared_count_exceeding_remaining_lines() {
    let source = [
        header_line('2', "EARTH  ", '1', 0, 3),
        term_line(1.75, 0.0, 0.0),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        Vsop87FormatErrorKind::UnexpectedEndOfInput {
            declared: 3,
            remaining: 1
        }
    );
}

#[test]
fn test_zero_term_count_leaves_slot_empty() {
    let source = [
        // longitude power 0 declares no terms at all
        header_line('2', "EARTH  ", '1', 0, 0),
        header_line('2', "EARTH  ", '1', 1, 1),
        term_line(0.50, 0.0, 0.0),
        header_line('2', "EARTH  ", '2', 0, 1),
        term_line(0.20, 0.0, 0.0),
        header_line('2', "EARTH  ", '3', 0, 1),
        term_line(1.0, 0.0, 0.0),
    ]
    .join("\n");

    let model = Vsop87Model::from_source(Body::Earth, &source).unwrap();
    let at_epoch = model.spherical_position(J2000);
    assert_relative_eq!(at_epoch.longitude, 0.0, epsilon = 1e-12);

    let later = model.spherical_position(J2000 + 3_652.5);
    assert_relative_eq!(later.longitude, 0.01 * 0.50, epsilon = 1e-12);
}

#[test]
fn test_invalid_term_count_field() {
    let source = header_line_with_count('2', "EARTH  ", '1', 0, "   x   ");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(
        err.kind,
        Vsop87FormatErrorKind::InvalidTermCount("x".to_string())
    );
}

#[test]
fn test_invalid_amplitude_reports_data_line() {
    let source = [
        header_line('2', "EARTH  ", '1', 0, 2),
        term_line(1.75, 0.0, 0.0),
        term_line_with_amplitude("not-a-number"),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 3);
    assert!(matches!(
        err.kind,
        Vsop87FormatErrorKind::InvalidNumericField {
            field: "amplitude",
            ..
        }
    ));
}

#[test]
fn test_invalid_power_index() {
    let source = [
        header_line('2', "EARTH  ", '1', 9, 1),
        term_line(1.75, 0.0, 0.0),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, Vsop87FormatErrorKind::InvalidPowerIndex('9'));
}

#[test]
fn test_truncated_data_record() {
    let source = [
        header_line('2', "EARTH  ", '1', 0, 1),
        "too short to hold any term".to_string(),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, Vsop87FormatErrorKind::TruncatedRecord);
}

#[test]
fn test_non_finite_field_rejected() {
    let source = [
        header_line('2', "EARTH  ", '1', 0, 1),
        term_line_with_amplitude("inf"),
    ]
    .join("\n");

    let err = Vsop87Model::from_source(Body::Earth, &source).unwrap_err();
    assert_eq!(err.line, 2);
    assert!(matches!(
        err.kind,
        Vsop87FormatErrorKind::InvalidNumericField {
            field: "amplitude",
            ..
        }
    ));
}

#[test]
fn test_terms_summed_in_reverse_insertion_order() {
    // the dominant term is listed first in the file; the two tiny trailing
    // terms only survive rounding when they are accumulated before it
    let small: f64 = "6.0e-17".parse().unwrap();
    let reverse = small + small + 1.0;
    let forward = 1.0 + small + small;
    assert_ne!(reverse, forward);

    let source = [
        header_line('2', "EARTH  ", '1', 0, 1),
        term_line(0.0, 0.0, 0.0),
        header_line('2', "EARTH  ", '2', 0, 1),
        term_line(0.0, 0.0, 0.0),
        header_line('2', "EARTH  ", '3', 0, 3),
        term_line(1.0, 0.0, 0.0),
        term_line_with_amplitude("6.0e-17"),
        term_line_with_amplitude("6.0e-17"),
    ]
    .join("\n");

    let model = Vsop87Model::from_source(Body::Earth, &source).unwrap();
    assert_eq!(model.spherical_position(J2000).radius, reverse);
}
