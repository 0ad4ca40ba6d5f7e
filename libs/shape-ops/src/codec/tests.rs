use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn double_round_trip_within_a_micro_unit() {
    let codec = CoordinateCodec::default();
    for value in [0.0, 1.0, -1.0, 0.1234567, -0.0000004, 123.456789, -98765.4321, 1.0e6 + 0.3] {
        let encoded = codec.encode(value, CoordinateMode::Double);
        let decoded = codec.decode(encoded, CoordinateMode::Double);
        assert_abs_diff_eq!(decoded, value, epsilon = 1e-6);
    }
}

/// Rounding is symmetric around zero, unlike truncation.
#[test]
fn encode_rounds_half_away_from_zero() {
    let codec = CoordinateCodec::default();
    assert_eq!(codec.encode(0.0000006, CoordinateMode::Double), 1);
    assert_eq!(codec.encode(-0.0000006, CoordinateMode::Double), -1);
    assert_eq!(codec.encode(0.0000004, CoordinateMode::Double), 0);
    assert_eq!(codec.encode(2.5, CoordinateMode::Integer), 3);
    assert_eq!(codec.encode(-2.5, CoordinateMode::Integer), -3);
}

#[test]
fn integer_mode_passes_through() {
    let codec = CoordinateCodec::default();
    assert_eq!(codec.encode(150.0, CoordinateMode::Integer), 150);
    assert_eq!(codec.decode(-7, CoordinateMode::Integer), -7.0);
}

#[test]
fn custom_scale_is_honoured() {
    let codec = CoordinateCodec::new(1_000.0);
    assert_eq!(codec.scale(), 1_000.0);
    assert_eq!(codec.encode(1.5, CoordinateMode::Double), 1_500);
    assert_abs_diff_eq!(codec.decode(1_500, CoordinateMode::Double), 1.5);
}

#[test]
fn nan_and_overflow_saturate() {
    let codec = CoordinateCodec::default();
    assert_eq!(codec.encode(f64::NAN, CoordinateMode::Double), 0);
    assert_eq!(codec.encode(f64::INFINITY, CoordinateMode::Double), i64::MAX);
    assert_eq!(codec.encode(f64::NEG_INFINITY, CoordinateMode::Integer), i64::MIN);
}

#[test]
fn encode_shapes_skips_degenerate_paths() {
    let codec = CoordinateCodec::default();
    let shapes = vec![
        vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ],
    ];
    let paths = codec.encode_shapes(&shapes, CoordinateMode::Double);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0][2], IntPoint::new(1_000_000, 1_000_000));
}

#[test]
fn decode_paths_drops_short_output() {
    let codec = CoordinateCodec::default();
    let paths = vec![
        vec![IntPoint::new(0, 0), IntPoint::new(5, 5)],
        vec![IntPoint::new(0, 0), IntPoint::new(10, 0), IntPoint::new(10, 10)],
    ];
    let shapes = codec.decode_paths(&paths, CoordinateMode::Integer);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0][1], Point::new(10.0, 0.0));
}
