use super::*;
use serde_json::json;

fn square() -> Value {
    json!([
        {"x": 0, "y": 0},
        {"x": 10, "y": 0},
        {"x": 10, "y": 10},
        {"x": 0, "y": 10}
    ])
}

// =============================================================================
// SHAPE COLLECTIONS
// =============================================================================

#[test]
fn shape_collection_keeps_point_order() {
    let shapes = validate_shape_collection(&json!([square()]));
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0][1], Point::new(10.0, 0.0));
    assert_eq!(shapes[0][3], Point::new(0.0, 10.0));
}

#[test]
fn shape_collection_skips_short_and_non_array_entries() {
    let raw = json!([
        42,
        {"x": 1, "y": 1},
        [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
        square()
    ]);
    let shapes = validate_shape_collection(&raw);
    assert_eq!(shapes.len(), 1);
}

#[test]
fn shape_collection_of_a_non_array_is_empty() {
    assert!(validate_shape_collection(&json!("shapes")).is_empty());
    assert!(validate_shape_collection(&json!([])).is_empty());
}

#[test]
fn point_fields_are_coerced() {
    let raw = json!([[
        {"x": "2.5", "y": true},
        {"x": null, "y": false},
        {"y": 3},
        {"x": "abc", "y": [1]}
    ]]);
    let shapes = validate_shape_collection(&raw);
    assert_eq!(shapes[0][0], Point::new(2.5, 1.0));
    assert_eq!(shapes[0][1], Point::new(0.0, 0.0));
    assert!(shapes[0][2].x.is_nan());
    assert_eq!(shapes[0][2].y, 3.0);
    assert!(shapes[0][3].x.is_nan());
    assert!(shapes[0][3].y.is_nan());
}

#[test]
fn collections_drop_empty_members() {
    let raw = json!([[square()], [], "nope", [square(), square()]]);
    let collections = validate_collections(&raw);
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[1].len(), 2);
}

// =============================================================================
// PARAMETERS
// =============================================================================

#[test]
fn too_few_arguments_is_a_count_error() {
    let err = validate_parameters(Operation::Offset, &[json!([]), json!("double")])
        .expect_err("two arguments");
    match err {
        ClipError::ArgumentCount {
            operation,
            required,
            received,
        } => {
            assert_eq!(operation, "offset");
            assert_eq!(required, 3);
            assert_eq!(received, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn count_is_checked_before_types() {
    let err = validate_parameters(Operation::Orientation, &[json!("not shapes")])
        .expect_err("one argument");
    assert!(matches!(err, ClipError::ArgumentCount { required: 2, .. }));
}

#[test]
fn shapes_must_be_an_array() {
    let err = validate_parameters(Operation::Simplify, &[json!({}), json!("double")])
        .expect_err("object shapes");
    match err {
        ClipError::ArgumentType {
            parameter,
            received,
            ..
        } => {
            assert_eq!(parameter, "shapes");
            assert_eq!(received, "{}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn mode_token_is_exact() {
    let err = validate_parameters(Operation::Orientation, &[json!([]), json!("Double")])
        .expect_err("capitalised mode");
    assert!(err.to_string().contains("'double' || 'integer' required"));
    assert!(err.to_string().ends_with("Double"));
}

#[test]
fn delta_must_be_a_number() {
    let args = [json!([]), json!("integer"), json!("5")];
    let err = validate_parameters(Operation::LineOffset, &args).expect_err("string delta");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "delta", .. }));
}

#[test]
fn join_type_outside_the_set_is_rejected() {
    let args = [json!([]), json!("double"), json!(1), json!("jtBevel")];
    let err = validate_parameters(Operation::Offset, &args).expect_err("bevel join");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "joinType", .. }));
    assert!(err.to_string().contains("jtBevel"));
}

#[test]
fn miter_limit_must_be_a_number() {
    let args = [json!([]), json!("double"), json!(1), json!("jtMiter"), json!("2")];
    let err = validate_parameters(Operation::Offset, &args).expect_err("string limit");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "miterLimit", .. }));
}

#[test]
fn optional_positions_default_to_absent() {
    let args = [json!([]), json!("double"), json!(-2.5)];
    let parsed = validate_parameters(Operation::Offset, &args).expect("valid");
    assert_eq!(parsed.mode(1), Some(CoordinateMode::Double));
    assert_eq!(parsed.number(2), Some(-2.5));
    assert_eq!(parsed.join(3), None);
    assert_eq!(parsed.number(4), None);
}

#[test]
fn null_at_optional_position_is_absent() {
    let args = [json!([]), json!("double"), json!(1), Value::Null, json!(4)];
    let parsed = validate_parameters(Operation::Offset, &args).expect("valid");
    assert_eq!(parsed.join(3), None);
    assert_eq!(parsed.number(4), Some(4.0));
}

#[test]
fn null_at_required_position_is_a_type_error() {
    let err = validate_parameters(Operation::Clean, &[json!([]), Value::Null])
        .expect_err("null mode");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "mode", .. }));
    assert!(err.to_string().ends_with("null"));
}

#[test]
fn clip_checks_both_operands_then_kind() {
    let err = validate_parameters(Operation::Clip, &[json!([]), json!(3)])
        .expect_err("numeric clip operand");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "clip", .. }));

    let args = [json!([]), json!([]), json!("integer"), json!("ctUnion")];
    let parsed = validate_parameters(Operation::Clip, &args).expect("valid");
    assert_eq!(parsed.mode(2), Some(CoordinateMode::Integer));
    assert_eq!(parsed.clip_kind(3), Some(ClipKind::Union));

    let args = [json!([]), json!([]), json!("integer"), json!("ctNone")];
    let err = validate_parameters(Operation::Clip, &args).expect_err("bad kind");
    assert!(matches!(err, ClipError::ArgumentType { parameter: "clipType", .. }));
}

#[test]
fn union_mode_is_optional() {
    let args = [json!([])];
    let parsed = validate_parameters(Operation::Union, &args).expect("valid");
    assert!(parsed.shapes(0).is_some());
    assert_eq!(parsed.mode(1), None);
}

#[test]
fn extra_arguments_are_ignored() {
    let args = [json!([]), json!("double"), json!("anything"), json!(7)];
    assert!(validate_parameters(Operation::FixOrientation, &args).is_ok());
}

#[test]
fn operations_parse_from_host_names() {
    for operation in Operation::ALL {
        assert_eq!(operation.name().parse::<Operation>(), Ok(operation));
    }
    assert_eq!(
        "union".parse::<Operation>(),
        Err(UnknownOperation("union".to_string()))
    );
}
