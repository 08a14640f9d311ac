use json_reader::{get, parse, parse_path, JsonError, JsonReader, Number, Segment, Value, ValueKind};

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ============================================================================
// Path grammar
// ============================================================================

#[test]
fn path_splits_on_default_delimiter() {
    let segments = parse_path("payload.issue.number", ".").unwrap();
    assert_eq!(
        segments,
        vec![
            Segment { key: "payload", index: None },
            Segment { key: "issue", index: None },
            Segment { key: "number", index: None },
        ]
    );
}

#[test]
fn path_with_bracket_index() {
    let segments = parse_path("payload.pages[12].action", ".").unwrap();
    assert_eq!(segments[1], Segment { key: "pages", index: Some(12) });
}

#[test]
fn path_leading_bracket_is_a_plain_key() {
    let segments = parse_path("[0]", ".").unwrap();
    assert_eq!(segments, vec![Segment { key: "[0]", index: None }]);
}

#[test]
fn path_with_bad_index_is_invalid() {
    for path in ["a[x]", "a[-1]", "a[]", "a[0][1]"] {
        match parse_path(path, ".") {
            Err(JsonError::InvalidPath { .. }) => {}
            other => panic!("expected InvalidPath for {path:?}, got {other:?}"),
        }
    }
}

#[test]
fn path_with_custom_delimiter() {
    let segments = parse_path("a/b.c/d[1]", "/").unwrap();
    assert_eq!(
        segments,
        vec![
            Segment { key: "a", index: None },
            Segment { key: "b.c", index: None },
            Segment { key: "d", index: Some(1) },
        ]
    );
}

#[test]
fn empty_delimiter_is_invalid() {
    assert!(matches!(parse_path("a.b", ""), Err(JsonError::InvalidPath { .. })));
}

#[test]
fn trailing_empty_segments_are_dropped() {
    assert_eq!(parse_path("a.b..", ".").unwrap().len(), 2);
    assert!(parse_path("", ".").unwrap().is_empty());
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn top_level_key() {
    let root = parse(r#"{"name":"Tommy","age":30}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_str("name").unwrap(), "Tommy");
    assert_eq!(reader.get_i64("age").unwrap(), 30);
}

#[test]
fn nested_object_path() {
    let root = parse(r#"{"person":{"name":"Tommy","age":30}}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_str("person.name").unwrap(), "Tommy");
    assert_eq!(reader.get_i64("person.age").unwrap(), 30);
}

#[test]
fn bracket_index_into_array() {
    let root = parse(r#"{"scores":[90,80,85]}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_i64("scores[0]").unwrap(), 90);
    assert_eq!(reader.get_i64("scores[1]").unwrap(), 80);
    assert_eq!(reader.get_i64("scores[2]").unwrap(), 85);
}

#[test]
fn bracket_index_out_of_range_is_an_error() {
    let root = parse(r#"{"scores":[90,80,85]}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(
        reader.get("scores[5]").unwrap_err(),
        JsonError::Index {
            key: "scores".to_string(),
            index: 5,
            len: 3,
        }
    );
}

#[test]
fn array_of_objects_path() {
    let root = parse(r#"{"students":[{"name":"A"},{"name":"B"}]}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_str("students[0].name").unwrap(), "A");
    assert_eq!(reader.get_str("students[1].name").unwrap(), "B");
}

#[test]
fn missing_key_resolves_to_null() {
    let root = parse(r#"{"a":{"b":1}}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert!(reader.get("missing").unwrap().is_null());
    assert!(reader.get("missing.path").unwrap().is_null());
    assert!(reader.get("a.c").unwrap().is_null());
    assert!(reader.get("a.c.d.e").unwrap().is_null());
}

#[test]
fn null_literal_and_missing_key_read_the_same() {
    let root = parse(r#"{"present":null}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get("present").unwrap(), reader.get("absent").unwrap());
}

#[test]
fn lenient_stop_returns_last_reached_value() {
    let root = parse(r#"{"a":{"b":5},"s":"text","list":[1,2]}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(
        reader.get("a.b.c.d").unwrap(),
        &Value::Number(Number::Integer(5))
    );
    assert_eq!(reader.get("s.length").unwrap(), &text("text"));
    assert_eq!(reader.get("list.first").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn bracket_on_non_array_is_type_mismatch() {
    let root = parse(r#"{"a":{"b":1},"n":3}"#).unwrap();
    let reader = JsonReader::new(&root);
    match reader.get("a[0]").unwrap_err() {
        JsonError::TypeMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, ValueKind::Array);
            assert_eq!(found, ValueKind::Object);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        reader.get("missing[0]"),
        Err(JsonError::TypeMismatch { found: ValueKind::Null, .. })
    ));
    assert!(matches!(
        reader.get("n.x[0]"),
        Err(JsonError::TypeMismatch { expected: ValueKind::Object, .. })
    ));
}

#[test]
fn empty_path_is_the_root() {
    let root = parse(r#"{"a":1}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get("").unwrap(), &root);
}

#[test]
fn custom_delimiter_reader() {
    let root = parse(r#"{"a.b":{"c":[{"d":"deep"}]}}"#).unwrap();
    let reader = JsonReader::with_delimiter(&root, "/").unwrap();
    assert_eq!(reader.get_str("a.b/c[0]/d").unwrap(), "deep");
    assert_eq!(reader.delimiter(), "/");
    assert!(JsonReader::with_delimiter(&root, "").is_err());
}

#[test]
fn free_function_matches_reader() {
    let root = parse(r#"{"payload":{"pages":[{"page_name":"Home"}]}}"#).unwrap();
    let via_fn = get(&root, "payload.pages[0].page_name", ".").unwrap();
    let via_reader = JsonReader::new(&root).get("payload.pages[0].page_name").unwrap();
    assert_eq!(via_fn, via_reader);
    assert_eq!(via_fn, &text("Home"));
}

// ============================================================================
// Typed accessors
// ============================================================================

#[test]
fn narrowing_mismatch_reports_path_and_kinds() {
    let root = parse(r#"{"payload":{"issue":{"number":"12"}}}"#).unwrap();
    let reader = JsonReader::new(&root);
    let err = reader.get_i64("payload.issue.number").unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            path: "payload.issue.number".to_string(),
            expected: ValueKind::Integer,
            found: ValueKind::Text,
        }
    );
    assert_eq!(
        err.to_string(),
        "type mismatch at `payload.issue.number`: expected integer, found text"
    );
}

#[test]
fn missing_key_narrowed_to_text_is_a_mismatch() {
    let root = parse(r#"{"payload":{}}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert!(matches!(
        reader.get_str("payload.action"),
        Err(JsonError::TypeMismatch { found: ValueKind::Null, .. })
    ));
}

#[test]
fn optional_narrowing() {
    let root = parse(r#"{"payload":{"ref":null,"ref_type":"repository"}}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_as::<Option<&str>>("payload.ref").unwrap(), None);
    assert_eq!(reader.get_as::<Option<&str>>("payload.absent").unwrap(), None);
    assert_eq!(
        reader.get_as::<Option<&str>>("payload.ref_type").unwrap(),
        Some("repository")
    );
    assert!(reader.get_as::<Option<i64>>("payload.ref_type").is_err());
}

#[test]
fn float_accessor_widens_integers() {
    let root = parse(r#"{"i":2,"f":2.5,"t":"x"}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert_eq!(reader.get_f64("i").unwrap(), 2.0);
    assert_eq!(reader.get_f64("f").unwrap(), 2.5);
    assert!(reader.get_f64("t").is_err());
    assert!(reader.get_i64("f").is_err());
}

#[test]
fn bool_object_and_array_accessors() {
    let root = parse(r#"{"public":true,"repo":{"id":1,"name":"r"},"pages":[1,2,3]}"#).unwrap();
    let reader = JsonReader::new(&root);
    assert!(reader.get_bool("public").unwrap());
    assert_eq!(
        reader.get_object("repo").unwrap().keys().collect::<Vec<_>>(),
        ["id", "name"]
    );
    assert_eq!(reader.get_array("pages").unwrap().len(), 3);
    assert_eq!(reader.array_len("pages").unwrap(), 3);
    assert!(reader.get_object("pages").is_err());
    assert!(reader.get_array("repo").is_err());
    assert!(reader.get_bool("repo.name").is_err());
}

#[test]
fn value_level_narrowing_has_no_path() {
    let err = Value::Bool(true).to::<&str>().unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected text, found boolean");
}

#[test]
fn has_key_distinguishes_presence() {
    let root = parse(
        r#"{"payload":{"issue":{"number":1,"pull_request":{"url":"u"}},"other":{"number":2}}}"#,
    )
    .unwrap();
    let reader = JsonReader::new(&root);
    assert!(reader.has_key("payload.issue", "pull_request").unwrap());
    assert!(!reader.has_key("payload.other", "pull_request").unwrap());
    assert!(reader.has_key("", "payload").unwrap());
    assert!(reader.has_key("payload.issue.number", "x").is_err());
}

#[test]
fn iterate_array_by_index() {
    let root = parse(
        r#"{"payload":{"pages":[{"action":"created","page_name":"Home"},{"action":"edited","page_name":"FAQ"}]}}"#,
    )
    .unwrap();
    let reader = JsonReader::new(&root);
    let pages: Vec<(String, String)> = (0..reader.array_len("payload.pages").unwrap())
        .map(|i| {
            (
                reader.get_str(&format!("payload.pages[{i}].action")).unwrap().to_string(),
                reader.get_str(&format!("payload.pages[{i}].page_name")).unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pages,
        vec![
            ("created".to_string(), "Home".to_string()),
            ("edited".to_string(), "FAQ".to_string()),
        ]
    );
}

#[test]
fn readers_share_the_tree_across_threads() {
    let root = parse(r#"{"a":{"b":[1,2,3]}}"#).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|i| {
                let root = &root;
                scope.spawn(move || JsonReader::new(root).get_i64(&format!("a.b[{i}]")).unwrap())
            })
            .collect();
        let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![1, 2, 3]);
    });
}

#[test]
fn converts_to_serde_json_in_order() {
    let root = parse(r#"{"b":1,"a":[true,null,"x",1.5]}"#).unwrap();
    let json = serde_json::Value::from(&root);
    assert_eq!(
        serde_json::to_string(&json).unwrap(),
        r#"{"b":1,"a":[true,null,"x",1.5]}"#
    );
}
