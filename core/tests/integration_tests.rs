use argv_extract_core::{
    ArgList, ExtractError, ExtractedValue, ExtractorKind, FlagTable, Requirement, TableError,
    extract_array, extract_bool, extract_enum, extract_number, extract_string, require_array,
    require_enum, require_number, require_string,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ---------------------------------------------------------------------------
// String extraction
// ---------------------------------------------------------------------------

#[test]
fn test_space_separated_value_for_every_single_name() {
    for name in ["--key", "-k", "--Key", "-key", "--k-e-y"] {
        for value in ["v", "value", "123", "-1", "a=b", ""] {
            let tokens = argv(&["node", "app", "x", name, value, "y"]);
            let found = extract_string(name, Requirement::Required, None, &tokens).unwrap();
            assert_eq!(found.as_deref(), Some(value), "{name} {value}");
        }
    }
}

#[test]
fn test_equals_form_yields_value_including_empty() {
    for value in ["v", "", "-x", "a=b", "\"q\""] {
        let joined = format!("--key={value}");
        let tokens = argv(&["node", "app", &joined]);
        let found = extract_string("--key", Requirement::Required, None, &tokens).unwrap();
        assert_eq!(found.as_deref(), Some(value), "{joined}");
    }
}

#[test]
fn test_flag_lookalike_value_is_skipped() {
    let tokens = argv(&["node", "app", "--key", "-c", "d", "--key", "value"]);
    let found = extract_string("--key", Requirement::Optional, None, &tokens).unwrap();
    assert_eq!(found.as_deref(), Some("value"));
}

#[test]
fn test_flag_lookalike_only_yields_absent() {
    let tokens = argv(&["--key", "--other"]);
    assert_eq!(
        extract_string("--key", Requirement::Optional, None, &tokens).unwrap(),
        None
    );
    let err = extract_string("--key", Requirement::Required, Some("The key"), &tokens).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected command line argument \"--key\", but it wasn't set. The key"
    );
}

#[test]
fn test_extractors_are_idempotent() {
    let tokens = argv(&["a", "--key", "\"1,2\"", "--key=3", "-v", "--n", "4"]);
    let snapshot = tokens.clone();

    for _ in 0..2 {
        assert_eq!(
            extract_string("--key", Requirement::Optional, None, &tokens).unwrap(),
            Some("\"1,2\"".to_string())
        );
        assert_eq!(
            extract_array("--key", Requirement::Optional, None, &tokens).unwrap(),
            Some(strings(&["1", "2", "3"]))
        );
        assert_eq!(
            extract_number("--n", Requirement::Optional, None, &tokens).unwrap(),
            Some(4.0)
        );
        assert!(extract_bool("-v", &tokens).unwrap());
    }
    assert_eq!(tokens, snapshot);
}

// ---------------------------------------------------------------------------
// Typed extraction
// ---------------------------------------------------------------------------

#[test]
fn test_number_boundaries() {
    let tokens = argv(&["--key", "-123.55"]);
    assert_eq!(require_number("--key", None, &tokens).unwrap(), -123.55);

    let tokens = argv(&["--key", "test"]);
    assert_eq!(
        extract_number("--key", Requirement::Optional, None, &tokens).unwrap(),
        None
    );
    let err = extract_number(["--key", "-k"], Requirement::Required, None, &tokens).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected command line argument matching one of \"--key\", \"-k\" to be a valid number, \
         but got: \"test\""
    );
}

#[test]
fn test_enum_scenarios() {
    let allowed = ["a", "b"];
    let tokens = argv(&["--hey=c", "b"]);
    assert_eq!(
        extract_enum(["--hey", "-h"], &allowed, Requirement::Optional, None, &tokens).unwrap(),
        None
    );

    let err = require_enum("--hey", &allowed, Some("Pick one"), &tokens).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected command line argument \"--hey\" to be one of: \"a\", \"b\", but got: \"c\". \
         Pick one"
    );

    let err = require_enum("--hey", &allowed, None, &argv(&["a", "b"])).unwrap_err();
    assert!(matches!(err, ExtractError::MissingArgument { .. }));
}

#[test]
fn test_bool_exact_match() {
    assert!(extract_bool(["--a", "-c"], &["x", "y", "-c"]).unwrap());
    assert!(!extract_bool(["--a", "-c"], &["x", "y", "c"]).unwrap());
}

// ---------------------------------------------------------------------------
// Array extraction
// ---------------------------------------------------------------------------

#[test]
fn test_array_quoted_lists_across_occurrences() {
    let tokens = argv(&["node", "app", "--key", "\"1,2,3\"", "--key", "\"a,b\""]);
    assert_eq!(
        require_array("--key", None, &tokens).unwrap(),
        strings(&["1", "2", "3", "a", "b"])
    );
}

#[test]
fn test_array_concatenates_all_names() {
    let tokens = argv(&["-i", "x.txt", "--include=\"a,b\"", "-i", "--verbose", "--include", "c"]);
    assert_eq!(
        require_array(["--include", "-i"], None, &tokens).unwrap(),
        strings(&["a", "b", "c", "x.txt"])
    );
}

// ---------------------------------------------------------------------------
// Key validation
// ---------------------------------------------------------------------------

#[test]
fn test_every_extractor_validates_keys_first() {
    let tokens = argv(&["hey", "there"]);
    let cases: Vec<(ExtractorKind, ExtractError)> = vec![
        (
            ExtractorKind::String,
            extract_string("hey", Requirement::Optional, None, &tokens).unwrap_err(),
        ),
        (
            ExtractorKind::Number,
            extract_number("hey", Requirement::Optional, None, &tokens).unwrap_err(),
        ),
        (
            ExtractorKind::Enum,
            extract_enum("hey", &["there"], Requirement::Optional, None, &tokens).unwrap_err(),
        ),
        (ExtractorKind::Bool, extract_bool("hey", &tokens).unwrap_err()),
        (
            ExtractorKind::Array,
            extract_array("hey", Requirement::Optional, None, &tokens).unwrap_err(),
        ),
        (
            ExtractorKind::String,
            require_string("--a=b", None, &tokens).unwrap_err(),
        ),
    ];

    for (kind, err) in cases {
        match err {
            ExtractError::InvalidKey { extractor, .. } => assert_eq!(extractor, kind),
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ArgList and FlagTable
// ---------------------------------------------------------------------------

#[test]
fn test_arg_list_matches_free_functions() {
    let tokens = ["app", "--name", "bob", "--age=42", "--tag", "\"a,b\""];
    let args = ArgList::new(tokens);

    assert_eq!(
        args.string("--name", Requirement::Optional, None).unwrap(),
        extract_string("--name", Requirement::Optional, None, &tokens).unwrap()
    );
    assert_eq!(args.require_number("--age", None).unwrap(), 42.0);
    assert_eq!(args.require_array("--tag", None).unwrap(), strings(&["a", "b"]));
}

#[test]
fn test_flag_table_from_file() {
    let dir = std::env::temp_dir().join(format!("argv_extract_integ_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("flags.yaml");
    std::fs::write(
        &path,
        r#"
flags:
  - id: mode
    names: ["--mode", "-m"]
    kind: { type: enum, allowed: [fast, slow] }
    requirement: required
  - id: paths
    names: ["--path"]
    kind: { type: array }
"#,
    )
    .unwrap();

    let table = FlagTable::load(&path).unwrap();
    let args = table
        .extract(&argv(&["tool", "-m", "slow", "--path", "/a", "--path=/b"]))
        .unwrap();
    assert_eq!(args.get("mode"), Some(&ExtractedValue::String("slow".into())));
    assert_eq!(args.get_list("paths").unwrap(), strings(&["/a", "/b"]).as_slice());

    let err = table.extract(&argv(&["tool", "-m", "medium"])).unwrap_err();
    assert!(matches!(
        err,
        TableError::Extract(ExtractError::InvalidEnumValue { .. })
    ));

    std::fs::remove_dir_all(&dir).ok();
}
