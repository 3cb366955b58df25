use typed_ini::{
    ini, parse, read, stringify, stringify_with_eol, Error, IniValue, LineEnding, ParseOptions,
    ReadOptions, WhitespacePolicy,
};

#[test]
fn test_comments_and_blanks_yield_empty_document() {
    let doc = parse("; first\n\n; second\n   \n;third").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_basic_document() {
    let doc = parse("debug=true\nretries=3\nname=server-1").unwrap();
    assert_eq!(doc.get("debug"), Some(&IniValue::Bool(true)));
    assert_eq!(doc.get("retries"), Some(&IniValue::Number(3.0)));
    assert_eq!(
        doc.get("name"),
        Some(&IniValue::String("server-1".to_string()))
    );
}

#[test]
fn test_keys_keep_insertion_order() {
    let doc = parse("zebra=1\napple=2\nmango=3").unwrap();
    let keys: Vec<_> = doc.keys().cloned().collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_duplicate_key_promotion_coerces_each_element() {
    let doc = parse("a=1\na=2\na=x").unwrap();
    assert_eq!(
        doc.get("a"),
        Some(&IniValue::Array(vec![
            IniValue::Number(1.0),
            IniValue::Number(2.0),
            IniValue::String("x".to_string()),
        ]))
    );
}

#[test]
fn test_duplicate_key_promotion_inside_section() {
    let doc = parse("[servers]\nhost=alpha\nhost=beta").unwrap();
    let servers = doc.get("servers").and_then(|v| v.as_section()).unwrap();
    assert_eq!(
        servers.get("host"),
        Some(&IniValue::Array(vec![
            IniValue::String("alpha".to_string()),
            IniValue::String("beta".to_string()),
        ]))
    );
}

#[test]
fn test_numeric_coercions() {
    let doc = parse("hex=0x1F\nbin=0b101\noct=0o17\npi=3.14\nempty=").unwrap();
    assert_eq!(doc.get("hex"), Some(&IniValue::Number(31.0)));
    assert_eq!(doc.get("bin"), Some(&IniValue::Number(5.0)));
    assert_eq!(doc.get("oct"), Some(&IniValue::Number(15.0)));
    assert_eq!(doc.get("pi"), Some(&IniValue::Number(3.14)));
    // Documented quirk: an empty value is the number zero.
    assert_eq!(doc.get("empty"), Some(&IniValue::Number(0.0)));
}

#[test]
fn test_bracket_array_elements_are_not_coerced() {
    let doc = parse("tags=[a, b, c]\nnums=[1, 2]").unwrap();
    assert_eq!(
        doc.get("tags"),
        Some(&IniValue::Array(vec![
            IniValue::String("a".to_string()),
            IniValue::String("b".to_string()),
            IniValue::String("c".to_string()),
        ]))
    );
    assert_eq!(
        doc.get("nums"),
        Some(&IniValue::Array(vec![
            IniValue::String("1".to_string()),
            IniValue::String("2".to_string()),
        ]))
    );
}

#[test]
fn test_section_round_trip() {
    let doc = parse("[db]\nhost=localhost\nport=5432").unwrap();
    let db = doc.get("db").and_then(|v| v.as_section()).unwrap();
    assert_eq!(db.get("host"), Some(&IniValue::String("localhost".to_string())));
    assert_eq!(db.get("port"), Some(&IniValue::Number(5432.0)));

    let text = stringify(&doc).unwrap();
    assert_eq!(text, "\n[db]\nhost = localhost\nport = 5432\n");

    // The second trip is stable.
    let again = parse(&text).unwrap();
    assert_eq!(again, doc);
}

#[test]
fn test_array_does_not_regain_bracket_syntax() {
    let doc = parse("tags=[a, b]").unwrap();
    let text = stringify(&doc).unwrap();
    assert_eq!(text, "tags = a,b\n");
    // Re-parsing yields a plain string, not an array.
    let again = parse(&text).unwrap();
    assert_eq!(again.get("tags"), Some(&IniValue::String("a,b".to_string())));
}

#[test]
fn test_missing_separator_is_syntax_error() {
    let err = parse("ok=1\nthis line has no separator").unwrap_err();
    match err {
        Error::Syntax { line, msg } => {
            assert_eq!(line, 2);
            assert!(msg.contains("key-value pair"));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_numeric_key_is_syntax_error() {
    let err = parse("42=answer").unwrap_err();
    match err {
        Error::Syntax { line, msg } => {
            assert_eq!(line, 1);
            assert!(msg.contains("number"));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_numeric_section_name_is_syntax_error() {
    let err = parse("[123]").unwrap_err();
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_error_line_numbers_survive_comment_stripping() {
    // The bad line is line 5 of the original input even though three
    // earlier lines are dropped during normalization.
    let input = "; one\n\n; three\ngood=1\nbad line";
    let err = parse(input).unwrap_err();
    assert_eq!(err.line(), Some(5));
}

#[test]
fn test_whitespace_policy_error_cites_line() {
    let err = parse("ok=1\nmy key=1").unwrap_err();
    match err {
        Error::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_whitespace_policy_ignore_drops_assignment() {
    let source = read("my key=1\nok=2", ReadOptions::new());
    let doc = source
        .parse(&ParseOptions::new().with_whitespace_policy(WhitespacePolicy::Ignore))
        .unwrap();
    assert!(doc.get("my key").is_none());
    assert_eq!(doc.get("ok"), Some(&IniValue::Number(2.0)));
}

#[test]
fn test_whitespace_policy_allow_assigns_normally() {
    let source = read("my key=1", ReadOptions::new());
    let doc = source
        .parse(&ParseOptions::new().with_whitespace_policy(WhitespacePolicy::Allow))
        .unwrap();
    assert_eq!(doc.get("my key"), Some(&IniValue::Number(1.0)));
}

#[test]
fn test_ignored_section_header_keeps_previous_section_active() {
    let source = read("[db]\nhost=localhost\n[bad name]\nport=5432", ReadOptions::new());
    let doc = source
        .parse(&ParseOptions::new().with_whitespace_policy(WhitespacePolicy::Ignore))
        .unwrap();
    let db = doc.get("db").and_then(|v| v.as_section()).unwrap();
    // port landed in [db] because the bad header was dropped.
    assert_eq!(db.get("port"), Some(&IniValue::Number(5432.0)));
    assert!(doc.get("bad name").is_none());
}

#[test]
fn test_second_equals_is_dropped() {
    // Only the first two '='-separated tokens survive.
    let doc = parse("conn=host=localhost").unwrap();
    assert_eq!(doc.get("conn"), Some(&IniValue::String("host".to_string())));
}

#[test]
fn test_custom_comment_markers() {
    let source = read(
        "a=1 # note\nb=2 ; also a comment\n# full line",
        ReadOptions::new().with_comment_markers([";", "#"]),
    );
    let doc = source.parse(&ParseOptions::new()).unwrap();
    assert_eq!(doc.get("a"), Some(&IniValue::Number(1.0)));
    assert_eq!(doc.get("b"), Some(&IniValue::Number(2.0)));
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_default_marker_is_semicolon_only() {
    // '#' is not a marker by default, so it stays in the value.
    let doc = parse("a=1 # not a comment").unwrap();
    assert_eq!(
        doc.get("a"),
        Some(&IniValue::String("1 # not a comment".to_string()))
    );
}

#[test]
fn test_crlf_detection_and_reformat() {
    let source = read("a=1\r\n[s]\r\nb=2", ReadOptions::new());
    assert_eq!(source.line_ending(), LineEnding::CrLf);
    let text = source.reformat(&ParseOptions::new()).unwrap();
    assert_eq!(text, "a = 1\r\n\r\n[s]\r\nb = 2\r\n");
}

#[test]
fn test_alias_rewriting_recurses_into_sections() {
    let source = read("old=1\n[nested]\nold=2", ReadOptions::new());
    let doc = source
        .parse(&ParseOptions::new().with_alias("old", "new"))
        .unwrap();
    assert_eq!(doc.get("old"), None);
    assert_eq!(doc.get("new"), Some(&IniValue::Number(1.0)));
    let nested = doc.get("nested").and_then(|v| v.as_section()).unwrap();
    assert_eq!(nested.get("new"), Some(&IniValue::Number(2.0)));
    assert!(nested.get("old").is_none());
}

#[test]
fn test_alias_renames_section_names_too() {
    let source = read("[db]\nhost=localhost", ReadOptions::new());
    let doc = source
        .parse(&ParseOptions::new().with_alias("db", "database"))
        .unwrap();
    assert!(doc.get("db").is_none());
    let database = doc.get("database").and_then(|v| v.as_section()).unwrap();
    assert_eq!(
        database.get("host"),
        Some(&IniValue::String("localhost".to_string()))
    );
}

#[test]
fn test_stringify_built_document() {
    let doc = ini! {
        "debug": true,
        "ratio": 0.5,
        "db": {
            "host": "localhost",
            "port": 5432,
        },
    };
    assert_eq!(
        stringify_with_eol(&doc, LineEnding::Lf).unwrap(),
        "debug = true\nratio = 0.5\n\n[db]\nhost = localhost\nport = 5432\n"
    );
}

#[test]
fn test_file_round_trip() {
    let path = std::env::temp_dir().join(format!("typed_ini_it_{}.ini", std::process::id()));
    let doc = ini! {
        "debug": true,
        "db": { "host": "localhost" },
    };

    typed_ini::write_file(&path, &doc, LineEnding::Lf).unwrap();
    let loaded = typed_ini::parse_file(&path).unwrap();
    assert_eq!(loaded, doc);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_parse_file_missing_path() {
    let err = typed_ini::parse_file("/no/such/file.ini").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn test_serde_interop() {
    let doc = parse("debug=true\ncount=3\n[db]\nhost=localhost").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["debug"], serde_json::json!(true));
    assert_eq!(json["count"], serde_json::json!(3.0));
    assert_eq!(json["db"]["host"], serde_json::json!("localhost"));

    let back: typed_ini::IniMap = serde_json::from_value(json).unwrap();
    assert_eq!(back.get("debug"), Some(&IniValue::Bool(true)));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_async_file_round_trip() {
    let path = std::env::temp_dir().join(format!("typed_ini_async_{}.ini", std::process::id()));
    let doc = ini! { "a": 1, "s": { "b": "two" } };

    typed_ini::write_file_async(&path, &doc, LineEnding::Lf)
        .await
        .unwrap();
    let loaded = typed_ini::parse_file_async(&path).await.unwrap();
    assert_eq!(loaded, doc);

    tokio::fs::remove_file(&path).await.unwrap();
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_async_missing_path_is_not_found() {
    let err = typed_ini::parse_file_async("/no/such/file.ini")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
