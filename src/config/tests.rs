// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::io::Write;

use crate::ast::Kind;

const SAMPLE: &str = r#"
# sample configuration
glossary:
    title: "example glossary"
    GlossDiv:
        title: "S"
        GlossList:
            GlossEntry:
                ID: "SGML"
                SortAs: "SGML"
                Abbrev: "ISO 8879:1986"
                GlossDef:
                    para: "A meta-markup language"
                    GlossSeeAlso: ["GML", "XML"]
    version: 1.2
    revision: 7
    published: TRUE
server:
	host: "localhost"
	port: 8080
	weights: [0.25, 0.75]
	max_connections: 100
"#;

#[test]
fn test_config_from_string() {
    let config = YConf::from_str(SAMPLE);

    let title: String = config.get("glossary.title").expect("Failed to get glossary.title");
    assert_eq!(title, "example glossary");

    let abbrev: String = config
        .get("glossary.GlossDiv.GlossList.GlossEntry.Abbrev")
        .expect("Failed to get Abbrev");
    assert_eq!(abbrev, "ISO 8879:1986");

    let see_also: Vec<String> = config
        .get("glossary.GlossDiv.GlossList.GlossEntry.GlossDef.GlossSeeAlso")
        .expect("Failed to get GlossSeeAlso");
    assert_eq!(see_also, vec!["GML", "XML"]);

    let version: f64 = config.get("glossary.version").expect("Failed to get version");
    assert_eq!(version, 1.2);

    let published: bool = config.get("glossary.published").expect("Failed to get published");
    assert!(published);

    let host: String = config.get("server.host").expect("Failed to get host");
    assert_eq!(host, "localhost");

    let port: u16 = config.get("server.port").expect("Failed to get port");
    assert_eq!(port, 8080);

    let weights: Vec<f32> = config.get("server.weights").expect("Failed to get weights");
    assert_eq!(weights, vec![0.25, 0.75]);

    assert!(config.has("server.port"));
    assert!(!config.has("server"));
    assert!(!config.has("glossary.GlossDiv"));
}

#[test]
fn test_exact_lookup_and_iteration() {
    let config = YConf::from_str("a:\n  b: 1\n  c: 2\n");

    assert_eq!(config.get_value("a.b"), Some(&Value::Integer(vec![1])));
    assert_eq!(config.get_value("a"), None);
    assert_eq!(config.len(), 2);

    let pairs: Vec<(&str, &Value)> = config.iter().collect();
    assert_eq!(pairs[0], ("a.b", &Value::Integer(vec![1])));
    assert_eq!(pairs[1], ("a.c", &Value::Integer(vec![2])));

    let mut count = 0;
    for (path, value) in &config {
        assert!(path.starts_with("a."));
        assert_eq!(value.kind(), Kind::Integer);
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_order_preservation() {
    let config = YConf::from_str("zeta: 1\nalpha: 2\nmid:\n  beta: 3\n");
    let keys: Vec<&str> = config.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid.beta"]);
}

#[test]
fn test_sorted_option() {
    let config = ParseOptions::new()
        .sorted(true)
        .parse_str("zeta: 1\nalpha: 2\nmid:\n  beta: 3\n", LogSink)
        .expect("Failed to parse config");
    let keys: Vec<&str> = config.keys().collect();
    assert_eq!(keys, vec!["alpha", "mid.beta", "zeta"]);
}

#[test]
fn test_strict_returns_first_diagnostic() {
    let err = YConf::from_str_strict("ok: 1\nbroken line\nlist: [1, \"a\"]\n").unwrap_err();
    assert!(matches!(err, YConfError::MissingSeparator { line: 2, .. }));

    let config = YConf::from_str_strict("ok: 1\n").expect("Clean config should parse");
    assert_eq!(config.get::<i64>("ok").unwrap(), 1);
}

#[test]
fn test_lenient_parse_collects_diagnostics() {
    let mut diags = Vec::new();
    let config = YConf::from_str_with_sink(
        "good: 1\n \tmixed: 2\nbad: ???\nlist: [1, 2.5]\n",
        |d: YConfError| diags.push(d),
    );

    assert_eq!(config.len(), 2);
    assert_eq!(config.get_value("list"), Some(&Value::Integer(vec![1])));
    let codes: Vec<Option<u32>> = diags.iter().map(YConfError::code).collect();
    assert_eq!(codes, vec![Some(101), Some(201), Some(202)]);
}

#[test]
fn test_get_optional_and_default() {
    let config = YConf::from_str("retries: 3\n");

    assert_eq!(config.get_optional::<i64>("retries").unwrap(), Some(3));
    assert_eq!(config.get_optional::<i64>("timeout").unwrap(), None);
    assert!(config.get_optional::<String>("retries").is_err());

    assert_eq!(config.get_or("timeout", 30i64), 30);
    assert_eq!(config.get_or("retries", 30i64), 3);
}

#[test]
fn test_type_error_points_at_line() {
    let config = YConf::from_str("\nname: \"x\"\n");
    let err = config.get::<i64>("name").unwrap_err();

    match err {
        YConfError::TypeError { line, code, message, .. } => {
            assert_eq!(line, 2);
            assert_eq!(code, Some(402));
            assert!(message.contains("name"));
        }
        other => panic!("Expected TypeError, got {:?}", other),
    }
}

#[test]
fn test_scalar_request_on_array_fails() {
    let config = YConf::from_str("ports: [80, 443]\n");
    let err = config.get::<i64>("ports").unwrap_err();
    assert_eq!(err.code(), Some(404));

    let ports: Vec<u16> = config.get("ports").unwrap();
    assert_eq!(ports, vec![80, 443]);
}

#[test]
fn test_integer_range_checks() {
    let config = YConf::from_str("big: 70000\nneg: -1\n");
    assert!(config.get::<u16>("big").is_err());
    assert!(config.get::<u32>("neg").is_err());
    assert_eq!(config.get::<i32>("neg").unwrap(), -1);
    assert_eq!(config.get::<f64>("big").unwrap(), 70000.0);
}

#[test]
fn test_quoted_boolean_hint() {
    let config = YConf::from_str("flag: \"TRUE\"\n");
    let err = config.get::<bool>("flag").unwrap_err();
    assert_eq!(err.code(), Some(403));
}

#[test]
fn test_flexible_key_access() {
    let config = YConf::from_str("monitor-media: TRUE\nserver_opts:\n  max-conn: 4\n");

    let media: bool = config.get("monitor_media").expect("kebab key via snake path");
    assert!(media);
    let conn: i64 = config.get("server-opts.max_conn").expect("mixed spellings");
    assert_eq!(conn, 4);
    assert_eq!(config.get_value("monitor_media"), None);
}

#[test]
fn test_get_keys() {
    let config = YConf::from_str(SAMPLE);

    assert_eq!(config.get_keys(""), vec!["glossary", "server"]);
    assert_eq!(
        config.get_keys("glossary"),
        vec!["title", "GlossDiv", "version", "revision", "published"]
    );
    assert_eq!(config.get_keys("server.port"), Vec::<String>::new());
}

#[test]
fn test_entry_keeps_raw_and_line() {
    let config = YConf::from_str("a: \"quoted\"\nb: [1,2]\n");

    let a = config.entry("a").unwrap();
    assert_eq!(a.raw, "quoted");
    assert_eq!(a.line, 1);

    let b = config.entry("b").unwrap();
    assert_eq!(b.raw, "[1,2]");
    assert_eq!(b.value.to_string(), "<I>[1, 2]");
}

#[test]
fn test_from_lines_and_reader_agree() {
    let lines = ["a:", "  b: 1"];
    let from_lines = YConf::from_lines(lines);
    let from_reader = YConf::from_reader("a:\n  b: 1\n".as_bytes());
    assert_eq!(from_lines, from_reader);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "db:\n  user: \"admin\"\n  pool: 8\n").expect("Failed to write temp file");

    let config = YConf::from_file(file.path());
    assert_eq!(config.get::<String>("db.user").unwrap(), "admin");
    assert_eq!(config.get::<usize>("db.pool").unwrap(), 8);
}

#[test]
fn test_missing_file_yields_empty_config() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nope.conf");

    let mut diags = Vec::new();
    let config = YConf::from_file_with_sink(&path, |d: YConfError| diags.push(d));

    assert!(config.is_empty());
    assert_eq!(diags.len(), 1);
    assert!(matches!(diags[0], YConfError::FileError { code: Some(301), .. }));

    assert!(YConf::from_file_strict(&path).is_err());
}
