//! Tests for the config module

use super::loader::{levenshtein, load_with_warnings, parse_with_warnings, suggest_key};
use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.corpus.root, None);
    assert_eq!(config.corpus.extension, "xml");
    assert_eq!(config.report.sample_cap, 5);
    assert_eq!(config.report.group_cap, 10);
    assert_eq!(config.report.detail_cap, 100);
    assert_eq!(config.layout.period_threshold, 1000);
    assert_eq!(config.layout.output, None);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[corpus]
root = "/data/xml-p5"
canons = "/data/xml-p5/canons.json"

[report]
output = "out/report.json"
sample_cap = 3

[provenance]
error_preview = 20

[layout]
period_threshold = 500

[output]
color = "never"
"#;

    let (config, warnings) = parse_with_warnings(toml, Path::new("canonsort.toml")).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.corpus.root, Some(PathBuf::from("/data/xml-p5")));
    assert_eq!(config.report.output, PathBuf::from("out/report.json"));
    assert_eq!(config.report.sample_cap, 3);
    assert_eq!(config.report.group_cap, 10);
    assert_eq!(config.provenance.error_preview, 20);
    assert_eq!(config.layout.period_threshold, 500);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let toml = r#"
[report]
sample_cpa = 3
"#;
    let (config, warnings) = parse_with_warnings(toml, Path::new("canonsort.toml")).unwrap();

    assert_eq!(config.report.sample_cap, 5);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "sample_cpa");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("sample_cap"));
    assert!(warnings[0].to_string().contains("did you mean 'sample_cap'"));
}

#[test]
fn test_invalid_toml_is_error() {
    let err = parse_with_warnings("[report\nsample_cap = ", Path::new("bad.toml")).unwrap_err();
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn test_wrong_type_is_error() {
    let err = parse_with_warnings("[report]\nsample_cap = \"five\"", Path::new("bad.toml"));
    assert!(err.is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("canonsort.toml");
    fs::write(&path, "[corpus]\nextension = \"XML\"\n").unwrap();

    let (config, _) = load_with_warnings(&path).unwrap();
    assert_eq!(config.corpus.extension, "XML");
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_discover_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let result = discover(Some(&dir.path().join("missing.toml")));
    assert!(result.is_err());
}

#[test]
fn test_discover_explicit_records_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[layout]\nperiod_threshold = 7\n").unwrap();

    let loaded = discover(Some(&path)).unwrap();
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.config.layout.period_threshold, 7);
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("CANONSORT_ROOT", "/corpus"),
            ("CANONSORT_CANONS", "/corpus/canons.json"),
            ("CANONSORT_OUTPUT", "report.json"),
            ("CANONSORT_SAMPLE_CAP", "9"),
        ]),
    );

    assert_eq!(config.corpus.root, Some(PathBuf::from("/corpus")));
    assert_eq!(config.corpus.canons, Some(PathBuf::from("/corpus/canons.json")));
    assert_eq!(config.report.output, PathBuf::from("report.json"));
    assert_eq!(config.report.sample_cap, 9);
}

#[test]
fn test_env_override_ignores_bad_number_and_empty_values() {
    let config = with_env_overrides_from(
        Config::default(),
        env(&[("CANONSORT_SAMPLE_CAP", "many"), ("CANONSORT_ROOT", "")]),
    );

    assert_eq!(config.report.sample_cap, 5);
    assert_eq!(config.corpus.root, None);
}

#[test]
fn test_options_from_config() {
    let mut config = Config::default();
    config.report.detail_cap = 1;
    config.corpus.extension = ".tei".to_string();
    config.layout.period_threshold = 2;

    assert_eq!(config.report_options().detail_cap, 1);
    assert_eq!(config.analyze_options().extension, "tei");
    assert_eq!(config.layout_options().period_threshold, 2);
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("root", "root"), 0);
    assert_eq!(levenshtein("rot", "root"), 1);
    assert_eq!(levenshtein("canosn", "canons"), 2);
    assert_eq!(suggest_key("zzzzzzzz"), None);
}
