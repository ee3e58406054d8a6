use std::io::Write;

use simpair::{ConfigLoadError, SearchConfig, find_similar_pairs, load_config};

#[test]
fn loads_config_from_disk_and_runs_a_search() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "version: \"1.0\"\nsearch:\n  keybits: 0\n  max_bit_difference: 1\n"
    )
    .expect("write config");

    let cfg = load_config(file.path()).expect("load");
    let search = cfg.search_config();
    assert_eq!(search, SearchConfig::exhaustive(1));

    let pairs = find_similar_pairs(&[0x0, 0x1, u64::MAX], &search).expect("search");
    assert_eq!(pairs, vec![(0, 1)]);
}

#[test]
fn missing_file_reports_io_error() {
    let err = load_config("/nonexistent/simpair.yaml").unwrap_err();
    assert!(matches!(err, ConfigLoadError::FileRead(_)));
}

#[test]
fn malformed_yaml_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "search: [not, a, map").expect("write config");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::YamlParse(_)));
}

#[test]
fn out_of_range_parameters_fail_validation_at_load_time() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "version: \"1.0\"\nsearch:\n  max_bit_difference: 80\n"
    )
    .expect("write config");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(_)));
}
