//! The headless host entry point driven by a config file.

use std::io::Write;

use voxel_world::{run, ConfigError, EngineConfig, GeneratorKind};

#[test]
fn runs_with_a_config_file_and_rejects_a_missing_one() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "generator": {{ "kind": "flat", "height": 3 }}, "render_distance": 1 }}"#
    )
    .unwrap();

    assert!(run(file.path().to_str()).is_ok());

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(run(missing.to_str()).is_err());
}

#[test]
fn config_written_by_serde_reads_back() {
    let config = EngineConfig {
        seed: 17,
        generator: GeneratorKind::Flat { height: 9 },
        ..EngineConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.json");
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(EngineConfig::from_path(&path).unwrap(), config);
    assert!(matches!(
        EngineConfig::from_json_str("[1, 2]"),
        Err(ConfigError::Parse(_))
    ));
}
