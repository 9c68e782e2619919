use std::io::Write;

use bellows::{BellowsConfig, ConfiguratorSession, Field};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

fn config_for(catalog_path: &std::path::Path) -> NamedTempFile {
    write_temp(&format!(
        "version: \"1.0\"\ncatalog:\n  type: json_file\n  path: {:?}\nunits:\n  length: \"MM\"\n",
        catalog_path.display().to_string()
    ))
}

#[test]
fn config_file_points_session_at_json_catalog() {
    let catalog = write_temp(
        r#"[
            {"part_number":"X-1","pipe_size":5,"overall_length_oal_in":9,
             "bellows_id_in":5.5,"bellows_od_in":7,"pressure_psig":150,"temperature_f":"NIL"},
            {"part_number":"X-2","pipe_size":5,"overall_length_oal_in":11,
             "bellows_id_in":5.5,"bellows_od_in":7,"pressure_psig":"300","temperature_f":"600"}
        ]"#,
    );
    let config_file = config_for(catalog.path());
    let config = BellowsConfig::from_file(config_file.path()).expect("config loads");

    let mut session = ConfiguratorSession::from_config(&config).expect("session starts");
    assert_eq!(session.catalog().len(), 2);
    assert_eq!(session.pressure_suggestions(), vec!["150", "300"]);

    session.set_text(Field::Diameter, "5");
    assert_eq!(session.length_suggestions(), vec!["228.60", "279.40"]);
}

#[test]
fn broken_catalog_falls_back_to_bundled() {
    let catalog = write_temp("{ not json");
    let config_file = config_for(catalog.path());
    let config = BellowsConfig::from_file(config_file.path()).expect("config loads");

    let session = ConfiguratorSession::from_config(&config).expect("session starts");
    assert!(session.catalog().find("BSI-0400-10-SS").is_some());
}

#[test]
fn catalog_with_only_invalid_rows_falls_back_to_bundled() {
    let catalog = write_temp(
        r#"[{"part_number":"BAD","pipe_size":4,"overall_length_oal_in":10,
             "bellows_id_in":6,"bellows_od_in":5}]"#,
    );
    let config_file = config_for(catalog.path());
    let config = BellowsConfig::from_file(config_file.path()).expect("config loads");

    let session = ConfiguratorSession::from_config(&config).expect("session starts");
    assert!(session.catalog().find("BAD").is_none());
    assert!(!session.catalog().is_empty());
}
