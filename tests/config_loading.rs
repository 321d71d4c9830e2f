// tests/config_loading.rs

use std::error::Error;
use std::path::Path;

use confdag::conference::AreaFilter;
use confdag::config::{load_and_validate, load_or_default};
use confdag::errors::ConfdagError;
use confdag::fs::MockFileSystem;
use confdag::render::Palette;
use confdag_test_utils::builders::{conf, ConferenceBuilder, ConfigFileBuilder};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn no_config_file_means_builtin_defaults() -> TestResult {
    let fs = MockFileSystem::new();
    let cfg = load_or_default(&fs, None)?;

    assert_eq!(cfg.config.input, "conferences.csv");
    assert_eq!(cfg.config.output, "your_submission_opportunity.html");
    assert_eq!(cfg.layout.x_spacing, 150);
    assert_eq!(cfg.layout.y_spacing, 200);
    assert!(cfg.filter.areas.is_empty());

    let palette = Palette::from_config(&cfg);
    let areas: Vec<&str> = palette.areas().collect();
    assert_eq!(areas, vec!["AI", "ARCH", "PL", "Security", "Sys"]);
    Ok(())
}

#[test]
fn default_config_file_is_picked_up() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "Confdag.toml",
        r#"
[config]
input = "data/confs.csv"
"#,
    );

    let cfg = load_or_default(&fs, None)?;
    assert_eq!(cfg.config.input, "data/confs.csv");
    assert_eq!(cfg.config.output, "your_submission_opportunity.html");
    Ok(())
}

#[test]
fn explicit_config_overrides_sections() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file(
        "custom.toml",
        r#"
[filter]
areas = ["ML"]
exclude = ["OLD1"]

[palette]
ML = "orange"
DB = "teal"

[layout]
x_spacing = 90
font_size = 20
"#,
    );

    let cfg = load_or_default(&fs, Some(Path::new("custom.toml")))?;

    assert_eq!(cfg.filter.areas, vec!["ML"]);
    assert_eq!(cfg.filter.exclude, vec!["OLD1"]);
    assert_eq!(cfg.palette.len(), 2);
    assert_eq!(cfg.palette.get("DB").map(String::as_str), Some("teal"));
    assert_eq!(cfg.layout.x_spacing, 90);
    assert_eq!(cfg.layout.y_spacing, 200);
    assert_eq!(cfg.layout.font_size, 20);
    Ok(())
}

#[test]
fn explicit_missing_config_is_an_error() {
    let fs = MockFileSystem::new();
    match load_or_default(&fs, Some(Path::new("nope.toml"))) {
        Err(err @ ConfdagError::ConfigError(_)) => assert_eq!(err.stage(), "config"),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

fn load_str(toml: &str) -> Result<confdag::config::ConfigFile, ConfdagError> {
    let fs = MockFileSystem::new();
    fs.add_file("c.toml", toml);
    load_and_validate(&fs, "c.toml")
}

#[test]
fn empty_palette_is_rejected() {
    assert!(matches!(
        load_str("[palette]\n"),
        Err(ConfdagError::ConfigError(msg)) if msg.contains("[palette]")
    ));
}

#[test]
fn blank_colour_is_rejected() {
    assert!(matches!(
        load_str("[palette]\nAI = \" \"\n"),
        Err(ConfdagError::ConfigError(msg)) if msg.contains("AI")
    ));
}

#[test]
fn non_positive_spacing_is_rejected() {
    assert!(matches!(
        load_str("[layout]\ny_spacing = 0\n"),
        Err(ConfdagError::ConfigError(msg)) if msg.contains("y_spacing")
    ));
}

#[test]
fn filter_area_without_colour_is_rejected() {
    assert!(matches!(
        load_str("[filter]\nareas = [\"Bio\"]\n"),
        Err(ConfdagError::ConfigError(msg)) if msg.contains("Bio")
    ));
}

#[test]
fn empty_paths_are_rejected() {
    assert!(matches!(
        load_str("[config]\noutput = \"\"\n"),
        Err(ConfdagError::ConfigError(_))
    ));
}

#[test]
fn invalid_toml_is_a_config_stage_error() {
    match load_str("[layout\nx_spacing = 1") {
        Err(err @ ConfdagError::TomlError(_)) => assert_eq!(err.stage(), "config"),
        other => panic!("expected TomlError, got {other:?}"),
    }
}

#[test]
fn filter_section_selects_areas_and_drops_names() {
    let cfg = ConfigFileBuilder::new()
        .with_area_filter("Sys")
        .excluding("OSDI25")
        .build();
    let filter = AreaFilter::new(cfg.filter.areas.clone(), cfg.filter.exclude.clone());

    let confs = vec![
        conf("ICML25", 0, 10),
        ConferenceBuilder::new("OSDI25").area("Sys").window(5, 20).build(),
        ConferenceBuilder::new("SOSP25").area("Sys").window(30, 40).build(),
    ];
    let kept: Vec<String> = filter
        .apply(confs)
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(kept, vec!["SOSP25"]);
}
