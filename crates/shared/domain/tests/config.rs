use geoq_domain::config::{AppConfig, LoggingConfig, PipelineConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let pipeline = PipelineConfig::default();
    assert!((pipeline.confidence_threshold - 0.6).abs() < f64::EPSILON);
    assert!(!pipeline.strict);
    assert!(pipeline.validate().is_ok());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn app_config_deserializes_partial_input() {
    let raw = json!({
        "pipeline": { "strict": true },
        "logging": { "directory": "/tmp/geoq", "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.pipeline.strict);
    assert!((cfg.pipeline.confidence_threshold - 0.6).abs() < f64::EPSILON);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/geoq")));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn threshold_outside_unit_interval_is_invalid() {
    let pipeline = PipelineConfig { confidence_threshold: 1.5, strict: false };
    let reason = pipeline.validate().expect_err("out of range");
    assert!(reason.contains("confidence_threshold"));
}

#[test]
fn clones_share_until_mutated() {
    let base = AppConfig::default();
    let mut tuned = base.clone();
    tuned.pipeline.strict = true;

    assert!(!base.pipeline.strict);
    assert!(tuned.pipeline.strict);
}
