use geoq_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_logger_is_rejected() {
    let _logger = Logger::builder()
        .name("geoq")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let invalid = Logger::builder()
        .name("  ")
        .init()
        .expect_err("blank name");
    assert_eq!(invalid.kind(), "InvalidConfiguration", "settings are checked before the subscriber");

    let err = Logger::builder()
        .name("geoq")
        .env_filter("debug")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error, got {err}");
}
