use geoq_logger::{Logger, parse_level};
use tracing::Level;

#[test]
fn console_logger_applies_crate_directives() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::builder()
        .name("geoq")
        .console(true)
        .level(parse_level("warn")?)
        .env_filter("warn,geoq_pipeline=debug")
        .init()?;

    assert!(logger.guard().is_none(), "console output needs no file guard");
    assert!(tracing::enabled!(target: "geoq_pipeline", Level::DEBUG));
    assert!(!tracing::enabled!(target: "geoq_relations", Level::INFO));
    assert!(tracing::enabled!(target: "geoq_relations", Level::WARN));

    Ok(())
}
