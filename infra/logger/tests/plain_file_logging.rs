use geoq_logger::{Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_without_json_writes_text_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("geoq")
        .console(false)
        .path(&log_dir)
        .rotation(Rotation::NEVER)
        .env_filter("info")
        .init()?;

    tracing::warn!(distance_m = -6000, "Large negative buffer");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = log_dir.join("geoq.log");
    let contents = fs::read_to_string(&log_file)?;
    let first = contents.lines().next().expect("at least one line");

    assert!(serde_json::from_str::<serde_json::Value>(first).is_err(), "expected plain text: {first}");
    assert!(first.contains("WARN"));
    assert!(first.contains("Large negative buffer"));
    assert!(first.contains("distance_m=-6000"));

    Ok(())
}
