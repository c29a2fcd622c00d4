use log::LevelFilter;
use naval_duel::{init_logging, parse_level, DEFAULT_LEVEL};

#[test]
fn test_parse_level_names() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" warn ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
}

#[test]
fn test_parse_level_fallback() {
    assert_eq!(DEFAULT_LEVEL, LevelFilter::Info);
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    assert_eq!(parse_level(Some("")), LevelFilter::Info);
}

#[test]
fn test_init_logging_twice() {
    init_logging();
    init_logging();
}
