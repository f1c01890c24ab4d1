mod common;

use common::*;
use handparse_engine::HandRecord;
use handparse_engine::logging::init_test_logging;
use serial_test::serial;
use tracing::Level;

#[test]
#[serial]
fn each_body_stage_logs_once() {
    let logs = init_test_logging();
    HandRecord::new(STARS_CASH_SHOWDOWN, stars()).unwrap();

    let stages: Vec<String> = logs
        .entries()
        .iter()
        .filter(|e| e.level == Level::DEBUG && e.message == "stage resolved")
        .filter_map(|e| e.field("stage").map(str::to_string))
        .collect();
    assert_eq!(
        stages,
        ["table", "seats", "ante", "preflop", "streets", "board", "pot"]
    );

    let done = logs
        .entries()
        .into_iter()
        .find(|e| e.message == "hand resolved")
        .unwrap();
    assert_eq!(done.field("room"), Some("PokerStars"));
}

#[test]
#[serial]
fn stage_fields_carry_resolved_values() {
    let logs = init_test_logging();
    HandRecord::new(PKR_CASH_SHOWDOWN, pkr()).unwrap();

    let entries = logs.entries();
    let seats = entries
        .iter()
        .find(|e| e.field("stage") == Some("seats"))
        .unwrap();
    assert_eq!(seats.field("max_seats"), Some("6"));
    assert_eq!(seats.field("button"), Some("Capricorn"));
}

#[test]
#[serial]
fn failed_body_warns() {
    let logs = init_test_logging();
    let text = STARS_CASH_SHOWDOWN.replace("Total pot $8.24 | Rake $0.19\n", "");
    assert!(HandRecord::new(&text, stars()).is_err());

    let warnings: Vec<_> = logs
        .entries()
        .into_iter()
        .filter(|e| e.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "body resolution failed");
    assert!(warnings[0].field("error").unwrap().contains("pot"));
}

#[test]
#[serial]
fn failed_header_warns() {
    let logs = init_test_logging();
    assert!(HandRecord::new(PKR_CASH_SHOWDOWN, stars()).is_err());
    assert!(
        logs.entries()
            .iter()
            .any(|e| e.level == Level::WARN && e.message == "header resolution failed")
    );
}
