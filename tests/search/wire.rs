//! JSON shapes exchanged with the front-end.

use super::common::planets_record;
use cribsheet::{search, AccuracyFilter, Record, SearchRequest, SearchResponse};
use serde_json::{json, Value};

#[test]
fn test_request_round_trip_from_front_end_json() {
    let body = json!({
        "query": "行星",
        "filters": { "accuracyFilters": { "high": true, "medium": false, "low": false } }
    });
    let request: SearchRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.query, "行星");
    assert_eq!(request.filters.accuracy_filters, AccuracyFilter::new(true, false, false));
}

#[test]
fn test_request_without_filters_is_unrestricted() {
    let request: SearchRequest = serde_json::from_value(json!({ "query": "x" })).unwrap();
    assert!(request.filters.accuracy_filters.is_unrestricted());
}

#[test]
fn test_result_field_names() {
    let results = search(&[planets_record()], "行星", AccuracyFilter::ALL);
    let value = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(value["item"]["type"], "");
    assert_eq!(value["item"]["question"], "太阳系有几大行星");
    assert_eq!(value["questionMatches"], json!([6, 7]));
    assert_eq!(value["answerMatches"], json!([]));
    assert_eq!(value["optionMatches"], json!({ "8": [], "9": [] }));
    assert_eq!(value["matched"], "question: 行星");
    assert!(value["score"].as_f64().is_some());
}

#[test]
fn test_empty_spans_serialize_as_arrays() {
    let results = search(&[planets_record()], "", AccuracyFilter::ALL);
    let value = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(value["questionMatches"], json!([]));
    assert_eq!(value["answerMatches"], json!([]));
    assert_eq!(value["optionMatches"], json!({}));
}

#[test]
fn test_record_missing_lists_deserialize_empty() {
    let record: Record = serde_json::from_value(json!({ "question": "月亮会发光" })).unwrap();
    assert!(record.options.is_empty());
    assert!(record.answer.is_empty());
    assert!(record.kind.is_empty());
}

#[test]
fn test_response_envelope() {
    let ok = serde_json::to_value(SearchResponse::ok(Vec::new())).unwrap();
    assert_eq!(ok, json!({ "success": true, "results": [] }));

    let failure = serde_json::to_value(SearchResponse::failure("no records")).unwrap();
    assert_eq!(failure, json!({ "success": false, "message": "no records" }));
    let parsed: Value = failure;
    assert!(parsed.get("results").is_none());
}
