//! End-to-end command tests against temporary catalog and state files.

use parkside_core::{AttractionId, AttractionStatus, SortKey};
use rstest::{fixture, rstest};

use super::helpers::{ParkFiles, ids, json_output, write_utf8};
use crate::CliError;
use crate::list::{AreaFilter, ListConfig, ListingOverrides, execute_areas, execute_list};
use crate::recommend::{RecommendConfig, execute_recommend};
use crate::record::{RecordConfig, execute_record};
use crate::weights::{WeightsConfig, execute_weights};

#[fixture]
fn park() -> ParkFiles {
    ParkFiles::new()
}

fn record(park: &ParkFiles, id: u64) -> RecordConfig {
    RecordConfig {
        files: park.files.clone(),
        id: AttractionId::new(id),
        wait: None,
        status: None,
        here: false,
    }
}

fn list_json(park: &ParkFiles, overrides: ListingOverrides) -> serde_json::Value {
    let config = ListConfig {
        files: park.files.clone(),
        overrides,
    };
    let mut buffer = Vec::new();
    execute_list(&config, &mut buffer).expect("list succeeds");
    json_output(&buffer)
}

fn recommend_json(park: &ParkFiles, count: usize) -> serde_json::Value {
    let config = RecommendConfig {
        files: park.files.clone(),
        count,
    };
    let mut buffer = Vec::new();
    execute_recommend(&config, &mut buffer).expect("recommend succeeds");
    json_output(&buffer)
}

#[rstest]
fn recommend_without_state_uses_defaults(park: ParkFiles) {
    let output = recommend_json(&park, 3);
    assert_eq!(output["weights_balanced"], true);
    assert!(output["current_location"].is_null());
    assert_eq!(ids(&output["recommendations"]), vec![1, 2, 4]);
    assert!(!park.files.state.exists(), "read-only commands do not save");
}

#[rstest]
fn recommend_honours_count(park: ParkFiles) {
    let output = recommend_json(&park, 1);
    assert_eq!(ids(&output["recommendations"]), vec![1]);
}

#[rstest]
fn record_saves_state_and_reports(park: ParkFiles) {
    let config = RecordConfig {
        wait: Some("120".to_owned()),
        ..record(&park, 1)
    };
    let mut buffer = Vec::new();
    execute_record(&config, &mut buffer).expect("record succeeds");
    assert!(park.files.state.exists());

    let output = json_output(&buffer);
    let coaster = output["recommendations"]
        .as_array()
        .expect("recommendations")
        .iter()
        .find(|entry| entry["id"] == 1)
        .expect("coaster still recommended");
    assert_eq!(coaster["waitTime"], 120);

    let reread = recommend_json(&park, 4);
    let waits: Vec<_> = reread["recommendations"]
        .as_array()
        .expect("recommendations")
        .iter()
        .filter(|entry| entry["id"] == 1)
        .map(|entry| entry["waitTime"].clone())
        .collect();
    assert_eq!(waits, vec![serde_json::json!(120)]);
}

#[rstest]
fn record_here_moves_the_visitor(park: ParkFiles) {
    let config = RecordConfig {
        here: true,
        ..record(&park, 2)
    };
    let mut buffer = Vec::new();
    execute_record(&config, &mut buffer).expect("record succeeds");

    let output = json_output(&buffer);
    assert_eq!(output["current_location"]["id"], 2);
    assert_eq!(output["current_location"]["name"], "Jungle Cruise");
    assert!(!ids(&output["recommendations"]).contains(&2));
    let located = output["recommendations"]
        .as_array()
        .expect("recommendations")
        .iter()
        .filter(|entry| entry["id"] != 4)
        .all(|entry| entry["distance"].is_f64());
    assert!(located);
}

#[rstest]
fn record_rejects_unknown_attraction(park: ParkFiles) {
    let mut buffer = Vec::new();
    let err = execute_record(&record(&park, 99), &mut buffer).expect_err("unknown id");
    assert!(matches!(err, CliError::Attraction(_)), "found {err:?}");
    assert!(buffer.is_empty());
    assert!(!park.files.state.exists());
}

#[rstest]
fn weights_are_saved_and_flagged(park: ParkFiles) {
    let config = WeightsConfig {
        files: park.files.clone(),
        priority: None,
        wait_time: None,
        distance: Some(0.3),
    };
    let mut buffer = Vec::new();
    execute_weights(&config, &mut buffer).expect("weights succeed");
    let output = json_output(&buffer);
    assert_eq!(output["weights_balanced"], false);
    assert_eq!(output["weights"]["distance"], 0.3);
    assert_eq!(output["weights"]["priority"], 0.5);
    assert_eq!(ids(&output["recommendations"]).len(), 3);

    let reread = recommend_json(&park, 3);
    assert_eq!(reread["weights_balanced"], false);
}

#[rstest]
fn list_filters_and_sorts(park: ParkFiles) {
    let visit = RecordConfig {
        status: Some(AttractionStatus::Visited),
        ..record(&park, 1)
    };
    execute_record(&visit, &mut Vec::new()).expect("record succeeds");

    let output = list_json(
        &park,
        ListingOverrides {
            hide_visited: Some(true),
            sort: Some(SortKey::Name),
            ..ListingOverrides::default()
        },
    );
    assert_eq!(ids(&output["attractions"]), vec![3, 2, 4]);
    assert_eq!(output["attractions"][2]["notes"], "twice daily");
    assert_eq!(output["listing"]["hideVisited"], true);
    assert_eq!(output["listing"]["sort"], "name");
}

#[rstest]
fn list_remembers_preferences_between_runs(park: ParkFiles) {
    let unchanged = list_json(&park, ListingOverrides::default());
    assert_eq!(ids(&unchanged["attractions"]), vec![1, 2, 4, 3]);
    assert!(!park.files.state.exists(), "unchanged preferences are not saved");

    list_json(
        &park,
        ListingOverrides {
            area: Some(AreaFilter::Only("Fantasy".to_owned())),
            sort: Some(SortKey::WaitTime),
            ..ListingOverrides::default()
        },
    );
    assert!(park.files.state.exists());

    let remembered = list_json(&park, ListingOverrides::default());
    assert_eq!(ids(&remembered["attractions"]), vec![3]);
    assert_eq!(remembered["listing"]["sort"], "wait-time");

    let cleared = list_json(
        &park,
        ListingOverrides {
            area: Some(AreaFilter::All),
            ..ListingOverrides::default()
        },
    );
    assert_eq!(cleared["listing"]["area"], serde_json::Value::Null);
    assert_eq!(ids(&cleared["attractions"]).len(), 4);
}

#[rstest]
fn areas_are_sorted(park: ParkFiles) {
    let mut buffer = Vec::new();
    execute_areas(&park.files, &mut buffer).expect("areas succeed");
    let output = json_output(&buffer);
    assert_eq!(
        output["areas"],
        serde_json::json!(["Adventure", "Fantasy", "Plaza", "Tomorrow"])
    );
}

#[rstest]
fn empty_catalog_is_rejected(park: ParkFiles) {
    write_utf8(&park.files.catalog, b"[]");
    let mut buffer = Vec::new();
    let err = execute_areas(&park.files, &mut buffer).expect_err("empty catalog");
    assert!(matches!(err, CliError::Store(_)), "found {err:?}");
}
