//! Focused unit tests covering CLI configuration resolution.

use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use parkside_core::{AttractionId, AttractionStatus, ListingQuery, SortKey, WeightProfile};
use rstest::rstest;
use serde_json::json;

use super::helpers::ParkFiles;
use crate::CliError;
use crate::files::{ARG_CATALOG, DEFAULT_STATE_FILE, SessionFiles};
use crate::list::{AreaFilter, ListArgs, ListConfig, ListingOverrides};
use crate::recommend::{
    ENV_RECOMMEND_CATALOG, RecommendArgs, RecommendConfig, config_from_layers_for_test,
};
use crate::record::{ARG_RECORD_ID, ENV_RECORD_ID, RecordArgs, RecordConfig};
use crate::weights::{ARG_WAIT_TIME, WeightsArgs, WeightsConfig};

#[rstest]
fn converting_without_catalog_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_RECOMMEND_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn state_and_count_have_defaults() {
    let args = RecommendArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.files.state, Utf8PathBuf::from(DEFAULT_STATE_FILE));
    assert_eq!(config.count, parkside_core::DEFAULT_RECOMMENDATIONS);
}

#[rstest]
fn record_requires_an_id() {
    let args = RecordArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        ..RecordArgs::default()
    };
    let err = RecordConfig::try_from(args).expect_err("missing id should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECORD_ID);
            assert_eq!(env, ENV_RECORD_ID);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case("visited", AttractionStatus::Visited)]
#[case("Suspended", AttractionStatus::Suspended)]
#[case("not_visited", AttractionStatus::NotVisited)]
fn record_parses_status(#[case] input: &str, #[case] expected: AttractionStatus) {
    let args = RecordArgs {
        id: Some(3),
        catalog: Some(Utf8PathBuf::from("park.json")),
        status: Some(input.to_owned()),
        ..RecordArgs::default()
    };
    let config = RecordConfig::try_from(args).expect("config should build");
    assert_eq!(config.id, AttractionId::new(3));
    assert_eq!(config.status, Some(expected));
}

#[rstest]
fn record_rejects_unknown_status() {
    let args = RecordArgs {
        id: Some(3),
        catalog: Some(Utf8PathBuf::from("park.json")),
        status: Some("closed".to_owned()),
        ..RecordArgs::default()
    };
    let err = RecordConfig::try_from(args).expect_err("unknown status should error");
    assert!(matches!(err, CliError::InvalidStatus(_)), "found {err:?}");
}

#[rstest]
#[case(None, None)]
#[case(Some("wait-time"), Some(SortKey::WaitTime))]
#[case(Some("score"), Some(SortKey::Score))]
fn list_resolves_sort_key(#[case] sort: Option<&str>, #[case] expected: Option<SortKey>) {
    let args = ListArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        area: Some("Fantasy".to_owned()),
        hide_visited: true,
        sort: sort.map(str::to_owned),
        ..ListArgs::default()
    };
    let config = ListConfig::try_from(args).expect("config should build");
    assert_eq!(config.overrides.sort, expected);
    assert_eq!(config.overrides.area, Some(AreaFilter::Only("Fantasy".to_owned())));
    assert_eq!(config.overrides.hide_visited, Some(true));
}

#[rstest]
fn list_without_flags_keeps_saved_preferences() {
    let args = ListArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        ..ListArgs::default()
    };
    let config = ListConfig::try_from(args).expect("config should build");
    assert_eq!(config.overrides, ListingOverrides::default());

    let saved = ListingQuery::default()
        .in_area("Plaza")
        .hiding_visited()
        .sorted_by(SortKey::Name);
    assert_eq!(config.overrides.applied_to(&saved), saved);
}

#[rstest]
fn list_flags_reset_saved_preferences() {
    let args = ListArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        all_areas: true,
        show_visited: true,
        ..ListArgs::default()
    };
    let config = ListConfig::try_from(args).expect("config should build");
    let saved = ListingQuery::default()
        .in_area("Plaza")
        .hiding_visited()
        .sorted_by(SortKey::Name);
    assert_eq!(
        config.overrides.applied_to(&saved),
        ListingQuery::default().sorted_by(SortKey::Name)
    );
}

#[rstest]
fn list_rejects_unknown_sort_key() {
    let args = ListArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        sort: Some("distance".to_owned()),
        ..ListArgs::default()
    };
    let err = ListConfig::try_from(args).expect_err("unknown sort should error");
    assert!(matches!(err, CliError::InvalidSort(_)), "found {err:?}");
}

#[rstest]
fn weights_overlay_only_the_given_values() {
    let args = WeightsArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        distance: Some(0.4),
        ..WeightsArgs::default()
    };
    let config = WeightsConfig::try_from(args).expect("config should build");
    let merged = config.merged_with(WeightProfile::default());
    assert_eq!(merged, WeightProfile::new(0.5, 0.3, 0.4));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn weights_reject_non_finite_values(#[case] value: f64) {
    let args = WeightsArgs {
        catalog: Some(Utf8PathBuf::from("park.json")),
        wait_time: Some(value),
        ..WeightsArgs::default()
    };
    let err = WeightsConfig::try_from(args).expect_err("non-finite weight should error");
    match err {
        CliError::InvalidWeight { field, .. } => assert_eq!(field, ARG_WAIT_TIME),
        other => panic!("expected InvalidWeight, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let park = ParkFiles::new();
    let files = SessionFiles {
        catalog: park.root.join("absent.json"),
        state: park.files.state.clone(),
    };
    let err = files.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, park.root.join("absent.json"));
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let park = ParkFiles::new();
    let files = SessionFiles {
        catalog: park.root.clone(),
        state: park.files.state.clone(),
    };
    let err = files.validate_sources().expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "count": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.json",
            "state": "from-file-state.json",
            "count": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": "from-env.json",
        "count": 4,
    }));
    composer.push_cli(json!({ "count": 2 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.files.catalog, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.files.state, Utf8PathBuf::from("from-file-state.json"));
    assert_eq!(config.count, 2);
}
