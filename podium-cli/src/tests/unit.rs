//! Focused unit tests covering standings configuration and rendering.

use super::helpers::FeedFixture;
use super::*;
use crate::standings::{
    FeedLocation, OutputFormat, PopulationOverlay, StandingsArgs, StandingsConfig,
    config_from_layers_for_test, write_share_line,
};
use crate::weights::WeightOverrides;
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use podium_core::{
    ConfigError, Medal, PopulationLookup, RankingConfig, StaticPopulationTable, Weight,
};
use rstest::rstest;
use serde_json::json;
use std::collections::HashMap;

#[rstest]
fn converting_without_feed_errors() {
    let err = StandingsConfig::try_from(StandingsArgs::default()).expect_err("feed is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_FEED);
            assert_eq!(env, ENV_FEED);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case("https://example.org/medals.json", FeedLocation::Url("https://example.org/medals.json".to_owned()))]
#[case("http://localhost:8080/feed", FeedLocation::Url("http://localhost:8080/feed".to_owned()))]
#[case("artefacts/medals.json", FeedLocation::File(Utf8PathBuf::from("artefacts/medals.json")))]
fn feed_argument_selects_location(#[case] raw: &str, #[case] expected: FeedLocation) {
    let args = StandingsArgs {
        feed: Some(raw.to_owned()),
        ..StandingsArgs::default()
    };
    let config = StandingsConfig::try_from(args).expect("config should build");
    assert_eq!(config.feed, expected);
    assert_eq!(config.format, OutputFormat::Table);
    assert_eq!(config.ranking, RankingConfig::default());
}

#[rstest]
fn flags_override_the_share_query() {
    let overrides = WeightOverrides {
        gold: Some(7),
        population: Some(false),
        query: Some("gold=5&silver=4&population=true"),
        ..WeightOverrides::default()
    };
    let config = overrides
        .resolve(&RankingConfig::default())
        .expect("valid overrides");
    assert_eq!(config.gold_weight, Weight::checked(7).expect("weight in range"));
    assert_eq!(config.silver_weight, Weight::checked(4).expect("weight in range"));
    assert_eq!(config.bronze_weight, Weight::checked(1).expect("weight in range"));
    assert!(!config.normalize_by_population);
}

#[rstest]
fn out_of_range_flag_is_rejected() {
    let overrides = WeightOverrides {
        bronze: Some(11),
        ..WeightOverrides::default()
    };
    let err = overrides
        .resolve(&RankingConfig::default())
        .expect_err("11 is out of range");
    match err {
        CliError::InvalidWeight(ConfigError::WeightOutOfRange { medal, value }) => {
            assert_eq!(medal, Medal::Bronze);
            assert_eq!(value, 11);
        }
        other => panic!("expected InvalidWeight, found {other:?}"),
    }
}

#[rstest]
fn malformed_share_query_is_rejected() {
    let overrides = WeightOverrides {
        query: Some("gold=lots"),
        ..WeightOverrides::default()
    };
    let err = overrides
        .resolve(&RankingConfig::default())
        .expect_err("non-numeric weight");
    match err {
        CliError::InvalidQuery { query, source } => {
            assert_eq!(query, "gold=lots");
            assert!(matches!(source, ConfigError::ConfigParseError { .. }));
        }
        other => panic!("expected InvalidQuery, found {other:?}"),
    }
}

#[rstest]
fn population_flag_without_value_enables_normalisation() {
    let cli = Cli::try_parse_from(["podium", "standings", "medals.json", "--population"])
        .expect("arguments parse");
    match cli.command {
        Command::Standings(args) => assert_eq!(args.population, Some(true)),
        Command::Share(_) => panic!("expected standings command"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "gold": "heavy" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honour_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "feed": "from-file.json", "gold": 4 }), None);
    composer.push_environment(json!({ "feed": "from-env.json", "format": "json" }));
    composer.push_cli(json!({ "gold": 6 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(
        config.feed,
        FeedLocation::File(Utf8PathBuf::from("from-env.json"))
    );
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.ranking.gold_weight, Weight::checked(6).expect("weight in range"));
}

#[rstest]
fn overlay_prefers_table_entries_and_falls_back_to_builtin() {
    let overlay = PopulationOverlay {
        overrides: HashMap::from([("NOR".to_owned(), 6_000_000)]),
    };
    assert_eq!(overlay.population("NOR"), Some(6_000_000));
    assert_eq!(
        overlay.population("USA"),
        StaticPopulationTable.population("USA")
    );
    assert_eq!(overlay.population("ZZZ"), None);
}

#[rstest]
#[case("", "share: (defaults)\n")]
#[case("gold=5", "share: ?gold=5\n")]
fn share_line_marks_defaults(#[case] share: &str, #[case] expected: &str) {
    let mut buffer = Vec::new();
    write_share_line(&mut buffer, share).expect("write to buffer");
    assert_eq!(String::from_utf8(buffer).expect("utf-8"), expected);
}

#[rstest]
fn table_output_lists_ranked_rows() {
    let fixture = FeedFixture::new();
    let args = StandingsArgs {
        feed: Some(fixture.feed_path().into_string()),
        ..StandingsArgs::default()
    };
    let mut buffer = Vec::new();

    crate::standings::run_standings_with(
        args,
        &crate::standings::DefaultFeedSourceBuilder,
        &mut buffer,
    )
    .expect("standings should render");

    let output = String::from_utf8(buffer).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines.first().is_some_and(|line| line.starts_with("Standings as of")));
    assert!(lines.get(2).is_some_and(|line| line.contains("TWO") && line.ends_with("9 points")));
    assert!(lines.get(3).is_some_and(|line| line.contains("ONE") && line.ends_with("3 points")));
    assert_eq!(lines.last(), Some(&"share: (defaults)"));
}
