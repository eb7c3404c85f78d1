//! Behaviour-driven step definitions driving the standings CLI scenarios.

use super::helpers::FeedFixture;
use super::*;
use crate::standings::{
    DefaultFeedSourceBuilder, FeedLocation, FeedSourceBuilder, run_standings_with,
};
use podium_core::{ConfigError, Medal, UNAVAILABLE};
use podium_data::test_support::StubFeedSource;
use podium_data::{FeedError, FeedSource};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
struct StandingsWorld {
    fixture: FeedFixture,
    include_feed: RefCell<bool>,
    feed_override: RefCell<Option<String>>,
    cli_args: RefCell<Vec<String>>,
    stub: RefCell<Option<StubFeedSource>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl StandingsWorld {
    fn new() -> Self {
        Self {
            fixture: FeedFixture::new(),
            include_feed: RefCell::new(true),
            feed_override: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stub: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args(&self, args: &[&str]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["podium".to_owned(), "standings".to_owned()];
        if *self.include_feed.borrow() {
            let feed = self
                .feed_override
                .borrow()
                .clone()
                .unwrap_or_else(|| self.fixture.feed_path().into_string());
            argv.push(feed);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn expect_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> StandingsWorld {
    StandingsWorld::new()
}

#[derive(Debug)]
struct StubFeedSourceBuilder {
    source: StubFeedSource,
}

impl FeedSourceBuilder for StubFeedSourceBuilder {
    fn build(&self, location: &FeedLocation) -> Result<Box<dyn FeedSource>, CliError> {
        assert!(matches!(location, FeedLocation::Url(_)), "stub serves URLs");
        Ok(Box::new(self.source.clone()))
    }
}

#[given("a medal feed file exists on disk")]
fn feed_file_exists(#[from(world)] world: &StandingsWorld) {
    assert!(world.fixture.feed_path().is_file());
}

#[given("a population table covering only the single gold nation")]
fn population_table(#[from(world)] world: &StandingsWorld) {
    let path = world
        .fixture
        .write_population_table(r#"{"ONE": 5000000}"#);
    let flag = format!("--{ARG_POPULATION_TABLE}");
    world.push_args(&[flag.as_str(), path.as_str()]);
}

#[given("I enable population normalisation")]
fn enable_normalisation(#[from(world)] world: &StandingsWorld) {
    let flag = format!("--{ARG_POPULATION}");
    world.push_args(&[flag.as_str()]);
}

#[given("I request JSON output with gold worth 5 points")]
fn request_json(#[from(world)] world: &StandingsWorld) {
    let format_flag = format!("--{ARG_FORMAT}");
    let gold_flag = format!("--{ARG_GOLD}");
    world.push_args(&[format_flag.as_str(), "json", gold_flag.as_str(), "5"]);
}

#[given("I set the gold weight to 11")]
fn gold_out_of_range(#[from(world)] world: &StandingsWorld) {
    let flag = format!("--{ARG_GOLD}");
    world.push_args(&[flag.as_str(), "11"]);
}

#[given("I omit the feed argument")]
fn omit_feed(#[from(world)] world: &StandingsWorld) {
    *world.include_feed.borrow_mut() = false;
}

#[given("the upstream feed answers with status 503")]
fn upstream_outage(#[from(world)] world: &StandingsWorld) {
    *world.feed_override.borrow_mut() = Some("https://medals.example/feed.json".to_owned());
    *world.stub.borrow_mut() = Some(StubFeedSource::with_http_status(503));
}

#[when("I run the standings command")]
fn run_standings_command(#[from(world)] world: &StandingsWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Standings(args) => {
            let mut buffer = world.stdout.borrow_mut();
            match world.stub.borrow().clone() {
                Some(source) => {
                    run_standings_with(args, &StubFeedSourceBuilder { source }, &mut *buffer)
                }
                None => run_standings_with(args, &DefaultFeedSourceBuilder, &mut *buffer),
            }
        }
        Command::Share(_) => panic!("expected standings command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and the silver and bronze nation is listed first")]
fn haul_listed_first(#[from(world)] world: &StandingsWorld) {
    world.expect_success();
    let stdout = world.stdout();
    let first_row = stdout.lines().nth(2).expect("first ranked row");
    assert!(first_row.contains("TWO"), "unexpected first row {first_row:?}");
    assert!(first_row.ends_with("9 points"));
}

#[then("the output ends with the default share marker")]
fn default_share_marker(#[from(world)] world: &StandingsWorld) {
    assert_eq!(world.stdout().lines().last(), Some("share: (defaults)"));
}

#[then("the silver and bronze nation is shown as unavailable")]
fn haul_unavailable(#[from(world)] world: &StandingsWorld) {
    world.expect_success();
    let stdout = world.stdout();
    let rows: Vec<&str> = stdout.lines().skip(2).take(2).collect();
    assert!(
        rows.first()
            .is_some_and(|row| row.contains("ONE") && row.ends_with("1 per 2M")),
        "unexpected rows {rows:?}"
    );
    assert!(
        rows.get(1)
            .is_some_and(|row| row.contains("TWO") && row.ends_with(UNAVAILABLE)),
        "unexpected rows {rows:?}"
    );
    assert_eq!(stdout.lines().last(), Some("share: ?population=true"));
}

#[then("the JSON report carries the share query for gold worth 5 points")]
fn json_report(#[from(world)] world: &StandingsWorld) {
    world.expect_success();
    let report: Value = serde_json::from_str(&world.stdout()).expect("output should be JSON");
    assert_eq!(report["share"], "gold=5");
    assert_eq!(report["config"]["goldWeight"], 5);
    assert_eq!(report["rows"][0]["country"]["shortCode"], "TWO");
    assert_eq!(report["rows"][1]["points"], 5);
}

#[then("the command fails because the gold weight is out of range")]
fn gold_rejected(#[from(world)] world: &StandingsWorld) {
    world.expect_error(|error| match error {
        CliError::InvalidWeight(ConfigError::WeightOutOfRange { medal, value }) => {
            assert_eq!(*medal, Medal::Gold);
            assert_eq!(*value, 11);
        }
        other => panic!("expected InvalidWeight, found {other:?}"),
    });
}

#[then("the command fails because the feed is missing")]
fn feed_missing(#[from(world)] world: &StandingsWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_FEED),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails with HTTP status 503")]
fn http_failure(#[from(world)] world: &StandingsWorld) {
    world.expect_error(|error| match error {
        CliError::Feed(FeedError::Http { status, .. }) => assert_eq!(*status, 503),
        other => panic!("expected Feed(Http), found {other:?}"),
    });
}

macro_rules! register_standings_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/standings_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: StandingsWorld) {
            let _ = world;
        }
    };
}

register_standings_scenario!(standings_table, "ranking a feed file as a table");
register_standings_scenario!(
    standings_per_capita,
    "ranking per capita with a population table"
);
register_standings_scenario!(standings_json, "emitting a JSON report");
register_standings_scenario!(standings_bad_weight, "rejecting an out-of-range weight flag");
register_standings_scenario!(standings_missing_feed, "rejecting missing feed arguments");
register_standings_scenario!(standings_outage, "surfacing an upstream outage");
