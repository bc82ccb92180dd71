//! Scenario: Dry runs
//!
//! Journey: a developer previews a deploy. Nothing on the target changes,
//! but the report matches what a real run would do.

use crate::common::*;

#[test]
fn scenario_dry_run_reports_without_writing() {
    let env = TestEnv::new();
    env.write("index.php", "site");
    env.write("about.php", "about");
    env.commit("initial");

    let result = env.deploy(&["--dry-run", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.json_lines();
    let written: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "item_written")
        .map(|e| e["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(written, vec!["about.php", "index.php"]);

    let complete = events.last().unwrap();
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["dry_run"], true);

    assert!(env.deployed("index.php").is_none());
    assert!(env.deployed_revision().is_none());
}

#[test]
fn scenario_dry_run_then_real_run() {
    let env = TestEnv::new();
    env.write("index.php", "site");
    let head = env.commit("initial");

    assert!(env.deploy(&["--dry-run"]).is_success());
    assert!(env.deploy(&[]).is_success());

    assert_eq!(env.deployed_revision(), Some(head));
}
