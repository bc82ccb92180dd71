//! Scenario: Adopting a site that is already live
//!
//! Journey: the target already holds the files of some commit (uploaded by
//! hand). `revship init` records that commit, `status` shows what is
//! pending, and the next deploy is incremental from there.

use crate::common::*;

#[test]
fn scenario_init_then_status_then_deploy() {
    let env = TestEnv::new();
    env.write("index.php", "v1");
    let first = env.commit("initial");
    // Uploaded by hand
    std::fs::write(env.target_path("index.php"), "v1").unwrap();

    let target = env.target_spec();
    let result = env.run(&["init", "--target", &target]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.deployed_revision(), Some(first.clone()));

    env.write("index.php", "v2");
    env.write("new.php", "new");
    let second = env.commit("second");

    let result = env.run(&["status", "--target", &target, "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());
    let status = &result.json_lines()[0];
    assert_eq!(status["event"], "status");
    assert_eq!(status["state"], "behind");
    assert_eq!(status["remote"], first.as_str());
    assert_eq!(status["target"], second.as_str());
    assert_eq!(status["pending"]["changed"].as_array().unwrap().len(), 2);

    let result = env.deploy(&["--json"]);
    assert!(result.is_success(), "{}", result.combined_output());
    let plan = result
        .json_lines()
        .into_iter()
        .find(|e| e["event"] == "plan")
        .unwrap();
    assert_eq!(plan["strategy"], "incremental");
    assert_eq!(plan["remote_revision"], first.as_str());

    let result = env.run(&["status", "--target", &target, "--json"]);
    assert_eq!(result.json_lines()[0]["state"], "up_to_date");
}

#[test]
fn scenario_init_dry_run_leaves_target_alone() {
    let env = TestEnv::new();
    env.write("index.php", "v1");
    env.commit("initial");

    let target = env.target_spec();
    let result = env.run(&["init", "--target", &target, "--dry-run"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.deployed_revision().is_none());
}

#[test]
fn scenario_status_before_any_deploy() {
    let env = TestEnv::new();
    env.write("index.php", "v1");
    env.commit("initial");

    let target = env.target_spec();
    let result = env.run(&["status", "--target", &target, "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());
    let status = &result.json_lines()[0];
    assert_eq!(status["state"], "never_deployed");
    assert!(status["remote"].is_null());
}
