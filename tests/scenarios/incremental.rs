//! Scenario: Incremental deploys
//!
//! Journey: after the first deploy, later runs upload only what changed
//! between the recorded revision and the new one, and remove deleted files.

use crate::common::*;

fn deployed_site() -> TestEnv {
    let env = TestEnv::new();
    env.write("index.php", "v1");
    env.write("about.php", "about");
    env.write("old.html", "old");
    env.commit("initial");
    let result = env.deploy(&[]);
    assert!(result.is_success(), "{}", result.combined_output());
    env
}

#[test]
fn scenario_only_changes_are_uploaded() {
    let env = deployed_site();

    // A remote-only edit to an unchanged file must survive
    std::fs::write(env.target_path("about.php"), "remote edit").unwrap();

    env.write("index.php", "v2");
    env.write("contact.php", "contact");
    env.remove("old.html");
    let head = env.commit("second");

    let result = env.deploy(&["--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.json_lines();
    let plan = events.iter().find(|e| e["event"] == "plan").unwrap();
    assert_eq!(plan["strategy"], "incremental");

    assert_eq!(env.deployed("index.php").as_deref(), Some("v2"));
    assert_eq!(env.deployed("contact.php").as_deref(), Some("contact"));
    assert_eq!(env.deployed("about.php").as_deref(), Some("remote edit"));
    assert!(env.deployed("old.html").is_none());
    assert_eq!(env.deployed_revision(), Some(head));
}

#[test]
fn scenario_full_flag_reuploads_everything() {
    let env = deployed_site();
    std::fs::write(env.target_path("about.php"), "remote edit").unwrap();

    let before = env.deployed_revision();
    let result = env.deploy(&["--full", "--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.json_lines();
    let plan = events.iter().find(|e| e["event"] == "plan").unwrap();
    assert_eq!(plan["strategy"], "full");
    assert_eq!(plan["remote_revision"].as_str(), before.as_deref());

    assert_eq!(env.deployed("about.php").as_deref(), Some("about"));
}

#[test]
fn scenario_excluded_deletion_is_left_on_the_remote() {
    let env = deployed_site();
    env.remove("old.html");
    env.commit("drop old page");

    let result = env.deploy(&["--exclude", "old.html"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(env.deployed("old.html").as_deref(), Some("old"));
}

#[test]
fn scenario_host_junk_is_cleaned_on_incremental_runs() {
    let env = deployed_site();
    std::fs::write(env.target_path("default.html"), "parking page").unwrap();

    env.write("index.php", "v2");
    env.commit("second");

    let result = env.deploy(&[]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.deployed("default.html").is_none());
}

#[test]
fn scenario_unknown_remote_revision_fails_without_touching_the_marker() {
    let env = deployed_site();
    std::fs::write(env.target_path(".revision"), "0123456789abcdef0123456789abcdef01234567")
        .unwrap();

    env.write("index.php", "v2");
    env.commit("second");

    let result = env.deploy(&[]);
    assert!(!result.is_success());
    assert_eq!(
        env.deployed_revision().as_deref(),
        Some("0123456789abcdef0123456789abcdef01234567")
    );
    assert_eq!(env.deployed("index.php").as_deref(), Some("v1"));
}

#[test]
fn scenario_deploy_an_older_revision() {
    let env = deployed_site();
    let first = env.deployed_revision().unwrap();

    env.write("index.php", "v2");
    env.commit("second");
    assert!(env.deploy(&[]).is_success());
    assert_eq!(env.deployed("index.php").as_deref(), Some("v2"));

    let result = env.deploy(&[first.as_str()]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.deployed("index.php").as_deref(), Some("v1"));
    assert_eq!(env.deployed_revision(), Some(first));
}
