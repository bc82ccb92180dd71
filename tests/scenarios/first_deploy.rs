//! Scenario: First deploy to an empty target
//!
//! Journey: a site has never been deployed. The first run uploads the whole
//! tree and records the revision; the second run finds nothing to do.

use crate::common::*;

#[test]
fn scenario_first_deploy_uploads_everything() {
    let env = TestEnv::new();
    env.write("index.php", "<?php echo 'hi';");
    env.write("css/site.css", "body {}");
    let head = env.commit("initial");

    let result = env.deploy(&[]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(env.deployed("index.php").as_deref(), Some("<?php echo 'hi';"));
    assert_eq!(env.deployed("css/site.css").as_deref(), Some("body {}"));
    assert_eq!(env.deployed_revision(), Some(head));
}

#[test]
fn scenario_second_run_is_up_to_date() {
    let env = TestEnv::new();
    env.write("index.php", "v1");
    env.commit("initial");
    assert!(env.deploy(&[]).is_success());

    // Remote edits survive a no-op run
    std::fs::write(env.target_path("index.php"), "hotfix").unwrap();

    let result = env.deploy(&["--json"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.json_lines();
    assert!(events.iter().any(|e| e["event"] == "up_to_date"));
    assert!(events.iter().any(|e| e["event"] == "marker_unchanged"));
    assert!(!events.iter().any(|e| e["event"] == "item_written"));
    assert_eq!(env.deployed("index.php").as_deref(), Some("hotfix"));
}

#[test]
fn scenario_excluded_paths_never_reach_the_target() {
    let env = TestEnv::new();
    env.write("index.php", "site");
    env.write("tests/site_test.php", "test");
    env.write("revship.toml", "[deploy]\nexclude = [\"tests/\"]\n");
    env.commit("initial");

    let result = env.deploy(&["--exclude", "revship.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert!(env.deployed("index.php").is_some());
    assert!(env.deployed("tests/site_test.php").is_none());
    assert!(env.deployed("revship.toml").is_none());
}

#[test]
fn scenario_cms_config_and_additional_files() {
    let env = TestEnv::new();
    env.write("index.php", "site");
    env.write("wp-config.prod.php", "<?php // prod");
    env.commit("initial");
    // Untracked build output
    env.write("dist/app.js", "console.log(1)");

    let result = env.deploy(&["--additional", "dist"]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert_eq!(env.deployed("wp-config.php").as_deref(), Some("<?php // prod"));
    assert_eq!(env.deployed("dist/app.js").as_deref(), Some("console.log(1)"));
}

#[test]
fn scenario_custom_marker_path_from_config() {
    let env = TestEnv::new();
    env.write("index.php", "site");
    env.write("revship.toml", "[deploy]\nrevision_file = \".deployed\"\n");
    let head = env.commit("initial");

    let result = env.deploy(&[]);
    assert!(result.is_success(), "{}", result.combined_output());

    assert!(env.deployed(".revision").is_none());
    assert_eq!(env.deployed(".deployed").map(|m| m.trim_end().to_string()), Some(head));
}
