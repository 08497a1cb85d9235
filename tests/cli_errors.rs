//! End-to-end tests: unreadable snapshots and configs surface helpful errors.

mod common;

use common::*;

#[test]
fn snapshot_version_mismatch_is_reported_with_fix() {
    let env = TestEnv::new();
    env.write_project_file(".sweep/snapshot.json", r#"{ "version": 999, "tracks": [] }"#);

    let result = env.run(&["summary"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("snapshot version 999 is not supported (expected 1)"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("sweep init --force"), "{}", result.stderr);
}

#[test]
fn corrupted_snapshot_is_reported() {
    let env = TestEnv::new();
    env.write_project_file(".sweep/snapshot.json", "{ not json");

    let result = env.run(&["ask", "total emissions"]);

    assert!(!result.success);
    assert!(result.stderr.contains("snapshot file corrupted"), "{}", result.stderr);
}

#[test]
fn errors_are_json_in_json_mode() {
    let env = TestEnv::new();
    env.write_project_file(".sweep/snapshot.json", r#"{ "version": 999 }"#);

    let result = env.run(&["summary", "--json"]);

    assert!(!result.success);
    let error = result.json_event("error");
    assert!(
        error["message"]
            .as_str()
            .is_some_and(|m| m.contains("snapshot version 999")),
        "{error}"
    );
}

#[test]
fn invalid_config_fails_fast() {
    let env = TestEnv::with_demo();
    env.write_project_file(".sweep/config.toml", "[assistant]\ntop_n = \"many\"\n");

    let result = env.run(&["summary"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid config in"), "{}", result.stderr);
    assert!(result.stderr.contains("correct the TOML"), "{}", result.stderr);
}

#[test]
fn env_snapshot_override_is_used() {
    let env = TestEnv::new();
    let elsewhere = env.project_path("elsewhere.json");
    let elsewhere_str = elsewhere.to_str().unwrap();

    let init = env.run_with_env(&["init"], &[("SWEEP_SNAPSHOT", elsewhere_str)]);
    assert!(init.success, "{}", init.combined_output());
    assert!(elsewhere.exists());

    let summary = env.run_with_env(&["summary"], &[("SWEEP_SNAPSHOT", elsewhere_str)]);
    assert!(summary.stdout.contains("40.0 tCO2e"), "{}", summary.stdout);
}
