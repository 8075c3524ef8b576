use assert_cmd::Command;

fn rentmap() -> Command {
    Command::cargo_bin("rentmap").expect("binary builds")
}

#[test]
fn analyze_json_emits_a_parseable_report() {
    let output = rentmap()
        .args(["analyze", "--city", "oakland", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["city"], "Oakland");
    assert_eq!(report["summary"]["total_neighborhoods"], 6);
    assert_eq!(report["neighborhoods"].as_array().unwrap().len(), 6);
    // Ranks are the dense permutation 1..N in order.
    for (index, row) in report["neighborhoods"].as_array().unwrap().iter().enumerate() {
        assert_eq!(row["rank"], index as u64 + 1);
    }
}

#[test]
fn analyze_filters_compose_on_the_cli() {
    let output = rentmap()
        .args([
            "analyze",
            "--county",
            "Los Angeles",
            "--max-rent",
            "2500",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    for row in report["neighborhoods"].as_array().unwrap() {
        assert_eq!(row["county"], "Los Angeles");
        assert!(row["median_rent"].as_f64().unwrap() <= 2500.0);
    }
}

#[test]
fn same_seed_gives_identical_reports() {
    let run = || {
        let stdout = rentmap()
            .args(["counties", "--format", "json", "--seed", "7"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn counties_respects_top_limit() {
    let output = rentmap()
        .args(["counties", "--top", "3", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let counties: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(counties.as_array().unwrap().len(), 3);
}

#[test]
fn stats_for_unknown_county_is_null_not_an_error() {
    let output = rentmap()
        .args(["stats", "Sacramento", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output).unwrap().trim(), "null");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();

    rentmap().arg("init").current_dir(dir.path()).assert().success();
    assert!(dir.path().join(".rentmap.toml").exists());

    rentmap().arg("init").current_dir(dir.path()).assert().failure();
    rentmap()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn analyze_reads_the_initialized_config() {
    let dir = tempfile::tempdir().unwrap();
    rentmap().arg("init").current_dir(dir.path()).assert().success();

    rentmap()
        .args(["analyze", "--city", "oakland", "--format", "json"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn broken_weight_table_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".rentmap.toml"),
        "[weights]\naffordability = 0.5\n",
    )
    .unwrap();

    let assert = rentmap()
        .args(["analyze", "--format", "json"])
        .current_dir(dir.path())
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("weights.amenities"));
}
