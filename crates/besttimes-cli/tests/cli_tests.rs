use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    scores_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let scores_path = dir.path().join("scores.json");
        Self { dir, scores_path }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("besttimes").expect("binary not built");
        cmd.arg("--scores").arg(&self.scores_path);
        cmd
    }

    fn write(&self, name: &str, doc: &Value) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, doc.to_string()).unwrap();
        path
    }

    fn scores(&self) -> Value {
        let content = fs::read_to_string(&self.scores_path).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

fn times(games: u64, fastest: u64, total: u64, timed_out: u64) -> Value {
    json!({ "Games": games, "Fastest": fastest, "TotalTime": total, "TimedOut": timed_out })
}

fn empty_level(name: &str) -> Value {
    json!({ "Level": name, "Hint": times(0, 0, 0, 0), "Clean": times(0, 0, 0, 0) })
}

fn server_response() -> Value {
    let mut doc = json!({
        "Credentials": {
            "Version": 1,
            "UserID": 7,
            "UserName": "carol",
            "Token": "feedfacefeedfacefeedfacefeedface",
            "Hash": "0000000000000000000000000000000000000000"
        },
        "Server": { "Easy": empty_level("Easy"), "Medium": empty_level("Medium") },
        "Local": { "Easy": empty_level("Easy"), "Medium": empty_level("Medium") }
    });
    doc["Server"]["Easy"]["Clean"] = times(2, 100, 250, 0);
    doc
}

#[test]
fn test_record_creates_and_updates_score_file() {
    let ctx = TestContext::new();

    for secs in ["120", "90", "4000"] {
        ctx.cmd()
            .args(["record", "--level", "easy", "--time", secs])
            .assert()
            .success();
    }

    let scores = ctx.scores();
    assert_eq!(scores["Local"]["Easy"]["Clean"], times(3, 90, 210, 1));
    assert_eq!(scores["Local"]["Easy"]["Hint"], times(0, 0, 0, 0));
    assert_eq!(scores["Credentials"]["UserID"], 0);
}

#[test]
fn test_record_rejects_unknown_level() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["record", "--level", "hard", "--time", "100"])
        .assert()
        .failure();
    assert!(!ctx.scores_path.exists());
}

#[test]
fn test_show_prints_combined_table() {
    let ctx = TestContext::new();
    let response = ctx.write("response.json", &server_response());
    ctx.cmd().arg("sync").arg(&response).assert().success();

    for secs in ["120", "90", "4000"] {
        ctx.cmd()
            .args(["record", "--level", "easy", "--time", secs])
            .assert()
            .success();
    }

    ctx.cmd()
        .args(["record", "--level", "easy", "--time", "200", "--hints"])
        .assert()
        .success();

    let out = stdout_of(ctx.cmd().arg("show"));
    // Combined clean bucket: 5 boards, best 1:30, average 460 / 4 = 1:55.
    assert!(out.contains("Easy"), "{}", out);
    assert!(out.contains("1:30"), "{}", out);
    assert!(out.contains("1:55"), "{}", out);
    assert!(!out.contains("Medium"), "{}", out);

    let clean = out.find("No").unwrap();
    let hint = out.find("Yes").unwrap();
    assert!(clean < hint);
    assert!(out.contains("3:20"), "{}", out);
}

#[test]
fn test_show_skips_buckets_without_games() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["record", "--level", "medium", "--time", "300"])
        .assert()
        .success();

    let out = stdout_of(ctx.cmd().arg("show"));
    assert!(out.contains("Medium"), "{}", out);
    assert!(out.contains("No"), "{}", out);
    assert!(!out.contains("Yes"), "{}", out);
}

#[test]
fn test_show_without_games() {
    let ctx = TestContext::new();
    let out = stdout_of(ctx.cmd().arg("show"));
    assert!(out.contains("No games recorded yet."));
}

#[test]
fn test_sync_keeps_local_scores() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["record", "--level", "medium", "--time", "600", "--hints"])
        .assert()
        .success();

    let mut response = server_response();
    response["Local"]["Medium"]["Hint"] = times(50, 1, 50, 0);
    let response = ctx.write("response.json", &response);

    let out = stdout_of(ctx.cmd().arg("sync").arg(&response));
    assert!(out.contains("carol"));

    let scores = ctx.scores();
    assert_eq!(scores["Credentials"]["UserID"], 7);
    assert_eq!(scores["Server"]["Easy"]["Clean"], times(2, 100, 250, 0));
    assert_eq!(scores["Local"]["Medium"]["Hint"], times(1, 600, 600, 0));
}

#[test]
fn test_sync_rejects_malformed_response() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["record", "--level", "easy", "--time", "100"])
        .assert()
        .success();
    let before = fs::read_to_string(&ctx.scores_path).unwrap();

    let mut response = server_response();
    response["Server"]["Hard"] = empty_level("Hard");
    let response = ctx.write("response.json", &response);

    ctx.cmd().arg("sync").arg(&response).assert().failure();
    assert_eq!(fs::read_to_string(&ctx.scores_path).unwrap(), before);
}

#[test]
fn test_validate_reports_ok_and_audit_warnings() {
    let ctx = TestContext::new();

    let good = ctx.write("good.json", &server_response());
    let out = stdout_of(ctx.cmd().arg("validate").arg(&good));
    assert!(out.contains("OK"));
    assert!(!out.contains("WARNING"));

    let mut odd = server_response();
    odd["Local"]["Medium"]["Clean"] = times(1, 0, 0, 4);
    let odd = ctx.write("odd.json", &odd);
    let out = stdout_of(ctx.cmd().arg("validate").arg(&odd));
    assert!(out.contains("OK"));
    assert!(out.contains("WARNING Local.Medium.Clean"), "{}", out);
}

#[test]
fn test_validate_fails_on_schema_violation() {
    let ctx = TestContext::new();
    let mut bad = server_response();
    bad["Local"]["Easy"]["Clean"]
        .as_object_mut()
        .unwrap()
        .remove("TimedOut");
    let bad = ctx.write("bad.json", &bad);

    let output = ctx.cmd().arg("validate").arg(&bad).assert().failure();
    let out = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(out.contains("INVALID"));
    assert!(out.contains("Local.Easy.Clean.TimedOut"), "{}", out);
}

#[test]
fn test_compact_output_from_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write("settings.json", &json!({ "pretty": false }));

    ctx.cmd()
        .arg("--config")
        .arg(&config)
        .args(["record", "--level", "easy", "--time", "60"])
        .assert()
        .success();
    let compact = fs::read_to_string(&ctx.scores_path).unwrap();
    assert!(!compact.contains('\n'));

    // Flags typed on the command line override the file.
    ctx.cmd()
        .arg("--config")
        .arg(&config)
        .args(["--pretty", "true"])
        .args(["record", "--level", "easy", "--time", "60"])
        .assert()
        .success();
    let pretty = fs::read_to_string(&ctx.scores_path).unwrap();
    assert!(pretty.contains('\n'));
}

#[test]
fn test_pinned_schema_version_reloads_own_file() {
    let ctx = TestContext::new();

    for secs in ["100", "200"] {
        ctx.cmd()
            .args(["--schema-version", "2"])
            .args(["record", "--level", "easy", "--time", secs])
            .assert()
            .success();
    }

    let scores = ctx.scores();
    assert_eq!(scores["Credentials"]["Version"], 2);
    assert_eq!(scores["Local"]["Easy"]["Clean"], times(2, 100, 300, 0));
}

#[test]
fn test_schema_command_prints_draft07() {
    let ctx = TestContext::new();
    let out = stdout_of(ctx.cmd().arg("schema"));
    let schema: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    assert_eq!(schema["additionalProperties"], false);
}
