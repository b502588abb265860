use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

mod common;

use common::BlogFixture;

fn tagwise(fixture: &BlogFixture) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tagwise"));
    cmd.env_remove("TAGWISE_CONFIG_FILE")
        .env_remove("TAGWISE_LOG")
        .arg("--content-dir")
        .arg(fixture.path());
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is json")
}

fn slugs(value: &Value) -> Vec<String> {
    let mut slugs: Vec<String> = value
        .as_array()
        .expect("array output")
        .iter()
        .map(|item| item["slug"].as_str().expect("slug").to_string())
        .collect();
    slugs.sort();
    slugs
}

#[test]
fn related_returns_top_scored_items() {
    let fixture = BlogFixture::scenario();
    let assert = tagwise(&fixture)
        .args(["related", "a", "--limit", "2"])
        .assert()
        .success();

    let value = stdout_json(&assert.get_output().stdout);
    assert_eq!(slugs(&value), vec!["b", "d"]);
}

#[test]
fn related_is_reproducible_with_seed() {
    let fixture = BlogFixture::scenario();
    let run = || {
        tagwise(&fixture)
            .args(["related", "a", "--seed", "1234"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn drafts_are_only_ranked_when_included() {
    let fixture = BlogFixture::scenario();

    let without = tagwise(&fixture)
        .args(["related", "a", "--limit", "5"])
        .assert()
        .success();
    assert!(!slugs(&stdout_json(&without.get_output().stdout)).contains(&"f".to_string()));

    let with = tagwise(&fixture)
        .args(["related", "a", "--limit", "5", "--include-drafts", "true"])
        .assert()
        .success();
    assert!(slugs(&stdout_json(&with.get_output().stdout)).contains(&"drafts/f".to_string()));
}

#[test]
fn fill_unscored_pads_short_results() {
    let fixture = BlogFixture::scenario();
    let assert = tagwise(&fixture)
        .args(["related", "a", "--limit", "4", "--fill-unscored"])
        .assert()
        .success();

    let value = stdout_json(&assert.get_output().stdout);
    assert_eq!(slugs(&value), vec!["b", "c", "d", "e"]);
    assert_eq!(value[3]["slug"], "e");
}

#[test]
fn negative_limit_fails_loudly() {
    let fixture = BlogFixture::scenario();
    tagwise(&fixture)
        .args(["related", "a", "--limit=-1"])
        .assert()
        .failure()
        .stderr(contains("invalid argument `limit`"));
}

#[test]
fn unknown_slug_fails() {
    let fixture = BlogFixture::scenario();
    tagwise(&fixture)
        .args(["related", "missing"])
        .assert()
        .failure()
        .stderr(contains("content item `missing` not found"));
}

#[test]
fn index_writes_every_slug() {
    let fixture = BlogFixture::scenario();
    let output = fixture.path().join("related.json");

    tagwise(&fixture)
        .args(["index", "--seed", "3", "--output"])
        .arg(&output)
        .assert()
        .success();

    let index: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).expect("index file"))
            .expect("json index");
    let object = index.as_object().expect("object");
    assert_eq!(object.len(), 5);
    assert_eq!(index["e"], Value::Array(Vec::new()));
    assert!(
        !index["a"]
            .as_array()
            .expect("array")
            .contains(&Value::from("a"))
    );
}

#[test]
fn taxonomy_lists_matching_items_newest_first() {
    let fixture = BlogFixture::scenario();
    let assert = tagwise(&fixture)
        .args(["taxonomy", "tags", "SQL"])
        .assert()
        .success();

    let value = stdout_json(&assert.get_output().stdout);
    let ordered: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(ordered, vec!["b", "a"]);
}

#[test]
fn list_as_text_uses_date_format() {
    let fixture = BlogFixture::scenario();
    tagwise(&fixture)
        .args([
            "list",
            "--format",
            "text",
            "--date-format",
            "[month repr:short] [year]",
        ])
        .assert()
        .success()
        .stdout(contains("Mar 2024\tb\tB\t⚙️ DE\tsql"));
}

#[test]
fn list_by_weight_puts_weighted_first() {
    let fixture = BlogFixture::scenario();
    let assert = tagwise(&fixture)
        .args(["list", "--sort", "weight"])
        .assert()
        .success();

    let value = stdout_json(&assert.get_output().stdout);
    assert_eq!(value[0]["slug"], "d");
}

#[test]
fn missing_content_directory_fails() {
    let fixture = BlogFixture::new();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tagwise"));
    cmd.arg("--content-dir")
        .arg(fixture.path().join("nope"))
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}
