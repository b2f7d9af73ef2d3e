use std::fs;

use assert_cmd::Command;
use coursemenu::disclaimer::DISCLAIMER;
use coursemenu::formats::Course;
use predicates::prelude::*;

fn coursemenu() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("coursemenu")
}

#[test]
fn show_prints_builtin_course_as_json() {
    let output = coursemenu()
        .args(["show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let course: Course = serde_json::from_slice(&output).expect("parse show output");
    assert_eq!(
        course.menu.group_name.as_deref(),
        Some("CRAFT: Help with PTSD for you and your family")
    );
    assert_eq!(course.menu.menu_name, "main");
    assert_eq!(course.menu.entries.len(), 17);
    assert_eq!(course.menu.entries[0].title, "Welcome");
    assert_eq!(
        course.menu.entries[16].title,
        "Section 6: Supporting Your Loved One's Treatment (Lesson 12)"
    );
}

#[test]
fn show_nested_layout_as_yaml() {
    let output = coursemenu()
        .args(["show", "--layout", "nested", "--format", "yaml"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let course: Course = serde_yaml::from_slice(&output).expect("parse show yaml");
    assert_eq!(course.menu.entries.len(), 7);
    let improve = &course.menu.entries[3];
    assert_eq!(improve.page_count, 39);
    assert_eq!(
        improve.sub_menu.as_ref().map(|s| s.menu_name.as_str()),
        Some("improve")
    );
}

#[test]
fn validate_summarizes_builtin_course() {
    coursemenu()
        .args(["validate"])
        .assert()
        .success()
        .stdout("ok: 17 entries, 191 pages (CRAFT: Help with PTSD for you and your family)\n");
}

#[test]
fn export_then_validate_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out").join("course.yaml");
    let out_str = out.to_str().expect("utf-8 path");

    coursemenu()
        .args(["export", "--layout", "nested", "--out", out_str])
        .assert()
        .success();
    assert!(out.exists());

    coursemenu()
        .args(["validate", "--config", out_str])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: 7 entries, 191 pages"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("course.json");
    fs::write(&out, "keep me").expect("seed output");
    let out_str = out.to_str().expect("utf-8 path");

    coursemenu()
        .args(["export", "--format", "json", "--out", out_str])
        .assert()
        .failure()
        .stderr(predicate::str::contains("export output already exists"));
    assert_eq!(fs::read_to_string(&out).expect("read output"), "keep me");

    coursemenu()
        .args(["export", "--format", "json", "--out", out_str, "--force"])
        .assert()
        .success();
    let contents = fs::read_to_string(&out).expect("read output");
    assert!(contents.contains("\"menu_name\": \"main\""));
}

#[test]
fn validate_rejects_duplicate_group_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("course.yaml");
    fs::write(
        &config,
        r##"labels:
  course_title: Demo
  disclaimer: Careful
menu:
  menu_name: main
  group_name: Demo
  entries:
    - page_count: 1
      page_ids: ["001"]
      title: One
      url: lesson01/01_001.htm
      group_id: "01"
    - page_count: 1
      page_ids: ["001"]
      title: Two
      url: lesson02/02_001.htm
      group_id: "01"
"##,
    )
    .expect("write config");

    coursemenu()
        .args(["validate", "--config", config.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid course config"))
        .stderr(predicate::str::contains(
            "group id \"01\" is used by both \"One\" and \"Two\"",
        ));
}

#[test]
fn validate_rejects_top_level_not_labelled_with_course_title() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("course.yaml");
    fs::write(
        &config,
        r##"labels:
  course_title: CRAFT
  disclaimer: Careful
menu:
  menu_name: main
  group_name: Something Else
  entries:
    - page_count: 1
      page_ids: ["001"]
      title: Welcome
      url: lesson00/00_001.htm
"##,
    )
    .expect("write config");

    coursemenu()
        .args(["validate", "--config", config.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "top-level group name Some(\"Something Else\") does not match course title \"CRAFT\"",
        ));
}

#[test]
fn validate_rejects_top_level_not_named_main() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("course.yaml");
    fs::write(
        &config,
        r##"labels:
  course_title: CRAFT
  disclaimer: Careful
menu:
  menu_name: not-main
  group_name: CRAFT
  entries: []
"##,
    )
    .expect("write config");

    coursemenu()
        .args(["validate", "--config", config.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "top-level menu is named \"not-main\"",
        ));
}

#[test]
fn disclaimer_uses_config_labels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("course.yaml");
    fs::write(
        &config,
        r##"labels:
  course_title: CRAFT
  disclaimer: Opens in a new tab.
menu:
  menu_name: main
  group_name: CRAFT
  entries: []
"##,
    )
    .expect("write config");

    coursemenu()
        .args([
            "disclaimer",
            "--no-wait",
            "--config",
            config.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success()
        .stdout("Opens in a new tab.\n");
}

#[test]
fn validate_reports_missing_config_file() {
    coursemenu()
        .args(["validate", "--config", "does/not/exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read course config"));
}

#[test]
fn disclaimer_prints_exact_text() {
    coursemenu()
        .args(["disclaimer", "--no-wait"])
        .assert()
        .success()
        .stdout(format!("{DISCLAIMER}\n"));
}

#[test]
fn disclaimer_waits_for_enter() {
    coursemenu()
        .args(["disclaimer"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(format!("{DISCLAIMER}\n"));
}

#[test]
fn rust_log_debug_emits_debug_line_to_stderr() {
    coursemenu()
        .env("RUST_LOG", "debug")
        .args(["validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}
