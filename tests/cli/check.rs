use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        r#"
<template>
  <h1>{{ $t('home.title', 'Welcome') }}</h1>
  <p>{{ $t("home.body", "Read more") }}</p>
</template>
"#,
    )?;
    test.write_file("src/main.ts", "const cta = t('home.cta', 'Start');")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Summary:
      Files scanned: 2
      Total instances: 3
      Key conflicts: 0
      Exact redundancies: 0
      Pattern redundancies: 0
      Errors: 0

    ✓ Checked 2 files, 3 translation instances - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_reports_conflict_and_redundancy() -> Result<()> {
    let test = CliTest::with_file(
        "src/Nav.vue",
        "{{ $t('nav.home', 'Home') }} {{ $t('menu.home', 'Home') }}",
    )?;
    test.write_file("src/other.js", "t('nav.home', 'House')")?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Summary:
      Files scanned: 2
      Total instances: 3
      Key conflicts: 1
      Exact redundancies: 1
      Pattern redundancies: 0
      Errors: 0

    error: key "nav.home" has 2 different values  key-conflict
      = value: "Home"
      = value: "House"

    warning: value "Home" is used by 2 different keys  exact-redundancy
      = key: "menu.home"
      = key: "nav.home"

    ✘ 2 problems (1 error, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_check_pattern_redundancy_shows_original_values() -> Result<()> {
    let test = CliTest::with_file(
        "battery.ts",
        "t('a.x', 'Battery: {v}%'); t('b.y', 'Battery: {level}%');",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Summary:
      Files scanned: 1
      Total instances: 2
      Key conflicts: 0
      Exact redundancies: 0
      Pattern redundancies: 1
      Errors: 0

    warning: pattern "Battery: {VAR}%" is shared by 2 different keys  pattern-redundancy
      = key: "a.x"
      = key: "b.y"
      = note: original values: "Battery: {level}%", "Battery: {v}%"

    ✘ 1 problem (0 errors, 1 warning)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_check_malformed_call_is_reported_with_line() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "t('ok', 'Fine')\n\nt('empty', '')\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    Summary:
      Files scanned: 1
      Total instances: 1
      Key conflicts: 0
      Exact redundancies: 0
      Pattern redundancies: 0
      Errors: 1

    warning: malformed translation call `t('empty', '')`  malformed-call
      --> ./src/App.vue:3
      = note: key and value must both be non-empty

    ✘ 1 problem (0 errors, 1 warning)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_check_quote_inside_literal_is_not_a_call() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        r#"$t('q', 'Say "hi"') $t("dont", "Don't stop") $t('ok', 'Fine')"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Total instances: 1"));

    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "$t('nav.home', 'Home') $t('nav.home', 'House') $t('x', '')",
    )?;

    let output = run(test.check_command().args(["--format", "json"]))?;

    assert_eq!(output.code, Some(1));
    let json: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["totalFiles"], 1);
    assert_eq!(json["totalInstances"], 2);
    assert_eq!(json["conflicts"]["nav.home"], serde_json::json!(["Home", "House"]));
    assert_eq!(json["exactRedundancy"], serde_json::json!({}));
    assert_eq!(json["diagnostics"][0]["kind"], "malformedCall");
    assert_eq!(json["diagnostics"][0]["line"], 1);
    assert_eq!(json["diagnostics"][0]["rawText"], "$t('x', '')");

    Ok(())
}

#[test]
fn test_check_extensions_flag_limits_scan() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a.vue", "t('a', 'A')"),
        ("b.ts", "t('b', 'B')"),
        ("c.tsx", "t('c', 'C')"),
    ])?;

    let output = run(test.check_command().args(["-e", "vue"]))?;
    assert!(output.stdout.contains("Files scanned: 1"));

    let output = run(test.check_command().args(["-e", "vue,ts,tsx"]))?;
    assert!(output.stdout.contains("Files scanned: 3"));

    Ok(())
}

#[test]
fn test_check_config_file_is_used() -> Result<()> {
    let test = CliTest::with_file(
        ".rosettarc.json",
        r#"{ "functionNames": ["i18n"], "ignores": ["**/legacy/**"] }"#,
    )?;
    test.write_file("src/a.ts", "i18n('a', 'A'); t('b', 'B')")?;
    test.write_file("src/legacy/old.ts", "i18n('a', 'Other')")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "stdout: {}", output.stdout);
    assert!(output.stdout.contains("Files scanned: 1"));
    assert!(output.stdout.contains("Total instances: 1"));

    Ok(())
}

#[test]
fn test_check_single_file() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", "$t('a', 'A')")?;
    test.write_file("src/other.ts", "t('a', 'B')")?;

    let output = run(test.check_command().arg("src/App.vue"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Files scanned: 1"));

    Ok(())
}

#[test]
fn test_check_single_file_with_other_extension() -> Result<()> {
    let test = CliTest::with_file("README.md", "t('a', 'A')")?;

    let output = run(test.check_command().arg("README.md"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Files scanned: 0"));
    assert!(output.stderr.contains("does not have a scanned extension"));

    Ok(())
}

#[test]
fn test_check_missing_path_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.check_command().arg("does-not-exist"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Path does not exist"));

    Ok(())
}

#[test]
fn test_check_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".rosettarc.json", r#"{ "functionNames": [] }"#)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("functionNames"));

    Ok(())
}
