use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["extensions"], serde_json::json!(["vue", "js", "ts"]));
    assert_eq!(parsed["functionNames"], serde_json::json!(["t", "$t"]));
    assert_eq!(
        parsed["targetLanguages"],
        serde_json::json!(["dk", "sw", "es", "pt"])
    );
    assert_eq!(parsed["outputDir"], "output");
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .rosettarc.json

    ----- stderr -----
    ");

    assert!(test.has_file(".rosettarc.json"));
    let content = test.read_file(".rosettarc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".rosettarc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Error: .rosettarc.json already exists"));
    assert_eq!(test.read_file(".rosettarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/App.vue", "<h1>{{ $t('home.title', 'Welcome') }}</h1>")?;

    let output = run(&mut test.check_command())?;
    assert_eq!(
        output.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        output.stderr
    );

    Ok(())
}
