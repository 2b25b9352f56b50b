use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_preview_groups_by_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "$t('nav.home', 'Home') $t('greeting', 'Hello') $t('nav.exit', 'Exit')",
    )?;

    assert_cmd_snapshot!(test.preview_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    --- greeting (1 translation)
      greeting  Hello

    --- nav (2 translations)
      nav.exit  Exit
      nav.home  Home

    Total unique translations: 3
    Prefix groups: 2

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_preview_aligns_values_per_group() -> Result<()> {
    let test = CliTest::with_file(
        "a.ts",
        "t('nav.home', 'Home'); t('nav.settings', 'Settings'); t('nav.ö', 'Umlaut')",
    )?;

    let output = run(&mut test.preview_command())?;

    assert_eq!(
        output.stdout,
        "--- nav (3 translations)\n\
         \x20 nav.home      Home\n\
         \x20 nav.settings  Settings\n\
         \x20 nav.ö         Umlaut\n\n\
         Total unique translations: 3\nPrefix groups: 1\n"
    );

    Ok(())
}

#[test]
fn test_preview_keeps_first_value_and_warns() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;
    test.write_file("b.ts", "t('nav.home', 'House')")?;

    assert_cmd_snapshot!(test.preview_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    --- nav (1 translation)
      nav.home  Home

    Total unique translations: 1
    Prefix groups: 1

    ----- stderr -----
    warning: 1 issue(s) found (run rosetta check for details)
    ");

    Ok(())
}

#[test]
fn test_preview_does_not_write_files() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;

    run(&mut test.preview_command())?;

    assert!(!test.root().join("output").exists());

    Ok(())
}
