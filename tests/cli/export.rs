use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_export_writes_one_sheet_per_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        "$t('nav.home', 'Home') $t('nav.exit', 'Exit') $t('greeting', 'Hello, friend')",
    )?;

    assert_cmd_snapshot!(test.export_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation sheets written to output:
      - greeting_translations.csv (1 translation)
      - nav_translations.csv (2 translations)
    ✓ Exported 3 unique translations into 2 files

    ----- stderr -----
    ");

    insta::assert_snapshot!(test.read_file("output/nav_translations.csv")?, @r"
    key,en,dk,sw,es,pt
    nav.exit,Exit,,,,
    nav.home,Home,,,,
    ");
    assert_eq!(
        test.read_file("output/greeting_translations.csv")?,
        "key,en,dk,sw,es,pt\ngreeting,\"Hello, friend\",,,,\n"
    );

    Ok(())
}

#[test]
fn test_export_output_dir_and_languages_flags() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;

    let output = run(test.export_command().args([
        "--output-dir",
        "build/sheets",
        "--languages",
        "fr,de",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("build/sheets/nav_translations.csv")?,
        "key,en,fr,de\nnav.home,Home,,\n"
    );

    Ok(())
}

#[test]
fn test_export_config_languages() -> Result<()> {
    let test = CliTest::with_file(
        ".rosettarc.json",
        r#"{ "targetLanguages": ["ja"], "outputDir": "i18n" }"#,
    )?;
    test.write_file("a.ts", "t('nav.home', 'Home')")?;

    let output = run(&mut test.export_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("i18n/nav_translations.csv")?,
        "key,en,ja\nnav.home,Home,\n"
    );

    Ok(())
}

#[test]
fn test_export_with_issues_warns_and_proceeds() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;
    test.write_file("b.ts", "t('nav.home', 'House')")?;

    assert_cmd_snapshot!(test.export_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation sheets written to output:
      - nav_translations.csv (1 translation)
    ✓ Exported 1 unique translation into 1 file

    ----- stderr -----
    warning: 1 issue(s) found in translations (run rosetta check for details):
      - key conflicts: 1
    warning: key "nav.home" exported as "Home", dropped "House"
    "#);
    assert_eq!(
        test.read_file("output/nav_translations.csv")?,
        "key,en,dk,sw,es,pt\nnav.home,Home,,,,\n"
    );

    Ok(())
}

#[test]
fn test_export_strict_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;
    test.write_file("b.ts", "t('nav.home', 'House')")?;

    assert_cmd_snapshot!(test.export_command().arg("--strict"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    warning: 1 issue(s) found in translations (run rosetta check for details):
      - key conflicts: 1
    ✘ Export aborted: 1 issue(s) found with --strict
    ");
    assert!(!test.root().join("output").exists());

    Ok(())
}

#[test]
fn test_export_strict_clean_project_succeeds() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('nav.home', 'Home')")?;

    let output = run(test.export_command().arg("--strict"))?;

    assert_eq!(output.code, Some(0));
    assert!(test.has_file("output/nav_translations.csv"));

    Ok(())
}

#[test]
fn test_export_colliding_prefixes_keep_both_sheets() -> Result<()> {
    let test = CliTest::with_file("a.ts", "t('a/b.x', 'Slash'); t('a_b.y', 'Underscore')")?;

    let output = run(&mut test.export_command())?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("  - a_b_translations.csv (1 translation)"));
    assert!(output.stdout.contains("  - a_b_2_translations.csv (1 translation)"));
    assert_eq!(
        test.read_file("output/a_b_translations.csv")?,
        "key,en,dk,sw,es,pt\na/b.x,Slash,,,,\n"
    );
    assert_eq!(
        test.read_file("output/a_b_2_translations.csv")?,
        "key,en,dk,sw,es,pt\na_b.y,Underscore,,,,\n"
    );

    Ok(())
}
