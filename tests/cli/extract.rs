use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

fn read_json(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

#[test]
fn test_extract_click_here_scenario() -> Result<()> {
    let test = CliTest::with_files(&[
        ("foo/bar.ts", "const s = \"Click Here\";\n"),
        ("foo/baz.ts", "<button>Click Here</button>\n"),
    ])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.read_file("translation-report.txt")?, @r#"
    foo/bar.ts:1 - [quoted] "Click Here" -> click_here
    foo/baz.ts:1 - [markup] "Click Here" -> click_here
    "#);

    for language in ["en", "zh"] {
        let catalog = read_json(&test, &format!("locales/{language}/foo.json"))?;
        assert_eq!(catalog, json!({ "click_here": "Click Here" }));
    }

    assert!(stdout(&output).contains(
        "Extracted 2 strings from 2 files into 1 namespace (languages: en (source), zh)"
    ));

    Ok(())
}

#[test]
fn test_extract_same_directory_last_write_wins() -> Result<()> {
    let test = CliTest::with_files(&[
        ("dialogs/open.ts", "title(\"Save File\");\n"),
        ("dialogs/save.ts", "title(\"Save file!\");\nlabel(\"Save File\");\n"),
    ])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = read_json(&test, "locales/en/dialogs.json")?;
    assert_eq!(catalog, json!({ "save_file": "Save File" }));

    assert_snapshot!(test.read_file("translation-report.txt")?, @r#"
    dialogs/open.ts:1 - [quoted] "Save File" -> save_file
    dialogs/save.ts:1 - [quoted] "Save file!" -> save_file
    dialogs/save.ts:2 - [quoted] "Save File" -> save_file
    "#);

    Ok(())
}

#[test]
fn test_extract_strict_keys() -> Result<()> {
    let test = CliTest::with_files(&[(
        "dialogs/save.ts",
        "title(\"Save file\");\nlabel(\"Save file!\");\n",
    )])?;

    let output = test.extract_command().arg("--strict-keys").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = read_json(&test, "locales/en/dialogs.json")?;
    assert_eq!(
        catalog,
        json!({ "save_file": "Save file", "save_file_2": "Save file!" })
    );
    assert!(
        test.read_file("translation-report.txt")?
            .ends_with("\"Save file!\" -> save_file_2")
    );

    Ok(())
}

#[test]
fn test_extract_skips_excluded_dirs_and_non_source_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("src/app.tsx", "<h2>Welcome back</h2>\n"),
        ("node_modules/lib/index.ts", "export const x = \"Library text\";\n"),
        ("dist/bundle.ts", "export const y = \"Built text\";\n"),
        ("src/styles.css", ".a { content: \"Css text\"; }\n"),
    ])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(
        test.read_file("translation-report.txt")?,
        @r#"src/app.tsx:1 - [markup] "Welcome back" -> welcome_back"#
    );

    Ok(())
}

#[test]
fn test_extract_filters_non_prose() -> Result<()> {
    let test = CliTest::with_files(&[(
        "ui/form.tsx",
        r#"import { x } from "react";
<div className="form-control">
  <label htmlFor="name">Full name</label>
  <input type="text" placeholder="Please enter a value" />
  <span>{count}</span>
  <p>42</p>
  <Trans>`Hello ${name}`</Trans>
</div>
"#,
    )])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.read_file("translation-report.txt")?, @r#"
    ui/form.tsx:3 - [markup] "Full name" -> full_name
    ui/form.tsx:4 - [quoted] "Please enter a value" -> please_enter_a_value
    "#);

    Ok(())
}

#[test]
fn test_extract_root_files_use_root_namespace() -> Result<()> {
    let test = CliTest::with_files(&[("main.ts", "console.log(\"Starting up now\");\n")])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let catalog = read_json(&test, "locales/en/common.json")?;
    assert_eq!(catalog, json!({ "starting_up_now": "Starting up now" }));

    Ok(())
}

#[test]
fn test_extract_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".extractrc.json",
            r#"{
                "languages": ["en", "de", "fr"],
                "localesDir": "i18n",
                "reportPath": "reports/strings.txt",
                "ignores": ["**/generated/**"],
                "ignoreTexts": ["Lorem ipsum"]
            }"#,
        ),
        ("app/home.ts", "a(\"Lorem ipsum\");\nb(\"Open settings\");\n"),
        ("app/generated/types.ts", "c(\"Generated text\");\n"),
    ])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    for language in ["en", "de", "fr"] {
        let catalog = read_json(&test, &format!("i18n/{language}/app.json"))?;
        assert_eq!(catalog, json!({ "open_settings": "Open settings" }));
    }
    assert!(!test.root().join("locales").exists());
    assert_eq!(
        test.read_file("reports/strings.txt")?,
        "app/home.ts:2 - [quoted] \"Open settings\" -> open_settings"
    );

    Ok(())
}

#[test]
fn test_extract_cli_overrides_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".extractrc.json", r#"{ "languages": ["en", "ja"] }"#),
        ("app/home.ts", "b(\"Open settings\");\n"),
    ])?;

    let output = test
        .extract_command()
        .args(["--languages", "en,ko", "--report", "out.txt"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("locales/ko/app.json").exists());
    assert!(!test.root().join("locales/ja").exists());
    assert!(test.root().join("out.txt").exists());
    assert!(stdout(&output).contains("wrote 2 catalogs, report: out.txt"));

    Ok(())
}

#[test]
fn test_extract_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_files(&[("foo/bar.ts", "const s = \"Click Here\";\n")])?;

    let output = test.extract_command().arg("--dry-run").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stdout(&output).starts_with("foo/bar.ts:1 - [quoted] \"Click Here\" -> click_here\n"));
    assert!(!test.root().join("locales").exists());
    assert!(!test.root().join("translation-report.txt").exists());

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a/one.ts", "x(\"First message\");\ny(`Second message`);\n"),
        ("b/two.tsx", "<p>Third message</p>\n"),
    ])?;

    test.extract_command().output()?;
    let report = test.read_file("translation-report.txt")?;
    let catalog_a = test.read_file("locales/zh/a.json")?;
    let catalog_b = test.read_file("locales/en/b.json")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("translation-report.txt")?, report);
    assert_eq!(test.read_file("locales/zh/a.json")?, catalog_a);
    assert_eq!(test.read_file("locales/en/b.json")?, catalog_b);

    Ok(())
}

#[test]
fn test_extract_verbose_reports_collisions() -> Result<()> {
    let test = CliTest::with_files(&[(
        "dialogs/save.ts",
        "title(\"Save file\");\nlabel(\"Save file!\");\n",
    )])?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let err = stderr(&output);
    assert!(err.contains("note: no .extractrc.json found"));
    assert!(err.contains("dialogs  1 key (dialogs)"));
    assert!(err.contains("warning: 1 key was overwritten"));

    Ok(())
}

#[test]
fn test_extract_missing_root_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["--root", "does-not-exist"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Source root does not exist"));
    assert!(!test.root().join("translation-report.txt").exists());

    Ok(())
}

#[test]
fn test_extract_non_utf8_source_is_decoded() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::write(
        test.root().join("legacy.ts"),
        b"// caf\xe9 \xff\xfe\nopen(\"Open File\");\n",
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("translation-report.txt")?,
        "legacy.ts:2 - [quoted] \"Open File\" -> open_file"
    );

    Ok(())
}

#[test]
fn test_extract_skips_hidden_entries() -> Result<()> {
    let test = CliTest::with_files(&[
        (".storybook/preview.ts", "title(\"Story title\");\n"),
        (".eslintrc.ts", "rule(\"Lint message\");\n"),
        ("src/app.tsx", "<h2>Welcome back</h2>\n"),
    ])?;

    let output = test.extract_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("translation-report.txt")?,
        "src/app.tsx:1 - [markup] \"Welcome back\" -> welcome_back"
    );

    Ok(())
}

#[test]
fn test_extract_shared_namespace_name_counts_distinct_catalogs() -> Result<()> {
    let test = CliTest::with_files(&[
        ("a/common/one.ts", "x(\"First message\");\n"),
        ("b/common/two.ts", "y(\"Second message\");\n"),
    ])?;

    let output = test.extract_command().arg("-v").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(stdout(&output).contains("wrote 2 catalogs"));
    assert!(stderr(&output).contains("warning: 2 catalog files were written by more than one namespace"));
    assert_eq!(
        read_json(&test, "locales/en/common.json")?,
        json!({ "second_message": "Second message" })
    );

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_files(&[(".extractrc.json", r#"{ "ignores": ["[invalid"] }"#)])?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ignores"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
