use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./src/pages");
    assert_eq!(parsed["extensions"][0], "tsx");
    assert_eq!(parsed["sourceLocale"], "fr");
    assert_eq!(parsed["targetLocale"], "en");
    assert!(
        parsed.get("checkedAttributes").is_some(),
        "Config should have 'checkedAttributes' field"
    );
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .harvestrc.json"));
    assert!(test.root().join(".harvestrc.json").exists());

    let content = test.read_file(".harvestrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".harvestrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .harvestrc.json already exists
    ");

    assert_eq!(test.read_file(".harvestrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("src/pages/Accueil.tsx", r#"<h1>Bienvenue à bord</h1>"#)?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "Extract should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("I18N_EXTRACTED_KEYS.json").exists());

    Ok(())
}
