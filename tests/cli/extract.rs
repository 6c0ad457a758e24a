use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const OUTPUT: &str = "I18N_EXTRACTED_KEYS.json";

const ACCUEIL_PAGE: &str = r#"
export function Accueil() {
    return (
        <main>
            <h1>Bienvenue à bord</h1>
            <input placeholder="Votre adresse électronique" />
            <img alt="Thème sombre" src="/dark.png" />
            <button>Réserver</button>
            <p className="intro">Découvrez nos événements</p>
        </main>
    );
}
"#;

#[test]
fn test_extract_writes_catalog() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let catalog = test.read_file(OUTPUT)?;
    assert_snapshot!(catalog.trim_end(), @r#"
    {
      "pages.common.bienvenue_a_bord": {
        "fr": "Bienvenue à bord",
        "en": "Welcome"
      },
      "pages.common.decouvrez_nos_evenements": {
        "fr": "Découvrez nos événements",
        "en": "Discover"
      },
      "pages.common.reserver": {
        "fr": "Réserver",
        "en": "Book"
      },
      "pages.common.theme_sombre": {
        "fr": "Thème sombre",
        "en": "Thème sombre"
      },
      "pages.common.votre_adresse_electronique": {
        "fr": "Votre adresse électronique",
        "en": "Address"
      }
    }
    "#);

    let stdout = stdout(&output);
    assert!(stdout.contains("Scanned 1 source file in ./src/pages\n"));
    assert!(stdout.contains("Extracted 5 unique keys\n"));
    assert!(stdout.contains("  - need translation: 1\n"));
    assert!(stdout.contains("Wrote 5 keys to I18N_EXTRACTED_KEYS.json\n"));
    assert!(stdout.contains("Preview:\n"));

    Ok(())
}

#[test]
fn test_extract_is_deterministic() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file(
        "src/pages/admin/Tableau.tsx",
        r#"<section title="Réglages avancés"><h2>Créer un compte</h2><p>Créer un compte</p></section>"#,
    )?;

    test.extract_command().output()?;
    let first = test.read_file(OUTPUT)?;
    test.extract_command().output()?;
    let second = test.read_file(OUTPUT)?;

    assert_eq!(first, second);
    assert!(first.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_empty_source_root_succeeds() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/pages/README.md", "Rien à extraire")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(OUTPUT)?, "{}\n");
    let stdout = stdout(&output);
    assert!(stdout.contains("Scanned 0 source files"));
    assert!(stdout.contains("Extracted 0 unique keys"));
    assert!(!stdout.contains("Preview:"));

    Ok(())
}

#[test]
fn test_missing_source_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error: Source root"), "stderr: {}", stderr);
    assert!(stderr.contains("does not exist"));
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file(".harvestrc.json", r#"{ "targetLocale": "fr" }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("targetLocale"));

    Ok(())
}

#[test]
fn test_same_text_in_two_files_is_one_entry() -> Result<()> {
    let test = CliTest::with_file("src/pages/A.tsx", r#"<h1>Bienvenue à bord</h1>"#)?;
    test.write_file("src/pages/B.tsx", r#"const titre = "Bienvenue à bord";"#)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    let json = test.read_json(OUTPUT)?;
    let entries = json.as_object().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(json["pages.common.bienvenue_a_bord"]["fr"], "Bienvenue à bord");
    assert!(stdout(&output).contains("  - collisions merged: 1\n"));

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;

    let output = test
        .extract_command()
        .args(["--dry-run", "--locales-dir", "locales"])
        .output()?;

    assert!(output.status.success());
    assert!(!test.root().join(OUTPUT).exists());
    assert!(!test.root().join("locales").exists());
    let stdout = stdout(&output);
    assert!(stdout.contains("Dry run: would write 5 keys to I18N_EXTRACTED_KEYS.json"));
    assert!(stdout.contains("Would merge into locale files:"));

    Ok(())
}

#[test]
fn test_existing_catalog_excludes_covered_text() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file(
        "locales/fr.json",
        r#"{ "booking": { "cta": "Réserver" }, "pages": { "common": { "theme_sombre": "Mode sombre" } } }"#,
    )?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "existingCatalogs": ["locales/fr.json"] }"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    let json = test.read_json(OUTPUT)?;
    assert!(json.get("pages.common.reserver").is_none());
    assert!(json.get("pages.common.theme_sombre").is_none());
    assert_eq!(json.as_object().unwrap().len(), 3);
    assert!(stdout(&output).contains("  - already covered: 2\n"));

    Ok(())
}

#[test]
fn test_locales_dir_keeps_existing_values() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file(
        "locales/en.json",
        r#"{ "pages": { "common": { "reserver": "Reserve a seat" } } }"#,
    )?;

    let output = test
        .extract_command()
        .args(["--locales-dir", "locales"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let fr = test.read_json("locales/fr.json")?;
    assert_eq!(fr["pages"]["common"]["reserver"], "Réserver");
    assert_eq!(fr["pages"]["common"]["theme_sombre"], "Thème sombre");

    let en = test.read_json("locales/en.json")?;
    assert_eq!(en["pages"]["common"]["reserver"], "Reserve a seat");
    assert_eq!(en["pages"]["common"]["bienvenue_a_bord"], "Welcome");

    let stdout = stdout(&output);
    assert!(stdout.contains("locales/fr.json: 5 added, 0 kept"));
    assert!(stdout.contains("locales/en.json: 4 added, 1 kept"));

    Ok(())
}

#[test]
fn test_verbose_lists_fragments_per_file() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", r#"<h1>Bienvenue à bord</h1>"#)?;

    let output = test.extract_command().arg("-v").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  --> Accueil.tsx: 1 fragment (tag-body 1), 1 text, 1 new\n"));

    Ok(())
}

#[test]
fn test_broken_locale_file_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", r#"<h1>Bienvenue à bord</h1>"#)?;
    test.write_file("locales/en.json", "{ not json")?;

    let output = test
        .extract_command()
        .args(["--locales-dir", "locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("locales/en.json"), "stderr: {}", stderr(&output));
    assert!(!test.root().join(OUTPUT).exists());
    assert!(!test.root().join("locales/fr.json").exists());
    assert_eq!(test.read_file("locales/en.json")?, "{ not json");

    Ok(())
}

#[test]
fn test_user_dictionary_overrides_builtin() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file(
        "i18n/dictionary.json",
        r#"{ "Thème sombre": "Dark theme", "Réserver": "Reserve" }"#,
    )?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "dictionary": "i18n/dictionary.json" }"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    let json = test.read_json(OUTPUT)?;
    assert_eq!(json["pages.common.theme_sombre"]["en"], "Dark theme");
    assert_eq!(json["pages.common.reserver"]["en"], "Reserve");
    assert_eq!(json["pages.common.bienvenue_a_bord"]["en"], "Welcome");
    assert!(stdout(&output).contains("  - need translation: 0\n"));

    Ok(())
}

#[test]
fn test_broken_dictionary_is_a_warning() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_file("dictionary.json", "{ broken")?;
    test.write_file(".harvestrc.json", r#"{ "dictionary": "dictionary.json" }"#)?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: skipped dictionary file"));
    let json = test.read_json(OUTPUT)?;
    assert_eq!(json["pages.common.reserver"]["en"], "Book");

    Ok(())
}

#[test]
fn test_unreadable_source_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;
    test.write_bytes("src/pages/Casse.tsx", &[0xff, 0xfe, 0x00, b'<', b'p', b'>'])?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: 1 file could not be read (use -v for details)"));
    let stdout = stdout(&output);
    assert!(stdout.contains("Scanned 2 source files"));
    assert!(stdout.contains("  - unreadable: 1\n"));
    assert_eq!(test.read_json(OUTPUT)?.as_object().unwrap().len(), 5);

    let verbose = test.extract_command().arg("-v").output()?;
    assert!(stderr(&verbose).contains("Casse.tsx"));

    Ok(())
}

#[test]
fn test_preview_limit() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", ACCUEIL_PAGE)?;

    let output = test.extract_command().args(["--preview", "2"]).output()?;

    let stdout = stdout(&output);
    assert!(stdout.contains("  pages.common.bienvenue_a_bord"));
    assert!(stdout.contains("Bienvenue à bord \u{2192} Welcome"));
    assert!(!stdout.contains("  pages.common.reserver"));
    assert!(stdout.contains("\u{2026} and 3 more\n"));

    Ok(())
}

#[test]
fn test_rejects_code_and_short_text() -> Result<()> {
    let test = CliTest::with_file(
        "src/pages/Code.tsx",
        r#"
const a = "é";
const b = "{ état: 1 }";
const c = "pages.accueil.titre_é";
const d = "() => déjà";
const e = "Véritable phrase";
"#,
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success());
    let json = test.read_json(OUTPUT)?;
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["pages.common.veritable_phrase"]);

    Ok(())
}

#[test]
fn test_test_files_are_ignored() -> Result<()> {
    let test = CliTest::with_file("src/pages/Accueil.tsx", r#"<h1>Bienvenue à bord</h1>"#)?;
    test.write_file("src/pages/Accueil.test.tsx", r#"<h1>Scénario de test</h1>"#)?;

    let output = test.extract_command().output()?;

    assert!(stdout(&output).contains("Scanned 1 source file in"));
    assert!(test.read_json(OUTPUT)?.get("pages.common.scenario_de_test").is_none());

    Ok(())
}

#[test]
fn test_output_and_source_root_overrides() -> Result<()> {
    let test = CliTest::with_file("app/Profil.tsx", r#"<label>Prénom</label>"#)?;

    let output = test
        .extract_command()
        .args(["--source-root", "app", "--output", "out/keys.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let json = test.read_json("out/keys.json")?;
    assert_eq!(json["pages.common.prenom"]["fr"], "Prénom");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
