//! Loading catalogs from a directory on disk.

use std::fs;

use tgym_i18n::{DEFAULT_LOCALE, I18nError, LocaleSource, Localizer, TextProvider};

#[test]
fn loads_requested_locale_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fr.json"), r#"{"rep_counter": "Répétition : {}"}"#).unwrap();

    let l = Localizer::resolve(&LocaleSource::Directory(dir.path().to_path_buf()), "fr");
    assert_eq!(l.language(), "fr");
    assert_eq!(l.lookup_formatted("rep_counter", &[&2]), "Répétition : 2");
}

#[test]
fn missing_locale_falls_back_to_dir_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": "Custom Title"}"#).unwrap();

    let l = Localizer::resolve(&LocaleSource::Directory(dir.path().to_path_buf()), "de");
    assert_eq!(l.language(), DEFAULT_LOCALE);
    assert_eq!(l.lookup("title"), "Custom Title");
}

#[test]
fn empty_dir_falls_back_to_embedded() {
    let dir = tempfile::tempdir().unwrap();

    let l = Localizer::resolve(&LocaleSource::Directory(dir.path().to_path_buf()), "de");
    assert_eq!(l.language(), DEFAULT_LOCALE);
    let embedded = Localizer::embedded(DEFAULT_LOCALE).unwrap();
    assert_eq!(l.lookup("title"), embedded.lookup("title"));
}

#[test]
fn malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en.json");
    fs::write(&path, "{ broken").unwrap();

    let err = Localizer::from_dir(dir.path(), "en").unwrap_err();
    match err {
        I18nError::Parse { origin, .. } => assert_eq!(origin, path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_file_still_resolves() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), "{ broken").unwrap();

    let l = Localizer::resolve(&LocaleSource::Directory(dir.path().to_path_buf()), "en");
    assert!(l.contains("title"));
}
