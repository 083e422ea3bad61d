//! End-to-end tests for edusearch search command
//!
//! These tests run the real binary against a SQLite file seeded in a
//! temporary directory and check:
//! - Result listing and ordering
//! - Argument handling and usage output
//! - Error reporting and exit codes

use assert_cmd::Command;
use edusearch_catalog::{
    Class, ClassRepository, Database, DbConfig, Exam, ExamRepository, ExamType,
};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const USAGE_LINE: &str = "Usage: edusearch search <keyword>";

/// Helper to create a catalog database with a few classes and exams
async fn seed_catalog(dir: &TempDir) -> String {
    let path = dir.path().join("catalog.db");
    let config = DbConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DbConfig::default()
    };

    let db = Database::connect_lazy(&config).expect("Failed to open test database");
    db.apply_schema().await.expect("Failed to create schema");

    let classes = ClassRepository::new(db.clone());
    for (name, weight) in [
        ("Vocabulario sobre Trabajo", 5),
        ("Gramática básica", 3),
        ("Entrevista de trabajo", 2),
    ] {
        classes
            .save(Class::unsaved(name, weight).expect("valid class"))
            .await
            .expect("Failed to insert class");
    }

    let exams = ExamRepository::new(db.clone());
    for (name, exam_type) in [
        ("Examen de Trabajo", ExamType::Selection),
        ("Prueba de gramática", ExamType::Completion),
    ] {
        exams
            .save(Exam::unsaved(name, exam_type).expect("valid exam"))
            .await
            .expect("Failed to insert exam");
    }

    db.close().await;
    format!("sqlite://{}", path.display())
}

/// Helper to build the command with an isolated environment
fn edusearch(dir: &TempDir, database_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("edusearch").unwrap();
    cmd.current_dir(dir.path())
        .env("DATABASE_URL", database_url)
        .env("DB_CONNECT_TIMEOUT", "2")
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_OUTPUT")
        .env_remove("LOG_FORMAT")
        .env_remove("LOG_FILTER");
    cmd
}

#[tokio::test]
async fn test_search_lists_classes_then_exams() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, &url)
        .arg("search")
        .arg("trabajo")
        .assert()
        .success()
        .stdout(
            "Class: Entrevista de trabajo | 2/5\n\
             Class: Vocabulario sobre Trabajo | 5/5\n\
             Exam: Examen de Trabajo | Selección\n",
        );
}

#[tokio::test]
async fn test_global_flags_after_keyword() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, "sqlite://ignored.db")
        .args(["search", "vocabulario", "--verbose", "--database-url", url.as_str()])
        .assert()
        .success()
        .stdout("Class: Vocabulario sobre Trabajo | 5/5\n");
}

#[tokio::test]
async fn test_malformed_env_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;
    fs::write(dir.path().join(".env"), "THIS LINE IS NOT AN ASSIGNMENT\n").unwrap();

    edusearch(&dir, &url)
        .args(["search", "vocabulario"])
        .assert()
        .success()
        .stdout("Class: Vocabulario sobre Trabajo | 5/5\n")
        .stderr(predicate::str::contains("Ignoring unreadable .env file"));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    let lower = edusearch(&dir, &url).args(["search", "trabajo"]).output().unwrap();
    let upper = edusearch(&dir, &url).args(["search", "TRABAJO"]).output().unwrap();

    assert!(lower.status.success());
    assert_eq!(lower.stdout, upper.stdout);
}

#[tokio::test]
async fn test_search_joins_keyword_words() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, &url)
        .args(["search", "Examen", "de"])
        .assert()
        .success()
        .stdout("Exam: Examen de Trabajo | Selección\n");
}

#[tokio::test]
async fn test_search_without_results() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, &url)
        .args(["search", "química"])
        .assert()
        .success()
        .stdout("No results found for: \"química\"\n");
}

#[tokio::test]
async fn test_search_short_keyword() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, &url)
        .args(["search", "ab"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Keyword must be at least 3 characters long",
        ))
        .stdout(predicate::str::contains(USAGE_LINE));
}

#[tokio::test]
async fn test_database_url_flag_overrides_environment() {
    let dir = TempDir::new().unwrap();
    let url = seed_catalog(&dir).await;

    edusearch(&dir, "sqlite://ignored.db")
        .args(["search", "gramática", "--database-url", url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Class: Gramática básica | 3/5"))
        .stdout(predicate::str::contains("Exam: Prueba de gramática | Completación"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();

    edusearch(&dir, "sqlite://unused.db")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(USAGE_LINE))
        .stdout(predicate::str::contains("minimum 3 characters"));
}

#[test]
fn test_search_without_keyword_prints_usage() {
    let dir = TempDir::new().unwrap();

    edusearch(&dir, "sqlite://unused.db")
        .arg("search")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(USAGE_LINE));
}

#[test]
fn test_unknown_command() {
    let dir = TempDir::new().unwrap();

    edusearch(&dir, "sqlite://unused.db")
        .args(["find", "trabajo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: find"))
        .stdout(predicate::str::contains(USAGE_LINE));
}

#[test]
fn test_unreachable_database() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").join("catalog.db");

    edusearch(&dir, &format!("sqlite://{}", missing.display()))
        .args(["search", "trabajo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Database error:"));
}

#[test]
fn test_non_sqlite_url_is_unexpected_error() {
    let dir = TempDir::new().unwrap();

    edusearch(&dir, "mysql://root@localhost/school")
        .args(["search", "trabajo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected error: Configuration error"));
}
