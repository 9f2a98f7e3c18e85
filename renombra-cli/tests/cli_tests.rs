use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const REVIEW_FOLDER: &str = "Revisión manual";

fn renombra() -> Command {
    let mut cmd = Command::cargo_bin("renombra").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    renombra()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rename TMDB report files by pattern and embedded date",
        ));
}

#[test]
fn test_version_subcommand() {
    renombra()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("renombra 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    renombra()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"renombra","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_run_requires_directory() {
    renombra()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments"));
}

#[test]
fn test_run_missing_directory_exits_with_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    renombra()
        .arg("run")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_run_normalize_collision_exits_with_filesystem_error() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a_b").write_str("file").unwrap();
    temp_dir.child("a b").create_dir_all().unwrap();
    temp_dir.child("a b").child("keep.txt").write_str("kept").unwrap();

    let assert = renombra()
        .args(["--no-color", "run"])
        .arg(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("destination already exists"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("destination already exists").count(), 1);

    temp_dir.child("a b").assert(predicate::path::is_dir());
    temp_dir.child("a b").child("keep.txt").assert("kept");
    temp_dir.child("a_b").assert("file");
}

#[test]
fn test_run_review_name_taken_by_file_exits_with_filesystem_error() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child(REVIEW_FOLDER).write_str("not a folder").unwrap();

    renombra()
        .args(["--no-color", "run"])
        .arg(temp_dir.path())
        .assert()
        .code(3);

    temp_dir.child(REVIEW_FOLDER).assert("not a folder");
}

#[test]
fn test_run_renames_and_reports() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("4_Calidad_exportacion_02_agosto_2024_05_hrs.xlsx")
        .write_str("data")
        .unwrap();
    temp_dir.child("unrelated_report.docx").write_str("x").unwrap();

    renombra()
        .args(["--no-color", "run"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Renamed: 4_Calidad_exportacion_02_agosto_2024_05_hrs.xlsx -> 4 Calidad exportacion 02 agosto 2024 05 hrs.xlsx",
        ))
        .stdout(predicate::str::contains(
            "4 Calidad exportacion 02 agosto 2024 05 hrs.xlsx -> Exportación TMDB 2024-08-02 0500hrs.xlsx",
        ))
        .stdout(predicate::str::contains("Files renamed: 1"))
        .stdout(predicate::str::contains("Files moved to manual review: 1"));

    temp_dir
        .child("Exportación TMDB 2024-08-02 0500hrs.xlsx")
        .assert("data");
    temp_dir
        .child(REVIEW_FOLDER)
        .child("unrelated report.docx")
        .assert(predicate::path::exists());
}

#[test]
fn test_run_dry_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("7 Crudo reposado 02-08-24 0200hrs.pdf")
        .write_str("x")
        .unwrap();

    renombra()
        .args(["--no-color", "run", "--dry-run"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: no files were changed."))
        .stdout(predicate::str::contains(
            "7 Crudo reposado 02-08-24 0200hrs.pdf -> TMDB Crudo reposado 2024-08-02 0200hrs.pdf",
        ));

    temp_dir
        .child("7 Crudo reposado 02-08-24 0200hrs.pdf")
        .assert(predicate::path::exists());
    temp_dir
        .child(REVIEW_FOLDER)
        .assert(predicate::path::missing());
}

#[test]
fn test_run_quiet_prints_only_summary() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("unrelated.txt").write_str("x").unwrap();

    renombra()
        .args(["--no-color", "run", "--quiet"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing").not())
        .stdout(predicate::str::contains("Files moved to manual review: 1"));
}

#[test]
fn test_run_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("RDI LAB ID INFORME DE LINEAS 02-08-2024 1600 horas.pdf")
        .write_str("x")
        .unwrap();

    let output = renombra()
        .args(["run", "--output", "json"])
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "run");
    assert_eq!(json["summary"]["renamed"], 1);
    assert_eq!(json["outcomes"][0]["state"], "renamed");
    assert_eq!(
        json["outcomes"][0]["to"],
        "INFORME DIARIO DE LÍNEAS 2024-08-02 1600hrs.pdf"
    );
    assert_eq!(json["outcomes"][0]["date"]["kind"], "formatted");
}

#[test]
fn test_run_skip_normalize_keeps_underscores() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("7_Crudo_reposado.pdf").write_str("x").unwrap();

    renombra()
        .args(["--no-color", "run", "--skip-normalize"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalizing").not());

    temp_dir
        .child(REVIEW_FOLDER)
        .child("7_Crudo_reposado.pdf")
        .assert(predicate::path::exists());
}

#[test]
fn test_check_command() {
    renombra()
        .args(["check", "4 Calidad exportacion 02 agosto 2024 05 hrs.xlsx", "otro.docx"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  pattern:    4 Calidad exportacion -> Exportación TMDB",
        ))
        .stdout(predicate::str::contains(
            "  date:       02 agosto 2024 05 hrs -> 2024-08-02 0500hrs",
        ))
        .stdout(predicate::str::contains(
            "  new name:   Exportación TMDB 2024-08-02 0500hrs.xlsx",
        ))
        .stdout(predicate::str::contains(
            "  pattern:    none, would move to manual review",
        ));
}

#[test]
fn test_check_requires_names() {
    renombra().arg("check").assert().failure();
}

#[test]
fn test_debug_flag_logs_to_stderr() {
    renombra()
        .args(["--debug", "check", "7 Crudo reposado 02-08-24 0200hrs.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("date template matched"));
}
