use grade_generator::{
    Category, GradeSession, PersistenceError, load_grades_from_csv, load_summary_from_json,
    read_grades_csv, save_grades_to_csv, save_summary_to_json, write_grades_csv,
};
use std::fs;
use tempfile::NamedTempFile;

fn build_sample_session() -> GradeSession {
    let mut session = GradeSession::new();
    session
        .try_add_entry("Quiz1", Category::Formative, 80.0, 20.0)
        .unwrap();
    session
        .try_add_entry("Lab, part 2", Category::Formative, 72.25, 12.5)
        .unwrap();
    session
        .try_add_entry("Final \"Exam\"", Category::Summative, 64.0, 40.0)
        .unwrap();
    session
}

#[test]
fn csv_layout_matches_export_format() {
    let session = build_sample_session();
    let mut buf = Vec::new();
    write_grades_csv(session.entries(), &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Assignment,Category,Grade,Weight",
            "Quiz1,FA,80,20.0",
            "\"Lab, part 2\",FA,72.25,12.5",
            "\"Final \"\"Exam\"\"\",SA,64,40.0",
        ]
    );
}

#[test]
fn csv_round_trip_preserves_entries_in_order() {
    let session = build_sample_session();
    let file = NamedTempFile::new().unwrap();

    save_grades_to_csv(session.entries(), file.path()).unwrap();
    let loaded = load_grades_from_csv(file.path()).unwrap();

    assert_eq!(loaded.len(), session.entries().len());
    for (original, loaded) in session.entries().iter().zip(&loaded) {
        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.category, original.category);
        assert_eq!(loaded.weight, original.weight);
        assert_eq!(loaded.score, original.score);
    }
}

#[test]
fn empty_session_still_writes_header() {
    let file = NamedTempFile::new().unwrap();
    save_grades_to_csv(&[], file.path()).unwrap();

    let text = fs::read_to_string(file.path()).unwrap();
    assert_eq!(text.trim_end(), "Assignment,Category,Grade,Weight");
    assert!(load_grades_from_csv(file.path()).unwrap().is_empty());
}

#[test]
fn saving_overwrites_previous_export() {
    let file = NamedTempFile::new().unwrap();
    let session = build_sample_session();
    save_grades_to_csv(session.entries(), file.path()).unwrap();

    let mut smaller = GradeSession::new();
    smaller
        .try_add_entry("Only", Category::Summative, 90.0, 10.0)
        .unwrap();
    save_grades_to_csv(smaller.entries(), file.path()).unwrap();

    let loaded = load_grades_from_csv(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Only");
}

#[test]
fn import_rejects_unknown_category() {
    let csv = "Assignment,Category,Grade,Weight\nQuiz,XX,80,10.0\n";
    let err = read_grades_csv(csv.as_bytes()).unwrap_err();
    match err {
        PersistenceError::InvalidData(msg) => {
            assert!(msg.contains("row 1"), "{msg}");
            assert!(msg.contains("Category"), "{msg}");
        }
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn import_rejects_out_of_range_grade() {
    let csv = "Assignment,Category,Grade,Weight\nQuiz,FA,80,10.0\nTest,SA,140,10.0\n";
    let err = read_grades_csv(csv.as_bytes()).unwrap_err();
    match err {
        PersistenceError::InvalidData(msg) => {
            assert!(msg.contains("row 2"), "{msg}");
            assert!(msg.contains("Grade must be between 0 and 100."), "{msg}");
        }
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn import_reports_missing_columns_as_csv_error() {
    let csv = "Assignment,Category\nQuiz,FA\n";
    let err = read_grades_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, PersistenceError::Csv(_)), "{err:?}");
}

#[test]
fn summary_json_round_trip() {
    let summary = build_sample_session().finalize();
    let file = NamedTempFile::new().unwrap();

    save_summary_to_json(&summary, file.path()).unwrap();
    let loaded = load_summary_from_json(file.path()).unwrap();
    assert_eq!(loaded.status, summary.status);
    assert_eq!(loaded.formative_passed, summary.formative_passed);
    assert!((loaded.total_grade - summary.total_grade).abs() < 1e-9);
    assert!((loaded.gpa_points - summary.gpa_points).abs() < 1e-9);
    assert_eq!(loaded.entries.len(), summary.entries.len());
    assert_eq!(loaded.entries[1].name, "Lab, part 2");

    let raw = fs::read_to_string(file.path()).unwrap();
    assert!(raw.contains("\"status\": \"FAILED\""), "{raw}");
    assert!(raw.contains("\"category\": \"FA\""), "{raw}");
}

#[test]
fn loading_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_grades_from_csv(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, PersistenceError::Io(_)));
}
