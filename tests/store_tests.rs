use rattendance::errors::AppError;
use rattendance::store::table::{append_row, ensure_initialized, read_all};
use rattendance::store::{AttendanceRow, StudentRow, TableStore};
use std::fs;

mod common;
use common::{data_rows, day, lines, temp_file};

#[test]
fn test_open_writes_header_once() {
    let path = temp_file("store_header_once", "csv");

    let store = TableStore::<StudentRow>::open(&path).expect("open");
    store
        .append(&StudentRow {
            student_id: "1".into(),
            name: "Cylon".into(),
        })
        .expect("append");

    // Re-opening an existing file must not add a second header.
    TableStore::<StudentRow>::open(&path).expect("reopen");

    assert_eq!(lines(&path), vec!["Student ID,Name", "1,Cylon"]);
}

#[test]
fn test_ensure_initialized_trusts_existing_file() {
    let path = temp_file("store_trust_existing", "csv");
    fs::write(&path, "whatever,was,here\n").unwrap();

    let created = ensure_initialized(path.as_ref(), &["Student ID", "Name"]).expect("init");

    assert!(!created);
    assert_eq!(lines(&path), vec!["whatever,was,here"]);
}

#[test]
fn test_attendance_header_and_presence_literals() {
    let path = temp_file("store_presence", "csv");
    let store = TableStore::<AttendanceRow>::open(&path).expect("open");

    for (id, present) in [("1", true), ("2", false)] {
        store
            .append(&AttendanceRow {
                student_id: id.into(),
                name: format!("Name {id}"),
                date: day(2025, 9, 1),
                present,
            })
            .expect("append");
    }

    assert_eq!(lines(&path)[0], "Student ID,Name,Date,Present");
    assert_eq!(
        data_rows(&path),
        vec!["1,Name 1,2025-09-01,Yes", "2,Name 2,2025-09-01,No"]
    );

    let rows: Vec<AttendanceRow> = store
        .rows()
        .expect("rows")
        .collect::<Result<_, _>>()
        .expect("parse");
    assert!(rows[0].present);
    assert!(!rows[1].present);
    assert_eq!(rows[1].date, day(2025, 9, 1));
}

#[test]
fn test_read_all_rereads_from_the_top() {
    let path = temp_file("store_reread", "csv");
    let store = TableStore::<StudentRow>::open(&path).expect("open");

    store
        .append(&StudentRow {
            student_id: "1".into(),
            name: "Cylon".into(),
        })
        .unwrap();
    assert_eq!(store.count().unwrap(), 1);

    store
        .append(&StudentRow {
            student_id: "2".into(),
            name: "Jarey".into(),
        })
        .unwrap();
    assert_eq!(store.count().unwrap(), 2);

    let ids: Vec<String> = read_all::<StudentRow>(path.as_ref())
        .unwrap()
        .map(|r| r.unwrap().student_id)
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_names_with_commas_survive() {
    let path = temp_file("store_commas", "csv");
    let store = TableStore::<StudentRow>::open(&path).expect("open");

    store
        .append(&StudentRow {
            student_id: "7".into(),
            name: "Dela Cruz, Juan".into(),
        })
        .unwrap();

    let row = store.rows().unwrap().next().unwrap().unwrap();
    assert_eq!(row.name, "Dela Cruz, Juan");
}

#[test]
fn test_append_to_missing_file_fails() {
    let path = temp_file("store_missing", "csv");

    let err = append_row(
        path.as_ref(),
        &StudentRow {
            student_id: "1".into(),
            name: "Cylon".into(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_open_in_missing_directory_fails() {
    let mut path = std::env::temp_dir();
    path.push("rattendance_no_such_dir");
    path.push("nested");
    path.push("students.csv");

    assert!(TableStore::<StudentRow>::open(&path).is_err());
}

#[test]
fn test_malformed_presence_is_an_error() {
    let path = temp_file("store_bad_presence", "csv");
    fs::write(
        &path,
        "Student ID,Name,Date,Present\n1,Cylon,2025-09-01,Maybe\n",
    )
    .unwrap();

    let store = TableStore::<AttendanceRow>::open(&path).expect("open");
    let first = store.rows().unwrap().next().unwrap();

    assert!(first.is_err());
}
