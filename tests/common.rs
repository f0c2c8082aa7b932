#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real configuration.
pub fn rat() -> Command {
    let home = test_home();
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Private HOME so `Config::load()` never sees a real config file.
fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("rattendance_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Unique student/attendance table paths inside the system temp dir,
/// with any leftovers from a previous run removed.
pub fn setup_tables(name: &str) -> (String, String) {
    let students = temp_file(&format!("{name}_students"), "csv");
    let attendance = temp_file(&format!("{name}_attendance"), "csv");
    (students, attendance)
}

pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// All lines of a table file, header included.
pub fn lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read table")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Data lines of a table file (header excluded).
pub fn data_rows(path: &str) -> Vec<String> {
    lines(path).into_iter().skip(1).collect()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Expected listing line for one row.
pub fn listing_row(id: &str, name: &str, date: &str, present: &str) -> String {
    format!("{:<12}{:<20}{:<12}{:<10}", id, name, date, present)
}
