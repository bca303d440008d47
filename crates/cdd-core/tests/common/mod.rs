#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cdd_model::RunContext;
use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Writes `rows` to the first sheet; numeric text becomes a number cell and
/// empty strings leave the cell blank.
pub fn write_xlsx(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row, cells) in rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            let (row, col) = (row as u32, col as u16);
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(number) => sheet.write_number(row, col, number).unwrap(),
                Err(_) => sheet.write_string(row, col, *value).unwrap(),
            };
        }
    }
    workbook.save(path).unwrap();
}

pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn context(out: &TempDir) -> RunContext {
    RunContext::new(run_date())
        .with_project("Covalent Library")
        .with_chemist("R. Kim")
        .with_batch("B42")
        .with_output_dir(out.path())
}

pub fn output_files(out: &TempDir) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(out.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}
