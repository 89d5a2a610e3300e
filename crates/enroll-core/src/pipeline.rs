//! The record transformation pipeline.
//!
//! Steps run in a fixed order because later steps read columns that earlier
//! steps populate: the canonical identifier composed in step 4 is what step
//! 14 validates, the locality name mapped in step 7 feeds the full address
//! in step 8, and the rename in step 12 must precede the reorder in step 13.
//! Reordering steps is a correctness bug.
//!
//! Only step 1 (required-column presence) is fatal. Every other step is
//! fail-soft: a row-level problem becomes a [`ValidationIssue`] and the row
//! continues with the best-effort value computed so far. Steps 14 and 15 are
//! purely diagnostic and never change an output field.

use std::time::Instant;

use tracing::{debug, info};

use enroll_model::{
    Frame, IssueSeverity, OUTPUT_COLUMNS, OutputRecord, TransformConfig, ValidationIssue,
    ValidationReport,
};
use enroll_standards::{
    RENAME_MAP, REQUIRED_COLUMNS, columns, comuna_name, grade_level, locality_stop_tokens,
};
use enroll_transform::{
    AddressCleaner, PhoneOutcome, compose_course, compose_full_address, compose_run, convert_date,
    format_phone, split_name,
};

use crate::error::{PipelineError, Result};

/// Everything a completed run produces: the typed records, the accumulated
/// issues, and the input row count for the caller's summary.
#[derive(Debug)]
pub struct PipelineOutput {
    pub records: Vec<OutputRecord>,
    pub report: ValidationReport,
    pub input_rows: usize,
}

/// Runs the fixed step sequence over a source frame.
#[derive(Debug)]
pub struct Pipeline {
    config: TransformConfig,
}

impl Pipeline {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn run(&self, source: &Frame) -> Result<PipelineOutput> {
        let start = Instant::now();
        let input_rows = source.row_count();

        // =====================================================================
        // Step 1: required-column presence. The only fatal check.
        // =====================================================================
        check_required_columns(source)?;

        let mut frame = source.clone();
        let mut report = ValidationReport::new();

        // =====================================================================
        // Steps 2-11: per-row value transformations on the working frame.
        // =====================================================================
        debug!("cleaning addresses");
        clean_addresses(&mut frame);
        debug!("uppercasing addresses");
        uppercase_addresses(&mut frame);
        debug!("composing canonical identifiers");
        compose_runs(&mut frame);
        debug!("splitting full names");
        split_names(&mut frame);
        debug!("composing course codes");
        compose_course_codes(&mut frame);
        debug!("mapping locality codes");
        map_comunas(&mut frame, &mut report);
        debug!("composing full addresses");
        compose_full_addresses(&mut frame);
        debug!("injecting run metadata");
        inject_metadata(&mut frame, &self.config, &mut report);
        debug!("converting dates");
        convert_dates(&mut frame, self.config.date_separator, &mut report);
        debug!("formatting contact numbers");
        format_phones(&mut frame, &mut report);

        // =====================================================================
        // Steps 12-13: target schema. Rename, then fix the column order and
        // build the typed records.
        // =====================================================================
        debug!("renaming columns to the target layout");
        rename_columns(&mut frame);
        debug!("reordering columns and building records");
        let records = build_records(&mut frame, &mut report)?;

        // =====================================================================
        // Steps 14-15: diagnostics only. Suppressed by configuration, never
        // by data content.
        // =====================================================================
        if self.config.validate_run {
            debug!("validating identifiers");
            validate_runs(&records, &mut report);
        }
        if self.config.validate_email {
            debug!("validating emails");
            validate_emails(&records, &mut report);
        }

        info!(
            rows = input_rows,
            issues = report.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            duration_ms = start.elapsed().as_millis(),
            "transformation complete"
        );

        Ok(PipelineOutput {
            records,
            report,
            input_rows,
        })
    }
}

fn check_required_columns(frame: &Frame) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !frame.has_column(column))
        .map(|column| (*column).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingColumns { columns: missing })
    }
}

fn clean_addresses(frame: &mut Frame) {
    let cleaner = AddressCleaner::new(locality_stop_tokens());
    frame.update_column(columns::DIRECCION, |_, value| cleaner.clean(value));
}

fn uppercase_addresses(frame: &mut Frame) {
    frame.update_column(columns::DIRECCION, |_, value| value.to_uppercase());
}

/// Merge the check column into the identifier column. The canonical string
/// built here is what step 14 later judges; it is never rewritten.
fn compose_runs(frame: &mut Frame) {
    let checks = column_values(frame, columns::DIGITO_VERIFICADOR);
    frame.update_column(columns::RUT, |row, value| compose_run(value, &checks[row]));
    frame.drop_column(columns::DIGITO_VERIFICADOR);
}

fn split_names(frame: &mut Frame) {
    split_column(
        frame,
        columns::NOMBRES,
        columns::PRIMER_NOMBRE_ALUMNO,
        columns::SEGUNDO_NOMBRE_ALUMNO,
    );
    split_column(
        frame,
        columns::NOMBRE_APODERADO,
        columns::PRIMER_NOMBRE_APODERADO,
        columns::SEGUNDO_NOMBRE_APODERADO,
    );
    split_column(
        frame,
        columns::NOMBRE_APODERADO_SPL,
        columns::PRIMER_NOMBRE_APODERADO_SPL,
        columns::SEGUNDO_NOMBRE_APODERADO_SPL,
    );
}

fn split_column(frame: &mut Frame, source: &str, first_target: &str, second_target: &str) {
    if !frame.has_column(source) {
        return;
    }
    let mut firsts = Vec::with_capacity(frame.row_count());
    let mut seconds = Vec::with_capacity(frame.row_count());
    for row in 0..frame.row_count() {
        let (first, second) = split_name(frame.get(row, source).unwrap_or(""));
        firsts.push(first);
        seconds.push(second);
    }
    frame.push_column_values(first_target, firsts);
    frame.push_column_values(second_target, seconds);
    frame.drop_column(source);
}

fn compose_course_codes(frame: &mut Frame) {
    let grades = column_values(frame, columns::GRADO);
    let letters = column_values(frame, columns::LETRA);
    let courses = grades
        .iter()
        .zip(&letters)
        .map(|(grade, letter)| compose_course(grade, letter))
        .collect();
    frame.push_column_values(columns::CURSO, courses);
}

fn map_comunas(frame: &mut Frame, report: &mut ValidationReport) {
    frame.update_column(columns::COMUNA, |row, value| match comuna_name(value) {
        Some(name) => name.to_string(),
        None => {
            report.record(
                row,
                columns::COMUNA,
                value,
                "unmapped locality code",
                IssueSeverity::Warning,
            );
            value.to_string()
        }
    });
}

fn compose_full_addresses(frame: &mut Frame) {
    let streets = column_values(frame, columns::DIRECCION);
    let localities = column_values(frame, columns::COMUNA);
    let full = streets
        .iter()
        .zip(&localities)
        .map(|(street, locality)| compose_full_address(street, locality))
        .collect();
    frame.push_column_values(columns::DIRECCION_COMPLETA, full);
    frame.drop_column(columns::DIRECCION);
}

fn inject_metadata(frame: &mut Frame, config: &TransformConfig, report: &mut ValidationReport) {
    frame.push_column(columns::RBD, &config.rbd.to_string());
    frame.push_column(columns::YEAR, &config.year.to_string());
    frame.push_column(columns::LOCAL, &config.local);
    let grades = column_values(frame, columns::GRADO);
    let levels = grades
        .iter()
        .enumerate()
        .map(|(row, grade)| match grade_level(grade) {
            Some(level) => level.to_string(),
            None => {
                report.record(
                    row,
                    columns::GRADO,
                    grade,
                    "unmapped grade code",
                    IssueSeverity::Warning,
                );
                grade.clone()
            }
        })
        .collect();
    frame.push_column_values(columns::NIVEL, levels);
}

fn convert_dates(frame: &mut Frame, separator: char, report: &mut ValidationReport) {
    for column in [columns::FECHA_NACIMIENTO, columns::FECHA_MATRICULA] {
        frame.update_column(column, |row, value| match convert_date(value, separator) {
            Ok(iso) => iso,
            Err(error) => {
                report.record(row, column, value, error.to_string(), IssueSeverity::Error);
                String::new()
            }
        });
    }
}

fn format_phones(frame: &mut Frame, report: &mut ValidationReport) {
    for column in [columns::CELULAR_APODERADO, columns::CELULAR_SPL] {
        frame.update_column(column, |row, value| {
            let outcome = format_phone(value);
            if matches!(outcome, PhoneOutcome::Invalid { .. }) {
                report.record(
                    row,
                    column,
                    value,
                    "malformed contact number, expected 9 digits starting with 9",
                    IssueSeverity::Warning,
                );
            }
            outcome.value().to_string()
        });
    }
}

fn rename_columns(frame: &mut Frame) {
    for (source, target) in RENAME_MAP {
        frame.rename_column(source, target);
    }
}

const INTEGER_COLUMNS: [&str; 4] = ["rbd", "year", "tutor1Celular", "tutor2Celular"];

/// Fix the 29-column order and build the typed records. Target columns the
/// source never carried are filled with typed defaults so every record has
/// the full field set regardless of input content.
fn build_records(frame: &mut Frame, report: &mut ValidationReport) -> Result<Vec<OutputRecord>> {
    for column in OUTPUT_COLUMNS {
        if !frame.has_column(column) {
            let fill = if INTEGER_COLUMNS.contains(&column) {
                "0"
            } else {
                ""
            };
            frame.push_column(column, fill);
        }
    }
    for column in INTEGER_COLUMNS {
        frame.update_column(column, |row, value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                "0".to_string()
            } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
                trimmed.to_string()
            } else {
                report.record(
                    row,
                    column,
                    value,
                    "expected an integer value",
                    IssueSeverity::Warning,
                );
                "0".to_string()
            }
        });
    }
    let ordered = frame.select(&OUTPUT_COLUMNS)?;
    Ok((0..ordered.row_count())
        .map(|row| OutputRecord::from_frame_row(&ordered, row))
        .collect())
}

fn validate_runs(records: &[OutputRecord], report: &mut ValidationReport) {
    for (row, record) in records.iter().enumerate() {
        let fields = [
            ("estudianteRun", &record.estudiante_run),
            ("tutor1Run", &record.tutor1_run),
            ("tutor2Run", &record.tutor2_run),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                continue;
            }
            match enroll_validate::validate_text(value) {
                None => report.push(ValidationIssue {
                    row,
                    field: field.to_string(),
                    value: value.clone(),
                    message: "malformed national identifier".to_string(),
                    severity: IssueSeverity::Error,
                }),
                Some(result) if !result.valid => report.push(ValidationIssue {
                    row,
                    field: field.to_string(),
                    value: value.clone(),
                    message: "invalid check digit".to_string(),
                    severity: IssueSeverity::Error,
                }),
                Some(_) => {}
            }
        }
    }
}

fn validate_emails(records: &[OutputRecord], report: &mut ValidationReport) {
    for (row, record) in records.iter().enumerate() {
        let fields = [
            ("estudianteEmail", &record.estudiante_email),
            ("tutor1Email", &record.tutor1_email),
            ("tutor2Email", &record.tutor2_email),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                continue;
            }
            if !enroll_validate::is_valid_email(value) {
                report.record(
                    row,
                    field,
                    value,
                    "invalid email format",
                    IssueSeverity::Warning,
                );
            }
        }
    }
}

fn column_values(frame: &Frame, column: &str) -> Vec<String> {
    (0..frame.row_count())
        .map(|row| frame.get(row, column).unwrap_or("").to_string())
        .collect()
}
