use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::info;

use enroll_core::Pipeline;
use enroll_ingest::read_enrollment_csv;
use enroll_model::TransformConfig;
use enroll_report::{IssueReport, write_issue_report_json, write_output_csv};

use crate::cli::{TransformArgs, ValidateArgs};
use crate::types::RunOutcome;

pub fn run_transform(args: &TransformArgs) -> Result<RunOutcome> {
    let mut config = TransformConfig::default()
        .with_rbd(args.rbd)
        .with_year(args.year)
        .with_local(args.local.clone())
        .with_date_separator(args.date_separator)
        .with_delimiter(delimiter_byte(args.delimiter)?);
    if args.skip_validation {
        config = config.skip_validation();
    }
    let delimiter = config.delimiter;

    let frame = read_enrollment_csv(&args.input, delimiter)
        .with_context(|| format!("read {}", args.input.display()))?;
    let output = Pipeline::new(config).run(&frame)?;

    let mut output_path = None;
    let mut issue_report_path = None;
    if args.dry_run {
        info!(rows = output.records.len(), "dry run, writing nothing");
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_output_csv(&path, &output.records, delimiter)
            .with_context(|| format!("write {}", path.display()))?;
        if !output.report.is_empty() {
            let issues_path = path.with_extension("issues.json");
            let summary = IssueReport::new(output.input_rows, output.records.len(), &output.report);
            write_issue_report_json(&issues_path, &summary)
                .with_context(|| format!("write {}", issues_path.display()))?;
            issue_report_path = Some(issues_path);
        }
        output_path = Some(path);
    }

    Ok(RunOutcome {
        input_rows: output.input_rows,
        output_rows: output.records.len(),
        report: output.report,
        output_path,
        issue_report_path,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<RunOutcome> {
    let config = TransformConfig::default()
        .with_date_separator(args.date_separator)
        .with_delimiter(delimiter_byte(args.delimiter)?);
    let delimiter = config.delimiter;

    let frame = read_enrollment_csv(&args.input, delimiter)
        .with_context(|| format!("read {}", args.input.display()))?;
    let output = Pipeline::new(config).run(&frame)?;

    Ok(RunOutcome {
        input_rows: output.input_rows,
        output_rows: output.records.len(),
        report: output.report,
        output_path: None,
        issue_report_path: None,
    })
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
}

/// Default output name next to the input: `<timestamp>-alumnos-sn.csv`.
fn default_output_path(input: &Path) -> PathBuf {
    let name = format!("{}-alumnos-sn.csv", Local::now().format("%Y%m%d-%H%M%S"));
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_byte_accepts_ascii_only() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte(',').unwrap(), b',');
        assert!(delimiter_byte('§').is_err());
    }

    #[test]
    fn default_output_sits_next_to_the_input() {
        let path = default_output_path(Path::new("/data/export/matricula.csv"));
        assert_eq!(path.parent(), Some(Path::new("/data/export")));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("-alumnos-sn.csv"), "{name}");
    }
}
