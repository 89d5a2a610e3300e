//! End-to-end tests for the transformation pipeline.

use enroll_core::{Pipeline, PipelineError};
use enroll_model::{Frame, IssueSeverity, TransformConfig};

const SOURCE_COLUMNS: [&str; 25] = [
    "Rut",
    "Digito verificador",
    "Nombres",
    "Apellido Paterno",
    "Apellido Materno",
    "Sexo",
    "Fecha de Nacimiento",
    "Direccion",
    "Comuna",
    "Grado",
    "Letra",
    "Email Estudiante",
    "Fecha de Matrícula",
    "Nombre Apoderado",
    "Apellido Paterno Apo.",
    "Apellido Materno Apo.",
    "Rut Apoderado",
    "Email Apoderado",
    "Celular Apoderado",
    "Nombre Apoderado SPL",
    "Apellido Paterno Apo. SPL",
    "Apellido Materno Apo. SPL",
    "Rut Apoderado SPL",
    "Email Apoderado SPL",
    "Celular SPL",
];

/// One well-formed source row; tests override individual cells.
fn base_row() -> Vec<String> {
    [
        "12345678",
        "5",
        "JUAN PABLO ANDRES",
        "PEREZ",
        "LOPEZ",
        "M",
        "01-01-2010",
        "Calle Principal 123, La Serena",
        "4101",
        "7",
        "A",
        "juan@test.com",
        "01-03-2025",
        "PEDRO ANTONIO",
        "PEREZ",
        "SILVA",
        "11111111-1",
        "pedro@test.com",
        "987654321",
        "",
        "",
        "",
        "",
        "",
        "",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn set(row: &mut [String], column: &str, value: &str) {
    let idx = SOURCE_COLUMNS
        .iter()
        .position(|name| *name == column)
        .expect("known column");
    row[idx] = value.to_string();
}

fn frame_of(rows: Vec<Vec<String>>) -> Frame {
    Frame::from_rows(SOURCE_COLUMNS.iter().map(|c| (*c).to_string()).collect(), rows)
        .expect("well-formed test frame")
}

fn pipeline() -> Pipeline {
    Pipeline::new(TransformConfig::default())
}

#[test]
fn well_formed_row_transforms_cleanly() {
    let output = pipeline().run(&frame_of(vec![base_row()])).unwrap();

    assert_eq!(output.input_rows, 1);
    assert_eq!(output.records.len(), 1);
    assert!(output.report.is_empty(), "{:?}", output.report.issues);

    let record = &output.records[0];
    assert_eq!(record.rbd, 574);
    assert_eq!(record.year, 2025);
    assert_eq!(record.local, "Principal");
    assert_eq!(record.nivel, "7º Básico");
    assert_eq!(record.curso, "7A");
    assert_eq!(record.estudiante_run, "12345678-5");
    assert_eq!(record.estudiante_nombre1, "JUAN");
    assert_eq!(record.estudiante_nombre2, "PABLO");
    assert_eq!(record.estudiante_paterno, "PEREZ");
    assert_eq!(record.fecha_nacimiento, "2010-01-01");
    assert_eq!(record.fecha_matricula, "2025-03-01");
    assert_eq!(record.direccion, "CALLE PRINCIPAL 123, La Serena");
    assert_eq!(record.tutor1_nombre1, "PEDRO");
    assert_eq!(record.tutor1_nombre2, "ANTONIO");
    assert_eq!(record.tutor1_celular, 987_654_321);
    assert_eq!(record.tutor2_nombre1, "");
    assert_eq!(record.tutor2_celular, 0);
}

#[test]
fn three_rows_with_two_problems_keep_all_rows() {
    let clean = base_row();
    let mut unmapped_comuna = base_row();
    set(&mut unmapped_comuna, "Comuna", "9999");
    let mut bad_check_digit = base_row();
    set(&mut bad_check_digit, "Digito verificador", "9");

    let output = pipeline()
        .run(&frame_of(vec![clean, unmapped_comuna, bad_check_digit]))
        .unwrap();

    assert_eq!(output.records.len(), 3);
    assert_eq!(output.report.len(), 2, "{:?}", output.report.issues);

    let comuna_issue = &output.report.issues[0];
    assert_eq!(comuna_issue.row, 1);
    assert_eq!(comuna_issue.field, "Comuna");
    assert_eq!(comuna_issue.severity, IssueSeverity::Warning);

    let run_issue = &output.report.issues[1];
    assert_eq!(run_issue.row, 2);
    assert_eq!(run_issue.field, "estudianteRun");
    assert_eq!(run_issue.value, "12345678-9");
    assert_eq!(run_issue.severity, IssueSeverity::Error);

    // The unmapped code is retained as the string fallback.
    assert_eq!(output.records[1].direccion, "CALLE PRINCIPAL 123, 9999");
    // The canonical identifier composed in step 4 is never rewritten.
    assert_eq!(output.records[2].estudiante_run, "12345678-9");
}

#[test]
fn missing_required_columns_abort_before_output() {
    let mut columns: Vec<String> = SOURCE_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    columns.retain(|name| name != "Comuna" && name != "Letra");
    let mut row = base_row();
    row.truncate(columns.len());
    let frame = Frame::from_rows(columns, vec![row]).unwrap();

    let error = pipeline().run(&frame).unwrap_err();
    match error {
        PipelineError::MissingColumns { columns } => {
            assert_eq!(columns, vec!["Letra".to_string(), "Comuna".to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn row_count_is_always_preserved() {
    let rows: Vec<Vec<String>> = (0..5).map(|_| base_row()).collect();
    let output = pipeline().run(&frame_of(rows)).unwrap();
    assert_eq!(output.records.len(), 5);
    assert_eq!(output.input_rows, 5);
}

#[test]
fn provisional_identifier_passes_with_any_check_character() {
    let mut row = base_row();
    set(&mut row, "Rut", "100123456");
    set(&mut row, "Digito verificador", "Z");

    let output = pipeline().run(&frame_of(vec![row])).unwrap();
    assert!(output.report.is_empty(), "{:?}", output.report.issues);
    assert_eq!(output.records[0].estudiante_run, "100123456-Z");
}

#[test]
fn unparseable_date_leaves_field_empty_and_keeps_row() {
    let mut row = base_row();
    set(&mut row, "Fecha de Nacimiento", "not-a-date");

    let output = pipeline().run(&frame_of(vec![row])).unwrap();
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].fecha_nacimiento, "");
    assert_eq!(output.report.len(), 1);
    assert_eq!(output.report.issues[0].field, "Fecha de Nacimiento");
    assert_eq!(output.report.issues[0].severity, IssueSeverity::Error);
}

#[test]
fn malformed_phone_keeps_best_effort_digits() {
    let mut row = base_row();
    set(&mut row, "Celular Apoderado", "12345");

    let output = pipeline().run(&frame_of(vec![row])).unwrap();
    assert_eq!(output.records[0].tutor1_celular, 12_345);
    assert_eq!(output.report.len(), 1);
    assert_eq!(output.report.issues[0].field, "Celular Apoderado");
    assert_eq!(output.report.issues[0].severity, IssueSeverity::Warning);
}

#[test]
fn invalid_email_is_flagged_not_fatal() {
    let mut row = base_row();
    set(&mut row, "Email Apoderado", "not-an-email");

    let output = pipeline().run(&frame_of(vec![row])).unwrap();
    assert_eq!(output.records.len(), 1);
    assert_eq!(output.report.len(), 1);
    assert_eq!(output.report.issues[0].field, "tutor1Email");
    assert_eq!(output.report.issues[0].severity, IssueSeverity::Warning);
}

#[test]
fn skip_validation_suppresses_semantic_checks_only() {
    let mut row = base_row();
    set(&mut row, "Digito verificador", "9");
    set(&mut row, "Email Apoderado", "not-an-email");

    let config = TransformConfig::default().skip_validation();
    let output = Pipeline::new(config).run(&frame_of(vec![row])).unwrap();
    assert!(output.report.is_empty(), "{:?}", output.report.issues);

    // The fatal check still applies with validation disabled.
    let frame = Frame::from_rows(vec!["Rut".to_string()], vec![vec!["1".to_string()]]).unwrap();
    let config = TransformConfig::default().skip_validation();
    assert!(Pipeline::new(config).run(&frame).is_err());
}

#[test]
fn required_columns_alone_still_produce_full_records() {
    let columns: Vec<String> = enroll_standards::REQUIRED_COLUMNS
        .iter()
        .map(|c| (*c).to_string())
        .collect();
    let row = vec![
        "12345678".to_string(),
        "5".to_string(),
        "MARIA".to_string(),
        "GOMEZ".to_string(),
        "ROJAS".to_string(),
        "4".to_string(),
        "B".to_string(),
        "Pasaje Norte 5".to_string(),
        "4102".to_string(),
    ];
    let frame = Frame::from_rows(columns, vec![row]).unwrap();

    let output = pipeline().run(&frame).unwrap();
    assert!(output.report.is_empty(), "{:?}", output.report.issues);

    let record = &output.records[0];
    assert_eq!(record.estudiante_nombre1, "MARIA");
    assert_eq!(record.estudiante_nombre2, "");
    assert_eq!(record.nivel, "4º Básico");
    assert_eq!(record.curso, "4B");
    assert_eq!(record.direccion, "PASAJE NORTE 5, Coquimbo");
    assert_eq!(record.sexo, "");
    assert_eq!(record.fecha_matricula, "");
    assert_eq!(record.tutor1_celular, 0);
    assert_eq!(record.tutor2_run, "");
}

#[test]
fn second_guardian_fields_flow_through() {
    let mut row = base_row();
    set(&mut row, "Nombre Apoderado SPL", "ANA MARIA");
    set(&mut row, "Apellido Paterno Apo. SPL", "CASTRO");
    set(&mut row, "Rut Apoderado SPL", "22222222-2");
    set(&mut row, "Email Apoderado SPL", "ana@test.com");
    set(&mut row, "Celular SPL", "976543210");

    let output = pipeline().run(&frame_of(vec![row])).unwrap();
    assert!(output.report.is_empty(), "{:?}", output.report.issues);

    let record = &output.records[0];
    assert_eq!(record.tutor2_nombre1, "ANA");
    assert_eq!(record.tutor2_nombre2, "MARIA");
    assert_eq!(record.tutor2_paterno, "CASTRO");
    assert_eq!(record.tutor2_run, "22222222-2");
    assert_eq!(record.tutor2_celular, 976_543_210);
}
