use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Target field names, in upload order. Serialization of [`OutputRecord`]
/// emits exactly these headers.
pub const OUTPUT_COLUMNS: [&str; 29] = [
    "rbd",
    "year",
    "nivel",
    "curso",
    "local",
    "fechaMatricula",
    "estudiantePaterno",
    "estudianteMaterno",
    "estudianteNombre1",
    "estudianteNombre2",
    "estudianteEmail",
    "sexo",
    "estudianteRun",
    "fechaNacimiento",
    "direccion",
    "tutor1Nombre1",
    "tutor1Nombre2",
    "tutor1Paterno",
    "tutor1Materno",
    "tutor1Run",
    "tutor1Email",
    "tutor1Celular",
    "tutor2Nombre1",
    "tutor2Nombre2",
    "tutor2Paterno",
    "tutor2Materno",
    "tutor2Run",
    "tutor2Email",
    "tutor2Celular",
];

/// One upload row in the fixed 29-field target layout.
///
/// Field declaration order matches [`OUTPUT_COLUMNS`]; dates are ISO
/// `YYYY-MM-DD` strings (empty when the source date was unusable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub rbd: u32,
    pub year: i32,
    pub nivel: String,
    pub curso: String,
    pub local: String,
    #[serde(rename = "fechaMatricula")]
    pub fecha_matricula: String,
    #[serde(rename = "estudiantePaterno")]
    pub estudiante_paterno: String,
    #[serde(rename = "estudianteMaterno")]
    pub estudiante_materno: String,
    #[serde(rename = "estudianteNombre1")]
    pub estudiante_nombre1: String,
    #[serde(rename = "estudianteNombre2")]
    pub estudiante_nombre2: String,
    #[serde(rename = "estudianteEmail")]
    pub estudiante_email: String,
    pub sexo: String,
    #[serde(rename = "estudianteRun")]
    pub estudiante_run: String,
    #[serde(rename = "fechaNacimiento")]
    pub fecha_nacimiento: String,
    pub direccion: String,
    #[serde(rename = "tutor1Nombre1")]
    pub tutor1_nombre1: String,
    #[serde(rename = "tutor1Nombre2")]
    pub tutor1_nombre2: String,
    #[serde(rename = "tutor1Paterno")]
    pub tutor1_paterno: String,
    #[serde(rename = "tutor1Materno")]
    pub tutor1_materno: String,
    #[serde(rename = "tutor1Run")]
    pub tutor1_run: String,
    #[serde(rename = "tutor1Email")]
    pub tutor1_email: String,
    #[serde(rename = "tutor1Celular")]
    pub tutor1_celular: u32,
    #[serde(rename = "tutor2Nombre1")]
    pub tutor2_nombre1: String,
    #[serde(rename = "tutor2Nombre2")]
    pub tutor2_nombre2: String,
    #[serde(rename = "tutor2Paterno")]
    pub tutor2_paterno: String,
    #[serde(rename = "tutor2Materno")]
    pub tutor2_materno: String,
    #[serde(rename = "tutor2Run")]
    pub tutor2_run: String,
    #[serde(rename = "tutor2Email")]
    pub tutor2_email: String,
    #[serde(rename = "tutor2Celular")]
    pub tutor2_celular: u32,
}

impl OutputRecord {
    /// Build a record from one row of a frame that already carries all 29
    /// target columns with coerced integer cells. Absent cells fall back to
    /// typed defaults rather than failing.
    pub fn from_frame_row(frame: &Frame, row: usize) -> Self {
        let text = |column: &str| frame.get(row, column).unwrap_or_default().to_string();
        let int = |column: &str| int_cell(frame, row, column);
        Self {
            rbd: int("rbd"),
            year: int_cell(frame, row, "year"),
            nivel: text("nivel"),
            curso: text("curso"),
            local: text("local"),
            fecha_matricula: text("fechaMatricula"),
            estudiante_paterno: text("estudiantePaterno"),
            estudiante_materno: text("estudianteMaterno"),
            estudiante_nombre1: text("estudianteNombre1"),
            estudiante_nombre2: text("estudianteNombre2"),
            estudiante_email: text("estudianteEmail"),
            sexo: text("sexo"),
            estudiante_run: text("estudianteRun"),
            fecha_nacimiento: text("fechaNacimiento"),
            direccion: text("direccion"),
            tutor1_nombre1: text("tutor1Nombre1"),
            tutor1_nombre2: text("tutor1Nombre2"),
            tutor1_paterno: text("tutor1Paterno"),
            tutor1_materno: text("tutor1Materno"),
            tutor1_run: text("tutor1Run"),
            tutor1_email: text("tutor1Email"),
            tutor1_celular: int("tutor1Celular"),
            tutor2_nombre1: text("tutor2Nombre1"),
            tutor2_nombre2: text("tutor2Nombre2"),
            tutor2_paterno: text("tutor2Paterno"),
            tutor2_materno: text("tutor2Materno"),
            tutor2_run: text("tutor2Run"),
            tutor2_email: text("tutor2Email"),
            tutor2_celular: int("tutor2Celular"),
        }
    }
}

/// Integer cell with a zero fallback for absent or non-numeric values.
fn int_cell<T: FromStr + Default>(frame: &Frame, row: usize, column: &str) -> T {
    frame
        .get(row, column)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_layout_has_29_columns() {
        assert_eq!(OUTPUT_COLUMNS.len(), 29);
    }

    #[test]
    fn serialized_names_match_output_columns() {
        let record = OutputRecord::from_frame_row(&Frame::new(Vec::new()), 0);
        let json = serde_json::to_value(&record).expect("serialize record");
        let object = json.as_object().expect("record serializes to an object");
        let names: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(names.len(), 29);
        for column in OUTPUT_COLUMNS {
            assert!(object.contains_key(column), "missing column {column}");
        }
    }

    #[test]
    fn from_frame_row_coerces_integers() {
        let frame = Frame::from_rows(
            vec![
                "rbd".to_string(),
                "year".to_string(),
                "tutor1Celular".to_string(),
            ],
            vec![vec![
                "574".to_string(),
                "2025".to_string(),
                "987654321".to_string(),
            ]],
        )
        .unwrap();
        let record = OutputRecord::from_frame_row(&frame, 0);
        assert_eq!(record.rbd, 574);
        assert_eq!(record.year, 2025);
        assert_eq!(record.tutor1_celular, 987_654_321);
        assert_eq!(record.tutor2_celular, 0);
        assert_eq!(record.nivel, "");
    }
}
