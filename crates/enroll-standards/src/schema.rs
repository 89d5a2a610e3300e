//! Source layout: required columns, working column names, and the
//! source-to-target rename map.

/// Columns the pipeline cannot run without. Their absence aborts the run
/// before any row is processed.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Rut",
    "Digito verificador",
    "Nombres",
    "Apellido Paterno",
    "Apellido Materno",
    "Grado",
    "Letra",
    "Direccion",
    "Comuna",
];

/// Source and intermediate column names read or written by pipeline steps.
pub mod columns {
    pub const RUT: &str = "Rut";
    pub const DIGITO_VERIFICADOR: &str = "Digito verificador";
    pub const NOMBRES: &str = "Nombres";
    pub const GRADO: &str = "Grado";
    pub const LETRA: &str = "Letra";
    pub const DIRECCION: &str = "Direccion";
    pub const COMUNA: &str = "Comuna";
    pub const FECHA_NACIMIENTO: &str = "Fecha de Nacimiento";
    pub const FECHA_MATRICULA: &str = "Fecha de Matrícula";
    pub const NOMBRE_APODERADO: &str = "Nombre Apoderado";
    pub const NOMBRE_APODERADO_SPL: &str = "Nombre Apoderado SPL";
    pub const CELULAR_APODERADO: &str = "Celular Apoderado";
    pub const CELULAR_SPL: &str = "Celular SPL";

    // Columns introduced by pipeline steps before the rename.
    pub const PRIMER_NOMBRE_ALUMNO: &str = "Primer Nombre Alumno";
    pub const SEGUNDO_NOMBRE_ALUMNO: &str = "Segundo Nombre Alumno";
    pub const PRIMER_NOMBRE_APODERADO: &str = "Primer Nombre Apoderado";
    pub const SEGUNDO_NOMBRE_APODERADO: &str = "Segundo Nombre Apoderado";
    pub const PRIMER_NOMBRE_APODERADO_SPL: &str = "Primer Nombre Apoderado SPL";
    pub const SEGUNDO_NOMBRE_APODERADO_SPL: &str = "Segundo Nombre Apoderado SPL";
    pub const CURSO: &str = "Curso";
    pub const DIRECCION_COMPLETA: &str = "Direccion Completa";
    pub const NIVEL: &str = "Nivel";
    pub const RBD: &str = "rbd";
    pub const YEAR: &str = "year";
    pub const LOCAL: &str = "local";
}

/// Working column name to target field name. Applied after all value
/// transformations; entries whose source column is absent are skipped.
pub const RENAME_MAP: [(&str, &str); 26] = [
    ("Rut", "estudianteRun"),
    ("Nivel", "nivel"),
    ("Curso", "curso"),
    ("Fecha de Matrícula", "fechaMatricula"),
    ("Apellido Paterno", "estudiantePaterno"),
    ("Apellido Materno", "estudianteMaterno"),
    ("Primer Nombre Alumno", "estudianteNombre1"),
    ("Segundo Nombre Alumno", "estudianteNombre2"),
    ("Email Estudiante", "estudianteEmail"),
    ("Sexo", "sexo"),
    ("Fecha de Nacimiento", "fechaNacimiento"),
    ("Direccion Completa", "direccion"),
    ("Primer Nombre Apoderado", "tutor1Nombre1"),
    ("Segundo Nombre Apoderado", "tutor1Nombre2"),
    ("Apellido Paterno Apo.", "tutor1Paterno"),
    ("Apellido Materno Apo.", "tutor1Materno"),
    ("Rut Apoderado", "tutor1Run"),
    ("Email Apoderado", "tutor1Email"),
    ("Celular Apoderado", "tutor1Celular"),
    ("Primer Nombre Apoderado SPL", "tutor2Nombre1"),
    ("Segundo Nombre Apoderado SPL", "tutor2Nombre2"),
    ("Apellido Paterno Apo. SPL", "tutor2Paterno"),
    ("Apellido Materno Apo. SPL", "tutor2Materno"),
    ("Rut Apoderado SPL", "tutor2Run"),
    ("Email Apoderado SPL", "tutor2Email"),
    ("Celular SPL", "tutor2Celular"),
];
