/// Run configuration, created once per invocation and read-only afterwards.
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Institution identifier stamped on every output row.
    pub rbd: u32,
    /// Academic year stamped on every output row.
    pub year: i32,
    /// Campus / location label stamped on every output row.
    pub local: String,
    /// Separator between day, month and year in source dates.
    pub date_separator: char,
    /// CSV field delimiter for the loader and writer.
    pub delimiter: u8,
    /// Run the identifier check-digit validation step.
    pub validate_run: bool,
    /// Run the email validation step.
    pub validate_email: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            rbd: 574,
            year: 2025,
            local: "Principal".to_string(),
            date_separator: '-',
            delimiter: b';',
            validate_run: true,
            validate_email: true,
        }
    }
}

impl TransformConfig {
    #[must_use]
    pub fn with_rbd(mut self, rbd: u32) -> Self {
        self.rbd = rbd;
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_local(mut self, local: impl Into<String>) -> Self {
        self.local = local.into();
        self
    }

    #[must_use]
    pub fn with_date_separator(mut self, separator: char) -> Self {
        self.date_separator = separator;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Disable both semantic validation steps in one call.
    #[must_use]
    pub fn skip_validation(mut self) -> Self {
        self.validate_run = false;
        self.validate_email = false;
        self
    }
}
