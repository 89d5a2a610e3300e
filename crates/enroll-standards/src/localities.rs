//! Locality (comuna) code table and address stop tokens.

/// Numeric locality code to name. Covers the fifteen Región de Coquimbo
/// communes plus Santiago for relocated students.
pub const COMUNA_CODES: [(&str, &str); 16] = [
    ("4101", "La Serena"),
    ("4102", "Coquimbo"),
    ("4103", "Andacollo"),
    ("4104", "La Higuera"),
    ("4105", "Paihuano"),
    ("4106", "Vicuña"),
    ("4201", "Illapel"),
    ("4202", "Canela"),
    ("4203", "Los Vilos"),
    ("4204", "Salamanca"),
    ("4301", "Ovalle"),
    ("4302", "Combarbalá"),
    ("4303", "Monte Patria"),
    ("4304", "Punitaqui"),
    ("4305", "Río Hurtado"),
    ("13101", "Santiago"),
];

/// Misspellings and shorthand seen in free-text addresses, removed along
/// with the proper locality names.
const LOCALITY_VARIANTS: [&str; 4] = ["laserena", "serena", "laserna", "vicuna"];

/// Resolve a locality code to its name.
pub fn comuna_name(code: &str) -> Option<&'static str> {
    let trimmed = code.trim();
    COMUNA_CODES
        .iter()
        .find(|(key, _)| *key == trimmed)
        .map(|(_, name)| *name)
}

/// Tokens the address cleaner strips from free-text addresses: every
/// locality name plus the known variants.
pub fn locality_stop_tokens() -> Vec<&'static str> {
    COMUNA_CODES
        .iter()
        .map(|(_, name)| *name)
        .chain(LOCALITY_VARIANTS)
        .collect()
}
