// src/import/school.rs

/// Raw school code → display label.
const SCHOOL_TYPES: &[(&str, &str)] = &[
    ("elementary", "小学校"),
    ("junior-high", "中学校"),
    ("high", "高校"),
];

/// Trim `raw` and translate it through the school table.
/// Codes not in the table come back trimmed but otherwise unchanged.
pub fn map_school_type(raw: &str) -> String {
    let code = raw.trim();
    SCHOOL_TYPES
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
        .to_string()
}
