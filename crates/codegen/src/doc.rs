//! Doc comments for described schema entities.

/// The trimmed description, or `None` when it is absent or blank.
pub fn render(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Type-level doc text: the description, falling back to the entity name.
pub fn render_or(description: Option<&str>, name: &str) -> String {
    render(description).unwrap_or_else(|| name.to_string())
}

/// `///` lines for `text`, each prefixed with `indent`.
///
/// Inner blank lines become a bare `///`.
pub fn doc_lines(text: &str, indent: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim_end();
            if line.is_empty() {
                format!("{indent}///")
            } else {
                format!("{indent}/// {line}")
            }
        })
        .collect()
}
