use super::Delimiter;

/// Quote fields that contain a stray quote character, escaping the quotes inside.
///
/// Lines are split on the delimiter without looking at quotes, so a quoted cell that
/// contains the delimiter gets cut in two and may come out mangled. This only rescues
/// the common case of a quote somewhere in an otherwise unquoted cell.
pub fn repair_bare_quotes(content: &str, delimiter: Delimiter) -> String {
    let delimiter = delimiter.as_char();
    content
        .split('\n')
        .map(|line| {
            line.split(delimiter)
                .map(repair_field)
                .collect::<Vec<_>>()
                .join(&delimiter.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn repair_field(field: &str) -> String {
    let properly_quoted = field.starts_with('"') && field.ends_with('"');
    if field.contains('"') && !properly_quoted {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
