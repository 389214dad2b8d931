//! Minimal `key=value` properties parser.

/// One entry of a properties listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// Parse a properties listing.
///
/// Blank lines and lines starting with `#` or `!` are ignored. A trailing
/// backslash joins the next line. The first `=` or `:` separates key from
/// value; lines with neither are ignored.
pub fn parse_properties(text: &str) -> Vec<Property> {
    let mut properties = Vec::new();
    let mut pending = String::new();

    for raw in text.lines() {
        let line = raw.trim_end_matches('\r');
        let trimmed = if pending.is_empty() {
            line.trim()
        } else {
            line.trim_start()
        };

        if pending.is_empty() && (trimmed.is_empty() || trimmed.starts_with(['#', '!'])) {
            continue;
        }

        if let Some(continued) = trimmed.strip_suffix('\\') {
            pending.push_str(continued);
            continue;
        }
        pending.push_str(trimmed);

        let logical = std::mem::take(&mut pending);
        if let Some(idx) = logical.find(['=', ':']) {
            properties.push(Property {
                key: logical[..idx].trim().to_string(),
                value: logical[idx + 1..].trim().to_string(),
            });
        }
    }

    if let Some(idx) = pending.find(['=', ':']) {
        properties.push(Property {
            key: pending[..idx].trim().to_string(),
            value: pending[idx + 1..].trim().to_string(),
        });
    }

    properties
}

/// Value of `key`, compared case-insensitively. The last occurrence wins.
pub fn lookup<'a>(properties: &'a [Property], key: &str) -> Option<&'a str> {
    properties
        .iter()
        .rev()
        .find(|p| p.key.eq_ignore_ascii_case(key))
        .map(|p| p.value.as_str())
}
