//! Line-oriented extraction from the compliance document.

use regex::RegexBuilder;

use checklist_core::types::{ComplianceDocument, GroupSet};

/// Remainder of the first line that starts with `title_prefix`.
pub fn title_remainder<'a>(document: &'a ComplianceDocument, title_prefix: &str) -> Option<&'a str> {
    document
        .lines()
        .find_map(|line| line.strip_prefix(title_prefix))
}

/// A title remainder is a placeholder when, after trimming and dropping one
/// trailing `.`, nothing is left or only `-` and `_` remain.
pub fn is_placeholder_title(remainder: &str) -> bool {
    let trimmed = remainder.trim();
    let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
    body.chars().all(|c| c == '-' || c == '_')
}

/// Returns true if some line starts with `marker`.
pub fn has_section(document: &ComplianceDocument, marker: &str) -> bool {
    document.lines().any(|line| line.starts_with(marker))
}

/// 1-based numbers of the lines containing `host`.
pub fn deprecated_host_lines(document: &ComplianceDocument, host: &str) -> Vec<usize> {
    if host.is_empty() {
        return Vec::new();
    }
    document
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(host))
        .map(|(idx, _)| idx + 1)
        .collect()
}

/// Service identifier taken from the title line.
///
/// Strips `title_prefix`, then `sub_prefix` if present, then a trailing
/// period and surrounding whitespace.
pub fn service_identifier(
    document: &ComplianceDocument,
    title_prefix: &str,
    sub_prefix: &str,
) -> Option<String> {
    let remainder = title_remainder(document, title_prefix)?.trim();
    let remainder = if sub_prefix.is_empty() {
        remainder
    } else {
        remainder.strip_prefix(sub_prefix).unwrap_or(remainder)
    };
    let remainder = remainder.trim();
    let service = remainder.strip_suffix('.').unwrap_or(remainder).trim();
    if service.is_empty() {
        None
    } else {
        Some(service.to_string())
    }
}

/// Groups declared after `phrase` (matched case-insensitively).
///
/// Takes the rest of the phrase's line, or the next non-empty line when that
/// is blank, up to the first `#`. Returns `None` when the phrase is absent
/// or declares nothing.
pub fn declared_groups(document: &ComplianceDocument, phrase: &str) -> Option<GroupSet> {
    let pattern = RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
        .ok()?;

    let lines: Vec<&str> = document.lines().collect();
    let (idx, rest) = lines.iter().enumerate().find_map(|(idx, line)| {
        pattern.find(line).map(|m| (idx, &line[m.end()..]))
    })?;

    let candidate = if rest.trim().is_empty() {
        let next = lines[idx + 1..].iter().find(|line| !line.trim().is_empty())?;
        if next.trim_start().starts_with('#') {
            return None;
        }
        *next
    } else {
        rest
    };

    let declared = candidate.split('#').next().unwrap_or_default();
    let groups = GroupSet::parse_list(declared);
    if groups.is_empty() {
        None
    } else {
        Some(groups)
    }
}
