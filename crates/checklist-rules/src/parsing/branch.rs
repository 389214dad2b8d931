//! Branch naming grammar: `<prefix>/<suffix>`.

/// Returns true iff `name` is `<prefix>/<suffix>` with `prefix` exactly one of
/// `prefixes` and `suffix` made of one or more ASCII letters, digits, `.`,
/// `_` or `-`. The whole string must match.
pub fn is_valid_branch_name(name: &str, prefixes: &[String]) -> bool {
    let Some((prefix, suffix)) = name.split_once('/') else {
        return false;
    };
    if !prefixes.iter().any(|p| p == prefix) {
        return false;
    }
    !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
