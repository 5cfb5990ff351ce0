use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Unknown variable ${0}")]
    UnknownVariable(String),
    #[error("Unterminated variable reference in {0}")]
    Unterminated(String),
    #[error("Home directory is not known")]
    NoHome,
}

fn is_var_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expand `$VAR`, `${VAR}` and a leading `~` using the given lookup.
/// A `$` that is not followed by a variable name is kept as is.
pub fn expand_with<F>(input: &str, lookup: F) -> Result<PathBuf, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    if rest == "~" || rest.starts_with("~/") || rest.starts_with("~\\") {
        let home = lookup("HOME")
            .or_else(|| lookup("USERPROFILE"))
            .ok_or(ExpandError::NoHome)?;
        out.push_str(&home);
        rest = &rest[1..];
    }

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            let end = braced
                .find('}')
                .ok_or_else(|| ExpandError::Unterminated(input.to_string()))?;
            let name = &braced[..end];
            let value =
                lookup(name).ok_or_else(|| ExpandError::UnknownVariable(name.to_string()))?;
            out.push_str(&value);
            rest = &braced[end + 1..];
            continue;
        }

        let len = after
            .char_indices()
            .find(|(_, c)| !is_var_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        if len == 0 {
            out.push('$');
            rest = after;
            continue;
        }

        let name = &after[..len];
        let value = lookup(name).ok_or_else(|| ExpandError::UnknownVariable(name.to_string()))?;
        out.push_str(&value);
        rest = &after[len..];
    }
    out.push_str(rest);

    Ok(PathBuf::from(out))
}

/// Expand a path against the process environment.
pub fn expand_path(input: &str) -> Result<PathBuf, ExpandError> {
    expand_with(input, |name| std::env::var(name).ok())
}

/// Split a picker selection into separate folder paths.
/// Multiple folders come back joined by `;`, surrounding whitespace is dropped.
pub fn split_selection(selection: &str) -> Vec<String> {
    selection
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
