//! URL list parsing and validation for the home page.
//!
//! Validation is purely syntactic; reachability is the backend's problem.

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

/// Upper bound on URLs accepted per brief.
pub const MAX_URLS: usize = 10;

/// Why a URL list was rejected before reaching the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Please paste at least one URL.")]
    Empty,
    #[error("Maximum 10 URLs allowed.")]
    TooMany(usize),
    #[error("{}", describe_invalid(.0))]
    Invalid(Vec<String>),
}

fn describe_invalid(invalid: &[String]) -> String {
    let plural = if invalid.len() > 1 { "s" } else { "" };
    format!("Invalid URL{plural}:\n{}", invalid.join("\n"))
}

/// Split raw textarea input into candidate URLs: one per line, trimmed,
/// blank lines dropped, order preserved.
pub fn parse_urls(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Check a candidate list. Every unparseable entry is reported, not just
/// the first.
///
/// # Errors
///
/// Returns [`UrlValidationError`] when the list is empty, longer than
/// [`MAX_URLS`], or contains entries that are not absolute URLs.
pub fn validate_urls(urls: &[String]) -> Result<(), UrlValidationError> {
    if urls.is_empty() {
        return Err(UrlValidationError::Empty);
    }
    if urls.len() > MAX_URLS {
        return Err(UrlValidationError::TooMany(urls.len()));
    }
    let invalid: Vec<String> = urls
        .iter()
        .filter(|candidate| url::Url::parse(candidate).is_err())
        .cloned()
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(UrlValidationError::Invalid(invalid))
    }
}

/// Hint shown under the textarea.
pub fn url_count_hint(count: usize) -> String {
    match count {
        0 => format!("Min 1 · Max {MAX_URLS} URLs"),
        1 => "1 URL detected".to_owned(),
        n => format!("{n} URLs detected"),
    }
}
