//! Per-source grouping of key points for the compare-sources matrix.
//!
//! Points whose `source_url` names no source of the brief are dropped
//! silently; the backend does not guarantee attribution consistency.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use std::collections::HashMap;

use crate::net::types::Brief;

/// One row of the comparison matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRow {
    pub url: String,
    /// Source title, or the URL when the source has none.
    pub title: String,
    pub points: Vec<String>,
}

impl SourceRow {
    /// Heading to render above the URL; empty when it would only repeat it.
    pub fn heading(&self) -> &str {
        if self.title == self.url { "" } else { self.title.as_str() }
    }
}

/// Group the brief's key points under their sources, in source-list order.
pub fn group_points_by_source(brief: &Brief) -> Vec<SourceRow> {
    let mut rows: Vec<SourceRow> = Vec::with_capacity(brief.sources.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(brief.sources.len());

    for source in &brief.sources {
        // A repeated URL keeps its first row, matching keyed-map semantics.
        if index.contains_key(source.url.as_str()) {
            continue;
        }
        let title = source
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&source.url)
            .to_owned();
        index.insert(source.url.as_str(), rows.len());
        rows.push(SourceRow {
            url: source.url.clone(),
            title,
            points: Vec::new(),
        });
    }

    for kp in &brief.key_points {
        if let Some(&row) = index.get(kp.source_url.as_str()) {
            rows[row].points.push(kp.point.clone());
        }
    }

    rows
}
