//! `Accept-Language` parsing.

/// Lowercases a language tag and uses `-` as the subtag separator.
pub fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// Base language of a regional tag, e.g. `en` for `en-us`.
pub fn base(tag: &str) -> Option<&str> {
    tag.split_once('-').map(|(base, _)| base)
}

/// Parses an `Accept-Language` header into tags ordered by descending quality.
///
/// Tags with equal quality keep their header order. Wildcards, empty entries and tags
/// with a quality of zero are dropped; an unparseable quality counts as zero.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = normalize(parts.next()?);
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);

            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    tags.sort_by(|a, b| b.1.total_cmp(&a.1));

    tags.into_iter().map(|(tag, _)| tag).collect()
}
