// SPDX-License-Identifier: MPL-2.0

//! Search-term highlighting for titles, bodies and comments.

use regex::RegexBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Split `text` around case-insensitive occurrences of `term`.
///
/// The term is matched literally. A blank term yields the whole text as one
/// plain segment; empty text yields no segments.
pub fn highlight<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if term.trim().is_empty() {
        return vec![Segment::Plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::Plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::Plain(&text[last..found.start()]));
        }
        segments.push(Segment::Match(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(&text[last..]));
    }
    segments
}
