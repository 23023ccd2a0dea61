// SPDX-License-Identifier: MPL-2.0

//! Local sort pass for post listings.
//!
//! The remote listing endpoint does not sort reliably on every field (nested
//! reaction counters in particular), so results are re-sorted client-side with
//! a stable comparator. Sort keys are resolved through a fixed accessor table
//! rather than arbitrary field paths.

use crate::api::{Post, SortOrder};
use crate::query::SelectorError;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Title,
    Body,
    UserId,
    Views,
    Likes,
    Dislikes,
    /// Only known client-side; never forwarded to the server
    AuthorUsername,
}

const SORT_KEYS: &[(&str, SortKey)] = &[
    ("id", SortKey::Id),
    ("title", SortKey::Title),
    ("body", SortKey::Body),
    ("userId", SortKey::UserId),
    ("views", SortKey::Views),
    ("reactions.likes", SortKey::Likes),
    ("reactions.dislikes", SortKey::Dislikes),
    ("author.username", SortKey::AuthorUsername),
];

impl SortKey {
    pub fn all() -> impl Iterator<Item = SortKey> {
        SORT_KEYS.iter().map(|(_, key)| *key)
    }

    pub fn name(self) -> &'static str {
        SORT_KEYS
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Field name to send as `sortBy`, if the server knows this key
    pub fn remote_name(self) -> Option<&'static str> {
        match self {
            Self::AuthorUsername => None,
            key => Some(key.name()),
        }
    }

    fn extract(self, post: &Post) -> SortValue<'_> {
        match self {
            Self::Id => SortValue::Number(post.id),
            Self::Title => SortValue::Text(&post.title),
            Self::Body => SortValue::Text(&post.body),
            Self::UserId => SortValue::Number(post.user_id),
            Self::Views => SortValue::Number(post.views),
            Self::Likes => SortValue::Number(post.reactions.likes),
            Self::Dislikes => SortValue::Number(post.reactions.dislikes),
            Self::AuthorUsername => post
                .author
                .as_ref()
                .map_or(SortValue::Absent, |author| SortValue::Text(&author.username)),
        }
    }
}

impl FromStr for SortKey {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SORT_KEYS
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, key)| *key)
            .ok_or_else(|| SelectorError::UnknownSortKey(s.to_string()))
    }
}

enum SortValue<'a> {
    Number(i64),
    Text(&'a str),
    Absent,
}

impl SortValue<'_> {
    /// Absent values compare as the empty string
    fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Absent => Cow::Borrowed(""),
        }
    }
}

fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.cmp(y),
        _ => compare_text(&a.text(), &b.text()),
    }
}

thread_local! {
    /// Root-locale collation at secondary strength: accents count, case does not
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Case-insensitive, locale-aware ordering
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    })
}

/// Compare two posts on `key`; `Desc` flips the result, not the operands.
pub fn compare_posts(a: &Post, b: &Post, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = compare_values(&key.extract(a), &key.extract(b));
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort: equal keys keep their relative order.
pub fn sort_posts(posts: &mut [Post], key: SortKey, order: SortOrder) {
    posts.sort_by(|a, b| compare_posts(a, b, key, order));
}
