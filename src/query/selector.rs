// SPDX-License-Identifier: MPL-2.0

use crate::api::{PostListParams, SortOrder};
use crate::config::{ALL_TAGS, DEFAULT_PAGE_SIZE};
use crate::query::{SelectorError, SortKey};
use std::str::FromStr;

/// Client-chosen parameters that decide which posts are displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySelector {
    pub search_query: String,
    /// A tag name, or `ALL_TAGS` for no filter
    pub selected_tag: String,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
    pub skip: u64,
    pub limit: u64,
}

/// Where a listing comes from for a given selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSource<'a> {
    /// Search supersedes tag and sort selection
    Search(&'a str),
    /// Full tag listing, sorted and windowed locally
    Tag(&'a str),
    /// Remote page with best-effort remote sort
    Page,
}

impl QuerySelector {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn source(&self) -> PostSource<'_> {
        let query = self.search_query.trim();
        if !query.is_empty() {
            PostSource::Search(query)
        } else if let Some(tag) = self.tag_filter() {
            PostSource::Tag(tag)
        } else {
            PostSource::Page
        }
    }

    /// The selected tag, unless it is empty or the "all" sentinel
    pub fn tag_filter(&self) -> Option<&str> {
        match self.selected_tag.as_str() {
            "" | ALL_TAGS => None,
            tag => Some(tag),
        }
    }

    pub fn list_params(&self) -> PostListParams {
        PostListParams {
            limit: self.limit,
            skip: self.skip,
            sort_by: self.sort_by.and_then(SortKey::remote_name),
            order: Some(self.sort_order),
        }
    }

    /// Skip value for the next page, or `None` when already on the last one
    pub fn next_skip(&self, total: u64) -> Option<u64> {
        let next = self.skip.saturating_add(self.limit);
        (next < total).then_some(next)
    }

    pub fn prev_skip(&self) -> u64 {
        self.skip.saturating_sub(self.limit)
    }

    /// Apply the `[skip, skip + limit)` window locally; a limit of 0 keeps everything
    pub fn window<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let take = match self.limit {
            0 => usize::MAX,
            limit => usize::try_from(limit).unwrap_or(usize::MAX),
        };
        items.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for QuerySelector {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_tag: ALL_TAGS.to_string(),
            sort_by: Some(SortKey::Id),
            sort_order: SortOrder::Desc,
            skip: 0,
            limit: DEFAULT_PAGE_SIZE.into(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SelectorError::UnknownSortOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selector() {
        let selector = QuerySelector::default();
        assert_eq!(selector.selected_tag, "all");
        assert_eq!(selector.sort_by, Some(SortKey::Id));
        assert_eq!(selector.sort_order, SortOrder::Desc);
        assert_eq!((selector.skip, selector.limit), (0, 10));
        assert_eq!(selector.source(), PostSource::Page);
    }

    #[test]
    fn test_search_wins_over_tag() {
        let selector = QuerySelector {
            search_query: "  love ".to_string(),
            selected_tag: "history".to_string(),
            ..QuerySelector::default()
        };
        assert_eq!(selector.source(), PostSource::Search("love"));
    }

    #[test]
    fn test_tag_source() {
        let mut selector = QuerySelector::default();
        selector.selected_tag = "tech".to_string();
        assert_eq!(selector.source(), PostSource::Tag("tech"));

        selector.selected_tag = String::new();
        assert_eq!(selector.source(), PostSource::Page);
    }

    #[test]
    fn test_list_params_drop_local_only_keys() {
        let mut selector = QuerySelector::new(25);
        selector.sort_by = Some(SortKey::AuthorUsername);
        let params = selector.list_params();
        assert_eq!(params.sort_by, None);
        assert_eq!(params.limit, 25);

        selector.sort_by = Some(SortKey::Dislikes);
        assert_eq!(selector.list_params().sort_by, Some("reactions.dislikes"));
    }

    #[test]
    fn test_next_skip_blocked_at_end() {
        let selector = QuerySelector {
            skip: 20,
            limit: 10,
            ..QuerySelector::default()
        };
        assert_eq!(selector.next_skip(31), Some(30));
        assert_eq!(selector.next_skip(30), None);
        assert_eq!(selector.next_skip(0), None);
    }

    #[test]
    fn test_prev_skip_floors_at_zero() {
        let selector = QuerySelector {
            skip: 5,
            limit: 10,
            ..QuerySelector::default()
        };
        assert_eq!(selector.prev_skip(), 0);
    }

    #[test]
    fn test_window() {
        let selector = QuerySelector {
            skip: 2,
            limit: 2,
            ..QuerySelector::default()
        };
        assert_eq!(selector.window(vec![1, 2, 3, 4, 5]), vec![3, 4]);

        let everything = QuerySelector {
            limit: 0,
            ..QuerySelector::default()
        };
        assert_eq!(everything.window(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("up".parse::<SortOrder>().is_err());
    }
}
