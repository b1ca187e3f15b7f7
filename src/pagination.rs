//! Paged result shapes and the traits the pagination engine walks.
//!
//! The service embeds every query parameter in its continuation links, so
//! following a page is a plain GET on the stored URL.

use serde::{Deserialize, Deserializer, Serialize};

/// Offset-bounded slice of a larger result set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default, rename = "next")]
    pub next_url: Option<String>,
    #[serde(default, rename = "previous")]
    pub previous_url: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        has_link(&self.next_url)
    }

    pub fn has_previous(&self) -> bool {
        has_link(&self.previous_url)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            total: 0,
            limit: 0,
            offset: 0,
            next_url: None,
            previous_url: None,
        }
    }
}

/// Position markers of a [`CursorPage`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

/// Forward-only page addressed by an opaque cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CursorPage<T> {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default, rename = "next")]
    pub next_url: Option<String>,
    #[serde(default, rename = "cursors", deserialize_with = "null_as_default")]
    pub cursor: Cursor,
}

impl<T> CursorPage<T> {
    pub fn has_next(&self) -> bool {
        has_link(&self.next_url)
    }
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            limit: 0,
            total: None,
            next_url: None,
            cursor: Cursor::default(),
        }
    }
}

/// A result that can link forward to the next slice.
pub trait Paginated {
    /// Continuation link, or `None` at the end of the result set.
    fn next_url(&self) -> Option<&str>;
}

/// A result that can also link backward.
pub trait BackwardPaginated: Paginated {
    fn previous_url(&self) -> Option<&str>;
}

impl<T> Paginated for Page<T> {
    fn next_url(&self) -> Option<&str> {
        link(&self.next_url)
    }
}

impl<T> BackwardPaginated for Page<T> {
    fn previous_url(&self) -> Option<&str> {
        link(&self.previous_url)
    }
}

impl<T> Paginated for CursorPage<T> {
    fn next_url(&self) -> Option<&str> {
        link(&self.next_url)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn link(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|url| !url.trim().is_empty())
}

fn has_link(value: &Option<String>) -> bool {
    link(value).is_some()
}
