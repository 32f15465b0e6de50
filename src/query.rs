//! Query State
//!
//! Client-held filter parameters used to build the list request.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Created,
    Title,
    Due,
    Id,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Created => "created",
            SortKey::Title => "title",
            SortKey::Due => "due",
            SortKey::Id => "id",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    /// Parse a `<key>:<order>` select value; anything else means "server default"
    pub fn from_select(value: &str) -> Option<Sort> {
        let (key, order) = value.split_once(':')?;
        let key = match key {
            "created" => SortKey::Created,
            "title" => SortKey::Title,
            "due" => SortKey::Due,
            "id" => SortKey::Id,
            _ => return None,
        };
        let order = match order {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            _ => return None,
        };
        Some(Sort { key, order })
    }
}

/// Tri-state select value: `""` unset, `"true"`, `"false"`
pub fn parse_tri_state(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Filters applied to `GET /tasks/`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Substring match on title/description
    pub search: String,
    pub completed: Option<bool>,
    pub has_due: Option<bool>,
    pub sort: Option<Sort>,
}

impl QueryState {
    /// `key=value` pairs joined by `&`; unset filters are left out entirely
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(completed) = self.completed {
            pairs.push(("completed", completed.to_string()));
        }
        if let Some(has_due) = self.has_due {
            pairs.push(("has_due", has_due.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort_by", sort.key.as_str().to_string()));
            pairs.push(("order", sort.order.as_str().to_string()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
