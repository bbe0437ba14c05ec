//! Query-string filters for list endpoints.
//!
//! A list handler receives raw `key=value` pairs; `ListQuery::parse` checks
//! them against the fields an entity exposes and turns them into typed
//! `FilterParam`s the store layer can apply column by column.

use thiserror::Error;

/// The JSON type a filterable field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    String,
    Bool,
}

/// A query-string key an entity allows filtering on, and the column it maps to.
#[derive(Debug, Clone, Copy)]
pub struct FilterField {
    pub key: &'static str,
    pub column: &'static str,
    pub kind: FilterKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    String(String),
    Bool(bool),
}

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParam {
    pub column: String,
    pub value: FilterValue,
}

impl FilterParam {
    pub fn eq(column: &str, value: FilterValue) -> Self {
        Self {
            column: column.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter `{0}`")]
    UnknownKey(String),

    #[error("Filter `{key}` expects true or false, got `{value}`")]
    InvalidBool { key: String, value: String },

    #[error("Invalid sort `{0}`, expected `{1}` or `-{1}`")]
    InvalidSort(String, &'static str),
}

/// Parsed list query: equality filters plus the sort direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<FilterParam>,
    pub sort: SortOrder,
}

impl ListQuery {
    /// Query key selecting the sort direction.
    pub const SORT_KEY: &'static str = "sort";

    /// Parses raw query pairs against `fields`.
    ///
    /// `sort_key` is the single field the `sort` parameter may name; a leading
    /// `-` selects descending order. Repeated keys produce one filter each.
    pub fn parse<I>(pairs: I, fields: &[FilterField], sort_key: &'static str) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListQuery::default();

        for (key, raw) in pairs {
            if key == Self::SORT_KEY {
                query.sort = if raw == sort_key {
                    SortOrder::Asc
                } else if raw.strip_prefix('-') == Some(sort_key) {
                    SortOrder::Desc
                } else {
                    return Err(FilterError::InvalidSort(raw, sort_key));
                };
                continue;
            }

            let field = fields
                .iter()
                .find(|f| f.key == key)
                .ok_or_else(|| FilterError::UnknownKey(key.clone()))?;

            let value = match field.kind {
                FilterKind::String => FilterValue::String(raw),
                FilterKind::Bool => match raw.as_str() {
                    "true" => FilterValue::Bool(true),
                    "false" => FilterValue::Bool(false),
                    _ => return Err(FilterError::InvalidBool { key, value: raw }),
                },
            };

            query.filters.push(FilterParam::eq(field.column, value));
        }

        Ok(query)
    }
}
