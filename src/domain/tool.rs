//! Tool record types.
//!
//! A tool is a bookmark-style record with three free-text fields: title,
//! description, and URL. While a record is under construction any subset of
//! fields may be absent, so the working representation is option-per-field.
//! None of the fields carry a validated format; any string is accepted.

use serde::{Deserialize, Serialize};

/// The three editable fields of a tool record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Description,
    Url,
}

impl Field {
    /// Cycle to the next field (Title -> Description -> Url -> Title).
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Url,
            Self::Url => Self::Title,
        }
    }

    /// Cycle to the previous field.
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Url,
            Self::Description => Self::Title,
            Self::Url => Self::Description,
        }
    }

    /// Get the field name for display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Url => "url",
        }
    }
}

/// A partial tool record.
///
/// Absent fields are omitted from the wire encoding, which is what gives
/// patch requests their partial-update semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ToolFields {
    /// Create an empty partial record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field's value if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Url => self.url.as_deref(),
        }
    }

    /// Replace exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Url => self.url = value,
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none()
    }

    /// The fields of `self` whose values differ from `base`.
    ///
    /// Used by the card editor to build the partial change set for a patch.
    pub fn diff(&self, base: &ToolFields) -> ToolFields {
        let mut changes = ToolFields::new();
        for field in [Field::Title, Field::Description, Field::Url] {
            if self.get(field) != base.get(field)
                && let Some(value) = self.get(field)
            {
                changes.set(field, value);
            }
        }
        changes
    }
}

/// One entry of the in-memory tool list.
///
/// Entries loaded from the store carry the identifier the store assigned.
/// Entries appended locally after a create carry no identifier, because the
/// create response's id is not fed back into local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Store-assigned identifier, when known.
    pub id: Option<String>,
    /// The record's fields as last seen locally.
    pub fields: ToolFields,
}

impl ToolEntry {
    /// Entry for a document fetched from the store.
    pub fn fetched(id: impl Into<String>, fields: ToolFields) -> Self {
        Self {
            id: Some(id.into()),
            fields,
        }
    }

    /// Entry for a record just submitted, before the store's id is known.
    pub fn submitted(fields: ToolFields) -> Self {
        Self { id: None, fields }
    }
}
