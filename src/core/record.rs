use std::collections::BTreeMap;

use plist::{Dictionary, Value};

use crate::colour::{is_colour_field, ColourValue, COLOUR_FIELDS};
use crate::core::error::{Error, Result};

pub const NAME_KEY: &str = "Name";

/// A profile or preset dictionary as found in the preferences.
///
/// Everything the document held is kept; only the recognized colour fields
/// are ever looked at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColourRecord {
    fields: Dictionary,
}

impl ColourRecord {
    pub fn new(fields: Dictionary) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Recognized colour fields present in this record, in export order.
    pub fn colour_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        COLOUR_FIELDS
            .iter()
            .copied()
            .filter(move |field| self.fields.contains_key(field))
    }

    pub fn colour(&self, field: &str) -> Result<Option<ColourValue>> {
        if !is_colour_field(field) {
            return Ok(None);
        }
        self.fields
            .get(field)
            .map(|value| ColourValue::from_plist(field, value))
            .transpose()
    }

    /// Copy of the recognized colour fields only, values untouched.
    pub fn colour_scheme(&self) -> Dictionary {
        let mut scheme = Dictionary::new();
        for field in self.colour_fields() {
            if let Some(value) = self.fields.get(field) {
                scheme.insert(field.to_string(), value.clone());
            }
        }
        scheme
    }
}

/// An entry of `New Bookmarks`.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Position in the bookmark list, used when the name is missing.
    pub index: usize,
    pub record: ColourRecord,
}

impl Profile {
    pub fn new(index: usize, record: ColourRecord) -> Self {
        Self { index, record }
    }

    pub fn name(&self) -> Result<&str> {
        self.record
            .get(NAME_KEY)
            .and_then(Value::as_string)
            .ok_or(Error::MissingName { index: self.index })
    }
}

/// `Custom Color Presets`, keyed by preset name.
pub type Presets = BTreeMap<String, ColourRecord>;
