use plist::{Dictionary, Value};

use crate::core::error::{Error, Result};
use crate::core::record::{ColourRecord, Presets, Profile};

pub const PROFILES_KEY: &str = "New Bookmarks";
pub const PRESETS_KEY: &str = "Custom Color Presets";

/// Profiles and presets pulled out of one preference document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColourSchemes {
    pub profiles: Vec<Profile>,
    pub presets: Presets,
}

/// Locate the profile list and the preset mapping in a decoded document.
///
/// A missing key yields an empty collection. Colour values are not inspected.
pub fn extract(document: &Dictionary) -> Result<ColourSchemes> {
    let profiles = match document.get(PROFILES_KEY) {
        None => Vec::new(),
        Some(value) => {
            let entries = value.as_array().ok_or_else(|| unexpected(PROFILES_KEY, "array"))?;
            entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    as_record(entry, PROFILES_KEY).map(|record| Profile::new(index, record))
                })
                .collect::<Result<Vec<_>>>()?
        }
    };

    let presets = match document.get(PRESETS_KEY) {
        None => Presets::new(),
        Some(value) => {
            let entries = value.as_dictionary().ok_or_else(|| unexpected(PRESETS_KEY, "dictionary"))?;
            entries
                .iter()
                .map(|(name, entry)| Ok((name.clone(), as_record(entry, PRESETS_KEY)?)))
                .collect::<Result<Presets>>()?
        }
    };

    log::debug!("Found {} profile(s) and {} preset(s)", profiles.len(), presets.len());
    Ok(ColourSchemes { profiles, presets })
}

fn as_record(value: &Value, key: &str) -> Result<ColourRecord> {
    value
        .as_dictionary()
        .map(|dict| ColourRecord::new(dict.clone()))
        .ok_or_else(|| unexpected(key, "dictionary entries"))
}

fn unexpected(key: &str, expected: &'static str) -> Error {
    Error::UnexpectedType { key: key.to_string(), expected }
}
