use std::collections::BTreeSet;

use crate::core::error::Result;
use crate::core::record::{ColourRecord, Presets, Profile};

/// Names of the presets whose colours agree with `profile`.
pub fn match_presets(profile: &Profile, presets: &Presets) -> Result<BTreeSet<String>> {
    let mut matches = BTreeSet::new();
    for (name, preset) in presets {
        if scheme_matches(&profile.record, preset)? {
            matches.insert(name.clone());
        }
    }
    Ok(matches)
}

/// Compare every colour the preset defines against the same slot in the
/// profile, stopping at the first difference.
///
/// Slots the profile lacks are skipped, so a preset sharing no slots with the
/// profile matches it.
pub fn scheme_matches(profile: &ColourRecord, preset: &ColourRecord) -> Result<bool> {
    for field in preset.colour_fields() {
        let Some(profile_colour) = profile.colour(field)? else {
            continue;
        };
        let Some(preset_colour) = preset.colour(field)? else {
            continue;
        };
        if !preset_colour.matches(&profile_colour) {
            log::trace!("{} differs: {:?} vs {:?}", field, preset_colour, profile_colour);
            return Ok(false);
        }
    }
    Ok(true)
}
