use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::core::extractor::ColourSchemes;
use crate::core::matcher::match_presets;
use crate::core::record::Profile;

/// Which summary to print before exporting.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReportMode {
    Matches,
    Unused,
    Silent,
}

/// A profile together with every preset it matches.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileMatch {
    pub profile: String,
    pub presets: Vec<String>,
}

impl fmt::Display for ProfileMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "profile ({}) matches ({})", self.profile, self.presets.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    Matches(Vec<ProfileMatch>),
    UnusedPresets(Vec<String>),
}

impl Report {
    pub fn build(mode: ReportMode, schemes: &ColourSchemes) -> Option<Report> {
        match mode {
            ReportMode::Matches => Some(Report::Matches(match_report(schemes))),
            ReportMode::Unused => Some(Report::UnusedPresets(unused_presets(schemes))),
            ReportMode::Silent => None,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Matches(matches) => matches.iter().map(ToString::to_string).collect(),
            Report::UnusedPresets(names) => {
                names.iter().map(|name| format!("preset ({}) unused", name)).collect()
            }
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

/// Profiles that match at least one preset, in bookmark order.
///
/// A profile that cannot be matched or has no name is left out with a warning;
/// the export reports it again on its own terms.
pub fn match_report(schemes: &ColourSchemes) -> Vec<ProfileMatch> {
    let mut report = Vec::new();
    for profile in &schemes.profiles {
        let Some(matches) = matches_or_warn(profile, schemes) else {
            continue;
        };
        if matches.is_empty() {
            continue;
        }
        match profile.name() {
            Ok(name) => report.push(ProfileMatch {
                profile: name.to_string(),
                presets: matches.into_iter().collect(),
            }),
            Err(err) => log::warn!("Skipping profile in match report: {}", err),
        }
    }
    report
}

/// Presets that no profile matches, sorted by name.
///
/// Profiles whose colours cannot be compared claim no presets.
pub fn unused_presets(schemes: &ColourSchemes) -> Vec<String> {
    let mut unused: BTreeSet<&str> = schemes.presets.keys().map(String::as_str).collect();
    for profile in &schemes.profiles {
        for name in matches_or_warn(profile, schemes).unwrap_or_default() {
            unused.remove(name.as_str());
        }
    }
    unused.into_iter().map(str::to_string).collect()
}

fn matches_or_warn(profile: &Profile, schemes: &ColourSchemes) -> Option<BTreeSet<String>> {
    match match_presets(profile, &schemes.presets) {
        Ok(matches) => Some(matches),
        Err(err) => {
            log::warn!("Skipping profile #{} in report: {}", profile.index, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::ColourValue;
    use crate::core::record::test_support::{presets, profile, record};
    use pretty_assertions::assert_eq;

    const BLACK: ColourValue = ColourValue { red: 0.0, green: 0.0, blue: 0.0 };
    const WHITE: ColourValue = ColourValue { red: 1.0, green: 1.0, blue: 1.0 };

    fn default_black() -> ColourSchemes {
        ColourSchemes {
            profiles: vec![profile("Default", &[("Background Color", BLACK)])],
            presets: presets(vec![("Black", record(&[("Background Color", BLACK)]))]),
        }
    }

    #[test]
    fn test_default_matches_black() {
        let report = Report::build(ReportMode::Matches, &default_black()).unwrap();
        assert_eq!(report.lines(), vec!["profile (Default) matches (Black)".to_string()]);
    }

    #[test]
    fn test_matched_preset_is_not_unused() {
        let report = Report::build(ReportMode::Unused, &default_black()).unwrap();
        assert!(report.lines().is_empty());
    }

    #[test]
    fn test_unused_is_all_minus_matched() {
        let schemes = ColourSchemes {
            profiles: vec![
                profile("Dark", &[("Background Color", BLACK)]),
                profile("Light", &[("Background Color", WHITE)]),
            ],
            presets: presets(vec![
                ("Black", record(&[("Background Color", BLACK)])),
                ("White", record(&[("Background Color", WHITE)])),
                ("Grey", record(&[("Background Color", ColourValue::new(0.5, 0.5, 0.5))])),
                ("Red", record(&[("Background Color", ColourValue::new(1.0, 0.0, 0.0))])),
            ]),
        };
        assert_eq!(unused_presets(&schemes), vec!["Grey".to_string(), "Red".to_string()]);

        let lines = Report::UnusedPresets(unused_presets(&schemes)).lines();
        assert_eq!(lines, vec!["preset (Grey) unused", "preset (Red) unused"]);
    }

    #[test]
    fn test_profiles_without_matches_are_omitted() {
        let schemes = ColourSchemes {
            profiles: vec![
                profile("Light", &[("Background Color", WHITE)]),
                profile("Dark", &[("Background Color", BLACK)]),
            ],
            presets: presets(vec![
                ("Black", record(&[("Background Color", BLACK)])),
                ("Empty", record(&[])),
            ]),
        };
        let report = match_report(&schemes);
        assert_eq!(
            report,
            vec![
                ProfileMatch { profile: "Light".to_string(), presets: vec!["Empty".to_string()] },
                ProfileMatch {
                    profile: "Dark".to_string(),
                    presets: vec!["Black".to_string(), "Empty".to_string()],
                },
            ]
        );
        assert_eq!(report[1].to_string(), "profile (Dark) matches (Black, Empty)");
    }

    #[test]
    fn test_silent_mode_builds_nothing() {
        assert_eq!(Report::build(ReportMode::Silent, &default_black()), None);
    }

    #[test]
    fn test_json_output() {
        let report = Report::build(ReportMode::Matches, &default_black()).unwrap();
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({ "matches": [{ "profile": "Default", "presets": ["Black"] }] })
        );
    }

    #[test]
    fn test_text_output() {
        let report = Report::UnusedPresets(vec!["Solarized".to_string()]);
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "preset (Solarized) unused\n");
    }

    #[test]
    fn test_nameless_profile_is_left_out() {
        let nameless = Profile::new(0, record(&[("Background Color", BLACK)]));
        let schemes = ColourSchemes {
            profiles: vec![nameless, profile("Default", &[("Background Color", BLACK)])],
            presets: presets(vec![("Black", record(&[("Background Color", BLACK)]))]),
        };
        assert_eq!(
            Report::Matches(match_report(&schemes)).lines(),
            vec!["profile (Default) matches (Black)".to_string()]
        );
    }

    #[test]
    fn test_malformed_profile_claims_no_presets() {
        let mut broken = plist::Dictionary::new();
        broken.insert("Name".to_string(), plist::Value::String("Broken".to_string()));
        broken.insert("Background Color".to_string(), plist::Value::Boolean(true));
        let schemes = ColourSchemes {
            profiles: vec![
                Profile::new(0, crate::core::record::ColourRecord::new(broken)),
                profile("Light", &[("Background Color", WHITE)]),
            ],
            presets: presets(vec![
                ("Black", record(&[("Background Color", BLACK)])),
                ("White", record(&[("Background Color", WHITE)])),
            ]),
        };
        assert_eq!(unused_presets(&schemes), vec!["Black".to_string()]);
        assert_eq!(match_report(&schemes).len(), 1);
    }
}
