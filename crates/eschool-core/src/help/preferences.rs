//! User preferences for contextual help

use crate::error::{Error, Result};
use crate::persona::Persona;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tooltips are eligible to render
///
/// Persisted as a plain string. A string that is not one of the known modes
/// is kept as `Unrecognized` rather than discarded, and shows nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TooltipVisibility {
    #[default]
    All,
    Essential,
    None,
    Unrecognized(String),
}

impl TooltipVisibility {
    /// Get the persisted string form
    pub fn as_str(&self) -> &str {
        match self {
            TooltipVisibility::All => "all",
            TooltipVisibility::Essential => "essential",
            TooltipVisibility::None => "none",
            TooltipVisibility::Unrecognized(raw) => raw,
        }
    }

    /// Parse a persisted mode, keeping unknown strings
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => TooltipVisibility::All,
            "essential" => TooltipVisibility::Essential,
            "none" => TooltipVisibility::None,
            other => TooltipVisibility::Unrecognized(other.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TooltipVisibility::Unrecognized(_))
    }
}

impl From<String> for TooltipVisibility {
    fn from(s: String) -> Self {
        TooltipVisibility::parse(&s)
    }
}

impl From<TooltipVisibility> for String {
    fn from(v: TooltipVisibility) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for TooltipVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persona choice for every tooltip
///
/// `Unset` is persisted as the empty string; tooltips then fall back to
/// their own character or their context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CharacterPreference {
    #[default]
    Random,
    Persona(Persona),
    Unset,
}

impl CharacterPreference {
    /// Get the persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterPreference::Random => "random",
            CharacterPreference::Persona(p) => p.as_str(),
            CharacterPreference::Unset => "",
        }
    }
}

impl FromStr for CharacterPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "random" => Ok(CharacterPreference::Random),
            "" => Ok(CharacterPreference::Unset),
            tag => tag
                .parse::<Persona>()
                .map(CharacterPreference::Persona)
                .map_err(|_| Error::InvalidValue {
                    field: "characterPreference",
                    value: s.to_string(),
                }),
        }
    }
}

impl TryFrom<String> for CharacterPreference {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CharacterPreference> for String {
    fn from(c: CharacterPreference) -> Self {
        c.as_str().to_string()
    }
}

impl From<Persona> for CharacterPreference {
    fn from(p: Persona) -> Self {
        CharacterPreference::Persona(p)
    }
}

/// Where the tooltip bubble sits relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    #[default]
    Auto,
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    /// Get the persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TooltipPosition::Auto => "auto",
            TooltipPosition::Top => "top",
            TooltipPosition::Bottom => "bottom",
            TooltipPosition::Left => "left",
            TooltipPosition::Right => "right",
        }
    }
}

impl FromStr for TooltipPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(TooltipPosition::Auto),
            "top" => Ok(TooltipPosition::Top),
            "bottom" => Ok(TooltipPosition::Bottom),
            "left" => Ok(TooltipPosition::Left),
            "right" => Ok(TooltipPosition::Right),
            other => Err(Error::InvalidValue {
                field: "tooltipPosition",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TooltipPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interactive mode is stored as the literal strings `"true"` / `"false"`
pub(crate) fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn decode_flag(raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidValue {
            field: "interactiveMode",
            value: other.to_string(),
        }),
    }
}

/// The four user-level help settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpPreferences {
    pub tooltip_visibility: TooltipVisibility,
    pub character_preference: CharacterPreference,
    pub tooltip_position: TooltipPosition,
    pub interactive_mode: bool,
}

impl Default for HelpPreferences {
    fn default() -> Self {
        Self {
            tooltip_visibility: TooltipVisibility::All,
            character_preference: CharacterPreference::Random,
            tooltip_position: TooltipPosition::Auto,
            interactive_mode: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_keeps_unknown_strings() {
        assert_eq!(TooltipVisibility::parse("essential"), TooltipVisibility::Essential);
        let odd = TooltipVisibility::parse("sometimes");
        assert!(!odd.is_recognized());
        assert_eq!(odd.as_str(), "sometimes");
    }

    #[test]
    fn test_character_preference_parse() {
        assert_eq!("random".parse::<CharacterPreference>().unwrap(), CharacterPreference::Random);
        assert_eq!("".parse::<CharacterPreference>().unwrap(), CharacterPreference::Unset);
        assert_eq!(
            "mentor".parse::<CharacterPreference>().unwrap(),
            CharacterPreference::Persona(Persona::Mentor)
        );
        assert!("pirate".parse::<CharacterPreference>().is_err());
    }

    #[test]
    fn test_flag_encoding() {
        assert_eq!(encode_flag(true), "true");
        assert!(!decode_flag("false").unwrap());
        assert!(decode_flag("yes").is_err());
    }

    #[test]
    fn test_preferences_ron_with_missing_fields() {
        let ron_str = r#"
        (
            tooltip_visibility: "essential",
            character_preference: "wizard",
        )
        "#;

        let prefs: HelpPreferences = ron::from_str(ron_str).unwrap();
        assert_eq!(prefs.tooltip_visibility, TooltipVisibility::Essential);
        assert_eq!(
            prefs.character_preference,
            CharacterPreference::Persona(Persona::Wizard)
        );
        assert_eq!(prefs.tooltip_position, TooltipPosition::Auto);
        assert!(prefs.interactive_mode);
    }
}
