//! Shared control primitives and the token enums they are configured with.

use std::fmt;
use std::str::FromStr;

use leptos::ev::MouseEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{percent, px, StyleMap};

mod button;
mod card;
mod input;
mod slider;

pub use button::{button_style, Button};
pub use card::{card_style, Card};
pub use input::{input_container_style, input_helper_style, next_input_id, TextInput};
pub use slider::{Slider, SliderSizeSpec};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected token name while parsing primitive configuration.
pub enum TokenParseError {
    /// The input does not name a known token of the given family.
    #[error("unknown {family} token `{value}`")]
    Unknown {
        /// Token family, for example `button variant`.
        family: &'static str,
        /// Rejected input.
        value: String,
    },
}

impl TokenParseError {
    fn unknown(family: &'static str, value: &str) -> Self {
        Self::Unknown {
            family,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Brand-filled primary action.
    Primary,
    /// Bordered neutral action.
    Secondary,
    /// Brand-outlined action on a transparent fill.
    Outline,
    /// Borderless transparent action.
    Ghost,
    /// Destructive action.
    Destructive,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "outline" => Ok(Self::Outline),
            "ghost" => Ok(Self::Ghost),
            "destructive" => Ok(Self::Destructive),
            _ => Err(TokenParseError::unknown("button variant", raw)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared control sizing tokens.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl FromStr for ControlSize {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(TokenParseError::unknown("size", raw)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Text-input surface variants.
pub enum InputVariant {
    /// Bordered input.
    Outline,
    /// Filled input.
    Filled,
    /// Bare input with no chrome.
    Unstyled,
}

impl Default for InputVariant {
    fn default() -> Self {
        Self::Outline
    }
}

impl InputVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Filled => "filled",
            Self::Unstyled => "unstyled",
        }
    }
}

impl FromStr for InputVariant {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "outline" => Ok(Self::Outline),
            "filled" => Ok(Self::Filled),
            "unstyled" => Ok(Self::Unstyled),
            _ => Err(TokenParseError::unknown("input variant", raw)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Where slider value labels render.
pub enum LabelPosition {
    /// Plain label below each handle.
    Bottom,
    /// Floating tooltip above each handle.
    TopFloating,
    /// No labels.
    None,
}

impl Default for LabelPosition {
    fn default() -> Self {
        Self::Bottom
    }
}

impl LabelPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::TopFloating => "top-floating",
            Self::None => "none",
        }
    }
}

impl FromStr for LabelPosition {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "bottom" => Ok(Self::Bottom),
            "top-floating" => Ok(Self::TopFloating),
            "none" => Ok(Self::None),
            _ => Err(TokenParseError::unknown("label position", raw)),
        }
    }
}

macro_rules! display_token {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        })+
    };
}

display_token!(ButtonVariant, ControlSize, InputVariant, LabelPosition);

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_documented_props() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ControlSize::default(), ControlSize::Md);
        assert_eq!(InputVariant::default(), InputVariant::Outline);
        assert_eq!(LabelPosition::default(), LabelPosition::Bottom);
    }

    #[test]
    fn tokens_parse_back_to_variants() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Destructive,
        ] {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
        }
        assert_eq!("top-floating".parse(), Ok(LabelPosition::TopFloating));
        assert_eq!("lg".parse(), Ok(ControlSize::Lg));
        assert_eq!("filled".parse(), Ok(InputVariant::Filled));
    }

    #[test]
    fn unknown_tokens_name_their_family() {
        let err = "huge".parse::<ControlSize>().unwrap_err();
        assert_eq!(err.to_string(), "unknown size token `huge`");
        assert!("Primary".parse::<ButtonVariant>().is_err());
    }

    #[test]
    fn serde_names_match_dom_tokens() {
        let encoded = serde_json::to_string(&LabelPosition::TopFloating).expect("encode");
        assert_eq!(encoded, "\"top-floating\"");
        let decoded: ButtonVariant = serde_json::from_str("\"destructive\"").expect("decode");
        assert_eq!(decoded, ButtonVariant::Destructive);
        assert_eq!(ControlSize::Sm.to_string(), "sm");
    }

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("card", Some("wide")), "card wide");
        assert_eq!(merge_layout_class("card", Some("")), "card");
        assert_eq!(merge_layout_class("card", None), "card");
    }
}
