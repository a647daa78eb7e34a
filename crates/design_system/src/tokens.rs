//! Design-token vocabulary shared by every primitive.
//!
//! Tokens are closed Rust enums so that out-of-palette names are rejected at the
//! call site. Each token renders to a stable kebab-case name which is what the
//! style contract, serde, and [`FromStr`] all agree on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when a token name cannot be parsed back into its enum.
pub enum TokenParseError {
    /// The name is not part of the color palette.
    #[error("unknown color token `{0}`")]
    UnknownColor(String),
    /// The name is not a member of a variant set.
    #[error("unknown {kind} token `{value}`")]
    UnknownVariant {
        /// Human-readable name of the variant set.
        kind: &'static str,
        /// Rejected input.
        value: String,
    },
}

/// Declares a closed token enum with its contract name, [`FromStr`], and serde support.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable name forwarded to the style contract.
            pub const fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::tokens::TokenParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($token => Ok(Self::$variant),)+
                    _ => Err($crate::tokens::TokenParseError::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.token())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                raw.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use token_enum;

token_enum! {
    /// Base palette hues.
    pub enum Hue: "hue" {
        /// Accent hue.
        Accent => "accent",
        /// Critical/destructive hue.
        Critical => "critical",
        /// Neutral hue.
        Neutral => "neutral",
        /// Positive/success hue.
        Positive => "positive",
        /// Primary brand hue.
        Primary => "primary",
        /// Secondary brand hue.
        Secondary => "secondary",
        /// Warning hue.
        Warning => "warning",
    }
}

impl Hue {
    /// The `-subtle` shade of this hue.
    pub const fn subtle(self) -> ColorToken {
        ColorToken::Palette(self, Shade::Subtle)
    }

    /// The `-bold` shade of this hue.
    pub const fn bold(self) -> ColorToken {
        ColorToken::Palette(self, Shade::Bold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Shade applied to a palette hue.
pub enum Shade {
    /// Plain hue.
    Base,
    /// Lighter, low-contrast shade.
    Subtle,
    /// Darker, high-contrast shade.
    Bold,
}

impl Default for Shade {
    fn default() -> Self {
        Self::Base
    }
}

impl Shade {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Subtle => "-subtle",
            Self::Bold => "-bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Semantic color reference, resolved by the external token layer.
pub enum ColorToken {
    /// A palette hue at a given shade (`accent`, `accent-subtle`, `accent-bold`, ...).
    Palette(Hue, Shade),
    /// Literal black.
    Black,
    /// Literal white.
    White,
    /// Surface color used by elevated containers.
    Elevation,
    /// Inherit the surrounding color.
    Inherit,
}

impl ColorToken {
    /// `accent`
    pub const ACCENT: Self = Self::Palette(Hue::Accent, Shade::Base);
    /// `critical`
    pub const CRITICAL: Self = Self::Palette(Hue::Critical, Shade::Base);
    /// `neutral`
    pub const NEUTRAL: Self = Self::Palette(Hue::Neutral, Shade::Base);
    /// `positive`
    pub const POSITIVE: Self = Self::Palette(Hue::Positive, Shade::Base);
    /// `primary`
    pub const PRIMARY: Self = Self::Palette(Hue::Primary, Shade::Base);
    /// `secondary`
    pub const SECONDARY: Self = Self::Palette(Hue::Secondary, Shade::Base);
    /// `warning`
    pub const WARNING: Self = Self::Palette(Hue::Warning, Shade::Base);
}

impl From<Hue> for ColorToken {
    fn from(hue: Hue) -> Self {
        Self::Palette(hue, Shade::Base)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(hue, shade) => write!(f, "{}{}", hue.token(), shade.suffix()),
            Self::Black => f.write_str("black"),
            Self::White => f.write_str("white"),
            Self::Elevation => f.write_str("elevation"),
            Self::Inherit => f.write_str("inherit"),
        }
    }
}

impl FromStr for ColorToken {
    type Err = TokenParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "black" => return Ok(Self::Black),
            "white" => return Ok(Self::White),
            "elevation" => return Ok(Self::Elevation),
            "inherit" => return Ok(Self::Inherit),
            _ => {}
        }

        let (hue, shade) = if let Some(hue) = value.strip_suffix(Shade::Subtle.suffix()) {
            (hue, Shade::Subtle)
        } else if let Some(hue) = value.strip_suffix(Shade::Bold.suffix()) {
            (hue, Shade::Bold)
        } else {
            (value, Shade::Base)
        };

        hue.parse::<Hue>()
            .map(|hue| Self::Palette(hue, shade))
            .map_err(|_| TokenParseError::UnknownColor(value.to_string()))
    }
}

impl TryFrom<String> for ColorToken {
    type Error = TokenParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
/// Unitless scalar multiplied by the stylesheet's 4px base unit.
///
/// Components forward the raw scalar; they never perform the multiplication.
pub struct Multiplier(f64);

impl Multiplier {
    /// Wraps a raw scalar.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw scalar value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Multiplier {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Multiplier {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_names_follow_hue_and_shade() {
        assert_eq!(ColorToken::ACCENT.to_string(), "accent");
        assert_eq!(Hue::Critical.subtle().to_string(), "critical-subtle");
        assert_eq!(Hue::Warning.bold().to_string(), "warning-bold");
        assert_eq!(ColorToken::Elevation.to_string(), "elevation");
    }

    #[test]
    fn every_color_name_parses_back() {
        let mut names = vec!["black", "white", "elevation", "inherit"]
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        for hue in Hue::ALL {
            names.push(hue.token().to_string());
            names.push(hue.subtle().to_string());
            names.push(hue.bold().to_string());
        }

        assert_eq!(names.len(), 25);
        for name in names {
            let token: ColorToken = name.parse().expect("palette name");
            assert_eq!(token.to_string(), name);
        }
    }

    #[test]
    fn unknown_color_names_are_rejected() {
        assert_eq!(
            "magenta-bold".parse::<ColorToken>(),
            Err(TokenParseError::UnknownColor("magenta-bold".to_string()))
        );
        assert!("-subtle".parse::<ColorToken>().is_err());
    }

    #[test]
    fn tokens_serialize_as_contract_names() {
        let json = serde_json::to_string(&Hue::Positive.subtle()).expect("serialize");
        assert_eq!(json, "\"positive-subtle\"");

        let hue: Hue = serde_json::from_str("\"secondary\"").expect("deserialize");
        assert_eq!(hue, Hue::Secondary);

        let err = serde_json::from_str::<Hue>("\"teal\"").expect_err("unknown hue");
        assert!(err.to_string().contains("unknown hue token `teal`"));
    }

    #[test]
    fn multipliers_keep_the_raw_scalar() {
        assert_eq!(Multiplier::from(3).get(), 3.0);
        assert_eq!(Multiplier::from(2.5).get(), 2.5);
        assert_eq!(Multiplier::from(6_u32), Multiplier::new(6.0));
    }
}
