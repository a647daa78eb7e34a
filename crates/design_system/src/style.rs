//! Style-variable mapper shared by every primitive.
//!
//! Components translate their typed configuration into a [`ResolvedStyle`]: an
//! ordered, deduplicated [`ClassList`] plus a [`StyleVars`] map of private
//! `--_*` custom properties. Keys a component owns are always present in the
//! map; a field that was not supplied is recorded as [`StyleValue::Unset`]
//! rather than omitted, so a value cascading from an ancestor primitive is
//! explicitly reset instead of silently inherited.

use std::borrow::Cow;
use std::fmt;

use leptos::logging;

use crate::contract::StyleContract;
use crate::tokens::{ColorToken, Multiplier};

/// Private custom-property keys written by the primitives.
///
/// These keys are a versioned contract with the stylesheet layer.
pub mod vars {
    /// Cross-axis item alignment.
    pub const ALIGN_ITEMS: &str = "--_ai";
    /// Aspect ratio.
    pub const ASPECT_RATIO: &str = "--_ar";
    /// Cross-axis self alignment.
    pub const ALIGN_SELF: &str = "--_as";
    /// Backdrop filter.
    pub const BACKDROP_FILTER: &str = "--_bf";
    /// Background color reference.
    pub const BACKGROUND: &str = "--_bg";
    /// Background image `url(..)`.
    pub const BACKGROUND_IMAGE: &str = "--_bgi";
    /// Background position.
    pub const BACKGROUND_POSITION: &str = "--_bgp";
    /// Background size.
    pub const BACKGROUND_SIZE: &str = "--_bgs";
    /// Foreground color reference.
    pub const COLOR: &str = "--_clr";
    /// Corner shape.
    pub const CORNER_SHAPE: &str = "--_cs";
    /// Flex direction.
    pub const DIRECTION: &str = "--_dir";
    /// Font style.
    pub const FONT_STYLE: &str = "--_fs";
    /// Font weight reference.
    pub const FONT_WEIGHT: &str = "--_fw";
    /// Grid area placement.
    pub const GRID_AREA: &str = "--_ga";
    /// Gap multiplier.
    pub const GAP: &str = "--_gap";
    /// Grid template areas.
    pub const GRID_TEMPLATE_AREAS: &str = "--_gta";
    /// Grid template columns.
    pub const GRID_TEMPLATE_COLUMNS: &str = "--_gtc";
    /// Grid template rows.
    pub const GRID_TEMPLATE_ROWS: &str = "--_gtr";
    /// Height.
    pub const HEIGHT: &str = "--_h";
    /// Main-axis content justification.
    pub const JUSTIFY_CONTENT: &str = "--_jc";
    /// Main-axis self justification.
    pub const JUSTIFY_SELF: &str = "--_js";
    /// Line clamp count.
    pub const LINE_CLAMP: &str = "--_lc";
    /// Top margin multiplier.
    pub const MARGIN_TOP: &str = "--_mt";
    /// Maximum width.
    pub const MAX_WIDTH: &str = "--_mw";
    /// Opacity.
    pub const OPACITY: &str = "--_op";
    /// Uniform padding multiplier.
    pub const PADDING: &str = "--_pa";
    /// Inline-axis padding multiplier.
    pub const PADDING_INLINE: &str = "--_px";
    /// Block-axis padding multiplier.
    pub const PADDING_BLOCK: &str = "--_py";
    /// Size multiplier.
    pub const SIZE: &str = "--_size";
    /// Image source `url(..)`.
    pub const SOURCE: &str = "--_src";
    /// Text alignment.
    pub const TEXT_ALIGN: &str = "--_ta";
    /// Text decoration.
    pub const TEXT_DECORATION: &str = "--_td";
    /// Text transform.
    pub const TEXT_TRANSFORM: &str = "--_tt";
    /// Text wrapping.
    pub const TEXT_WRAP: &str = "--_tw";
    /// Width.
    pub const WIDTH: &str = "--_w";

    /// Prefix reserved for component-owned keys.
    pub const PRIVATE_PREFIX: &str = "--_";
}

/// Builds `var(--{namespace}-color-{token})` for any token name.
///
/// Names are interpolated verbatim; nothing checks that the stylesheet defines them.
pub fn color_reference(token: impl fmt::Display, contract: &StyleContract) -> String {
    format!("var(--{}-color-{token})", contract.token_namespace)
}

/// Builds `var(--{namespace}-type-weight-{step})`.
pub fn weight_reference(step: &str, contract: &StyleContract) -> String {
    format!("var(--{}-type-weight-{step})", contract.token_namespace)
}

#[derive(Debug, Clone, PartialEq)]
/// A resolved style-variable value.
pub enum StyleValue {
    /// A raw scalar such as a multiplier or an opacity.
    Number(f64),
    /// A CSS value or token reference.
    Text(Cow<'static, str>),
    /// Explicit override to empty. Rendered as the CSS-wide `initial` keyword.
    Unset,
}

impl StyleValue {
    /// Wraps text, treating blank input as [`StyleValue::Unset`].
    pub fn text(value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Unset
        } else {
            Self::Text(value)
        }
    }

    /// Wraps a scalar. NaN and infinities are not valid CSS and become
    /// [`StyleValue::Unset`].
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            logging::debug_warn!("non-finite style value {value} replaced with `initial`");
            Self::Unset
        }
    }

    /// Whether this value resets the key.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.is_finite() => write!(f, "{value}"),
            Self::Number(_) | Self::Unset => f.write_str("initial"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&'static str> for StyleValue {
    fn from(value: &'static str) -> Self {
        Self::text(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Multiplier> for StyleValue {
    fn from(value: Multiplier) -> Self {
        Self::number(value.get())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Ordered map of private custom properties.
pub struct StyleVars {
    entries: Vec<(&'static str, StyleValue)>,
}

impl StyleVars {
    /// Records `value` for `key`, or [`StyleValue::Unset`] when `value` is `None`.
    ///
    /// Re-setting a key replaces its value in place.
    pub fn set<V>(&mut self, key: &'static str, value: Option<V>) -> &mut Self
    where
        V: Into<StyleValue>,
    {
        match value {
            Some(value) => self.insert(key, value.into()),
            None => self.unset(key),
        }
    }

    /// Records `key` as explicitly unset.
    pub fn unset(&mut self, key: &'static str) -> &mut Self {
        self.insert(key, StyleValue::Unset)
    }

    fn insert(&mut self, key: &'static str, value: StyleValue) -> &mut Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Records a color token as a `var(..)` reference into the contract namespace.
    pub fn set_color(
        &mut self,
        key: &'static str,
        token: Option<ColorToken>,
        contract: &StyleContract,
    ) -> &mut Self {
        self.set(key, token.map(|token| color_reference(token, contract)))
    }

    /// Value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of recorded keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered, deduplicated class tokens.
pub struct ClassList {
    tokens: Vec<Cow<'static, str>>,
}

impl ClassList {
    /// Starts a list with the component's base class.
    pub fn new(base: &'static str) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    /// Appends `token` unless it is blank or already present.
    pub fn push(&mut self, token: impl Into<Cow<'static, str>>) -> &mut Self {
        let token = token.into();
        if !token.trim().is_empty() && !self.contains(&token) {
            self.tokens.push(token);
        }
        self
    }

    /// Appends `token` when `condition` holds.
    pub fn push_if(&mut self, condition: bool, token: impl Into<Cow<'static, str>>) -> &mut Self {
        if condition {
            self.push(token);
        }
        self
    }

    /// Appends every whitespace-separated token of a caller-supplied class string.
    pub fn extend_raw(&mut self, raw: &str) -> &mut Self {
        for token in raw.split_whitespace() {
            self.push(token.to_string());
        }
        self
    }

    /// Whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|existing| existing == token)
    }

    /// Tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|token| token.as_ref())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Caller-supplied inline declarations, merged after the computed variables.
pub struct StyleOverrides {
    declarations: Vec<(String, String)>,
}

impl StyleOverrides {
    /// Empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration. A repeated property replaces the earlier value; blank
    /// properties or values are ignored.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property.into(), value.into());
        self
    }

    /// Parses an inline declaration block such as `"margin-top: 10px; color: red"`.
    ///
    /// Semicolons inside parentheses or quotes (`url(data:image/png;base64,..)`)
    /// belong to the value and do not end a declaration.
    pub fn parse(raw: &str) -> Self {
        let mut overrides = Self::default();
        for declaration in split_declarations(raw) {
            if let Some((property, value)) = declaration.split_once(':') {
                overrides.insert(property.to_string(), value.to_string());
            }
        }
        overrides
    }

    /// Appends every declaration of `other`; repeated properties take its value.
    pub fn merge(&mut self, other: StyleOverrides) -> &mut Self {
        for (property, value) in other.declarations {
            self.insert(property, value);
        }
        self
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Whether there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn insert(&mut self, property: String, value: String) {
        let property = property.trim().to_string();
        let value = value.trim().to_string();
        if property.is_empty() || value.is_empty() {
            return;
        }
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some((_, slot)) => *slot = value,
            None => self.declarations.push((property, value)),
        }
    }
}

/// Splits on `;` at nesting depth zero and outside string literals.
fn split_declarations(raw: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (index, ch) in raw.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, ch) {
            (_, '\\') => escaped = true,
            (Some(open), _) if ch == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                declarations.push(&raw[start..index]);
                start = index + 1;
            }
            (None, _) => {}
        }
    }
    declarations.push(&raw[start..]);
    declarations
}

impl From<&str> for StyleOverrides {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for StyleOverrides {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |overrides, (property, value)| {
                overrides.with(property, value)
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Output of a component's style mapping.
pub struct ResolvedStyle {
    /// Class tokens, base class first.
    pub classes: ClassList,
    /// Private custom properties.
    pub vars: StyleVars,
}

impl ResolvedStyle {
    /// Starts a resolution with the component's base class and no variables.
    pub fn new(base_class: &'static str) -> Self {
        Self {
            classes: ClassList::new(base_class),
            vars: StyleVars::default(),
        }
    }

    /// Appends caller-supplied classes after the computed ones.
    pub fn with_class(mut self, class: Option<&str>) -> Self {
        if let Some(class) = class {
            self.classes.extend_raw(class);
        }
        self
    }

    /// Value of the `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.to_string()
    }

    /// Serializes the computed variables followed by `overrides` into an inline
    /// `style` attribute value.
    ///
    /// An override naming a computed key replaces that key's value in place;
    /// every other override is appended in its own order.
    pub fn to_css(&self, overrides: &StyleOverrides) -> String {
        let mut declarations: Vec<(Cow<'_, str>, String)> = self
            .vars
            .iter()
            .map(|(key, value)| (Cow::Borrowed(key), value.to_string()))
            .collect();

        for (property, value) in overrides.iter() {
            match declarations
                .iter_mut()
                .find(|(existing, _)| *existing == property)
            {
                Some((_, slot)) => {
                    if property.starts_with(vars::PRIVATE_PREFIX) {
                        logging::debug_warn!(
                            "style override `{property}` shadows a component-owned variable"
                        );
                    }
                    *slot = value.to_string();
                }
                None => declarations.push((Cow::Borrowed(property), value.to_string())),
            }
        }

        declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Hue;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_values_are_explicitly_unset() {
        let mut vars = StyleVars::default();
        vars.set(vars::GAP, Some(Multiplier::from(2)))
            .set::<String>(vars::WIDTH, None);

        assert_eq!(vars.get(vars::GAP), Some(&StyleValue::Number(2.0)));
        assert_eq!(vars.get(vars::WIDTH), Some(&StyleValue::Unset));
        assert_eq!(vars.get(vars::HEIGHT), None);
    }

    #[test]
    fn blank_text_never_becomes_an_empty_value() {
        assert_eq!(StyleValue::text(""), StyleValue::Unset);
        assert_eq!(StyleValue::text("   "), StyleValue::Unset);
        assert_eq!(StyleValue::Unset.to_string(), "initial");
    }

    #[test]
    fn resetting_a_key_keeps_its_position() {
        let mut vars = StyleVars::default();
        vars.set(vars::GAP, Some(1.0))
            .set(vars::PADDING, Some(2.0))
            .set(vars::GAP, Some(3.0));

        let keys = vars.iter().map(|(key, _)| key).collect::<Vec<_>>();
        assert_eq!(keys, vec![vars::GAP, vars::PADDING]);
        assert_eq!(vars.get(vars::GAP), Some(&StyleValue::Number(3.0)));
    }

    #[test]
    fn color_tokens_become_namespace_references() {
        let contract = StyleContract::default();
        let mut vars = StyleVars::default();
        vars.set_color(vars::BACKGROUND, Some(Hue::Accent.subtle()), &contract);

        assert_eq!(
            vars.get(vars::BACKGROUND).map(ToString::to_string),
            Some("var(--dxy-color-accent-subtle)".to_string())
        );
    }

    #[test]
    fn unknown_token_names_are_interpolated_verbatim() {
        let contract = StyleContract {
            token_namespace: "acme".to_string(),
        };
        assert_eq!(
            color_reference("not-a-token", &contract),
            "var(--acme-color-not-a-token)"
        );
        assert_eq!(
            weight_reference("medium", &contract),
            "var(--acme-type-weight-medium)"
        );
    }

    #[test]
    fn numbers_render_in_shortest_form() {
        assert_eq!(StyleValue::Number(2.0).to_string(), "2");
        assert_eq!(StyleValue::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn class_list_deduplicates_and_keeps_order() {
        let mut classes = ClassList::new("ui-box");
        classes
            .push("ui-box--grid")
            .push_if(false, "ui-box--elevated")
            .push("ui-box--grid")
            .push("")
            .extend_raw("  custom   ui-box extra ");

        assert_eq!(classes.to_string(), "ui-box ui-box--grid custom extra");
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn overrides_merge_after_computed_variables() {
        let mut resolved = ResolvedStyle::new("ui-box");
        resolved
            .vars
            .set(vars::GAP, Some(2.0))
            .set::<String>(vars::WIDTH, None);

        let overrides = StyleOverrides::new()
            .with("margin-top", "10px")
            .with(vars::GAP, "5");

        assert_eq!(
            resolved.to_css(&overrides),
            "--_gap: 5; --_w: initial; margin-top: 10px"
        );
    }

    #[test]
    fn overrides_parse_inline_declarations() {
        let overrides = StyleOverrides::from("margin-top: 10px; ; color:red; color: blue; width:");
        assert_eq!(
            overrides.iter().collect::<Vec<_>>(),
            vec![("margin-top", "10px"), ("color", "blue")]
        );

        let from_pairs = StyleOverrides::from([("opacity", "0.5")]);
        assert_eq!(from_pairs.iter().collect::<Vec<_>>(), vec![("opacity", "0.5")]);
    }

    #[test]
    fn semicolons_inside_urls_and_strings_stay_in_the_value() {
        let overrides = StyleOverrides::from(
            "background-image: url(data:image/png;base64,iVBOR); color: red; \
             content: 'a;b'; font-family: \"x;y\", serif",
        );
        assert_eq!(
            overrides.iter().collect::<Vec<_>>(),
            vec![
                ("background-image", "url(data:image/png;base64,iVBOR)"),
                ("color", "red"),
                ("content", "'a;b'"),
                ("font-family", "\"x;y\", serif"),
            ]
        );
    }

    #[test]
    fn merged_overrides_replace_repeated_properties() {
        let mut overrides = StyleOverrides::new().with("color", "red").with("opacity", "1");
        overrides.merge(StyleOverrides::from("opacity: 0.5; margin-top: 4px"));
        assert_eq!(
            overrides.iter().collect::<Vec<_>>(),
            vec![("color", "red"), ("opacity", "0.5"), ("margin-top", "4px")]
        );
    }

    #[test]
    fn non_finite_numbers_never_reach_the_style_attribute() {
        assert_eq!(StyleValue::from(f64::NAN), StyleValue::Unset);
        assert_eq!(StyleValue::from(Multiplier::new(f64::INFINITY)), StyleValue::Unset);
        assert_eq!(StyleValue::Number(f64::NEG_INFINITY).to_string(), "initial");

        let mut vars = StyleVars::default();
        vars.set(vars::OPACITY, Some(f64::NAN));
        assert_eq!(vars.get(vars::OPACITY), Some(&StyleValue::Unset));
    }

    #[test]
    fn unset_replaces_an_earlier_value_in_place() {
        let mut vars = StyleVars::default();
        vars.set(vars::GAP, Some(2.0))
            .set(vars::WIDTH, Some("100%"))
            .unset(vars::GAP);

        assert_eq!(
            vars.iter().collect::<Vec<_>>(),
            vec![
                (vars::GAP, &StyleValue::Unset),
                (vars::WIDTH, &StyleValue::text("100%")),
            ]
        );
    }

    #[test]
    fn empty_resolution_serializes_to_nothing() {
        let resolved = ResolvedStyle::new("ui-icon").with_class(Some("a b"));
        assert_eq!(resolved.to_css(&StyleOverrides::default()), "");
        assert_eq!(resolved.class_attr(), "ui-icon a b");
    }
}
