use super::*;

const TEXT_CLASS: &str = "ui-text";

token_enum! {
    /// Typographic scale steps. Each step is one stylesheet class bundling
    /// family, size, line height, and weight.
    pub enum TextVariant: "text-variant" {
        /// Primary body copy.
        Body1 => "body-1",
        /// Secondary body copy.
        Body2 => "body-2",
        /// Primary caption.
        Caption1 => "caption-1",
        /// Secondary caption.
        Caption2 => "caption-2",
        /// Largest featured display step.
        Featured1 => "featured-1",
        /// Medium featured display step.
        Featured2 => "featured-2",
        /// Smallest featured display step.
        Featured3 => "featured-3",
        /// Largest title.
        Title1 => "title-1",
        /// Medium title.
        Title2 => "title-2",
        /// Smallest title.
        Title3 => "title-3",
    }
}

impl Default for TextVariant {
    fn default() -> Self {
        Self::Body1
    }
}

impl TextVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Body1 => "ui-text--body-1",
            Self::Body2 => "ui-text--body-2",
            Self::Caption1 => "ui-text--caption-1",
            Self::Caption2 => "ui-text--caption-2",
            Self::Featured1 => "ui-text--featured-1",
            Self::Featured2 => "ui-text--featured-2",
            Self::Featured3 => "ui-text--featured-3",
            Self::Title1 => "ui-text--title-1",
            Self::Title2 => "ui-text--title-2",
            Self::Title3 => "ui-text--title-3",
        }
    }
}

token_enum! {
    /// Text alignment.
    pub enum TextAlign: "text-align" {
        /// `center`
        Center => "center",
        /// `justify`
        Justify => "justify",
        /// `left`
        Left => "left",
        /// `right`
        Right => "right",
    }
}

token_enum! {
    /// Text decoration.
    pub enum TextDecoration: "text-decoration" {
        /// `line-through`
        LineThrough => "line-through",
        /// `none`
        None => "none",
        /// `underline`
        Underline => "underline",
    }
}

token_enum! {
    /// Text transform.
    pub enum TextTransform: "text-transform" {
        /// `capitalize`
        Capitalize => "capitalize",
        /// `lowercase`
        Lowercase => "lowercase",
        /// `none`
        None => "none",
        /// `uppercase`
        Uppercase => "uppercase",
    }
}

token_enum! {
    /// Text wrapping behavior.
    pub enum TextWrap: "text-wrap" {
        /// `balance`
        Balance => "balance",
        /// `nowrap`
        Nowrap => "nowrap",
        /// `pretty`
        Pretty => "pretty",
        /// `wrap`
        Wrap => "wrap",
    }
}

token_enum! {
    /// Font weight override, independent of the variant's own weight.
    pub enum TextWeight: "text-weight" {
        /// Bold weight.
        Bold => "bold",
        /// Regular weight.
        Normal => "normal",
        /// Semibold weight, backed by the `medium` type token.
        Semibold => "semibold",
    }
}

impl TextWeight {
    fn type_step(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Normal => "normal",
            Self::Semibold => "medium",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Configuration of the typography primitive.
pub struct TextStyle {
    /// Scale step. Defaults to [`TextVariant::Body1`].
    pub variant: Option<TextVariant>,
    /// Text color token.
    pub color: Option<ColorToken>,
    /// Alignment.
    pub align: Option<TextAlign>,
    /// Decoration.
    pub decoration: Option<TextDecoration>,
    /// Case transform.
    pub transform: Option<TextTransform>,
    /// Wrapping behavior.
    pub wrap: Option<TextWrap>,
    /// Weight override.
    pub weight: Option<TextWeight>,
    /// Italic font style.
    pub italic: bool,
    /// Single-line ellipsis truncation.
    pub truncate: bool,
    /// Multi-line clamp. `Some(0)` is treated as no clamp.
    pub max_lines: Option<u32>,
    /// Elevated text shadow.
    pub elevated: bool,
}

impl TextStyle {
    /// Maps the configuration onto `ui-text*` classes and `--_*` variables.
    pub fn resolve(&self, contract: &StyleContract) -> ResolvedStyle {
        let max_lines = match self.max_lines {
            Some(0) => {
                logging::debug_warn!("text max_lines of 0 ignored; expected at least 1");
                None
            }
            other => other,
        };

        let mut resolved = ResolvedStyle::new(TEXT_CLASS);
        resolved
            .classes
            .push(self.variant.unwrap_or_default().class())
            .push_if(self.truncate, "ui-text--truncate")
            .push_if(max_lines.is_some(), "ui-text--line-clamp")
            .push_if(self.elevated, "ui-text--elevated");

        resolved
            .vars
            .set_color(vars::COLOR, self.color, contract)
            .set(vars::FONT_STYLE, self.italic.then_some("italic"))
            .set(
                vars::FONT_WEIGHT,
                self.weight
                    .map(|weight| weight_reference(weight.type_step(), contract)),
            )
            .set(vars::LINE_CLAMP, max_lines)
            .set(vars::TEXT_ALIGN, self.align.map(TextAlign::token))
            .set(vars::TEXT_DECORATION, self.decoration.map(TextDecoration::token))
            .set(vars::TEXT_TRANSFORM, self.transform.map(TextTransform::token))
            .set(vars::TEXT_WRAP, self.wrap.map(TextWrap::token));

        resolved
    }
}

/// Declares a typography component. Every alias shares the full field set.
macro_rules! text_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            /// Element to render. Defaults to `<span>`.
            #[prop(optional)]
            element: Option<ElementKind>,
            #[prop(optional)] variant: Option<TextVariant>,
            #[prop(optional, into)] color: Option<ColorToken>,
            #[prop(optional)] align: Option<TextAlign>,
            #[prop(optional)] decoration: Option<TextDecoration>,
            #[prop(optional)] transform: Option<TextTransform>,
            #[prop(optional)] wrap: Option<TextWrap>,
            #[prop(optional)] weight: Option<TextWeight>,
            #[prop(optional)] italic: bool,
            #[prop(optional)] truncate: bool,
            #[prop(optional)] max_lines: Option<u32>,
            #[prop(optional)] elevated: bool,
            /// Extra classes appended after the computed ones.
            #[prop(optional, into)]
            class: Option<String>,
            /// Inline declarations merged after the computed variables.
            #[prop(optional, into)]
            style: StyleOverrides,
            #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
            #[prop(optional)] children: Option<Children>,
        ) -> impl IntoView {
            let text = TextStyle {
                variant,
                color,
                align,
                decoration,
                transform,
                wrap,
                weight,
                italic,
                truncate,
                max_lines,
                elevated,
            };
            render_text(
                element.unwrap_or(ElementKind::Span),
                &text,
                class.as_deref(),
                &style,
                attributes,
                children,
            )
        }
    };
}

fn render_text(
    element: ElementKind,
    text: &TextStyle,
    class: Option<&str>,
    overrides: &StyleOverrides,
    attributes: Vec<(&'static str, Attribute)>,
    children: Option<Children>,
) -> impl IntoView {
    let contract = use_style_contract();
    let resolved = text.resolve(&contract).with_class(class);
    render_element(
        element,
        node_attributes("text", &resolved, overrides, attributes),
        children,
    )
}

text_component! {
    /// Foundational typography primitive.
    Text
}

text_component! {
    /// Call-site alias of [`Text`] for titles.
    Title
}

text_component! {
    /// Call-site alias of [`Text`] for headings.
    Heading
}

text_component! {
    /// Call-site alias of [`Text`] for captions.
    Caption
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use crate::tokens::Hue;
    use pretty_assertions::assert_eq;

    fn resolve(text: &TextStyle) -> ResolvedStyle {
        text.resolve(&StyleContract::default())
    }

    fn value(resolved: &ResolvedStyle, key: &str) -> Option<String> {
        resolved.vars.get(key).map(ToString::to_string)
    }

    #[test]
    fn default_text_is_body_one_with_every_variable_unset() {
        let resolved = resolve(&TextStyle::default());

        assert_eq!(resolved.class_attr(), "ui-text ui-text--body-1");
        assert_eq!(resolved.vars.len(), 8);
        assert!(resolved.vars.iter().all(|(_, value)| value.is_unset()));
    }

    #[test]
    fn explicit_default_variant_matches_omitted_variant() {
        let explicit = TextStyle {
            variant: Some(TextVariant::Body1),
            ..TextStyle::default()
        };
        assert_eq!(resolve(&explicit), resolve(&TextStyle::default()));
    }

    #[test]
    fn every_variant_contributes_exactly_one_scale_class() {
        for variant in TextVariant::ALL {
            let resolved = resolve(&TextStyle {
                variant: Some(*variant),
                ..TextStyle::default()
            });
            let scale_classes = resolved
                .classes
                .iter()
                .filter(|class| {
                    TextVariant::ALL
                        .iter()
                        .any(|candidate| candidate.class() == *class)
                })
                .collect::<Vec<_>>();

            assert_eq!(scale_classes, vec![variant.class()]);
        }
    }

    #[test]
    fn color_weight_and_italic_forward_as_variables() {
        let resolved = resolve(&TextStyle {
            color: Some(Hue::Critical.subtle()),
            weight: Some(TextWeight::Semibold),
            italic: true,
            align: Some(TextAlign::Center),
            decoration: Some(TextDecoration::Underline),
            transform: Some(TextTransform::Uppercase),
            wrap: Some(TextWrap::Balance),
            ..TextStyle::default()
        });

        assert_eq!(
            value(&resolved, vars::COLOR).as_deref(),
            Some("var(--dxy-color-critical-subtle)")
        );
        assert_eq!(
            value(&resolved, vars::FONT_WEIGHT).as_deref(),
            Some("var(--dxy-type-weight-medium)")
        );
        assert_eq!(value(&resolved, vars::FONT_STYLE).as_deref(), Some("italic"));
        assert_eq!(value(&resolved, vars::TEXT_ALIGN).as_deref(), Some("center"));
        assert_eq!(
            value(&resolved, vars::TEXT_DECORATION).as_deref(),
            Some("underline")
        );
        assert_eq!(
            value(&resolved, vars::TEXT_TRANSFORM).as_deref(),
            Some("uppercase")
        );
        assert_eq!(value(&resolved, vars::TEXT_WRAP).as_deref(), Some("balance"));
        assert_eq!(resolved.class_attr(), "ui-text ui-text--body-1");
    }

    #[test]
    fn weight_lookup_follows_the_type_scale() {
        let weights = TextWeight::ALL
            .iter()
            .map(|weight| {
                let resolved = resolve(&TextStyle {
                    weight: Some(*weight),
                    ..TextStyle::default()
                });
                value(&resolved, vars::FONT_WEIGHT).unwrap_or_default()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            weights,
            vec![
                "var(--dxy-type-weight-bold)",
                "var(--dxy-type-weight-normal)",
                "var(--dxy-type-weight-medium)",
            ]
        );
    }

    #[test]
    fn max_lines_sets_class_and_count() {
        let resolved = resolve(&TextStyle {
            max_lines: Some(3),
            ..TextStyle::default()
        });

        assert!(resolved.classes.contains("ui-text--line-clamp"));
        assert_eq!(resolved.vars.get(vars::LINE_CLAMP), Some(&StyleValue::Number(3.0)));
    }

    #[test]
    fn zero_max_lines_is_treated_as_absent() {
        let zero = resolve(&TextStyle {
            max_lines: Some(0),
            ..TextStyle::default()
        });

        assert!(!zero.classes.contains("ui-text--line-clamp"));
        assert_eq!(zero.vars.get(vars::LINE_CLAMP), Some(&StyleValue::Unset));
        assert_eq!(zero, resolve(&TextStyle::default()));
    }

    #[test]
    fn truncate_and_elevated_are_classes() {
        let resolved = resolve(&TextStyle {
            truncate: true,
            elevated: true,
            variant: Some(TextVariant::Title2),
            ..TextStyle::default()
        });

        assert_eq!(
            resolved.class_attr(),
            "ui-text ui-text--title-2 ui-text--truncate ui-text--elevated"
        );
    }
}
