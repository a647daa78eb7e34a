use super::*;

const ICON_CLASS: &str = "ui-icon";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Sizing and coloring of an [`Icon`] wrapper.
pub struct IconStyle {
    /// Size multiplier. Defaults to [`IconStyle::DEFAULT_SIZE`].
    pub size: Option<Multiplier>,
    /// Stroke/fill color token. Unset inherits `currentColor`.
    pub color: Option<ColorToken>,
}

impl IconStyle {
    /// Size used when none is given (24px).
    pub const DEFAULT_SIZE: Multiplier = Multiplier::new(6.0);

    /// Maps the configuration onto `--_clr` and `--_size`.
    pub fn resolve(&self, contract: &StyleContract) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::new(ICON_CLASS);
        resolved
            .vars
            .set_color(vars::COLOR, self.color, contract)
            .set(vars::SIZE, Some(self.size.unwrap_or(Self::DEFAULT_SIZE)));
        resolved
    }
}

#[component]
/// Sizing and coloring frame around a caller-supplied graphic.
pub fn Icon(
    #[prop(optional, into)] size: Option<Multiplier>,
    #[prop(optional, into)] color: Option<ColorToken>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: StyleOverrides,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    /// The graphic, usually a [`Glyph`] or an inline `<svg>`.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let contract = use_style_contract();
    let resolved = IconStyle { size, color }
        .resolve(&contract)
        .with_class(class.as_deref());
    render_element(
        ElementKind::Div,
        node_attributes("icon", &resolved, &style, attributes),
        children,
    )
}

token_enum! {
    /// Built-in stroke glyphs.
    pub enum GlyphName: "glyph" {
        /// Circled numeral one.
        One => "one",
        /// Circled numeral two.
        Two => "two",
        /// Vertical ellipsis.
        Dots => "dots",
        /// Telephone handset.
        Phone => "phone",
        /// Struck-through handset.
        PhoneOff => "phone-off",
        /// Microphone.
        Microphone => "microphone",
        /// Overlapping speech bubbles.
        Chat => "chat",
        /// Flag.
        Report => "report",
        /// Struck-through camera.
        MeetingCameraOff => "meeting-camera-off",
    }
}

impl GlyphName {
    /// Accessible title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Two => "Two",
            Self::Dots => "Dots",
            Self::Phone => "Phone",
            Self::PhoneOff => "Phone Off",
            Self::Microphone => "Microphone",
            Self::Chat => "Chat",
            Self::Report => "Report",
            Self::MeetingCameraOff => "Meeting Camera Off",
        }
    }

    /// Path markup drawn on a 24x24 stroke grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::One => {
                r#"<path d="m12 16 0 -8v0.66667C12 9.40304 11.403 10 10.6667 10L10 10"/><path d="M14 16h-4"/><path d="M0.75 12a11.25 11.25 0 1 0 22.5 0 11.25 11.25 0 1 0 -22.5 0"/>"#
            }
            Self::Two => {
                r#"<path d="M14 16h-4v-1.2957c0 -0.7113 0.3778 -1.3691 0.9923 -1.7276l2.0154 -1.1757c0.6145 -0.3584 0.9923 -1.0162 0.9923 -1.7275V10c0 -1.10457 -0.8954 -2 -2 -2 -0.8708 0 -1.7254 0.55654 -2 1.33333"/><path d="M0.75 12a11.25 11.25 0 1 0 22.5 0 11.25 11.25 0 1 0 -22.5 0"/>"#
            }
            Self::Dots => {
                r#"<path d="M9.362 20.628a2.625 2.625 0 1 0 5.25 0 2.625 2.625 0 1 0 -5.25 0Z"/><path d="M9.362 3.378a2.625 2.625 0 1 0 5.25 0 2.625 2.625 0 1 0 -5.25 0Z"/><path d="M9.362 12.003a2.625 2.625 0 1 0 5.25 0 2.625 2.625 0 1 0 -5.25 0Z"/>"#
            }
            Self::Phone => {
                r#"<path d="m15.04 22.39 0.012 0.007a5.533 5.533 0 0 0 6.884 -0.755l0.774 -0.774a1.846 1.846 0 0 0 0 -2.609L19.449 15a1.846 1.846 0 0 0 -2.609 0h0a1.843 1.843 0 0 1 -2.608 0L9.014 9.781a1.846 1.846 0 0 1 0 -2.609h0a1.843 1.843 0 0 0 0 -2.608L5.754 1.3a1.846 1.846 0 0 0 -2.609 0l-0.774 0.774a5.535 5.535 0 0 0 -0.756 6.884l0.008 0.012A49.935 49.935 0 0 0 15.04 22.39Z"/>"#
            }
            Self::PhoneOff => {
                r#"<path d="M8.21 15.79a34.11 34.11 0 0 0 6.67 5.55h0a5.13 5.13 0 0 0 6.39 -0.7l0.72 -0.72a1.71 1.71 0 0 0 0 -2.42l-3 -3a1.71 1.71 0 0 0 -2.42 0h0a1.73 1.73 0 0 1 -2.42 0l-2.3 -2.31"/><path d="M9.29 9.63a1.71 1.71 0 0 1 0 -2.42h0a1.71 1.71 0 0 0 0 -2.42l-3 -3a1.71 1.71 0 0 0 -2.42 0l-0.72 0.72a5.14 5.14 0 0 0 -0.7 6.39h0a33.49 33.49 0 0 0 2.8 3.8"/><path d="M23.25 0.75 0.75 23.25"/>"#
            }
            Self::Microphone => {
                r#"<path d="M12 14C13.6569 14 15 12.6569 15 11V5C15 3.34315 13.6569 2 12 2C10.3431 2 9 3.34315 9 5V11C9 12.6569 10.3431 14 12 14Z"/><path d="M19 11C19 14.5304 15.866 17.8934 12 17.8934C8.13401 17.8934 5 14.5304 5 11"/><path d="M12 18V22"/><path d="M8 22H16"/>"#
            }
            Self::Chat => {
                r#"<path d="M23.25 13.5A5.249 5.249 0 0 0 18 8.25h-3a5.25 5.25 0 0 0 0 10.5h0.75l4.5 4.5v-5.024a5.237 5.237 0 0 0 3 -4.726Z"/><path d="m6.75 12.75 -3 3v-5.024A5.239 5.239 0 0 1 6 0.75h3a5.252 5.252 0 0 1 5.033 3.75"/>"#
            }
            Self::Report => {
                r#"<path d="m0.75 23.25 0 -22.5"/><path d="m0.75 17.708 3.154 -0.97a9.61 9.61 0 0 1 7.864 1 9.615 9.615 0 0 0 7.679 1.062l2.987 -0.854a1.125 1.125 0 0 0 0.816 -1.082V5.137a1.126 1.126 0 0 0 -1.434 -1.082l-2.369 0.677a9.615 9.615 0 0 1 -7.679 -1.056 9.61 9.61 0 0 0 -7.864 -1L0.75 3.645"/>"#
            }
            Self::MeetingCameraOff => {
                r#"<path d="m0.75 0.75 22.5 22.5"/><path d="M15.75 11.25v-3a1.5 1.5 0 0 0 -1.5 -1.5H10.5"/><path d="M13.5 18.75H2.25a1.5 1.5 0 0 1 -1.5 -1.5v-9a1.5 1.5 0 0 1 1.5 -1.5"/><path d="m19.579 16.165 2.586 1.292a0.75 0.75 0 0 0 1.085 -0.671V8.714a0.75 0.75 0 0 0 -1.085 -0.671l-2.586 1.292a1.5 1.5 0 0 0 -0.829 1.342v4.146a1.5 1.5 0 0 0 0.829 1.342Z"/>"#
            }
        }
    }

    /// Inner markup including the accessible `<title>`.
    pub fn markup(self) -> String {
        format!("<title>{}</title>{}", self.label(), self.svg_body())
    }
}

#[component]
/// Built-in stroke glyph drawn in `currentColor`. Fills its parent, so wrap it
/// in an [`Icon`] to size and color it.
pub fn Glyph(
    /// Glyph to draw.
    name: GlyphName,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="1.5"
            focusable="false"
            data-glyph=name.token()
            inner_html=name.markup()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use crate::tokens::Hue;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_defaults_to_six_and_color_is_unset() {
        let resolved = IconStyle::default().resolve(&StyleContract::default());

        assert_eq!(resolved.class_attr(), "ui-icon");
        assert_eq!(resolved.vars.get(vars::SIZE), Some(&StyleValue::Number(6.0)));
        assert_eq!(resolved.vars.get(vars::COLOR), Some(&StyleValue::Unset));
        assert_eq!(
            resolved.to_css(&StyleOverrides::default()),
            "--_clr: initial; --_size: 6"
        );
    }

    #[test]
    fn color_resolves_through_the_contract_namespace() {
        let contract = StyleContract {
            token_namespace: "acme".to_string(),
        };
        let resolved = IconStyle {
            size: Some(Multiplier::from(8)),
            color: Some(Hue::Positive.bold()),
        }
        .resolve(&contract);

        assert_eq!(
            resolved.to_css(&StyleOverrides::default()),
            "--_clr: var(--acme-color-positive-bold); --_size: 8"
        );
    }

    #[test]
    fn every_glyph_has_title_and_paths() {
        for glyph in GlyphName::ALL {
            let markup = glyph.markup();
            assert!(markup.starts_with(&format!("<title>{}</title>", glyph.label())));
            assert!(markup.contains("<path d=\""));
            assert!(!glyph.svg_body().contains("fill="));
        }
    }

    #[test]
    fn glyph_names_parse_from_tokens() {
        assert_eq!(
            "meeting-camera-off".parse::<GlyphName>(),
            Ok(GlyphName::MeetingCameraOff)
        );
        assert_eq!(GlyphName::PhoneOff.to_string(), "phone-off");
    }
}
