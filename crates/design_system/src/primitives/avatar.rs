use super::*;

const AVATAR_CLASS: &str = "ui-avatar";

token_enum! {
    /// Presence indicator shown on the avatar's edge.
    pub enum PresenceStatus: "status" {
        /// Available.
        Online => "online",
        /// Idle or stepped away.
        Away => "away",
        /// Not connected.
        Offline => "offline",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Configuration of an [`Avatar`].
pub struct AvatarStyle {
    /// Size multiplier. Defaults to [`AvatarStyle::DEFAULT_SIZE`].
    pub size: Option<Multiplier>,
    /// Background color token. Defaults to [`ColorToken::PRIMARY`].
    pub color: Option<ColorToken>,
    /// Image URL. Takes precedence over `initials`.
    pub src: Option<String>,
    /// Fallback text shown when there is no image.
    pub initials: Option<String>,
    /// Presence indicator.
    pub status: Option<PresenceStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the avatar body shows.
pub enum AvatarContent {
    /// The `--_src` background image.
    Image,
    /// Fallback initials.
    Initials(String),
    /// Colored disc only.
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
/// Output of [`AvatarStyle::resolve`].
pub struct AvatarPresentation {
    /// Root classes and variables.
    pub style: ResolvedStyle,
    /// Body content.
    pub content: AvatarContent,
    /// Status node to render, if any.
    pub status: Option<PresenceStatus>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

impl AvatarStyle {
    /// Size used when none is given (24px).
    pub const DEFAULT_SIZE: Multiplier = Multiplier::new(6.0);

    /// Resolves variables and decides between image, initials, or nothing.
    pub fn resolve(&self, contract: &StyleContract) -> AvatarPresentation {
        let src = non_blank(self.src.as_deref());
        let initials = non_blank(self.initials.as_deref());

        let mut style = ResolvedStyle::new(AVATAR_CLASS);
        style
            .vars
            .set_color(
                vars::BACKGROUND,
                Some(self.color.unwrap_or(ColorToken::PRIMARY)),
                contract,
            )
            .set(vars::SIZE, Some(self.size.unwrap_or(Self::DEFAULT_SIZE)))
            .set(vars::SOURCE, src.map(|src| format!("url({src})")));

        let content = match (src, initials) {
            (Some(_), _) => AvatarContent::Image,
            (None, Some(initials)) => AvatarContent::Initials(initials.to_string()),
            (None, None) => AvatarContent::Empty,
        };

        AvatarPresentation {
            style,
            content,
            status: self.status,
        }
    }
}

#[component]
/// User image with an initials fallback and optional presence dot.
pub fn Avatar(
    #[prop(optional, into)] size: Option<Multiplier>,
    #[prop(optional, into)] color: Option<ColorToken>,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] initials: Option<String>,
    #[prop(optional)] status: Option<PresenceStatus>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: StyleOverrides,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let contract = use_style_contract();
    let AvatarPresentation {
        style: resolved,
        content,
        status,
    } = AvatarStyle {
        size,
        color,
        src,
        initials,
        status,
    }
    .resolve(&contract);

    let resolved = resolved.with_class(class.as_deref());
    let initials = match content {
        AvatarContent::Initials(initials) => Some(initials),
        AvatarContent::Image | AvatarContent::Empty => None,
    };

    render_element(
        ElementKind::Div,
        node_attributes("avatar", &resolved, &style, attributes),
        None,
    )
    .child(initials)
    .child(status.map(|status| {
        view! { <span class="ui-avatar__status" data-status=status.token()></span> }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::render_html;
    use crate::tokens::Hue;
    use pretty_assertions::assert_eq;

    fn resolve(avatar: AvatarStyle) -> AvatarPresentation {
        avatar.resolve(&StyleContract::default())
    }

    fn css(presentation: &AvatarPresentation) -> String {
        presentation.style.to_css(&StyleOverrides::default())
    }

    #[test]
    fn defaults_to_primary_size_six_without_image() {
        let presentation = resolve(AvatarStyle::default());

        assert_eq!(presentation.style.class_attr(), "ui-avatar");
        assert_eq!(
            css(&presentation),
            "--_bg: var(--dxy-color-primary); --_size: 6; --_src: initial"
        );
        assert_eq!(presentation.content, AvatarContent::Empty);
        assert_eq!(presentation.status, None);
    }

    #[test]
    fn explicit_defaults_match_omitted_fields() {
        let explicit = AvatarStyle {
            size: Some(Multiplier::from(6)),
            color: Some(ColorToken::PRIMARY),
            ..AvatarStyle::default()
        };
        assert_eq!(resolve(explicit), resolve(AvatarStyle::default()));
    }

    #[test]
    fn large_accent_avatar() {
        let presentation = resolve(AvatarStyle {
            size: Some(Multiplier::from(10)),
            color: Some(Hue::Accent.into()),
            ..AvatarStyle::default()
        });

        assert_eq!(
            css(&presentation),
            "--_bg: var(--dxy-color-accent); --_size: 10; --_src: initial"
        );
        assert_eq!(presentation.content, AvatarContent::Empty);
        assert_eq!(presentation.status, None);
    }

    #[test]
    fn initials_render_without_an_image() {
        let presentation = resolve(AvatarStyle {
            initials: Some("JD".to_string()),
            ..AvatarStyle::default()
        });
        assert_eq!(presentation.content, AvatarContent::Initials("JD".to_string()));
    }

    #[test]
    fn image_wins_over_initials() {
        let presentation = resolve(AvatarStyle {
            src: Some("/user.jpg".to_string()),
            initials: Some("JD".to_string()),
            ..AvatarStyle::default()
        });

        assert_eq!(presentation.content, AvatarContent::Image);
        assert_eq!(
            presentation.style.vars.get(vars::SOURCE).map(ToString::to_string),
            Some("url(/user.jpg)".to_string())
        );
    }

    #[test]
    fn blank_src_and_initials_count_as_absent() {
        let presentation = resolve(AvatarStyle {
            src: Some("  ".to_string()),
            initials: Some("".to_string()),
            ..AvatarStyle::default()
        });

        assert_eq!(presentation.content, AvatarContent::Empty);
        assert_eq!(
            presentation.style.vars.get(vars::SOURCE).map(ToString::to_string),
            Some("initial".to_string())
        );
    }

    #[test]
    fn status_is_carried_through_for_each_presence() {
        for status in PresenceStatus::ALL {
            let presentation = resolve(AvatarStyle {
                status: Some(*status),
                ..AvatarStyle::default()
            });
            assert_eq!(presentation.status, Some(*status));
        }

        assert_eq!(PresenceStatus::Away.token(), "away");
    }

    #[test]
    fn rendered_image_avatar_hides_initials_and_shows_one_status() {
        let html = render_html(|| {
            view! {
                <Avatar
                    src="/user.jpg"
                    initials="JD"
                    status=PresenceStatus::Online
                    attr:data-testid="avatar"
                />
            }
            .into_view()
        });

        assert!(!html.contains("JD"), "{html}");
        assert_eq!(html.matches("data-status=").count(), 1, "{html}");
        assert!(html.contains(r#"data-status="online""#), "{html}");
        assert!(html.contains(r#"class="ui-avatar__status""#), "{html}");
        assert!(html.contains(r#"data-testid="avatar""#), "{html}");
        assert!(html.contains("--_src: url(/user.jpg)"), "{html}");
    }

    #[test]
    fn rendered_initials_avatar_without_status() {
        let html = render_html(|| {
            view! { <Avatar initials="JD" size=10/> }.into_view()
        });

        assert!(html.contains("JD"), "{html}");
        assert!(!html.contains("data-status"), "{html}");
        assert!(html.contains("--_size: 10"), "{html}");
    }
}
