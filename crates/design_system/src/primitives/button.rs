use super::*;

const BUTTON_CLASS: &str = "ui-button";

token_enum! {
    /// Semantic button color.
    pub enum ButtonColor: "button-color" {
        /// Primary call to action.
        Action => "action",
        /// Destructive action.
        Critical => "critical",
        /// Takes the surrounding text color.
        Inherit => "inherit",
        /// Low-emphasis action.
        Neutral => "neutral",
        /// Confirming action.
        Positive => "positive",
    }
}

impl Default for ButtonColor {
    fn default() -> Self {
        Self::Action
    }
}

token_enum! {
    /// Button fill treatment.
    pub enum ButtonVariant: "button-variant" {
        /// Filled background.
        Solid => "solid",
        /// Border only.
        Outline => "outline",
        /// No background or border until hovered.
        Ghost => "ghost",
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Solid
    }
}

token_enum! {
    /// Button size step.
    pub enum ButtonSize: "button-size" {
        /// Compact.
        Small => "small",
        /// Default.
        Medium => "medium",
        /// Prominent.
        Large => "large",
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Medium
    }
}

fn modifier(token: &str) -> String {
    format!("{BUTTON_CLASS}--{token}")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Visual configuration of a [`Button`].
pub struct ButtonStyle {
    /// Color. Defaults to [`ButtonColor::Action`].
    pub color: Option<ButtonColor>,
    /// Variant. Defaults to [`ButtonVariant::Solid`].
    pub variant: Option<ButtonVariant>,
    /// Size. Defaults to [`ButtonSize::Medium`].
    pub size: Option<ButtonSize>,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Drop the built-in hover, active, and focus styling.
    pub unstyled_states: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What a button renders inside its frame.
pub struct ButtonContent {
    /// A text label or other children are present.
    pub has_label: bool,
    /// An icon slot is present.
    pub has_icon: bool,
}

impl ButtonContent {
    /// An icon with no label.
    pub fn is_icon_only(self) -> bool {
        self.has_icon && !self.has_label
    }
}

impl ButtonStyle {
    /// Class list for the button root. Buttons own no style variables.
    pub fn resolve(&self, content: ButtonContent) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::new(BUTTON_CLASS);
        resolved
            .classes
            .push(modifier(self.color.unwrap_or_default().token()))
            .push(modifier(self.variant.unwrap_or_default().token()))
            .push(modifier(self.size.unwrap_or_default().token()))
            .push_if(self.full_width, "ui-button--full-width")
            .push_if(content.is_icon_only(), "ui-button--icon-only")
            .push_if(self.unstyled_states, "ui-button--unstyled-states");
        resolved
    }
}

/// Click guard shared by every button: a disabled button never reaches its
/// handler. Returns whether the handler ran.
pub fn activate<E, F>(disabled: bool, handler: Option<F>, event: E) -> bool
where
    F: FnOnce(E),
{
    match handler {
        Some(handler) if !disabled => {
            handler(event);
            true
        }
        _ => false,
    }
}

#[component]
/// Clickable action with semantic color, variant, and size tokens.
pub fn Button(
    #[prop(optional)] color: Option<ButtonColor>,
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] unstyled_states: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Leading icon, rendered before the label. Pass `view! { .. }.into_view()`.
    #[prop(optional, into)]
    icon: Option<View>,
    /// Accessible name; required in practice for icon-only buttons.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: StyleOverrides,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let content = ButtonContent {
        has_label: children.is_some(),
        has_icon: icon.is_some(),
    };
    let resolved = ButtonStyle {
        color,
        variant,
        size,
        full_width,
        unstyled_states,
    }
    .resolve(content)
    .with_class(class.as_deref());
    let attributes = node_attributes("button", &resolved, &style, attributes);

    view! {
        <button
            type="button"
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                activate(
                    disabled.get_untracked(),
                    on_click.map(|on_click| move |ev| on_click.call(ev)),
                    ev,
                );
            }
            {..attributes}
        >
            {icon.map(|icon| view! { <span class="ui-button__icon">{icon}</span> })}
            {children.map(|children| children())}
        </button>
    }
}
