use super::*;

const BOX_CLASS: &str = "ui-box";

token_enum! {
    /// Cross-axis item alignment.
    pub enum AlignItems: "align-items" {
        /// `baseline`
        Baseline => "baseline",
        /// `center`
        Center => "center",
        /// `flex-end`
        FlexEnd => "flex-end",
        /// `flex-start`
        FlexStart => "flex-start",
        /// `stretch`
        Stretch => "stretch",
    }
}

token_enum! {
    /// Self alignment on either axis.
    pub enum PlaceSelf: "place-self" {
        /// `center`
        Center => "center",
        /// `flex-end`
        FlexEnd => "flex-end",
        /// `flex-start`
        FlexStart => "flex-start",
        /// `stretch`
        Stretch => "stretch",
    }
}

token_enum! {
    /// Main-axis content distribution.
    pub enum JustifyContent: "justify-content" {
        /// `center`
        Center => "center",
        /// `flex-end`
        FlexEnd => "flex-end",
        /// `flex-start`
        FlexStart => "flex-start",
        /// `space-around`
        SpaceAround => "space-around",
        /// `space-between`
        SpaceBetween => "space-between",
        /// `space-evenly`
        SpaceEvenly => "space-evenly",
    }
}

token_enum! {
    /// Flex direction.
    pub enum FlexDirection: "direction" {
        /// `column`
        Column => "column",
        /// `column-reverse`
        ColumnReverse => "column-reverse",
        /// `row`
        Row => "row",
        /// `row-reverse`
        RowReverse => "row-reverse",
    }
}

token_enum! {
    /// Corner shape style.
    pub enum CornerShape: "corner-shape" {
        /// Bevelled corners.
        Bevel => "bevel",
        /// Notched corners.
        Notch => "notch",
        /// Rounded corners.
        Round => "round",
        /// Scooped corners.
        Scoop => "scoop",
        /// Squircle corners.
        Squircle => "squircle",
    }
}

impl Default for CornerShape {
    fn default() -> Self {
        Self::Round
    }
}

token_enum! {
    /// Border radius steps. Rendered as a class because `circle` needs a compound value.
    pub enum BorderRadius: "border-radius" {
        /// Smallest radius step.
        Sm => "1",
        /// Medium radius step.
        Md => "2",
        /// Largest radius step.
        Lg => "3",
        /// Fully rounded.
        Circle => "circle",
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self::Sm
    }
}

impl BorderRadius {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "ui-box--radius-1",
            Self::Md => "ui-box--radius-2",
            Self::Lg => "ui-box--radius-3",
            Self::Circle => "ui-box--radius-circle",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Configuration of the layout primitive. `None` means "not supplied".
pub struct LayoutStyle {
    /// Cross-axis item alignment.
    pub align_items: Option<AlignItems>,
    /// Cross-axis self alignment.
    pub align_self: Option<PlaceSelf>,
    /// Aspect ratio, e.g. `16/9`.
    pub aspect_ratio: Option<String>,
    /// Backdrop filter, e.g. `blur(10px)`.
    pub backdrop_filter: Option<String>,
    /// Background color token.
    pub background: Option<ColorToken>,
    /// Background image URL.
    pub background_image: Option<String>,
    /// Background position.
    pub background_position: Option<String>,
    /// Background size.
    pub background_size: Option<String>,
    /// Border radius step. Defaults to [`BorderRadius::Sm`].
    pub border_radius: Option<BorderRadius>,
    /// Corner shape. Defaults to [`CornerShape::Round`].
    pub corner_shape: Option<CornerShape>,
    /// Flex direction.
    pub direction: Option<FlexDirection>,
    /// Elevated surface shadow.
    pub elevated: Option<bool>,
    /// Gap between children. Defaults to `2`.
    pub gap: Option<Multiplier>,
    /// Placement inside a parent grid.
    pub grid_area: Option<String>,
    /// Grid template areas; switches the node to grid display.
    pub grid_template_areas: Option<String>,
    /// Grid template columns; switches the node to grid display.
    pub grid_template_columns: Option<String>,
    /// Grid template rows; switches the node to grid display.
    pub grid_template_rows: Option<String>,
    /// Height as any CSS length.
    pub height: Option<String>,
    /// Main-axis content distribution.
    pub justify_content: Option<JustifyContent>,
    /// Main-axis self alignment.
    pub justify_self: Option<PlaceSelf>,
    /// Top margin.
    pub margin_top: Option<Multiplier>,
    /// Maximum width as any CSS length.
    pub max_width: Option<String>,
    /// Opacity between 0 and 1.
    pub opacity: Option<f64>,
    /// Padding on all sides.
    pub padding: Option<Multiplier>,
    /// Block-axis padding.
    pub padding_block: Option<Multiplier>,
    /// Inline-axis padding.
    pub padding_inline: Option<Multiplier>,
    /// Width as any CSS length.
    pub width: Option<String>,
}

impl LayoutStyle {
    /// Default gap multiplier.
    pub const DEFAULT_GAP: Multiplier = Multiplier::new(2.0);

    /// Whether any grid-template field is present.
    pub fn is_grid_container(&self) -> bool {
        self.grid_template_rows.is_some()
            || self.grid_template_columns.is_some()
            || self.grid_template_areas.is_some()
    }

    /// Maps the configuration onto `ui-box*` classes and `--_*` variables.
    pub fn resolve(&self, contract: &StyleContract) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::new(BOX_CLASS);
        resolved
            .classes
            .push_if(self.is_grid_container(), "ui-box--grid")
            .push_if(self.elevated.unwrap_or(false), "ui-box--elevated")
            .push(self.border_radius.unwrap_or_default().class());

        resolved
            .vars
            .set(vars::ALIGN_ITEMS, self.align_items.map(AlignItems::token))
            .set(vars::ASPECT_RATIO, self.aspect_ratio.clone())
            .set(vars::ALIGN_SELF, self.align_self.map(PlaceSelf::token))
            .set(vars::BACKDROP_FILTER, self.backdrop_filter.clone())
            .set_color(vars::BACKGROUND, self.background, contract)
            .set(
                vars::BACKGROUND_IMAGE,
                self.background_image
                    .as_ref()
                    .map(|image| format!("url({image})")),
            )
            .set(vars::BACKGROUND_POSITION, self.background_position.clone())
            .set(vars::BACKGROUND_SIZE, self.background_size.clone())
            .set(
                vars::CORNER_SHAPE,
                Some(self.corner_shape.unwrap_or_default().token()),
            )
            .set(vars::DIRECTION, self.direction.map(FlexDirection::token))
            .set(vars::GRID_AREA, self.grid_area.clone())
            .set(vars::GAP, Some(self.gap.unwrap_or(Self::DEFAULT_GAP)))
            .set(vars::GRID_TEMPLATE_AREAS, self.grid_template_areas.clone())
            .set(vars::GRID_TEMPLATE_COLUMNS, self.grid_template_columns.clone())
            .set(vars::GRID_TEMPLATE_ROWS, self.grid_template_rows.clone())
            .set(vars::HEIGHT, self.height.clone())
            .set(
                vars::JUSTIFY_CONTENT,
                self.justify_content.map(JustifyContent::token),
            )
            .set(vars::JUSTIFY_SELF, self.justify_self.map(PlaceSelf::token))
            .set(vars::MARGIN_TOP, self.margin_top)
            .set(vars::MAX_WIDTH, self.max_width.clone())
            .set(vars::OPACITY, self.opacity)
            .set(vars::PADDING, self.padding)
            .set(vars::PADDING_INLINE, self.padding_inline)
            .set(vars::PADDING_BLOCK, self.padding_block)
            .set(vars::WIDTH, self.width.clone());

        resolved
    }

    /// Vertical stack: fixes the direction to `column`.
    pub fn stack(mut self) -> Self {
        self.direction = Some(FlexDirection::Column);
        self
    }

    /// Horizontal cluster: fixes the direction to `row`.
    pub fn cluster(mut self) -> Self {
        self.direction = Some(FlexDirection::Row);
        self
    }

    /// Elevated card surface: fixes the background to [`ColorToken::Elevation`];
    /// radius, elevation, padding, and width default to a full-width card.
    pub fn card(mut self) -> Self {
        self.background = Some(ColorToken::Elevation);
        self.border_radius.get_or_insert(BorderRadius::Md);
        self.elevated.get_or_insert(true);
        self.padding.get_or_insert(Multiplier::new(4.0));
        self.width.get_or_insert_with(|| "100%".to_string());
        self
    }

    /// Centered page container with fixed inline padding and full width.
    pub fn container(mut self) -> Self {
        self.justify_self = Some(PlaceSelf::Center);
        self.padding_inline = Some(Multiplier::new(6.0));
        self.width = Some("100%".to_string());
        self.max_width.get_or_insert_with(|| "1440px".to_string());
        self
    }

    /// Neutral filler block used while content is pending.
    pub fn placeholder(mut self) -> Self {
        self.background = Some(ColorToken::NEUTRAL);
        self.padding = Some(Multiplier::new(4.0));
        self
    }
}

fn render_layout(
    element: ElementKind,
    layout: &LayoutStyle,
    class: Option<&str>,
    overrides: &StyleOverrides,
    attributes: Vec<(&'static str, Attribute)>,
    children: Option<Children>,
) -> impl IntoView {
    let contract = use_style_contract();
    let resolved = layout.resolve(&contract).with_class(class);
    render_element(
        element,
        node_attributes("box", &resolved, overrides, attributes),
        children,
    )
}

/// Declares a layout component that accepts the listed fields and applies a preset.
macro_rules! layout_component {
    (
        $(#[$meta:meta])*
        $name:ident(element = $element:path, preset = $preset:path)
        [$($field:ident: $ty:ty),* $(,)?]
    ) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            /// Element to render. Defaults per component.
            #[prop(optional)]
            element: Option<ElementKind>,
            $(#[prop(optional, into)] $field: Option<$ty>,)*
            /// Extra classes appended after the computed ones.
            #[prop(optional, into)]
            class: Option<String>,
            /// Inline declarations merged after the computed variables.
            #[prop(optional, into)]
            style: StyleOverrides,
            #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
            #[prop(optional)] children: Option<Children>,
        ) -> impl IntoView {
            #[allow(clippy::needless_update)]
            let layout = $preset(LayoutStyle {
                $($field,)*
                ..LayoutStyle::default()
            });
            render_layout(
                element.unwrap_or($element),
                &layout,
                class.as_deref(),
                &style,
                attributes,
                children,
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident(fixed element = $element:path)
        [$($field:ident: $ty:ty),* $(,)?]
    ) => {
        $(#[$meta])*
        #[component]
        pub fn $name(
            $(#[prop(optional, into)] $field: Option<$ty>,)*
            /// Extra classes appended after the computed ones.
            #[prop(optional, into)]
            class: Option<String>,
            /// Inline declarations merged after the computed variables.
            #[prop(optional, into)]
            style: StyleOverrides,
            #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
            #[prop(optional)] children: Option<Children>,
        ) -> impl IntoView {
            #[allow(clippy::needless_update)]
            let layout = LayoutStyle {
                $($field,)*
                ..LayoutStyle::default()
            };
            render_layout($element, &layout, class.as_deref(), &style, attributes, children)
        }
    };
}

/// Declares a layout component fixed to one semantic element, accepting every field.
macro_rules! semantic_layout {
    ($(#[$meta:meta])* $name:ident => $element:path) => {
        layout_component! {
            $(#[$meta])*
            $name(fixed element = $element)
            [
                align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
                backdrop_filter: String, background: ColorToken, background_image: String,
                background_position: String, background_size: String,
                border_radius: BorderRadius, corner_shape: CornerShape,
                direction: FlexDirection, elevated: bool, gap: Multiplier, grid_area: String,
                grid_template_areas: String, grid_template_columns: String,
                grid_template_rows: String, height: String, justify_content: JustifyContent,
                justify_self: PlaceSelf, margin_top: Multiplier, max_width: String,
                opacity: f64, padding: Multiplier, padding_block: Multiplier,
                padding_inline: Multiplier, width: String,
            ]
        }
    };
}

layout_component! {
    /// Foundational flex/grid container. Renders a `<div>` unless `element` says otherwise.
    Layout(element = ElementKind::Div, preset = std::convert::identity)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background: ColorToken, background_image: String,
        background_position: String, background_size: String, border_radius: BorderRadius,
        corner_shape: CornerShape, direction: FlexDirection, elevated: bool, gap: Multiplier,
        grid_area: String, grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        justify_self: PlaceSelf, margin_top: Multiplier, max_width: String, opacity: f64,
        padding: Multiplier, padding_block: Multiplier, padding_inline: Multiplier,
        width: String,
    ]
}

layout_component! {
    /// Vertical stack.
    Stack(element = ElementKind::Div, preset = LayoutStyle::stack)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background: ColorToken, background_image: String,
        background_position: String, background_size: String, border_radius: BorderRadius,
        corner_shape: CornerShape, elevated: bool, gap: Multiplier, grid_area: String,
        grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        justify_self: PlaceSelf, margin_top: Multiplier, max_width: String, opacity: f64,
        padding: Multiplier, padding_block: Multiplier, padding_inline: Multiplier,
        width: String,
    ]
}

layout_component! {
    /// Horizontal cluster.
    Cluster(element = ElementKind::Div, preset = LayoutStyle::cluster)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background: ColorToken, background_image: String,
        background_position: String, background_size: String, border_radius: BorderRadius,
        corner_shape: CornerShape, elevated: bool, gap: Multiplier, grid_area: String,
        grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        justify_self: PlaceSelf, margin_top: Multiplier, max_width: String, opacity: f64,
        padding: Multiplier, padding_block: Multiplier, padding_inline: Multiplier,
        width: String,
    ]
}

layout_component! {
    /// Elevated card surface on the elevation background.
    Card(element = ElementKind::Div, preset = LayoutStyle::card)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background_image: String, background_position: String,
        background_size: String, border_radius: BorderRadius, corner_shape: CornerShape,
        direction: FlexDirection, elevated: bool, gap: Multiplier, grid_area: String,
        grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        justify_self: PlaceSelf, margin_top: Multiplier, max_width: String, opacity: f64,
        padding: Multiplier, padding_block: Multiplier, padding_inline: Multiplier,
        width: String,
    ]
}

layout_component! {
    /// Centered, full-width page container.
    Container(element = ElementKind::Div, preset = LayoutStyle::container)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background: ColorToken, background_image: String,
        background_position: String, background_size: String, border_radius: BorderRadius,
        corner_shape: CornerShape, direction: FlexDirection, elevated: bool, gap: Multiplier,
        grid_area: String, grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        margin_top: Multiplier, max_width: String, opacity: f64, padding: Multiplier,
        padding_block: Multiplier,
    ]
}

layout_component! {
    /// Neutral filler block.
    Placeholder(element = ElementKind::Div, preset = LayoutStyle::placeholder)
    [
        align_items: AlignItems, align_self: PlaceSelf, aspect_ratio: String,
        backdrop_filter: String, background_image: String, background_position: String,
        background_size: String, border_radius: BorderRadius, corner_shape: CornerShape,
        direction: FlexDirection, elevated: bool, gap: Multiplier, grid_area: String,
        grid_template_areas: String, grid_template_columns: String,
        grid_template_rows: String, height: String, justify_content: JustifyContent,
        justify_self: PlaceSelf, margin_top: Multiplier, max_width: String, opacity: f64,
        padding_block: Multiplier, padding_inline: Multiplier, width: String,
    ]
}

semantic_layout! {
    /// Layout rendered as `<section>`.
    Section => ElementKind::Section
}

semantic_layout! {
    /// Layout rendered as `<article>`.
    Article => ElementKind::Article
}

semantic_layout! {
    /// Layout rendered as `<header>`.
    Header => ElementKind::Header
}

semantic_layout! {
    /// Layout rendered as `<footer>`.
    Footer => ElementKind::Footer
}

semantic_layout! {
    /// Layout rendered as `<aside>`.
    Aside => ElementKind::Aside
}

semantic_layout! {
    /// Layout rendered as `<nav>`.
    Nav => ElementKind::Nav
}

semantic_layout! {
    /// Layout rendered as `<main>`.
    Main => ElementKind::Main
}
