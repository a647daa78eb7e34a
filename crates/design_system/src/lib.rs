//! Token-driven layout, typography, and control primitives for Leptos.
//!
//! Every component translates a typed configuration into two things: a list of
//! `ui-*` class tokens and a set of private `--_*` custom properties. A
//! companion stylesheet consumes both; components never compute pixel values
//! themselves. Color and weight references resolve into the token namespace
//! named by the [`StyleContract`] provided near the root of the tree.
//!
//! Every rendered root also carries `data-ui-primitive="true"` and a
//! `data-ui-kind` marker, and forwards the caller's `attr:*` attributes
//! verbatim after its own.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod tokens;

mod contract;
mod node;
mod primitives;
pub mod style;

pub use contract::{
    provide_style_contract, use_style_contract, ContractError, StyleContract,
    StyleContractProvider, DEFAULT_TOKEN_NAMESPACE,
};
pub use node::{node_attributes, render_element, styled, ElementKind};
pub use primitives::{
    activate, AlignItems, Article, Aside, Avatar, AvatarContent, AvatarPresentation, AvatarStyle,
    BorderRadius, Button, ButtonColor, ButtonContent, ButtonSize, ButtonStyle, ButtonVariant,
    Caption, Card, Cluster, Container, CornerShape, FlexDirection, Footer, Glyph, GlyphName,
    Header, Heading, Icon, IconStyle, JustifyContent, Layout, LayoutStyle, Main, Nav, PlaceSelf,
    Placeholder, PresenceStatus, Section, Stack, Text, TextAlign, TextDecoration, TextStyle,
    TextTransform, TextVariant, TextWeight, TextWrap, Title,
};
pub use style::{ClassList, ResolvedStyle, StyleOverrides, StyleValue, StyleVars};
pub use tokens::{ColorToken, Hue, Multiplier, Shade, TokenParseError};

/// Convenience imports for application crates composing the primitive set.
pub mod prelude {
    pub use crate::{
        AlignItems, Article, Aside, Avatar, BorderRadius, Button, ButtonColor, ButtonSize,
        ButtonVariant, Caption, Card, Cluster, ColorToken, Container, CornerShape, ElementKind,
        FlexDirection, Footer, Glyph, GlyphName, Header, Heading, Hue, Icon, JustifyContent,
        Layout, Main, Multiplier, Nav, PlaceSelf, Placeholder, PresenceStatus, Section, Stack,
        StyleContract, StyleContractProvider, StyleOverrides, Text, TextAlign, TextDecoration,
        TextTransform, TextVariant, TextWeight, TextWrap, Title,
    };
}
