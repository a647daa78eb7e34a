//! Layout, typography, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::contract::{use_style_contract, StyleContract};
use crate::node::{bool_token, node_attributes, render_element, ElementKind};
use crate::style::{vars, weight_reference, ResolvedStyle, StyleOverrides};
use crate::tokens::{token_enum, ColorToken, Multiplier};

mod avatar;
mod button;
mod icon;
mod layout;
mod typography;

pub use avatar::{Avatar, AvatarContent, AvatarPresentation, AvatarStyle, PresenceStatus};
pub use button::{activate, Button, ButtonColor, ButtonContent, ButtonSize, ButtonStyle, ButtonVariant};
pub use icon::{Glyph, GlyphName, Icon, IconStyle};
pub use layout::{
    AlignItems, Article, Aside, BorderRadius, Card, Cluster, Container, CornerShape, FlexDirection,
    Footer, Header, JustifyContent, Layout, LayoutStyle, Main, Nav, PlaceSelf, Placeholder,
    Section, Stack,
};
pub use typography::{
    Caption, Heading, Text, TextAlign, TextDecoration, TextStyle, TextTransform, TextVariant,
    TextWeight, TextWrap, Title,
};
