//! Rendered-node assembly shared by the primitives.
//!
//! Every primitive renders exactly one root element whose attributes are, in
//! order: `class`, the primitive markers, the inline `style`, and finally the
//! caller's pass-through attributes, forwarded verbatim. A static `attr:class`
//! or `attr:style` is folded into the computed value instead of replacing it.

use leptos::html::{self, ElementDescriptor, HtmlElement};
use leptos::*;

use crate::style::{ResolvedStyle, StyleOverrides};
use crate::tokens::token_enum;

token_enum! {
    /// Element kinds a polymorphic primitive can render as.
    pub enum ElementKind: "element" {
        /// `<div>`
        Div => "div",
        /// `<span>`
        Span => "span",
        /// `<p>`
        P => "p",
        /// `<section>`
        Section => "section",
        /// `<article>`
        Article => "article",
        /// `<header>`
        Header => "header",
        /// `<footer>`
        Footer => "footer",
        /// `<aside>`
        Aside => "aside",
        /// `<nav>`
        Nav => "nav",
        /// `<main>`
        Main => "main",
        /// `<ul>`
        Ul => "ul",
        /// `<ol>`
        Ol => "ol",
        /// `<li>`
        Li => "li",
        /// `<figure>`
        Figure => "figure",
        /// `<label>`
        Label => "label",
        /// `<h1>`
        H1 => "h1",
        /// `<h2>`
        H2 => "h2",
        /// `<h3>`
        H3 => "h3",
        /// `<h4>`
        H4 => "h4",
        /// `<h5>`
        H5 => "h5",
        /// `<h6>`
        H6 => "h6",
        /// `<strong>`
        Strong => "strong",
        /// `<em>`
        Em => "em",
        /// `<small>`
        Small => "small",
        /// `<code>`
        Code => "code",
        /// `<pre>`
        Pre => "pre",
        /// `<blockquote>`
        Blockquote => "blockquote",
    }
}

impl ElementKind {
    /// HTML tag name.
    pub const fn tag(self) -> &'static str {
        self.token()
    }
}

/// Attribute list for a primitive root, pass-through attributes last.
pub fn node_attributes(
    kind: &'static str,
    resolved: &ResolvedStyle,
    overrides: &StyleOverrides,
    passthrough: Vec<(&'static str, Attribute)>,
) -> Vec<(&'static str, Attribute)> {
    let mut resolved = resolved.clone();
    let mut overrides = overrides.clone();
    let mut forwarded = Vec::with_capacity(passthrough.len());

    for (name, value) in passthrough {
        match (name, &value) {
            ("class", Attribute::String(raw)) => {
                resolved.classes.extend_raw(raw);
            }
            ("style", Attribute::String(raw)) => {
                overrides.merge(StyleOverrides::parse(raw));
            }
            ("class" | "style", _) => {
                logging::debug_warn!(
                    "reactive `attr:{name}` on a `{kind}` primitive replaces its computed {name}"
                );
                forwarded.push((name, value));
            }
            _ => forwarded.push((name, value)),
        }
    }

    let mut attributes = vec![
        ("class", Attribute::String(resolved.class_attr().into())),
        ("data-ui-primitive", Attribute::String("true".into())),
        ("data-ui-kind", Attribute::String(kind.into())),
    ];

    let css = resolved.to_css(&overrides);
    if !css.is_empty() {
        attributes.push(("style", Attribute::String(css.into())));
    }

    attributes.extend(forwarded);
    attributes
}

/// Applies an attribute list and optional children to any element.
pub fn styled<El>(
    element: HtmlElement<El>,
    attributes: Vec<(&'static str, Attribute)>,
    children: Option<Children>,
) -> HtmlElement<El>
where
    El: ElementDescriptor + 'static,
{
    let element = attributes
        .into_iter()
        .fold(element, |element, (name, value)| element.attr(name, value));

    match children {
        Some(children) => element.child(children().into_view()),
        None => element,
    }
}

/// Renders an element whose tag is chosen at runtime.
pub fn render_element(
    kind: ElementKind,
    attributes: Vec<(&'static str, Attribute)>,
    children: Option<Children>,
) -> HtmlElement<html::Custom> {
    styled(
        html::custom(html::Custom::new(kind.tag())),
        attributes,
        children,
    )
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
pub(crate) fn attribute_text(
    attributes: &[(&'static str, Attribute)],
    name: &str,
) -> Option<String> {
    attributes
        .iter()
        .rev()
        .find(|(existing, _)| *existing == name)
        .and_then(|(_, value)| match value {
            Attribute::String(value) => Some(value.to_string()),
            _ => None,
        })
}

#[cfg(test)]
pub(crate) fn render_html(view: impl FnOnce() -> View) -> String {
    let runtime = create_runtime();
    let html = view().render_to_string().to_string();
    runtime.dispose();
    html
}
