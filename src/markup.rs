// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use build_html::escape_html;
use dyn_clone::DynClone;

use crate::style::{StyleClass, StyleRegistry};

/// A node in the page tree. Rendering is pure: the same tree and the
/// same registry always produce the same string.
pub trait Renderable: DynClone {
    fn render(&self, styles: &StyleRegistry) -> String;
}

dyn_clone::clone_trait_object!(Renderable);

fn render_children(children: &[Box<dyn Renderable>], styles: &StyleRegistry) -> String {
    children
        .iter()
        .map(|child| child.render(styles))
        .collect::<Vec<String>>()
        .join("")
}

fn classed(tag: &str, class: &str, inner: &str) -> String {
    format!("<{tag} class=\"{class}\">{inner}</{tag}>")
}

/// The outer page shell, `<main>`.
#[derive(Clone, Default)]
pub struct Main {
    children: Vec<Box<dyn Renderable>>,
}

impl Main {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Renderable for Main {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "main",
            styles.resolve(StyleClass::Main),
            &render_children(&self.children, styles),
        )
    }
}

/// Centered content column inside `Main`.
#[derive(Clone, Default)]
pub struct Container {
    children: Vec<Box<dyn Renderable>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Renderable for Container {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "div",
            styles.resolve(StyleClass::Container),
            &render_children(&self.children, styles),
        )
    }
}

/// Top-level page heading, `<h1>`.
#[derive(Clone)]
pub struct Heading {
    text: String,
}

impl Heading {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Renderable for Heading {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "h1",
            styles.resolve(StyleClass::Title),
            &escape_html(&self.text),
        )
    }
}

/// Section heading, `<h2>`.
#[derive(Clone)]
pub struct SubHeading {
    text: String,
}

impl SubHeading {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Renderable for SubHeading {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "h2",
            styles.resolve(StyleClass::Subtitle),
            &escape_html(&self.text),
        )
    }
}

/// Wrapper for a page's main content block.
#[derive(Clone, Default)]
pub struct ContentBlock {
    children: Vec<Box<dyn Renderable>>,
}

impl ContentBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Renderable for ContentBlock {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "div",
            styles.resolve(StyleClass::Content),
            &render_children(&self.children, styles),
        )
    }
}

/// Running-text wrapper inside a content block.
#[derive(Clone, Default)]
pub struct TextBlock {
    children: Vec<Box<dyn Renderable>>,
}

impl TextBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, child: impl Renderable + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Renderable for TextBlock {
    fn render(&self, styles: &StyleRegistry) -> String {
        classed(
            "div",
            styles.resolve(StyleClass::Text),
            &render_children(&self.children, styles),
        )
    }
}

/// Unordered list of literal items, rendered in insertion order.
#[derive(Clone, Default)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for ItemList {
    fn render(&self, styles: &StyleRegistry) -> String {
        let item_class = styles.resolve(StyleClass::TextItem);

        classed(
            "ul",
            item_class,
            &self
                .items
                .iter()
                .map(|item| classed("li", item_class, &escape_html(item)))
                .collect::<Vec<String>>()
                .join(""),
        )
    }
}
