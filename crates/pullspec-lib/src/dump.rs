//! Pull-vector rendering.
//!
//! Notation:
//! - `:name` plain field
//! - `(:friends {:limit 5})` field with options
//! - `{:address [:city :zip]}` join
//! - `*` wildcard
//!
//! Compact mode puts a spec on one line. Pretty mode puts each item of a
//! spec on its own line, indented two spaces per join level.

use pullspec_core::{Colors, Keyword};

use crate::attributes::Attributes;
use crate::spec::{Item, PullSpec};

const INDENT: usize = 2;

#[derive(Clone, Copy, Debug)]
enum Target<'a> {
    Spec(&'a PullSpec),
    Item(&'a Item),
    Attributes(&'a Attributes),
}

/// Renders a spec, a single item, or an attribute map.
#[derive(Clone, Copy, Debug)]
pub struct Printer<'a> {
    target: Target<'a>,
    colors: Colors,
    pretty: bool,
}

impl<'a> Printer<'a> {
    pub fn new(spec: &'a PullSpec) -> Self {
        Self::with_target(Target::Spec(spec))
    }

    pub fn item(item: &'a Item) -> Self {
        Self::with_target(Target::Item(item))
    }

    pub fn attributes(attributes: &'a Attributes) -> Self {
        Self::with_target(Target::Attributes(attributes))
    }

    fn with_target(target: Target<'a>) -> Self {
        Self {
            target,
            colors: Colors::PLAIN,
            pretty: false,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.target {
            Target::Spec(spec) => self.spec(&mut out, spec, 0),
            Target::Item(item) => self.item_at(&mut out, item, 0),
            Target::Attributes(attrs) => self.attrs(&mut out, attrs),
        }
        out
    }

    fn spec(&self, out: &mut String, spec: &PullSpec, depth: usize) {
        let c = &self.colors;
        if spec.is_empty() {
            out.push_str(&c.paint(c.punct, "[]"));
            return;
        }

        out.push_str(&c.paint(c.punct, "["));
        for (i, item) in spec.iter().enumerate() {
            if self.pretty {
                out.push('\n');
                push_indent(out, depth + 1);
            } else if i > 0 {
                out.push(' ');
            }
            self.item_at(out, item, depth + 1);
        }
        if self.pretty {
            out.push('\n');
            push_indent(out, depth);
        }
        out.push_str(&c.paint(c.punct, "]"));
    }

    /// `depth` is the indentation level of the line the item starts on.
    fn item_at(&self, out: &mut String, item: &Item, depth: usize) {
        let c = &self.colors;
        match item {
            Item::Field { key, attributes } if attributes.is_empty() => self.key(out, *key),
            Item::Field { key, attributes } => {
                out.push_str(&c.paint(c.punct, "("));
                self.key(out, *key);
                out.push(' ');
                self.attrs(out, attributes);
                out.push_str(&c.paint(c.punct, ")"));
            }
            Item::Join { key, spec } => {
                out.push_str(&c.paint(c.punct, "{"));
                self.key(out, *key);
                out.push(' ');
                self.spec(out, spec, depth);
                out.push_str(&c.paint(c.punct, "}"));
            }
            Item::All => out.push_str(&c.paint(c.punct, "*")),
        }
    }

    fn attrs(&self, out: &mut String, attrs: &Attributes) {
        let c = &self.colors;
        let mut entries: Vec<(&str, String)> = Vec::new();
        if let Some(alias) = attrs.alias {
            entries.push((":as", c.paint(c.key, &alias.to_string())));
        }
        if let Some(limit) = attrs.limit {
            entries.push((":limit", c.paint(c.value, &limit.to_string())));
        }
        if let Some(default) = &attrs.default {
            entries.push((":default", c.paint(c.value, &default.to_string())));
        }
        if let Some(into) = attrs.into {
            entries.push((":into", c.paint(c.value, into.literal())));
        }

        out.push_str(&c.paint(c.punct, "{"));
        for (i, (name, value)) in entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&c.paint(c.punct, name));
            out.push(' ');
            out.push_str(value);
        }
        out.push_str(&c.paint(c.punct, "}"));
    }

    fn key(&self, out: &mut String, key: Keyword) {
        out.push_str(&self.colors.paint(self.colors.key, &key.to_string()));
    }
}

fn push_indent(out: &mut String, depth: usize) {
    out.extend(std::iter::repeat_n(' ', depth * INDENT));
}
