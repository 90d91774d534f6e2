// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::Path;

use tera::{Context, Tera};

use crate::metadata::PageMetadata;

const ROOT_TEMPLATE: &str = "root.html";

const DEFAULT_ROOT: &str = "<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>{{ title }}</title>
    <meta name=\"description\" content=\"{{ description }}\">
    <meta property=\"og:title\" content=\"{{ og_title }}\">
  </head>
  <body>{{ content }}</body>
</html>
";

/// The document shell around every page body.
pub struct Shell {
    tera: Tera,
}

impl Shell {
    /// Shell using the built-in `root.html` template.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(ROOT_TEMPLATE, DEFAULT_ROOT)?;

        Ok(Self {
            tera: Self::no_autoescape(tera),
        })
    }

    /// Shell using `root.html` from a template directory, falling back
    /// to the built-in template when the directory has none.
    pub fn from_dir(dir: &Path) -> Result<Self, tera::Error> {
        let root = dir.join(ROOT_TEMPLATE);

        if !root.exists() {
            return Self::new();
        }

        let mut tera = Tera::default();
        tera.add_template_file(root, Some(ROOT_TEMPLATE))?;

        Ok(Self {
            tera: Self::no_autoescape(tera),
        })
    }

    // The markup layer escapes text nodes; `content` must pass through as-is.
    fn no_autoescape(mut tera: Tera) -> Tera {
        tera.autoescape_on(vec![]);
        tera
    }

    /// Wrap a rendered page body into a full document, injecting the
    /// page's head metadata.
    pub fn render(&self, metadata: &PageMetadata, content: &str) -> Result<String, tera::Error> {
        let mut context: Context = Context::new();
        context.insert("title", &metadata.title);
        context.insert("description", &metadata.description);
        context.insert("og_title", &metadata.og_title);
        context.insert("content", content);

        self.tera.render(ROOT_TEMPLATE, &context)
    }
}
