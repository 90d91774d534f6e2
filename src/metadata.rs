// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

/// Document-head fields for one page.
///
/// Plain data. The site layer hands this to the shell explicitly, once
/// per page build; nothing in the body tree touches the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
}

impl PageMetadata {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        og_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            og_title: og_title.into(),
        }
    }
}
