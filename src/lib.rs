// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod config;
pub mod markup;
pub mod metadata;
pub mod pages;
pub mod site;
pub mod style;
pub mod template;
