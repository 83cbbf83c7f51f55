// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::ast::{Element, Fragment, MetaCharacter};

/// A bracket expression, e.g. `[a-z_]` or `[^/]`.
///
/// The members keep the order they are added in. Only single chars,
/// char ranges and metacharacters can be added.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct CharacterSet {
    negated: bool,
    members: Vec<Element>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_negated() -> Self {
        Self {
            negated: true,
            members: vec![],
        }
    }

    /// Adds the range `from-to`.
    ///
    /// The order of the two chars is not checked, an inverted
    /// range is rejected by the regex engine.
    pub fn range(&mut self, from: char, to: char) {
        self.members.push(Element::Literal(Fragment::new(format!("{}-{}", from, to))));
    }

    /// Adds a single char. The char is written as-is, it is NOT escaped.
    pub fn add_char(&mut self, c: char) {
        self.members.push(Element::Literal(Fragment::new(c)));
    }

    pub fn add_meta(&mut self, meta_character: MetaCharacter) {
        self.members.push(Element::MetaCharacter(meta_character));
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn members(&self) -> &[Element] {
        &self.members
    }
}
