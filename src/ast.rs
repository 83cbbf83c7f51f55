// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{charset::CharacterSet, RegexScopeError};

/// Anything that can be serialized into pattern text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Element {
    /// A fragment that is appended verbatim, it is escaped
    /// (or is a fixed piece of syntax) already.
    Literal(Fragment),
    MetaCharacter(MetaCharacter),
    IndexedGroupRef(IndexedGroupRef),
    NamedGroupRef(NamedGroupRef),
    CharacterSet(CharacterSet),

    /// A sealed nested sequence, it has no delimiters of its own.
    Scope(Vec<Element>),
}

/// Pre-escaped pattern text.
///
/// Fragments are produced by the builder only, e.g. the anchors,
/// the group delimiters and the escaped literal text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Fragment(String);

impl Fragment {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One of the predefined metacharacters, e.g. `.`, `\d`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct MetaCharacter(&'static str);

impl MetaCharacter {
    /// `.`, any char except line terminators.
    pub const ANY_CHAR: MetaCharacter = MetaCharacter(".");

    /// `\s`
    pub const SPACE_CHAR: MetaCharacter = MetaCharacter("\\s");

    /// `\S`
    pub const NON_SPACE_CHAR: MetaCharacter = MetaCharacter("\\S");

    /// `\w`, alphanumeric or underscore.
    pub const WORD_CHAR: MetaCharacter = MetaCharacter("\\w");

    /// `\W`
    pub const NON_WORD_CHAR: MetaCharacter = MetaCharacter("\\W");

    /// `\d`
    pub const DIGIT_CHAR: MetaCharacter = MetaCharacter("\\d");

    /// `\D`
    pub const NON_DIGIT_CHAR: MetaCharacter = MetaCharacter("\\D");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// A back-reference to a numbered capture group, i.e. `\N`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IndexedGroupRef {
    index: usize,
}

impl IndexedGroupRef {
    /// Fails when the index is 0, which refers to the whole match
    /// rather than to a group.
    pub fn new(index: usize) -> Result<Self, RegexScopeError> {
        if index == 0 {
            return Err(RegexScopeError::InvalidGroupIndex(index));
        }

        Ok(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A back-reference to a named capture group, i.e. `\k<name>`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NamedGroupRef {
    name: String,
}

impl NamedGroupRef {
    /// Fails when the name does not match `[a-zA-Z][a-zA-Z0-9_-]*`.
    pub fn new(name: &str) -> Result<Self, RegexScopeError> {
        if !is_valid_group_name(name) {
            return Err(RegexScopeError::InvalidGroupName(name.to_owned()));
        }

        Ok(Self {
            name: name.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some('a'..='z' | 'A'..='Z') => {
            chars.all(|c| matches!(c, '0'..='9' | 'a'..='z' | 'A'..='Z' | '_' | '-'))
        }
        _ => false,
    }
}

impl From<MetaCharacter> for Element {
    fn from(value: MetaCharacter) -> Self {
        Element::MetaCharacter(value)
    }
}

impl From<IndexedGroupRef> for Element {
    fn from(value: IndexedGroupRef) -> Self {
        Element::IndexedGroupRef(value)
    }
}

impl From<NamedGroupRef> for Element {
    fn from(value: NamedGroupRef) -> Self {
        Element::NamedGroupRef(value)
    }
}

impl From<&NamedGroupRef> for Element {
    fn from(value: &NamedGroupRef) -> Self {
        Element::NamedGroupRef(value.clone())
    }
}

impl From<CharacterSet> for Element {
    fn from(value: CharacterSet) -> Self {
        Element::CharacterSet(value)
    }
}

impl From<Fragment> for Element {
    fn from(value: Fragment) -> Self {
        Element::Literal(value)
    }
}
