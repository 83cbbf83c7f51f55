// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Write;

use crate::{
    ast::{Element, Fragment, IndexedGroupRef, MetaCharacter, NamedGroupRef},
    charset::CharacterSet,
    escape::escape,
    index::GroupIndexProvider,
    quantifier::Quantifier,
    RegexScopeError,
};

/// An ordered sequence of elements, plus the operations that append to it.
///
/// A scope is created either by the build entry point (the root scope)
/// or by one of the group and lookaround operations (a child scope).
/// All scopes of a build share one `GroupIndexProvider`, a scope can
/// not be created with a provider of its own:
///
/// ```compile_fail
/// use regex_scope::{GroupIndexProvider, Scope};
///
/// let provider = GroupIndexProvider::default();
/// let scope = Scope::new(&provider);
/// ```
#[derive(Debug)]
pub struct Scope<'p> {
    components: Vec<Element>,
    index_provider: &'p GroupIndexProvider,
}

impl<'p> Scope<'p> {
    pub(crate) fn new(index_provider: &'p GroupIndexProvider) -> Self {
        Self {
            components: vec![],
            index_provider,
        }
    }

    pub fn components(&self) -> &[Element] {
        &self.components
    }

    /// Seals the scope into an element, the element has no delimiters
    /// of its own.
    pub fn into_element(self) -> Element {
        Element::Scope(self.components)
    }

    pub fn append_to(&self, buffer: &mut String) {
        // writing into a `String` does not fail
        let _ = write!(buffer, "{}", self);
    }

    fn push_fragment(&mut self, text: impl Into<String>) {
        self.components.push(Element::Literal(Fragment::new(text)));
    }

    fn push_quantifier(&mut self, quantifier: Option<Quantifier>) {
        if let Some(q) = quantifier {
            self.push_fragment(q.to_string());
        }
    }

    // builds a child scope which shares the index provider of this scope
    fn build_child<F>(&self, configure: F) -> Result<Element, RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        let mut child = Scope::new(self.index_provider);
        configure(&mut child)?;
        Ok(child.into_element())
    }

    fn push_wrapped<F>(
        &mut self,
        open: &str,
        quantifier: Option<Quantifier>,
        configure: F,
    ) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        let child = self.build_child(configure)?;
        self.push_fragment(open);
        self.components.push(child);
        self.push_fragment(")");
        self.push_quantifier(quantifier);
        Ok(())
    }

    /// `^`
    pub fn match_string_begin(&mut self) {
        self.push_fragment("^");
    }

    /// `$`
    pub fn match_string_end(&mut self) {
        self.push_fragment("$");
    }

    /// `\b`
    pub fn match_word_boundary(&mut self) {
        self.push_fragment("\\b");
    }

    /// `\B`
    pub fn match_non_word_boundary(&mut self) {
        self.push_fragment("\\B");
    }

    /// `|`
    pub fn insert_or(&mut self) {
        self.push_fragment("|");
    }

    /// Matches a single char, the char is escaped when necessary.
    pub fn match_char(&mut self, c: char, quantifier: impl Into<Option<Quantifier>>) {
        let mut buf = [0u8; 4];
        let text = escape(c.encode_utf8(&mut buf)).into_owned();
        self.push_fragment(text);
        self.push_quantifier(quantifier.into());
    }

    /// Matches a literal text, the text is escaped when necessary.
    ///
    /// A text of exactly one char behaves like `match_char`. When a text
    /// of any other length is quantified, it is wrapped in a non-capturing
    /// group first, e.g. `match_str("ab", Quantifier::AT_LEAST_ONE)`
    /// produces `(?:ab)+`, so the quantifier applies to the whole text
    /// and no capture group index is consumed.
    pub fn match_str(&mut self, text: &str, quantifier: impl Into<Option<Quantifier>>) {
        let quantifier = quantifier.into();

        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            self.match_char(c, quantifier);
            return;
        }

        match quantifier {
            Some(q) => {
                self.push_fragment("(?:");
                self.push_fragment(escape(text));
                self.push_fragment(")");
                self.push_quantifier(Some(q));
            }
            None => {
                self.push_fragment(escape(text));
            }
        }
    }

    /// Matches an element, e.g. a metacharacter or a group reference.
    pub fn match_element(
        &mut self,
        element: impl Into<Element>,
        quantifier: impl Into<Option<Quantifier>>,
    ) {
        self.components.push(element.into());
        self.push_quantifier(quantifier.into());
    }

    /// Shortcut of `match_element` for metacharacters.
    pub fn match_meta(
        &mut self,
        meta_character: MetaCharacter,
        quantifier: impl Into<Option<Quantifier>>,
    ) {
        self.match_element(meta_character, quantifier);
    }

    /// `[...]`
    pub fn match_character_set<F>(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
        configure: F,
    ) where
        F: FnOnce(&mut CharacterSet),
    {
        let mut character_set = CharacterSet::new();
        configure(&mut character_set);
        self.match_element(character_set, quantifier);
    }

    /// `[^...]`
    pub fn match_negated_character_set<F>(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
        configure: F,
    ) where
        F: FnOnce(&mut CharacterSet),
    {
        let mut character_set = CharacterSet::new_negated();
        configure(&mut character_set);
        self.match_element(character_set, quantifier);
    }

    /// `(?=...)`
    pub fn lookahead<F>(&mut self, configure: F) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        self.push_wrapped("(?=", None, configure)
    }

    /// `(?!...)`
    pub fn lookahead_negative<F>(&mut self, configure: F) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        self.push_wrapped("(?!", None, configure)
    }

    /// `(?<=...)`
    ///
    /// Note that some regex engines support fixed-length lookbehind only.
    pub fn lookbehind<F>(&mut self, configure: F) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        self.push_wrapped("(?<=", None, configure)
    }

    /// `(?<!...)`
    pub fn lookbehind_negative<F>(&mut self, configure: F) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        self.push_wrapped("(?<!", None, configure)
    }

    /// `(?:...)`
    pub fn match_uncaptured_group<F>(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
        configure: F,
    ) -> Result<(), RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        self.push_wrapped("(?:", quantifier.into(), configure)
    }

    /// `(?<name>...)`, returns a reference that can be matched later
    /// by `match_element`.
    ///
    /// Fails when the name does not match `[a-zA-Z][a-zA-Z0-9_-]*`.
    pub fn match_named_group<F>(
        &mut self,
        name: &str,
        quantifier: impl Into<Option<Quantifier>>,
        configure: F,
    ) -> Result<NamedGroupRef, RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        let group_ref = NamedGroupRef::new(name)?;

        // named groups are numbered too, the index is taken before
        // entering the group body so that it follows the open order.
        let index = self.index_provider.next_index()?;
        log::trace!("open named group \"{}\" with index {}", name, index);

        self.push_wrapped(&format!("(?<{}>", name), quantifier.into(), configure)?;
        Ok(group_ref)
    }

    /// `(...)`, returns a reference that can be matched later
    /// by `match_element`.
    pub fn match_indexed_group<F>(
        &mut self,
        quantifier: impl Into<Option<Quantifier>>,
        configure: F,
    ) -> Result<IndexedGroupRef, RegexScopeError>
    where
        F: FnOnce(&mut Scope<'p>) -> Result<(), RegexScopeError>,
    {
        let group_ref = IndexedGroupRef::new(self.index_provider.next_index()?)?;
        self.push_wrapped("(", quantifier.into(), configure)?;
        Ok(group_ref)
    }
}
