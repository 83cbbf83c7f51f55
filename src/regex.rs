// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Index;

use crate::RegexScopeError;

/// Options passed to the regex engine when a pattern is compiled.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct RegexOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,

    // `None` keeps the default limit of the engine
    pub backtrack_limit: Option<usize>,
}

/// A compiled pattern.
///
/// The matching is delegated to `fancy_regex`, which supports
/// back-references and lookaround.
#[derive(Debug, Clone)]
pub struct Regex {
    backend: fancy_regex::Regex,

    // the same pattern anchored at both ends, for the full-text tests
    entire: fancy_regex::Regex,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, RegexScopeError> {
        Self::with_options(pattern, &RegexOptions::default())
    }

    pub fn with_options(pattern: &str, options: &RegexOptions) -> Result<Self, RegexScopeError> {
        let backend = compile(pattern, options)?;

        // the wrapper group is non-capturing, the group numbers stay the same.
        let entire = compile(&format!("\\A(?:{})\\z", pattern), options)?;

        log::trace!("compiled pattern: {}", pattern);
        Ok(Regex { backend, entire })
    }

    pub fn as_str(&self) -> &str {
        self.backend.as_str()
    }

    /// Tests whether the pattern matches anywhere in the text.
    pub fn is_match(&self, text: &str) -> Result<bool, RegexScopeError> {
        self.backend.is_match(text).map_err(RegexScopeError::Match)
    }

    /// Tests whether the pattern matches the entire text.
    pub fn matches(&self, text: &str) -> Result<bool, RegexScopeError> {
        self.entire.is_match(text).map_err(RegexScopeError::Match)
    }

    pub fn find<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> Result<Option<Match<'a, 'b>>, RegexScopeError> {
        let matched = self.backend.find(text).map_err(RegexScopeError::Match)?;
        Ok(matched.map(|m| Match::from_backend(m, None)))
    }

    pub fn find_iter<'a, 'b>(&'a self, text: &'b str) -> Matches<'a, 'b> {
        Matches {
            backend: self.backend.find_iter(text),
        }
    }

    pub fn captures<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> Result<Option<Captures<'a, 'b>>, RegexScopeError> {
        let captures = self
            .backend
            .captures(text)
            .map_err(RegexScopeError::Match)?;
        Ok(captures.map(|c| Captures::from_backend(&self.backend, &c)))
    }

    /// Captures the groups only when the pattern matches the entire text.
    pub fn match_entire<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> Result<Option<Captures<'a, 'b>>, RegexScopeError> {
        let captures = self
            .entire
            .captures(text)
            .map_err(RegexScopeError::Match)?;
        Ok(captures.map(|c| Captures::from_backend(&self.entire, &c)))
    }

    /// The number of the capture groups, including the group 0
    /// (the whole match).
    pub fn captures_len(&self) -> usize {
        self.backend.captures_len()
    }
}

fn compile(pattern: &str, options: &RegexOptions) -> Result<fancy_regex::Regex, RegexScopeError> {
    let mut builder = fancy_regex::RegexBuilder::new(pattern);
    builder.case_insensitive(options.case_insensitive);
    builder.multi_line(options.multi_line);
    builder.dot_matches_new_line(options.dot_matches_new_line);
    if let Some(limit) = options.backtrack_limit {
        builder.backtrack_limit(limit);
    }

    builder.build().map_err(RegexScopeError::Compile)
}

pub struct Matches<'a, 'b> {
    backend: fancy_regex::Matches<'a, 'b>,
}

impl<'a, 'b> Iterator for Matches<'a, 'b> {
    type Item = Result<Match<'a, 'b>, RegexScopeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let matched = self.backend.next()?;
        Some(
            matched
                .map(|m| Match::from_backend(m, None))
                .map_err(RegexScopeError::Match),
        )
    }
}

/// The capture groups of one match, the group 0 is the whole match.
#[derive(Debug, PartialEq, Clone)]
pub struct Captures<'a, 'b> {
    // one slot per group of the pattern, `None` if the group
    // does not participate in the match
    matches: Vec<Option<Match<'a, 'b>>>,
}

impl<'a, 'b> Captures<'a, 'b> {
    fn from_backend(regex: &'a fancy_regex::Regex, captures: &fancy_regex::Captures<'b>) -> Self {
        let matches = regex
            .capture_names()
            .enumerate()
            .map(|(idx, name)| captures.get(idx).map(|m| Match::from_backend(m, name)))
            .collect();

        Captures { matches }
    }

    pub fn get(&self, index: usize) -> Option<&Match<'a, 'b>> {
        self.matches.get(index).and_then(Option::as_ref)
    }

    pub fn name(&self, name: &str) -> Option<&Match<'a, 'b>> {
        self.matches
            .iter()
            .flatten()
            .find(|item| item.name == Some(name))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<usize> for Captures<'_, '_> {
    type Output = str;

    /// Panics when the group does not exist or does not participate
    /// in the match, use `get` to test it first.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(m) => m.as_str(),
            None => panic!("No capture group {} in the match.", index),
        }
    }
}

impl Index<&str> for Captures<'_, '_> {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        match self.name(name) {
            Some(m) => m.as_str(),
            None => panic!("No capture group named \"{}\" in the match.", name),
        }
    }
}

/// A matched span of the text, positions are byte offsets.
#[derive(Debug, PartialEq, Clone)]
pub struct Match<'a, 'b> {
    start: usize,
    end: usize,
    name: Option<&'a str>,
    value: &'b str,
}

impl<'a, 'b> Match<'a, 'b> {
    fn from_backend(matched: fancy_regex::Match<'b>, name: Option<&'a str>) -> Self {
        Match {
            start: matched.start(),
            end: matched.end(),
            name,
            value: matched.as_str(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The name of the capture group, if it has one.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn as_str(&self) -> &'b str {
        self.value
    }
}
