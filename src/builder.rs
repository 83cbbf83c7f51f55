// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    index::GroupIndexProvider,
    regex::{Regex, RegexOptions},
    scope::Scope,
    RegexScopeError,
};

/// Builds the pattern text.
///
/// e.g.
///
/// ```
/// use regex_scope::{build_pattern, MetaCharacter, Quantifier};
///
/// let pattern = build_pattern(|s| {
///     s.match_string_begin();
///     s.match_meta(MetaCharacter::DIGIT_CHAR, Quantifier::exactly(3));
///     s.match_char('-', None);
///     s.match_meta(MetaCharacter::DIGIT_CHAR, Quantifier::exactly(4));
///     s.match_string_end();
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(pattern, r"^\d{3}-\d{4}$");
/// ```
pub fn build_pattern<F>(configure: F) -> Result<String, RegexScopeError>
where
    F: FnOnce(&mut Scope) -> Result<(), RegexScopeError>,
{
    PatternBuilder::new().build_pattern(configure)
}

/// Builds the pattern text and compiles it.
pub fn build_regex<F>(configure: F) -> Result<Regex, RegexScopeError>
where
    F: FnOnce(&mut Scope) -> Result<(), RegexScopeError>,
{
    PatternBuilder::new().build_regex(configure)
}

/// The configurable form of `build_pattern` and `build_regex`.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    index_start: usize,
    index_step: usize,
    options: RegexOptions,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self {
            index_start: 1,
            index_step: 1,
            options: RegexOptions::default(),
        }
    }

    /// The index of the first capture group, default 1.
    pub fn index_start(&mut self, start: usize) -> &mut Self {
        self.index_start = start;
        self
    }

    /// The distance between two successive group indices, default 1.
    pub fn index_step(&mut self, step: usize) -> &mut Self {
        self.index_step = step;
        self
    }

    pub fn case_insensitive(&mut self, enabled: bool) -> &mut Self {
        self.options.case_insensitive = enabled;
        self
    }

    pub fn multi_line(&mut self, enabled: bool) -> &mut Self {
        self.options.multi_line = enabled;
        self
    }

    pub fn dot_matches_new_line(&mut self, enabled: bool) -> &mut Self {
        self.options.dot_matches_new_line = enabled;
        self
    }

    pub fn backtrack_limit(&mut self, limit: usize) -> &mut Self {
        self.options.backtrack_limit = Some(limit);
        self
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, configure)))]
    pub fn build_pattern<F>(&self, configure: F) -> Result<String, RegexScopeError>
    where
        F: FnOnce(&mut Scope) -> Result<(), RegexScopeError>,
    {
        // the provider and the root scope live for this build only
        let index_provider = GroupIndexProvider::new(self.index_start, self.index_step)?;
        let mut root = Scope::new(&index_provider);
        configure(&mut root)?;

        let mut pattern = String::new();
        root.append_to(&mut pattern);

        log::debug!("build pattern: {}", pattern);
        Ok(pattern)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, configure)))]
    pub fn build_regex<F>(&self, configure: F) -> Result<Regex, RegexScopeError>
    where
        F: FnOnce(&mut Scope) -> Result<(), RegexScopeError>,
    {
        let pattern = self.build_pattern(configure)?;
        Regex::with_options(&pattern, &self.options)
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
