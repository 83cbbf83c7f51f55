// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug)]
pub enum RegexScopeError {
    // the offending group name
    InvalidGroupName(String),

    // back-references are 1-based, index 0 is the whole match
    InvalidGroupIndex(usize),

    InvalidQuantifier(String),

    // a zero step would hand out the same index to every group
    InvalidIndexStep,

    // the group index counter runs past `usize::MAX`
    GroupIndexOverflow,

    // the host engine rejects the produced pattern
    Compile(fancy_regex::Error),

    // the host engine fails while matching (e.g. backtrack limit exceeded)
    Match(fancy_regex::Error),
}

impl Display for RegexScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexScopeError::InvalidGroupName(name) => write!(
                f,
                "Group name must be a valid identifier ([a-zA-Z][a-zA-Z0-9_-]*): \"{}\".",
                name
            ),
            RegexScopeError::InvalidGroupIndex(index) => write!(
                f,
                "Group index must be a positive integer, actual: {}.",
                index
            ),
            RegexScopeError::InvalidQuantifier(msg) => f.write_str(msg),
            RegexScopeError::InvalidIndexStep => {
                f.write_str("The step of the group index provider must not be zero.")
            }
            RegexScopeError::GroupIndexOverflow => {
                f.write_str("The capture group index exceeds the maximum value.")
            }
            RegexScopeError::Compile(e) => write!(f, "Failed to compile the pattern: {}", e),
            RegexScopeError::Match(e) => write!(f, "Failed to match the pattern: {}", e),
        }
    }
}

impl std::error::Error for RegexScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegexScopeError::Compile(e) | RegexScopeError::Match(e) => Some(e),
            _ => None,
        }
    }
}
