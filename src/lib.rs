// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

#![doc = include_str!("../README.md")]

mod ast;
mod builder;
mod charset;
mod error;
mod escape;
mod index;
mod printer;
mod quantifier;
mod scope;

pub mod regex;

pub use ast::{is_valid_group_name, Element, Fragment, IndexedGroupRef, MetaCharacter, NamedGroupRef};
pub use builder::{build_pattern, build_regex, PatternBuilder};
pub use charset::CharacterSet;
pub use error::RegexScopeError;
pub use escape::{escape, escape_sequence};
pub use index::GroupIndexProvider;
pub use quantifier::Quantifier;
pub use regex::{Regex, RegexOptions};
pub use scope::Scope;
