// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::borrow::Cow;

/// Returns the escape sequence of the given char, or `None` if the char
/// can appear in a pattern as-is.
pub fn escape_sequence(c: char) -> Option<&'static str> {
    let s = match c {
        '.' => "\\.",
        '\\' => "\\\\",
        '^' => "\\^",
        '$' => "\\$",
        '[' => "\\[",
        ']' => "\\]",
        '(' => "\\(",
        ')' => "\\)",
        '*' => "\\*",
        '+' => "\\+",
        '?' => "\\?",
        '{' => "\\{",
        '}' => "\\}",
        '|' => "\\|",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        _ => return None,
    };

    Some(s)
}

/// Escapes the regex metacharacters (and the newline, carriage return and
/// tab control chars) of a literal text.
///
/// The input is returned borrowed when it contains nothing to escape.
///
/// e.g.
///
/// ```
/// assert_eq!(regex_scope::escape("a.b"), r"a\.b");
/// assert_eq!(regex_scope::escape("abc"), "abc");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| escape_sequence(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match escape_sequence(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }

    Cow::Owned(out)
}
