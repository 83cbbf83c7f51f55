// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_scope::{build_regex, MetaCharacter, Quantifier, RegexScopeError};

pub fn main() -> Result<(), RegexScopeError> {
    // ^\d{4}-\d{2}-\d{2}$
    let re = build_regex(|s| {
        s.match_string_begin();
        s.match_meta(MetaCharacter::DIGIT_CHAR, Quantifier::exactly(4));
        s.match_char('-', None);
        s.match_meta(MetaCharacter::DIGIT_CHAR, Quantifier::exactly(2));
        s.match_char('-', None);
        s.match_meta(MetaCharacter::DIGIT_CHAR, Quantifier::exactly(2));
        s.match_string_end();
        Ok(())
    })?;

    println!("{}", re.as_str());
    println!("{}", re.is_match("2025-04-22")?); // should be true
    println!("{}", re.is_match("04-22")?); // should be false

    Ok(())
}
