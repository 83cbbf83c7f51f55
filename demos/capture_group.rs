// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_scope::{build_regex, CharacterSet, Quantifier, RegexScopeError};

fn hex_digit(cs: &mut CharacterSet) {
    cs.range('0', '9');
    cs.range('a', 'f');
    cs.range('A', 'F');
}

pub fn main() -> Result<(), RegexScopeError> {
    // #(?<red>[0-9a-fA-F]{2})(?<green>[0-9a-fA-F]{2})(?<blue>[0-9a-fA-F]{2})
    let re = build_regex(|s| {
        s.match_char('#', None);
        for name in ["red", "green", "blue"] {
            s.match_named_group(name, None, |s| {
                s.match_character_set(Quantifier::exactly(2), hex_digit);
                Ok(())
            })?;
        }
        Ok(())
    })?;

    println!("Pattern: {}", re.as_str());

    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // capture groups once
    if let Some(m) = re.captures(text)? {
        println!("Found match: {}", &m[0]);
        println!("Red: {}", &m["red"]);
        println!("Green: {}", &m["green"]);
        println!("Blue: {}", &m["blue"]);
    } else {
        println!("No match found");
    }

    // all matches
    for m in re.find_iter(text) {
        let m = m?;
        println!("Found color at {}: {}", m.start(), m.as_str());
    }

    Ok(())
}
