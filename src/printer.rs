// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display, Write};

use crate::{
    ast::{Element, Fragment, IndexedGroupRef, MetaCharacter, NamedGroupRef},
    charset::CharacterSet,
    quantifier::{Quantifier, Repetition},
    scope::Scope,
};

impl Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repetition::ZeroOrMore => f.write_char('*'),
            Repetition::OneOrMore => f.write_char('+'),
            Repetition::Optional => f.write_char('?'),
            Repetition::Specified(n) => write!(f, "{{{}}}", n),
            Repetition::AtLeast(n) => write!(f, "{{{},}}", n),
            Repetition::Range(m, n) => write!(f, "{{{},{}}}", m, n),
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repetition)?;
        if self.lazy {
            f.write_char('?')?;
        }
        Ok(())
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for MetaCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for IndexedGroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.index())
    }
}

impl Display for NamedGroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\k<{}>", self.name())
    }
}

impl Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            f.write_str("[^")?;
        } else {
            f.write_char('[')?;
        }

        for member in self.members() {
            write!(f, "{}", member)?;
        }

        f.write_char(']')
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Literal(e) => write!(f, "{}", e),
            Element::MetaCharacter(e) => write!(f, "{}", e),
            Element::IndexedGroupRef(e) => write!(f, "{}", e),
            Element::NamedGroupRef(e) => write!(f, "{}", e),
            Element::CharacterSet(e) => write!(f, "{}", e),
            Element::Scope(components) => write_sequence(f, components),
        }
    }
}

// writes the elements one after another. A back-reference followed by
// a digit, e.g. `\1` and `0`, would read as `\10`, so an empty
// non-capturing group is written between them.
fn write_sequence(f: &mut fmt::Formatter<'_>, components: &[Element]) -> fmt::Result {
    let mut after_back_reference = false;

    for component in components {
        let text = component.to_string();
        if text.is_empty() {
            continue;
        }

        if after_back_reference && text.starts_with(|c: char| c.is_ascii_digit()) {
            f.write_str("(?:)")?;
        }

        f.write_str(&text)?;
        after_back_reference = ends_with_indexed_group_ref(component);
    }

    Ok(())
}

fn ends_with_indexed_group_ref(element: &Element) -> bool {
    match element {
        Element::IndexedGroupRef(_) => true,
        Element::Scope(components) => components
            .iter()
            .rev()
            .find(|component| !component.to_string().is_empty())
            .is_some_and(ends_with_indexed_group_ref),
        _ => false,
    }
}

impl Element {
    pub fn append_to(&self, buffer: &mut String) {
        // writing into a `String` does not fail
        let _ = write!(buffer, "{}", self);
    }
}

impl Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, self.components())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Element, Fragment, IndexedGroupRef, MetaCharacter, NamedGroupRef},
        charset::CharacterSet,
    };

    #[test]
    fn test_print_meta_characters() {
        assert_eq!(MetaCharacter::ANY_CHAR.to_string(), ".");
        assert_eq!(MetaCharacter::SPACE_CHAR.to_string(), r"\s");
        assert_eq!(MetaCharacter::NON_SPACE_CHAR.to_string(), r"\S");
        assert_eq!(MetaCharacter::WORD_CHAR.to_string(), r"\w");
        assert_eq!(MetaCharacter::NON_WORD_CHAR.to_string(), r"\W");
        assert_eq!(MetaCharacter::DIGIT_CHAR.to_string(), r"\d");
        assert_eq!(MetaCharacter::NON_DIGIT_CHAR.to_string(), r"\D");
    }

    #[test]
    fn test_print_group_refs() {
        assert_eq!(IndexedGroupRef::new(1).unwrap().to_string(), r"\1");
        assert_eq!(IndexedGroupRef::new(12).unwrap().to_string(), r"\12");
        assert_eq!(NamedGroupRef::new("test").unwrap().to_string(), r"\k<test>");
    }

    #[test]
    fn test_print_nested_scope() {
        let mut cs = CharacterSet::new();
        cs.range('0', '9');

        let element = Element::Scope(vec![
            Element::Literal(Fragment::new("(")),
            Element::Scope(vec![
                Element::MetaCharacter(MetaCharacter::WORD_CHAR),
                Element::CharacterSet(cs),
                Element::Scope(vec![]),
            ]),
            Element::Literal(Fragment::new(")")),
            Element::IndexedGroupRef(IndexedGroupRef::new(1).unwrap()),
        ]);

        assert_eq!(element.to_string(), r"(\w[0-9])\1");

        let mut buffer = String::from("^");
        element.append_to(&mut buffer);
        assert_eq!(buffer, r"^(\w[0-9])\1");
    }

    #[test]
    fn test_print_back_reference_followed_by_digit() {
        let group_ref = || Element::IndexedGroupRef(IndexedGroupRef::new(1).unwrap());

        let element = Element::Scope(vec![
            Element::Literal(Fragment::new("(a)")),
            group_ref(),
            Element::Literal(Fragment::new("0")),
        ]);
        assert_eq!(element.to_string(), r"(a)\1(?:)0");

        // the reference ends a nested scope, the digit starts the next one
        let element = Element::Scope(vec![
            Element::Scope(vec![group_ref(), Element::Scope(vec![])]),
            Element::Literal(Fragment::new("")),
            Element::Scope(vec![Element::Literal(Fragment::new("12"))]),
        ]);
        assert_eq!(element.to_string(), r"\1(?:)12");

        // nothing is inserted when the next element is not a digit
        let element = Element::Scope(vec![
            group_ref(),
            Element::Literal(Fragment::new("{2}")),
            Element::Literal(Fragment::new("0")),
            group_ref(),
            Element::MetaCharacter(MetaCharacter::DIGIT_CHAR),
        ]);
        assert_eq!(element.to_string(), r"\1{2}0\1\d");
    }
}
