//! Single-letter class registry used by legacy patterns.
//!
//! Each letter of a legacy pattern names a whole class:
//!
//! | Letter | Class                          |
//! |--------|--------------------------------|
//! | `C`    | Uppercase letter               |
//! | `c`    | Lowercase letter               |
//! | `n`    | Digit                          |
//! | `!`    | Punctuation                    |
//! | `.`    | Any of the above               |
//! | `s`    | Salt character (`[A-Za-z0-9./]`) |
//! | `b`    | Any byte                       |

use std::collections::HashMap;

use crate::pattern::CharClass;
use crate::pattern::char_class::{ANY, BINARY, DIGIT, LOWER, PUNCT, SALT, UPPER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    classes: HashMap<char, CharClass>,
}

impl Default for Registry {
    fn default() -> Self {
        let classes = [
            ('C', &*UPPER),
            ('c', &*LOWER),
            ('n', &*DIGIT),
            ('!', &*PUNCT),
            ('.', &*ANY),
            ('s', &*SALT),
            ('b', &*BINARY),
        ]
        .into_iter()
        .map(|(letter, class)| (letter, class.clone()))
        .collect();
        Self { classes }
    }
}

impl Registry {
    /// A registry with no letters bound.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    pub fn get(&self, letter: char) -> Option<&CharClass> {
        self.classes.get(&letter)
    }

    /// Bind `letter` to `class`, returning the previous binding.
    ///
    /// An empty class is not stored; the letter is unbound instead.
    pub fn set(&mut self, letter: char, class: CharClass) -> Option<CharClass> {
        if class.is_empty() {
            return self.classes.remove(&letter);
        }
        self.classes.insert(letter, class)
    }

    /// Bound letters in sorted order.
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.classes.keys().copied().collect();
        letters.sort_unstable();
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_letters() {
        let registry = Registry::default();
        assert_eq!(registry.letters(), vec!['!', '.', 'C', 'b', 'c', 'n', 's']);
        assert_eq!(registry.get('n'), Some(&*DIGIT));
        assert_eq!(registry.get('b').map(|c| c.len()), Some(256));
        assert_eq!(registry.get('x'), None);
    }

    #[test]
    fn set_replaces_and_returns_previous() {
        let mut registry = Registry::default();
        let previous = registry.set('n', CharClass::from("01"));
        assert_eq!(previous, Some(DIGIT.clone()));
        assert_eq!(registry.get('n'), Some(&CharClass::from("01")));
    }

    #[test]
    fn set_new_letter() {
        let mut registry = Registry::empty();
        assert_eq!(registry.set('h', CharClass::from("0123456789abcdef")), None);
        assert_eq!(registry.get('h').map(|c| c.len()), Some(16));
    }

    #[test]
    fn set_empty_class_unbinds() {
        let mut registry = Registry::default();
        registry.set('C', CharClass::from(""));
        assert_eq!(registry.get('C'), None);
    }

    #[test]
    fn registries_are_independent() {
        let mut a = Registry::default();
        let b = Registry::default();
        a.set('c', CharClass::from("z"));
        assert_eq!(b.get('c'), Some(&*LOWER));
    }
}
