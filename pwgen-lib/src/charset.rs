use serde::{Deserialize, Serialize};

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static DIGITS: &str = "0123456789";
pub static SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the disjoint character categories a password can draw from.
///
/// Declaration order is the canonical order used when picking mandatory characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Lowercase => f.write_str("lowercase (a-z)"),
            Self::Uppercase => f.write_str("uppercase (A-Z)"),
            Self::Digit => f.write_str("numbers (0-9)"),
            Self::Symbol => f.write_str("symbols (!@#$)"),
        };
    }
}

/// A set of enabled character classes, always iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet {
    bits: u8,
}

impl ClassSet {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Self::from_iter(CharacterClass::ALL)
    }

    pub fn from_flags(lower: bool, upper: bool, digits: bool, symbols: bool) -> Self {
        let mut set = Self::new();
        set.set(CharacterClass::Lowercase, lower);
        set.set(CharacterClass::Uppercase, upper);
        set.set(CharacterClass::Digit, digits);
        set.set(CharacterClass::Symbol, symbols);
        set
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.bits |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.bits &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.bits ^= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Concatenation of the characters of every enabled class
    pub fn pool(&self) -> Vec<char> {
        self.iter().flat_map(|class| class.chars().chars()).collect()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::new();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

#[cfg(test)]
mod test {
    use super::{CharacterClass, ClassSet};

    #[test]
    fn classes_are_disjoint() {
        for a in CharacterClass::ALL {
            for b in CharacterClass::ALL {
                if a == b {
                    continue;
                }
                assert!(!a.chars().chars().any(|c| b.contains(c)));
            }
        }
    }

    #[test]
    fn symbol_set_is_ascii_punctuation() {
        let expected: String = (0u8..128)
            .map(|b| b as char)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(CharacterClass::Symbol.chars(), expected);
        assert_eq!(CharacterClass::Symbol.chars().len(), 32);
    }

    #[test]
    fn iterates_in_canonical_order() {
        let set = ClassSet::from_iter([CharacterClass::Symbol, CharacterClass::Lowercase]);
        let order: Vec<CharacterClass> = set.iter().collect();
        assert_eq!(order, vec![CharacterClass::Lowercase, CharacterClass::Symbol]);
    }

    #[test]
    fn toggle_and_len() {
        let mut set = ClassSet::all();
        assert_eq!(set.len(), 4);
        set.toggle(CharacterClass::Digit);
        assert!(!set.contains(CharacterClass::Digit));
        assert_eq!(set.len(), 3);
        set.toggle(CharacterClass::Digit);
        assert!(set.contains(CharacterClass::Digit));
    }

    #[test]
    fn pool_is_union_of_enabled() {
        let set = ClassSet::from_flags(false, true, true, false);
        let pool: String = set.pool().into_iter().collect();
        assert_eq!(pool, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
        assert!(ClassSet::new().pool().is_empty());
    }
}
