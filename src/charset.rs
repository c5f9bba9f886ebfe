//! The four fixed character classes passwords are built from.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*+?";

/// Size of the pool the generator actually draws from.
pub const GENERATION_ALPHABET_SIZE: usize =
    LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len();

/// Symbol count the crack-time estimate is documented against.
/// Larger than `SYMBOLS`; see DESIGN.md.
pub const ASSUMED_SYMBOL_COUNT: usize = 32;

/// Alphabet size used for crack-time estimates by default (26 + 26 + 10 + 32).
pub const ASSUMED_ALPHABET_SIZE: usize =
    LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + ASSUMED_SYMBOL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// All classes, in the order the generator seeds them.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn len(self) -> usize {
        self.chars().len()
    }

    /// Which class `c` belongs to, or `None` if it is outside the alphabet.
    pub fn of(c: char) -> Option<CharClass> {
        if !c.is_ascii() {
            return None;
        }
        let b = c as u8;
        CharClass::ALL
            .into_iter()
            .find(|class| class.chars().contains(&b))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }
}

/// Every class concatenated, used for filler characters.
pub fn pool() -> Vec<u8> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

/// True when `password` has at least one character of every class.
pub fn covers_all_classes(password: &str) -> bool {
    CharClass::ALL
        .iter()
        .all(|&class| password.chars().any(|c| CharClass::of(c) == Some(class)))
}
