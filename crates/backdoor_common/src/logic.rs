//! IEEE 1164 four-state logic values and their two-field bit encoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single 4-state logic value following the IEEE 1164 standard.
///
/// The four states represent:
/// - `Zero` — logic low (driven 0)
/// - `One` — logic high (driven 1)
/// - `X` — unknown or uninitialized value
/// - `Z` — high-impedance (tri-state, not driven)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Logic low (0).
    Zero = 0,
    /// Logic high (1).
    One = 1,
    /// Unknown or uninitialized.
    X = 2,
    /// High-impedance (tri-state).
    Z = 3,
}

impl Logic {
    /// Converts a character to a [`Logic`] value.
    ///
    /// Accepts '0', '1', 'x'/'X', and 'z'/'Z'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'x' | 'X' => Some(Logic::X),
            'z' | 'Z' => Some(Logic::Z),
            _ => None,
        }
    }

    /// Decodes one bit position from its `aval`/`bval` pair.
    ///
    /// ```text
    /// a b
    /// 0 0 -> 0
    /// 1 0 -> 1
    /// 0 1 -> Z
    /// 1 1 -> X
    /// ```
    pub fn from_ab(a: bool, b: bool) -> Self {
        match (a, b) {
            (false, false) => Logic::Zero,
            (true, false) => Logic::One,
            (false, true) => Logic::Z,
            (true, true) => Logic::X,
        }
    }

    /// Encodes this value as an `(aval, bval)` bit pair.
    pub fn to_ab(self) -> (bool, bool) {
        match self {
            Logic::Zero => (false, false),
            Logic::One => (true, false),
            Logic::Z => (false, true),
            Logic::X => (true, true),
        }
    }

    /// Returns true for `Zero` and `One`.
    pub fn is_known(self) -> bool {
        matches!(self, Logic::Zero | Logic::One)
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::Zero => write!(f, "0"),
            Logic::One => write!(f, "1"),
            Logic::X => write!(f, "X"),
            Logic::Z => write!(f, "Z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Logic::*;
    use super::Logic;

    #[test]
    fn ab_encoding_table() {
        assert_eq!(Logic::from_ab(false, false), Zero);
        assert_eq!(Logic::from_ab(true, false), One);
        assert_eq!(Logic::from_ab(false, true), Z);
        assert_eq!(Logic::from_ab(true, true), X);
    }

    #[test]
    fn ab_encoding_inverts() {
        for v in [Zero, One, X, Z] {
            let (a, b) = v.to_ab();
            assert_eq!(Logic::from_ab(a, b), v);
        }
    }

    #[test]
    fn known_values() {
        assert!(Zero.is_known());
        assert!(One.is_known());
        assert!(!X.is_known());
        assert!(!Z.is_known());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{Zero}"), "0");
        assert_eq!(format!("{One}"), "1");
        assert_eq!(format!("{X}"), "X");
        assert_eq!(format!("{Z}"), "Z");
    }

    #[test]
    fn from_char_valid() {
        assert_eq!(Logic::from_char('0'), Some(Zero));
        assert_eq!(Logic::from_char('1'), Some(One));
        assert_eq!(Logic::from_char('x'), Some(X));
        assert_eq!(Logic::from_char('X'), Some(X));
        assert_eq!(Logic::from_char('z'), Some(Z));
        assert_eq!(Logic::from_char('Z'), Some(Z));
    }

    #[test]
    fn from_char_invalid() {
        assert_eq!(Logic::from_char('a'), None);
        assert_eq!(Logic::from_char('2'), None);
    }
}
