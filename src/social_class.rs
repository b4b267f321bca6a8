// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `SocialClass` enum, which selects the column of
//! the demand-factor table that applies to a calculation.

use std::fmt::Display;

/// Represents the customer-mix category of the area served by a network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SocialClass {
    #[default]
    A,
    B,
    C,
    D,
}

impl SocialClass {
    /// All social classes, in the order of the demand table's columns.
    pub const ALL: [SocialClass; 4] = [
        SocialClass::A,
        SocialClass::B,
        SocialClass::C,
        SocialClass::D,
    ];

    /// Parses a social-class code.
    ///
    /// Codes are case-insensitive.  Unknown codes fall back to class `A`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "A" => SocialClass::A,
            "B" => SocialClass::B,
            "C" => SocialClass::C,
            "D" => SocialClass::D,
            other => {
                tracing::warn!("Unknown social class {:?}, using class A.", other);
                SocialClass::A
            }
        }
    }

    /// Returns the position of the class in a row of the demand table.
    pub(crate) fn column(&self) -> usize {
        match self {
            SocialClass::A => 0,
            SocialClass::B => 1,
            SocialClass::C => 2,
            SocialClass::D => 3,
        }
    }
}

impl Display for SocialClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialClass::A => write!(f, "A"),
            SocialClass::B => write!(f, "B"),
            SocialClass::C => write!(f, "C"),
            SocialClass::D => write!(f, "D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(SocialClass::from_code("b"), SocialClass::B);
        assert_eq!(SocialClass::from_code(" D "), SocialClass::D);
        assert_eq!(SocialClass::from_code("E"), SocialClass::A);
        assert_eq!(SocialClass::from_code(""), SocialClass::A);
    }

    #[test]
    fn test_columns() {
        for (i, class) in SocialClass::ALL.iter().enumerate() {
            assert_eq!(class.column(), i);
            assert_eq!(SocialClass::from_code(&class.to_string()), *class);
        }
    }
}
