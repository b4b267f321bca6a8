// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur in the library.

use crate::NodeId;

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident, $doc:literal)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $(
                #[doc = $doc]
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                        point_ids: Vec::new(),
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (EmptyInput, empty_input, "No segments were provided."),
    (MissingRoot, missing_root, "No segment carries the root identifier."),
    (
        MissingParent,
        missing_parent,
        "A non-root segment has no upstream reference."
    ),
    (
        DuplicatePoint,
        duplicate_point,
        "Two segments share the same point id after normalization."
    ),
    (
        InvalidSegment,
        invalid_segment,
        "A segment carries a negative or non-finite length or load."
    ),
    (
        CycleOrOrphan,
        cycle_or_orphan,
        "Some segments could not be ordered from the root."
    ),
    (
        InvalidTable,
        invalid_table,
        "A reference table is malformed or returned an invalid value."
    ),
    (
        InvalidConfig,
        invalid_config,
        "The configuration carries an unusable value."
    ),
    (PointNotFound, point_not_found, "No point exists with the given id."),
    (Internal, internal, "An internal invariant was broken.")
);

/// An error that can occur during the validation of a network or the
/// calculation of its loads and costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
    point_ids: Vec<NodeId>,
}

impl Error {
    /// Attaches the ids of the offending points to the error.
    pub(crate) fn with_points(mut self, point_ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.point_ids.extend(point_ids);
        self
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human readable description of the error.
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// Returns the ids of the points that caused the error, if any.
    pub fn point_ids(&self) -> &[NodeId] {
        &self.point_ids
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::missing_parent("Point P1 has no upstream point.")
            .with_points([NodeId::new("p1")]);
        assert_eq!(err.kind(), ErrorKind::MissingParent);
        assert_eq!(
            err.to_string(),
            "MissingParent: Point P1 has no upstream point."
        );
        assert_eq!(err.point_ids(), &[NodeId::new("P1")]);
    }
}
