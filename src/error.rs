// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur while assembling an energy system.

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub(crate) enum ErrorKind {
            $(
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
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (Internal, internal),
    (InvalidLine, invalid_line),
    (InvalidParameter, invalid_parameter),
    (MissingReference, missing_reference),
    (UnsupportedFeature, unsupported_feature)
);

/// An error that can occur during the assembly or inspection of an
/// [EnergySystem][crate::EnergySystem].
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl Error {
    /// Returns true if the error was caused by a reference to a balancing
    /// point or demand series that has not been registered.
    pub fn is_missing_reference(&self) -> bool {
        self.kind == ErrorKind::MissingReference
    }

    /// Returns true if the error was caused by an input configuration that is
    /// recognised but not supported.
    pub fn is_unsupported_feature(&self) -> bool {
        self.kind == ErrorKind::UnsupportedFeature
    }

    /// Returns the description of the error.
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}
