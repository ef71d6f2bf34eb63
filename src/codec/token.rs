// Copyright (c) 2025 - Cowboy AI, Inc.
//! Enum coder
//!
//! Closed enumerations are matched against their lower-case wire token.
//! A token this client does not know resolves to `Unrecognized` instead of
//! failing, so values added on the provider side do not break older clients.

use tracing::warn;

/// Closed enumeration with a wire token per variant
pub trait WireToken: Sized + Copy + 'static {
    /// Every recognized variant, in declaration order
    const KNOWN: &'static [Self];

    /// Exact-match a wire token, falling back to `Unrecognized`
    fn from_token(token: &str) -> Self;

    /// Wire token for this variant
    fn as_token(&self) -> &'static str;

    /// Whether this is a known variant
    fn is_recognized(&self) -> bool;
}

/// Decode an optional enumeration token; `None` stays unset
pub fn decode_token<E: WireToken>(raw: Option<&str>) -> Option<E> {
    raw.map(|token| {
        let value = E::from_token(token);
        if !value.is_recognized() {
            warn!(
                "Unrecognized {} token: {:?}",
                std::any::type_name::<E>(),
                token
            );
        }
        value
    })
}

/// Declare a closed wire enumeration with an `Unrecognized` sentinel.
///
/// Generates `as_str`/`from_token`, [`WireToken`], `Display`, `From<&str>`
/// and a `Serialize` impl that writes the wire token.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Token not known to this client
            Unrecognized,
        }

        impl $name {
            /// Wire token (`"unrecognized"` for the sentinel)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Unrecognized => "unrecognized",
                }
            }

            /// Exact-match a wire token
            pub fn from_token(token: &str) -> Self {
                match token {
                    $($token => Self::$variant,)+
                    _ => Self::Unrecognized,
                }
            }
        }

        impl $crate::codec::WireToken for $name {
            const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            fn from_token(token: &str) -> Self {
                Self::from_token(token)
            }

            fn as_token(&self) -> &'static str {
                self.as_str()
            }

            fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::from_token(token)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    wire_enum! {
        /// Test enumeration
        pub enum Colour {
            Red => "red",
            DarkBlue => "dark_blue",
        }
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(Colour::from_token("red"), Colour::Red);
        assert_eq!(Colour::from_token("dark_blue"), Colour::DarkBlue);
    }

    #[test]
    fn test_no_case_folding() {
        assert_eq!(Colour::from_token("RED"), Colour::Unrecognized);
        assert_eq!(Colour::from_token(" red"), Colour::Unrecognized);
    }

    #[test]
    fn test_unknown_token_is_unrecognized() {
        assert_eq!(decode_token::<Colour>(Some("green")), Some(Colour::Unrecognized));
        assert_eq!(decode_token::<Colour>(None), None);
    }

    #[test]
    #[traced_test]
    fn test_unknown_token_is_logged_as_warning() {
        decode_token::<Colour>(Some("green"));
        decode_token::<Colour>(Some("red"));

        logs_assert(|lines: &[&str]| {
            let warnings: Vec<_> = lines.iter().filter(|line| line.contains("WARN")).collect();
            match warnings.as_slice() {
                [line] if line.contains("\"green\"") => Ok(()),
                other => Err(format!("expected one warning for \"green\", got {:?}", other)),
            }
        });
    }

    #[test]
    fn test_known_variants_round_trip_tokens() {
        for colour in Colour::KNOWN {
            assert!(colour.is_recognized());
            assert_eq!(Colour::from_token(colour.as_str()), *colour);
        }
        assert!(!Colour::Unrecognized.is_recognized());
    }

    #[test]
    fn test_serializes_as_token() {
        assert_eq!(serde_json::to_string(&Colour::DarkBlue).unwrap(), "\"dark_blue\"");
        assert_eq!(Colour::DarkBlue.to_string(), "dark_blue");
    }
}
