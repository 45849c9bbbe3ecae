//! Identifier types for rzp-checkout.
//!
//! This module provides strongly-typed identifiers for gateway orders and
//! payments.
//!
//! # Macro-based ID Types
//!
//! The `gateway_id_type!` macro reduces boilerplate for the gateway-issued
//! identifier types, ensuring consistent implementation of serialization,
//! parsing, and display traits. Gateway ids are opaque strings (for example
//! `order_Nx7K...`, `pay_Nx8R...`); the only invariant enforced locally is
//! that they are non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when constructing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier string was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Macro to define a gateway-issued string identifier type with standard
/// trait implementations.
///
/// This macro generates a newtype wrapper around `String` with
/// implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as string, rejecting the empty string)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`
macro_rules! gateway_id_type {
    ($name:ident, $label:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from a string supplied by the gateway.
            ///
            /// # Errors
            ///
            /// Returns `IdError::Empty` if the string is empty.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(IdError::Empty($label));
                }
                Ok(Self(value))
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

gateway_id_type!(
    OrderId,
    "order id",
    "A gateway order identifier.\n\nIssued by the order-creation backend before the user pays."
);
gateway_id_type!(
    PaymentId,
    "payment id",
    "A gateway payment identifier.\n\nAssigned by the gateway once a payment is attempted."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_round_trips_through_string() {
        let id: OrderId = "order_abc123".parse().unwrap();
        assert_eq!(id.as_str(), "order_abc123");
        assert_eq!(id.to_string(), "order_abc123");
        assert_eq!(String::from(id), "order_abc123");
    }

    #[test]
    fn empty_ids_are_rejected() {
        assert_eq!(OrderId::new(""), Err(IdError::Empty("order id")));
        assert_eq!(PaymentId::new(""), Err(IdError::Empty("payment id")));
    }

    #[test]
    fn empty_id_fails_deserialization() {
        let result: Result<PaymentId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn serde_uses_plain_string_representation() {
        let id = PaymentId::new("pay_xyz").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"pay_xyz\"");
    }
}
