//! Two-level administrative division: regions and their subregions.
//!
//! Both levels are opaque labels as delivered by the geography provider.

use std::{borrow::Borrow, fmt};

macro_rules! label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl From<String> for $name {
            fn from(from: String) -> Self {
                Self(from)
            }
        }

        impl From<&str> for $name {
            fn from(from: &str) -> Self {
                Self(from.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

label!(
    /// Top-level administrative region (e.g. a federal state abbreviation).
    Region
);

label!(
    /// Administrative unit below a [`Region`].
    Subregion
);
