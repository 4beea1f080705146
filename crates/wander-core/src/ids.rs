//! Strongly typed string-key wrappers.
//!
//! Point addresses and agent names are caller-supplied strings, so the
//! wrappers hold an immutable boxed string rather than a dense integer
//! index.  All keys are `Clone + Ord + Hash` and implement `Borrow<str>`,
//! so maps keyed by them can be queried with plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed key wrapper around an immutable string.
macro_rules! string_key {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(Box<str>);

        impl $name {
            /// View the key as a plain string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.into())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s.into_boxed_str())
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_key! {
    /// Unique identifier of a graph point.
    pub struct Address;
}

string_key! {
    /// Unique identifier of an agent.
    pub struct AgentName;
}
