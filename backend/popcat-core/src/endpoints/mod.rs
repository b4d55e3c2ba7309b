//! The endpoint catalogue.
//!
//! Each submodule adds its operations to [`PopcatClient`](crate::PopcatClient).
//! Endpoints that share one argument shape are also listed as a group enum so
//! callers (the CLI in particular) can pick one by name; the named methods are
//! thin wrappers over the group method.

/// Declares a group of endpoints sharing one argument shape.
///
/// Each variant maps to its path. The generated `FromStr` accepts the path
/// without its leading slash.
macro_rules! endpoint_group {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $path:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn path(&self) -> &'static str {
                match self {
                    $($name::$variant => $path),+
                }
            }

            /// Path without the leading slash.
            pub fn name(&self) -> &'static str {
                self.path().trim_start_matches('/')
            }

            pub fn names() -> Vec<&'static str> {
                $name::ALL.iter().map($name::name).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::PopcatError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|endpoint| endpoint.name() == value)
                    .ok_or_else(|| {
                        $crate::error::PopcatError::invalid_input(
                            stringify!($name),
                            $crate::error::InputFailure::UnknownEndpoint(value.to_string()),
                        )
                    })
            }
        }
    };
}

pub mod data;
pub mod image;
pub mod meme;
pub mod random;
pub mod text;
pub mod utilities;

pub use data::DataLookup;
pub use image::ImageFilter;
pub use meme::{PairMeme, TextMeme};
pub use random::{RandomData, RandomText};
pub use text::TextTransform;
