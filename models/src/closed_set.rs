/// Declares a fieldless enum whose variants map one-to-one onto the exact
/// strings the remote service accepts.
///
/// Generates `ALL`, `as_str`, `Display` and a `Serialize` impl that writes the
/// canonical string. Parsing is left to each type since the matching rules
/// differ (themes are case-sensitive, languages are not).
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in the order the service documents them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical spelling sent on the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}
