//! Closed string enumerations ("Select" fields).
//!
//! The system of record transmits enumerated fields as their display strings
//! (`"To Deliver and Bill"`, `"Material Transfer"`). [`select!`](crate::select)
//! generates a Rust enum whose serde form is exactly that string set, so
//! decoding rejects anything outside it and matching stays exhaustive.

/// A closed set of wire strings.
pub trait Select: Copy + Eq + core::fmt::Debug + 'static {
    /// Every accepted wire string, in declaration order.
    const OPTIONS: &'static [&'static str];

    /// Wire string of this variant.
    fn as_str(&self) -> &'static str;
}

/// Declare a [`Select`] enum.
///
/// ```ignore
/// select! {
///     /// Customer classification.
///     pub enum CustomerType {
///         Company => "Company",
///         Individual => "Individual",
///     }
/// }
/// ```
///
/// The calling crate must depend on `serde` with the `derive` feature.
#[macro_export]
macro_rules! select {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $crate::Select for $name {
            const OPTIONS: &'static [&'static str] = &[$($wire),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::Select::as_str(self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownOption;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::UnknownOption {
                        value: other.to_string(),
                        allowed: <$name as $crate::Select>::OPTIONS,
                    }),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Select;
    use crate::UnknownOption;

    crate::select! {
        /// Test enumeration with a multi-word option.
        pub enum Stage {
            Open => "Open",
            PendingReview => "Pending Review",
            Done => "Done",
        }
    }

    #[test]
    fn options_follow_declaration_order() {
        assert_eq!(Stage::OPTIONS, &["Open", "Pending Review", "Done"]);
    }

    #[test]
    fn display_and_from_str_use_wire_strings() {
        assert_eq!(Stage::PendingReview.to_string(), "Pending Review");
        assert_eq!("Pending Review".parse::<Stage>(), Ok(Stage::PendingReview));
    }

    #[test]
    fn unknown_option_reports_allowed_set() {
        let err = "pending review".parse::<Stage>().unwrap_err();
        assert_eq!(
            err,
            UnknownOption {
                value: "pending review".to_string(),
                allowed: Stage::OPTIONS,
            }
        );
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&Stage::PendingReview).unwrap();
        assert_eq!(json, "\"Pending Review\"");

        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::PendingReview);
        assert!(serde_json::from_str::<Stage>("\"Closed\"").is_err());
    }
}
