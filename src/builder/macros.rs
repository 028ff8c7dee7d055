//! Macros for declaring closed label sets.

/// Declare a closed label enum and implement [`Label`](crate::core::Label)
/// for it.
///
/// Each variant is paired with its display name. The generated type also
/// gets `Display`, case-insensitive `FromStr`, and serde support using the
/// display names.
///
/// # Example
///
/// ```
/// use clapwave::core::Label;
/// use clapwave::label_enum;
///
/// label_enum! {
///     pub enum Weather {
///         Sunny => "Sunny",
///         HeavyRain => "Heavy-Rain",
///     }
/// }
///
/// assert_eq!(Weather::ALL.len(), 2);
/// assert_eq!(Weather::HeavyRain.to_string(), "Heavy-Rain");
/// assert_eq!("heavy-rain".parse::<Weather>().unwrap(), Weather::HeavyRain);
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::Label::name(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::ParseLabelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::Label>::parse_name(s).ok_or_else(|| {
                    $crate::core::ParseLabelError {
                        kind: stringify!($name),
                        input: s.to_string(),
                    }
                })
            }
        }
    };
}
