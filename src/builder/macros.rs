//! Macros for declaring state enums.

/// Declare a fieldless enum usable as a state identifier.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`, and
/// implements [`State`](crate::core::State) with each variant's name.
///
/// # Example
///
/// ```
/// use statehooks::core::State;
/// use statehooks::state_enum;
///
/// state_enum! {
///     pub enum Screen {
///         Splash,
///         Menu,
///         Game,
///     }
/// }
///
/// assert_eq!(Screen::Menu.name(), "Menu");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
