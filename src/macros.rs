//! Macros for declaring lifecycle phase enums.

/// Declare a serde-enabled enum together with its `State` implementation.
///
/// Extra attributes (additional derives, `#[serde(..)]`) are emitted after
/// the built-in derive so serde helper attributes resolve.
///
/// # Example
///
/// ```
/// use thulla::state_enum;
/// use thulla::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum LobbyPhase {
///         Waiting,
///         Seated,
///         Closed,
///     }
///     final: [Closed]
/// }
///
/// assert_eq!(LobbyPhase::Seated.name(), "Seated");
/// assert!(LobbyPhase::Closed.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
