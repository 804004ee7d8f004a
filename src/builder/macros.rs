//! Macros for declaring phase enums.

/// Generate a phase enum and its `State` implementation.
///
/// Variants listed under `awaiting:` report `awaits_operand() == true`.
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug` and the
/// serde traits; further derives can be added as attributes.
///
/// # Example
///
/// ```
/// use reckon::core::State;
/// use reckon::state_enum;
///
/// state_enum! {
///     pub enum EntryPhase {
///         Typing,
///         Waiting,
///     }
///     awaiting: [Waiting]
/// }
///
/// assert_eq!(EntryPhase::Typing.name(), "Typing");
/// assert!(EntryPhase::Waiting.awaits_operand());
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

        $(awaiting: [$($awaiting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn awaits_operand(&self) -> bool {
                match self {
                    $($(Self::$awaiting => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
