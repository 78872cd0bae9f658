//! Macros for declaring states and tables with little boilerplate.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Debug`,
/// `Serialize` and `Deserialize`. Each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use waypoint::core::State;
/// use waypoint::state_enum;
///
/// state_enum! {
///     pub enum Order {
///         Placed,
///         Shipped,
///         Delivered,
///     }
/// }
///
/// assert_eq!(Order::Shipped.name(), "Shipped");
/// assert_eq!(Order::ALL.len(), 3);
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
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
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

/// Build a [`TransitionTable`](crate::core::TransitionTable) from
/// `state => [successors]` rows.
///
/// Expands to a [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder)
/// chain and evaluates to its `Result<TransitionTable<_>, BuildError>`.
///
/// # Example
///
/// ```
/// use waypoint::{state_enum, transition_table};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// let table = transition_table! {
///     Light::Red => [Light::Green],
///     Light::Green => [Light::Yellow],
///     Light::Yellow => [Light::Red],
/// }
/// .unwrap();
///
/// assert!(table.is_allowed(&Light::Yellow, &Light::Red));
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $from:expr => [$($to:expr),* $(,)?]
        ),* $(,)?
    ) => {
        $crate::builder::TransitionTableBuilder::new()
            $(.state($from, [$($to),*]))*
            .build()
    };
}
