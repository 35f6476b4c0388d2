//! Macros for ergonomic configuration construction.

/// Declare a [`Config`](crate::core::Config) inline.
///
/// States and events keep the order they are written in.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "pause" => "idle", "stop" => "stopped" },
///         "stopped" => {},
///     }
/// };
///
/// assert_eq!(config.len(), 3);
/// assert_eq!(config.initial(), "idle");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let states: ::std::vec::Vec<($crate::core::StateId, $crate::core::StateDefinition)> =
            ::std::vec![
                $(
                    (
                        $crate::core::StateId::from($state),
                        $crate::core::StateDefinition::new() $( .on($event, $target) )*,
                    )
                ),*
            ];
        $crate::core::Config::new($initial, states)
    }};
}
