//! Macros for declaring machine configurations inline.

/// Declare a [`MachineConfig`](crate::MachineConfig) as a literal.
///
/// Each entry names a state and its transition table; states that only
/// appear as destinations still need an entry (possibly empty). Yields
/// `Result<MachineConfig, BuildError>`, exactly as the underlying
/// [`ConfigBuilder`](crate::builder::ConfigBuilder) does.
///
/// # Example
///
/// ```
/// use retrace::machine_config;
/// use retrace::StateMachine;
///
/// let config = machine_config! {
///     initial: "idle",
///     "idle" => { "go" => "running" },
///     "running" => { "stop" => "idle" },
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "running");
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:literal
        $(,
            $state:literal => { $( $event:literal => $to:literal ),* $(,)? }
        )* $(,)?
    ) => {{
        let mut builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            builder = builder.state($state);
            $(
                builder = builder.transition($state, $event, $to);
            )*
        )*
        builder.build()
    }};
}
