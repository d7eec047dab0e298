use thiserror::Error;

/// Errors raised by the screen layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Presentation state (the colour palette) may only be installed once.
    #[error("settings are already configured")]
    AlreadyConfigured,

    /// Ctrl-C while a blocking dialog was waiting for an answer.
    #[error("interrupted by user")]
    Interrupted,

    #[error("{screen} screen requires the `{arg}` argument")]
    MissingArgument {
        screen: &'static str,
        arg: &'static str,
    },

    #[error("no screen registered for `{0}`")]
    Unregistered(&'static str),
}

impl UiError {
    /// True when `err` is (or wraps) [`UiError::Interrupted`].
    pub fn is_interrupt(err: &anyhow::Error) -> bool {
        matches!(err.downcast_ref::<UiError>(), Some(UiError::Interrupted))
    }
}
