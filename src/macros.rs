//! Logging shims over the optional `tracing` feature.
//!
//! With the feature disabled these expand to nothing, so call sites carry no
//! `cfg` noise and no runtime cost.

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

pub(crate) use debug_event;
pub(crate) use trace_event;
