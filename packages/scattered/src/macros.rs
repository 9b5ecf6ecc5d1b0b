//! Internal check macros.

/// Fails fast when a cross-column invariant is broken.
///
/// Active in debug builds and with the `instrumented` feature. In optimized
/// builds without the feature the condition is not evaluated at all, so a
/// desynchronized column set is undefined container behavior there.
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "instrumented")) && !$cond {
            tracing::error!($($arg)+);
            panic!($($arg)+);
        }
    };
}

pub(crate) use invariant;
