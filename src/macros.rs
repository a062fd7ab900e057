//! Logging macros used throughout the core.
//!
//! There's no `log`/`tracing` dependency here: these are thin,
//! feature-gated `println!` wrappers that compile away to nothing in a
//! normal release build, so the hot CPU/PPU loops pay nothing for them.

#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debugln {
    ($($rest:tt)*) => {
        std::println!($($rest)*)
    }
}

#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debugln {
    ($($rest:tt)*) => {
        ()
    };
}

#[cfg(any(feature = "debug", feature = "cpulog"))]
#[macro_export]
macro_rules! infoln {
    ($($rest:tt)*) => {
        std::println!($($rest)*)
    }
}

#[cfg(not(any(feature = "debug", feature = "cpulog")))]
#[macro_export]
macro_rules! infoln {
    ($($rest:tt)*) => {
        ()
    };
}

#[macro_export]
macro_rules! warnln {
    ($($rest:tt)*) => {
        std::eprintln!($($rest)*)
    }
}

/// Panics with a message prefixed the same way across the whole crate,
/// reserved for states that indicate a bug in the core itself (an
/// unreachable match arm, a violated internal invariant) rather than
/// anything a ROM or a frontend could trigger.
#[macro_export]
macro_rules! panic_gb {
    ($($rest:tt)*) => {
        panic!($($rest)*)
    }
}

/// Runs an assertion only when the `pedantic` feature is enabled, for
/// cross-checks that are too expensive to pay for on every instruction
/// in a normal build.
#[cfg(feature = "pedantic")]
#[macro_export]
macro_rules! assert_pedantic_gb {
    ($($rest:tt)*) => {
        assert!($($rest)*)
    }
}

#[cfg(not(feature = "pedantic"))]
#[macro_export]
macro_rules! assert_pedantic_gb {
    ($($rest:tt)*) => {
        ()
    };
}
