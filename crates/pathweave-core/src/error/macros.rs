//! Error macros for pathweave

/// Macro for returning an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invalid_argument(format!($($arg)*)))
    };
}

/// Macro for returning an unsupported value error
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::GraphError::unsupported(
            $context, $value, $supported,
        ))
    };
}
