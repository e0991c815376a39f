//! Error macros for algoviz

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::VizError::invalid_value($context, $value))
    };
}

/// Macro for rejecting values outside an inclusive range
#[macro_export]
macro_rules! ensure_range {
    ($context:expr, $value:expr, $range:expr) => {{
        let range = $range;
        let value = $value as u64;
        if !range.contains(&value) {
            return Err($crate::error::VizError::out_of_range(
                $context,
                value,
                *range.start(),
                *range.end(),
            ));
        }
    }};
}
