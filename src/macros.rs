/// Builds an [`IniMap`](crate::IniMap) document from literal entries.
///
/// Nested `{ ... }` blocks become sections and `[ ... ]` blocks become
/// arrays; everything else goes through `IniValue::from`.
///
/// # Examples
///
/// ```rust
/// use typed_ini::{ini, stringify};
///
/// let doc = ini! {
///     "debug": true,
///     "retries": 3,
///     "db": {
///         "host": "localhost",
///         "port": 5432,
///     },
/// };
///
/// let text = stringify(&doc).unwrap();
/// assert!(text.starts_with("debug = true\n"));
/// ```
#[macro_export]
macro_rules! ini {
    ( $($key:literal : $value:tt),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut doc = $crate::IniMap::new();
        $(
            doc.insert($key.to_string(), $crate::ini_value!($value));
        )*
        doc
    }};
}

/// Builds a single [`IniValue`](crate::IniValue); the value-position
/// helper behind [`ini!`].
#[macro_export]
macro_rules! ini_value {
    (true) => {
        $crate::IniValue::Bool(true)
    };

    (false) => {
        $crate::IniValue::Bool(false)
    };

    ([ $($element:tt),* $(,)? ]) => {
        $crate::IniValue::Array(vec![$($crate::ini_value!($element)),*])
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut section = $crate::IniMap::new();
        $(
            section.insert($key.to_string(), $crate::ini_value!($value));
        )*
        $crate::IniValue::Section(section)
    }};

    ($other:expr) => {
        $crate::IniValue::from($other)
    };
}
