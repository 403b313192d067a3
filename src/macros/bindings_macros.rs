// ctxlog/src/macros/bindings_macros.rs
//
// The bindings! macro for building bound-field maps.

/// Create a [`Bindings`](crate::engine::Bindings) map.
///
/// Values are anything `serde_json::Value` converts from, including
/// `serde_json::json!` expressions.
///
/// # Examples
///
/// ```
/// use ctxlog::bindings;
///
/// let context = bindings! {
///     "request_id" => "abc-123",
///     "attempt" => 2,
///     "cached" => false,
/// };
///
/// // An empty map
/// let empty = bindings! {};
/// ```
#[macro_export]
macro_rules! bindings {
    {} => {
        $crate::engine::Bindings::new()
    };

    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::engine::Bindings::new();
            $(
                map.insert($key.to_string(), $crate::engine::Value::from($value));
            )+
            map
        }
    };
}
