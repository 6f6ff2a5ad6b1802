#[macro_export]
macro_rules! fmt_err {
    ($obj:ident, $($arg:tt)*) => {{
        Err($crate::prelude::ErrorCode::$obj(format!($($arg)*)))
    }}
}
