//! Call-site capture for records.
//!
//! [`error_record!`](crate::error_record) fills in the line, the enclosing
//! function, and the file name the way a C caller would with `__LINE__`,
//! `__func__`, and `__FILE_NAME__`.

/// Build an [`ErrorRecord`](crate::ErrorRecord) located at the call site.
///
/// The message takes `format!` arguments. Evaluates to
/// `Result<ErrorRecord, RecordError>`.
///
/// ```text
/// let record = error_record!(ErrorKind::IoFailure, "cannot open {}", path.display())?;
/// ```
#[macro_export]
macro_rules! error_record {
    ($code:expr, $($arg:tt)+) => {
        $crate::ErrorRecord::new(
            $code,
            line!(),
            $crate::function_name!(),
            $crate::file_name(file!()),
            &format!($($arg)+),
        )
    };
}

/// Name of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::trim_function_path(type_name_of(__here))
    }};
}

/// Reduce `krate::module::func::__here` to `func`.
///
/// Closure frames (`{{closure}}`) are skipped so a record built inside a
/// closure names the function that owns it.
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut rest = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = rest.strip_suffix("::{{closure}}") {
        rest = outer;
    }
    rest.rsplit("::").next().unwrap_or(rest)
}

/// Final component of a `file!()` path, on either separator.
pub fn file_name(path: &'static str) -> &'static str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
