//! internal macros

/// extracts the error of a result in a function returning `Result<T, E>`
///
/// returns `Ok(r)` to terminate the control flow
///
macro_rules! try_err {
    ($ret:expr) => {
        match $ret {
            Ok(r) => return Ok(r),
            Err(e) => e,
        }
    };
}

/// extracts the value of a option in a function returning `Result<Option<T>, E>`
///
/// returns `Ok(None)` to terminate the control flow
///
macro_rules! try_some {
    ($opt:expr) => {
        match $opt {
            Some(r) => r,
            None => return Ok(None),
        }
    };
}

/// asserts a predicate is true in a function returning `bool`
///
/// returns `false` to terminate the control flow
///
macro_rules! bool_try {
    ($pred:expr) => {
        if !$pred {
            return false;
        }
    };
}

/// extracts the value of a option in a function returning `bool`
///
/// returns `false` to terminate the control flow
///
macro_rules! bool_try_some {
    ($opt:expr) => {
        match $opt {
            Some(r) => r,
            None => return false,
        }
    };
}

/// extracts the ok value of a result in a function returning `Result<T, E>` where E: From<S3Error>
///
/// returns an wrapped internal error to terminate the control flow
///
macro_rules! trace_try {
    ($ret:expr) => {
        match $ret {
            Ok(r) => r,
            Err(e) => return Err(internal_error!(e).into()),
        }
    };
}

/// Create a `S3Error` with code and message
macro_rules! code_error {
    ($code:ident, $msg:expr $(, $source:expr)?) => {
        code_error!(code = $crate::errors::S3ErrorCode::$code, $msg $(, $source)?)
    };
    (code = $code:expr, $msg:expr $(, $source:expr)?) => {{
        let code = $code;
        let err = $crate::errors::S3Error::from_code(code).message($msg);

        $(let err = err.source($source);)?

        let err = err.finish();

        tracing::debug!(
            "generated s3 error: {}", err
        );

        err
    }};
}

/// Create a `NotSupported` error
macro_rules! not_supported {
    ($msg:expr) => {{
        code_error!(NotSupported, $msg)
    }};
}

/// Create a `InvalidRequest` error
macro_rules! invalid_request {
    ($msg:expr $(, $source:expr)?) => {{
        code_error!(InvalidRequest, $msg $(, $source)?)
    }};
}

/// Create an internal error
macro_rules! internal_error {
    ($e:expr) => {{
        let code = $crate::errors::S3ErrorCode::InternalError;
        let err = $crate::errors::S3Error::from_code(code)
            .message("We encountered an internal error. Please try again.")
            .source($e)
            .capture_backtrace()
            .capture_span_trace()
            .finish();

        tracing::error!("generated internal error: {}", err);

        err
    }};
}

/// Assigns optional fields from a header map or a query-string struct onto an
/// operation input, skipping absent ones.
///
/// ```ignore
/// assign_opt!(from req to input headers [
///     &*X_AMZ_ACL => acl,
/// ]);
/// assign_opt!(from query to input fields [
///     version_id,
/// ]);
/// ```
macro_rules! assign_opt {
    (from $src:ident to $dst:ident headers [$($name:expr => $f:ident,)*]) => {
        $(
            if let Some(s) = $crate::utils::RequestExt::get_header_str($src, $name)
                .map_err(|e| -> $crate::BoxStdError { e.into() })?
            {
                $dst.$f = Some(s.into());
            }
        )*
    };

    (from $src:ident to $dst:ident fields [$($f:ident,)*]) => {
        $(
            if $src.$f.is_some() {
                $dst.$f = $src.$f;
            }
        )*
    };
}
