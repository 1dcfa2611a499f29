#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual={err}"),
        }
    };
}

#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = sqlactive::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Runs each test function once per store flavor.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite_file {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    super::$f($crate::SetupSqliteFile::new());
                }
            )*
        }

        #[cfg(feature = "sqlite")]
        mod sqlite_memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    super::$f($crate::SetupSqliteMemory);
                }
            )*
        }
    };
}
