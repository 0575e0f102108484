macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Record an assertion that passes when the expression is `true`.
///
/// An optional description can be given in the `format!` syntax.
/// Returns the outcome of the expression.
///
/// ```ignore
/// bugeye::ok!(stack.is_empty());
/// bugeye::ok!(n > 2, "{} is greater than 2", n);
/// ```
#[macro_export]
macro_rules! ok {
    ($expr:expr $(,)?) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::ok(__bugeye::location!(), $expr, __bugeye::Option::None)
    }};
    ($expr:expr, $($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::ok(
            __bugeye::location!(),
            $expr,
            __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
        )
    }};
}

/// Record an assertion that the two values are equal.
///
/// On failure, both values are printed as diagnostics.
/// Returns whether the values are equal.
#[macro_export]
macro_rules! is {
    ($got:expr, $expected:expr $(,)?) => {{
        use $crate::_test_reexports as __bugeye;
        match (&$got, &$expected) {
            (got, expected) => __bugeye::is(
                __bugeye::location!(),
                *got == *expected,
                || $crate::stringify_value!(*got),
                || $crate::stringify_value!(*expected),
                __bugeye::Option::None,
            ),
        }
    }};
    ($got:expr, $expected:expr, $($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        match (&$got, &$expected) {
            (got, expected) => __bugeye::is(
                __bugeye::location!(),
                *got == *expected,
                || $crate::stringify_value!(*got),
                || $crate::stringify_value!(*expected),
                __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
            ),
        }
    }};
}

/// Record an assertion that the two values are not equal.
///
/// On failure, both values are printed as diagnostics.
/// Returns whether the values differ.
#[macro_export]
macro_rules! isnt {
    ($got:expr, $unexpected:expr $(,)?) => {{
        use $crate::_test_reexports as __bugeye;
        match (&$got, &$unexpected) {
            (got, unexpected) => __bugeye::isnt(
                __bugeye::location!(),
                *got != *unexpected,
                || $crate::stringify_value!(*got),
                || $crate::stringify_value!(*unexpected),
                __bugeye::Option::None,
            ),
        }
    }};
    ($got:expr, $unexpected:expr, $($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        match (&$got, &$unexpected) {
            (got, unexpected) => __bugeye::isnt(
                __bugeye::location!(),
                *got != *unexpected,
                || $crate::stringify_value!(*got),
                || $crate::stringify_value!(*unexpected),
                __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
            ),
        }
    }};
}

/// Record a passing assertion.
#[macro_export]
macro_rules! pass {
    () => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::pass(__bugeye::location!(), __bugeye::Option::None)
    }};
    ($($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::pass(
            __bugeye::location!(),
            __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
        )
    }};
}

/// Record a failing assertion.
///
/// Unlike a panic, the test keeps running after a failed assertion.
#[macro_export]
macro_rules! fail {
    () => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::fail(__bugeye::location!(), __bugeye::Option::None)
    }};
    ($($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::fail(
            __bugeye::location!(),
            __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
        )
    }};
}

/// Print a diagnostic message in the current test.
///
/// Each line of the message becomes a separate comment line.
#[macro_export]
macro_rules! diag {
    ($($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::diag(__bugeye::format_args!($($arg)+))
    }};
}

/// Skip a block of assertions when a condition holds.
///
/// When the condition is `true` the block is not run at all, and `how_many`
/// passing assertions marked with `# skip <reason>` are recorded instead.
///
/// ```ignore
/// bugeye::skip!(cfg!(windows), 2, "no symlinks here", {
///     bugeye::ok!(link.exists());
///     bugeye::ok!(link.is_symlink());
/// });
/// ```
#[macro_export]
macro_rules! skip {
    ($cond:expr, $how_many:expr, $reason:expr, $body:block) => {{
        use $crate::_test_reexports as __bugeye;
        if $cond {
            __bugeye::skip(
                __bugeye::location!(),
                $how_many,
                __bugeye::format_args!("{}", $reason),
            );
        } else {
            let _ = $body;
        }
    }};
}

/// Run a block whose assertions are expected to fail for now.
///
/// Every assertion in the block is reported as passing with a
/// `# TODO <reason>` annotation, and does not fail the test.
#[macro_export]
macro_rules! todo {
    ($reason:expr, $body:block) => {{
        use $crate::_test_reexports as __bugeye;
        let _todo = __bugeye::TodoGuard::start(__bugeye::format_args!("{}", $reason));
        $body
    }};
}

/// Stop the whole test run immediately.
#[macro_export]
macro_rules! bail_out {
    () => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::bail_out(__bugeye::location!(), __bugeye::Option::None)
    }};
    ($($arg:tt)+) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::bail_out(
            __bugeye::location!(),
            __bugeye::Option::Some(__bugeye::format_args!($($arg)+)),
        )
    }};
}

/// Run a block as a named sub-test of the current test.
///
/// The sub-test gets its own numbering and plan, and its overall result is
/// recorded as a single assertion of the enclosing test.
/// Returns whether the sub-test passed.
///
/// ```ignore
/// bugeye::subtest!("parsing", plan = 2, {
///     bugeye::is!(parse("1"), Ok(1));
///     bugeye::ok!(parse("x").is_err());
/// });
/// ```
#[macro_export]
macro_rules! subtest {
    ($name:expr, plan = $plan:expr, $body:block) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::subtest(&$name, __bugeye::Option::Some($plan), || $body)
    }};
    ($name:expr, $body:block) => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::subtest(&$name, __bugeye::Option::None, || $body)
    }};
}

/// Convert a value into the text used in failure diagnostics.
///
/// Values implementing [`Stringify`](crate::Stringify) use it; otherwise
/// `Display` is used, then `Debug`, and finally the name of the type.
#[macro_export]
macro_rules! stringify_value {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::_test_reexports::{
            ViaDebug as _, ViaDisplay as _, ViaStringify as _, ViaTypeName as _,
        };
        (&&&&$crate::_test_reexports::Wrap(&$value)).bugeye_stringify()
    }};
}

/// Define the `main` function running the listed tests.
///
/// Each entry is either a `#[bugeye::test]` function or a plain function
/// declaring tests into the registry.
///
/// ```ignore
/// #[bugeye::test]
/// fn addition() {
///     bugeye::is!(1 + 1, 2);
/// }
///
/// fn generated(registry: &mut bugeye::Registry) -> Result<(), bugeye::ConfigError> {
///     registry.declare("generated", None, || bugeye::pass!())?;
///     Ok(())
/// }
///
/// bugeye::test_main!(addition, generated);
/// ```
#[macro_export]
macro_rules! test_main {
    ($($test:path),* $(,)?) => {
        fn main() {
            $crate::test_main(&[$(&$test),*])
        }
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __bugeye;
        __bugeye::Location {
            file: __bugeye::file!(),
            line: __bugeye::line!(),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_fn {
    ($path:path) => {{
        use $crate::_test_reexports as __bugeye;
        || __bugeye::Termination::into_result($path())
    }};
}
