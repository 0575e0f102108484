/*!
A minimal unit testing harness that reports in the Test Anything Protocol.

Tests are plain functions annotated with `#[bugeye::test]` and listed in
[`test_main!`]. Inside a test, assertion macros such as [`ok!`] and [`is!`]
record numbered results without stopping the test, and [`subtest!`] nests a
group of assertions under a name.

```ignore
#[bugeye::test(plan = 2)]
fn arithmetic() {
    bugeye::is!(1 + 1, 2);
    bugeye::ok!(2 > 1, "two is greater than one");
}

bugeye::test_main!(arithmetic);
```

The compiled program prints a plan line followed by one line per assertion,
indented by the nesting depth, and exits with status `0` when every test
passed, `3` when some test failed, and `2` when it was invoked incorrectly.
!*/

#![doc(html_root_url = "https://docs.rs/bugeye/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented)]

#[macro_use]
mod macros;
mod assertion;
mod cli;
mod error;
mod execution;
mod harness;
mod location;
mod printer;
mod registry;
mod stringify;
mod termination;

pub use crate::{
    assertion::{Assertion, Directive},
    cli::{resolve, Args, ColorConfig, ExitStatus, Session},
    error::{BailOut, ConfigError},
    execution::EndResult,
    location::Location,
    printer::Printer,
    registry::{Registration, Registry, Test, TestFn},
    stringify::{stringify, Stringify},
    termination::Termination,
};

/// Run the tests declared by `tests` as the whole test program.
///
/// The process exits once the run completes.
pub use crate::cli::test_main;

/// Generate a single test case.
///
/// The name of the test defaults to the name of the function, and can be
/// changed with `#[bugeye::test(name = "...")]`. The number of assertions
/// the test is expected to make is declared with `plan = N`.
pub use bugeye_macros::test;

hidden_item! {
    /// Re-exported items for #[test] and the assertion macros
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            __test_fn as test_fn,
            harness::{bail_out, diag, fail, is, isnt, ok, pass, skip, subtest, TodoGuard},
            location::Location,
            registry::TestCase,
            stringify::{ViaDebug, ViaDisplay, ViaStringify, ViaTypeName, Wrap},
            termination::Termination,
        };
        pub use std::{file, format_args, line, option::Option, stringify};
    }
}
