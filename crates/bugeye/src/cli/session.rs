use crate::{
    cli::{args::Args, exit_status::ExitStatus, selection},
    error::{Abort, ConfigError},
    harness::{self, Harness},
    printer::Printer,
    registry::{register_all, Registration, Registry, Test},
};

/// A run of the tests declared by a test program.
#[derive(Debug)]
pub struct Session {
    args: Args,
    registry: Registry,
    printer: Printer,
}

impl Session {
    /// Set up a session from the command line of the current process.
    ///
    /// The process is terminated if the command line or the test declarations
    /// are invalid, or after printing the usage.
    pub fn from_env(tests: &[&dyn Registration]) -> Self {
        let args = match Args::from_env() {
            Ok(Some(args)) => args,
            Ok(None) => ExitStatus::OK.exit(),
            Err(err) => configuration_error(&err).exit(),
        };
        let printer = Printer::stdout(args.color);
        Self::new(args, tests, printer).unwrap_or_else(|err| configuration_error(&err).exit())
    }

    /// Set up a session, declaring all of `tests` into a fresh registry.
    pub fn new(
        args: Args,
        tests: &[&dyn Registration],
        printer: Printer,
    ) -> Result<Self, ConfigError> {
        let registry = register_all(tests)?;
        log::debug!("{} tests declared", registry.len());
        Ok(Self {
            args,
            registry,
            printer,
        })
    }

    /// Run the selected tests and report the status the process should exit with.
    pub fn run(self) -> ExitStatus {
        let Self {
            args,
            registry,
            mut printer,
        } = self;

        if args.list {
            printer.list(registry.all().map(Test::name));
            return ExitStatus::OK;
        }

        let selected = match selection::resolve(&args, &registry) {
            Ok(selected) => selected,
            Err(err) => return configuration_error(&err),
        };
        if selected.is_empty() {
            log::info!("no tests selected");
            return ExitStatus::OK;
        }

        let tests: Vec<&Test> = registry
            .all()
            .filter(|test| selected.contains(test.name()))
            .collect();
        printer.plan(0, tests.len());

        harness::scope(Harness::new(printer), || run_tests(&tests))
    }
}

fn run_tests(tests: &[&Test]) -> ExitStatus {
    let mut results = Vec::with_capacity(tests.len());
    for (i, test) in tests.iter().enumerate() {
        log::info!("running '{}'", test.name());
        match harness::run(test.name(), test.plan(), || (test.body())()) {
            Ok(end_result) => {
                let ok = end_result.is_ok();
                let _ = harness::with(|h| h.printer().test_result(i + 1, ok, test.name()));
                results.push((test.name().to_owned(), ok));
            }
            Err(Abort::BailOut(bail_out)) => {
                let _ = harness::with(|h| h.printer().bail_out(&bail_out));
                return ExitStatus::TESTS_FAILED;
            }
            Err(Abort::Config(err)) => return configuration_error(&err),
        }
    }

    let _ = harness::with(|h| h.printer().summary(&results));

    let failed = results.iter().filter(|(_, ok)| !ok).count();
    if failed > 0 {
        log::info!("{} of {} tests failed", failed, results.len());
        ExitStatus::TESTS_FAILED
    } else {
        ExitStatus::OK
    }
}

pub(crate) fn configuration_error(err: &ConfigError) -> ExitStatus {
    log::error!("configuration error: {:?}", err);
    eprintln!("{}", err);
    ExitStatus::CONFIGURATION
}

/// Run the tests declared by `tests` as the whole test program.
pub fn test_main(tests: &[&dyn Registration]) -> ! {
    Session::from_env(tests).run().exit()
}
