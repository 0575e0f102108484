//! The execution stack and the assertion protocol.

use crate::{
    assertion::{Assertion, Directive},
    cli::{configuration_error, ColorConfig, ExitStatus},
    error::{Abort, BailOut, ConfigError},
    execution::{EndResult, Execution},
    location::Location,
    printer::Printer,
    termination::Termination,
};
use maybe_unwind::{maybe_unwind, Unwind};
use std::{
    cell::{Cell, RefCell},
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Once,
};

/// The stack of running executions together with the protocol sink.
#[derive(Debug)]
pub struct Harness {
    stack: Vec<Execution>,
    printer: Printer,
}

impl Harness {
    #[allow(missing_docs)]
    pub fn new(printer: Printer) -> Self {
        Self {
            stack: vec![],
            printer,
        }
    }

    /// Return the current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn printer(&mut self) -> &mut Printer {
        &mut self.printer
    }

    fn current(&mut self) -> Result<&mut Execution, ConfigError> {
        self.stack.last_mut().ok_or(ConfigError::NoCurrentExecution)
    }

    /// Push a new execution and print its plan, if declared.
    pub(crate) fn enter(&mut self, name: &str, plan: Option<usize>) {
        let mut execution = Execution::new(name, plan);
        execution.start();
        self.stack.push(execution);
        log::debug!("start: {} (depth {})", name, self.depth());
        if let Some(plan) = plan {
            let depth = self.depth();
            self.printer.plan(depth, plan);
        }
    }

    /// Finalize and pop the current execution.
    pub(crate) fn leave(&mut self, error: Option<String>) -> Result<EndResult, ConfigError> {
        let depth = self.depth();
        let execution = self.current()?;

        if let Some(ref message) = error {
            execution.mark_exception();
            log::warn!("{}: caught exception: {}", execution.name(), message);
        }
        let mismatch = execution.finish();
        let actual = execution.assertions().len();
        let end_result = execution.end_result();
        let unplanned = execution.plan().is_none();

        if let Some(ref message) = error {
            self.printer.caught_exception(depth, message);
        }
        if let Some(planned) = mismatch {
            log::warn!("planned {} assertions but {} were run", planned, actual);
            self.printer.plan_mismatch(depth, planned, actual);
        }
        if unplanned && end_result != EndResult::Exception {
            self.printer.plan(depth, actual);
        }

        if let Some(execution) = self.stack.pop() {
            log::debug!("end: {} ({})", execution.name(), end_result);
        }
        Ok(end_result)
    }

    /// Pop the current execution without reporting anything.
    pub(crate) fn abandon(&mut self) {
        if let Some(execution) = self.stack.pop() {
            log::debug!("abandoned: {}", execution.name());
        }
    }

    /// Record an assertion in the current execution and print it.
    pub fn push(&mut self, assertion: Assertion) -> Result<&Assertion, ConfigError> {
        let depth = self.depth();
        let Self { stack, printer } = self;
        let execution = stack.last_mut().ok_or(ConfigError::NoCurrentExecution)?;
        let assertion = execution.record(assertion);
        if assertion.directive() == Directive::Todo && assertion.raw_outcome() {
            log::info!(
                "todo assertion {} passed unexpectedly: {}",
                assertion.number(),
                assertion.description()
            );
        }
        printer.assertion(depth, assertion);
        Ok(assertion)
    }

    /// Print a diagnostic message at the current depth.
    pub fn diag(&mut self, message: &str) {
        let depth = self.depth();
        self.printer.diag(depth, message);
    }

    /// Record `how_many` skipped assertions in place of the guarded checks.
    pub fn skip(
        &mut self,
        location: Location,
        how_many: usize,
        reason: &str,
    ) -> Result<(), ConfigError> {
        self.current()?
            .push_directive(Directive::Skip, reason.to_owned());
        let mut result = Ok(());
        for _ in 0..how_many {
            if let Err(err) = self.push(Assertion::new(true, reason, Some(location))) {
                result = Err(err);
                break;
            }
        }
        self.current()?.pop_directive();
        result
    }

    /// Mark every assertion recorded until [`todo_stop`](Self::todo_stop) as todo.
    pub fn todo_start(&mut self, reason: &str) -> Result<(), ConfigError> {
        self.current()?
            .push_directive(Directive::Todo, reason.to_owned());
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn todo_stop(&mut self) -> Result<(), ConfigError> {
        self.current()?.pop_directive();
        Ok(())
    }
}

// ==== TLS ====

thread_local! {
    static CURRENT: RefCell<Option<Harness>> = RefCell::new(None);
    static BOUNDARIES: Cell<usize> = Cell::new(0);
    static PENDING_ABORT: RefCell<Option<Abort>> = RefCell::new(None);
}

struct Uninstall(Option<Harness>);

impl Drop for Uninstall {
    fn drop(&mut self) {
        let prev = CURRENT
            .try_with(|tls| tls.try_borrow_mut().ok().and_then(|mut tls| tls.take()))
            .ok()
            .flatten();
        if let Some(prev) = prev {
            log::trace!("uninstall harness (depth {})", prev.depth());
        }
        if let Some(outer) = self.0.take() {
            let _ = CURRENT.try_with(|tls| tls.borrow_mut().replace(outer));
        }
    }
}

/// Install `harness` on the current thread while running `f`.
pub(crate) fn scope<F, R>(harness: Harness, f: F) -> R
where
    F: FnOnce() -> R,
{
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(maybe_unwind::set_hook);

    let outer = CURRENT.with(|tls| tls.borrow_mut().replace(harness));
    let _guard = Uninstall(outer);
    f()
}

/// Run `f` against the harness installed on the current thread.
pub(crate) fn with<F, R>(f: F) -> Result<R, ConfigError>
where
    F: FnOnce(&mut Harness) -> R,
{
    CURRENT.with(|tls| {
        let mut tls = tls
            .try_borrow_mut()
            .map_err(|_| ConfigError::NoCurrentExecution)?;
        let harness = tls.as_mut().ok_or(ConfigError::NoCurrentExecution)?;
        Ok(f(harness))
    })
}

// ==== execution boundary ====

/// Marks that a `run` is on the stack of the current thread.
struct Boundary(());

impl Boundary {
    fn enter() -> Self {
        BOUNDARIES.with(|count| count.set(count.get() + 1));
        Boundary(())
    }

    fn is_active() -> bool {
        BOUNDARIES.try_with(Cell::get).unwrap_or(0) > 0
    }
}

impl Drop for Boundary {
    fn drop(&mut self) {
        let _ = BOUNDARIES.try_with(|count| count.set(count.get().saturating_sub(1)));
    }
}

/// Cut the run short.
///
/// Inside a body the abort is stashed and the stack unwinds to the innermost
/// `run`. With no body to unwind out of, the process terminates here.
pub(crate) fn escalate(abort: Abort) -> ! {
    if Boundary::is_active() {
        let _ = PENDING_ABORT.try_with(|pending| pending.borrow_mut().replace(abort));
        panic::resume_unwind(Box::new(()));
    }

    let status = match abort {
        Abort::BailOut(bail_out) => {
            if with(|h| h.printer().bail_out(&bail_out)).is_err() {
                Printer::stdout(ColorConfig::Auto).bail_out(&bail_out);
            }
            ExitStatus::TESTS_FAILED
        }
        Abort::Config(err) => configuration_error(&err),
    };
    status.exit()
}

fn unwind_message(unwind: &Unwind) -> String {
    match unwind.location() {
        Some(location) => format!(
            "{} at {}:{}:{}",
            unwind.payload_str(),
            location.file(),
            location.line(),
            location.column()
        ),
        None => unwind.payload_str().to_owned(),
    }
}

/// Run a body as a new execution nested in the current one.
///
/// Unexpected errors and panics are reported and recorded as an exception.
/// A bail-out or a configuration error unwinds through here and is returned
/// as `Err` after popping the execution.
pub(crate) fn run<F, T>(name: &str, plan: Option<usize>, body: F) -> Result<EndResult, Abort>
where
    F: FnOnce() -> T,
    T: Termination,
{
    with(|h| h.enter(name, plan)).map_err(Abort::Config)?;

    let result = {
        let _boundary = Boundary::enter();
        maybe_unwind(AssertUnwindSafe(|| body().into_result()))
    };
    if let Some(abort) = PENDING_ABORT.with(|pending| pending.borrow_mut().take()) {
        let _ = with(Harness::abandon);
        return Err(abort);
    }

    let error = match result {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(format!("{:#}", err)),
        Err(unwind) => Some(unwind_message(&unwind)),
    };

    with(|h| h.leave(error))
        .and_then(|res| res)
        .map_err(Abort::Config)
}

// ==== operations used by the assertion macros ====

fn record(assertion: Assertion) -> bool {
    match with(|h| h.push(assertion).map(Assertion::is_ok)) {
        Ok(Ok(ok)) => ok,
        Ok(Err(err)) | Err(err) => escalate(Abort::Config(err)),
    }
}

fn describe(description: Option<fmt::Arguments<'_>>) -> String {
    description.map(|args| args.to_string()).unwrap_or_default()
}

#[doc(hidden)] // private API
pub fn ok(location: Location, expr: bool, description: Option<fmt::Arguments<'_>>) -> bool {
    record(Assertion::new(expr, describe(description), Some(location)));
    expr
}

#[doc(hidden)] // private API
pub fn pass(location: Location, description: Option<fmt::Arguments<'_>>) {
    record(Assertion::new(true, describe(description), Some(location)));
}

#[doc(hidden)] // private API
pub fn fail(location: Location, description: Option<fmt::Arguments<'_>>) {
    record(Assertion::new(false, describe(description), Some(location)));
}

#[doc(hidden)] // private API
pub fn is(
    location: Location,
    ok: bool,
    got: impl FnOnce() -> String,
    expected: impl FnOnce() -> String,
    description: Option<fmt::Arguments<'_>>,
) -> bool {
    record(Assertion::new(ok, describe(description), Some(location)));
    if !ok {
        diag(format_args!("Got:      {}", got()));
        diag(format_args!("Expected: {}", expected()));
    }
    ok
}

#[doc(hidden)] // private API
pub fn isnt(
    location: Location,
    ok: bool,
    got: impl FnOnce() -> String,
    unexpected: impl FnOnce() -> String,
    description: Option<fmt::Arguments<'_>>,
) -> bool {
    record(Assertion::new(ok, describe(description), Some(location)));
    if !ok {
        diag(format_args!("Got:        {}", got()));
        diag(format_args!("Unexpected: {}", unexpected()));
    }
    ok
}

#[doc(hidden)] // private API
pub fn diag(message: fmt::Arguments<'_>) {
    let message = message.to_string();
    if let Err(err) = with(|h| h.diag(&message)) {
        escalate(Abort::Config(err));
    }
}

#[doc(hidden)] // private API
pub fn skip(location: Location, how_many: usize, reason: fmt::Arguments<'_>) {
    let reason = reason.to_string();
    match with(|h| h.skip(location, how_many, &reason)) {
        Ok(Ok(())) => (),
        Ok(Err(err)) | Err(err) => escalate(Abort::Config(err)),
    }
}

#[doc(hidden)] // private API
pub fn bail_out(location: Location, message: Option<fmt::Arguments<'_>>) {
    let message = describe(message);
    log::error!("bail out at {}: {}", location, message);
    escalate(Abort::BailOut(BailOut { message, location }))
}

/// A scope in which every assertion is reported as todo.
#[doc(hidden)] // private API
#[must_use]
pub struct TodoGuard(());

impl TodoGuard {
    #[doc(hidden)] // private API
    pub fn start(reason: fmt::Arguments<'_>) -> Self {
        let reason = reason.to_string();
        match with(|h| h.todo_start(&reason)) {
            Ok(Ok(())) => TodoGuard(()),
            Ok(Err(err)) | Err(err) => escalate(Abort::Config(err)),
        }
    }
}

impl Drop for TodoGuard {
    fn drop(&mut self) {
        let _ = with(Harness::todo_stop);
    }
}

/// Run a sub-test nested in the current execution.
///
/// The overall result of the sub-test is recorded as a single assertion in
/// the parent, described by the sub-test's name.
pub fn subtest<F, T>(name: &str, plan: Option<usize>, body: F) -> bool
where
    F: FnOnce() -> T,
    T: Termination,
{
    match run(name, plan, body) {
        Ok(end_result) => {
            let ok = end_result.is_ok();
            record(Assertion::new(ok, name, None));
            ok
        }
        Err(abort) => escalate(abort),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::testing::Capture;

    fn run_top<F>(plan: Option<usize>, body: F) -> (Result<EndResult, Abort>, Vec<String>)
    where
        F: FnOnce(),
    {
        let capture = Capture::default();
        let harness = Harness::new(capture.printer());
        let result = scope(harness, || {
            let result = run("top", plan, body);
            assert_eq!(with(|h| h.depth()).unwrap(), 0);
            result
        });
        (result, capture.lines())
    }

    fn loc(line: u32) -> Location {
        Location::new("t/harness.rs", line)
    }

    #[test]
    fn planned_with_failure() {
        let (result, lines) = run_top(Some(3), || {
            ok(loc(1), true, None);
            is(loc(2), 1 + 1 == 2, || "2".into(), || "2".into(), None);
            fail(loc(3), Some(format_args!("boom")));
        });
        assert_eq!(result.unwrap(), EndResult::NotOk);
        assert_eq!(
            lines,
            vec![
                "    1..3",
                "    ok 1",
                "    ok 2",
                "    not ok 3 - boom",
                "    # Assertion failed at t/harness.rs:3",
            ]
        );
    }

    #[test]
    fn unplanned_reports_count_last() {
        let (result, lines) = run_top(None, || {
            pass(loc(1), Some(format_args!("pass")));
            diag(format_args!("note\nmore"));
            pass(loc(2), None);
        });
        assert_eq!(result.unwrap(), EndResult::Ok);
        assert_eq!(
            lines,
            vec![
                "    ok 1 - pass",
                "    # note",
                "    # more",
                "    ok 2",
                "    1..2",
            ]
        );
    }

    #[test]
    fn too_many_assertions() {
        let (result, lines) = run_top(Some(1), || {
            for _ in 0..3 {
                ok(loc(1), true, None);
            }
        });
        assert_eq!(result.unwrap(), EndResult::TooMany);
        assert_eq!(
            lines,
            vec![
                "    1..1",
                "    ok 1",
                "    ok 2",
                "    ok 3",
                "    # Looks like you only planned 1 test but 3 were run",
            ]
        );
    }

    #[test]
    fn is_prints_got_and_expected() {
        let (result, lines) = run_top(None, || {
            is(loc(9), false, || "2".into(), || "3".into(), Some(format_args!("sum")));
            isnt(loc(10), false, || "a".into(), || "a".into(), None);
        });
        assert_eq!(result.unwrap(), EndResult::NotOk);
        assert_eq!(
            lines,
            vec![
                "    not ok 1 - sum",
                "    # Assertion failed at t/harness.rs:9",
                "    # Got:      2",
                "    # Expected: 3",
                "    not ok 2",
                "    # Assertion failed at t/harness.rs:10",
                "    # Got:        a",
                "    # Unexpected: a",
                "    1..2",
            ]
        );
    }

    #[test]
    fn skip_and_todo_directives() {
        let (result, lines) = run_top(None, || {
            {
                let _todo = TodoGuard::start(format_args!("not yet"));
                ok(loc(1), false, Some(format_args!("false")));
                fail(loc(2), None);
            }
            skip(loc(3), 2, format_args!("skip these"));
        });
        assert_eq!(result.unwrap(), EndResult::Ok);
        assert_eq!(
            lines,
            vec![
                "    ok 1 - false # TODO not yet",
                "    ok 2 # TODO not yet",
                "    ok 3 - skip these # skip skip these",
                "    ok 4 - skip these # skip skip these",
                "    1..4",
            ]
        );
    }

    #[test]
    fn todo_keeps_the_raw_outcome() {
        let capture = Capture::default();
        let mut harness = Harness::new(capture.printer());
        harness.enter("top", None);
        harness.todo_start("flaky").unwrap();

        let fixed = harness.push(Assertion::new(true, "fixed already", None)).unwrap();
        assert!(fixed.is_ok());
        assert!(fixed.raw_outcome());

        let broken = harness.push(Assertion::new(false, "still broken", None)).unwrap();
        assert!(broken.is_ok());
        assert!(!broken.raw_outcome());

        harness.todo_stop().unwrap();
        assert_eq!(harness.leave(None).unwrap(), EndResult::Ok);
    }

    #[test]
    fn subtest_is_recorded_in_parent() {
        let (result, lines) = run_top(None, || {
            let passed = subtest("inner", Some(2), || {
                ok(loc(1), true, None);
                ok(loc(2), true, None);
            });
            assert!(passed);
        });
        assert_eq!(result.unwrap(), EndResult::Ok);
        assert_eq!(
            lines,
            vec![
                "        1..2",
                "        ok 1",
                "        ok 2",
                "    ok 1 - inner",
                "    1..1",
            ]
        );
    }

    #[test]
    fn failing_subtest_fails_parent() {
        let (result, lines) = run_top(None, || {
            subtest("inner", None, || {
                ok(loc(1), false, None);
            });
        });
        assert_eq!(result.unwrap(), EndResult::NotOk);
        assert_eq!(
            lines,
            vec![
                "        not ok 1",
                "        # Assertion failed at t/harness.rs:1",
                "        1..1",
                "    not ok 1 - inner",
                "    # Assertion failed",
                "    1..1",
            ]
        );
    }

    fn explode() {
        panic!("oops");
    }

    #[test]
    fn errors_and_panics_become_exceptions() {
        let capture = Capture::default();
        let harness = Harness::new(capture.printer());
        let results = scope(harness, || {
            let returned = run("returned", None, || -> anyhow::Result<()> {
                ok(loc(1), true, None);
                anyhow::bail!("broken")
            });
            let panicked = run("panicked", Some(2), || {
                ok(loc(2), true, None);
                explode();
            });
            (returned, panicked)
        });
        assert_eq!(results.0.unwrap(), EndResult::Exception);
        assert_eq!(results.1.unwrap(), EndResult::Exception);

        let lines = capture.lines();
        assert_eq!(lines[0], "    ok 1");
        assert_eq!(lines[1], "    # Caught exception: broken");
        assert_eq!(lines[2], "    1..2");
        assert_eq!(lines[3], "    ok 1");
        assert!(lines[4].starts_with("    # Caught exception: oops at "));
        assert_eq!(lines[5], "    # Looks like you planned 2 tests but only 1 was run");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn bail_out_unwinds_through_subtests() {
        let (result, lines) = run_top(None, || {
            ok(loc(1), true, None);
            subtest("inner", None, || {
                bail_out(loc(7), Some(format_args!("stop")));
            });
            ok(loc(2), true, Some(format_args!("unreachable")));
        });
        match result {
            Err(Abort::BailOut(bail)) => {
                assert_eq!(bail.message, "stop");
                assert_eq!(bail.location, loc(7));
            }
            res => panic!("unexpected result: {:?}", res),
        }
        assert_eq!(lines, vec!["    ok 1"]);
    }

    #[test]
    fn push_without_execution() {
        let capture = Capture::default();
        let mut harness = Harness::new(capture.printer());
        let err = harness.push(Assertion::new(true, "", None)).unwrap_err();
        assert!(matches!(err, ConfigError::NoCurrentExecution));
        assert!(with(|_| ()).is_err());
    }

    #[test]
    fn aborts_do_not_outlive_the_boundary() {
        let (result, _) = run_top(None, || {
            subtest("inner", None, || bail_out(loc(3), None));
        });
        assert!(matches!(result, Err(Abort::BailOut(..))));
        assert!(!Boundary::is_active());
        assert!(PENDING_ABORT.with(|pending| pending.borrow().is_none()));
    }

    #[test]
    fn config_error_in_body_aborts() {
        let (result, _) = run_top(None, || {
            // pops the only execution, so the next push has nowhere to go
            let _ = with(Harness::abandon);
            pass(loc(1), None);
        });
        assert!(matches!(result, Err(Abort::Config(ConfigError::NoCurrentExecution))));
    }
}
