use crate::assertion::{Assertion, Directive};
use std::fmt;

/// The classification of a finished execution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EndResult {
    /// The execution has not started yet.
    None,
    /// Every assertion passed and the plan, if any, was met.
    Ok,
    /// At least one assertion failed.
    NotOk,
    /// The body raised an unexpected error.
    Exception,
    /// Fewer assertions than planned were made.
    TooFew,
    /// More assertions than planned were made.
    TooMany,
}

impl EndResult {
    #[allow(missing_docs)]
    #[inline]
    pub fn is_ok(self) -> bool {
        self == EndResult::Ok
    }
}

impl fmt::Display for EndResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EndResult::None => "none",
            EndResult::Ok => "ok",
            EndResult::NotOk => "not ok",
            EndResult::Exception => "exception",
            EndResult::TooFew => "too few",
            EndResult::TooMany => "too many",
        })
    }
}

/// A running instance of a test or sub-test.
#[derive(Debug)]
pub(crate) struct Execution {
    name: String,
    plan: Option<usize>,
    assertions: Vec<Assertion>,
    directives: Vec<(Directive, String)>,
    end_result: EndResult,
}

impl Execution {
    pub(crate) fn new(name: impl Into<String>, plan: Option<usize>) -> Self {
        Self {
            name: name.into(),
            plan,
            assertions: vec![],
            directives: vec![],
            end_result: EndResult::None,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn plan(&self) -> Option<usize> {
        self.plan
    }

    pub(crate) fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    pub(crate) fn end_result(&self) -> EndResult {
        self.end_result
    }

    pub(crate) fn start(&mut self) {
        debug_assert_eq!(self.end_result, EndResult::None);
        self.end_result = EndResult::Ok;
    }

    pub(crate) fn push_directive(&mut self, directive: Directive, reason: String) {
        self.directives.push((directive, reason));
    }

    pub(crate) fn pop_directive(&mut self) {
        self.directives.pop();
    }

    /// Record an assertion, applying the innermost directive and numbering it.
    pub(crate) fn record(&mut self, assertion: Assertion) -> &Assertion {
        let mut assertion = match self.directives.last() {
            Some((directive, reason)) => assertion.with_directive(*directive, reason.clone()),
            None => assertion,
        };
        assertion.set_number(self.assertions.len() + 1);
        if !assertion.is_ok() {
            self.end_result = EndResult::NotOk;
        }
        self.assertions.push(assertion);
        &self.assertions[self.assertions.len() - 1]
    }

    pub(crate) fn mark_exception(&mut self) {
        self.end_result = EndResult::Exception;
    }

    /// Compare the number of recorded assertions against the plan.
    ///
    /// Returns the planned count when it does not match.
    pub(crate) fn finish(&mut self) -> Option<usize> {
        let planned = self.plan?;
        let actual = self.assertions.len();
        if actual == planned {
            return None;
        }
        if self.end_result != EndResult::Exception {
            self.end_result = if actual < planned {
                EndResult::TooFew
            } else {
                EndResult::TooMany
            };
        }
        Some(planned)
    }
}
