use crate::location::Location;
use std::fmt;

/// An annotation that changes how the outcome of an assertion is counted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Directive {
    #[allow(missing_docs)]
    None,
    /// The check was not performed.
    Skip,
    /// The check is expected to fail for now.
    Todo,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::None => Ok(()),
            Directive::Skip => f.write_str("skip"),
            Directive::Todo => f.write_str("TODO"),
        }
    }
}

/// A record of one evaluated check.
#[derive(Debug, Clone)]
pub struct Assertion {
    ok: bool,
    description: String,
    location: Option<Location>,
    directive: Directive,
    reason: String,
    number: usize,
}

impl Assertion {
    /// Create an assertion that has not been assigned to an execution yet.
    pub fn new(ok: bool, description: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            ok,
            description: description.into(),
            location,
            directive: Directive::None,
            reason: String::new(),
            number: 0,
        }
    }

    pub(crate) fn with_directive(mut self, directive: Directive, reason: impl Into<String>) -> Self {
        self.directive = directive;
        self.reason = reason.into();
        self
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }

    /// Return whether the assertion counts as passed.
    ///
    /// Skipped and todo'd assertions always count as passed regardless of
    /// their raw outcome.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.directive != Directive::None || self.ok
    }

    /// Return the outcome of the check itself, ignoring any directive.
    #[inline]
    pub fn raw_outcome(&self) -> bool {
        self.ok
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn directive(&self) -> Directive {
        self.directive
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The 1-based sequence number within the owning execution.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}
