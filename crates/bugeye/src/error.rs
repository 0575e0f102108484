use crate::location::Location;
use std::fmt;

/// A mistake in how the test program is declared or invoked.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A test with the same name has already been declared.
    #[error("duplicate test: '{name}'{}", declared_at(.previous))]
    DuplicateTest {
        #[allow(missing_docs)]
        name: String,
        /// Where the test of the same name was declared first, if known.
        previous: Option<Location>,
    },

    /// The command line could not be parsed.
    #[error("{0}")]
    Cli(#[from] getopts::Fail),

    /// The argument of `--color` is not recognized.
    #[error("argument for --color must be auto, always, or never (was {0})")]
    InvalidColor(String),

    /// A `--regex` argument is not a valid pattern.
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        #[allow(missing_docs)]
        pattern: String,
        #[allow(missing_docs)]
        #[source]
        source: regex::Error,
    },

    /// Some tests selected by name are not declared.
    #[error("No test named {}", QuotedList(.0))]
    MissingTests(Vec<String>),

    /// A `--regex` argument did not match any declared test.
    #[error("No test matches /{pattern}/{}", icase_flag(.case_insensitive))]
    NoMatch {
        #[allow(missing_docs)]
        pattern: String,
        #[allow(missing_docs)]
        case_insensitive: bool,
    },

    /// The selection resolved to an empty set of tests.
    #[error("No tests to run")]
    NoTestsToRun,

    /// An assertion was made while no test is running.
    #[error("No current execution to which to push assertion")]
    NoCurrentExecution,
}

fn declared_at(previous: &Option<Location>) -> String {
    match previous {
        Some(location) => format!(" (first declared at {})", location),
        None => String::new(),
    }
}

fn icase_flag(case_insensitive: &bool) -> &'static str {
    if *case_insensitive {
        "i"
    } else {
        ""
    }
}

struct QuotedList<'a>(&'a [String]);

impl fmt::Display for QuotedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", name)?;
        }
        Ok(())
    }
}

/// An explicit request from a test body to stop the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BailOut {
    #[allow(missing_docs)]
    pub message: String,
    #[allow(missing_docs)]
    pub location: Location,
}

/// The reasons a run can be cut short, carried across unwinding test bodies.
#[derive(Debug)]
pub(crate) enum Abort {
    BailOut(BailOut),
    Config(ConfigError),
}
