//! Definition of command line interface.

use crate::error::ConfigError;
use getopts::Options;
use std::{path::Path, str::FromStr};

/// Command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Test names given literally.
    pub names: Vec<String>,
    /// Patterns given with `--regex`.
    pub patterns: Vec<String>,
    /// Match names and patterns ignoring case.
    pub case_insensitive: bool,
    /// Do not complain about selectors that match nothing.
    pub ignore_missing: bool,
    /// Print the declared test names instead of running them.
    pub list: bool,
    #[allow(missing_docs)]
    pub color: ColorConfig,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            names: vec![],
            patterns: vec![],
            case_insensitive: false,
            ignore_missing: false,
            list: false,
            color: ColorConfig::Auto,
        }
    }
}

impl Args {
    /// Parse the command line arguments of the current process.
    ///
    /// Returns `Ok(None)` after printing the usage when `--help` is given.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let args: Vec<_> = std::env::args().collect();
        let parser = Parser::new(&args[..]);
        match parser.parse()? {
            Some(args) => Ok(Some(args)),
            None => {
                parser.print_usage();
                Ok(None)
            }
        }
    }

    /// Parse a list of arguments, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Option<Self>, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = std::iter::once(String::new())
            .chain(args.into_iter().map(Into::into))
            .collect();
        Parser::new(&args[..]).parse()
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColorConfig {
    #[allow(missing_docs)]
    Auto,
    #[allow(missing_docs)]
    Always,
    #[allow(missing_docs)]
    Never,
}

impl FromStr for ColorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(ConfigError::InvalidColor(v.to_owned())),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag(
            "i",
            "case-insensitive",
            "Match test names and patterns ignoring case",
        );
        opts.optflag(
            "I",
            "ignore-missing",
            "Do not fail when a name or pattern selects no test",
        );
        opts.optflag("l", "list", "List all tests and exit");
        opts.optmulti(
            "r",
            "regex",
            "Run tests whose names match PATTERN (this flag can be used multiple times)",
            "PATTERN",
        );
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS] [--] [NAME...]", progname);
        println!(
            r#"{usage}
Each NAME selects the test with exactly that name. Without any NAME or
PATTERN, all tests are run in name order."#,
            usage = self.opts.usage(&message)
        );
    }

    fn parse(&self) -> Result<Option<Args>, ConfigError> {
        let args = &self.args[..];

        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        Ok(Some(Args {
            names: matches.free.clone(),
            patterns: matches.opt_strs("regex"),
            case_insensitive: matches.opt_present("case-insensitive"),
            ignore_missing: matches.opt_present("ignore-missing"),
            list: matches.opt_present("list"),
            color: matches.opt_get("color")?.unwrap_or(ColorConfig::Auto),
        }))
    }
}
