use crate::{
    assertion::{Assertion, Directive},
    cli::ColorConfig,
    error::BailOut,
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const INDENT_WIDTH: usize = 4;

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn bold(mut self) -> Self {
        self.spec.get_or_insert_with(ColorSpec::new).set_bold(true);
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn ok_str(ok: bool) -> Colored<&'static str> {
    if ok {
        colored("ok").fg(Color::Green).bold()
    } else {
        colored("not ok").fg(Color::Red).bold()
    }
}

fn pluralize(n: usize, singular: &'static str, plural: &'static str) -> &'static str {
    match n {
        1 => singular,
        _ => plural,
    }
}

/// The sink of the line-oriented test protocol.
///
/// Every line is flushed as soon as it is written so that the order of the
/// emitted lines always matches the order of the operations.
pub struct Printer {
    out: Box<dyn WriteColor>,
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer").finish()
    }
}

impl Printer {
    /// Create a printer that writes to the standard output.
    pub fn stdout(color: ColorConfig) -> Self {
        Self::new(StandardStream::stdout(match color {
            ColorConfig::Auto => ColorChoice::Auto,
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
        }))
    }

    /// Create a printer from an arbitrary colour-aware writer.
    pub fn new<W>(out: W) -> Self
    where
        W: WriteColor + 'static,
    {
        Self { out: Box::new(out) }
    }

    fn indent(&mut self, depth: usize) -> io::Result<()> {
        write!(self.out, "{:1$}", "", depth * INDENT_WIDTH)
    }

    fn finish_line(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub(crate) fn plan(&mut self, depth: usize, count: usize) {
        let _ = self.try_plan(depth, count);
    }

    fn try_plan(&mut self, depth: usize, count: usize) -> io::Result<()> {
        self.indent(depth)?;
        write!(self.out, "1..{}", count)?;
        self.finish_line()
    }

    pub(crate) fn assertion(&mut self, depth: usize, assertion: &Assertion) {
        let _ = self.try_assertion(depth, assertion);
    }

    fn try_assertion(&mut self, depth: usize, assertion: &Assertion) -> io::Result<()> {
        self.indent(depth)?;
        ok_str(assertion.is_ok()).fmt_colored(&mut *self.out)?;
        if assertion.number() > 0 {
            write!(self.out, " {}", assertion.number())?;
        }
        if !assertion.description().is_empty() {
            write!(self.out, " - {}", assertion.description())?;
        }
        if assertion.directive() != Directive::None {
            write!(self.out, " # {}", assertion.directive())?;
            if !assertion.reason().is_empty() {
                write!(self.out, " {}", assertion.reason())?;
            }
        }
        self.finish_line()?;

        if !assertion.is_ok() {
            self.indent(depth)?;
            write!(self.out, "# Assertion failed")?;
            if let Some(location) = assertion.location() {
                write!(self.out, " at {}", location)?;
            }
            self.finish_line()?;
        }

        Ok(())
    }

    /// Print a diagnostic message, one comment line per input line.
    pub(crate) fn diag(&mut self, depth: usize, message: &str) {
        let _ = self.try_diag(depth, None, message);
    }

    pub(crate) fn caught_exception(&mut self, depth: usize, message: &str) {
        let label = colored("Caught exception").fg(Color::Red);
        let _ = self.try_diag(depth, Some(label), message);
    }

    fn try_diag(
        &mut self,
        depth: usize,
        label: Option<Colored<&'static str>>,
        message: &str,
    ) -> io::Result<()> {
        let mut lines = message.lines();
        let first = lines.next();
        match (label, first) {
            (Some(label), first) => {
                self.indent(depth)?;
                write!(self.out, "# ")?;
                label.fmt_colored(&mut *self.out)?;
                if let Some(first) = first.filter(|line| !line.is_empty()) {
                    write!(self.out, ": {}", first)?;
                }
                self.finish_line()?;
            }
            (None, Some(first)) => self.comment(depth, first)?,
            (None, None) => return Ok(()),
        }
        for line in lines {
            self.comment(depth, line)?;
        }
        Ok(())
    }

    fn comment(&mut self, depth: usize, line: &str) -> io::Result<()> {
        self.indent(depth)?;
        write!(self.out, "# {}", line)?;
        self.finish_line()
    }

    pub(crate) fn plan_mismatch(&mut self, depth: usize, planned: usize, actual: usize) {
        let message = if actual < planned {
            format!(
                "Looks like you planned {} {} but only {} {} run",
                planned,
                pluralize(planned, "test", "tests"),
                actual,
                pluralize(actual, "was", "were"),
            )
        } else {
            format!(
                "Looks like you only planned {} {} but {} {} run",
                planned,
                pluralize(planned, "test", "tests"),
                actual,
                pluralize(actual, "was", "were"),
            )
        };
        self.diag(depth, &message);
    }

    /// Print the outcome of a top-level test.
    pub(crate) fn test_result(&mut self, number: usize, ok: bool, name: &str) {
        let _ = self.try_test_result(number, ok, name);
    }

    fn try_test_result(&mut self, number: usize, ok: bool, name: &str) -> io::Result<()> {
        ok_str(ok).fmt_colored(&mut *self.out)?;
        write!(self.out, " {} - {}", number, name)?;
        self.finish_line()
    }

    pub(crate) fn bail_out(&mut self, bail_out: &BailOut) {
        let _ = self.try_bail_out(bail_out);
    }

    fn try_bail_out(&mut self, bail_out: &BailOut) -> io::Result<()> {
        colored("Bail out!").fg(Color::Red).fmt_colored(&mut *self.out)?;
        if !bail_out.message.is_empty() {
            write!(self.out, " {}", bail_out.message)?;
        }
        write!(self.out, " At {}", bail_out.location)?;
        self.finish_line()
    }

    pub(crate) fn list<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            let _ = writeln!(self.out, "{}", name);
        }
        let _ = self.out.flush();
    }

    pub(crate) fn summary(&mut self, results: &[(String, bool)]) {
        let _ = self.try_summary(results);
    }

    fn try_summary(&mut self, results: &[(String, bool)]) -> io::Result<()> {
        let name_length = results
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        for (name, ok) in results {
            let padding = name_length - name.chars().count() + 3;
            write!(self.out, "# {} {} ", name, ".".repeat(padding))?;
            ok_str(*ok).fmt_colored(&mut *self.out)?;
            self.finish_line()?;
        }

        let total = results.len();
        let failed = results.iter().filter(|(_, ok)| !ok).count();
        if failed > 0 {
            write!(self.out, "# {} of {} {} ", failed, total, pluralize(total, "test", "tests"))?;
            colored("failed").fg(Color::Red).bold().fmt_colored(&mut *self.out)?;
            write!(self.out, "!")?;
        } else {
            write!(self.out, "# All {} {} ", total, pluralize(total, "test", "tests"))?;
            colored("passed").fg(Color::Green).bold().fmt_colored(&mut *self.out)?;
        }
        self.finish_line()
    }
}
