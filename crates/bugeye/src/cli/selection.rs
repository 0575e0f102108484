use crate::{cli::args::Args, error::ConfigError, registry::Registry};
use regex::RegexBuilder;
use std::collections::BTreeSet;

/// Resolve the selectors in `args` into the names of the tests to run.
///
/// Without any selector every declared test is selected. An empty set is
/// only returned when `--ignore-missing` is in effect.
pub fn resolve<'a>(args: &Args, registry: &'a Registry) -> Result<BTreeSet<&'a str>, ConfigError> {
    if args.names.is_empty() && args.patterns.is_empty() {
        let selected: BTreeSet<_> = registry.all().map(|test| test.name()).collect();
        return non_empty(args, selected);
    }

    let mut selected = BTreeSet::new();

    let mut missing = vec![];
    for name in &args.names {
        let found = if args.case_insensitive {
            let name = name.to_lowercase();
            registry
                .all()
                .find(|test| test.name().to_lowercase() == name)
        } else {
            registry.get(name)
        };
        match found {
            Some(test) => {
                selected.insert(test.name());
            }
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        if !args.ignore_missing {
            return Err(ConfigError::MissingTests(missing));
        }
        log::info!("ignoring missing tests: {:?}", missing);
    }

    for pattern in &args.patterns {
        let re = RegexBuilder::new(pattern)
            .case_insensitive(args.case_insensitive)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

        let mut matched = false;
        for test in registry.all().filter(|test| re.is_match(test.name())) {
            selected.insert(test.name());
            matched = true;
        }
        if !matched {
            if !args.ignore_missing {
                return Err(ConfigError::NoMatch {
                    pattern: pattern.clone(),
                    case_insensitive: args.case_insensitive,
                });
            }
            log::info!("ignoring pattern without matches: /{}/", pattern);
        }
    }

    non_empty(args, selected)
}

fn non_empty<'a>(args: &Args, selected: BTreeSet<&'a str>) -> Result<BTreeSet<&'a str>, ConfigError> {
    if selected.is_empty() && !args.ignore_missing {
        return Err(ConfigError::NoTestsToRun);
    }
    Ok(selected)
}
