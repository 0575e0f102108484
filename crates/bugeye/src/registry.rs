use crate::{error::ConfigError, location::Location, termination::Termination};
use std::{collections::BTreeMap, fmt};

/// The body of a declared test.
pub type TestFn = Box<dyn Fn() -> anyhow::Result<()>>;

/// A named test declaration.
pub struct Test {
    name: String,
    plan: Option<usize>,
    location: Option<Location>,
    body: TestFn,
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test")
            .field("name", &self.name)
            .field("plan", &self.plan)
            .field("location", &self.location)
            .finish()
    }
}

impl Test {
    /// Return the name of the test, unique within its registry.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the number of assertions the test is expected to make, if declared.
    #[inline]
    pub fn plan(&self) -> Option<usize> {
        self.plan
    }

    /// Return where the test was declared, if known.
    #[inline]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub(crate) fn body(&self) -> &TestFn {
        &self.body
    }
}

/// The collection of all declared tests, iterated in name order.
///
/// The registry is filled by an explicit initialization phase before any test
/// is run, and is only read afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    tests: BTreeMap<String, Test>,
}

impl Registry {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a test.
    ///
    /// Fails if a test with the same name has already been declared.
    pub fn declare<F, T>(
        &mut self,
        name: impl Into<String>,
        plan: Option<usize>,
        body: F,
    ) -> Result<&Test, ConfigError>
    where
        F: Fn() -> T + 'static,
        T: Termination,
    {
        self.insert(name.into(), plan, None, Box::new(move || body().into_result()))
    }

    pub(crate) fn insert(
        &mut self,
        name: String,
        plan: Option<usize>,
        location: Option<Location>,
        body: TestFn,
    ) -> Result<&Test, ConfigError> {
        use std::collections::btree_map::Entry;
        match self.tests.entry(name) {
            Entry::Occupied(entry) => Err(ConfigError::DuplicateTest {
                name: entry.key().clone(),
                previous: entry.get().location().copied(),
            }),
            Entry::Vacant(entry) => {
                log::debug!("declared test '{}' (plan: {:?})", entry.key(), plan);
                let name = entry.key().clone();
                Ok(entry.insert(Test {
                    name,
                    plan,
                    location,
                    body,
                }))
            }
        }
    }

    /// Iterate over all declared tests in name order.
    pub fn all(&self) -> impl Iterator<Item = &Test> + Clone + '_ {
        self.tests.values()
    }

    #[allow(missing_docs)]
    pub fn get(&self, name: &str) -> Option<&Test> {
        self.tests.get(name)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Something that declares tests into a registry.
pub trait Registration {
    #[allow(missing_docs)]
    fn register(&self, registry: &mut Registry) -> Result<(), ConfigError>;
}

impl<F> Registration for F
where
    F: Fn(&mut Registry) -> Result<(), ConfigError>,
{
    fn register(&self, registry: &mut Registry) -> Result<(), ConfigError> {
        (*self)(registry)
    }
}

/// A test case generated by `#[bugeye::test]`.
#[doc(hidden)] // private API
#[derive(Debug)]
pub struct TestCase {
    pub name: &'static str,
    pub plan: Option<usize>,
    pub location: Location,
    pub body: fn() -> anyhow::Result<()>,
}

impl Registration for TestCase {
    fn register(&self, registry: &mut Registry) -> Result<(), ConfigError> {
        let body = self.body;
        registry
            .insert(
                self.name.to_owned(),
                self.plan,
                Some(self.location),
                Box::new(body),
            )
            .map(drop)
    }
}

pub(crate) fn register_all(
    registrations: &[&dyn Registration],
) -> Result<Registry, ConfigError> {
    let mut registry = Registry::new();
    for registration in registrations {
        registration.register(&mut registry)?;
    }
    Ok(registry)
}
