//! A small library exercised by the demo test programs.

use std::fmt;

/// A stack with a fixed capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

/// The error returned when pushing onto a full stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Full<T>(pub T);

impl<T: fmt::Debug> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the stack is full (rejected {:?})", self.0)
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(item));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..]
    }
}

/// Parse a `major.minor.patch` version string.
pub fn parse_version(s: &str) -> anyhow::Result<(u32, u32, u32)> {
    let mut parts = s.trim().splitn(3, '.');
    let mut next = |what: &str| -> anyhow::Result<u32> {
        let part = parts
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing {} version in '{}'", what, s))?;
        part.parse()
            .map_err(|err| anyhow::anyhow!("invalid {} version '{}': {}", what, part, err))
    };
    Ok((next("major")?, next("minor")?, next("patch")?))
}
