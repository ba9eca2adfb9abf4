//! Identifier generation for freshly created filter tags
//!
//! Injected into the pipeline so tests can supply deterministic ids.

use uuid::Uuid;

/// Source of fresh unique identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production generator: random v4 UUIDs. Ids are fresh on every run, so
/// re-running the pipeline produces new tag ids by design.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: "tag-1", "tag-2", ...
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    counter: usize,
}

#[cfg(test)]
impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("tag-{}", self.counter)
    }
}
