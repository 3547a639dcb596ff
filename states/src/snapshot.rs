use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Cloned states handed to a command when it is dispatched.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert<T: State>(&mut self, state: T) {
        self.inner.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub(crate) fn insert_boxed(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: State>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Like [`CommandSnapshot::get`] but reports which state was missing.
    pub fn require<T: State>(&self, context: &str) -> Result<&T, Error> {
        self.get::<T>()
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), context))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Query(String);

    impl State for Query {}

    #[test]
    fn get_returns_inserted_state() {
        let mut snapshot = CommandSnapshot::new();
        snapshot.insert(Query("rust".to_owned()));

        assert_eq!(snapshot.get::<Query>(), Some(&Query("rust".to_owned())));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn require_names_missing_state() {
        let snapshot = CommandSnapshot::new();
        let err = snapshot
            .require::<Query>("search")
            .expect_err("empty snapshot has no Query");

        let message = err.to_string();
        assert!(message.contains("Query"), "message was {message}");
        assert!(message.contains("search"), "message was {message}");
    }
}
