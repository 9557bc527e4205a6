use std::future::Future;

/// Result of resolving a named model. Only `Loaded` proceeds to registration.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    /// Missing, unreadable, or not shaped the way the scene expects.
    Absent,
}

impl<T> LoadOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(value) => Some(value),
            LoadOutcome::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for LoadOutcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(LoadOutcome::Absent, LoadOutcome::Loaded)
    }
}

/// Resolves model names to loaded object graphs.
pub trait AssetResolver {
    type Model;

    fn resolve(&mut self, name: &str) -> impl Future<Output = LoadOutcome<Self::Model>>;
}
