//! Fetch-on-mount view state shared by the data-driven pages.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// Lifecycle of one page-level fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// Display-ready failure message.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Map a call result, rendering the error with `describe`.
    pub fn from_result<E>(result: Result<T, E>, describe: impl FnOnce(&E) -> String) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(describe(&err)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
