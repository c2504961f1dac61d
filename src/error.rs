#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("{0:?} is not a valid method name")]
    InvalidMethod(String),

    #[error("no route is named {0:?}")]
    RouteNotFound(String),

    #[error("placeholder {name:?} is unresolved: pattern = {pattern:?}")]
    UnresolvedPlaceholder { pattern: String, name: String },
}

impl RouterError {
    pub(crate) fn unresolved(pattern: &str, name: &str) -> Self {
        Self::UnresolvedPlaceholder {
            pattern: pattern.to_owned(),
            name: name.to_owned(),
        }
    }
}
