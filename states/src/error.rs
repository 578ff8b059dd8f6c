use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{kind} not registered: {type_name}")]
    NotRegistered {
        kind: &'static str,
        type_name: &'static str,
    },
    #[error("{type_name} is registered as a {actual}, not a {expected}")]
    WrongKind {
        type_name: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl StateError {
    pub fn not_registered(kind: &'static str, type_name: &'static str) -> Self {
        Self::NotRegistered { kind, type_name }
    }

    pub fn wrong_kind(type_name: &'static str, expected: &'static str, actual: &'static str) -> Self {
        Self::WrongKind {
            type_name,
            expected,
            actual,
        }
    }
}
