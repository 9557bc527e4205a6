use thiserror::Error;

/// Errors surfaced by the core. Drag operations never fail; only setup can.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SnapError {
    #[error("object {0} is already registered")]
    AlreadyRegistered(String),
}
