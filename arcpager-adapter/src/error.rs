use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    #[error("a snap engine is already attached to this coordinator; detach it first")]
    AlreadyAttached,
}
