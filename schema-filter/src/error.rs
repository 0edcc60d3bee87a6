use crate::BlockKind;

/// The result type of schema filtering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A recognized block declaration whose opening brace is never matched
    /// before the input ends. The line number is 1-based.
    #[error("unmatched braces in {kind} block `{name}` starting at line {line}")]
    UnbalancedBlock {
        kind: BlockKind,
        name: String,
        line: usize,
    },

    /// No generator block in the schema matches the requested name.
    #[error("generator `{name}` not found in schema")]
    GeneratorNotFound { name: String },
}
