//! Typed errors for the import stages. I/O plumbing wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Which record format an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Topic,
    Post,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Topic => f.write_str("topic"),
            Entity::Post => f.write_str("post"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    /// Key not in the fixed field dictionary of the record format.
    #[error("unknown {entity} field: {key:?}")]
    UnknownField { entity: Entity, key: String },

    /// Line is not of the form `<key>: <value>`.
    #[error("malformed {entity} field line: {line:?}")]
    MalformedField { entity: Entity, line: String },

    #[error("{entity} record is missing required field {key:?}")]
    MissingField { entity: Entity, key: &'static str },

    /// `<forumId>.<entityId>` could not be split or parsed.
    #[error("invalid {entity} composite id: {value:?}")]
    InvalidCompositeId { entity: Entity, value: String },

    #[error("invalid message sha1 {value:?}: {reason}")]
    InvalidSha1 { value: String, reason: String },

    /// Post references a topic that is neither kept nor known-excluded.
    #[error("post references unknown topic id {topic_id}")]
    DanglingTopic { topic_id: i64 },

    /// A deleted entity reached the serializer.
    #[error("refusing to serialize deleted {entity} {id}")]
    DeletedEntity { entity: Entity, id: i64 },

    #[error("data directory not found (tried {})", display_paths(.candidates))]
    DataDirNotFound { candidates: Vec<PathBuf> },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
