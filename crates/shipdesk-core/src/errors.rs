use crate::model::EntityKind;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and tests) can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,

    /// Duplicate primary key, missing foreign key, or a failed CHECK at write time
    ConstraintViolation,

    /// A required column is absent from (or mistyped in) a result row
    HydrationMismatch,

    /// The declared entity dependencies contain a cycle
    DependencyCycle,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    /// The backing store could not be opened
    StoreUnavailable,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::HydrationMismatch => "ERR_HYDRATION_MISMATCH",
            ExErrorKind::DependencyCycle => "ERR_DEPENDENCY_CYCLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Which store constraint rejected a write
///
/// Only populated when the backing store reports it precisely; callers that
/// only care about the category should match on `ExErrorKind::ConstraintViolation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey,
    Unique,
    Check,
    NotNull,
    Other,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintKind::PrimaryKey => "primary key",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::Unique => "unique",
            ConstraintKind::Check => "check",
            ConstraintKind::NotNull => "not null",
            ConstraintKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Canonical structured error type
///
/// Carries a kind plus whatever context the failing layer could attach:
/// the operation, the entity type and id, and for snapshot imports the
/// ordinal of the item inside its collection.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<EntityKind>,
    entity_id: Option<String>,
    ordinal: Option<usize>,
    constraint: Option<ConstraintKind>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            ordinal: None,
            constraint: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity type context
    pub fn with_entity(mut self, entity: EntityKind) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add ordinal context (zero-based position inside a snapshot collection)
    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Add constraint detail
    pub fn with_constraint(mut self, constraint: ConstraintKind) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity type context, if any
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the ordinal context, if any
    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }

    /// Get the constraint detail, if any
    pub fn constraint(&self) -> Option<ConstraintKind> {
        self.constraint
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    pub fn is_constraint_violation(&self) -> bool {
        self.kind == ExErrorKind::ConstraintViolation
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(constraint) = self.constraint {
            write!(f, " (constraint: {})", constraint)?;
        }
        if let Some(entity) = self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(ordinal) = self.ordinal {
            write!(f, " (ordinal: {})", ordinal)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Errors raised while deriving the insert order from the dependency table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// The dependency table is not a DAG; `remaining` lists the kinds that
    /// could not be placed
    #[error("Dependency cycle among entity kinds: {remaining:?}")]
    Cycle { remaining: Vec<EntityKind> },

    /// A kind depends on a kind that is not part of the table being sorted
    #[error("{entity} depends on {dependency}, which is not declared")]
    UndeclaredDependency {
        entity: EntityKind,
        dependency: EntityKind,
    },
}

impl From<OrderingError> for ExError {
    fn from(err: OrderingError) -> Self {
        let base = ExError::new(ExErrorKind::DependencyCycle).with_op("insert_order");
        match &err {
            OrderingError::Cycle { .. } => base.with_message(err.to_string()),
            OrderingError::UndeclaredDependency { entity, .. } => {
                base.with_entity(*entity).with_message(err.to_string())
            }
        }
    }
}

/// Errors raised by the snapshot codec
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Snapshot document is not valid: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl From<CodecError> for ExError {
    fn from(err: CodecError) -> Self {
        match &err {
            CodecError::Malformed(_) => ExError::new(ExErrorKind::Serialization)
                .with_op("snapshot_parse")
                .with_message(err.to_string()),
            CodecError::Read { .. } => ExError::new(ExErrorKind::Io)
                .with_op("snapshot_read")
                .with_message(err.to_string()),
            CodecError::Write { .. } => ExError::new(ExErrorKind::Io)
                .with_op("snapshot_write")
                .with_message(err.to_string()),
        }
    }
}
