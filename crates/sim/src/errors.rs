use std::error;
use std::fmt;

/// Errors raised by the mate selection tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The candidate pool was empty. Callers must never run a tournament
    /// without at least one eligible candidate.
    EmptyPool,
    /// A tournament was asked to draw zero candidates.
    ZeroPoolSize,
    /// Appearance and preference blocks cannot be aligned locus by locus.
    TraitLengthMismatch { appearance: usize, preference: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "Mate selection called with an empty candidate pool"),
            Self::ZeroPoolSize => write!(f, "Mate selection pool size must be at least 1"),
            Self::TraitLengthMismatch {
                appearance,
                preference,
            } => write!(
                f,
                "Cannot score {appearance} appearance loci against {preference} preference loci"
            ),
        }
    }
}

impl error::Error for SelectionError {}

/// Errors that can occur while combining two parents into a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReproductionError {
    /// The parents carry trait blocks of different lengths, so loci cannot
    /// be aligned position by position.
    LocusCountMismatch {
        block: &'static str,
        father: usize,
        mother: usize,
    },
    /// The pair handed to the reproducer does not consist of a male father
    /// and a female mother.
    InvalidPair,
}

impl fmt::Display for ReproductionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocusCountMismatch {
                block,
                father,
                mother,
            } => write!(
                f,
                "Locus count mismatch in {block} block: father has {father}, mother has {mother}"
            ),
            Self::InvalidPair => {
                write!(f, "Reproduction requires a male father and a female mother")
            }
        }
    }
}

impl error::Error for ReproductionError {}

/// Errors that can occur while building or validating a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => write!(f, "Missing required parameter: {param}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
        }
    }
}

impl error::Error for BuilderError {}

/// Errors raised when loading a configuration from JSON.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// The configuration parsed but failed validation
    Validation(BuilderError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<BuilderError> for ConfigError {
    fn from(e: BuilderError) -> Self {
        Self::Validation(e)
    }
}

/// Top-level error for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    Selection(SelectionError),
    Reproduction(ReproductionError),
    Config(BuilderError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection(e) => write!(f, "Selection failed: {e}"),
            Self::Reproduction(e) => write!(f, "Reproduction failed: {e}"),
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Selection(e) => Some(e),
            Self::Reproduction(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<SelectionError> for SimulationError {
    fn from(e: SelectionError) -> Self {
        Self::Selection(e)
    }
}

impl From<ReproductionError> for SimulationError {
    fn from(e: ReproductionError) -> Self {
        Self::Reproduction(e)
    }
}

impl From<BuilderError> for SimulationError {
    fn from(e: BuilderError) -> Self {
        Self::Config(e)
    }
}
