use std::fmt;

/// What kind of id a dangling reference pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Connection to an area id that is not in the file
    Area,
    /// Connection to an edge index past the target polygon's corner count
    Edge,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Area => f.write_str("area"),
            Self::Edge => f.write_str("edge"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(String),

    #[error("invalid magic: {found:#010x}")]
    InvalidMagic { found: u32 },

    #[error("unsupported nav version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("truncated stream at offset {offset}: need {need} bytes, have {have}")]
    TruncatedStream { offset: usize, need: usize, have: usize },

    #[error("malformed record at offset {offset}: {reason}")]
    MalformedRecord { offset: usize, reason: String },

    #[error("area {area} references unknown {kind} {target}")]
    DanglingReference { area: u32, target: u32, kind: ReferenceKind },
}

impl Error {
    /// Short stable name used in per-file diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "IOError",
            Self::InvalidMagic { .. } => "InvalidMagic",
            Self::UnsupportedVersion { .. } => "UnsupportedVersion",
            Self::TruncatedStream { .. } => "TruncatedStream",
            Self::MalformedRecord { .. } => "MalformedRecord",
            Self::DanglingReference { .. } => "DanglingReference",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
