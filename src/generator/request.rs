use std::fmt;
use std::str::FromStr;

use super::error::ScaffoldError;

/// Top-level scope of a generation request
///
/// Exactly two areas exist. `Admin` is the dashboard side of the portfolio
/// app (session-backed, dual-generated); `Client` is the public gallery side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Administrative dashboard endpoints (`pages/api/admin/...`)
    Admin,
    /// Client-facing gallery endpoints (`pages/api/client/...`)
    Client,
}

impl Area {
    /// Path segment for this area
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Admin => "admin",
            Area::Client => "client",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Area::Admin),
            "client" => Ok(Area::Client),
            other => Err(ScaffoldError::InvalidArea(other.to_string())),
        }
    }
}

/// Named boolean flags of a generation request
///
/// The two pattern-override flags are mutually exclusive; `validated()`
/// enforces this at construction time so the rest of the pipeline never has
/// to re-check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenOptions {
    /// Generate a full-CRUD handler
    pub crud: bool,
    /// Generate a credential-verification handler
    pub auth: bool,
    /// Bind the direct-client pattern regardless of area default
    pub force_simple_pattern: bool,
    /// Bind the ORM-backed pattern regardless of area default
    pub force_orm_pattern: bool,
    /// Generate a multipart-upload handler
    pub multipart: bool,
    /// Insert a `[slug]` segment before the resource segment
    pub nested: bool,
    /// Emit a bracketed dynamic-parameter filename
    pub dynamic: bool,
    /// Overwrite existing files
    pub force: bool,
}

impl GenOptions {
    /// Reject mutually exclusive flag combinations
    pub fn validated(self) -> Result<Self, ScaffoldError> {
        if self.force_simple_pattern && self.force_orm_pattern {
            return Err(ScaffoldError::Usage(
                "--force-simple-pattern and --force-orm-pattern are mutually exclusive".to_string(),
            ));
        }
        Ok(self)
    }

    /// Whether an explicit pattern override was supplied
    pub fn has_pattern_override(&self) -> bool {
        self.force_simple_pattern || self.force_orm_pattern
    }
}

/// One scaffolding invocation, immutable after construction
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Validated target area
    pub area: Area,
    /// Resource name, e.g. `galleries` or `download`
    pub resource: String,
    /// Validated flag set
    pub options: GenOptions,
}

impl GenerationRequest {
    /// Parse and validate a request from raw command-line values
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::InvalidArea` for an unrecognized area and
    /// `ScaffoldError::Usage` for conflicting flags.
    pub fn new(area: &str, resource: &str, options: GenOptions) -> Result<Self, ScaffoldError> {
        let area = area.parse()?;
        let options = options.validated()?;
        Ok(Self {
            area,
            resource: resource.to_string(),
            options,
        })
    }
}
