use std::fmt;

/// Non-fatal conditions under which a unit is left untouched.
/// These should be reported to the user, but are not failures.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The unit is a module and module processing was not requested
    ModuleNotProcessed { location: String },
    /// The unit is a module without a version of its own
    InheritedVersion { location: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ModuleNotProcessed { location } => {
                write!(
                    f,
                    "Version of module '{}' will not be processed. By default, only the parent project is processed; if otherwise desired, use the `--process-module` flag",
                    location
                )
            }
            BoundaryWarning::InheritedVersion { location } => {
                write!(
                    f,
                    "Version of module '{}' is inherited from its parent, thus will not be processed independently",
                    location
                )
            }
        }
    }
}
