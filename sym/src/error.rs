use thiserror::Error;

/// Misuse of the recording protocol. None of these stop the assembly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("Module closed with a file that is not the current module")]
    ModuleMismatch,

    #[error("No module opened")]
    NoModuleOpened,

    #[error("Module closed before function end")]
    ModuleClosedInFunction,

    #[error("Not inside a function")]
    NotInFunction,
}

impl Violation {
    /// Mismatched closes are ignored without a diagnostic.
    pub fn is_silent(&self) -> bool {
        matches!(self, Violation::ModuleMismatch)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not open sym file {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write sym file {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to open config file: {0}")]
    ConfigOpen(String, #[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(String, #[source] serde_yaml::Error),
}
