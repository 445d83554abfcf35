use nocash_sym::Msg;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),

    #[error("More argument required")]
    MissingArgument,

    #[error("Cannot parse `{0}` as {1}")]
    ParseArgument(String, String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),
}

impl Error {
    /// Print error with the trace file location and line content
    pub fn print_diag(&self, file: &str, line_idx: usize, raw: &str) {
        // line_idx is 0-based, display as 1-based
        Msg::Error(self.to_string()).print_at(file, line_idx + 1, raw);
    }
}
