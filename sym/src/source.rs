/// Where the assembler currently is in its input.
pub trait SourcePos {
    fn file(&self) -> &str;
    fn line(&self) -> usize;
}

/// Owned source position that the caller moves along as it reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    file: String,
    line: usize,
}

impl Cursor {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Cursor {
            file: file.into(),
            line,
        }
    }

    pub fn set_file(&mut self, file: impl Into<String>) {
        self.file = file.into();
    }

    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }
}

impl SourcePos for Cursor {
    fn file(&self) -> &str {
        &self.file
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl SourcePos for (&str, usize) {
    fn file(&self) -> &str {
        self.0
    }

    fn line(&self) -> usize {
        self.1
    }
}
