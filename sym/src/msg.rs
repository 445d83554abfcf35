use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn is_error(&self) -> bool {
        matches!(self, Msg::Error(_))
    }

    pub fn print(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// Print with the offending source line underneath.
    pub fn print_at(&self, file: &str, line_no: usize, raw: &str) {
        self.print();
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_no, raw);
        cprintln!("      <blue>|</>");
    }
}

/// Receives non-fatal diagnostics.
pub trait Diag {
    fn report(&mut self, msg: Msg);
}

/// Prints every message to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Diag for Console {
    fn report(&mut self, msg: Msg) {
        msg.print();
    }
}

/// Keeps every message for later inspection.
#[derive(Debug, Default, Clone)]
pub struct Collect(pub Vec<Msg>);

impl Diag for Collect {
    fn report(&mut self, msg: Msg) {
        self.0.push(msg);
    }
}

impl Collect {
    pub fn has_error(&self) -> bool {
        has_error(&self.0)
    }
}

pub fn has_error(msgs: &[Msg]) -> bool {
    msgs.iter().any(Msg::is_error)
}
