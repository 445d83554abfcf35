use nocash_sym::{Cursor, DataKind, Diag, FileIds, SymbolData};
use std::num::ParseIntError;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Command

/// One line of a recording trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    File(String),
    Line(usize),
    Module(String),
    EndModule(String),
    Label(i64, String),
    Data(i64, i64, DataKind),
    Func(i64),
    EndFunc(i64),
    Enable,
    Disable,
}

impl Command {
    /// `Ok(None)` for blank and comment-only lines.
    pub fn parse(code: &str) -> Result<Option<Command>, Error> {
        let code = match code.split_once('#') {
            Some((head, _)) => head,
            None => code,
        };
        let words: Vec<&str> = code.split_whitespace().collect();
        let Some((cmd, args)) = words.split_first() else {
            return Ok(None);
        };

        // Get argument by index, parsed with the given function
        // Example: arg!(0, parse_with_prefix, "address") -> i64
        macro_rules! arg {
            ($index:expr) => {
                args.get($index).ok_or(Error::MissingArgument)?.to_string()
            };
            ($index:expr, $parse:expr, $what:expr) => {{
                let arg: &str = args.get($index).copied().ok_or(Error::MissingArgument)?;
                $parse(arg).map_err(|_| Error::ParseArgument(arg.to_string(), $what.to_string()))?
            }};
        }

        let cmd = match *cmd {
            "file" => Command::File(arg!(0)),
            "line" => Command::Line(arg!(0, |s: &str| s.parse::<usize>(), "line")),
            "module" => Command::Module(arg!(0)),
            "endmodule" => Command::EndModule(arg!(0)),
            "label" => Command::Label(arg!(0, parse_with_prefix, "address"), arg!(1)),
            "data" => Command::Data(
                arg!(0, parse_with_prefix, "address"),
                arg!(1, parse_with_prefix, "size"),
                arg!(2, |s: &str| s.parse::<DataKind>(), "data kind"),
            ),
            "func" => Command::Func(arg!(0, parse_with_prefix, "address")),
            "endfunc" => Command::EndFunc(arg!(0, parse_with_prefix, "address")),
            "enable" => Command::Enable,
            "disable" => Command::Disable,
            _ => return Err(Error::UnknownCommand(cmd.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn parse_with_prefix(s: &str) -> Result<i64, ParseIntError> {
    let (neg, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (radix, num) = match s.get(..2) {
        Some("0b") => (2, &s[2..]),
        Some("0o") => (8, &s[2..]),
        Some("0x") => (16, &s[2..]),
        _ => (10, s),
    };
    let val = i64::from_str_radix(num, radix)?;
    Ok(if neg { -val } else { val })
}

// ----------------------------------------------------------------------------
// Replay

/// Feeds trace commands into a [`SymbolData`].
///
/// Until a `file` command shows up, the trace itself is the source position:
/// its path and the line number of each command.
pub struct Replay {
    cursor: Cursor,
    explicit: bool,
    ids: FileIds,
}

impl Replay {
    pub fn new() -> Self {
        Replay {
            cursor: Cursor::default(),
            explicit: false,
            ids: FileIds::new(),
        }
    }

    /// Start reading another trace file.
    pub fn begin(&mut self, path: &str) {
        self.cursor = Cursor::new(path, 0);
        self.explicit = false;
    }

    pub fn step<D: Diag>(&mut self, syms: &mut SymbolData<D>, line_idx: usize, cmd: Command) {
        if !self.explicit {
            self.cursor.set_line(line_idx + 1);
        }
        match cmd {
            Command::File(path) => {
                self.cursor.set_file(path);
                self.explicit = true;
            }
            Command::Line(line) => {
                self.cursor.set_line(line);
                self.explicit = true;
            }
            Command::Module(name) => {
                syms.start_module(self.ids.id(&name));
            }
            Command::EndModule(name) => {
                // Protocol misuse is already reported by the recorder
                let _ = syms.end_module(Some(self.ids.id(&name)));
            }
            Command::Label(addr, name) => syms.add_label(&self.cursor, addr, &name),
            Command::Data(addr, size, kind) => syms.add_data(&self.cursor, addr, size, kind),
            Command::Func(addr) => syms.start_function(&self.cursor, addr),
            Command::EndFunc(addr) => {
                let _ = syms.end_function(addr);
            }
            Command::Enable => syms.set_enabled(true),
            Command::Disable => syms.set_enabled(false),
        }
    }

    pub fn ids(&self) -> &FileIds {
        &self.ids
    }
}
