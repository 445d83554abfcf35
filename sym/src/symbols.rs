use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::SymConfig;
use crate::error::{Error, Violation};
use crate::files::{FileId, FileNames};
use crate::module::{DataEntry, DataKind, Function, Module, Symbol};
use crate::msg::{Console, Diag, Msg};
use crate::nocash;
use crate::source::SourcePos;

/// Debug symbols recorded during one assembly pass.
///
/// Module 0 is the default module. It is always present and is where
/// recording lands whenever no other module is open.
#[derive(Debug)]
pub struct SymbolData<D: Diag = Console> {
    enabled: bool,
    output: Option<PathBuf>,
    version: u32,
    modules: Vec<Module>,
    files: FileNames,
    current: usize,
    // (module, function) of the open function
    function: Option<(usize, usize)>,
    diag: D,
}

impl SymbolData<Console> {
    pub fn new() -> Self {
        Self::with_diag(Console)
    }
}

impl Default for SymbolData<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Diag> SymbolData<D> {
    pub fn with_diag(diag: D) -> Self {
        SymbolData {
            enabled: true,
            output: None,
            version: SymConfig::default().version,
            modules: vec![Module::new(None)],
            files: FileNames::new(),
            current: 0,
            function: None,
            diag,
        }
    }

    /// Back to a single empty default module. The format version is kept.
    pub fn clear(&mut self) {
        self.enabled = true;
        self.output = None;
        self.modules.clear();
        self.modules.push(Module::new(None));
        self.files.clear();
        self.current = 0;
        self.function = None;
    }

    pub fn configure(&mut self, cfg: &SymConfig) {
        self.enabled = cfg.enabled;
        self.version = cfg.version;
        self.output = cfg.output.clone();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_output(&mut self, output: Option<PathBuf>) {
        self.output = output;
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn diag(&self) -> &D {
        &self.diag
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn current_module(&self) -> usize {
        self.current
    }

    pub fn files(&self) -> &FileNames {
        &self.files
    }

    pub fn open_function(&self) -> Option<&Function> {
        self.function
            .and_then(|(module, func)| self.modules[module].functions().get(func))
    }

    /// File and line where `address` was first recorded in `module`.
    pub fn source_of(&self, module: usize, address: i64) -> Option<(&str, usize)> {
        let info = self.modules.get(module)?.address_info(address)?;
        Some((self.files.get(info.file)?, info.line))
    }

    fn violation(&mut self, violation: Violation) -> Result<(), Violation> {
        if !violation.is_silent() {
            self.diag.report(Msg::Error(violation.to_string()));
        }
        Err(violation)
    }
}

// ----------------------------------------------------------------------------
// Modules

impl<D: Diag> SymbolData<D> {
    /// Makes the module bound to `file` current, creating it on first use.
    /// Returns its index.
    pub fn start_module(&mut self, file: FileId) -> usize {
        self.current = match self.modules.iter().position(|m| m.file() == Some(file)) {
            Some(idx) => idx,
            None => {
                self.modules.push(Module::new(Some(file)));
                self.modules.len() - 1
            }
        };
        log::debug!("module {} ({:?})", self.current, file);
        self.current
    }

    /// Closes the current module if it is bound to `file`. `None` names the
    /// default module, which cannot be closed.
    pub fn end_module(&mut self, file: Option<FileId>) -> Result<(), Violation> {
        if self.modules[self.current].file() != file {
            return self.violation(Violation::ModuleMismatch);
        }
        if self.current == 0 {
            return self.violation(Violation::NoModuleOpened);
        }

        let dangling = self.function.take();
        log::debug!("module {} closed", self.current);
        self.current = 0;

        match dangling {
            Some(_) => self.violation(Violation::ModuleClosedInFunction),
            None => Ok(()),
        }
    }
}

// ----------------------------------------------------------------------------
// Labels & data

impl<D: Diag> SymbolData<D> {
    pub fn add_label(&mut self, pos: &dyn SourcePos, address: i64, name: &str) {
        if !self.enabled {
            return;
        }
        let sym = Symbol {
            address,
            name: name.to_string(),
        };
        if self.modules[self.current].has_symbol(&sym) {
            return;
        }
        self.add_address(pos, address);
        self.modules[self.current].push_symbol(sym);
    }

    pub fn add_data(&mut self, pos: &dyn SourcePos, address: i64, size: i64, kind: DataKind) {
        if !self.enabled {
            return;
        }
        let data = DataEntry {
            address,
            size,
            kind,
        };
        if self.modules[self.current].has_data(&data) {
            return;
        }
        self.add_address(pos, address);
        self.modules[self.current].push_data(data);
    }

    /// Records provenance of `address` in the current module and returns the
    /// index of its entry.
    pub fn add_address(&mut self, pos: &dyn SourcePos, address: i64) -> usize {
        self.modules[self.current].add_address(address, &mut self.files, pos)
    }
}

// ----------------------------------------------------------------------------
// Functions

impl<D: Diag> SymbolData<D> {
    /// Opens a function at `address`. An open function is closed at the
    /// same address first.
    pub fn start_function(&mut self, pos: &dyn SourcePos, address: i64) {
        if self.function.is_some() {
            // Cannot fail: a function is open.
            let _ = self.end_function(address);
        }

        let func = self.modules[self.current].push_function(address);
        self.function = Some((self.current, func));
        self.add_address(pos, address);
        log::trace!("function at 0x{:08X} opened", address);
    }

    pub fn end_function(&mut self, address: i64) -> Result<(), Violation> {
        let Some((module, func)) = self.function.take() else {
            return self.violation(Violation::NotInFunction);
        };
        if let Some(func) = self.modules[module].function_mut(func) {
            func.size = address.wrapping_sub(func.address);
            log::trace!("function at 0x{:08X} closed, size {}", func.address, func.size);
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Export

impl<D: Diag> SymbolData<D> {
    /// Writes the nocash symbol file to the configured output. Does nothing
    /// when no output is set. Failures are also reported as diagnostics.
    pub fn write(&mut self) -> Result<(), Error> {
        let Some(path) = self.output.clone() else {
            return Ok(());
        };
        let name = path.display().to_string();
        let entries = nocash::entries(&self.modules, self.version);

        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => return self.fail(Error::FileCreate(name, e)),
        };
        if let Err(e) = nocash::write_sym(BufWriter::new(file), &entries) {
            return self.fail(Error::FileWrite(name, e));
        }
        log::debug!("wrote {} symbol entries to {}", entries.len(), name);
        Ok(())
    }

    fn fail(&mut self, err: Error) -> Result<(), Error> {
        self.diag.report(Msg::Error(err.to_string()));
        Err(err)
    }
}
