use indexmap::{IndexMap, IndexSet};
use strum::{Display, EnumString};

use crate::files::{FileId, FileNames};
use crate::source::SourcePos;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub address: i64,
    pub name: String,
}

/// Element type of a data declaration, named by its nocash tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DataKind {
    #[strum(serialize = "byt")]
    Byte,
    #[strum(serialize = "wrd")]
    Half,
    #[strum(serialize = "dbl")]
    Word32,
    #[strum(serialize = "asc")]
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataEntry {
    pub address: i64,
    pub size: i64,
    pub kind: DataKind,
}

/// A function span. `size` stays 0 until the function is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    pub address: i64,
    pub size: i64,
}

/// File and line where an address was first recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressInfo {
    pub address: i64,
    pub file: usize,
    pub line: usize,
}

/// Everything recorded for one source file stream.
#[derive(Debug, Clone, Default)]
pub struct Module {
    file: Option<FileId>,
    symbols: IndexSet<Symbol>,
    data: IndexSet<DataEntry>,
    functions: Vec<Function>,
    address_info: IndexMap<i64, AddressInfo>,
}

impl Module {
    pub fn new(file: Option<FileId>) -> Self {
        Module {
            file,
            ..Default::default()
        }
    }

    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn data(&self) -> impl ExactSizeIterator<Item = &DataEntry> {
        self.data.iter()
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn address_infos(&self) -> impl ExactSizeIterator<Item = &AddressInfo> {
        self.address_info.values()
    }

    pub fn address_info(&self, address: i64) -> Option<&AddressInfo> {
        self.address_info.get(&address)
    }

    /// First function starting at `address`, in insertion order.
    pub fn function_at(&self, address: i64) -> Option<&Function> {
        self.functions.iter().find(|func| func.address == address)
    }

    pub(crate) fn has_symbol(&self, sym: &Symbol) -> bool {
        self.symbols.contains(sym)
    }

    pub(crate) fn push_symbol(&mut self, sym: Symbol) {
        self.symbols.insert(sym);
    }

    pub(crate) fn has_data(&self, data: &DataEntry) -> bool {
        self.data.contains(data)
    }

    pub(crate) fn push_data(&mut self, data: DataEntry) {
        self.data.insert(data);
    }

    pub(crate) fn push_function(&mut self, address: i64) -> usize {
        self.functions.push(Function { address, size: 0 });
        self.functions.len() - 1
    }

    pub(crate) fn function_mut(&mut self, idx: usize) -> Option<&mut Function> {
        self.functions.get_mut(idx)
    }

    /// Records where `address` came from. The first record for an address
    /// is kept; later calls only return its index.
    pub(crate) fn add_address(
        &mut self,
        address: i64,
        files: &mut FileNames,
        pos: &dyn SourcePos,
    ) -> usize {
        if let Some(idx) = self.address_info.get_index_of(&address) {
            return idx;
        }
        let info = AddressInfo {
            address,
            file: files.intern(pos.file()),
            line: pos.line(),
        };
        self.address_info.insert_full(address, info).0
    }
}
