//! Writer for the nocash `.sym` format.
//!
//! ```text
//! 00000000 0
//! 00001000 main,00000020
//! 00001010 loop
//! 00001020 .dbl:0004
//! ```
//!
//! The file is closed by a single `0x1A` byte.

use std::io::{self, Write};

use crate::module::{DataEntry, Module, Symbol};

/// One output line. Ordered by address, then by text.
///
/// Addresses are kept as the signed 32-bit value that is printed, so
/// `0x80000000` and up sort before the low half.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    pub address: i32,
    pub text: String,
}

impl Entry {
    fn symbol(module: &Module, sym: &Symbol, version: u32) -> Self {
        let size = module.function_at(sym.address).map_or(0, |func| func.size);
        let text = if size != 0 && version >= 2 {
            format!("{},{:08X}", sym.name, size as u32)
        } else {
            sym.name.clone()
        };
        Entry {
            address: sym.address as i32,
            text,
        }
    }

    fn data(data: &DataEntry) -> Self {
        Entry {
            address: data.address as i32,
            text: format!(".{}:{:04X}", data.kind, data.size as u32),
        }
    }
}

/// Collects every symbol and data entry of every module, sorted.
pub fn entries(modules: &[Module], version: u32) -> Vec<Entry> {
    let mut entries = vec![];
    for module in modules {
        entries.extend(module.symbols().map(|sym| Entry::symbol(module, sym, version)));
        entries.extend(module.data().map(Entry::data));
    }
    entries.sort();
    entries
}

pub struct NocashWriter<W: Write> {
    out: W,
}

impl<W: Write> NocashWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out, "00000000 0")
    }

    pub fn entry(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(self.out, "{:08X} {}", entry.address as u32, entry.text)
    }

    /// Writes the terminator and hands back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(b"\x1A")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

pub fn write_sym<W: Write>(out: W, entries: &[Entry]) -> io::Result<W> {
    let mut writer = NocashWriter::new(out);
    writer.header()?;
    for entry in entries {
        writer.entry(entry)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileNames;
    use crate::module::DataKind;

    fn render(entries: &[Entry]) -> String {
        let bytes = write_sym(Vec::new(), entries).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    fn entry(address: i32, text: &str) -> Entry {
        Entry {
            address,
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_file_has_sentinel_and_terminator() {
        assert_eq!(render(&[]), "00000000 0\n\x1A");
    }

    #[test]
    fn same_address_sorted_by_text() {
        let mut list = vec![entry(0x20, "beta"), entry(0x20, "alpha"), entry(0x10, "zeta")];
        list.sort();
        assert_eq!(
            render(&list),
            "00000000 0\n00000010 zeta\n00000020 alpha\n00000020 beta\n\x1A"
        );
    }

    #[test]
    fn high_addresses_sort_first() {
        let mut a = Module::new(None);
        for (address, name) in [(0x1F80_1000, "io"), (0x8001_0000, "main"), (-1, "top")] {
            a.push_symbol(Symbol {
                address,
                name: name.to_string(),
            });
        }
        a.push_symbol(Symbol {
            address: 0xFFFF_FFFF,
            name: "last".to_string(),
        });
        let list = entries(&[a], 2);
        assert_eq!(
            render(&list),
            "00000000 0\n80010000 main\nFFFFFFFF last\nFFFFFFFF top\n1F801000 io\n\x1A"
        );
    }

    #[test]
    fn negative_values_wrap_to_32_bits() {
        assert_eq!(render(&[entry(-1, "x")]), "00000000 0\nFFFFFFFF x\n\x1A");
    }

    macro_rules! data_tag {
        ($($name:ident: $kind:expr, $size:expr => $text:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let data = DataEntry { address: 0, size: $size, kind: $kind };
                    assert_eq!(Entry::data(&data).text, $text);
                }
            )*
        }
    }

    data_tag! {
        tag_byte: DataKind::Byte, 0x10 => ".byt:0010",
        tag_half: DataKind::Half, 2 => ".wrd:0002",
        tag_word: DataKind::Word32, 4 => ".dbl:0004",
        tag_ascii: DataKind::Ascii, 0xABC => ".asc:0ABC",
        tag_wide: DataKind::Byte, 0x12345 => ".byt:12345",
    }

    fn module_with_function(size: i64) -> Module {
        let mut files = FileNames::new();
        let mut module = Module::new(None);
        module.add_address(0x1000, &mut files, &("a.s", 1usize));
        module.push_symbol(Symbol {
            address: 0x1000,
            name: "foo".to_string(),
        });
        let idx = module.push_function(0x1000);
        module.function_mut(idx).unwrap().size = size;
        module
    }

    #[test]
    fn function_size_needs_version_2() {
        let module = module_with_function(0x20);
        assert_eq!(Entry::symbol(&module, &symbol_of(&module), 2).text, "foo,00000020");
        assert_eq!(Entry::symbol(&module, &symbol_of(&module), 1).text, "foo");
    }

    #[test]
    fn zero_size_function_is_plain() {
        let module = module_with_function(0);
        assert_eq!(Entry::symbol(&module, &symbol_of(&module), 2).text, "foo");
    }

    fn symbol_of(module: &Module) -> Symbol {
        module.symbols().next().unwrap().clone()
    }

    #[test]
    fn entries_merge_modules() {
        let mut a = Module::new(None);
        a.push_data(DataEntry {
            address: 0x30,
            size: 1,
            kind: DataKind::Byte,
        });
        let mut b = Module::new(None);
        b.push_symbol(Symbol {
            address: 0x10,
            name: "start".to_string(),
        });
        let list = entries(&[a, b], 2);
        assert_eq!(list, vec![entry(0x10, "start"), entry(0x30, ".byt:0001")]);
    }
}
