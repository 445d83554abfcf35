use color_print::cformat;
use nocash_sym::{Diag, FileIds, SymbolData};

/// Prints every recorded entry with the source line it came from.
pub fn print_dump<D: Diag>(syms: &SymbolData<D>, ids: &FileIds) {
    for (idx, module) in syms.modules().iter().enumerate() {
        let title = match module.file().and_then(|id| ids.name(id)) {
            Some(name) => name.to_string(),
            None => format!("module {}", idx),
        };
        println!(
            "{}+------[{}]{}",
            "-".repeat(19),
            title,
            "-".repeat(45usize.saturating_sub(title.len()))
        );

        let origin = |address: i64| match syms.source_of(idx, address) {
            Some((file, line)) => format!("{}:{}", file, line),
            None => "?".to_string(),
        };

        for sym in module.symbols() {
            let label = match module.function_at(sym.address) {
                Some(func) => cformat!("<g>{}:</> <c>[{:X}]</>", sym.name, func.size),
                None => cformat!("<g>{}:</>", sym.name),
            };
            println!("[{:08X}]{:9}| {} ; {}", sym.address as u32, "", label, origin(sym.address));
        }
        for data in module.data() {
            let decl = cformat!("<y>.{} {:04X}</>", data.kind, data.size as u32);
            println!("[{:08X}]{:9}| {} ; {}", data.address as u32, "", decl, origin(data.address));
        }
    }
    println!("-------------------+-----------------------------------------------------");
}
