//! Debug symbol recording for the assembler.
//!
//! Labels, data declarations and function spans are recorded per source
//! module while assembling, then written out as a nocash `.sym` file.

pub mod config;
pub mod error;
pub mod files;
pub mod module;
pub mod msg;
pub mod nocash;
pub mod source;
pub mod symbols;

pub use config::SymConfig;
pub use error::{Error, Violation};
pub use files::{FileId, FileIds, FileNames};
pub use module::{AddressInfo, DataEntry, DataKind, Function, Module, Symbol};
pub use msg::{Collect, Console, Diag, Msg};
pub use source::{Cursor, SourcePos};
pub use symbols::SymbolData;
