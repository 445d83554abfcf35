use nocash_sym::{Collect, Cursor, DataKind, FileIds, SymbolData};
use std::path::PathBuf;

fn recorder(version: u32, output: PathBuf) -> SymbolData<Collect> {
    let mut syms = SymbolData::with_diag(Collect::default());
    syms.clear();
    syms.set_enabled(true);
    syms.set_output(Some(output));
    syms.set_version(version);
    syms
}

fn read(path: &PathBuf) -> String {
    String::from_utf8(std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn full_pass() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("game.sym");
    let mut syms = recorder(2, out.clone());
    let mut ids = FileIds::new();
    let pos = Cursor::new("main.s", 1);

    let f1 = ids.id("main.s");
    syms.start_module(f1);
    syms.add_label(&pos, 0x1000, "main");
    syms.start_function(&pos, 0x1000);
    syms.add_label(&pos, 0x1010, "loop");
    syms.end_function(0x1020).unwrap();
    syms.add_data(&pos, 0x1020, 4, DataKind::Word32);
    syms.end_module(Some(f1)).unwrap();
    syms.write().unwrap();

    assert_eq!(
        read(&out),
        "00000000 0\n00001000 main,00000020\n00001010 loop\n00001020 .dbl:0004\n\x1A"
    );
    assert!(syms.diag().0.is_empty());
}

#[test]
fn version_1_omits_function_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("v1.sym");
    let mut syms = recorder(1, out.clone());
    let pos = Cursor::new("main.s", 1);

    syms.add_label(&pos, 0x1000, "foo");
    syms.start_function(&pos, 0x1000);
    syms.end_function(0x1020).unwrap();
    syms.write().unwrap();

    assert_eq!(read(&out), "00000000 0\n00001000 foo\n\x1A");
}

#[test]
fn labels_sorted_across_modules() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("merge.sym");
    let mut syms = recorder(2, out.clone());
    let mut ids = FileIds::new();
    let pos = Cursor::new("a.s", 1);

    let a = ids.id("a.s");
    let b = ids.id("b.s");
    syms.start_module(a);
    syms.add_label(&pos, 0x20, "beta");
    syms.end_module(Some(a)).unwrap();
    syms.start_module(b);
    syms.add_label(&pos, 0x20, "alpha");
    syms.add_label(&pos, 0x10, "first");
    syms.end_module(Some(b)).unwrap();
    syms.write().unwrap();

    assert_eq!(
        read(&out),
        "00000000 0\n00000010 first\n00000020 alpha\n00000020 beta\n\x1A"
    );
}

#[test]
fn disabled_recording_still_exports() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.sym");
    let mut syms = recorder(2, out.clone());
    let pos = Cursor::new("a.s", 1);

    syms.set_enabled(false);
    syms.add_label(&pos, 0x20, "hidden");
    syms.write().unwrap();

    assert_eq!(read(&out), "00000000 0\n\x1A");
}

#[test]
fn rewrite_reflects_current_state() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("again.sym");
    let mut syms = recorder(2, out.clone());
    let pos = Cursor::new("a.s", 1);

    syms.add_label(&pos, 0x20, "one");
    syms.write().unwrap();
    syms.add_label(&pos, 0x30, "two");
    syms.write().unwrap();

    assert_eq!(read(&out), "00000000 0\n00000020 one\n00000030 two\n\x1A");
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("x.sym");
    let mut syms = recorder(2, out.clone());

    assert!(matches!(
        syms.write(),
        Err(nocash_sym::Error::FileCreate(_, _))
    ));
    assert!(syms.diag().has_error());
    assert!(!out.exists());
}
