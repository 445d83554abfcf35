use indexmap::IndexSet;

/// Opaque identity of an open source file.
///
/// Only compared for equality. Issued by [`FileIds`], which is owned by
/// whoever manages the lifetime of the files being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

/// Issues one [`FileId`] per distinct key.
#[derive(Debug, Default)]
pub struct FileIds {
    keys: IndexSet<String>,
}

impl FileIds {
    pub fn new() -> Self {
        FileIds {
            keys: IndexSet::new(),
        }
    }

    pub fn id(&mut self, key: &str) -> FileId {
        match self.keys.get_index_of(key) {
            Some(idx) => FileId(idx as u32),
            None => FileId(self.keys.insert_full(key.to_string()).0 as u32),
        }
    }

    pub fn get(&self, key: &str) -> Option<FileId> {
        self.keys.get_index_of(key).map(|idx| FileId(idx as u32))
    }

    pub fn name(&self, id: FileId) -> Option<&str> {
        self.keys.get_index(id.0 as usize).map(|s| s.as_str())
    }
}

/// Global table of source file paths referenced by recorded addresses.
#[derive(Debug, Default, Clone)]
pub struct FileNames(IndexSet<String>);

impl FileNames {
    pub fn new() -> Self {
        FileNames(IndexSet::new())
    }

    /// Returns the index of `path`, appending it if it was never seen.
    pub fn intern(&mut self, path: &str) -> usize {
        match self.0.get_index_of(path) {
            Some(idx) => idx,
            None => self.0.insert_full(path.to_string()).0,
        }
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get_index(idx).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
