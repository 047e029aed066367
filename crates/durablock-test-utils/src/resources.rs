use durablock_protocol::ResourceProvider;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};

/// Resources held in memory, recording every name that was opened.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Vec<u8>>,
    opened: RefCell<Vec<String>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.to_string(), contents.into());
        self
    }

    /// How many times `name` was requested, whether or not it exists.
    pub fn open_count(&self, name: &str) -> usize {
        self.opened
            .borrow()
            .iter()
            .filter(|opened| opened.as_str() == name)
            .count()
    }
}

impl ResourceProvider for MemoryResources {
    fn open(&self, name: &str) -> Option<Box<dyn Read + '_>> {
        self.opened.borrow_mut().push(name.to_string());
        let bytes = self.files.get(name)?;
        Some(Box::new(Cursor::new(bytes.as_slice())))
    }
}

/// Every resource exists but fails after yielding a prefix.
#[derive(Debug, Clone, Default)]
pub struct FailingResources {
    prefix: Vec<u8>,
}

impl FailingResources {
    pub fn after(prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ResourceProvider for FailingResources {
    fn open(&self, _name: &str) -> Option<Box<dyn Read + '_>> {
        Some(Box::new(FailingReader::after(self.prefix.clone())))
    }
}

/// Reader that returns `prefix` and then an I/O error.
#[derive(Debug)]
pub struct FailingReader {
    prefix: Cursor<Vec<u8>>,
}

impl FailingReader {
    pub fn after(prefix: Vec<u8>) -> Self {
        Self {
            prefix: Cursor::new(prefix),
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.prefix.read(buf)?;
        if read > 0 {
            return Ok(read);
        }
        Err(io::Error::other("resource stream broke"))
    }
}
