use derive_more::{Deref, From, Into};
use std::io::{self, Write};

/// An owned, growable byte buffer holding one encoded value.
#[derive(From, Into, Deref, PartialEq, Eq, Clone, Default, Debug)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const LEN: usize> From<[u8; LEN]> for Buffer {
    fn from(bytes: [u8; LEN]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
