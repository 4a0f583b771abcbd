//! Record stream: a flat sequence of typed items.
//!
//! Writers push items in a fixed order and readers pull them back in the
//! same order. Keywords and context keys are written as strings so a stream
//! can be loaded into an interner other than the one that produced it.

use serde::{Deserialize, Serialize};

use super::header::{HEADER_SIZE, Header};
use super::ArchiveError;
use crate::{ContextKey, Interner, Keyword};

/// One record in the stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    /// Kind tag selecting a reconstruction path.
    Tag(String),
    Bool(bool),
    Unsigned(u64),
    Signed(i128),
    Str(String),
    /// Context key as its path segments, root first.
    Key(Vec<String>),
}

impl Item {
    fn describe(&self) -> &'static str {
        match self {
            Self::Tag(_) => "tag",
            Self::Bool(_) => "bool",
            Self::Unsigned(_) => "unsigned",
            Self::Signed(_) => "signed",
            Self::Str(_) => "string",
            Self::Key(_) => "key",
        }
    }
}

/// Output archive.
#[derive(Clone, Debug, Default)]
pub struct OArchive {
    items: Vec<Item>,
}

impl OArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_tag(&mut self, tag: &str) -> &mut Self {
        self.items.push(Item::Tag(tag.to_owned()));
        self
    }

    pub fn put_bool(&mut self, value: bool) -> &mut Self {
        self.items.push(Item::Bool(value));
        self
    }

    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.items.push(Item::Unsigned(value));
        self
    }

    pub fn put_i128(&mut self, value: i128) -> &mut Self {
        self.items.push(Item::Signed(value));
        self
    }

    pub fn put_str(&mut self, value: &str) -> &mut Self {
        self.items.push(Item::Str(value.to_owned()));
        self
    }

    pub fn put_keyword(&mut self, interner: &Interner, kw: Keyword) -> &mut Self {
        self.put_str(interner.resolve(kw))
    }

    pub fn put_key(&mut self, interner: &Interner, key: ContextKey) -> &mut Self {
        let path = interner
            .key_strings(key)
            .into_iter()
            .map(str::to_owned)
            .collect();
        self.items.push(Item::Key(path));
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode the stream behind a checksummed header.
    pub fn finish(&self) -> Vec<u8> {
        let payload = postcard::to_allocvec(&self.items).expect("serialization should not fail");
        let header = Header::for_payload(&payload);

        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&payload);
        out
    }
}

/// Input archive.
#[derive(Clone, Debug)]
pub struct IArchive {
    items: Vec<Item>,
    pos: usize,
}

impl IArchive {
    /// Read items back from an in-memory stream.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items, pos: 0 }
    }

    /// Validate the header and decode the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        let header = Header::from_bytes(bytes)?;
        let payload = &bytes[HEADER_SIZE..];
        header.validate(payload)?;

        let items: Vec<Item> = postcard::from_bytes(payload)?;
        Ok(Self::from_items(items))
    }

    /// Items not yet consumed.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.pos
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek(&self) -> Option<&Item> {
        self.items.get(self.pos)
    }

    fn next(&mut self, expected: &'static str) -> Result<&Item, ArchiveError> {
        let item = self
            .items
            .get(self.pos)
            .ok_or(ArchiveError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(item)
    }

    fn mismatch(expected: &'static str, found: &Item) -> ArchiveError {
        ArchiveError::UnexpectedItem {
            expected,
            found: found.describe(),
        }
    }

    pub fn get_tag(&mut self) -> Result<String, ArchiveError> {
        match self.next("tag")? {
            Item::Tag(tag) => Ok(tag.clone()),
            other => Err(Self::mismatch("tag", other)),
        }
    }

    pub fn get_bool(&mut self) -> Result<bool, ArchiveError> {
        match self.next("bool")? {
            Item::Bool(value) => Ok(*value),
            other => Err(Self::mismatch("bool", other)),
        }
    }

    pub fn get_u64(&mut self) -> Result<u64, ArchiveError> {
        match self.next("unsigned")? {
            Item::Unsigned(value) => Ok(*value),
            other => Err(Self::mismatch("unsigned", other)),
        }
    }

    pub fn get_u32(&mut self) -> Result<u32, ArchiveError> {
        let value = self.get_u64()?;
        u32::try_from(value).map_err(|_| ArchiveError::OutOfRange {
            value,
            target: "u32",
        })
    }

    pub fn get_usize(&mut self) -> Result<usize, ArchiveError> {
        let value = self.get_u64()?;
        usize::try_from(value).map_err(|_| ArchiveError::OutOfRange {
            value,
            target: "usize",
        })
    }

    pub fn get_i128(&mut self) -> Result<i128, ArchiveError> {
        match self.next("signed")? {
            Item::Signed(value) => Ok(*value),
            other => Err(Self::mismatch("signed", other)),
        }
    }

    pub fn get_str(&mut self) -> Result<String, ArchiveError> {
        match self.next("string")? {
            Item::Str(value) => Ok(value.clone()),
            other => Err(Self::mismatch("string", other)),
        }
    }

    pub fn get_keyword(&mut self, interner: &mut Interner) -> Result<Keyword, ArchiveError> {
        let s = self.get_str()?;
        Ok(interner.intern_owned(s))
    }

    pub fn get_key(&mut self, interner: &mut Interner) -> Result<ContextKey, ArchiveError> {
        let path = match self.next("key")? {
            Item::Key(path) => path.clone(),
            other => return Err(Self::mismatch("key", other)),
        };
        Ok(path
            .iter()
            .fold(ContextKey::ROOT, |parent, seg| interner.key_str(parent, seg)))
    }
}
