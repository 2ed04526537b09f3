use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a collectable item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn to_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<ItemId> for u64 {
    fn from(from: ItemId) -> Self {
        from.0
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item category offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub image_url: String,
}
