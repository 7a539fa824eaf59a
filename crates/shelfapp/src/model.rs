//! # Domain Model
//!
//! The catalog is a map from [`BookId`] to [`Book`]. It is loaded and saved as a
//! whole; nothing below the store ever sees a partial catalog.
//!
//! ## On-Disk Shape
//!
//! ```text
//! {
//!     "1": {
//!         "title": "Poems",
//!         "author": "Pushkin",
//!         "year": "1825",
//!         "status": "available"
//!     }
//! }
//! ```
//!
//! Keys are the decimal form of a positive integer. [`BookId`] refuses anything
//! that would not print back identically (`"01"`, `"+1"`, `"0"`), so a load
//! followed by a save never rewrites keys.
//!
//! ## Status
//!
//! Only the two canonical values are ever written. Files produced by the older
//! Russian-language tracker (`"в наличии"`, `"выдана"`) are accepted on load and
//! rewritten canonically on the next save.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a book: a positive integer, stored as its decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u64);

impl BookId {
    pub const FIRST: BookId = BookId(1);

    /// Returns `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && !s.starts_with('0');
        if !canonical {
            return Err(format!("not a positive integer id: {:?}", s));
        }
        s.parse::<u64>()
            .map(BookId)
            .map_err(|e| format!("id out of range: {:?} ({})", s, e))
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[serde(alias = "в наличии")]
    Available,
    #[serde(alias = "выдана")]
    CheckedOut,
}

impl Default for Status {
    fn default() -> Self {
        Self::Available
    }
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Case-insensitive; accepts the canonical names, their spelled-out forms
    /// and the legacy localized labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(Status::Available),
            "checked-out" | "checked out" | "checked_out" | "checkedout" | "выдана" => {
                Ok(Status::CheckedOut)
            }
            _ => Err(s.to_string()),
        }
    }
}

/// Fields a search may compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Title,
    Author,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Author, SearchField::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Year => "year",
        }
    }

    pub fn value_of(self, book: &Book) -> &str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Year => &book.year,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Free text; not validated as a number.
    pub year: String,
    pub status: Status,
}

impl Book {
    /// Builds an available book, trimming title and author.
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year: year.to_string(),
            status: Status::Available,
        }
    }
}

/// A book together with the id it is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookEntry {
    pub id: BookId,
    #[serde(flatten)]
    pub book: Book,
}

impl BookEntry {
    pub fn new(id: BookId, book: Book) -> Self {
        Self { id, book }
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.book.title, self.book.author, self.book.year, self.book.status
        )
    }
}

pub type Catalog = BTreeMap<BookId, Book>;

/// Entries in catalog order (ascending id).
pub fn entries(catalog: &Catalog) -> Vec<BookEntry> {
    catalog
        .iter()
        .map(|(id, book)| BookEntry::new(*id, book.clone()))
        .collect()
}
