//! The tweet record type.
//!
//! A [`Tweet`] is a plain immutable record of a single post: a unique id, an
//! author handle, the free-text body, and a creation timestamp. Tweets are
//! created by the caller and passed by reference into the `extract` and
//! `filter` functions; nothing in this library ever mutates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable record of a single tweet.
///
/// Author handles are made up of letters, digits, underscores, and hyphens,
/// and are compared case-insensitively throughout the library (`"Alyssa"`
/// and `"alyssa"` are the same author). The id is expected to be unique
/// within any list handed to the library, but uniqueness is the caller's
/// responsibility and is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tweet {
    /// Unique identifier of the tweet
    pub id: u64,
    /// Handle of the user who wrote the tweet
    pub author: String,
    /// Free-text body of the tweet
    pub text: String,
    /// When the tweet was posted
    pub timestamp: DateTime<Utc>,
}

impl Tweet {
    /// Creates a new tweet record.
    ///
    /// # Parameters
    ///
    /// - `id`: Unique identifier of the tweet
    /// - `author`: Handle of the author (without the `@` sigil)
    /// - `text`: Body text of the tweet
    /// - `timestamp`: When the tweet was posted
    pub fn new(id: u64, author: &str, text: &str, timestamp: DateTime<Utc>) -> Self {
        Tweet {
            id,
            author: author.to_string(),
            text: text.to_string(),
            timestamp,
        }
    }
}

impl fmt::Display for Tweet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}
