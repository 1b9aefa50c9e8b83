//! Aggregate information extracted from a list of tweets.
//!
//! This module contains functions that compute summary information over a
//! list of tweets: the minimum timespan covering every timestamp in the
//! list, and the set of usernames mentioned in tweet text.

use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::timespan::Timespan;
use crate::tweet::Tweet;

/// Matches `@` followed by one or more handle characters. The "not preceded
/// by a handle character" half of the mention rule is checked manually in
/// [`get_mentioned_users`], since the regex engine has no look-behind.
fn mention_regex() -> &'static Regex {
    static MENTION: OnceLock<Regex> = OnceLock::new();
    // Pattern is a literal; compilation cannot fail.
    MENTION.get_or_init(|| Regex::new(r"@([A-Za-z0-9_-]+)").expect("valid mention pattern"))
}

/// Whether `c` may appear in a Twitter username.
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Gets the time period spanned by a list of tweets.
///
/// The result is the minimum-length timespan that contains the timestamp of
/// every tweet in the list, found in a single pass without sorting. When all
/// tweets share one timestamp the span has zero width.
///
/// # Parameters
///
/// - `tweets`: List of tweets with distinct ids; not modified
///
/// # Returns
///
/// - `Ok(Timespan)`: The interval from the earliest to the latest timestamp
/// - `Err`: If the list is empty, the library's only failure mode
pub fn get_timespan(
    tweets: &[Tweet],
) -> Result<Timespan, Box<dyn std::error::Error + Send + Sync>> {
    // The spanned interval of an empty list is undefined
    let first = match tweets.first() {
        Some(tweet) => tweet,
        None => return Err("List of tweets cannot be empty".into()),
    };

    let mut earliest = first.timestamp;
    let mut latest = first.timestamp;

    for tweet in tweets {
        if tweet.timestamp < earliest {
            earliest = tweet.timestamp;
        }
        if tweet.timestamp > latest {
            latest = tweet.timestamp;
        }
    }

    debug!(
        "Computed timespan over {} tweets: [{}...{}]",
        tweets.len(),
        earliest,
        latest
    );

    // earliest <= latest holds, so construction cannot fail
    Timespan::new(earliest, latest)
}

/// Gets the usernames mentioned in a list of tweets.
///
/// A username-mention is `@` followed by one or more handle characters
/// (ASCII letters, digits, underscore, hyphen), where the character
/// immediately preceding the `@` is not itself a handle character. The
/// boundary rule is what keeps an email address like `bitdiddle@mit.edu`
/// from being read as a mention of `mit`.
///
/// Usernames are case-insensitive, so every extracted handle is lowercased
/// before insertion and the returned set contains each username at most
/// once, regardless of how it was capitalized in the text or how many times
/// it appeared.
///
/// # Parameters
///
/// - `tweets`: List of tweets with distinct ids; not modified
///
/// # Returns
///
/// The set of lowercased usernames mentioned across all tweets. Empty when
/// no tweet mentions anyone. The set has no defined iteration order.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tweetsift::{get_mentioned_users, Tweet};
///
/// let tweets = vec![Tweet::new(
///     1,
///     "userD",
///     "Contact me at user@domain.com @userE.",
///     Utc::now(),
/// )];
/// let mentioned = get_mentioned_users(&tweets);
/// assert!(mentioned.contains("usere"));
/// assert_eq!(mentioned.len(), 1);
/// ```
pub fn get_mentioned_users(tweets: &[Tweet]) -> HashSet<String> {
    let mut mentioned = HashSet::new();

    for tweet in tweets {
        for found in mention_regex().find_iter(&tweet.text) {
            // Reject matches embedded in a longer run of handle characters,
            // e.g. the domain part of an email address
            if let Some(preceding) = tweet.text[..found.start()].chars().next_back() {
                if is_handle_char(preceding) {
                    continue;
                }
            }
            // Skip the @ sigil; lowercase before inserting so duplicates
            // that differ only in case collapse
            let username = &tweet.text[found.start() + 1..found.end()];
            mentioned.insert(username.to_lowercase());
        }
    }

    debug!(
        "Extracted {} mentioned users from {} tweets",
        mentioned.len(),
        tweets.len()
    );
    mentioned
}
