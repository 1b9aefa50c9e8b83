//! Filters that select tweets matching a condition.
//!
//! This module contains functions that filter a list of tweets by author, by
//! timespan, or by keyword containment. Every filter preserves the relative
//! order of the input, returns each qualifying tweet at most once, and never
//! mutates the list it was given. Filters are total and idempotent: running
//! one twice with the same arguments gives the same result as running it
//! once.

use log::debug;

use crate::timespan::Timespan;
use crate::tweet::Tweet;

/// Finds tweets written by a particular user.
///
/// Author handles are case-insensitive, so `"ALYSSA"` and `"alyssa"` select
/// the same tweets.
///
/// # Parameters
///
/// - `tweets`: List of tweets with distinct ids; not modified
/// - `username`: Handle to select by (without the `@` sigil)
///
/// # Returns
///
/// All and only the tweets whose author is `username`, in the same order as
/// the input. Empty when no tweet matches.
pub fn written_by(tweets: &[Tweet], username: &str) -> Vec<Tweet> {
    let wanted = username.to_lowercase();
    let matched: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| tweet.author.to_lowercase() == wanted)
        .cloned()
        .collect();

    debug!(
        "written_by({}) matched {} of {} tweets",
        username,
        matched.len(),
        tweets.len()
    );
    matched
}

/// Finds tweets that were sent during a particular timespan.
///
/// The timespan is inclusive at both ends: a tweet whose timestamp equals
/// the start or the end of the span is included.
///
/// # Parameters
///
/// - `tweets`: List of tweets with distinct ids; not modified
/// - `timespan`: Interval to select by
///
/// # Returns
///
/// All and only the tweets sent during `timespan`, in the same order as the
/// input.
pub fn in_timespan(tweets: &[Tweet], timespan: &Timespan) -> Vec<Tweet> {
    let matched: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| timespan.contains(tweet.timestamp))
        .cloned()
        .collect();

    debug!(
        "in_timespan({}) matched {} of {} tweets",
        timespan,
        matched.len(),
        tweets.len()
    );
    matched
}

/// Finds tweets whose text contains at least one of the given words.
///
/// Matching is case-insensitive substring containment, not whole-word: the
/// word `"talk"` matches a tweet containing `"talking"`. A tweet matching
/// several words still appears only once in the result.
///
/// # Parameters
///
/// - `tweets`: List of tweets with distinct ids; not modified
/// - `words`: Words to search for in tweet text
///
/// # Returns
///
/// All and only the tweets containing at least one word, in the same order
/// as the input. Empty when `words` is empty or nothing matches.
pub fn containing(tweets: &[Tweet], words: &[&str]) -> Vec<Tweet> {
    // Lowercase the needles once up front instead of per tweet
    let needles: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();

    let matched: Vec<Tweet> = tweets
        .iter()
        .filter(|tweet| {
            let text = tweet.text.to_lowercase();
            needles.iter().any(|needle| text.contains(needle))
        })
        .cloned()
        .collect();

    debug!(
        "containing({:?}) matched {} of {} tweets",
        words,
        matched.len(),
        tweets.len()
    );
    matched
}
