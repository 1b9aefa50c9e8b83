//! # Tweetsift Library
//!
//! A Rust library that extracts and filters information from in-memory lists
//! of tweets. The library is a pair of small, stateless function groups: the
//! `extract` module computes aggregate information (the minimum time interval
//! covering every tweet, the set of usernames mentioned in tweet text), and
//! the `filter` module selects order-preserving subsequences of tweets by
//! author, timespan, or keyword containment.
//!
//! ## Features
//!
//! - Minimum bounding timespan over a list of tweets, in one linear pass
//! - Username-mention extraction with email-safe boundary handling
//!   (`user@domain.com` mentions nobody)
//! - Case-insensitive author, timespan, and keyword filters that never
//!   mutate their input
//! - Comprehensive test suite
//!
//! Every function is pure: inputs are read-only, results are freshly
//! allocated, and calls are safe from concurrent threads. The only failure
//! mode in the library is calling [`get_timespan`] on an empty list.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tweetsift::{get_mentioned_users, get_timespan, written_by, Tweet};
//!
//! let tweets = vec![
//!     Tweet::new(
//!         1,
//!         "alyssa",
//!         "is it reasonable to talk about rivest so much?",
//!         Utc.with_ymd_and_hms(2016, 2, 17, 10, 0, 0).unwrap(),
//!     ),
//!     Tweet::new(
//!         2,
//!         "bbitdiddle",
//!         "rivest talk in 30 minutes #hype @alyssa",
//!         Utc.with_ymd_and_hms(2016, 2, 17, 11, 0, 0).unwrap(),
//!     ),
//! ];
//!
//! let span = get_timespan(&tweets).unwrap();
//! assert!(span.start() <= span.end());
//!
//! let mentioned = get_mentioned_users(&tweets);
//! assert!(mentioned.contains("alyssa"));
//!
//! let by_alyssa = written_by(&tweets, "ALYSSA");
//! assert_eq!(by_alyssa.len(), 1);
//! ```

pub mod extract;
pub mod filter;
pub mod timespan;
pub mod tweet;

// Re-export commonly used types and functions
pub use extract::{get_mentioned_users, get_timespan};
pub use filter::{containing, in_timespan, written_by};
pub use timespan::Timespan;
pub use tweet::Tweet;
