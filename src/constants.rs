// src/constants.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Fixed hashtag vocabulary people interact with (50 entries)
pub const HASHTAGS: [&str; 50] = [
    "#love", "#fashion", "#photooftheday", "#beautiful", "#photography",
    "#picoftheday", "#happy", "#follow", "#nature", "#tbt", "#instagram",
    "#travel", "#like4like", "#style", "#repost", "#summer", "#instadaily",
    "#selfie", "#beauty", "#girl", "#friends", "#instalike", "#me",
    "#smile", "#family", "#photo", "#life", "#likeforlike", "#music",
    "#ootd", "#makeup", "#follow4follow", "#amazing", "#igers", "#nofilter",
    "#model", "#sunset", "#beach", "#design", "#motivation", "#instamood",
    "#foodporn", "#lifestyle", "#followforfollow", "#sky", "#l4l", "#f4f",
    "#handmade", "#likeforlikes", "#cat",
];

/// Upper bound (inclusive) of a d100 roll; rolls are drawn from 0..=ROLL_MAX
pub const ROLL_MAX: u32 = 100;

/// Maximum hashtags drawn per person
pub const MAX_TAGS: usize = 8;

/// Roll threshold at or below which an interaction kind is omitted
pub const INTERACTION_SKIP_THRESHOLD: u32 = 13;

/// Maximum count recorded for a single interaction kind
pub const MAX_INTERACTION_COUNT: u32 = 8;

/// Maximum friends drawn per person before reciprocity
pub const MAX_FRIENDS: usize = 10;

/// Roll threshold at or below which a friendship is not reciprocated
pub const RECIPROCITY_THRESHOLD: u32 = 50;

/// Attempts the unique name source makes before giving up
pub const UNIQUE_NAME_ATTEMPTS: usize = 1000;

/// Offset applied to the run seed to derive the independent name stream
pub const NAME_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Default seed for both entry points
pub const DEFAULT_SEED: u64 = 42;

/// Default record count for single-file output
pub const DEFAULT_SINGLE_RECORDS: usize = 200;

/// Default record count for partitioned output
pub const DEFAULT_PARTITIONED_RECORDS: usize = 2000;

/// Default partition count
pub const DEFAULT_PARTITIONS: usize = 10;
