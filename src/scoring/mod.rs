//! Final scoring and the end-of-game lookahead.

pub mod lookahead;
pub mod score;

pub use lookahead::{estimate_value, LookaheadEstimate};
pub use score::{leaders, score_game, settle_majorities, share_counts, standings, ShareCounts};
