//! Consensus difficulty rules for announcement-assisted proof of work.
//!
//! Blocks are mined against a header target which is eased by the
//! announcements committed alongside them. This crate provides:
//! - Compact target encoding and decoding
//! - Target/work conversion with exact truncating division
//! - The effective target a block hash must beat
//! - Hash acceptance against a compact target
//! - Announcement aging and minimum difficulty sanity checks

pub mod aging;
pub mod compact;
pub mod difficulty;
pub mod effective;
pub mod error;
pub mod hash;
pub mod network;
pub mod sanity;
pub mod work;

pub use aging::{aged_ann_target, AgedTarget};
pub use compact::{big_to_compact, compact_to_big, CompactTarget};
pub use difficulty::Difficulty;
pub use effective::{effective_target, EffectiveTarget};
pub use error::DifficultyError;
pub use hash::{is_ok, is_ok_slice};
pub use network::{DifficultyParams, Network};
pub use sanity::is_ann_min_diff_ok;
pub use work::{target_for_work, work_for_target};
