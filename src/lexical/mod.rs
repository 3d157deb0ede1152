//! Zoned lexical scoring.
//!
//! A profile's text is split into three importance zones and scored against a
//! parsed query two ways:
//! - token containment, weighted by zone (current role text beats background)
//! - structured entity matching (companies, roles, schools, skills)
//!
//! The two scores are independent; the caller sums them into the text score
//! that gets fused with the recommendation score.

pub mod entity;
pub mod zones;

pub use entity::{entity_score, entity_score_as_of};
pub use zones::{ZonedText, zone_score};
