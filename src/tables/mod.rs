//! Lookup tables module
//!
//! Static bracket tables (age, 3d6 age roll, 2d6 status roll), the
//! per-age-category budgets and the flavor text used for backgrounds.
//! Bracket lookups are evaluated in ascending order and the top bracket is
//! open-ended.

mod age;
pub mod flavor;
mod status;


pub use age::*;
pub use flavor::{pick, status_description, BACKGROUND_EVENTS, ROLL_TABLE_SIZE};
pub use status::*;
