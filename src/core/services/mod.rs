//! Domain services
//!
//! Pure logic apart from the single file read in `evaluate`:
//! - `classifier`: detect push operations in raw text
//! - `permissions`: find a contents-write grant in a parsed workflow
//! - `evaluator`: combine both into a per-file verdict

mod classifier;
mod evaluator;
mod permissions;

pub use classifier::{PushClassifier, PushPattern};
pub use evaluator::{EvaluateError, evaluate, evaluate_content};
pub use permissions::{find_write_grant, has_write_permission};
