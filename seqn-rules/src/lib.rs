//! Lint rules for sequences converted to FPrime.
//!
//! FPrime only understands absolute and relative time tags, so every command
//! must carry one and it must not be a `TimeComplete` or `TimeEpoch` tag.
//! Rules never fail: findings are appended to the caller's diagnostics.

mod engine;
mod rule;

pub use engine::{LintEngine, Linter};
pub use rule::{LintRule, MISSING_TIME_TAG_MESSAGE, UNSUPPORTED_TIME_TAG_MESSAGE};
