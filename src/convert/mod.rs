//! Conversions between SeqN and FPrime.
//!
//! SeqN to FPrime walks the parsed tree; FPrime to SeqN is a plain textual
//! rewrite. The two are not inverses of each other.

mod arguments;
mod from_fprime;
mod to_fprime;
mod warning;

pub use arguments::{join as join_arguments, Argument, ArgumentFlattener, MAX_REPEAT_DEPTH};
pub use from_fprime::{convert_fprime_to_sequence, rewrite};
pub use to_fprime::{convert_sequence_to_fprime, emit, remove_escaped_quotes, Emission, UNKNOWN};
pub use warning::{ConversionWarning, WarningReason};
