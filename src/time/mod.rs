//! Time tag handling between SeqN and FPrime.
//!
//! - duration.rs: relative duration parsing, validation and balancing
//! - codec.rs: SeqN time tag nodes to FPrime `A`/`R` tags

pub mod codec;
pub mod duration;

pub use codec::{encode_time_tag, TimeTag};
pub use duration::{balanced_duration, validate_time, Duration, DurationError, TimeType};
