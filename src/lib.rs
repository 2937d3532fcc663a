//! SeqN ↔ FPrime command sequence conversion.
//!
//! The crate is split into a few modules:
//!
//! * `time`: SeqN time tags to FPrime `A`/`R` tags
//! * `convert`: tree emitter (SeqN → FPrime) and text rewriter (FPrime → SeqN)
//! * `adaptation`: the named input/output formats handed to the editor host
//!
//! Syntax trees, dictionaries and diagnostics live in `seqn-protocol`; the
//! time tag linter lives in `seqn-rules`.

pub mod adaptation;
pub mod convert;
pub mod time;

pub use adaptation::{
    Adaptation, EmptyLinter, FppOutput, InputFormat, OutputFormat, SeqnOverrides,
};
pub use convert::{
    convert_fprime_to_sequence, convert_sequence_to_fprime, emit, rewrite, ConversionWarning,
    Emission,
};
pub use seqn_rules::{LintEngine, Linter};
pub use time::{encode_time_tag, TimeTag};
