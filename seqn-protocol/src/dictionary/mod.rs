mod argument;
mod command;

pub use argument::{ArgumentType, FswCommandArgument, RepeatDefinition};
pub use command::{CommandDictionary, DictionaryDocument, DictionaryHeader, FswCommand};
