pub mod diagnostic;
pub mod dictionary;
pub mod tree;

pub mod prelude {
    pub use crate::diagnostic::{Diagnostic, EditorView, Severity};
    pub use crate::dictionary::{
        ArgumentType, CommandDictionary, DictionaryDocument, DictionaryHeader, FswCommand,
        FswCommandArgument, RepeatDefinition,
    };
    pub use crate::tree::{
        CommandNode, NodeKind, SyntaxNode, SyntaxTree, TimeTagNode, TimeTagVariant,
    };
}
