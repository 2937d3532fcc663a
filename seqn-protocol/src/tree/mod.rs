mod kind;
mod node;
mod view;

pub use kind::NodeKind;
pub use node::{SyntaxNode, SyntaxTree};
pub use view::{CommandNode, TimeTagNode, TimeTagVariant};
