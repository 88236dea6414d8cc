//! Wire format selection

use serde::{Deserialize, Serialize};

use crate::fragment::Node;

/// How scalar values are written on the wire
///
/// `Compat` reproduces the historical payload shape: integers and flags
/// are quoted strings and a link always carries its own `title`, even
/// when that duplicates the embed title. `Typed` writes JSON numbers and
/// booleans and lets the standalone title own the `title` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Compat,
    Typed,
}

impl WireFormat {
    /// Render a boolean flag (`tts`, `inline`)
    pub fn flag(self, value: bool) -> Node {
        match self {
            WireFormat::Compat => Node::from(value.to_string()),
            WireFormat::Typed => Node::from(value),
        }
    }

    /// Render an integer (`color`)
    pub fn integer(self, value: u32) -> Node {
        match self {
            WireFormat::Compat => Node::from(value.to_string()),
            WireFormat::Typed => Node::from(value),
        }
    }

    pub fn is_typed(self) -> bool {
        self == WireFormat::Typed
    }
}
