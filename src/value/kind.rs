use std::fmt::{self, Display, Formatter};

/// The closed set of value kinds the runtime knows about.
///
/// Method tables are keyed by kind, so overriding a method for "all integers"
/// means registering it once under `ValueKind::Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Nil,
    True,
    False,
    Integer,
    Float,
    Symbol,
    String,
}

impl ValueKind {
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Nil,
        ValueKind::True,
        ValueKind::False,
        ValueKind::Integer,
        ValueKind::Float,
        ValueKind::Symbol,
        ValueKind::String,
    ];

    /// Name of the class backing this kind.
    pub fn class_name(self) -> &'static str {
        match self {
            ValueKind::Nil => "NilClass",
            ValueKind::True => "TrueClass",
            ValueKind::False => "FalseClass",
            ValueKind::Integer => "Integer",
            ValueKind::Float => "Float",
            ValueKind::Symbol => "Symbol",
            ValueKind::String => "String",
        }
    }

    /// Immediates are stored inline and carry no mutable state.
    pub fn is_immediate(self) -> bool {
        !matches!(self, ValueKind::String)
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
