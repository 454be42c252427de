//! The tree-node schema consumed by the emitters.
//!
//! The schema is data, not syntax: each node kind is a name plus an ordered,
//! typed field list. Emitters turn it into source text for one target
//! language; nothing here is tied to any language's declaration syntax.

/// One field of a node kind.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    /// The field's Rust type, as written in the generated source.
    pub ty: &'static str,
}

/// One node kind: a named variant of the base tree type.
#[derive(Debug, Clone, Copy)]
pub struct NodeKind {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// The name of the base expression abstraction.
pub const EXPR_BASE: &str = "Expr";

/// The expression tree node kinds.
pub const EXPR_NODES: &[NodeKind] = &[
    NodeKind {
        name: "Binary",
        fields: &[
            Field { name: "left", ty: "Box<Expr>" },
            Field { name: "operator", ty: "Token" },
            Field { name: "right", ty: "Box<Expr>" },
        ],
    },
    NodeKind {
        name: "Grouping",
        fields: &[Field { name: "expression", ty: "Box<Expr>" }],
    },
    NodeKind {
        name: "Literal",
        fields: &[Field { name: "value", ty: "Option<LiteralValue>" }],
    },
    NodeKind {
        name: "Unary",
        fields: &[
            Field { name: "operator", ty: "Token" },
            Field { name: "right", ty: "Box<Expr>" },
        ],
    },
];
