//! Expression nodes for the Monkey AST.

use std::fmt;

use crate::token::Span;

use super::stmt::Block;

/// A prefix (unary) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation `!`.
    Not,
    /// Arithmetic negation `-`.
    Neg,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixOperator::Not => write!(f, "!"),
            PrefixOperator::Neg => write!(f, "-"),
        }
    }
}

/// An infix (binary) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition `+` (also string concatenation).
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
    /// Less than `<`.
    Lt,
    /// Greater than `>`.
    Gt,
    /// Equality `==`.
    Eq,
    /// Inequality `!=`.
    NotEq,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfixOperator::Add => write!(f, "+"),
            InfixOperator::Sub => write!(f, "-"),
            InfixOperator::Mul => write!(f, "*"),
            InfixOperator::Div => write!(f, "/"),
            InfixOperator::Lt => write!(f, "<"),
            InfixOperator::Gt => write!(f, ">"),
            InfixOperator::Eq => write!(f, "=="),
            InfixOperator::NotEq => write!(f, "!="),
        }
    }
}

/// The kind of an expression in the Monkey language.
///
/// This enum represents the different types of expressions without source
/// location information. Use [`Expr`] for the full AST node with span
/// information.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A variable reference by name.
    Identifier(String),

    /// A 64-bit signed integer literal.
    IntLiteral(i64),

    /// A boolean literal (`true` or `false`).
    BoolLiteral(bool),

    /// A string literal.
    StringLiteral(String),

    /// A prefix operation (`!x`, `-x`).
    Prefix {
        /// The operator.
        op: PrefixOperator,
        /// The operand.
        right: Box<Expr>,
    },

    /// A binary operation (`a + b`, `a == b`, ...).
    Infix {
        /// The left operand.
        left: Box<Expr>,
        /// The operator.
        op: InfixOperator,
        /// The right operand.
        right: Box<Expr>,
    },

    /// An `if` expression with optional `else` branch.
    ///
    /// `if` is an expression: it evaluates to the value of the taken
    /// branch, or null when the condition is false and no alternative
    /// exists.
    If {
        /// The condition expression.
        condition: Box<Expr>,
        /// The block evaluated when the condition is truthy.
        consequence: Block,
        /// The optional block evaluated otherwise.
        alternative: Option<Block>,
    },

    /// A function literal `fn(a, b) { ... }`.
    ///
    /// Functions are first-class values; at evaluation time the literal
    /// captures the environment it was defined in (closure semantics).
    Function {
        /// The parameter names, in order.
        parameters: Vec<String>,
        /// The function body.
        body: Block,
    },

    /// A call expression `f(a, b)`.
    ///
    /// The callee is an arbitrary expression, so both `add(1, 2)` and
    /// `fn(x) { x }(5)` are calls.
    Call {
        /// The expression evaluating to the function being called.
        function: Box<Expr>,
        /// The arguments, in order.
        arguments: Vec<Expr>,
    },

    /// An array literal `[1, 2, 3]`.
    Array(Vec<Expr>),

    /// An index expression `left[index]`.
    Index {
        /// The indexed expression (array or hash).
        left: Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },

    /// A hash literal `{"a": 1, true: 2}`.
    ///
    /// Pairs are kept in source order here; the runtime hash map does not
    /// preserve insertion order.
    Hash(Vec<(Expr, Expr)>),
}

/// An expression in the Monkey language with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Display for Expr {
    /// Writes the canonical string form of the expression.
    ///
    /// Prefix and infix expressions are parenthesized (`(-x)`, `(a + b)`)
    /// so that operator precedence decisions made by the parser are visible
    /// in the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::IntLiteral(value) => write!(f, "{}", value),
            ExprKind::BoolLiteral(value) => write!(f, "{}", value),
            ExprKind::StringLiteral(value) => write!(f, "{}", value),
            ExprKind::Prefix { op, right } => write!(f, "({}{})", op, right),
            ExprKind::Infix { left, op, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            ExprKind::Function { parameters, body } => {
                write!(f, "fn({}) {}", parameters.join(", "), body)
            }
            ExprKind::Call {
                function,
                arguments,
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            ExprKind::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            ExprKind::Index { left, index } => write!(f, "({}[{}])", left, index),
            ExprKind::Hash(pairs) => {
                let pairs: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}
