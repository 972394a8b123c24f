//! Statement nodes for the Monkey AST.

use std::fmt;

use crate::token::Span;

use super::expr::Expr;

/// The kind of a statement in the Monkey language.
///
/// This enum represents the different types of statements without source
/// location information. Use [`Stmt`] for the full AST node with span
/// information.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// A binding `let name = value;`.
    Let {
        /// The name being bound.
        name: String,
        /// The bound expression.
        value: Expr,
    },

    /// A return statement `return value;`.
    ///
    /// The wrapped value unwinds nested blocks up to the nearest function
    /// (or program) boundary at evaluation time.
    Return(Expr),

    /// An expression used in statement position.
    ///
    /// This is what makes `x + 10;` a valid program line; the value of the
    /// last expression statement is the value of the program.
    Expr(Expr),
}

/// A statement in the Monkey language with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {};", name, value),
            StmtKind::Return(value) => write!(f, "return {};", value),
            StmtKind::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

/// A braced, ordered list of statements.
///
/// Blocks are the bodies of `if`/`else` branches and function literals.
/// They are not statements themselves: a block only ever appears as a child
/// of those expression forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in this block, in source order.
    pub statements: Vec<Stmt>,
    /// The source location of this block, from `{` to `}`.
    pub span: Span,
}

impl Block {
    /// Creates a new block with the given statements and span.
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
