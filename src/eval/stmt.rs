//! Statement evaluation.

use super::error::RuntimeError;
use super::expr::eval_expr;
use crate::ast::{Stmt, StmtKind};
use crate::object::{Object, SharedEnv};

/// Evaluates a single statement.
///
/// A `let` binds its value in the innermost scope and itself evaluates to
/// null (it produces no user-visible value). A `return` wraps its value in
/// [`Object::ReturnValue`] for the enclosing blocks to propagate. An
/// expression statement evaluates to its expression's value.
pub(super) fn eval_stmt(stmt: &Stmt, env: &SharedEnv) -> Result<Object, RuntimeError> {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            let value = eval_expr(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Object::Null)
        }
        StmtKind::Return(value) => {
            let value = eval_expr(value, env)?;
            Ok(Object::ReturnValue(Box::new(value)))
        }
        StmtKind::Expr(expr) => eval_expr(expr, env),
    }
}
