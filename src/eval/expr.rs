//! Expression evaluation.

use std::collections::HashMap;
use std::rc::Rc;

use super::error::RuntimeError;
use super::eval_block;
use crate::ast::{Expr, ExprKind, InfixOperator, PrefixOperator};
use crate::object::{Builtin, Environment, Function, HashPair, Object, SharedEnv};

/// Evaluates a single expression.
pub(super) fn eval_expr(expr: &Expr, env: &SharedEnv) -> Result<Object, RuntimeError> {
    match &expr.kind {
        ExprKind::IntLiteral(value) => Ok(Object::Integer(*value)),
        ExprKind::BoolLiteral(value) => Ok(Object::Boolean(*value)),
        ExprKind::StringLiteral(value) => Ok(Object::Str(value.clone())),
        ExprKind::Identifier(name) => eval_identifier(name, env),
        ExprKind::Prefix { op, right } => {
            let right = eval_expr(right, env)?;
            eval_prefix(*op, right)
        }
        ExprKind::Infix { left, op, right } => {
            let left = eval_expr(left, env)?;
            let right = eval_expr(right, env)?;
            eval_infix(left, *op, right)
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expr(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Object::Null)
            }
        }
        ExprKind::Function { parameters, body } => {
            Ok(Object::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            })))
        }
        ExprKind::Call {
            function,
            arguments,
        } => {
            let function = eval_expr(function, env)?;
            let arguments = eval_expr_list(arguments, env)?;
            apply(function, arguments)
        }
        ExprKind::Array(elements) => Ok(Object::Array(eval_expr_list(elements, env)?)),
        ExprKind::Index { left, index } => {
            let left = eval_expr(left, env)?;
            let index = eval_expr(index, env)?;
            eval_index(left, index)
        }
        ExprKind::Hash(pairs) => eval_hash_literal(pairs, env),
    }
}

/// Resolves an identifier: environment chain first, then the built-in
/// table.
fn eval_identifier(name: &str, env: &SharedEnv) -> Result<Object, RuntimeError> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = Builtin::lookup(name) {
        return Ok(Object::Builtin(builtin));
    }
    Err(RuntimeError::identifier_not_found(name))
}

/// Evaluates a list of expressions left to right.
///
/// The first error stops the walk; later expressions are not evaluated.
fn eval_expr_list(exprs: &[Expr], env: &SharedEnv) -> Result<Vec<Object>, RuntimeError> {
    exprs.iter().map(|expr| eval_expr(expr, env)).collect()
}

/// Applies a prefix operator to an already-evaluated operand.
fn eval_prefix(op: PrefixOperator, right: Object) -> Result<Object, RuntimeError> {
    match op {
        PrefixOperator::Not => Ok(Object::Boolean(!right.is_truthy())),
        PrefixOperator::Neg => match right {
            Object::Integer(value) => Ok(Object::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::unknown_prefix_operator(op, other.type_name())),
        },
    }
}

/// Applies an infix operator to already-evaluated operands.
///
/// Dispatch follows the operand types: two integers get arithmetic and
/// comparisons, two strings get concatenation and byte-wise equality, and
/// everything else only supports `==`/`!=` (which compare by value for
/// booleans and null, and are `false`/`true` for anything else). A type
/// mismatch and an unsupported operator produce different errors.
fn eval_infix(left: Object, op: InfixOperator, right: Object) -> Result<Object, RuntimeError> {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(*l, op, *r),
        (Object::Str(l), Object::Str(r)) => eval_string_infix(l, op, r),
        _ => match op {
            InfixOperator::Eq => Ok(Object::Boolean(loose_eq(&left, &right))),
            InfixOperator::NotEq => Ok(Object::Boolean(!loose_eq(&left, &right))),
            _ if left.type_name() != right.type_name() => Err(RuntimeError::type_mismatch(
                left.type_name(),
                op,
                right.type_name(),
            )),
            _ => Err(RuntimeError::unknown_infix_operator(
                left.type_name(),
                op,
                right.type_name(),
            )),
        },
    }
}

/// Equality for the operand combinations the integer and string branches
/// did not claim.
///
/// Booleans and null compare by value. Distinct arrays, hashes, and
/// functions are never equal, mirroring reference-identity semantics for
/// separately-built values.
fn loose_eq(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Boolean(l), Object::Boolean(r)) => l == r,
        (Object::Null, Object::Null) => true,
        _ => false,
    }
}

// Arithmetic wraps on overflow: evaluation of user code must never panic.
fn eval_integer_infix(left: i64, op: InfixOperator, right: i64) -> Result<Object, RuntimeError> {
    match op {
        InfixOperator::Add => Ok(Object::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Object::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Object::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                Err(RuntimeError::division_by_zero())
            } else {
                Ok(Object::Integer(left.wrapping_div(right)))
            }
        }
        InfixOperator::Lt => Ok(Object::Boolean(left < right)),
        InfixOperator::Gt => Ok(Object::Boolean(left > right)),
        InfixOperator::Eq => Ok(Object::Boolean(left == right)),
        InfixOperator::NotEq => Ok(Object::Boolean(left != right)),
    }
}

fn eval_string_infix(left: &str, op: InfixOperator, right: &str) -> Result<Object, RuntimeError> {
    match op {
        InfixOperator::Add => Ok(Object::Str(format!("{}{}", left, right))),
        InfixOperator::Eq => Ok(Object::Boolean(left == right)),
        InfixOperator::NotEq => Ok(Object::Boolean(left != right)),
        _ => Err(RuntimeError::unknown_infix_operator("STRING", op, "STRING")),
    }
}

/// Calls a function or built-in with already-evaluated arguments.
fn apply(function: Object, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
    match function {
        Object::Function(function) => apply_function(&function, arguments),
        Object::Builtin(builtin) => builtin.apply(arguments),
        other => Err(RuntimeError::not_a_function(other.type_name())),
    }
}

/// Calls a user-defined function.
///
/// Parameters are bound by position in a fresh environment whose enclosing
/// scope is the function's *captured* environment — not the caller's.
/// A `return` from the body is unwrapped here, exactly once.
fn apply_function(function: &Function, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
    if function.parameters.len() != arguments.len() {
        return Err(RuntimeError::wrong_number_of_arguments(
            function.parameters.len(),
            arguments.len(),
        ));
    }

    let call_env = Environment::new_enclosed(Rc::clone(&function.env));
    for (name, value) in function.parameters.iter().zip(arguments) {
        call_env.borrow_mut().set(name.clone(), value);
    }

    let result = eval_block(&function.body, &call_env)?;
    match result {
        Object::ReturnValue(value) => Ok(*value),
        other => Ok(other),
    }
}

/// Evaluates an index expression on already-evaluated operands.
///
/// Array indexes that are out of range and hash keys that are missing
/// both produce null rather than an error; indexing any other type is an
/// error, as is using an unhashable key.
fn eval_index(left: Object, index: Object) -> Result<Object, RuntimeError> {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if i < 0 || i as usize >= elements.len() {
                Ok(Object::Null)
            } else {
                Ok(elements[i as usize].clone())
            }
        }
        (Object::Hash(pairs), index) => {
            let key = index
                .hash_key()
                .ok_or_else(|| RuntimeError::unusable_as_hash_key(index.type_name()))?;
            Ok(pairs
                .get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null))
        }
        (other, _) => Err(RuntimeError::index_not_supported(other.type_name())),
    }
}

/// Evaluates a hash literal, keys and values in source order.
fn eval_hash_literal(
    pairs: &[(Expr, Expr)],
    env: &SharedEnv,
) -> Result<Object, RuntimeError> {
    let mut hash = HashMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expr(key_expr, env)?;
        let hash_key = key
            .hash_key()
            .ok_or_else(|| RuntimeError::unusable_as_hash_key(key.type_name()))?;

        let value = eval_expr(value_expr, env)?;
        hash.insert(hash_key, HashPair { key, value });
    }

    Ok(Object::Hash(hash))
}
