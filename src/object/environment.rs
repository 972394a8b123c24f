//! Chained name-to-value bindings.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Object;

/// A shared, mutable handle to an [`Environment`].
///
/// Environments are shared: the evaluator holds one, every function value
/// holds the one it was defined in, and call frames chain onto it. `Rc`
/// gives each of them the same environment rather than a copy, and
/// `RefCell` allows `let` to insert bindings through the shared handle.
///
/// A recursive closure makes the reference graph cyclic (the environment
/// holds the function, the function holds the environment), so such an
/// environment is never reclaimed before the process exits. That matches
/// its required lifetime: a binding must outlive every function that can
/// still see it.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A mapping from names to values, with an optional enclosing scope.
///
/// Lookup walks outward through the enclosing chain; insertion always
/// writes to the innermost frame. There is no reassignment: `let` is the
/// only way a binding changes, and it shadows rather than mutates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    /// Bindings of this scope.
    store: HashMap<String, Object>,
    /// The enclosing scope, if any.
    outer: Option<SharedEnv>,
}

impl Environment {
    /// Creates a fresh top-level environment behind a shared handle.
    pub fn new_shared() -> SharedEnv {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Creates an environment enclosed by `outer`, behind a shared handle.
    ///
    /// This is the call-frame constructor: each function call gets one,
    /// with the function's captured environment as the enclosing scope.
    pub fn new_enclosed(outer: SharedEnv) -> SharedEnv {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up a name, walking outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this (innermost) scope.
    pub fn set(&mut self, name: String, value: Object) {
        self.store.insert(name, value);
    }
}
