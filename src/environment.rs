//! Lexical scope chain for the evaluator.
//!
//! An [`Environment`] is a cheap, clonable handle (an `Rc<RefCell<_>>`) to a
//! scope frame, following the REDESIGN FLAGS note that closures must keep
//! their defining environment alive after the block that created them
//! returns. The scope graph is a tree — every environment but the global one
//! has exactly one parent — so reference counting is enough; there is no
//! cycle to collect.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

struct Scope {
    values: HashMap<String, Value>,
    parent: Option<Environment>,
}

/// A handle to a lexical scope frame.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a fresh global scope with no parent.
    pub fn global() -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            parent: None,
        })))
    }

    /// Creates a child scope enclosed by `self`.
    pub fn child(&self) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// Binds `name` to `value` in this scope, shadowing any binding of the
    /// same name in an enclosing scope. Redeclaring a name already bound in
    /// this exact scope silently overwrites it.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks up `name`, walking outward through enclosing scopes.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.values.get(name) {
            return Some(value.clone());
        }
        scope.parent.as_ref()?.get(name)
    }

    /// Assigns to the nearest existing binding of `name`, walking outward.
    ///
    /// Returns `false` if no such binding exists anywhere in the chain;
    /// assignment never creates a new binding (that is what `var` is for).
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut scope = self.0.borrow_mut();
        if scope.values.contains_key(name) {
            scope.values.insert(name.to_string(), value);
            return true;
        }
        match &scope.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }
}
