//! Variable scoping.
//!
//! Scopes are flat: a procedure call pushes one fresh [`Frame`], and
//! variable lookups only ever search that top frame — there is no walk
//! up to an enclosing scope, and no notion of a global variable reaching
//! into a procedure body. This mirrors the reference interpreter, which
//! allocates one flat variable table per call and frees it on return;
//! there is no `upvar`/`global` mechanism to punch through it.

use tracing::trace;

use crate::value::Value;

#[derive(Default, Debug)]
struct Frame {
    vars: Vec<(Value, Value)>,
}

/// A stack of flat variable scopes.
///
/// The bottom frame is the top-level script's scope; each `proc`
/// invocation pushes a new, empty frame for the duration of the call and
/// pops it on return (including on error, since [`crate::eval`] unwinds
/// through `?`-free `Flow` propagation rather than panicking).
#[derive(Debug)]
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    /// A fresh environment with just the top-level scope.
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::default()],
        }
    }

    /// Pushes a new, empty scope (entering a procedure call).
    pub fn push(&mut self) {
        trace!(depth = self.frames.len() + 1, "push scope");
        self.frames.push(Frame::default());
    }

    /// Pops the current scope (returning from a procedure call).
    ///
    /// A no-op at the top-level scope; callers are expected to balance
    /// every `push` with a `pop`, but this cannot underflow past the
    /// scope every script runs in.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            trace!(depth = self.frames.len(), "pop scope");
            self.frames.pop();
        }
    }

    fn current(&self) -> &Frame {
        self.frames.last().expect("environment always has a scope")
    }

    fn current_mut(&mut self) -> &mut Frame {
        self.frames
            .last_mut()
            .expect("environment always has a scope")
    }

    /// Reads a variable from the current scope, if it has been set.
    pub fn get(&self, name: &Value) -> Option<&Value> {
        self.current()
            .vars
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Reads a variable from the current scope, creating it as an empty
    /// value first if it is not already set.
    pub fn get_or_create(&mut self, name: &Value) -> &Value {
        if !self.current().vars.iter().any(|(k, _)| k == name) {
            self.current_mut().vars.push((name.clone(), Value::empty()));
        }
        self.get(name).expect("just inserted if absent")
    }

    /// Sets a variable in the current scope, creating it if absent.
    pub fn set(&mut self, name: Value, value: Value) {
        trace!(?name, ?value, "set variable");
        if let Some(slot) = self
            .current_mut()
            .vars
            .iter_mut()
            .find(|(k, _)| *k == name)
        {
            slot.1 = value;
        } else {
            self.current_mut().vars.push((name, value));
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut env = Environment::new();
        env.set(Value::from("x"), Value::from("1"));
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::from("1"));
    }

    #[test]
    fn unset_variable_is_none() {
        let env = Environment::new();
        assert!(env.get(&Value::from("missing")).is_none());
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut env = Environment::new();
        env.set(Value::from("x"), Value::from("1"));
        env.set(Value::from("x"), Value::from("2"));
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::from("2"));
    }

    #[test]
    fn pushed_scope_cannot_see_caller_variables() {
        let mut env = Environment::new();
        env.set(Value::from("x"), Value::from("1"));
        env.push();
        assert!(env.get(&Value::from("x")).is_none());
        env.set(Value::from("x"), Value::from("local"));
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::from("local"));
        env.pop();
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::from("1"));
    }

    #[test]
    fn get_or_create_materializes_an_empty_value() {
        let mut env = Environment::new();
        assert_eq!(env.get_or_create(&Value::from("x")), &Value::empty());
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::empty());
    }

    #[test]
    fn get_or_create_does_not_clobber_an_existing_value() {
        let mut env = Environment::new();
        env.set(Value::from("x"), Value::from("1"));
        assert_eq!(env.get_or_create(&Value::from("x")), &Value::from("1"));
    }

    #[test]
    fn pop_below_top_level_is_a_no_op() {
        let mut env = Environment::new();
        env.set(Value::from("x"), Value::from("1"));
        env.pop();
        assert_eq!(env.get(&Value::from("x")).unwrap(), &Value::from("1"));
    }
}
