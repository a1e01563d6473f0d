//! The command table.
//!
//! Commands are looked up by a linear scan from the most recently
//! registered entry backward, matching on both name and arity: a later
//! [`crate::Interpreter::register`] call shadows an earlier one under the
//! same name only when it also accepts the same argument count, so an
//! older same-named registration with a different arity is still
//! reachable. A host overriding a built-in installed by
//! [`crate::builtins`] with the same arity shadows it as expected.

use crate::eval::{Flow, Interpreter};
use crate::value::Value;

/// A native command implementation. Receives the full argument vector,
/// including `args[0]`, the command name itself (matching the
/// convention every built-in and user `proc` body sees).
pub type CommandFn = fn(&mut Interpreter, &[Value]) -> Flow;

/// What running a command actually does: either a function pointer
/// registered by the host or a built-in, or a user-defined `proc` body
/// to be evaluated in a fresh scope.
pub enum CommandImpl {
    Native(CommandFn),
    Proc { params: Value, body: Value },
}

/// One entry in the command table.
pub struct Command {
    pub name: Value,
    /// Required argument count including the command name, or `0` to
    /// accept any number of arguments.
    pub arity: usize,
    pub imp: CommandImpl,
}

impl Command {
    pub fn native(name: impl Into<Value>, arity: usize, func: CommandFn) -> Self {
        Command {
            name: name.into(),
            arity,
            imp: CommandImpl::Native(func),
        }
    }

    pub fn proc(name: Value, params: Value, body: Value) -> Self {
        Command {
            name,
            arity: 0,
            imp: CommandImpl::Proc { params, body },
        }
    }
}

/// Finds the most recently registered command with the given name whose
/// arity accepts `argc` words (a registered arity of `0` accepts any
/// count). A name match with the wrong arity is skipped rather than
/// rejected outright, so an older same-named registration with a
/// different arity can still be found.
pub fn find<'a>(table: &'a [Command], name: &[u8], argc: usize) -> Option<&'a Command> {
    table
        .iter()
        .rev()
        .find(|c| c.name.as_bytes() == name && (c.arity == 0 || c.arity == argc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_interp: &mut Interpreter, _args: &[Value]) -> Flow {
        Flow::Normal
    }

    #[test]
    fn finds_the_most_recent_registration_by_name() {
        let table = vec![
            Command::native("f", 2, noop),
            Command::native("f", 2, noop),
        ];
        assert!(std::ptr::eq(
            find(&table, b"f", 2).unwrap(),
            &table[1]
        ));
    }

    #[test]
    fn skips_a_name_match_whose_arity_does_not_fit() {
        let table = vec![Command::native("f", 2, noop), Command::native("f", 3, noop)];
        // The newer registration only accepts 3 words; calling with 2
        // must fall back to the older, still-reachable registration.
        assert!(std::ptr::eq(find(&table, b"f", 2).unwrap(), &table[0]));
        assert!(std::ptr::eq(find(&table, b"f", 3).unwrap(), &table[1]));
    }

    #[test]
    fn no_match_by_name_or_arity_is_none() {
        let table = vec![Command::native("f", 2, noop)];
        assert!(find(&table, b"g", 2).is_none());
        assert!(find(&table, b"f", 5).is_none());
    }
}
