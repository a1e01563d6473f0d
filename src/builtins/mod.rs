//! The standard command set.
//!
//! Every command here is a plain `fn(&mut Interpreter, &[Value]) ->
//! Flow` registered through [`crate::Interpreter::register`] — nothing
//! about how a built-in is invoked differs from how a host's own
//! command would be. `math` and `puts` are gated behind Cargo features
//! of the same name so an embedder can build a restricted interpreter
//! (no arithmetic, or no console I/O) without forking the crate.

pub mod control;
pub mod io;
pub mod math;
pub mod proc;
pub mod vars;

use crate::eval::Interpreter;

/// Registers every built-in command on a freshly constructed
/// interpreter. Called once from [`Interpreter::new`].
pub fn register_all(interp: &mut Interpreter) {
    interp.register("set", 0, vars::cmd_set);
    interp.register("subst", 2, vars::cmd_subst);
    interp.register("proc", 4, proc::cmd_proc);

    interp.register("if", 0, control::cmd_if);
    interp.register("while", 3, control::cmd_while);
    interp.register("return", 0, control::cmd_return);
    interp.register("break", 1, control::cmd_break);
    interp.register("continue", 1, control::cmd_continue);

    #[cfg(feature = "math")]
    math::register_all(interp);

    #[cfg(feature = "puts")]
    interp.register("puts", 2, io::cmd_puts);
}
