//! `puts`, gated behind the `puts` feature.
//!
//! This is the only built-in that touches the outside world; an
//! embedder that wants a fully sandboxed interpreter disables the
//! `puts` feature rather than needing to intercept or filter commands
//! at the registration layer.

use std::io::Write;

use crate::eval::{Flow, Interpreter};
use crate::value::Value;

/// `puts string` — writes `string` followed by a newline to standard
/// output.
pub fn cmd_puts(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(args[1].as_bytes());
    let _ = stdout.write_all(b"\n");
    interp.set_result(Value::empty());
    Flow::Normal
}
