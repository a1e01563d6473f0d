//! `set` and `subst`.

use crate::eval::{Flow, Interpreter};
use crate::subst;
use crate::value::Value;

/// `set varName ?value?` — reads or writes a variable in the current
/// scope. Reading a variable that has never been set auto-vivifies it
/// as empty rather than erroring, matching the reference.
pub fn cmd_set(interp: &mut Interpreter, args: &[Value]) -> Flow {
    match args.len() {
        2 => {
            let name = args[1].clone();
            let value = interp.var_or_create(&name).clone();
            interp.set_result(value);
            Flow::Normal
        }
        3 => {
            interp.set_var(args[1].clone(), args[2].clone());
            interp.set_result(args[2].clone());
            Flow::Normal
        }
        _ => {
            interp.set_result(Value::from("wrong # args: should be \"set varName ?value?\""));
            Flow::Error
        }
    }
}

/// `subst value` — re-runs substitution over an already-assembled
/// string. See [`crate::subst::whole`] for why this is a second,
/// distinct pass from the one every command argument already goes
/// through.
pub fn cmd_subst(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let bytes = args[1].as_bytes().to_vec();
    let (value, flow) = subst::whole(interp, &bytes);
    interp.set_result(value);
    flow
}
