//! Control flow: `if`, `while`, `return`, `break`, `continue`.

use crate::eval::{Flow, Interpreter};
use crate::value::Value;

/// `if cond body ?cond body ...? ?body?`
///
/// A plain walk of alternating condition/body pairs: no `else`/`elseif`
/// keyword is recognized anywhere in this argument list — a trailing
/// body left over with no paired condition (an odd number of trailing
/// arguments) is accepted as an unconditional final branch.
pub fn cmd_if(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let mut i = 1;
    while i < args.len() {
        let remaining = args.len() - i;
        if remaining == 1 {
            return interp.eval(args[i].as_bytes());
        }
        let cond = args[i].clone();
        let body = args[i + 1].clone();
        let flow = interp.eval(cond.as_bytes());
        if flow != Flow::Normal {
            return flow;
        }
        if interp.result().to_int() != 0 {
            return interp.eval(body.as_bytes());
        }
        i += 2;
    }
    interp.set_result(Value::empty());
    Flow::Normal
}

/// `while cond body` — re-evaluates `cond` before every iteration;
/// `break` ends the loop normally, `continue` (`Flow::Again`) starts the
/// next iteration, anything else propagates.
pub fn cmd_while(interp: &mut Interpreter, args: &[Value]) -> Flow {
    loop {
        let flow = interp.eval(args[1].as_bytes());
        if flow != Flow::Normal {
            return flow;
        }
        if interp.result().to_int() == 0 {
            interp.set_result(Value::empty());
            return Flow::Normal;
        }
        let flow = interp.eval(args[2].as_bytes());
        match flow {
            Flow::Normal | Flow::Again => continue,
            Flow::Break => {
                interp.set_result(Value::empty());
                return Flow::Normal;
            }
            other => return other,
        }
    }
}

/// `return ?value?` — unwinds to the nearest `proc` call, which turns
/// this back into `Flow::Normal` with `value` as its result.
pub fn cmd_return(interp: &mut Interpreter, args: &[Value]) -> Flow {
    match args.len() {
        1 => interp.set_result(Value::empty()),
        2 => interp.set_result(args[1].clone()),
        _ => {
            interp.set_result(Value::from("wrong # args: should be \"return ?value?\""));
            return Flow::Error;
        }
    }
    Flow::Return
}

/// `break` — unwinds to the nearest enclosing `while`.
pub fn cmd_break(interp: &mut Interpreter, _args: &[Value]) -> Flow {
    interp.set_result(Value::empty());
    Flow::Break
}

/// `continue` — unwinds to the nearest enclosing `while`, requesting
/// the next iteration rather than ending the loop.
pub fn cmd_continue(interp: &mut Interpreter, _args: &[Value]) -> Flow {
    interp.set_result(Value::empty());
    Flow::Again
}
