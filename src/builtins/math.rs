//! Integer arithmetic and comparison, gated behind the `math` feature.
//!
//! Every operator takes exactly two operands and interprets them with
//! [`Value::to_int`], which wraps on overflow rather than panicking —
//! the reference does the same with a plain C `int` accumulator, so an
//! embedder relying on wraparound behavior for, say, a hash mix, keeps
//! getting it.

use crate::eval::{Flow, Interpreter};
use crate::value::Value;

pub fn register_all(interp: &mut Interpreter) {
    interp.register("+", 3, cmd_add);
    interp.register("-", 3, cmd_sub);
    interp.register("*", 3, cmd_mul);
    interp.register("/", 3, cmd_div);
    interp.register(">", 3, cmd_gt);
    interp.register(">=", 3, cmd_ge);
    interp.register("<", 3, cmd_lt);
    interp.register("<=", 3, cmd_le);
    interp.register("==", 3, cmd_eq);
    interp.register("!=", 3, cmd_ne);
}

fn operands(args: &[Value]) -> (i64, i64) {
    (args[1].to_int(), args[2].to_int())
}

fn bool_result(interp: &mut Interpreter, value: bool) -> Flow {
    interp.set_result(Value::from(if value { 1 } else { 0 }));
    Flow::Normal
}

pub fn cmd_add(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    interp.set_result(Value::from(a.wrapping_add(b)));
    Flow::Normal
}

pub fn cmd_sub(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    interp.set_result(Value::from(a.wrapping_sub(b)));
    Flow::Normal
}

pub fn cmd_mul(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    interp.set_result(Value::from(a.wrapping_mul(b)));
    Flow::Normal
}

pub fn cmd_div(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    if b == 0 {
        interp.set_result(Value::from("division by zero"));
        return Flow::Error;
    }
    interp.set_result(Value::from(a.wrapping_div(b)));
    Flow::Normal
}

pub fn cmd_gt(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a > b)
}

pub fn cmd_ge(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a >= b)
}

pub fn cmd_lt(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a < b)
}

pub fn cmd_le(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a <= b)
}

pub fn cmd_eq(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a == b)
}

pub fn cmd_ne(interp: &mut Interpreter, args: &[Value]) -> Flow {
    let (a, b) = operands(args);
    bool_result(interp, a != b)
}
