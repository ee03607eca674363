//! Tree-walking evaluation of parsed expressions.

use crate::ast::Expr;
use crate::error::{EvalError, Result};

pub fn eval(expr: &Expr) -> Result<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Constant(name) => constant(name),
        Expr::Neg(inner) => Ok(-eval(inner)?),
        Expr::Binary { left, op, right } => Ok(op.apply(eval(left)?, eval(right)?)),
        Expr::Call { name, args } => {
            let values = args.iter().map(eval).collect::<Result<Vec<_>>>()?;
            call(name, &values)
        }
    }
}

fn constant(name: &str) -> Result<f64> {
    match name {
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        _ => Err(EvalError::UnknownIdentifier(name.to_string())),
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64> {
    let unary: Option<fn(f64) -> f64> = match name {
        "abs" => Some(f64::abs),
        "acos" => Some(f64::acos),
        "asin" => Some(f64::asin),
        "atan" => Some(f64::atan),
        "ceil" => Some(f64::ceil),
        "cos" => Some(f64::cos),
        "cosh" => Some(f64::cosh),
        "exp" => Some(f64::exp),
        "floor" => Some(f64::floor),
        "ln" => Some(f64::ln),
        "log" | "log10" => Some(f64::log10),
        "round" => Some(f64::round),
        "sin" => Some(f64::sin),
        "sinh" => Some(f64::sinh),
        "sqrt" => Some(f64::sqrt),
        "tan" => Some(f64::tan),
        "tanh" => Some(f64::tanh),
        _ => None,
    };
    if let Some(f) = unary {
        let [x] = expect_args::<1>(name, args)?;
        return Ok(f(x));
    }

    let binary: Option<fn(f64, f64) -> f64> = match name {
        "atan2" => Some(f64::atan2),
        "pow" => Some(f64::powf),
        "min" => Some(f64::min),
        "max" => Some(f64::max),
        _ => None,
    };
    if let Some(f) = binary {
        let [x, y] = expect_args::<2>(name, args)?;
        return Ok(f(x, y));
    }

    Err(EvalError::UnknownIdentifier(name.to_string()))
}

fn expect_args<const N: usize>(name: &str, args: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(args).map_err(|_| EvalError::Arity {
        name: name.to_string(),
        expected: N,
        found: args.len(),
    })
}
