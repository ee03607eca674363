//! Arithmetic expression evaluator used by the `calc` and `table` tags.
//!
//! PIPELINE: expression string --> [`Lexer`] --> tokens --> [`Parser`] --> [`Expr`] --> `f64`
//!
//! Supported:
//! - Operators `+ - * / % ^` and parentheses
//! - Unary `-` and `+`
//! - Constants `pi` and `e`
//! - Functions `abs acos asin atan atan2 ceil cos cosh exp floor ln log log10
//!   max min pow round sin sinh sqrt tan tanh` (names are case-insensitive)
//!
//! The decimal separator is `.`; callers normalize `,` before evaluating.
//!
//! # Example
//!
//! ```rust
//! use txtfmt_calc::{Arithmetic, Evaluator};
//!
//! let calc = Arithmetic;
//! assert_eq!(calc.evaluate("2 * (3 + 4)"), Ok(14.0));
//! assert!(calc.evaluate("2 +").is_err());
//! ```

pub mod ast;
mod error;
mod eval;
pub mod lexer;
mod number;
pub mod parser;

pub use ast::{BinaryOp, Expr};
pub use error::{EvalError, Result};
pub use lexer::{Lexer, Token};
pub use number::format_number;
pub use parser::{parse, Parser, MAX_DEPTH};

/// Something that turns an expression string into a number.
///
/// The markup engine only depends on this trait, so documents can be
/// rendered with a restricted or instrumented evaluator.
pub trait Evaluator {
    fn evaluate(&self, expr: &str) -> Result<f64>;
}

/// The default evaluator: full arithmetic with functions and constants.
#[derive(Debug, Default, Clone, Copy)]
pub struct Arithmetic;

impl Evaluator for Arithmetic {
    fn evaluate(&self, expr: &str) -> Result<f64> {
        evaluate(expr)
    }
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<f64>,
{
    fn evaluate(&self, expr: &str) -> Result<f64> {
        self(expr)
    }
}

/// Parses and evaluates `expr`, rejecting non-finite results.
pub fn evaluate(expr: &str) -> Result<f64> {
    let tree = parse(expr)?;
    let value = eval::eval(&tree)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod arithmetic {
        use super::*;

        #[test]
        fn basic_operators() {
            assert_eq!(evaluate("1 + 2"), Ok(3.0));
            assert_eq!(evaluate("7 - 10"), Ok(-3.0));
            assert_eq!(evaluate("6 * 7"), Ok(42.0));
            assert_eq!(evaluate("9 / 4"), Ok(2.25));
            assert_eq!(evaluate("10 % 4"), Ok(2.0));
        }

        #[test]
        fn power_is_right_associative() {
            assert_eq!(evaluate("2^3^2"), Ok(512.0));
        }

        #[test]
        fn negative_power_base() {
            assert_eq!(evaluate("-2^2"), Ok(-4.0));
            assert_eq!(evaluate("(-2)^2"), Ok(4.0));
        }

        #[test]
        fn exponent_may_be_negative() {
            assert_eq!(evaluate("2^-1"), Ok(0.5));
        }

        #[test]
        fn parentheses() {
            assert_eq!(evaluate("(1 + 2) * 3"), Ok(9.0));
        }

        #[test]
        fn plain_number() {
            assert_eq!(evaluate("  12.5 "), Ok(12.5));
        }
    }

    mod functions {
        use super::*;

        #[test]
        fn unary_functions() {
            assert_eq!(evaluate("sqrt(16)"), Ok(4.0));
            assert_eq!(evaluate("abs(-3)"), Ok(3.0));
            assert_eq!(evaluate("log(10)"), Ok(1.0));
            assert_eq!(evaluate("floor(2.7) + ceil(2.1)"), Ok(5.0));
        }

        #[test]
        fn binary_functions() {
            assert_eq!(evaluate("pow(2, 10)"), Ok(1024.0));
            assert_eq!(evaluate("max(3, 8)"), Ok(8.0));
        }

        #[test]
        fn case_insensitive_names() {
            assert_eq!(evaluate("SQRT(9)"), Ok(3.0));
        }

        #[test]
        fn constants() {
            assert_eq!(evaluate("pi"), Ok(std::f64::consts::PI));
            assert_eq!(evaluate("E"), Ok(std::f64::consts::E));
            assert_eq!(evaluate("ln(1)"), Ok(0.0));
        }

        #[test]
        fn wrong_arity() {
            assert_eq!(
                evaluate("sqrt(1, 2)"),
                Err(EvalError::Arity {
                    name: "sqrt".into(),
                    expected: 1,
                    found: 2,
                })
            );
        }

        #[test]
        fn unknown_function() {
            assert_eq!(
                evaluate("frobnicate(1)"),
                Err(EvalError::UnknownIdentifier("frobnicate".into()))
            );
        }
    }

    mod failures {
        use super::*;

        #[test]
        fn division_by_zero_is_not_finite() {
            assert_eq!(evaluate("1 / 0"), Err(EvalError::NonFinite));
        }

        #[test]
        fn sqrt_of_negative_is_not_finite() {
            assert_eq!(evaluate("sqrt(-1)"), Err(EvalError::NonFinite));
        }

        #[test]
        fn plain_words_are_unknown() {
            assert_eq!(
                evaluate("apples"),
                Err(EvalError::UnknownIdentifier("apples".into()))
            );
        }

        #[test]
        fn comma_decimal_is_rejected() {
            assert!(evaluate("1,5").is_err());
        }
    }

    mod evaluator_trait {
        use super::*;

        #[test]
        fn closures_are_evaluators() {
            let fixed = |_: &str| -> Result<f64> { Ok(7.0) };
            assert_eq!(fixed.evaluate("anything"), Ok(7.0));
        }

        #[test]
        fn arithmetic_delegates() {
            assert_eq!(Arithmetic.evaluate("1+1"), Ok(2.0));
        }
    }
}
