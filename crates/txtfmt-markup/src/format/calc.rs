use txtfmt_calc::format_number;

use super::Body;
use crate::context::Context;
use crate::text::replace_symbol;

const FAILED: &str = "error";

/// Evaluates each non-blank line. With any attribute, echoes the expression.
pub(super) fn calc(body: Body<'_>, attrs: &[&str], cx: &mut Context<'_>) -> String {
    let show_expr = !attrs.is_empty();
    let evaluator = cx.evaluator();

    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let result = evaluator
                .evaluate(&replace_symbol(line, ',', '.'))
                .map(format_number)
                .unwrap_or_else(|_| FAILED.to_string());
            if show_expr {
                format!("{} = {}", line, result)
            } else {
                result
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::testing::with_width;

    #[test]
    fn results_only() {
        let out = with_width(80, |cx| calc(Body::Text("1+1\n\n2*3,5"), &[], cx));
        assert_eq!(out, "2\n7");
    }

    #[test]
    fn with_expression() {
        let out = with_width(80, |cx| calc(Body::Text(" 10/4 "), &["f"], cx));
        assert_eq!(out, "10/4 = 2.5");
    }

    #[test]
    fn failure_marker() {
        let out = with_width(80, |cx| calc(Body::Text("2+\nsqrt(9)"), &[], cx));
        assert_eq!(out, "error\n3");
    }

    #[test]
    fn empty_body() {
        assert_eq!(with_width(80, |cx| calc(Body::Empty, &[], cx)), "");
    }
}
