use crate::parser::Expression;

/// Renders `tree` back into canonical source text.
pub fn generate(tree: &Expression) -> String {
    match tree {
        Expression::Integer(n) => n.to_string(),
        Expression::Text(s) | Expression::Symbol(s) => s.clone(),
        Expression::Procedure(operator, operands) => generate_procedure(operator, operands),
        Expression::Lambda(parameters, body) => generate_lambda(parameters, body),
        Expression::Quote(quoted) => generate_quote(quoted),
    }
}

fn generate_procedure(operator: &Expression, operands: &[Expression]) -> String {
    let rator = generate(operator);
    if operands.is_empty() {
        return format!("({rator})");
    }
    let rands = operands.iter().map(generate).collect::<Vec<_>>();
    format!("({rator} {})", rands.join(" "))
}

// Parameter names are concatenated without a separator.
fn generate_lambda(parameters: &[String], body: &Expression) -> String {
    format!("(lambda ({}) {})", parameters.concat(), generate(body))
}

fn generate_quote(quoted: &str) -> String {
    format!("(quote {quoted})")
}
