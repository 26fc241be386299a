use super::{
    evaluate, generate, parse_source, run, Builtin, Builtins, EvalError, Evaluator, Expression,
    Value,
};

fn eval_string(input: &str) -> Result<Value, EvalError> {
    let tree = parse_source(input).unwrap();
    evaluate(&tree)
}

fn round_trip(input: &str) -> String {
    generate(&parse_source(input).unwrap())
}

fn assert_round_trips(input: &str) {
    assert_eq!(round_trip(input), input, "regenerating \"{input}\"");
}

#[test]
fn test_round_trip_arithmetic() {
    assert_round_trips("(+ 1 2)");
    assert_round_trips("(* 4 10)");
    assert_round_trips("(+ (* 4 10) 2)");
    assert_round_trips("(* (+ 1 (* 2 3)) (+ 4 5) 6)");
    assert_round_trips("(+)");
    assert_round_trips("(* (+))");
    assert_round_trips("42");
    assert_round_trips("-3");
}

#[test]
fn test_round_trip_other_forms() {
    assert_round_trips("(foo 'bar' baz)");
    assert_round_trips("(lambda (x) (+ x 1))");
    assert_round_trips("((lambda (x) (+ 14 x)) (+ 23 (* 5 1)))");
    assert_round_trips("(quote abc)");
}

#[test]
fn test_generate_normalises_spacing() {
    assert_eq!(round_trip("(+   1  2 )"), "(+ 1 2)");
}

#[test]
fn test_generate_concatenates_parameters_and_quotes() {
    assert_eq!(round_trip("(lambda (x y) x)"), "(lambda (xy) x)");
    assert_eq!(round_trip("(quote (a b))"), "(quote (ab))");
}

#[test]
fn test_evaluate_arithmetic() {
    assert_eq!(eval_string("(+ 1 2)"), Ok(Value::Integer(3)));
    assert_eq!(eval_string("(* 4 10)"), Ok(Value::Integer(40)));
    assert_eq!(eval_string("(+ (* 4 10) 2)"), Ok(Value::Integer(42)));
    assert_eq!(eval_string("(+ -5 2 (* 2 -3))"), Ok(Value::Integer(-9)));
}

#[test]
fn test_evaluate_identity_elements() {
    assert_eq!(eval_string("(*)"), Ok(Value::Integer(1)));
    assert_eq!(eval_string("(+)"), Ok(Value::Integer(0)));
}

#[test]
fn test_evaluate_atoms() {
    assert_eq!(eval_string("7"), Ok(Value::Integer(7)));
    assert_eq!(eval_string("x"), Ok(Value::Symbol("x".to_string())));
    assert_eq!(eval_string("'s'"), Ok(Value::Text("'s'".to_string())));
}

#[test]
fn test_evaluate_unknown_operator() {
    assert_eq!(
        eval_string("(foo 1)"),
        Err(EvalError::UnknownOperator("foo".to_string()))
    );
    assert_eq!(
        eval_string("((+ 1 2) 3)"),
        Err(EvalError::UnknownOperator("3".to_string()))
    );
}

#[test]
fn test_evaluate_type_errors() {
    assert_eq!(
        eval_string("(+ 1 x)"),
        Err(EvalError::NotAnInteger(Value::Symbol("x".to_string())))
    );
    assert_eq!(
        eval_string("(* 'two' 2)"),
        Err(EvalError::NotAnInteger(Value::Text("'two'".to_string())))
    );
    assert!(matches!(
        eval_string("(+ (quote 1))"),
        Err(EvalError::NotAnInteger(Value::Quoted(_)))
    ));
}

#[test]
fn test_evaluate_overflow() {
    assert_eq!(
        eval_string("(* 9223372036854775807 2)"),
        Err(EvalError::Overflow("*"))
    );
    assert_eq!(
        eval_string("(+ 9223372036854775807 1)"),
        Err(EvalError::Overflow("+"))
    );
}

#[test]
fn test_evaluate_lambda_and_quote_forms() {
    assert_eq!(
        eval_string("(lambda (x) (+ x 1))"),
        Err(EvalError::Unsupported("lambda"))
    );
    assert_eq!(
        eval_string("(quote (a b))"),
        Ok(Value::Quoted("(ab)".to_string()))
    );
}

#[test]
fn test_evaluate_left_to_right() {
    // The first failing operand is the one reported.
    assert_eq!(
        eval_string("(+ (foo) (bar))"),
        Err(EvalError::UnknownOperator("foo".to_string()))
    );
}

#[test]
fn test_custom_builtins() {
    fn negate_sum(args: &[Value]) -> Result<i64, EvalError> {
        args.iter()
            .try_fold(0i64, |acc, arg| Ok(acc - arg.as_integer()?))
    }

    let builtins = Builtins::standard().register("neg", Builtin::new("negate-sum", negate_sum));
    assert!(builtins.contains("neg"));
    assert!(!Builtins::global().contains("neg"));

    let tree = parse_source("(neg 1 (+ 2 3))").unwrap();
    assert_eq!(
        Evaluator::new(&builtins).evaluate(&tree),
        Ok(Value::Integer(-6))
    );

    let flat = parse_source("(neg 1 2)").unwrap();
    assert_eq!(
        Evaluator::new(&Builtins::new()).evaluate(&flat),
        Err(EvalError::UnknownOperator("neg".to_string()))
    );
    // Operands are reduced before the operator is looked up.
    assert_eq!(
        Evaluator::new(&Builtins::new()).evaluate(&tree),
        Err(EvalError::UnknownOperator("+".to_string()))
    );
}

#[test]
fn test_run_pipeline() {
    let code = "(+ (* 4 10) 2)";
    let outcome = run(code, Builtins::global()).unwrap();
    assert!(outcome.matches(code));
    assert_eq!(outcome.result, Ok(Value::Integer(42)));
    assert!(matches!(outcome.tree, Expression::Procedure(..)));

    let outcome = run("(lambda (x) x)", Builtins::global()).unwrap();
    assert_eq!(outcome.generated, "(lambda (x) x)");
    assert!(outcome.result.is_err());

    assert!(matches!(
        run("(+ 1 2", Builtins::global()),
        Err(crate::Error::Parse(_))
    ));
    assert!(matches!(
        run("(+ 1 %)", Builtins::global()),
        Err(crate::Error::Lex(_))
    ));
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Integer(-4).to_string(), "-4");
    assert_eq!(Value::Quoted("ab".to_string()).to_string(), "(quote ab)");
    assert_eq!(
        EvalError::UnknownOperator("foo".to_string()).to_string(),
        "unknown operator 'foo'"
    );
}
