use calctree::{
    BinaryOperator, Error, EvalError, Expr, LexError, ParseError, eval_str,
    interpreter::{
        lexer::{Lexer, Token, tokenize},
        parser::core::MAX_NESTING_DEPTH,
    },
    parse,
    render::{render_prefix, render_tree},
};
use pretty_assertions::assert_eq;

fn assert_value(src: &str, expected: i64) {
    match eval_str(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn bin(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("10 / 2", 5);
    assert_value("42", 42);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("1 + 2 * 3", 7);
    assert_value("2 * 3 + 1", 7);
    assert_value("10 - 6 / 2", 7);
    assert_eq!(parse("1 + 2 * 3").unwrap(),
               bin(BinaryOperator::Add, num(1), bin(BinaryOperator::Mul, num(2), num(3))));
}

#[test]
fn operators_are_left_associative() {
    assert_value("8 - 3 - 2", 3);
    assert_value("100 / 10 / 5", 2);
    assert_eq!(parse("8 - 3 - 2").unwrap(),
               bin(BinaryOperator::Sub, bin(BinaryOperator::Sub, num(8), num(3)), num(2)));
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(1 + 2) * 3", 9);
    assert_value("8 - (3 - 2)", 7);
    assert_value("((((5))))", 5);
    assert_eq!(parse("(7)").unwrap(), num(7));
}

#[test]
fn unary_operators() {
    assert_value("-5 + 3", -2);
    assert_value("--5", 5);
    assert_value("+5", 5);
    assert_value("-+-+5", 5);
    assert_value("2 * -3", -6);
    assert_value("-(2 + 3)", -5);
    assert_eq!(parse("+5").unwrap(), num(5));
    assert_eq!(parse("-5").unwrap(), bin(BinaryOperator::Sub, num(0), num(5)));
    assert_eq!(parse("--5").unwrap(), Expr::negate(Expr::negate(num(5))));
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
    assert_value("-7 / -2", 3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(eval_str("5 / 0"), Err(Error::Eval(EvalError::DivisionByZero { dividend: 5 })));
    assert!(matches!(eval_str("1 / (2 - 2)"),
                     Err(Error::Eval(EvalError::DivisionByZero { .. }))));
}

#[test]
fn overflow_is_error() {
    assert!(matches!(eval_str("9223372036854775807 + 1"),
                     Err(Error::Eval(EvalError::Overflow { op: BinaryOperator::Add, .. }))));
    assert!(matches!(eval_str("(0 - 9223372036854775807 - 1) / -1"),
                     Err(Error::Eval(EvalError::Overflow { op: BinaryOperator::Div, .. }))));
    assert_value("0 - 9223372036854775807 - 1", i64::MIN);
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnmatchedParenthesis { position: 6, .. }));
    assert!(matches!(parse_error("((1)"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("(1 2)"),
                     ParseError::UnmatchedParenthesis { position: 3, ref rest } if rest == "2)"));
}

#[test]
fn missing_factor_is_error() {
    assert!(matches!(parse_error("1 +"), ParseError::ExpectedFactor { position: 3, .. }));
    assert!(matches!(parse_error(""), ParseError::ExpectedFactor { position: 0, .. }));
    assert!(matches!(parse_error("   "), ParseError::ExpectedFactor { .. }));
    assert!(matches!(parse_error(")"), ParseError::ExpectedFactor { .. }));
    assert!(matches!(parse_error("()"), ParseError::ExpectedFactor { .. }));
    assert!(matches!(parse_error("2 * / 3"), ParseError::ExpectedFactor { .. }));
}

#[test]
fn trailing_input_is_error() {
    assert_eq!(parse_error("1 2"),
               ParseError::TrailingInput { position: 2,
                                           rest:     "2".to_string(), });
    assert!(matches!(parse_error("(1))"), ParseError::TrailingInput { position: 3, .. }));
}

#[test]
fn unknown_character_is_lex_error() {
    assert_eq!(parse("1 $ 2"),
               Err(Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                              position:  2, })));
    assert!(matches!(parse("1 + x"), Err(Error::Lex(LexError::UnexpectedCharacter { character: 'x', .. }))));
    assert!(matches!(parse("3.5"), Err(Error::Lex(LexError::UnexpectedCharacter { character: '.', .. }))));
}

#[test]
fn oversized_literal_is_lex_error() {
    assert_eq!(parse("1 + 99999999999999999999"),
               Err(Error::Lex(LexError::NumberTooLarge { literal:  "99999999999999999999".to_string(),
                                                         position: 4, })));
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn lex_error_wins_over_trailing_input() {
    assert!(matches!(parse("1 2 $"), Err(Error::Parse(ParseError::TrailingInput { .. }))));
    assert!(matches!(parse("1 $ 2"), Err(Error::Lex(_))));
}

#[test]
fn nesting_is_limited() {
    let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&ok, 1);

    let deep = MAX_NESTING_DEPTH + 1;
    let too_deep = format!("{}1{}", "(".repeat(deep), ")".repeat(deep));
    assert!(matches!(parse_error(&too_deep), ParseError::NestingTooDeep { .. }));

    let negations = format!("{}1", "-".repeat(deep));
    assert!(matches!(parse_error(&negations), ParseError::NestingTooDeep { .. }));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(parse("1+2*3").unwrap(), parse(" 1 + 2 * 3 ").unwrap());
    assert_eq!(parse("(1+2)\t*\n3").unwrap(), parse("(1 + 2) * 3").unwrap());
    assert_value("\t 4\n/ 2 ", 2);
}

#[test]
fn parsing_is_repeatable() {
    let src = "-(3 + 4) * 2 - 10 / (1 + 1)";
    assert_eq!(parse(src).unwrap(), parse(src).unwrap());
    assert_value(src, -19);
}

#[test]
fn lexer_yields_end_forever() {
    let mut lexer = Lexer::new("7").unwrap();
    assert_eq!(lexer.current(), Token::Number(7));
    for _ in 0..3 {
        lexer.advance().unwrap();
        assert_eq!(lexer.current(), Token::End);
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.rest(), "");
    }
}

#[test]
fn lexer_classifies_every_token() {
    assert_eq!(tokenize(" 12+3 -(4*5)/6 ").unwrap(),
               vec![Token::Number(12),
                    Token::Plus,
                    Token::Number(3),
                    Token::Minus,
                    Token::LParen,
                    Token::Number(4),
                    Token::Star,
                    Token::Number(5),
                    Token::RParen,
                    Token::Slash,
                    Token::Number(6),
                    Token::End]);
    assert_eq!(tokenize("").unwrap(), vec![Token::End]);
}

#[test]
fn tree_shape_queries() {
    let tree = parse("1 + 2 * 3").unwrap();
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
    assert_eq!(num(4).depth(), 1);
}

#[test]
fn prefix_rendering() {
    let tree = parse("1 + 2 * 3 + 4 * 6").unwrap();
    assert_eq!(render_prefix(&tree),
               "+\n  +\n    1\n    *\n      2\n      3\n  *\n    4\n    6\n");
}

#[test]
fn sideways_tree_rendering() {
    let tree = parse("(1 - 2) * 3").unwrap();
    assert_eq!(render_tree(&tree, false), "    3\n*\n        2\n    -\n        1\n");

    let colored = render_tree(&parse("1 + 2").unwrap(), true);
    assert!(colored.contains('\u{1b}'));
    assert!(colored.contains('+'));
}

#[test]
fn error_messages_mention_the_offender() {
    assert_eq!(parse("1 $ 2").unwrap_err().to_string(),
               "Unexpected character '$' at position 2.");
    assert_eq!(parse("1 2").unwrap_err().to_string(), "Trailing input at position 2: 2");
    assert!(parse("(1 + 2").unwrap_err().to_string().contains("end of input"));
    assert_eq!(eval_str("5 / 0").unwrap_err().to_string(), "Division by zero: 5 / 0.");
    assert_eq!(parse("1 2").unwrap_err().exit_code(), 1);
}

#[test]
fn long_operator_chains_do_not_exhaust_the_stack() {
    let terms = 100_000;
    let src = vec!["1"; terms].join(" + ");
    assert_value(&src, 100_000);

    let tree = parse(&src).unwrap();
    assert_eq!(tree.depth(), terms);
    assert_eq!(tree.node_count(), 2 * terms - 1);
    assert!(tree.to_string().starts_with("(+ (+ (+ "));
    assert!(tree == parse(&src).unwrap());
    drop(tree);

    let mixed = vec!["7"; terms].join(" * 1 - ");
    assert_value(&mixed, 7 - 7 * (i64::try_from(terms).unwrap() - 1));
}

#[test]
fn rendering_long_chains() {
    let terms = 2_000;
    let tree = parse(&vec!["2"; terms].join("*")).unwrap();
    assert_eq!(render_prefix(&tree).lines().count(), 2 * terms - 1);
    assert_eq!(render_tree(&tree, false).lines().count(), 2 * terms - 1);
}

#[test]
fn vertical_tab_is_whitespace() {
    assert_value("1\u{b}+\u{b}2", 3);
}
