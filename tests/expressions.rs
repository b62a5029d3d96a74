use std::fs;

use exprheap::{
    ast::{ExprTree, Operator},
    error::{ParseError, RuntimeError},
    evaluate_expression,
    interpreter::{lexer::tokenise, parser::postfix::to_postfix},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn case_files_work() {
    init_logging();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_cases(&content) {
            count += 1;
            match (expected, evaluate_expression(&source)) {
                (Some(want), Ok(got)) => {
                    assert_eq!(got, want, "{source:?} in {path:?} evaluated to the wrong value");
                },
                (None, Err(_)) => {},
                (Some(_), Err(e)) => panic!("{source:?} in {path:?} failed: {e}"),
                (None, Ok(v)) => panic!("{source:?} in {path:?} should fail but gave {v}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `<expression> => <value>` lines; `None` marks an expected failure.
fn extract_cases(content: &str) -> Vec<(String, Option<i64>)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .map(|line| {
               let (source, expected) =
                   line.rsplit_once("=>").unwrap_or_else(|| panic!("Malformed case: {line}"));
               let expected = match expected.trim() {
                   "error" => None,
                   value => Some(value.parse().unwrap_or_else(|_| panic!("Bad value: {line}"))),
               };
               (source.trim().to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match src.parse::<ExprTree>() {
        Ok(tree) => panic!("{src:?} parsed but was expected to fail: {tree}"),
        Err(e) => e,
    }
}

fn postfix_of(src: &str) -> String {
    to_postfix(&tokenise(src)).unwrap()
                              .iter()
                              .map(|(tok, _)| tok.to_string())
                              .collect::<Vec<_>>()
                              .join(" ")
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3 + 4 * 2", 11);
    assert_value("( 3 + 4 ) * 2", 14);
    assert_value("12 / 4 - 1", 2);
    assert_value("12 / ( 4 - 1 )", 4);
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_value("10 - 5 - 2", 3);
    assert_value("64 / 4 / 2", 8);
    assert_eq!(postfix_of("8 - 3 - 1"), "8 3 - 1 -");
}

#[test]
fn tokeniser_splits_brackets_from_operands() {
    assert_eq!(tokenise("(5"), ["(", "5"]);
    assert_eq!(tokenise("5)"), ["5", ")"]);
    assert_eq!(tokenise("( 5 )"), ["(", "5", ")"]);
    assert_eq!(tokenise("((1+2)"), ["(", "(", "1+2", ")"]);
    assert_eq!(tokenise("  12   +3 "), ["12", "+3"]);
    assert!(tokenise("").is_empty());
}

#[test]
fn postfix_conversion() {
    assert_eq!(postfix_of("3 + 4 * 2"), "3 4 2 * +");
    assert_eq!(postfix_of("( 3 + 4 ) * 2"), "3 4 + 2 *");
    assert_eq!(postfix_of("2 * 3 + 4"), "2 3 * 4 +");
    assert_eq!(postfix_of("(1 + 2) * (3 - 4) / 5"), "1 2 + 3 4 - * 5 /");
}

#[test]
fn traversal_orders() {
    let tree: ExprTree = "( 3 + 4 ) * 2".parse().unwrap();
    assert_eq!(tree.prefix_order(), "* + 3 4 2");
    assert_eq!(tree.infix_order(), "( 3 + 4 ) * 2");
    assert_eq!(tree.postfix_order(), "3 4 + 2 *");

    let tree: ExprTree = "1 + 2 * 3".parse().unwrap();
    assert_eq!(tree.prefix_order(), "+ 1 * 2 3");
    assert_eq!(tree.infix_order(), "1 + 2 * 3");
    assert_eq!(tree.postfix_order(), "1 2 3 * +");
    assert_eq!(tree.to_string(), tree.infix_order());

    let empty = ExprTree::new();
    assert_eq!(empty.prefix_order(), "");
    assert_eq!(empty.infix_order(), "");
    assert_eq!(empty.postfix_order(), "");
}

#[test]
fn infix_output_parses_back_to_the_same_tree() {
    for src in ["1 + 2 + 3",
                "1 + ( 2 + 3 )",
                "( 1 - 2 ) - 3",
                "1 - ( 2 - 3 )",
                "2 * ( 3 + 4 ) * 5",
                "( 8 / 4 ) / ( 2 / 1 )",
                "((9))",
                "7 - 2 * 3 + 4 / 2"]
    {
        let tree: ExprTree = src.parse().unwrap();
        let reparsed: ExprTree = tree.infix_order().parse().unwrap();
        assert_eq!(reparsed, tree, "{src:?} rendered as {:?}", tree.infix_order());
        assert_eq!(reparsed.evaluate().unwrap(), tree.evaluate().unwrap());
    }
}

#[test]
fn equality_is_structural() {
    let flat: ExprTree = "1 + 2 + 3".parse().unwrap();
    let nested: ExprTree = "1 + ( 2 + 3 )".parse().unwrap();
    assert_ne!(flat, nested);
    assert_eq!(flat, "(1 + 2) + 3".parse::<ExprTree>().unwrap());
    assert_eq!(ExprTree::new(), ExprTree::default());
}

#[test]
fn size_counts_every_node() {
    assert_eq!("42".parse::<ExprTree>().unwrap().size(), 1);
    assert_eq!("((7))".parse::<ExprTree>().unwrap().size(), 1);
    assert_eq!("1 + 2 * 3".parse::<ExprTree>().unwrap().size(), 5);
    assert_eq!("(1 + 2) * (3 - 4) / 5".parse::<ExprTree>().unwrap().size(), 9);

    let empty = ExprTree::new();
    assert_eq!(empty.size(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.root(), None);
}

#[test]
fn nodes_link_to_their_parents() {
    let tree: ExprTree = "6 - 2 * 3".parse().unwrap();
    let root = tree.root().unwrap();
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.node(root).operator(), Some(Operator::Minus));

    let left = tree.left_child(root).unwrap();
    let right = tree.right_child(root).unwrap();
    assert_eq!(tree.parent(left), Some(root));
    assert_eq!(tree.parent(right), Some(root));
    assert_eq!(tree.node(left).value(), Some(6));
    assert!(!tree.node(left).is_operator());
    assert!(tree.node(right).is_operator());

    let three = tree.right_child(right).unwrap();
    assert_eq!(tree.node(three).value(), Some(3));
    assert_eq!(tree.parent(three), Some(right));
    assert_eq!(tree.left_child(three), None);
}

#[test]
fn subtree_recomputes_size() {
    let tree: ExprTree = "( 1 + 2 ) * ( 3 - 4 )".parse().unwrap();
    let root = tree.root().unwrap();
    let left = tree.subtree(tree.left_child(root).unwrap());

    assert_eq!(left.size(), 3);
    assert_eq!(left.evaluate().unwrap(), 3);
    assert_eq!(left.parent(left.root().unwrap()), None);
    assert_eq!(tree.infix_order_from(tree.right_child(root).unwrap()), "3 - 4");
    assert_eq!(tree.evaluate_node(tree.right_child(root)).unwrap(), -1);
    assert_eq!(tree.evaluate_node(None).unwrap(), 0);
}

#[test]
fn malformed_expressions_are_reported() {
    assert_eq!(parse_error("1 + 2 )"), ParseError::UnmatchedParen { position: 3 });
    assert_eq!(parse_error("( 1 + 2"), ParseError::UnclosedParen { position: 0 });
    assert_eq!(parse_error("3 % 2"),
               ParseError::UnexpectedToken { token:    "%".to_string(),
                                             position: 1, });
    assert_eq!(parse_error("4 +"),
               ParseError::MissingOperand { operator: Operator::Plus,
                                            position: 1, });
    assert_eq!(parse_error("( 4 * )"),
               ParseError::MissingOperand { operator: Operator::Times,
                                            position: 2, });
    assert!(matches!(parse_error(""), ParseError::MalformedExpression { position: 0, .. }));
    assert_eq!(parse_error("()"),
               ParseError::UnexpectedToken { token:    ")".to_string(),
                                             position: 1, });
    assert!(matches!(parse_error("2 * 99999999999999999999"),
                     ParseError::LiteralTooLarge { position: 2, .. }));
}

#[test]
fn operands_and_operators_must_alternate() {
    let unexpected = |token: &str, position| ParseError::UnexpectedToken { token: token.to_string(),
                                                                          position };

    assert_eq!(parse_error("5 2"), unexpected("2", 1));
    assert_eq!(parse_error("1 2 +"), unexpected("2", 1));
    assert_eq!(parse_error("+ 1 2"), unexpected("+", 0));
    assert_eq!(parse_error("- 3"), unexpected("-", 0));
    assert_eq!(parse_error("1 + * 2"), unexpected("*", 2));
    assert_eq!(parse_error("2 ( 3 )"), unexpected("(", 1));
    assert_eq!(parse_error("( 2 ) 3"), unexpected("3", 3));
    assert_eq!(parse_error("( * 2 )"), unexpected("*", 1));
}

#[test]
fn deep_expressions_do_not_exhaust_the_stack() {
    init_logging();
    let terms = 100_000;

    let sum = vec!["1"; terms].join(" + ");
    let tree: ExprTree = sum.parse().unwrap();
    assert_eq!(tree.size(), 2 * terms - 1);
    assert_eq!(tree.evaluate().unwrap(), 100_000);
    assert_eq!(tree.infix_order(), sum);
    assert_eq!(tree.prefix_order().split(' ').count(), 2 * terms - 1);
    assert!(tree.postfix_order().ends_with("1 +"));
    assert_eq!(tree.clone(), tree);

    let first = tree.left_child(tree.root().unwrap()).unwrap();
    assert_eq!(tree.subtree(first).size(), 2 * terms - 3);

    let nested = format!("{}7{}", "(".repeat(terms), ")".repeat(terms));
    assert_eq!(evaluate_expression(&nested).unwrap(), 7);

    let right_leaning = format!("{}1{}", "1 - ( ".repeat(terms / 10), " )".repeat(terms / 10));
    let tree: ExprTree = right_leaning.parse().unwrap();
    assert_eq!(tree.evaluate().unwrap(), 1);
    assert_eq!(tree.infix_order().parse::<ExprTree>().unwrap(), tree);
}

#[test]
fn parse_errors_name_their_position() {
    let err = parse_error("1 + x");
    assert_eq!(err.position(), 2);
    assert_eq!(err.to_string(), "Error at token 2: Unexpected token: 'x'.");
}

#[test]
fn division_by_zero_is_an_error() {
    let tree: ExprTree = "4 / 0".parse().unwrap();
    assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 4 }));

    let tree: ExprTree = "( 2 + 3 ) / ( 1 - 1 )".parse().unwrap();
    assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 5 }));
}

#[test]
fn overflow_is_an_error() {
    let tree: ExprTree = "9223372036854775807 + 1".parse().unwrap();
    assert!(matches!(tree.evaluate(),
                     Err(RuntimeError::Overflow { operator: Operator::Plus, .. })));

    let tree: ExprTree = "( 0 - 9223372036854775807 - 1 ) / ( 0 - 1 )".parse().unwrap();
    assert!(matches!(tree.evaluate(),
                     Err(RuntimeError::Overflow { operator: Operator::Divide, .. })));
}
