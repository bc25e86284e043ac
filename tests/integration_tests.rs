//! Integration tests for the whole front end.
//!
//! These tests drive source text through the lexer and parser and check the
//! resulting tree through its public API and its textual rendering.

use minipas::{
    ast::ast::{Expr, Stmt},
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

const PROGRAM: &str = "x: integer;
count: integer = 10;
total: real;

begin
  start:
  if count > 0 then
    count := count - 1;
    total := total + count * 2;
    goto start;
  else
    x := -total / 5ABH;
  end;
end;

if x <> 0 then goto done; end
done:
";

fn render(source: &str) -> String {
    let (program, errors) = parse(source.to_string(), Some("test.mp".to_string()));
    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert!(messages.is_empty(), "parser errors for {:?}: {:?}", source, messages);
    program.to_string()
}

#[test]
fn test_parse_full_program() {
    let (program, errors) = parse(PROGRAM.to_string(), Some("test.mp".to_string()));
    assert!(errors.is_empty());

    let kinds: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Decl(_) => "decl",
            Stmt::Assign(_) => "assign",
            Stmt::Expression(_) => "expression",
            Stmt::Block(_) => "block",
            Stmt::Goto(_) => "goto",
            Stmt::Marker(_) => "marker",
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["decl", "decl", "decl", "expression", "expression", "marker"]
    );
}

#[test]
fn test_full_program_rendering() {
    let expected = "x: integer;
count: integer = 10;
total: real;
begin
start:
if (count > 0) then
count := (count - 1);
total := (total + (count * 2));
goto start;
else
x := ((-total) / 5ABH);
end
end
if (x <> 0) then
goto done;
end
done:";

    assert_eq!(render(PROGRAM), expected);
}

#[test]
fn test_round_trip_is_a_fixed_point() {
    let sources = [
        PROGRAM,
        "-a * b",
        "a + b * c + d / e - f",
        "3 + 4; -5 * 5",
        "a; b; -c",
        "x: integer; y: real = -(1 + 2);",
        "if a <= b then else end (c)",
        "l: begin end goto l",
    ];

    for source in sources {
        let once = render(source);
        let twice = render(&once);
        assert_eq!(once, twice, "source: {:?}", source);
    }
}

#[test]
fn test_tokenization_is_deterministic() {
    assert_eq!(
        tokenize(PROGRAM.to_string(), None),
        tokenize(PROGRAM.to_string(), None)
    );
}

#[test]
fn test_radix_literal_token() {
    let tokens = tokenize("5ABH".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[0].literal, "5ABH");
}

#[test]
fn test_precedence_examples() {
    assert_eq!(render("-a * b"), "((-a) * b)");
    assert_eq!(render("a + b * c + d / e - f"), "(((a + (b * c)) + (d / e)) - f)");
    assert_eq!(render("(5 + 5) * 2"), "((5 + 5) * 2)");
}

#[test]
fn test_if_else_structure() {
    let (program, errors) = parse("if x < y then x := y; else y := x; end".to_string(), None);
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::If(expr) = &stmt.expression else {
        panic!("expected if expression");
    };

    assert_eq!(expr.condition.to_string(), "(x < y)");
    assert_eq!(expr.consequence.len(), 1);
    assert_eq!(expr.alternative.as_ref().map(|block| block.len()), Some(1));
}

#[test]
fn test_errors_do_not_stop_parsing() {
    let source = "a: ;\nb := 1;\nc := (2;\nd := 3;";
    let (program, errors) = parse(source.to_string(), Some("broken.mp".to_string()));

    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "b := 1;\nd := 3;");

    let report = format_error(&errors[1], source);
    assert!(report.starts_with("Error: expected next token to be RParen, got Semicolon instead"));
    assert!(report.contains("-> broken.mp"));
    assert!(report.contains("3 | c := (2;"));
}
