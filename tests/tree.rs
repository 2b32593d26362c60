mod common;

use pretty_assertions::assert_eq;

use scriptck::ast::ty::{BuiltinTy, ResolvedTy};
use scriptck::ast::{BinOpKind, Program};
use scriptck::position::{HasSpan, Position, Span};

use self::common::{program, Line};

#[test]
fn test_expression_text_has_no_whitespace() {
    let l = Line(1);
    let expr = l.bin(
        l.ident("a"),
        "+",
        l.paren(l.bin(l.ident("b"), "*", l.ident("a"))),
    );

    assert_eq!(expr.to_string(), "a+(b*a)");
    assert_eq!(
        l.bin(l.string("hola"), "!=", l.boolean(false)).to_string(),
        "\"hola\"!=false"
    );
    assert_eq!(l.chain(l.int(1), &["<", ">"], l.int(2)).to_string(), "1<>2");
}

#[test]
fn test_string_literal_text_is_escaped() {
    let l = Line(1);

    assert_eq!(
        l.string(r#"he said "hi""#).to_string(),
        r#""he said \"hi\"""#
    );
    assert_eq!(l.string(r"C:\tmp").to_string(), r#""C:\\tmp""#);
}

#[test]
fn test_operator_symbols() {
    for op in [
        BinOpKind::Add,
        BinOpKind::Subtract,
        BinOpKind::Multiply,
        BinOpKind::Divide,
        BinOpKind::Equals,
        BinOpKind::NotEquals,
        BinOpKind::LessThan,
        BinOpKind::GreaterThan,
        BinOpKind::LessEquals,
        BinOpKind::GreaterEquals,
    ] {
        assert_eq!(BinOpKind::try_from(op.symbol()), Ok(op));
    }

    assert_eq!(BinOpKind::try_from("="), Err(()));
    assert!(BinOpKind::LessEquals.is_comparison());
    assert!(!BinOpKind::Divide.is_comparison());
}

#[test]
fn test_type_display_and_compatibility() {
    assert_eq!(BuiltinTy::String.to_string(), "string");
    assert_eq!(ResolvedTy::Untyped.to_string(), "{invalid}");

    let int = ResolvedTy::from(BuiltinTy::Int);
    assert!(int.is_compatible_with(ResolvedTy::Untyped));
    assert!(ResolvedTy::Untyped.is_compatible_with(int));
    assert!(!int.is_compatible_with(BuiltinTy::Bool.into()));
    assert_eq!(int, BuiltinTy::Int);
    assert_eq!(ResolvedTy::Untyped.to_builtin_ty(), None);
}

#[test]
fn test_spans() {
    let l = Line(3);
    let stmt = l.print(l.int(1));

    assert_eq!(stmt.span().start_line(), 3);

    let span = Span {
        start: Position { line: 4, col: 2 },
        end: Position { line: 5, col: 7 },
    };
    assert_eq!(span.to_string(), "4:2-5:7");
    assert_eq!(Span::line(2).to_string(), "2:1");
    assert_eq!(Span::default().start_line(), 1);
}

#[test]
fn test_tree_survives_ron() {
    let l = Line(2);
    let original = program(vec![
        Line(1).decl_init(BuiltinTy::Int, "a", Line(1).int(-4)),
        l.if_(
            l.bin(l.ident("a"), ">=", l.int(0)),
            vec![l.print(l.string("non-negative"))],
        ),
    ]);

    let serialized = ron::to_string(&original).unwrap();
    let read_back: Program = ron::from_str(&serialized).unwrap();

    assert_eq!(read_back, original);
}

#[test]
fn test_spans_default_when_omitted() {
    let program: Program =
        ron::from_str("(stmts: [Print((expr: Term(Bool(BoolLit((value: true))))))])").unwrap();

    assert_eq!(program.stmts[0].span().start_line(), 1);
}
