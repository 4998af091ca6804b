//! End-to-end item-effect scenarios: tokenize, parse, validate, evaluate, print.

use pretty_assertions::assert_eq;
use rc_effects::{check_effect, item_language, parse_effect, EffectCheck, Expr, TypeSet};
use rc_ir::{Span, TokenKind};

const CHAINED_ASSIGNMENT: &str = "  Grubsong+=1 >> `Grubsong = 1` => CHARMS += 1";
const CHAINED_INCREMENT: &str = "  Grubsong++ >> `Grubsong = 1` => CHARMS += 1";

fn check(source: &str) -> EffectCheck {
    match check_effect(source) {
        Ok(check) => check,
        Err(err) => panic!("{}", err.render(source)),
    }
}

fn describe(expr: &Expr) -> String {
    match expr {
        Expr::Atom(atom) => match &atom.token.kind {
            TokenKind::LogicString(text) => format!("String({text})"),
            _ => atom.token.content_text().into_owned(),
        },
        Expr::Grouping(group) => format!("Grouping({})", describe(&group.inner)),
        Expr::Increment(inc) => format!(
            "Increment({}, {})",
            describe(&inc.operand),
            inc.operator.content_text()
        ),
        Expr::AdditionAssignment(assign) => format!(
            "AdditionAssignment({}, {})",
            describe(&assign.left),
            describe(&assign.right)
        ),
        Expr::Conditional(cond) => format!(
            "Conditional({}, {})",
            describe(&cond.condition),
            describe(&cond.effect)
        ),
        Expr::Chaining(chain) => {
            format!("Chaining({}, {})", describe(&chain.left), describe(&chain.right))
        }
    }
}

#[test]
fn chained_assignment_tokens() {
    let tokens = match item_language().tokenize(CHAINED_ASSIGNMENT) {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };

    let kinds: Vec<String> = tokens.iter().map(|t| t.kind.display_name()).collect();
    assert_eq!(
        kinds,
        vec![
            "name `Grubsong`",
            "operator `+=`",
            "number `1`",
            "operator `>>`",
            "logic string",
            "operator `=>`",
            "name `CHARMS`",
            "operator `+=`",
            "number `1`",
        ]
    );

    let offsets: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.start_offset(), t.end_offset()))
        .collect();
    assert_eq!(
        offsets,
        vec![(2, 9), (10, 11), (12, 12), (14, 15), (18, 29), (32, 33), (35, 40), (42, 43), (45, 45)]
    );
    assert_eq!(tokens[4].kind, TokenKind::LogicString("Grubsong = 1".to_string()));
    assert_eq!(tokens.reconstruct(), CHAINED_ASSIGNMENT);
}

#[test]
fn chained_assignment_tree() {
    let check = check(CHAINED_ASSIGNMENT);
    assert_eq!(
        describe(&check.expr),
        "Chaining(AdditionAssignment(Grubsong, 1), \
         Conditional(String(Grubsong = 1), AdditionAssignment(CHARMS, 1)))"
    );
    assert!(check.valid);
    assert_eq!(check.types, TypeSet::ITEM_EFFECT);
    assert!(check.is_item_effect());
    assert_eq!(check.expr.print(), CHAINED_ASSIGNMENT);
}

#[test]
fn chained_increment_tree() {
    let check = check(CHAINED_INCREMENT);
    assert_eq!(
        describe(&check.expr),
        "Chaining(Increment(Grubsong, ++), \
         Conditional(String(Grubsong = 1), AdditionAssignment(CHARMS, 1)))"
    );
    assert!(check.is_item_effect());
    assert_eq!(check.expr.to_string(), CHAINED_INCREMENT);
}

#[test]
fn stacked_conditions_then_chain() {
    let source = "`Grubsong = 0` => `Grubsong < 1` => CHARMS++ >> Grubsong++";
    let check = check(source);
    assert_eq!(
        describe(&check.expr),
        "Chaining(Conditional(String(Grubsong = 0), \
         Conditional(String(Grubsong < 1), Increment(CHARMS, ++))), Increment(Grubsong, ++))"
    );
    assert!(check.is_item_effect());
    assert_eq!(check.expr.print(), source);
}

#[test]
fn grouped_name_is_data_not_effect() {
    let check = check("(((Grubsong)))");
    assert_eq!(describe(&check.expr), "Grouping(Grouping(Grouping(Grubsong)))");
    assert!(check.valid);
    assert_eq!(check.types, TypeSet::TERM_LIKE | TypeSet::BOOL);
    assert!(!check.is_item_effect());
}

#[test]
fn referenced_names_and_span() {
    let expr = match parse_effect(CHAINED_ASSIGNMENT) {
        Ok(expr) => expr,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(expr.referenced_names(), vec!["Grubsong", "CHARMS"]);
    assert_eq!(expr.span(), Span::new(2, 46));
    assert_eq!(expr.kind_name(), "chaining");
}
