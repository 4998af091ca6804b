use super::*;
use rc_parse::ParseErrorKind;

#[test]
fn item_language_reserves_operator_characters() {
    let language = EffectLanguage::default();
    for ch in ['+', '-', '=', '>'] {
        assert!(language.table().is_reserved(ch), "{ch}");
    }
    assert!(!language.table().is_reserved('`'));
    assert_eq!(language.config(), TokenizerConfig::default());
}

#[test]
fn check_reports_item_effect() {
    let language = EffectLanguage::item_effects();
    let check = match language.check("Grubsong++") {
        Ok(check) => check,
        Err(err) => panic!("{err}"),
    };
    assert!(check.valid);
    assert_eq!(check.types, TypeSet::ITEM_EFFECT);
    assert!(check.is_item_effect());
}

#[test]
fn check_reports_non_effects_as_data() {
    let language = EffectLanguage::item_effects();
    let check = match language.check("Grubsong") {
        Ok(check) => check,
        Err(err) => panic!("{err}"),
    };
    assert!(check.valid);
    assert_eq!(check.types, TypeSet::TERM_LIKE | TypeSet::BOOL);
    assert!(!check.is_item_effect());
}

#[test]
fn errors_convert_from_each_phase() {
    let language = EffectLanguage::item_effects();
    assert!(matches!(language.parse("`open"), Err(EffectError::Lex(_))));
    match language.parse("A++ >>") {
        Err(EffectError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::UnexpectedEndOfInput);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn custom_catalog_without_strings() {
    let language = EffectLanguage::new(&["++", ">>"], TokenizerConfig::without_strings());
    assert!(language.parse("A++ >> B++").is_ok());
    assert!(matches!(language.parse("A += 1"), Err(EffectError::Lex(_))));
}

#[test]
fn language_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EffectLanguage>();

    let language = EffectLanguage::item_effects();
    std::thread::scope(|scope| {
        for name in ["A", "B", "C"] {
            let language = &language;
            scope.spawn(move || {
                let source = format!("{name}++");
                assert_eq!(language.parse(&source).map(|expr| expr.print()), Ok(source));
            });
        }
    });
}
