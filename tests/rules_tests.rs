use title_fix::Style;
use title_fix::rules::{
    ALWAYS_CAPITALIZE, BASE_ACRONYMS, LOWERCASE_WORDS, ROMAN_NUMERALS, is_roman_numeral, rules_for,
};

#[test]
fn test_min_lengths() {
    let lengths: Vec<_> = Style::ALL
        .into_iter()
        .map(|style| rules_for(style).min_length)
        .collect();
    assert_eq!(lengths, [4, 0, 4, 0, 5]);
}

#[test]
fn test_meets_length() {
    assert!(!Style::Apa.rules().meets_length(3));
    assert!(Style::Apa.rules().meets_length(4));
    assert!(Style::Chicago.rules().meets_length(1));
    assert!(!Style::Nyt.rules().meets_length(4));
}

#[test]
fn test_always_capitalize_is_shared() {
    for style in Style::ALL {
        let rules = style.rules();
        assert!(
            ALWAYS_CAPITALIZE
                .iter()
                .all(|word| rules.is_always_capitalized(word)),
            "{rules}"
        );
    }
}

#[test]
fn test_always_capitalize_holds_numerals_and_acronyms() {
    assert!(ROMAN_NUMERALS.iter().all(|word| ALWAYS_CAPITALIZE.contains(word)));
    assert!(BASE_ACRONYMS.iter().all(|word| ALWAYS_CAPITALIZE.contains(word)));
}

#[test]
fn test_apa_rules() {
    let rules = Style::Apa.rules();
    assert_eq!(rules.exceptions.len(), 18);
    assert!(rules.is_exception("the"));
    assert!(!rules.is_exception("with"));
    assert!(rules.is_always_capitalized("been"));
    assert!(rules.is_always_capitalized("did"));
}

#[test]
fn test_extended_lowercase_styles() {
    for style in [Style::Chicago, Style::Ap] {
        let rules = style.rules();
        assert!(LOWERCASE_WORDS.iter().all(|word| rules.is_exception(word)));
    }
}

#[test]
fn test_ap_extras() {
    let rules = Style::Ap.rules();
    assert!(rules.is_always_capitalized("ap"));
    assert!(!Style::Chicago.rules().is_always_capitalized("ap"));
}

#[test]
fn test_mla_drops_be_verbs() {
    let rules = Style::Mla.rules();
    assert!(!rules.is_exception("is"));
    assert!(rules.is_exception("between"));
}

#[test]
fn test_nyt_rules() {
    let rules = Style::Nyt.rules();
    assert!(rules.is_exception("whom"));
    assert!(rules.is_exception("towards"));
    assert!(rules.is_always_capitalized("york"));
}

#[test]
fn test_rules_are_shared() {
    assert!(core::ptr::eq(Style::Mla.rules(), rules_for(Style::Mla)));
}

#[test]
fn test_display() {
    assert_eq!(Style::Nyt.rules().to_string(), "NYT (min length 5)");
}

#[test]
fn test_is_roman_numeral() {
    assert!(is_roman_numeral("iv"));
    assert!(is_roman_numeral("x"));
    assert!(!is_roman_numeral("xi"));
    assert!(!is_roman_numeral("IV"));
}
