use super::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn feminine(text: &str) -> &'static AffixNode {
    FEMININE_SUFFIXES
        .iter()
        .find(|node| node.text == text)
        .unwrap_or_else(|| panic!("no feminine suffix {text:?}"))
}

// === match_affix ===

#[test]
fn exact_match_to_end_of_input() {
    assert_eq!(match_affix(&chars("rice"), feminine("rice"), Some('-')), Some(4));
}

#[test]
fn match_is_case_insensitive() {
    assert_eq!(match_affix(&chars("RICE"), feminine("rice"), Some('-')), Some(4));
    assert_eq!(match_affix(&chars("Ère"), feminine("ère"), Some('.')), Some(3));
}

#[test]
fn input_shorter_than_node_fails() {
    assert_eq!(match_affix(&chars("ric"), feminine("rice"), Some('-')), None);
}

#[test]
fn non_word_char_ends_the_match() {
    assert_eq!(match_affix(&chars("rice, et"), feminine("rice"), Some('-')), Some(4));
}

#[test]
fn trailing_word_char_without_continuation_fails() {
    // "e" followed by "l" (as in ".elle"): ambiguous, no match.
    assert_eq!(match_affix(&chars("elle"), feminine("e"), Some('.')), None);
}

#[test]
fn separator_chains_into_children() {
    assert_eq!(match_affix(&chars("rice-x-s"), feminine("rice"), Some('-')), Some(8));
    assert_eq!(match_affix(&chars("rice-s"), feminine("rice"), Some('-')), Some(6));
    assert_eq!(match_affix(&chars("rice-x"), feminine("rice"), Some('-')), Some(6));
}

#[test]
fn separator_without_continuation_stops_before_it() {
    assert_eq!(match_affix(&chars("rice-les"), feminine("rice"), Some('-')), Some(4));
    assert_eq!(match_affix(&chars("e."), feminine("e"), Some('.')), Some(1));
}

#[test]
fn adjacent_children_chain_without_separator() {
    assert_eq!(match_affix(&chars("ricexs"), feminine("rice"), Some('·')), Some(6));
    assert_eq!(match_affix(&chars("es"), feminine("e"), Some('.')), Some(2));
}

#[test]
fn other_separator_is_not_chained() {
    // '.' is not the separator here: it simply ends the match.
    assert_eq!(match_affix(&chars("rice.s"), feminine("rice"), Some('-')), Some(4));
}

#[test]
fn no_separator_means_no_chaining() {
    let ordinal_er = &ORDINAL_SUFFIXES[2];
    assert_eq!(match_affix(&chars("er s"), ordinal_er, None), Some(2));
    assert_eq!(match_affix(&chars("ers"), ordinal_er, None), Some(3));
}

// === inclusive_suffix_len ===

#[test]
fn inclusive_suffix_includes_separator() {
    assert_eq!(inclusive_suffix_len(&chars("-rice-x-s")), Some(9));
    assert_eq!(inclusive_suffix_len(&chars(".e.s")), Some(4));
    assert_eq!(inclusive_suffix_len(&chars("·rice")), Some(5));
    assert_eq!(inclusive_suffix_len(&chars(".euse")), Some(5));
}

#[test]
fn inclusive_suffix_first_declared_wins() {
    // "e" is declared first but fails on "euse" ("u" follows), so "euse" wins.
    assert_eq!(inclusive_suffix_len(&chars(".euses")), Some(6));
}

#[test]
fn inclusive_suffix_rejects_plain_words() {
    assert_eq!(inclusive_suffix_len(&chars(".Ensuite")), None);
    assert_eq!(inclusive_suffix_len(&chars("-mail")), None);
    assert_eq!(inclusive_suffix_len(&chars(".")), None);
    assert_eq!(inclusive_suffix_len(&[]), None);
}

// === is_inversion ===

#[test]
fn inversions() {
    for s in ["-tu", "-on", "-nous", "-les", "-ci", "-t-il", "-elleux", "-là"] {
        assert!(is_inversion(&chars(s)), "{s:?}");
    }
}

#[test]
fn inversion_followed_by_punctuation() {
    assert!(is_inversion(&chars("-tu ?")));
    assert!(is_inversion(&chars("-il,")));
}

#[test]
fn not_inversions() {
    for s in ["-être", "-mail", "-glace", "tu", "-", ""] {
        assert!(!is_inversion(&chars(s)), "{s:?}");
    }
}

// === ordinal_suffix_len ===

#[test]
fn ordinal_suffixes() {
    assert_eq!(ordinal_suffix_len(&chars("ème")), Some(3));
    assert_eq!(ordinal_suffix_len(&chars("ère siècle")), Some(3));
    assert_eq!(ordinal_suffix_len(&chars("ères")), Some(4));
    assert_eq!(ordinal_suffix_len(&chars("er")), Some(2));
    assert_eq!(ordinal_suffix_len(&chars("ers")), Some(3));
    assert_eq!(ordinal_suffix_len(&chars("e")), Some(1));
    assert_eq!(ordinal_suffix_len(&chars("E,")), Some(1));
}

#[test]
fn ordinal_suffix_rejects_units() {
    assert_eq!(ordinal_suffix_len(&chars("euros")), None);
    assert_eq!(ordinal_suffix_len(&chars("km")), None);
    assert_eq!(ordinal_suffix_len(&chars("")), None);
}

// === is_abbreviation ===

#[test]
fn single_letters_are_initials() {
    assert!(is_abbreviation(&chars("p")));
    assert!(is_abbreviation(&chars("A")));
    assert!(is_abbreviation(&chars("J")));
}

#[test]
fn one_letter_words_are_not_initials() {
    for s in ["a", "à", "x", "y"] {
        assert!(!is_abbreviation(&chars(s)), "{s:?}");
    }
}

#[test]
fn table_abbreviations_any_case() {
    for s in ["ex", "Ex", "tél", "TÉL", "chap", "Mme", "dr", "pp"] {
        assert!(is_abbreviation(&chars(s)), "{s:?}");
    }
}

#[test]
fn words_are_not_abbreviations() {
    for s in ["art", "vol", "chat", "maison", ""] {
        assert!(!is_abbreviation(&chars(s)), "{s:?}");
    }
}

#[test]
fn table_depth_is_bounded() {
    fn depth(node: &AffixNode) -> usize {
        1 + node.children.iter().map(depth).max().unwrap_or(0)
    }
    for node in FEMININE_SUFFIXES.iter().chain(INVERSIONS).chain(ORDINAL_SUFFIXES) {
        assert!(depth(node) <= 3, "{:?}", node.text);
        assert!(!node.is_empty());
        assert_eq!(node.text, node.text.to_lowercase());
    }
}
