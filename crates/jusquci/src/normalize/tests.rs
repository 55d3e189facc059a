use super::*;
use pretty_assertions::assert_eq;

/// Normalized form of the first surface token of `text`.
fn first(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Tokens::new(&chars, CursorConfig::tracking());
    let token = tokens.next_token().unwrap();
    let mut out = Vec::new();
    let len = normalize(tokens.cursor(), &token, &mut out);
    assert_eq!(len, out.len());
    out.into_iter().collect()
}

fn reduced(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let len = reduce_repeated(&mut chars);
    assert_eq!(len, chars.len());
    chars.into_iter().collect()
}

// === Placeholders ===

#[test]
fn numbers_and_ordinals_collapse() {
    assert_eq!(first("97123880012"), "2");
    assert_eq!(first("12/03/2024"), "2");
    assert_eq!(first("122ème"), "2ème");
    assert_eq!(first("1ers"), "2ème");
    assert_eq!(first("13e"), "2ème");
}

// === Inclusive suffixes ===

#[test]
fn inclusive_suffixes_get_an_interpunct() {
    assert_eq!(first("auteur-rice-x-s"), "auteur·ricexs");
    assert_eq!(first("enseignant.e.s"), "enseignant·es");
    assert_eq!(first("lecteur·rice·s"), "lecteur·rices");
    assert_eq!(first("ami-e"), "ami·e");
}

#[test]
fn suffix_rewrite_runs_before_reduction() {
    assert_eq!(first("grand-e-s"), "grand·es");
    assert_eq!(first("auteurrrr-rice"), "auteurr·rice");
}

#[test]
fn compound_hyphens_are_kept() {
    assert_eq!(first("brise-glace"), "brise-glace");
}

#[test]
fn untracked_cursor_leaves_suffixes_alone() {
    let chars: Vec<char> = "auteur-rice".chars().collect();
    let mut cursor = Cursor::new(&chars);
    let token = cursor.next_token().unwrap();
    let mut out = Vec::new();
    normalize(&cursor, &token, &mut out);
    assert_eq!(out.into_iter().collect::<String>(), "auteur-rice");
}

// === Word cleanup ===

#[test]
fn repeated_letters() {
    assert_eq!(first("quuuuuoooooiiiiiii"), "quuooii");
    assert_eq!(first("trèèèès"), "trèès");
    assert_eq!(first("allo"), "allo");
}

#[test]
fn brackets_are_stripped() {
    assert_eq!(first("(pré)disai[en]t"), "prédisaient");
    assert_eq!(first("(socio)anthropologique"), "socioanthropologique");
}

#[test]
fn quotes_become_apostrophes() {
    assert_eq!(first("l’école"), "l'");
    assert_eq!(first("jusqu‘ici"), "jusqu'");
}

#[test]
fn ligatures_are_expanded() {
    assert_eq!(first("cœur"), "coeur");
    assert_eq!(first("Œuvre"), "Oeuvre");
    assert_eq!(first("ex-æquo"), "ex-aequo");
    assert_eq!(first("Ægypte"), "Aegypte");
}

#[test]
fn merged_inversion_is_a_word() {
    assert_eq!(first("Penses-tu"), "Penses-tu");
}

// === Other kinds ===

#[test]
fn punctuation_runs_are_shortened() {
    assert_eq!(first("!!!!!"), "!!");
    assert_eq!(first("?!?!"), "?!?!");
    assert_eq!(first("..."), "..");
}

#[test]
fn other_kinds_are_verbatim() {
    assert_eq!(first("www.exemple.fr"), "www.exemple.fr");
    assert_eq!(first("@becker1982"), "@becker1982");
    assert_eq!(first(":-)))"), ":-)");
    assert_eq!(first("Mme."), "Mme.");
}

#[test]
fn appends_to_existing_output() {
    let chars: Vec<char> = "42".chars().collect();
    let mut cursor = Cursor::new(&chars);
    let token = cursor.next_token().unwrap();
    let mut out = vec!['x'];
    assert_eq!(normalize(&cursor, &token, &mut out), 1);
    assert_eq!(out, vec!['x', '2']);
}

// === reduce_repeated ===

#[test]
fn reducer_keeps_pairs() {
    assert_eq!(reduced("aabb"), "aabb");
    assert_eq!(reduced("aaab"), "aab");
    assert_eq!(reduced("baaa"), "baa");
    assert_eq!(reduced(""), "");
    assert_eq!(reduced("a"), "a");
}

// === normalize_text ===

#[test]
fn whole_text() {
    assert_eq!(
        normalize_text("Les étudiant·e·s ont 20 ans, penses-tu ?!!!\nOuiii").unwrap(),
        "Les étudiant·es ont 2 ans, penses-tu ?!!\nOuii"
    );
}

#[test]
fn empty_text() {
    assert_eq!(normalize_text("").unwrap(), "");
}

mod proptest_normalize {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reducer_is_idempotent(s in "[aàb!.]{0,32}") {
            let once = reduced(&s);
            prop_assert_eq!(reduced(&once), once.clone());
            let chars: Vec<char> = once.chars().collect();
            prop_assert!(chars.windows(3).all(|w| !(w[0] == w[1] && w[1] == w[2])));
        }

        #[test]
        fn spaces_survive_normalization(s in "[a-zé0-9 .!,\\n-]{0,40}") {
            let normalized = normalize_text(&s).unwrap();
            let spaces = |t: &str| t.chars().filter(|c| c.is_whitespace()).count();
            prop_assert_eq!(spaces(&normalized), spaces(&s));
        }
    }
}
