use super::*;
use pretty_assertions::assert_eq;

const LINES: [&str; 3] = [
    "les ami-e-s sont là",
    "les amis sont partis, les ami.e.s aussi",
    "Ouiii 12 fois",
];

fn owned(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    entries
        .iter()
        .map(|(form, count)| ((*form).to_owned(), *count))
        .collect()
}

#[test]
fn counts_normalized_words_only() {
    let mut counts = Frequencies::default();
    count_line("ami-e, ami.e et 42 !", &mut counts).unwrap();
    assert_eq!(sorted(counts), owned(&[("ami·e", 2), ("et", 1)]));
}

#[test]
fn most_frequent_first() {
    let counts = count_lines(&LINES, false).unwrap();
    let top = sorted(counts);
    assert_eq!(
        top[..3].to_vec(),
        owned(&[("les", 3), ("ami·es", 2), ("sont", 2)])
    );
    assert!(top.iter().any(|(form, _)| form == "Ouii"));
    assert!(top.iter().all(|(form, _)| form != "2"));
}

#[test]
fn parallel_counts_match() {
    let sequential = sorted(count_lines(&LINES, false).unwrap());
    let parallel = sorted(count_lines(&LINES, true).unwrap());
    assert_eq!(parallel, sequential);
}

#[test]
fn no_lines() {
    assert!(count_lines(&[], true).unwrap().is_empty());
}
