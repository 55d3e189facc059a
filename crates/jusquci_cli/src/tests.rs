use super::*;
use pretty_assertions::assert_eq;

fn output(input: &str, options: &CliOptions) -> String {
    let mut out = Vec::new();
    process(input, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn split_lines_on_newlines() {
    assert_eq!(split_lines("a\nb\n"), ["a", "b"]);
    assert_eq!(split_lines("a\n\nb"), ["a", "", "b"]);
    assert_eq!(split_lines("é"), ["é"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn one_rendering_per_line() {
    assert_eq!(
        output("Viens-tu ?\nOui\n", &CliOptions::default()),
        "Viens-tu ? \n\nOui \n"
    );
}

#[test]
fn parallel_output_keeps_line_order() {
    let input: String = (0..64).map(|i| format!("ligne {i}\n")).collect();
    let sequential = output(&input, &CliOptions::default());
    let parallel = output(
        &input,
        &CliOptions {
            parallel: true,
            ..CliOptions::default()
        },
    );
    assert_eq!(parallel, sequential);
}

#[test]
fn frequency_table() {
    let options = CliOptions {
        freq: true,
        ..CliOptions::default()
    };
    assert_eq!(output("oui oui non\nnon oui", &options), "3\toui\n2\tnon\n");
}
