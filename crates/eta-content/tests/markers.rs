//! Debt-marker and line counting over realistic source files read from disk.

use std::fs;

use eta_content::{count_debt_markers, count_lines, read_text_lossy};

fn read(content: &str) -> String {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("code.py");
    fs::write(&path, content).unwrap();
    read_text_lossy(&path).unwrap()
}

#[test]
fn python_module_with_mixed_markers() {
    let text = read(
        "\
def handler(event):
    # TODO: validate event
    # FIXME(ana): retries are broken
    data = event['body']  # HACK
    return data  # XXX remove before release
",
    );
    assert_eq!(count_debt_markers(&text), 4);
    assert_eq!(count_lines(&text), 6);
}

#[test]
fn markers_inside_identifiers_are_ignored() {
    let text = read("TODO_LIST = []\nMY_TODO = 1\nhackathon = 'FIXMEPLEASE'\n");
    // `TODO_LIST` and `MY_TODO` join the marker with `_`, a word character.
    assert_eq!(count_debt_markers(&text), 0);
}

#[test]
fn markers_next_to_punctuation_count() {
    let text = read("/*TODO*/ (FIXME) [HACK] {XXX} TODO:\n");
    assert_eq!(count_debt_markers(&text), 5);
}

#[test]
fn non_utf8_file_still_counts() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("latin1.rb");
    let mut bytes = b"# caf".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b" TODO\nputs 1\n");
    fs::write(&path, bytes).unwrap();

    let text = read_text_lossy(&path).unwrap();
    assert_eq!(count_debt_markers(&text), 1);
    assert_eq!(count_lines(&text), 3);
}
