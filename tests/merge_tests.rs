//! End-to-end tests for merging vocabulary directories.

use std::fs;
use std::path::Path;
use vocab_tools::merge::collect;
use vocab_tools::{merge_directory, Language, MergeOutcome};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open merged csv");
    reader
        .records()
        .map(|r| r.expect("record").iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_non_pivot_files_are_ignored() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "english-russian.csv", "hello,привет\n");
    write(input.path(), "dutch-spanish.csv", "hallo,hola\n");
    let output = input.path().join("out").join("merged.csv");

    let outcome = merge_directory(input.path(), &output).expect("merge should succeed");

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines, vec!["en,ru,nl,es,de,fr", "hello,привет,,,,"]);

    match outcome {
        MergeOutcome::Written(report) => {
            assert_eq!(report.rows_written, 1);
            assert_eq!(report.files_merged, 1);
            assert_eq!(
                report.missing,
                vec![
                    (Language::Dutch, 1),
                    (Language::Spanish, 1),
                    (Language::German, 1),
                    (Language::French, 1),
                ]
            );
        }
        MergeOutcome::NoPivotInput => panic!("expected output to be written"),
    }
}

#[test]
fn test_no_matching_files_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "dutch-spanish.csv", "hallo,hola\n");
    write(input.path(), "readme.txt", "english-russian\n");
    write(input.path(), "english-klingon.csv", "hello,nuqneH\n");
    let output = input.path().join("out").join("merged.csv");

    let outcome = merge_directory(input.path(), &output).unwrap();

    assert_eq!(outcome, MergeOutcome::NoPivotInput);
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[test]
fn test_first_seen_order_follows_file_name_order() {
    let input = tempfile::tempdir().unwrap();
    // german-english sorts after english-*, so "cat" is first seen in english-russian
    write(input.path(), "german-english.csv", "Hund,dog\nKatze,cat\n");
    write(input.path(), "english-russian.csv", "cat,кот\nsun,солнце\n");
    write(input.path(), "english-dutch.csv", "sun,zon\n");
    let output = input.path().join("merged.csv");

    merge_directory(input.path(), &output).unwrap();

    let rows = read_rows(&output);
    let pivots: Vec<_> = rows.iter().skip(1).map(|row| row[0].as_str()).collect();
    assert_eq!(pivots, vec!["sun", "cat", "dog"]);
    assert_eq!(rows[1], vec!["sun", "солнце", "zon", "", "", ""]);
    assert_eq!(rows[3], vec!["dog", "", "", "", "Hund", ""]);
}

#[test]
fn test_row_count_equals_distinct_trimmed_pivot_words() {
    let input = tempfile::tempdir().unwrap();
    write(
        input.path(),
        "english-french.csv",
        " house , maison\nhouse,logis\n\"tree\",arbre\n,vide\nlonely\n  , \n",
    );
    write(input.path(), "spanish-english.csv", "casa,house\nárbol, tree \nrío,river\n");
    let output = input.path().join("merged.csv");

    let (table, files) = collect(input.path()).unwrap();
    assert_eq!(files, 2);
    assert_eq!(table.len(), 3);

    merge_directory(input.path(), &output).unwrap();
    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1 + 3);
    // last write wins within a target language
    assert_eq!(rows[1], vec!["house", "", "", "casa", "", "logis"]);
}

#[test]
fn test_existing_output_is_overwritten() {
    let input = tempfile::tempdir().unwrap();
    write(input.path(), "english-german.csv", "dog,Hund\n");
    let output = input.path().join("merged.csv");
    fs::write(&output, "stale,data\nmore,stale\nrows,here\n").unwrap();

    merge_directory(input.path(), &output).unwrap();

    assert_eq!(read_rows(&output).len(), 2);
}

#[test]
fn test_missing_input_directory_is_an_error() {
    let input = tempfile::tempdir().unwrap();
    let missing = input.path().join("nope");
    assert!(merge_directory(&missing, &input.path().join("merged.csv")).is_err());
}
