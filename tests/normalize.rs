use std::io::Write;

use role2vec::data::corpus::{extract_text, fix_text, normalize_archives, text_fragment};

#[test]
fn fix_text_reattaches_punctuation() {
    assert_eq!(
        fix_text("He did n't go . Then , <p>it 's ( maybe ) fine"),
        "He did not go. Then, \nit's (maybe) fine"
    );
}

#[test]
fn fragments_come_from_the_second_column() {
    assert_eq!(text_fragment("12\tHello there\tx"), Some("Hello there"));
    assert_eq!(text_fragment("12\tab@\r\n"), Some("ab@"));
    assert_eq!(text_fragment("12\t@@header"), None);
    assert_eq!(text_fragment("12\ta@b"), None);
    assert_eq!(text_fragment("no tab at all"), None);
}

#[test]
fn invalid_utf8_lines_are_dropped() {
    let raw = b"1\tThe cat\n2\t\xff\xfe\n3\tsat . \n";
    assert_eq!(extract_text(raw), "The cat sat. ");
}

#[test]
fn archives_are_normalised_once() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let file = std::fs::File::create(input.path().join("corpus.zip")).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.add_directory("nested/", options).unwrap();
    zip.start_file("nested/doc1.txt", options).unwrap();
    zip.write_all(b"1\tThe cat\n2\tsat . \n3\t@@skip\n").unwrap();
    zip.finish().unwrap();
    std::fs::write(input.path().join("readme.md"), "not an archive").unwrap();

    let first = normalize_archives(input.path(), output.path()).unwrap();
    assert_eq!(first.archives, 1);
    assert_eq!(first.written, 1);
    let text = std::fs::read_to_string(output.path().join("nested/doc1.txt")).unwrap();
    assert_eq!(text, "The cat sat. ");

    let second = normalize_archives(input.path(), output.path()).unwrap();
    assert_eq!(second.written, 0);
    assert_eq!(second.skipped_existing, 1);
}

#[test]
fn a_failing_entry_does_not_stop_the_archive() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let file = std::fs::File::create(input.path().join("corpus.zip")).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("blocked/doc.txt", options).unwrap();
    zip.write_all(b"1\tLost words\n").unwrap();
    zip.start_file("ok.txt", options).unwrap();
    zip.write_all(b"1\tKept words\n").unwrap();
    zip.finish().unwrap();
    // A plain file where the entry needs a folder.
    std::fs::write(output.path().join("blocked"), "in the way").unwrap();

    let summary = normalize_archives(input.path(), output.path()).unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written, 1);
    let text = std::fs::read_to_string(output.path().join("ok.txt")).unwrap();
    assert_eq!(text, "Kept words");
}
