use std::fs;
use std::path::{Path, PathBuf};
use whisper_batch::{
    client::mock::{MockExtractor, MockResponse},
    config::Config,
    pipeline::{Batch, output_path},
};

fn touch_pdfs(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for name in names {
        let path = dir.join(name);
        fs::write(&path, b"%PDF-1.4 fake").unwrap();
        files.push(path);
    }
    files
}

#[test]
fn batch_attempts_every_file_and_counts_successes() {
    let dir = tempfile::tempdir().unwrap();
    let files = touch_pdfs(dir.path(), &["a.pdf", "b.pdf", "c.pdf"]);

    let mock = MockExtractor::default();
    mock.push_response(MockResponse::Text("alpha".into()));
    mock.push_response(MockResponse::Error("remote exploded".into()));
    mock.push_response(MockResponse::Text("gamma".into()));

    let batch = Batch::new(&Config::default(), mock.clone());
    let summary = batch.run(&files).unwrap();

    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.successful, 2);
    assert_eq!(mock.call_count(), 3);
    assert_eq!(mock.calls(), files);

    // The failed file is recorded but did not stop the batch.
    assert!(!summary.outcomes[1].ok);
    assert!(summary.outcomes[1].error.as_deref().unwrap().contains("remote exploded"));
    assert!(summary.outcomes[2].ok);
}

#[test]
fn single_file_makes_exactly_one_attempt() {
    let dir = tempfile::tempdir().unwrap();
    let files = touch_pdfs(dir.path(), &["only.pdf"]);

    let mock = MockExtractor::default();
    mock.push_response(MockResponse::Text("text".into()));

    let batch = Batch::new(&Config::default(), mock.clone());
    let summary = batch.run(&files).unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn output_is_written_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let files = touch_pdfs(dir.path(), &["paper.pdf"]);
    let text = "Line one\n\n  indented | table | cells\nLine three\n";

    let mock = MockExtractor::default();
    mock.push_response(MockResponse::Text(text.into()));

    let cfg = Config::default();
    let batch = Batch::new(&cfg, mock);
    let summary = batch.run(&files).unwrap();
    assert_eq!(summary.successful, 1);

    let out = dir.path().join("extracted_text").join("paper.pdf.txt");
    assert_eq!(summary.outcomes[0].output.as_deref(), Some(out.display().to_string().as_str()));
    assert_eq!(fs::read_to_string(&out).unwrap(), text);
}

#[test]
fn empty_text_is_reported_but_not_successful() {
    let dir = tempfile::tempdir().unwrap();
    let files = touch_pdfs(dir.path(), &["blank.pdf"]);

    let mock = MockExtractor::default();
    mock.push_response(MockResponse::Text(String::new()));

    let batch = Batch::new(&Config::default(), mock.clone());
    let summary = batch.run(&files).unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.successful, 0);
    assert_eq!(mock.call_count(), 1);
    assert_eq!(summary.outcomes[0].error.as_deref(), Some("no text extracted"));
    assert!(!dir.path().join("extracted_text").join("blank.pdf.txt").exists());
}

#[test]
fn oversized_file_is_skipped_without_a_remote_call() {
    let dir = tempfile::tempdir().unwrap();
    let files = touch_pdfs(dir.path(), &["huge.pdf"]);

    let mut cfg = Config::default();
    cfg.limits.max_input_file_bytes = 4;

    let mock = MockExtractor::default();
    let batch = Batch::new(&cfg, mock.clone());
    let summary = batch.run(&files).unwrap();

    assert_eq!(summary.successful, 0);
    assert_eq!(mock.call_count(), 0);
    assert!(summary.outcomes[0].error.as_deref().unwrap().contains("max_input_file_bytes"));
}

#[test]
fn output_path_appends_suffix_inside_sibling_dir() {
    let cfg = Config::default();
    let out = output_path(&cfg, Path::new("docs/scan.pdf")).unwrap();
    assert_eq!(out, PathBuf::from("docs/extracted_text/scan.pdf.txt"));

    // A bare file name resolves relative to the current directory.
    let out = output_path(&cfg, Path::new("scan.pdf")).unwrap();
    assert_eq!(out, PathBuf::from("./extracted_text/scan.pdf.txt"));
}
