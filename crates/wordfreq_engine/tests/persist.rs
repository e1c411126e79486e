use std::fs;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tempfile::TempDir;
use wordfreq_engine::{
    ensure_output_dir, write_entries, write_file_atomically, AtomicFileWriter, OutputError, Word,
    WordTable,
};

fn write_text(text: &'static str) -> impl FnOnce(&mut dyn Write) -> Result<(), OutputError> {
    move |sink: &mut dyn Write| {
        sink.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write_with("counts.tsv", write_text("1\ta\n")).unwrap();
    assert_eq!(first.file_name().unwrap(), "counts.tsv");
    assert_eq!(fs::read_to_string(&first).unwrap(), "1\ta\n");

    let second = writer.write_with("counts.tsv", write_text("2\tb\n")).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "2\tb\n");
}

#[test]
fn failed_write_leaves_existing_target_untouched() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let target = writer.write_with("counts.tsv", write_text("keep\n")).unwrap();

    let result = writer.write_with("counts.tsv", |sink| {
        sink.write_all(b"partial")?;
        Err(OutputError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        )))
    });

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep\n");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write_with("counts.tsv", write_text("data"));
    assert!(result.is_err());
    assert!(!file_path.with_file_name("counts.tsv").exists());
}

#[test]
fn table_can_be_written_to_nested_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("counts.tsv");
    let mut table = WordTable::new();
    for w in ["cat", "the", "the"] {
        table.insert_or_increment(&Word::parse(w).unwrap()).unwrap();
    }

    let written = write_file_atomically(&target, |sink| write_entries(&table, sink)).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "2\tthe\n1\tcat\n");
}

#[test]
fn replaced_target_never_goes_missing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let target = writer.write_with("counts.tsv", write_text("1\ta\n")).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let watcher = {
        let done = Arc::clone(&done);
        let target = target.clone();
        thread::spawn(move || {
            let mut missing = 0usize;
            while !done.load(Ordering::Relaxed) {
                if fs::metadata(&target).is_err() {
                    missing += 1;
                }
            }
            missing
        })
    };

    for i in 0..200 {
        let text = if i % 2 == 0 { "2\tb\n" } else { "3\tc\n" };
        writer.write_with("counts.tsv", write_text(text)).unwrap();
    }
    done.store(true, Ordering::Relaxed);

    assert_eq!(watcher.join().unwrap(), 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "3\tc\n");
}
