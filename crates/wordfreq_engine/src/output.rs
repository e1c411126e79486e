use std::io::Write;

use serde_json::json;
use wordfreq_core::WordTable;

use crate::{OutputError, OutputFormat};

/// Write one `<count>\t<word>` line per entry, in table order.
///
/// Stops at the first failed write; whatever was already written stays on the sink.
pub fn write_entries<W: Write + ?Sized>(
    table: &WordTable,
    sink: &mut W,
) -> Result<(), OutputError> {
    for entry in table.entries() {
        writeln!(sink, "{}\t{}", entry.count(), entry.word())?;
    }
    Ok(())
}

pub fn write_total<W: Write + ?Sized>(table: &WordTable, sink: &mut W) -> Result<(), OutputError> {
    writeln!(sink, "The total number of words is: {}", table.total())?;
    Ok(())
}

pub fn write_entries_json<W: Write + ?Sized>(
    table: &WordTable,
    sink: &mut W,
) -> Result<(), OutputError> {
    let document = json!({
        "distinct": table.len(),
        "total": table.total(),
        "words": table.entries().map(|e| {
            json!({
                "word": e.word().as_str(),
                "count": e.count()
            })
        }).collect::<Vec<_>>()
    });
    serde_json::to_writer_pretty(&mut *sink, &document)?;
    writeln!(sink)?;
    Ok(())
}

pub fn write_table<W: Write + ?Sized>(
    table: &WordTable,
    format: OutputFormat,
    sink: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Tsv => write_entries(table, sink),
        OutputFormat::Json => write_entries_json(table, sink),
        OutputFormat::Total => write_total(table, sink),
    }
}
