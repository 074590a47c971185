use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use mk_core::{FormatError, PipelineError, TableRecord};

/// Records keyed by their first column. Iteration order is ascending id.
pub type Table<R> = BTreeMap<i64, R>;

/// Opens `path`, reads every row and closes the file before returning.
pub fn load_table<R: TableRecord>(path: &Path) -> Result<Table<R>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::io("open", path, source))?;
    let table = read_table::<R, _>(file, path)?;
    log::info!(
        "Loaded {} {} rows from {}",
        table.len(),
        R::KIND,
        path.display()
    );
    Ok(table)
}

/// Parses CSV text from `reader`. The first row is a header and is never inspected.
/// `source` only names the input in errors.
pub fn read_table<R: TableRecord, Rd: Read>(
    reader: Rd,
    source: &Path,
) -> Result<Table<R>, PipelineError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut table = Table::new();
    let mut fields = Vec::with_capacity(R::COLUMNS.len());

    for result in csv_reader.byte_records() {
        let record = result.map_err(|error| map_csv_error(error, source))?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);

        if record.len() < R::COLUMNS.len() {
            return Err(PipelineError::format(
                source,
                line,
                FormatError::ShortRow {
                    expected: R::COLUMNS.len(),
                    found: record.len(),
                },
            ));
        }

        fields.clear();
        for (column, raw) in R::COLUMNS.iter().copied().zip(record.iter()) {
            let parsed = std::str::from_utf8(raw)
                .ok()
                .and_then(|value| value.parse::<i64>().ok())
                .ok_or_else(|| {
                    PipelineError::format(
                        source,
                        line,
                        FormatError::NotAnInteger {
                            column,
                            value: String::from_utf8_lossy(raw).into_owned(),
                        },
                    )
                })?;
            fields.push(parsed);
        }

        let row = R::from_fields(&fields);
        let key = row.key();
        if table.insert(key, row).is_some() {
            log::debug!(
                "{}:{}: duplicate {} id {}, keeping the later row",
                source.display(),
                line,
                R::KIND,
                key
            );
        }
    }

    Ok(table)
}

/// Fields are decoded per column, so only reader-level failures land here.
fn map_csv_error(error: csv::Error, source: &Path) -> PipelineError {
    let line = error.position().map(|position| position.line()).unwrap_or(0);
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io_error) => PipelineError::io("read", source, io_error),
        _ => PipelineError::format(source, line, FormatError::Malformed { message }),
    }
}
