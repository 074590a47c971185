use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mk_core::PipelineError;

use crate::GroupedIndex;

const TABLE_NAME: &str = "RevealDatabase";

/// Writes the index as a Lua table literal.
///
/// Map ids ascend numerically and signatures ascend as strings. File data ids
/// keep their grouping order. Identical indexes always produce identical bytes.
pub fn write_reveal_database<W: Write>(index: &GroupedIndex, mut out: W) -> io::Result<()> {
    writeln!(out, "local {} = {{", TABLE_NAME)?;

    for (map_id, buckets) in index.maps() {
        writeln!(out, "    [{}] = {{", map_id)?;
        for (signature, ids) in buckets {
            write!(out, "        [\"{}\"] = \"", signature)?;
            for (position, id) in ids.iter().enumerate() {
                if position == 0 {
                    write!(out, "{}", id)?;
                } else {
                    write!(out, ", {}", id)?;
                }
            }
            writeln!(out, "\",")?;
        }
        writeln!(out, "    }},")?;
    }

    writeln!(out, "}}")
}

pub fn render_reveal_database(index: &GroupedIndex) -> String {
    let mut buffer = Vec::new();
    write_reveal_database(index, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("rendered table is ASCII")
}

/// Creates or truncates `path` and writes the rendered table. The file is
/// flushed and closed before returning.
pub fn write_output_file(path: &Path, index: &GroupedIndex) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::io("create", path, source))?;
    let mut writer = BufWriter::new(file);
    write_reveal_database(index, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|source| PipelineError::io("write", path, source))?;
    log::info!("Wrote {} maps to {}", index.map_count(), path.display());
    Ok(())
}
