use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{collect_lua_files, is_excluded, LintError, LintSettings, Linter};

/// Outputs this short are noise (an empty line from the linter pipeline).
const MIN_REPORT_LEN: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub checked: usize,
    pub excluded: usize,
    pub reported: usize,
    pub failed: usize,
}

/// Lints each non-excluded file and appends every meaningful output, followed
/// by a newline, to `out`. Linter failures are logged and do not stop the run.
pub fn run_checks<W: Write>(
    files: &[PathBuf],
    exclude: &[String],
    linter: &dyn Linter,
    mut out: W,
) -> io::Result<LintSummary> {
    let mut summary = LintSummary::default();

    for file in files {
        if is_excluded(file, exclude) {
            log::debug!("Skipping excluded {}", file.display());
            summary.excluded += 1;
            continue;
        }

        let outcome = linter.run_lint(file);
        summary.checked += 1;
        if let Some(error) = &outcome.error {
            log::warn!("{}: {}", file.display(), error);
            summary.failed += 1;
        }

        if outcome.output.len() >= MIN_REPORT_LEN {
            writeln!(out, "{}", outcome.output)?;
            summary.reported += 1;
        } else {
            log::debug!("{}: clean", file.display());
        }
    }

    Ok(summary)
}

/// Walks the configured folder and writes the report file.
pub fn run_check_globals(
    settings: &LintSettings,
    linter: &dyn Linter,
) -> Result<LintSummary, LintError> {
    let folder = absolute_folder(&settings.folder)?;
    let files = collect_lua_files(&folder)?;
    log::info!("Found {} Lua files under {}", files.len(), folder.display());

    let write_error = |source| LintError::WriteReport {
        path: settings.output.clone(),
        source,
    };
    let file = File::create(&settings.output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let summary = run_checks(&files, &settings.exclude, linter, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    log::info!(
        "Checked {} files ({} excluded, {} with findings, {} linter failures) -> {}",
        summary.checked,
        summary.excluded,
        summary.reported,
        summary.failed,
        settings.output.display()
    );
    Ok(summary)
}

fn absolute_folder(folder: &Path) -> Result<PathBuf, LintError> {
    if folder.is_absolute() {
        return Ok(folder.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(folder))
        .map_err(|source| LintError::Folder {
            path: folder.to_path_buf(),
            source,
        })
}
