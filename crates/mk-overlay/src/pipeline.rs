use std::path::PathBuf;

use mk_core::{OverlayRecord, OverlayTileRecord, PipelineError};
use mk_table::load_table;

use crate::{write_output_file, GroupedIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub overlay: PathBuf,
    pub overlay_tile: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub overlays: usize,
    pub tiles: usize,
    pub maps: usize,
    pub buckets: usize,
}

/// Loads both tables, groups the tiles and writes the output table.
///
/// The output file is only touched after grouping succeeded.
pub fn run_pipeline(paths: &PipelinePaths) -> Result<PipelineSummary, PipelineError> {
    let overlays = load_table::<OverlayRecord>(&paths.overlay)?;
    let tiles = load_table::<OverlayTileRecord>(&paths.overlay_tile)?;

    let index = GroupedIndex::build(&overlays, &tiles)
        .map_err(|error| error.in_file(&paths.overlay_tile))?;
    write_output_file(&paths.output, &index)?;

    Ok(PipelineSummary {
        overlays: overlays.len(),
        tiles: tiles.len(),
        maps: index.map_count(),
        buckets: index.bucket_count(),
    })
}
