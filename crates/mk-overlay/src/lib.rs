//! Joins overlay tiles to their overlays and renders the `RevealDatabase` table.

mod group;
mod pipeline;
mod render;

pub use group::{GroupStats, GroupedIndex, SignatureBuckets};
pub use pipeline::{run_pipeline, PipelinePaths, PipelineSummary};
pub use render::{render_reveal_database, write_output_file, write_reveal_database};
