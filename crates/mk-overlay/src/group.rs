use std::collections::{BTreeMap, HashSet};

use mk_core::{OverlayRecord, OverlayTileRecord, PipelineError, TextureSignature};
use mk_table::Table;

/// Texture signature to the file data ids drawn with it, in first-seen order.
pub type SignatureBuckets = BTreeMap<TextureSignature, Vec<i64>>;

/// Tiles grouped by map art id and texture signature.
///
/// Every bucket is non-empty and free of duplicate ids. Ids keep the order in
/// which they were first met while walking tiles by ascending tile id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedIndex {
    maps: BTreeMap<i64, SignatureBuckets>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub tiles: usize,
    pub memberships: usize,
    pub duplicates_skipped: usize,
}

impl GroupedIndex {
    pub fn build(
        overlays: &Table<OverlayRecord>,
        tiles: &Table<OverlayTileRecord>,
    ) -> Result<Self, PipelineError> {
        Self::build_with_stats(overlays, tiles).map(|(index, _)| index)
    }

    pub fn build_with_stats(
        overlays: &Table<OverlayRecord>,
        tiles: &Table<OverlayTileRecord>,
    ) -> Result<(Self, GroupStats), PipelineError> {
        let fold = tiles
            .values()
            .try_fold(GroupFold::default(), |fold, tile| -> Result<_, PipelineError> {
                let overlay_id = tile.world_map_overlay_id;
                let overlay = overlays
                    .get(&overlay_id)
                    .ok_or_else(|| PipelineError::join_integrity(tile.id, overlay_id))?;
                Ok(fold.push(
                    overlay.ui_map_art_id,
                    overlay.texture_signature(),
                    tile.file_data_id,
                ))
            })?;

        let (index, stats) = fold.finish();
        log::info!(
            "Grouped {} tiles into {} buckets across {} maps ({} duplicate ids skipped)",
            stats.tiles,
            index.bucket_count(),
            index.map_count(),
            stats.duplicates_skipped
        );
        Ok((index, stats))
    }

    pub fn maps(&self) -> &BTreeMap<i64, SignatureBuckets> {
        &self.maps
    }

    pub fn map(&self, map_id: i64) -> Option<&SignatureBuckets> {
        self.maps.get(&map_id)
    }

    pub fn bucket(&self, map_id: i64, signature: &str) -> Option<&[i64]> {
        self.maps
            .get(&map_id)
            .and_then(|buckets| buckets.get(signature))
            .map(Vec::as_slice)
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    pub fn bucket_count(&self) -> usize {
        self.maps.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[derive(Default)]
struct GroupFold {
    maps: BTreeMap<i64, BTreeMap<TextureSignature, FoldBucket>>,
    stats: GroupStats,
}

#[derive(Default)]
struct FoldBucket {
    ids: Vec<i64>,
    seen: HashSet<i64>,
}

impl GroupFold {
    fn push(mut self, map_id: i64, signature: TextureSignature, file_data_id: i64) -> Self {
        let bucket = self
            .maps
            .entry(map_id)
            .or_default()
            .entry(signature)
            .or_default();

        self.stats.tiles += 1;
        if bucket.seen.insert(file_data_id) {
            bucket.ids.push(file_data_id);
            self.stats.memberships += 1;
        } else {
            self.stats.duplicates_skipped += 1;
        }
        self
    }

    fn finish(self) -> (GroupedIndex, GroupStats) {
        let maps = self
            .maps
            .into_iter()
            .map(|(map_id, buckets)| {
                let buckets = buckets
                    .into_iter()
                    .map(|(signature, bucket)| (signature, bucket.ids))
                    .collect();
                (map_id, buckets)
            })
            .collect();
        (GroupedIndex { maps }, self.stats)
    }
}
