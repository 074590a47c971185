use std::borrow::Borrow;
use std::fmt;

/// A record shape that can be materialized from one positional CSV row.
pub trait TableRecord: Sized {
    /// Human readable table name used in log lines.
    const KIND: &'static str;
    /// Column names in file order; rows must carry at least this many fields.
    const COLUMNS: &'static [&'static str];

    fn key(&self) -> i64;

    /// `fields` holds exactly `COLUMNS.len()` values in column order.
    fn from_fields(fields: &[i64]) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRect {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRecord {
    pub id: i64,
    pub ui_map_art_id: i64,
    pub texture_width: i64,
    pub texture_height: i64,
    pub offset_x: i64,
    pub offset_y: i64,
    pub hit_rect: HitRect,
    pub player_condition_id: i64,
    pub flags: i64,
    pub area_ids: [i64; 4],
}

impl OverlayRecord {
    pub fn texture_signature(&self) -> TextureSignature {
        TextureSignature::new(
            self.texture_width,
            self.texture_height,
            self.offset_x,
            self.offset_y,
        )
    }
}

impl TableRecord for OverlayRecord {
    const KIND: &'static str = "overlay";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "UiMapArtID",
        "TextureWidth",
        "TextureHeight",
        "OffsetX",
        "OffsetY",
        "HitRectTop",
        "HitRectBottom",
        "HitRectLeft",
        "HitRectRight",
        "PlayerConditionID",
        "Flags",
        "AreaID_0",
        "AreaID_1",
        "AreaID_2",
        "AreaID_3",
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn from_fields(fields: &[i64]) -> Self {
        Self {
            id: fields[0],
            ui_map_art_id: fields[1],
            texture_width: fields[2],
            texture_height: fields[3],
            offset_x: fields[4],
            offset_y: fields[5],
            hit_rect: HitRect {
                top: fields[6],
                bottom: fields[7],
                left: fields[8],
                right: fields[9],
            },
            player_condition_id: fields[10],
            flags: fields[11],
            area_ids: [fields[12], fields[13], fields[14], fields[15]],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayTileRecord {
    pub id: i64,
    pub row_index: i64,
    pub col_index: i64,
    pub layer_index: i64,
    pub file_data_id: i64,
    pub world_map_overlay_id: i64,
}

impl TableRecord for OverlayTileRecord {
    const KIND: &'static str = "overlay tile";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "RowIndex",
        "ColIndex",
        "LayerIndex",
        "FileDataID",
        "WorldMapOverlayID",
    ];

    fn key(&self) -> i64 {
        self.id
    }

    fn from_fields(fields: &[i64]) -> Self {
        Self {
            id: fields[0],
            row_index: fields[1],
            col_index: fields[2],
            layer_index: fields[3],
            file_data_id: fields[4],
            world_map_overlay_id: fields[5],
        }
    }
}

/// Canonical `"width:height:offsetX:offsetY"` key. Orders as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureSignature(String);

impl TextureSignature {
    pub fn new(width: i64, height: i64, offset_x: i64, offset_y: i64) -> Self {
        Self(format!("{}:{}:{}:{}", width, height, offset_x, offset_y))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TextureSignature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextureSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
