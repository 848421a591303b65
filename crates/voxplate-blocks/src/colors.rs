use serde::Deserialize;

/// Tint colors applied to the texture families that ship grayscale in vanilla
/// resource packs. An explicit value handed to the reporting/render layer, not
/// module state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockColors {
    pub grass: u32,
    pub water: u32,
    pub lily_pad: u32,
    pub foliage: u32,
    pub spruce: u32,
    pub birch: u32,
    pub stem: u32,
}

impl Default for BlockColors {
    fn default() -> Self {
        Self {
            grass: 0x90bd59,
            water: 0x3f76e4,
            lily_pad: 0x71c35c,
            foliage: 0x77aa2f,
            spruce: 0x619963,
            birch: 0x7fa755,
            stem: 0xe0c71c,
        }
    }
}

/// Partial override set merged over the defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct BlockColorOverrides {
    pub grass: Option<u32>,
    pub water: Option<u32>,
    pub lily_pad: Option<u32>,
    pub foliage: Option<u32>,
    pub spruce: Option<u32>,
    pub birch: Option<u32>,
    pub stem: Option<u32>,
}

impl BlockColors {
    pub fn with_overrides(self, o: BlockColorOverrides) -> Self {
        Self {
            grass: o.grass.unwrap_or(self.grass),
            water: o.water.unwrap_or(self.water),
            lily_pad: o.lily_pad.unwrap_or(self.lily_pad),
            foliage: o.foliage.unwrap_or(self.foliage),
            spruce: o.spruce.unwrap_or(self.spruce),
            birch: o.birch.unwrap_or(self.birch),
            stem: o.stem.unwrap_or(self.stem),
        }
    }

    /// Tint for a material key, if that key belongs to a tinted family.
    pub fn color_for(&self, key: &str) -> Option<u32> {
        match key {
            "birch_leaves" => Some(self.birch),
            "water_flow" | "bubble_column" => Some(self.water),
            "lily_pad" => Some(self.lily_pad),
            "acacia_leaves" | "dark_oak_leaves" | "jungle_leaves" | "oak_leaves" | "vine" => {
                Some(self.foliage)
            }
            "grass_block" | "large_fern" | "tall_grass" | "sugar_cane" => Some(self.grass),
            "spruce_leaves" => Some(self.spruce),
            "attached_melon_stem" | "melon_stem" | "attached_pumpkin_stem" | "pumpkin_stem" => {
                Some(self.stem)
            }
            _ => None,
        }
    }
}
