use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Deserialize;

use voxplate_blocks::{
    BlockColorOverrides, BlockColors, BlockState, TextureMappings, java_string_hash,
};
use voxplate_mesh::{PlateMesh, build_plate_mesh};
use voxplate_plate::Plate;

/// Meshes a block structure and reports the resulting material batches.
#[derive(Parser)]
#[command(name = "voxplate", version)]
struct Args {
    /// Structure description: TOML with [[blocks]] entries
    structure: PathBuf,
    /// Texture mappings TOML; without it every batch keys on the block name
    #[arg(long)]
    mappings: Option<PathBuf>,
}

#[derive(Deserialize)]
struct StructureConfig {
    #[serde(default)]
    colors: BlockColorOverrides,
    blocks: Vec<BlockEntry>,
}

#[derive(Deserialize)]
struct BlockEntry {
    pos: [i32; 3],
    name: String,
    #[serde(default)]
    properties: HashMap<String, String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg: StructureConfig = toml::from_str(&fs::read_to_string(&args.structure)?)?;

    let mut plate = Plate::new();
    for b in &cfg.blocks {
        plate.set_block(
            b.pos[0],
            b.pos[1],
            b.pos[2],
            BlockState::with_props(b.name.clone(), b.properties.clone()),
        );
    }
    log::info!(
        "loaded {} blocks from {}",
        cfg.blocks.len(),
        args.structure.display()
    );

    let mappings = match &args.mappings {
        Some(path) => {
            let mut m = TextureMappings::from_path(path)?;
            install_presets(&mut m);
            m
        }
        None => TextureMappings::new(),
    };

    let colors = BlockColors::default().with_overrides(cfg.colors);
    let mesh = build_plate_mesh(&plate, &mappings);
    report(&mesh, &colors);
    Ok(())
}

/// Suppliers for blocks whose texture name is composed from several
/// properties rather than picked per orientation.
fn install_presets(mappings: &mut TextureMappings) {
    mappings.set_supplier(
        "pointed_dripstone",
        Arc::new(|state: &BlockState, _| {
            let dir = if state.prop_is("direction", "up") {
                "up"
            } else {
                "down"
            };
            let thickness = state.prop("thickness").unwrap_or("tip");
            format!("pointed_dripstone_{}_{}", dir, thickness)
        }),
    );
}

fn report(mesh: &PlateMesh, colors: &BlockColors) {
    let b = mesh.bounds;
    log::info!(
        "bounds: ({}, {}, {}) .. ({}, {}, {})",
        b.min.x,
        b.min.y,
        b.min.z,
        b.max.x,
        b.max.y,
        b.max.z
    );

    let mut keys: Vec<&String> = mesh.batches.keys().collect();
    keys.sort();
    for key in keys {
        let batch = &mesh.batches[key];
        log::info!(
            "batch {}: {} quads, {} vertices, color #{:06x}",
            key,
            batch.quad_count(),
            batch.vertex_count(),
            fallback_color(key, colors)
        );
    }
    for custom in &mesh.customs {
        log::info!(
            "custom {}: {} vertices, color #{:06x}",
            custom.key,
            custom.build.vertex_count(),
            fallback_color(&custom.key, colors)
        );
    }
    log::info!(
        "total: {} batched quads across {} materials, {} custom meshes",
        mesh.quad_count(),
        mesh.batches.len(),
        mesh.customs.len()
    );
}

/// Tint color when the key belongs to a tinted family, otherwise the
/// repeatable hash color used in place of a texture atlas.
fn fallback_color(key: &str, colors: &BlockColors) -> u32 {
    colors
        .color_for(key)
        .unwrap_or_else(|| (java_string_hash(key) as u32) & 0x00FF_FFFF)
}
