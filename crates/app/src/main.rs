//! Entry point for normalviz.
//! Loads an OBJ, packs one mesh into an interleaved buffer and reports it.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::{
    obj::Loader,
    pack::{VertexLayout, pack_mesh_with_layout},
};
use corelib::{Vec3, placement::Placement};

const DEFAULT_SCALE: f32 = 0.7;
const DEFAULT_FIT_SIZE: f32 = 2.0;

#[derive(Debug)]
struct Options {
    obj: Option<PathBuf>,
    scale: f32,
    offset: Vec3,
    fit: Option<f32>,
    mesh: usize,
    layout: VertexLayout,
    flat_normals: bool,
    out: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            obj: None,
            scale: DEFAULT_SCALE,
            offset: Vec3::ZERO,
            fit: None,
            mesh: 0,
            layout: VertexLayout::PositionNormal,
            flat_normals: false,
            out: None,
        }
    }
}

fn parse_offset(val: &str) -> Option<Vec3> {
    let mut it = val.split(',').map(|c| c.trim().parse::<f32>());
    match (it.next(), it.next(), it.next(), it.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => Some(Vec3::new(x, y, z)),
        _ => None,
    }
}

fn parse_layout(val: &str) -> VertexLayout {
    // Accept: --layout=pn|pnuv
    match val.to_ascii_lowercase().as_str() {
        "pn" | "position-normal" => VertexLayout::PositionNormal,
        "pnuv" | "position-normal-uv" => VertexLayout::PositionNormalUv,
        other => {
            log::warn!("Unknown layout '{}', falling back to pn.", other);
            VertexLayout::PositionNormal
        }
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Options {
    let mut opts = Options::default();
    for arg in args {
        if let Some(v) = arg.strip_prefix("--obj=") {
            opts.obj = Some(PathBuf::from(v));
        } else if let Some(v) = arg.strip_prefix("--scale=") {
            match v.parse::<f32>() {
                Ok(s) => opts.scale = s,
                Err(_) => log::warn!("Invalid scale '{}', keeping {}.", v, opts.scale),
            }
        } else if let Some(v) = arg.strip_prefix("--offset=") {
            match parse_offset(v) {
                Some(o) => opts.offset = o,
                None => log::warn!("Invalid offset '{}', expected X,Y,Z.", v),
            }
        } else if arg == "--fit" {
            opts.fit = Some(DEFAULT_FIT_SIZE);
        } else if let Some(v) = arg.strip_prefix("--fit=") {
            match v.parse::<f32>() {
                Ok(size) => opts.fit = Some(size),
                Err(_) => {
                    log::warn!("Invalid fit size '{}', using {}.", v, DEFAULT_FIT_SIZE);
                    opts.fit = Some(DEFAULT_FIT_SIZE);
                }
            }
        } else if let Some(v) = arg.strip_prefix("--mesh=") {
            match v.parse::<usize>() {
                Ok(m) => opts.mesh = m,
                Err(_) => log::warn!("Invalid mesh index '{}', using 0.", v),
            }
        } else if let Some(v) = arg.strip_prefix("--layout=") {
            opts.layout = parse_layout(v);
        } else if arg == "--flat-normals" {
            opts.flat_normals = true;
        } else if let Some(v) = arg.strip_prefix("--out=") {
            opts.out = Some(PathBuf::from(v));
        } else if arg.starts_with("--") {
            log::warn!("Ignoring unknown flag '{}'.", arg);
        } else {
            opts.obj = Some(PathBuf::from(arg));
        }
    }
    opts
}

fn run(opts: &Options) -> Result<()> {
    let Some(path) = opts.obj.as_deref() else {
        bail!("No OBJ file given (usage: normalviz <file.obj> [--scale=F] [--offset=X,Y,Z] ...)");
    };

    let loader = Loader::new(path);
    if !loader.is_loaded() {
        bail!("Impossible to load the object ({})", path.display());
    }

    let source = loader.meshes().get(opts.mesh).with_context(|| {
        format!(
            "Mesh #{} not found; {} has {} mesh(es)",
            opts.mesh,
            path.display(),
            loader.meshes().len()
        )
    })?;
    let flattened;
    let mesh = if opts.flat_normals && source.has_missing_normals() {
        flattened = source.with_flat_normals();
        &flattened
    } else {
        source
    };
    if mesh.has_missing_normals() {
        log::warn!(
            "Mesh '{}' has vertices without normals; lighting is undefined there.",
            mesh.name
        );
    }

    let placement = match (opts.fit, mesh.bounds()) {
        (Some(size), Some(bounds)) => Placement::fit(bounds.center(), bounds.extent(), size)?,
        _ => Placement::new(opts.scale, opts.offset)?,
    };

    let packed = pack_mesh_with_layout(mesh, &placement, opts.layout);
    if packed.is_empty() {
        log::warn!("Mesh '{}' has no faces; the packed buffer is empty.", mesh.name);
    }
    log::info!(
        "Packed mesh '{}': {} vertices, {} floats, {} bytes (stride {} bytes, scale {}, offset {})",
        mesh.name,
        packed.vertex_count,
        packed.data.len(),
        packed.as_bytes().len(),
        packed.layout.stride_bytes(),
        placement.scale,
        placement.offset
    );

    if let Some(out) = &opts.out {
        let bytes: Vec<u8> = packed.data.iter().flat_map(|f| f.to_le_bytes()).collect();
        std::fs::write(out, bytes)
            .with_context(|| format!("Failed to write packed buffer to {}", out.display()))?;
        log::info!("Wrote packed buffer to {}", out.display());
    }

    println!("{}", packed.vertex_count);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args(std::env::args().skip(1));
    log::info!(
        "Starting normalviz. obj={:?}, mesh={}, layout={:?}, fit={:?}",
        opts.obj,
        opts.mesh,
        opts.layout,
        opts.fit
    );

    run(&opts)
}
