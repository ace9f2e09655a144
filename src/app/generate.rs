// IconGen - app/generate.rs
//
// Icon generation pipeline: render -> encode -> write, one icon at a time.
//
// `generate` handles a single icon. `run` is the driver: it prepares the
// output directory, then walks the icon set in order and stops at the first
// failure. Every run starts from scratch, so there is nothing to recover.

use crate::core::icon;
use crate::core::model::IconSpec;
use crate::platform::fs;
use crate::util::error::IconGenError;
use std::path::{Path, PathBuf};

/// One icon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
    /// Encoded PNG length in bytes.
    pub bytes: usize,
}

/// Outcome of a complete driver run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Icons in the order they were written.
    pub icons: Vec<GeneratedIcon>,
}

/// Render a `size` x `size` icon and write it as PNG to `output_path`.
///
/// Existing files are overwritten. The parent directory must already exist.
/// Returns the path that was written.
pub fn generate(size: u32, output_path: &Path) -> Result<PathBuf, IconGenError> {
    generate_icon(size, output_path).map(|icon| icon.path)
}

fn generate_icon(size: u32, output_path: &Path) -> Result<GeneratedIcon, IconGenError> {
    let png = icon::render_png(size)?;
    fs::write_file(output_path, &png)?;

    tracing::info!(
        size,
        path = %output_path.display(),
        bytes = png.len(),
        "Icon generated"
    );

    Ok(GeneratedIcon {
        path: output_path.to_path_buf(),
        size,
        bytes: png.len(),
    })
}

/// Generate every icon in `specs` into `output_dir`.
///
/// The directory is created first; if that fails nothing is generated.
/// `on_icon` is called after each file is written so callers can report
/// progress as it happens.
pub fn run<F>(
    output_dir: &Path,
    specs: &[IconSpec],
    mut on_icon: F,
) -> Result<GenerationReport, IconGenError>
where
    F: FnMut(&GeneratedIcon),
{
    fs::ensure_dir(output_dir)?;

    let mut report = GenerationReport {
        output_dir: output_dir.to_path_buf(),
        icons: Vec::with_capacity(specs.len()),
    };

    for spec in specs {
        let path = output_dir.join(&spec.filename);
        let icon = generate_icon(spec.size, &path).map_err(|e| {
            tracing::error!(
                file = %spec.filename,
                size = spec.size,
                error = %e,
                "Icon generation failed; aborting run"
            );
            e
        })?;
        on_icon(&icon);
        report.icons.push(icon);
    }

    tracing::info!(
        dir = %output_dir.display(),
        count = report.icons.len(),
        "Icon set complete"
    );
    Ok(report)
}

/// [`run`] with the fixed icon set.
pub fn run_default<F>(output_dir: &Path, on_icon: F) -> Result<GenerationReport, IconGenError>
where
    F: FnMut(&GeneratedIcon),
{
    run(output_dir, &IconSpec::default_set(), on_icon)
}
