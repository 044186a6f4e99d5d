use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder as _, Frame, RgbaImage, imageops};

use crate::error::{GifsheetError, GifsheetResult};
use crate::layout::GridLayout;

/// Suffix appended to the source file's stem to name the output sheet.
const OUTPUT_SUFFIX: &str = "_spritesheet.png";

/// Convert one animated GIF into a tiled PNG spritesheet.
///
/// Frames are decoded in a single pass, laid out row-major on a near-square
/// grid, and overwrite-pasted (no alpha blending) onto a transparent canvas.
/// The sheet is written as `{stem}_spritesheet.png` into `output_dir` if
/// given (created if absent), otherwise next to the source file, silently
/// replacing any previous output.
///
/// A GIF with zero frames is rejected with [`GifsheetError::NoFrames`];
/// frames that do not all share frame 0's dimensions are rejected with
/// [`GifsheetError::FrameSizeMismatch`].
#[tracing::instrument]
pub fn build_spritesheet(
    source_path: &Path,
    output_dir: Option<&Path>,
) -> GifsheetResult<PathBuf> {
    let file = File::open(source_path)?;
    let decoder = GifDecoder::new(BufReader::new(file))
        .map_err(|e| GifsheetError::decode(format!("'{}': {e}", source_path.display())))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| GifsheetError::decode(format!("'{}': {e}", source_path.display())))?;

    if frames.is_empty() {
        return Err(GifsheetError::NoFrames(source_path.to_path_buf()));
    }

    let (frame_w, frame_h) = validate_uniform_dimensions(&frames)?;
    let grid = GridLayout::for_frame_count(frames.len() as u32);
    tracing::debug!(
        frames = frames.len(),
        columns = grid.columns,
        rows = grid.rows,
        "computed grid layout"
    );

    let (sheet_w, sheet_h) = grid.sheet_size(frame_w, frame_h);
    // RgbaImage::new zero-fills, so every cell starts fully transparent.
    let mut canvas = RgbaImage::new(sheet_w, sheet_h);

    for (index, frame) in frames.iter().enumerate() {
        let (x, y) = grid.cell_origin(index as u32, frame_w, frame_h);
        imageops::replace(&mut canvas, frame.buffer(), i64::from(x), i64::from(y));
    }

    let out_path = output_path(source_path, output_dir)?;
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    image::save_buffer_with_format(
        &out_path,
        canvas.as_raw(),
        sheet_w,
        sheet_h,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(io) => GifsheetError::Io(io),
        other => GifsheetError::Other(
            anyhow::Error::new(other).context(format!("write png '{}'", out_path.display())),
        ),
    })?;

    tracing::debug!(path = %out_path.display(), "wrote spritesheet");
    Ok(out_path)
}

/// All frames must match frame 0's dimensions, or the grid arithmetic would
/// silently misplace them. Returns the shared `(width, height)`.
fn validate_uniform_dimensions(frames: &[Frame]) -> GifsheetResult<(u32, u32)> {
    let (frame_w, frame_h) = frames[0].buffer().dimensions();
    for (index, frame) in frames.iter().enumerate().skip(1) {
        let (w, h) = frame.buffer().dimensions();
        if (w, h) != (frame_w, frame_h) {
            return Err(GifsheetError::frame_size_mismatch(format!(
                "frame {index} is {w}x{h}, expected {frame_w}x{frame_h}"
            )));
        }
    }
    Ok((frame_w, frame_h))
}

fn output_path(source_path: &Path, output_dir: Option<&Path>) -> GifsheetResult<PathBuf> {
    let stem = source_path.file_stem().ok_or_else(|| {
        anyhow::anyhow!("source path '{}' has no file name", source_path.display())
    })?;

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => source_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };

    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    Ok(dir.join(name))
}
