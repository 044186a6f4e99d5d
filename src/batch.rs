use std::path::{Path, PathBuf};

use crate::error::{GifsheetError, GifsheetResult};
use crate::sheet::build_spritesheet;

/// Convert every `.gif` file directly inside `input_dir` (non-recursive,
/// extension matched case-insensitively) and return how many converted
/// successfully.
///
/// This is the error boundary of the batch: a file that fails to convert is
/// reported on stderr and skipped, never aborting the run. Only a missing
/// input directory (or an unreadable directory listing) is fatal.
pub fn process_directory(input_dir: &Path, output_dir: Option<&Path>) -> GifsheetResult<usize> {
    if !input_dir.is_dir() {
        return Err(GifsheetError::InputNotFound(input_dir.to_path_buf()));
    }

    let mut gif_paths = Vec::<PathBuf>::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_gif_extension(&path) {
            gif_paths.push(path);
        }
    }
    // Sorted so diagnostics and tallies are stable across platforms.
    gif_paths.sort();

    let mut processed = 0usize;
    for path in &gif_paths {
        match build_spritesheet(path, output_dir) {
            Ok(out_path) => {
                println!("Created spritesheet: {}", out_path.display());
                processed += 1;
            }
            Err(err) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                eprintln!("Error processing {name}: {err}");
            }
        }
    }

    Ok(processed)
}

fn has_gif_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_extension_is_case_insensitive() {
        assert!(has_gif_extension(Path::new("a.gif")));
        assert!(has_gif_extension(Path::new("a.GIF")));
        assert!(has_gif_extension(Path::new("a.GiF")));
        assert!(!has_gif_extension(Path::new("a.png")));
        assert!(!has_gif_extension(Path::new("a.gif.txt")));
        assert!(!has_gif_extension(Path::new("gif")));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let err = process_directory(Path::new("target/definitely/not/here"), None).unwrap_err();
        assert!(matches!(err, GifsheetError::InputNotFound(_)));
    }
}
