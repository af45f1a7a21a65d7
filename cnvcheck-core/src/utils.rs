use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::errors::{CnvCheckError, Result};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| CnvCheckError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Name a sample after its file: the file name without directories or a trailing `.gz`.
///
pub fn sample_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    match file_name.strip_suffix(".gz") {
        Some(stripped) => stripped.to_string(),
        None => file_name,
    }
}

///
/// Whether the path looks like a sample table (`.csv` or `.csv.gz`).
///
pub fn is_sample_file(path: &Path) -> bool {
    let name = sample_name_from_path(path);
    Path::new(&name).extension() == Some(OsStr::new("csv"))
}

///
/// List every sample table directly inside a directory, sorted by path.
///
pub fn list_sample_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_sample_file(path))
        .collect();
    files.sort();

    Ok(files)
}
