//! File-backed persistence for accounts, expense partitions and the working-context checkpoint.
//!
//! Every store rewrites its whole backing file on each mutation. Writes are staged to a
//! sibling `*.tmp` file and renamed over the target so readers never observe a torn file.

pub mod accounts;
pub mod checkpoint;
pub mod expenses;
pub(crate) mod records;

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

pub use accounts::AccountDirectory;
pub use checkpoint::{Checkpoint, CheckpointStore, CHECKPOINT_LEN};
pub use expenses::{ExpensePartitionStore, Partition, PartitionKey};

const TMP_SUFFIX: &str = "tmp";

/// Reads a whole file, mapping a missing file to `None`.
pub(crate) fn read_if_exists(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Replaces the contents of `path` with `data`. A failed write leaves neither a
/// staging file nor a modified target behind.
pub(crate) fn write_replacing(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let staged = write_staged(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if let Err(err) = staged {
        if tmp.is_file() {
            let _ = fs::remove_file(&tmp);
        }
        return Err(err);
    }
    Ok(())
}

fn write_staged(tmp: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data)?;
    file.flush()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
