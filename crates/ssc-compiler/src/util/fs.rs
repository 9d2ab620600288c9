use std::fs;
use std::path::Path;

use crate::error::{Result, SscError};

pub fn ensure_parent(p: &Path) -> Result<()> {
    match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| SscError::io(dir, e))
        }
        _ => Ok(()),
    }
}

pub fn read_to_bytes(p: &Path) -> Result<Vec<u8>> {
    fs::read(p).map_err(|e| SscError::io(p, e))
}

pub fn read_to_string(p: &Path) -> Result<String> {
    fs::read_to_string(p).map_err(|e| SscError::io(p, e))
}

/// Lit un produit d'outil ; un fichier absent vaut un résultat vide.
pub fn read_product(p: &Path) -> Result<Vec<u8>> {
    match fs::read(p) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(SscError::io(p, e)),
    }
}

/// Écrit (ou écrase) `p`, en créant les dossiers parents.
pub fn write_all(p: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(p)?;
    fs::write(p, bytes).map_err(|e| SscError::io(p, e))
}
