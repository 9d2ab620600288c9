//! paths.rs — validation de l'entrée et dérivation du chemin de sortie.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, SscError};

/// Vérifie que `input` désigne un fichier existant, puis choisit la sortie :
/// - `explicit` non vide → renvoyé tel quel
/// - sinon `<dossier absolu de input>/<nom sans extension>.<default_ext>`
///
/// `default_ext` peut être vide : la sortie se termine alors par un `.` et
/// l'appelant y ajoute l'extension du profil (voir [`append_extension`]).
pub fn resolve(input: &Path, explicit: Option<&Path>, default_ext: &str) -> Result<(PathBuf, PathBuf)> {
    if !input.is_file() {
        return Err(SscError::InputNotFound(input.to_path_buf()));
    }

    if let Some(out) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok((input.to_path_buf(), out.to_path_buf()));
    }

    let absolute = std::path::absolute(input).map_err(|e| SscError::io(input, e))?;
    let dir = absolute.parent().unwrap_or_else(|| Path::new(""));
    let mut name: OsString = input.file_stem().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".");
    name.push(default_ext);

    Ok((input.to_path_buf(), dir.join(name)))
}

/// Ajoute `ext` à la fin du chemin, sans séparateur ni remplacement.
/// `shader.` + `vso` → `shader.vso` ; `out.bin` + `vso` → `out.binvso`.
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}
