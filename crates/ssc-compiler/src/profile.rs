//! profile.rs — extension d'artefact déduite du profil cible (`vs_6_0` → `vso`).

use crate::error::{Result, SscError};

/// Préfixes connus ; aucun n'est préfixe d'un autre, le premier trouvé gagne.
const PROFILE_EXTENSIONS: &[(&str, &str)] = &[
    ("vs_", "vso"),
    ("ps_", "pso"),
    ("gs_", "gso"),
    ("cs_", "cso"),
    ("hs_", "hso"),
    ("ds_", "dso"),
    ("fx_", "fxo"),
    ("as_", "aso"),
    ("ms_", "mso"),
];

pub fn extension_for(target_profile: &str) -> Result<&'static str> {
    PROFILE_EXTENSIONS
        .iter()
        .find(|(prefix, _)| target_profile.starts_with(prefix))
        .map(|(_, ext)| *ext)
        .ok_or_else(|| SscError::InvalidTargetProfile(target_profile.to_string()))
}
