//! ssc-compiler — orchestrateur de compilation de shaders.
//! - Valide/dérive les chemins d'entrée et de sortie
//! - Traduit les options de chaque commande vers le backend concerné
//! - Fournit des backends **pratiques** qui pilotent `fxc`, `dxc` et `glslc`
//! - Écrit l'artefact tel quel (aucune transformation des octets)

pub mod artifact;
pub mod backends;
pub mod config;
pub mod error;
pub mod options;
pub mod paths;
pub mod pipeline;
pub mod profile;
pub mod request;
mod util;

pub use artifact::{CompiledArtifact, Status};
pub use config::ToolchainConfig;
pub use error::{Result, SscError};
pub use pipeline::Toolchain;
pub use request::CommandRequest;
