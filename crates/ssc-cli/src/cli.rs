//! cli.rs — grammaire `ssc <verbe> [drapeaux]`.
//!
//! Un verbe inconnu ou un drapeau requis manquant est rejeté par clap
//! (message d'usage, code 2) avant tout appel de backend.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ssc_compiler::request::{
    CommandRequest, CompileDxbc, CompileDxil, CompileSpirv, Disassemble, DxilToggles,
};

#[derive(Parser, Debug)]
#[command(name = "ssc", version, about = "Compile ou désassemble des shaders via fxc, dxc ou glslc")]
pub struct Cli {
    /// Verbosité (répéter pour plus de bruit : info, debug, trace)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Fichier de configuration des outils (défaut : ./ssc.toml s'il existe)
    #[arg(long, value_name = "FICHIER")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Compile un shader HLSL au format DXBC.
    #[command(name = "comp-dxbc")]
    CompDxbc(CompDxbcArgs),

    /// Compile un shader HLSL au format DXIL.
    #[command(name = "comp-dxil")]
    CompDxil(CompDxilArgs),

    /// Compile un shader GLSL ou HLSL au format SPIR-V.
    #[command(name = "comp-spv")]
    CompSpv(CompSpvArgs),

    /// Désassemble du bytecode DXBC.
    #[command(name = "disasm-dxbc")]
    DisasmDxbc(DisasmArgs),

    /// Désassemble du bytecode DXIL en IR LLVM.
    #[command(name = "disasm-dxil")]
    DisasmDxil(DisasmArgs),
}

#[derive(Args, Debug)]
pub struct CompDxbcArgs {
    /// Fichier d'entrée (shader HLSL)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Profil cible 'étage_majeur_mineur' (ex. vs_5_0)
    #[arg(short = 't', long = "target")]
    pub target: String,

    /// Fichier de sortie ; l'extension du profil y est ajoutée (défaut <entrée>.<ext>)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Point d'entrée (défaut 'main')
    #[arg(short = 'e', long = "entry")]
    pub entry: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompDxilArgs {
    /// Fichier d'entrée (shader HLSL)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Profil cible 'étage_majeur_mineur' (ex. ps_6_0)
    #[arg(short = 't', long = "target")]
    pub target: String,

    /// Point d'entrée (défaut 'main')
    #[arg(short = 'e', long = "entry")]
    pub entry: Option<String>,

    /// Version HLSL : 2016, 2017, 2018, 2021 (défaut '2021')
    #[arg(short = 'v', long = "version")]
    pub hlsl_version: Option<String>,

    /// Mode de compatibilité ascendante
    #[arg(short = 'c', long = "compat")]
    pub compat: bool,

    /// Mode strict
    #[arg(short = 's', long = "strict")]
    pub strict: bool,

    /// Supprime les avertissements
    #[arg(short = 'w', long = "supwarn")]
    pub suppress_warnings: bool,

    /// Avertissements traités comme erreurs
    #[arg(short = 'W', long = "warnerr")]
    pub warnings_as_errors: bool,

    /// Désactive les optimisations
    #[arg(short = 'O', long = "disopt")]
    pub disable_optimizations: bool,

    /// Désactive la validation
    #[arg(short = 'V', long = "disval")]
    pub disable_validation: bool,

    /// Active les types 16 bits
    #[arg(short = 'b', long = "16bit")]
    pub enable_16bit_types: bool,

    /// Développe les opérandes avant le collage de jetons (comportement fxc)
    #[arg(short = 'm', long = "macroexp")]
    pub legacy_macro_expansion: bool,

    /// Informations de debug
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Fichier de sortie ; l'extension du profil y est ajoutée (défaut <entrée>.<ext>)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompSpvArgs {
    /// Fichier d'entrée (shader GLSL ou HLSL)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Langage source : GLSL, HLSL
    #[arg(short = 'l', long = "lang")]
    pub language: Option<String>,

    /// Optimisation : zero, size, performance (défaut 'performance')
    #[arg(short = 'O', long = "level")]
    pub optimization: Option<String>,

    /// Inverse l'axe Y
    #[arg(short = 'y', long = "invert")]
    pub invert_y: bool,

    /// Informations de debug
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Supprime les avertissements
    #[arg(short = 'w', long = "supwarn")]
    pub suppress_warnings: bool,

    /// Avertissements traités comme erreurs
    #[arg(short = 'e', long = "warnerr")]
    pub warnings_as_errors: bool,

    /// Étage : VertexShader, FragmentShader, ComputeShader, GLSL_InferFromSource, MeshShader…
    #[arg(short = 's', long = "stage")]
    pub stage: Option<String>,

    /// Version SPIR-V visée : Version_1_0 … Version_1_6
    #[arg(short = 'v', long = "version")]
    pub spirv_version: Option<String>,

    /// Fichier de sortie (défaut <entrée>.spv)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DisasmArgs {
    /// Fichier d'entrée (bytecode compilé)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Fichier de sortie (défaut <entrée>.asm pour DXBC, <entrée>.ir pour DXIL)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl From<Cmd> for CommandRequest {
    fn from(cmd: Cmd) -> Self {
        match cmd {
            Cmd::CompDxbc(a) => CommandRequest::CompileDxbc(CompileDxbc {
                input: a.input,
                output: a.output,
                target: a.target,
                entry: a.entry,
            }),
            Cmd::CompDxil(a) => CommandRequest::CompileDxil(CompileDxil {
                input: a.input,
                output: a.output,
                target: a.target,
                entry: a.entry,
                hlsl_version: a.hlsl_version,
                toggles: DxilToggles {
                    enable_16bit_types: a.enable_16bit_types,
                    legacy_macro_expansion: a.legacy_macro_expansion,
                    debug: a.debug,
                    disable_optimizations: a.disable_optimizations,
                    disable_validation: a.disable_validation,
                    compatibility_mode: a.compat,
                    strict_mode: a.strict,
                    suppress_warnings: a.suppress_warnings,
                    warnings_as_errors: a.warnings_as_errors,
                },
            }),
            Cmd::CompSpv(a) => CommandRequest::CompileSpirv(CompileSpirv {
                input: a.input,
                output: a.output,
                language: a.language,
                optimization: a.optimization,
                stage: a.stage,
                spirv_version: a.spirv_version,
                invert_y: a.invert_y,
                debug: a.debug,
                suppress_warnings: a.suppress_warnings,
                warnings_as_errors: a.warnings_as_errors,
            }),
            Cmd::DisasmDxbc(a) => {
                CommandRequest::DisassembleDxbc(Disassemble { input: a.input, output: a.output })
            }
            Cmd::DisasmDxil(a) => {
                CommandRequest::DisassembleDxil(Disassemble { input: a.input, output: a.output })
            }
        }
    }
}
