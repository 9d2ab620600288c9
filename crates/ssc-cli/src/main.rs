//! ssc — front-end de compilation de shaders.
//!
//!   ssc comp-dxbc    -i <in.hlsl> -t <profil> [-o out] [-e entrée]
//!   ssc comp-dxil    -i <in.hlsl> -t <profil> [-o out] [-e entrée] [-v 2021] [-cswWOVbmd]
//!   ssc comp-spv     -i <in> [-l lang] [-O niveau] [-s étage] [-v version] [-ydwe] [-o out]
//!   ssc disasm-dxbc  -i <in.cso> [-o out.asm]
//!   ssc disasm-dxil  -i <in.cso> [-o out.ir]
//!
//! Codes de sortie : 0 succès, 1 E/S/outil/config, 2 usage, 3 entrée absente,
//! 4 profil invalide, 5 diagnostic backend, 6 résultat vide.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use ssc_compiler::{CommandRequest, ToolchainConfig, Toolchain};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("✖ color-eyre: {e}");
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✖ {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> ssc_compiler::Result<PathBuf> {
    let cfg = ToolchainConfig::load(cli.config.as_deref())?;
    log::debug!("outils : fxc={} dxc={} glslc={}", cfg.fxc, cfg.dxc, cfg.glslc);

    let request = CommandRequest::from(cli.cmd);
    Toolchain::from_config(&cfg).run(&request)
}

/// `RUST_LOG` garde le dernier mot sur `--verbose`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
