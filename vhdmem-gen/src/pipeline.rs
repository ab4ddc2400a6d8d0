//! Generation pipeline
//!
//! ```text
//! sizes -> templates -> decode instructions -> load config -> render -> write config -> write program
//! ```
//!
//! Nothing is rolled back: when the program output cannot be written, the
//! config output already on disk stays there.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};
use vhdmem_loader::{ConfigLoader, InstructionDecoder};
use vhdmem_render::{write_document, Renderer, TemplateSet};
use vhdmem_spec::{MemoryKind, MemorySpec};

use crate::config::GenConfig;
use crate::error::{GenError, Result};
use crate::provider::{ResolvedSizes, SizeProvider};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenReport {
    pub config: MemorySpec,
    pub program: MemorySpec,
    /// Words read from the instruction binary
    pub decoded_words: usize,
    /// Words in the program memory after padding
    pub program_words: usize,
    /// Characters in the config file after trimming
    pub config_original_chars: usize,
    /// Characters in the config memory after padding
    pub config_chars: usize,
    pub out_cfg_mem_file: PathBuf,
    pub out_prg_mem_file: PathBuf,
}

impl fmt::Display for GenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.config)?;
        writeln!(
            f,
            "  {} chars ({} from input) -> {}",
            self.config_chars,
            self.config_original_chars,
            self.out_cfg_mem_file.display()
        )?;
        writeln!(f, "{}", self.program)?;
        write!(
            f,
            "  {} words ({} decoded) -> {}",
            self.program_words,
            self.decoded_words,
            self.out_prg_mem_file.display()
        )
    }
}

/// One generator run over a [`GenConfig`]
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: GenConfig,
    sizes: SizeProvider,
}

impl Pipeline {
    /// Validate `config` and select its size strategy
    pub fn new(config: GenConfig) -> Result<Self> {
        let sizes = config.size_provider()?;
        debug!(sizes = %sizes, "selected size provider");
        Ok(Self { config, sizes })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    pub fn size_provider(&self) -> &SizeProvider {
        &self.sizes
    }

    pub fn resolve_sizes(&self) -> Result<ResolvedSizes> {
        self.sizes.resolve()
    }

    pub fn run(&self) -> Result<GenReport> {
        let sizes = self.resolve_sizes()?;
        let templates =
            TemplateSet::load(self.config.template_dir.as_deref()).map_err(GenError::Templates)?;

        let instructions = InstructionDecoder::new(sizes.program.capacity)
            .decode_file(&self.config.prg_mem_file)
            .map_err(|source| GenError::Load {
                kind: MemoryKind::Program,
                source,
            })?;

        let config = ConfigLoader::new(sizes.config.capacity)
            .load_file(&self.config.cfg_mem_file)
            .map_err(|source| GenError::Load {
                kind: MemoryKind::Config,
                source,
            })?;

        let renderer = Renderer::new(templates);
        let config_doc = renderer.render_config(&config).map_err(|source| GenError::Render {
            kind: MemoryKind::Config,
            source,
        })?;
        let program_doc = renderer
            .render_program(&instructions)
            .map_err(|source| GenError::Render {
                kind: MemoryKind::Program,
                source,
            })?;

        write_document(&config_doc, &self.config.out_cfg_mem_file).map_err(|source| {
            GenError::Write {
                kind: MemoryKind::Config,
                source,
            }
        })?;
        write_document(&program_doc, &self.config.out_prg_mem_file).map_err(|source| {
            GenError::Write {
                kind: MemoryKind::Program,
                source,
            }
        })?;

        let report = GenReport {
            config: sizes.config,
            program: sizes.program,
            decoded_words: instructions.decoded_len(),
            program_words: instructions.len(),
            config_original_chars: config.original_len(),
            config_chars: config.len(),
            out_cfg_mem_file: self.config.out_cfg_mem_file.clone(),
            out_prg_mem_file: self.config.out_prg_mem_file.clone(),
        };
        info!(
            decoded = report.decoded_words,
            words = report.program_words,
            chars = report.config_chars,
            "generated memories"
        );
        Ok(report)
    }
}

/// Validate `config` and run the pipeline once
pub fn generate(config: GenConfig) -> Result<GenReport> {
    Pipeline::new(config)?.run()
}
