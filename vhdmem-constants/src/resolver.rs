//! Memory width resolution from a constants package

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use vhdmem_spec::{MemoryKind, MemorySpec};

use crate::error::{ConstantsError, Result};
use crate::parser::{parse_constants, ConstantTable};

/// What to do when a width declaration is absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Fail with [`ConstantsError::MissingDeclaration`]
    #[default]
    Strict,
    /// Fall back to width 0
    Lenient,
}

/// Address widths of both memories, in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryWidths {
    pub cfg_width: u32,
    pub prg_width: u32,
}

impl MemoryWidths {
    pub fn width(&self, kind: MemoryKind) -> u32 {
        match kind {
            MemoryKind::Config => self.cfg_width,
            MemoryKind::Program => self.prg_width,
        }
    }

    /// `(cfg_width, prg_width)`
    pub fn as_pair(&self) -> (u32, u32) {
        (self.cfg_width, self.prg_width)
    }

    /// Memory specs for `(config, program)`
    pub fn specs(&self) -> Result<(MemorySpec, MemorySpec)> {
        Ok((
            MemorySpec::from_width(MemoryKind::Config, self.cfg_width)?,
            MemorySpec::from_width(MemoryKind::Program, self.prg_width)?,
        ))
    }
}

/// Finds `CFG_MEM_SIZE` and `PROG_MEM_SIZE` in a constants package
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeResolver {
    policy: MissingPolicy,
}

impl SizeResolver {
    pub fn new(policy: MissingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Resolve widths from the text of a constants package
    pub fn resolve(&self, source: &str) -> Result<MemoryWidths> {
        let table = parse_constants(source);
        debug!(declarations = table.len(), "parsed constants package");

        Ok(MemoryWidths {
            cfg_width: self.width_of(&table, MemoryKind::Config)?,
            prg_width: self.width_of(&table, MemoryKind::Program)?,
        })
    }

    /// Resolve widths from a constants file on disk
    pub fn resolve_file(&self, path: impl AsRef<Path>) -> Result<MemoryWidths> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConstantsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading memory widths");
        self.resolve(&source)
    }

    fn width_of(&self, table: &ConstantTable, kind: MemoryKind) -> Result<u32> {
        let name = kind.constant_name();

        let Some(decl) = table.get(name) else {
            return match self.policy {
                MissingPolicy::Strict => Err(ConstantsError::MissingDeclaration(name.to_string())),
                MissingPolicy::Lenient => {
                    warn!(constant = name, "declaration missing, using width 0");
                    Ok(0)
                }
            };
        };

        let value = decl.value.ok_or_else(|| ConstantsError::MalformedDeclaration {
            name: decl.name.clone(),
            line: decl.line,
            value: decl.raw_value.clone(),
        })?;

        u32::try_from(value).map_err(|_| ConstantsError::WidthOutOfRange {
            name: decl.name.clone(),
            value,
        })
    }
}

/// Resolve widths with the strict policy
pub fn resolve_widths(source: &str) -> Result<MemoryWidths> {
    SizeResolver::default().resolve(source)
}
