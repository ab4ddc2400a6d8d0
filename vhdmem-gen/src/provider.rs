//! Memory size strategies

use std::fmt;
use std::path::PathBuf;

use tracing::info;
use vhdmem_constants::{MissingPolicy, SizeResolver};
use vhdmem_spec::{MemoryKind, MemorySpec};

use crate::error::Result;

/// Where the two memory sizes come from, chosen once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeProvider {
    /// Widths declared in a VHDL constants package
    Inferred {
        constants_path: PathBuf,
        policy: MissingPolicy,
    },
    /// Capacities supplied directly
    Explicit {
        cfg_capacity: usize,
        prg_capacity: usize,
    },
}

/// Sizes of both memories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSizes {
    pub config: MemorySpec,
    pub program: MemorySpec,
}

impl SizeProvider {
    pub fn resolve(&self) -> Result<ResolvedSizes> {
        let sizes = match self {
            SizeProvider::Inferred {
                constants_path,
                policy,
            } => {
                let widths = SizeResolver::new(*policy).resolve_file(constants_path)?;
                let (config, program) = widths.specs()?;
                ResolvedSizes { config, program }
            }
            SizeProvider::Explicit {
                cfg_capacity,
                prg_capacity,
            } => ResolvedSizes {
                config: MemorySpec::from_capacity(MemoryKind::Config, *cfg_capacity)?,
                program: MemorySpec::from_capacity(MemoryKind::Program, *prg_capacity)?,
            },
        };

        info!(config = %sizes.config, program = %sizes.program, "resolved memory sizes");
        Ok(sizes)
    }
}

impl fmt::Display for SizeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeProvider::Inferred { constants_path, .. } => {
                write!(f, "inferred from {}", constants_path.display())
            }
            SizeProvider::Explicit { .. } => write!(f, "explicit"),
        }
    }
}
