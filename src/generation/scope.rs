//! Per-render accumulator state.
//!
//! A [`RenderScope`] is created for each independent generation unit and bound
//! into the filters of that render only, so nothing a template adds can leak
//! into the next unit. Clones share storage: the environment hands one clone to
//! the filters and reads the listings back from another after the pass.

use std::sync::{Arc, Mutex};

use crate::core::{Error, Result};
use crate::generation::flags::{FlagKind, FlagSet};

/// Imports and type aliases accumulated during one render unit
#[derive(Debug, Clone, Default)]
pub struct RenderScope {
    imports: Arc<Mutex<FlagSet>>,
    type_aliases: Arc<Mutex<FlagSet>>,
}

impl RenderScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the accumulator for `kind`
    pub fn with_flags<R>(&self, kind: FlagKind, f: impl FnOnce(&mut FlagSet) -> R) -> Result<R> {
        let cell = match kind {
            FlagKind::Imports => &self.imports,
            FlagKind::TypeAliases => &self.type_aliases,
        };
        let mut flags = cell
            .lock()
            .map_err(|_| Error::template(format!("{kind} accumulator lock poisoned")))?;
        Ok(f(&mut *flags))
    }

    /// Snapshot of the accumulator for `kind`
    pub fn snapshot(&self, kind: FlagKind) -> Result<FlagSet> {
        self.with_flags(kind, |flags| flags.clone())
    }

    /// Clear both accumulators
    pub fn reset(&self) -> Result<()> {
        for kind in FlagKind::all() {
            self.with_flags(*kind, FlagSet::reset)?;
        }
        Ok(())
    }
}
