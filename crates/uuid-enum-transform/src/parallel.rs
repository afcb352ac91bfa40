//! Parallel rewriting of independent compilation units.
//!
//! Every unit owns its arena, so units never share nodes. They do share one
//! [`SharedUuidCache`], which keeps `Enum_Member` values identical across
//! all units of a program.

use crate::config::TransformerConfig;
use crate::const_enum_uuid::{ConstEnumRewrite, ConstEnumUuidTransformer};
use crate::uuid_cache::SharedUuidCache;
use rayon::prelude::*;
use tracing::debug;
use uuid_enum_ast::{NodeArena, NodeIndex};

/// One parsed file handed to the transformer.
#[derive(Clone, Debug)]
pub struct CompilationUnit {
    pub arena: NodeArena,
    pub root: NodeIndex,
}

impl CompilationUnit {
    pub fn new(arena: NodeArena, root: NodeIndex) -> Self {
        CompilationUnit { arena, root }
    }
}

/// Rewrite every unit in place (each `root` is replaced by its rewritten
/// root) and return the rewrite records of all units, in unit order.
pub fn transform_units_parallel(
    config: &TransformerConfig,
    cache: &SharedUuidCache,
    units: &mut [CompilationUnit],
) -> Vec<ConstEnumRewrite> {
    debug!(units = units.len(), "transforming compilation units in parallel");

    let per_unit: Vec<Vec<ConstEnumRewrite>> = units
        .par_iter_mut()
        .map(|unit| {
            let mut transformer = ConstEnumUuidTransformer::with_cache(config.clone(), cache);
            unit.root = transformer.transform_source_file(&mut unit.arena, unit.root);
            transformer.take_rewrites()
        })
        .collect();

    per_unit.into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "../tests/parallel.rs"]
mod tests;
