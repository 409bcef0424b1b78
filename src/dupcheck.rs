//! Pre-flight check that identifier derivation is injective on each opcode space.
//!
//! Every generated artifact is keyed by identifier, so a collision would leave
//! the table, declarations, stubs and enums disagreeing about which code a
//! name belongs to. Nothing is emitted unless both spaces pass.
use super::opcodes::{InstructionSet, OpcodeSet, OpcodeSpace};
use super::*;

use std::collections::BTreeMap;

/// Codes (with display mnemonics) that all derive the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub space: OpcodeSpace,
    pub identifier: String,
    /// ascending by code
    pub entries: Vec<(u8, String)>,
}
impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  {} -> {}:", self.space, self.identifier)?;
        for (code, mnemonic) in &self.entries {
            write!(f, "\n    0x{:02X}: {} -> {}", code, mnemonic, self.identifier)?;
        }
        Ok(())
    }
}

/// All identifier collisions in one space, ordered by identifier.
pub fn find_collisions(set: &OpcodeSet) -> Vec<Collision> {
    let mut by_name: BTreeMap<String, Vec<(u8, String)>> = BTreeMap::new();
    for record in set.iter() {
        by_name
            .entry(record.identifier())
            .or_default()
            .push((record.code, record.display_mnemonic()));
    }
    by_name
        .into_iter()
        .filter(|(_, entries)| entries.len() > 1)
        .map(|(identifier, entries)| Collision {
            space: set.space,
            identifier,
            entries,
        })
        .collect()
}

#[allow(dead_code)]
pub fn check_space(set: &OpcodeSet) -> Result<(), Error> {
    let collisions = find_collisions(set);
    if collisions.is_empty() {
        Ok(())
    } else {
        Err(Error::duplicates(collisions))
    }
}

/// Checks both spaces and reports every collision from either of them.
pub fn check_all(iset: &InstructionSet) -> Result<(), Error> {
    let mut collisions = Vec::new();
    for set in iset.spaces() {
        let found = find_collisions(set);
        if found.is_empty() {
            info!("No duplicates found in {} opcodes", set.space);
        }
        collisions.extend(found);
    }
    if collisions.is_empty() {
        Ok(())
    } else {
        Err(Error::duplicates(collisions))
    }
}
