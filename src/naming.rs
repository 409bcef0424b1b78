//! Identifier derivation.
//!
//! Every generated function, enumerator and guard token is named from an
//! instruction's mnemonic plus the shape of its operands:
//!
//! | operand | token |
//! | --- | --- |
//! | `A` (immediate) | `a` |
//! | `HL` (memory) | `at_hl` |
//! | `HL` (memory, post-decrement) | `at_hl_dec` |
//! | `$38` (immediate) | `38` |
//!
//! so `LD A, [HL-]` becomes `ld_a_at_hl_dec`. The operand order is kept, which
//! is what keeps `LD [HL], A` and `LD A, [HL]` apart.
use crate::opcodes::OperandSpec;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_SIGIL: Regex = Regex::new(r"^[^A-Za-z0-9_]+").unwrap();
}

fn base_token(mnemonic: &str) -> String { mnemonic.to_lowercase().replace([' ', '-'], "_") }

/// The identifier segment contributed by a single operand.
pub fn operand_token(op: &OperandSpec) -> String {
    let name = RE_SIGIL.replace(&op.name, "").to_lowercase();
    let mut token = if op.immediate { name } else { format!("at_{name}") };
    if op.increment {
        token.push_str("_inc");
    } else if op.decrement {
        token.push_str("_dec");
    }
    token
}

/// Canonical lowercase identifier for (mnemonic, operands).
pub fn identifier(mnemonic: &str, operands: &[OperandSpec]) -> String {
    let mut id = base_token(mnemonic);
    for op in operands {
        id.push('_');
        id.push_str(&operand_token(op));
    }
    id
}

/// The compile-time opt-out token for a generated stub.
pub fn guard_token(identifier: &str) -> String { format!("CPU_{}", identifier.to_uppercase()) }

/// Operands as they'd be written in a listing, e.g. `A, [HL-]`.
pub fn display_operands(operands: &[OperandSpec]) -> String {
    operands
        .iter()
        .map(|op| {
            let mut name = op.name.clone();
            if op.increment {
                name.push('+');
            } else if op.decrement {
                name.push('-');
            }
            if op.immediate { name } else { format!("[{name}]") }
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// Human-readable mnemonic for tables and diagnostics.
pub fn display_mnemonic(mnemonic: &str, operands: &[OperandSpec]) -> String {
    if operands.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, display_operands(operands))
    }
}
