//! The dispatch table: one initializer per opcode, e.g.
//! ```text
//! table[0x00] = {.mnemonic = "NOP",         .length = 1, .cycles = 4,  .execute = &Cpu::nop};
//! table[0x3A] = {.mnemonic = "LD A, [HL-]", .length = 1, .cycles = 8,  .execute = &Cpu::ld_a_at_hl_dec};
//! ```
//! Mnemonic and cycle fields are padded to the widest value in the table so
//! that regenerated files diff cleanly.
use super::artifact::{ArtifactKind, CoreNames, Emitter, Visibility};
use super::opcodes::{OpcodeSet, OpcodeSpace};
use super::*;

/// One row of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub code: u8,
    pub mnemonic: String,
    pub length: u8,
    /// primary timing only; alternate timings are the core's business
    pub cycles: u32,
    pub handler: String,
}

/// Table rows in ascending code order.
pub fn entries(set: &OpcodeSet) -> Vec<TableEntry> {
    set.iter()
        .map(|r| TableEntry {
            code: r.code,
            mnemonic: r.display_mnemonic(),
            length: r.byte_length,
            cycles: r.primary_cycles(),
            handler: r.identifier(),
        })
        .collect()
}

fn pad(width: usize, len: usize) -> String { " ".repeat(width.saturating_sub(len) + 1) }

pub struct TableEmitter;
impl Emitter for TableEmitter {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Table }
    fn visibility(&self) -> Visibility { Visibility::Private }
    fn file_name(&self, space: OpcodeSpace) -> &'static str {
        match space {
            OpcodeSpace::Primary => "opcodes.inc",
            OpcodeSpace::Extended => "cbopcodes.inc",
        }
    }
    fn description(&self, space: OpcodeSpace) -> String { format!("Opcode table for InstructionsTable ({})", space) }
    fn emit_body(&self, set: &OpcodeSet, names: &CoreNames, f: &mut dyn io::Write) -> io::Result<()> {
        let rows = entries(set);
        let mnemonic_width = rows.iter().map(|e| e.mnemonic.len()).max().unwrap_or(0);
        let cycles_width = rows.iter().map(|e| e.cycles.to_string().len()).max().unwrap_or(0);
        for e in &rows {
            let cycles = e.cycles.to_string();
            writeln!(
                f,
                "table[0x{:02X}] = {{.mnemonic = \"{}\",{}.length = {}, .cycles = {},{}.execute = &{}::{}}};",
                e.code,
                e.mnemonic,
                pad(mnemonic_width, e.mnemonic.len()),
                e.length,
                cycles,
                pad(cycles_width, cycles.len()),
                names.class_name,
                e.handler
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::{OpcodeRecord, OperandSpec};

    fn sample() -> Result<OpcodeSet, Error> {
        let mut set = OpcodeSet::new(OpcodeSpace::Primary);
        set.insert(OpcodeRecord::new(
            0x3a,
            "LD",
            1,
            &[8],
            vec![OperandSpec::new("A", true), OperandSpec::new("HL", false).decrement()],
        ))?;
        set.insert(OpcodeRecord::new(0x00, "NOP", 1, &[4], vec![]))?;
        set.insert(OpcodeRecord::new(
            0xc4,
            "CALL",
            3,
            &[24, 12],
            vec![OperandSpec::new("NZ", true), OperandSpec::new("a16", true)],
        ))?;
        set.insert(OpcodeRecord::new(0xd3, "ILLEGAL_D3", 1, &[], vec![]))?;
        Ok(set)
    }

    #[test]
    fn one_entry_per_record_in_code_order() -> Result<(), Error> {
        let rows = entries(&sample()?);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.iter().map(|e| e.code).collect::<Vec<u8>>(), vec![0x00, 0x3a, 0xc4, 0xd3]);
        assert_eq!(
            rows[0],
            TableEntry {
                code: 0,
                mnemonic: "NOP".to_string(),
                length: 1,
                cycles: 4,
                handler: "nop".to_string()
            }
        );
        assert_eq!(rows[2].cycles, 24);
        assert_eq!(rows[3].cycles, 0);
        Ok(())
    }
    #[test]
    fn fields_are_aligned() -> Result<(), Error> {
        let mut out = Vec::new();
        TableEmitter.emit_body(&sample()?, &CoreNames::default(), &mut out)?;
        let text = String::from_utf8_lossy(&out).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "table[0x00] = {.mnemonic = \"NOP\",          .length = 1, .cycles = 4,  .execute = &Cpu::nop};"
        );
        assert_eq!(
            lines[2],
            "table[0xC4] = {.mnemonic = \"CALL NZ, a16\", .length = 3, .cycles = 24, .execute = &Cpu::call_nz_a16};"
        );
        let column = |l: &str| l.find(".length").unwrap_or(0);
        assert!(lines.iter().all(|l| column(l) == column(lines[0])));
        let column = |l: &str| l.find(".execute").unwrap_or(0);
        assert!(lines.iter().all(|l| column(l) == column(lines[0])));
        Ok(())
    }
    #[test]
    fn empty_space() -> Result<(), Error> {
        let mut out = Vec::new();
        TableEmitter.emit_body(&OpcodeSet::new(OpcodeSpace::Extended), &CoreNames::default(), &mut out)?;
        assert!(out.is_empty());
        Ok(())
    }
}
