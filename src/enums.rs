//! Scoped opcode enumerations, one per space. The two spaces are never merged:
//! both use the full 0-255 range and are told apart by the prefix byte when
//! the core decodes.
use super::artifact::{ArtifactKind, CoreNames, Emitter, Visibility};
use super::opcodes::{OpcodeSet, OpcodeSpace};
use super::*;

pub fn enum_name(space: OpcodeSpace) -> &'static str {
    match space {
        OpcodeSpace::Primary => "Opcode",
        OpcodeSpace::Extended => "CBOpcode",
    }
}

pub struct EnumEmitter;
impl Emitter for EnumEmitter {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Enums }
    fn visibility(&self) -> Visibility { Visibility::Public }
    fn file_name(&self, space: OpcodeSpace) -> &'static str {
        match space {
            OpcodeSpace::Primary => "opcode_enum.h",
            OpcodeSpace::Extended => "cbopcode_enum.h",
        }
    }
    fn description(&self, space: OpcodeSpace) -> String { format!("Opcode Enums ({})", space) }
    fn emit_body(&self, set: &OpcodeSet, names: &CoreNames, f: &mut dyn io::Write) -> io::Result<()> {
        writeln!(f, "#include <cstdint>\n")?;
        writeln!(f, "namespace {} {{\n", names.namespace)?;
        writeln!(f, "// NOLINTBEGIN(readability-identifier-naming)\n")?;
        writeln!(f, "enum class {} : uint8_t {{", enum_name(set.space))?;
        for record in set.iter() {
            writeln!(
                f,
                "    {} = 0x{:02X}, // {}",
                record.identifier().to_uppercase(),
                record.code,
                record.display_mnemonic()
            )?;
        }
        writeln!(f, "}};\n")?;
        writeln!(f, "// NOLINTEND(readability-identifier-naming)\n")?;
        writeln!(f, "}} // namespace {}", names.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::{OpcodeRecord, OperandSpec};

    #[test]
    fn enumerators_in_code_order() -> Result<(), Error> {
        let mut set = OpcodeSet::new(OpcodeSpace::Primary);
        set.insert(OpcodeRecord::new(
            0x22,
            "LD",
            1,
            &[8],
            vec![OperandSpec::new("HL", false).increment(), OperandSpec::new("A", true)],
        ))?;
        set.insert(OpcodeRecord::new(0x00, "NOP", 1, &[4], vec![]))?;
        let mut out = Vec::new();
        EnumEmitter.emit_body(&set, &CoreNames::default(), &mut out)?;
        let text = String::from_utf8_lossy(&out).to_string();
        assert_eq!(
            text,
            "#include <cstdint>\n\n\
             namespace boyboy::cpu {\n\n\
             // NOLINTBEGIN(readability-identifier-naming)\n\n\
             enum class Opcode : uint8_t {\n\
             \x20   NOP = 0x00, // NOP\n\
             \x20   LD_AT_HL_INC_A = 0x22, // LD [HL+], A\n\
             };\n\n\
             // NOLINTEND(readability-identifier-naming)\n\n\
             } // namespace boyboy::cpu\n"
        );
        Ok(())
    }
    #[test]
    fn extended_space_has_its_own_enum() -> Result<(), Error> {
        let mut set = OpcodeSet::new(OpcodeSpace::Extended);
        set.insert(OpcodeRecord::new(0x00, "RLC", 2, &[8], vec![OperandSpec::new("B", true)]))?;
        let mut out = Vec::new();
        EnumEmitter.emit_body(&set, &CoreNames::default(), &mut out)?;
        let text = String::from_utf8_lossy(&out).to_string();
        assert!(text.contains("enum class CBOpcode : uint8_t {\n    RLC_B = 0x00, // RLC B\n};"));
        Ok(())
    }
}
