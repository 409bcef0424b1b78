//! Default handler bodies.
//!
//! Every handler gets a generated body that throws "unimplemented opcode", but
//! each one is wrapped in `#ifndef CPU_<IDENTIFIER>`. A hand-written handler
//! defines that token before this file is included, which compiles the default
//! out. There's no runtime switch and no chance of two definitions: either the
//! token exists at build time or the stub does.
use super::artifact::{ArtifactKind, CoreNames, Emitter, Visibility};
use super::naming::guard_token;
use super::opcodes::{OpcodeRecord, OpcodeSet, OpcodeSpace};
use super::*;

pub fn write_stub(f: &mut dyn io::Write, record: &OpcodeRecord, names: &CoreNames) -> io::Result<()> {
    let id = record.identifier();
    let guard = guard_token(&id);
    writeln!(f, "#ifndef {guard}")?;
    writeln!(f, "void {}::{}::{}() {{", names.namespace, names.class_name, id)?;
    writeln!(
        f,
        "    throw {}(0x{:02X}, \"{}\");",
        names.unimplemented_error,
        record.code,
        record.display_mnemonic()
    )?;
    writeln!(f, "}}")?;
    writeln!(f, "#endif // {guard}")?;
    writeln!(f)
}

pub struct StubEmitter;
impl Emitter for StubEmitter {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Stubs }
    fn visibility(&self) -> Visibility { Visibility::Private }
    fn file_name(&self, space: OpcodeSpace) -> &'static str {
        match space {
            OpcodeSpace::Primary => "cpu_opcodes_impl.inc",
            OpcodeSpace::Extended => "cpu_cbopcodes_impl.inc",
        }
    }
    fn description(&self, space: OpcodeSpace) -> String { format!("CPU stub implementations ({})", space) }
    fn emit_body(&self, set: &OpcodeSet, names: &CoreNames, f: &mut dyn io::Write) -> io::Result<()> {
        writeln!(f, "#include \"{}\"", names.errors_header)?;
        writeln!(f)?;
        for record in set.iter() {
            write_stub(f, record, names)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::OperandSpec;

    #[test]
    fn guarded_stub() -> Result<(), Error> {
        let record = OpcodeRecord::new(
            0x3a,
            "LD",
            1,
            &[8],
            vec![OperandSpec::new("A", true), OperandSpec::new("HL", false).decrement()],
        );
        let mut out = Vec::new();
        write_stub(&mut out, &record, &CoreNames::default())?;
        assert_eq!(
            String::from_utf8_lossy(&out),
            "#ifndef CPU_LD_A_AT_HL_DEC\n\
             void boyboy::cpu::Cpu::ld_a_at_hl_dec() {\n\
             \x20   throw boyboy::common::errors::UnimplementedOpcode(0x3A, \"LD A, [HL-]\");\n\
             }\n\
             #endif // CPU_LD_A_AT_HL_DEC\n\n"
        );
        Ok(())
    }
    #[test]
    fn include_then_one_stub_per_record() -> Result<(), Error> {
        let mut set = OpcodeSet::new(OpcodeSpace::Primary);
        set.insert(OpcodeRecord::new(0x76, "HALT", 1, &[4], vec![]))?;
        set.insert(OpcodeRecord::new(0x00, "NOP", 1, &[4], vec![]))?;
        let names = CoreNames {
            namespace: "gb".to_string(),
            class_name: "Core".to_string(),
            errors_header: "gb/errors.h".to_string(),
            unimplemented_error: "gb::Unimplemented".to_string(),
        };
        let mut out = Vec::new();
        StubEmitter.emit_body(&set, &names, &mut out)?;
        let text = String::from_utf8_lossy(&out).to_string();
        assert!(text.starts_with("#include \"gb/errors.h\"\n\n#ifndef CPU_NOP\n"));
        assert_eq!(text.matches("#ifndef ").count(), 2);
        assert!(text.contains("void gb::Core::halt() {\n    throw gb::Unimplemented(0x76, \"HALT\");\n}\n"));
        assert!(text.find("CPU_NOP").unwrap_or(usize::MAX) < text.find("CPU_HALT").unwrap_or(0));
        Ok(())
    }
}
