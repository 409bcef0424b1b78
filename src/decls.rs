//! Handler prototypes, included inside the core's class body.
use super::artifact::{ArtifactKind, CoreNames, Emitter, Visibility};
use super::opcodes::{OpcodeSet, OpcodeSpace};
use super::*;

pub struct DeclEmitter;
impl Emitter for DeclEmitter {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Declarations }
    fn visibility(&self) -> Visibility { Visibility::Public }
    fn file_name(&self, space: OpcodeSpace) -> &'static str {
        match space {
            OpcodeSpace::Primary => "cpu_opcodes.inc",
            OpcodeSpace::Extended => "cpu_cbopcodes.inc",
        }
    }
    fn description(&self, space: OpcodeSpace) -> String { format!("CPU function declarations ({})", space) }
    fn emit_body(&self, set: &OpcodeSet, _: &CoreNames, f: &mut dyn io::Write) -> io::Result<()> {
        for record in set.iter() {
            writeln!(f, "    void {}();", record.identifier())?;
        }
        Ok(())
    }
}
