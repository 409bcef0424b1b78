//! Generated artifacts and the plumbing shared by the four emitters.
//!
//! An artifact is rendered completely in memory before anything is written, so
//! a run either has a full, mutually consistent set of outputs to commit or
//! fails before touching the filesystem.
use super::opcodes::{InstructionSet, OpcodeSet, OpcodeSpace};
use super::*;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// The four projections of an opcode space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKind {
    Table,
    Declarations,
    Stubs,
    Enums,
}
impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Table,
        ArtifactKind::Declarations,
        ArtifactKind::Stubs,
        ArtifactKind::Enums,
    ];
    pub fn emitter(&self) -> &'static dyn Emitter {
        match self {
            ArtifactKind::Table => &table::TableEmitter,
            ArtifactKind::Declarations => &decls::DeclEmitter,
            ArtifactKind::Stubs => &stubs::StubEmitter,
            ArtifactKind::Enums => &enums::EnumEmitter,
        }
    }
}

/// Which of the two output directories an artifact belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// only compiled into the core itself
    Private,
    /// included by the core's public headers
    Public,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub private: PathBuf,
    pub public: PathBuf,
}
impl OutputDirs {
    pub fn get(&self, v: Visibility) -> &Path {
        match v {
            Visibility::Private => &self.private,
            Visibility::Public => &self.public,
        }
    }
}

/// Names from the hand-written core that generated code refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreNames {
    pub namespace: String,
    pub class_name: String,
    pub errors_header: String,
    pub unimplemented_error: String,
}
impl Default for CoreNames {
    fn default() -> Self {
        CoreNames {
            namespace: "boyboy::cpu".to_string(),
            class_name: "Cpu".to_string(),
            errors_header: "boyboy/common/errors.h".to_string(),
            unimplemented_error: "boyboy::common::errors::UnimplementedOpcode".to_string(),
        }
    }
}

/// What goes in the "Generated from ... on ..." header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    /// current UTC time
    Now,
    /// pinned text, e.g. for reproducible builds
    Fixed(String),
    Omit,
}
impl Stamp {
    pub fn render(&self) -> Option<String> {
        match self {
            Stamp::Now => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .ok()
                .map(|d| format_utc(d.as_secs())),
            Stamp::Fixed(s) => Some(s.clone()),
            Stamp::Omit => None,
        }
    }
}

// days since 1970-01-01 -> (year, month, day)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Seconds since the epoch as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_utc(secs: u64) -> String {
    let (y, m, d) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        y,
        m,
        d,
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

pub fn write_header(f: &mut dyn io::Write, description: &str, source: &str, stamp: Option<&str>) -> io::Result<()> {
    const RULE: &str = "// ============================================================";
    writeln!(f, "{RULE}")?;
    writeln!(f, "// {description}")?;
    writeln!(f, "// AUTO-GENERATED FILE - DO NOT EDIT MANUALLY")?;
    match stamp {
        Some(stamp) => writeln!(f, "// Generated from {source} on {stamp}")?,
        None => writeln!(f, "// Generated from {source}")?,
    }
    writeln!(f, "{RULE}")?;
    writeln!(f)
}

/// A projection of validated records into output text.
pub trait Emitter {
    fn kind(&self) -> ArtifactKind;
    fn visibility(&self) -> Visibility;
    fn file_name(&self, space: OpcodeSpace) -> &'static str;
    fn description(&self, space: OpcodeSpace) -> String;
    /// Writes everything that follows the header.
    fn emit_body(&self, set: &OpcodeSet, names: &CoreNames, f: &mut dyn io::Write) -> io::Result<()>;
}

/// A fully rendered output file waiting to be written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub space: OpcodeSpace,
    pub description: String,
    pub path: PathBuf,
    pub contents: Vec<u8>,
}
impl Artifact {
    #[allow(dead_code)]
    pub fn text(&self) -> String { String::from_utf8_lossy(&self.contents).to_string() }
}

pub fn render(
    emitter: &dyn Emitter, set: &OpcodeSet, source: &str, stamp: Option<&str>, names: &CoreNames, dirs: &OutputDirs,
) -> Result<Artifact, Error> {
    let description = emitter.description(set.space);
    let mut contents = Vec::new();
    write_header(&mut contents, &description, source, stamp)?;
    emitter.emit_body(set, names, &mut contents)?;
    verbose_println!("rendered {} ({} records, {} bytes)", description, set.len(), contents.len());
    Ok(Artifact {
        kind: emitter.kind(),
        space: set.space,
        description,
        path: dirs.get(emitter.visibility()).join(emitter.file_name(set.space)),
        contents,
    })
}

/// Renders every requested kind for both spaces. The stamp is taken once so
/// that all artifacts of a run carry the same one.
pub fn render_all(iset: &InstructionSet, settings: &config::Settings) -> Result<Vec<Artifact>, Error> {
    let stamp = settings.stamp.render();
    let mut artifacts = Vec::new();
    for kind in &settings.kinds {
        for set in iset.spaces() {
            artifacts.push(render(
                kind.emitter(),
                set,
                &iset.source,
                stamp.as_deref(),
                &settings.names,
                &settings.dirs,
            )?);
        }
    }
    Ok(artifacts)
}

// Only the leaf directory is created; a missing parent is a configuration problem.
fn ensure_dir(dir: &Path) -> Result<(), Error> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir(dir).map_err(|e| write_err!(dir, e))
}

/// Writes rendered artifacts to their target paths.
pub fn commit(artifacts: &[Artifact]) -> Result<(), Error> {
    for a in artifacts {
        if let Some(dir) = a.path.parent() {
            ensure_dir(dir)?;
        }
        fs::write(&a.path, &a.contents).map_err(|e| write_err!(a.path, e))?;
        info!("Wrote {} to {}", a.description, a.path.display());
    }
    Ok(())
}
