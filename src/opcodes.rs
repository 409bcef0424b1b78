//! The instruction-set description and its loader.
//!
//! The description is a JSON document with two top-level collections,
//! `unprefixed` and `cbprefixed`, each mapping a two-hex-digit opcode to a record:
//! ```text
//! "3A": {
//!     "mnemonic": "LD",
//!     "bytes": 1,
//!     "cycles": [8],
//!     "operands": [
//!         { "name": "A", "immediate": true },
//!         { "name": "HL", "immediate": false, "decrement": true }
//!     ]
//! }
//! ```
//! Everything is validated up front; a single bad record rejects the whole description.
use super::naming;
use super::*;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref RE_CODE: Regex = Regex::new(r"(?i)^(?:0x)?([0-9a-f]{1,2})$").unwrap();
}

/// One instruction argument.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperandSpec {
    pub name: String,
    /// value is used directly rather than dereferenced
    #[serde(default)]
    pub immediate: bool,
    #[serde(default)]
    pub increment: bool,
    #[serde(default)]
    pub decrement: bool,
}
#[allow(dead_code)]
impl OperandSpec {
    pub fn new(name: &str, immediate: bool) -> Self {
        OperandSpec {
            name: name.to_string(),
            immediate,
            increment: false,
            decrement: false,
        }
    }
    pub fn increment(mut self) -> Self {
        self.increment = true;
        self
    }
    pub fn decrement(mut self) -> Self {
        self.decrement = true;
        self
    }
}

// The shape of a record as it appears in the description. Fields the generator
// doesn't use (flags, record-level immediate, ...) are ignored.
#[derive(Deserialize)]
struct RawRecord {
    mnemonic: String,
    bytes: u8,
    cycles: Vec<u32>,
    operands: Vec<OperandSpec>,
}

/// A validated instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeRecord {
    pub code: u8,
    pub mnemonic: String,
    /// total instruction length in bytes (always > 0)
    pub byte_length: u8,
    /// alternate timings, e.g. branch taken vs. not taken
    pub cycle_counts: Vec<u32>,
    pub operands: Vec<OperandSpec>,
}
impl OpcodeRecord {
    #[allow(dead_code)]
    pub fn new(code: u8, mnemonic: &str, byte_length: u8, cycle_counts: &[u32], operands: Vec<OperandSpec>) -> Self {
        OpcodeRecord {
            code,
            mnemonic: mnemonic.to_string(),
            byte_length,
            cycle_counts: cycle_counts.to_vec(),
            operands,
        }
    }
    pub fn identifier(&self) -> String { naming::identifier(&self.mnemonic, &self.operands) }
    pub fn display_mnemonic(&self) -> String { naming::display_mnemonic(&self.mnemonic, &self.operands) }
    /// The first timing, or 0 if the record has none.
    pub fn primary_cycles(&self) -> u32 { self.cycle_counts.first().copied().unwrap_or(0) }
    /// Multi-line description used by --show.
    pub fn describe(&self) -> String {
        format!(
            "Opcode: 0x{:02X}\n  Mnemonic: {}\n  Full Mnemonic: {}\n  Length: {}\n  Cycles: {}\n  Operands: {}\n  Function Name: {}\n",
            self.code,
            self.mnemonic,
            self.display_mnemonic(),
            self.byte_length,
            self.cycle_counts.iter().map(u32::to_string).collect::<Vec<String>>().join("/"),
            naming::display_operands(&self.operands),
            self.identifier(),
        )
    }
}

/// The two independent 0-255 opcode ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpcodeSpace {
    Primary,
    Extended,
}
impl OpcodeSpace {
    pub const ALL: [OpcodeSpace; 2] = [OpcodeSpace::Primary, OpcodeSpace::Extended];
    /// top-level key in the description
    pub fn key(&self) -> &'static str {
        match self {
            OpcodeSpace::Primary => "unprefixed",
            OpcodeSpace::Extended => "cbprefixed",
        }
    }
    /// name used in messages and artifact descriptions
    pub fn label(&self) -> &'static str {
        match self {
            OpcodeSpace::Primary => "unprefixed",
            OpcodeSpace::Extended => "CB-prefixed",
        }
    }
}
impl fmt::Display for OpcodeSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.label()) }
}

/// All the records of one space, ordered by code.
#[derive(Debug, Clone)]
pub struct OpcodeSet {
    pub space: OpcodeSpace,
    records: BTreeMap<u8, OpcodeRecord>,
}
impl OpcodeSet {
    pub fn new(space: OpcodeSpace) -> Self {
        OpcodeSet {
            space,
            records: BTreeMap::new(),
        }
    }
    /// Adds a record, refusing a code that's already present.
    pub fn insert(&mut self, record: OpcodeRecord) -> Result<(), Error> {
        if self.records.contains_key(&record.code) {
            return Err(record_err!(self.space, record.code, "defined more than once"));
        }
        self.records.insert(record.code, record);
        Ok(())
    }
    pub fn get(&self, code: u8) -> Option<&OpcodeRecord> { self.records.get(&code) }
    /// Records in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &OpcodeRecord> { self.records.values() }
    pub fn len(&self) -> usize { self.records.len() }
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    fn from_value(space: OpcodeSpace, value: &Value) -> Result<Self, Error> {
        let entries = value
            .as_object()
            .ok_or_else(|| malformed_err!("\"{}\" must be an object keyed by opcode", space.key()))?;
        let mut set = OpcodeSet::new(space);
        for (key, raw) in entries {
            let code = parse_code(key).ok_or_else(|| malformed_err!("{} opcode key \"{}\" is not a hex byte", space.label(), key))?;
            let raw = RawRecord::deserialize(raw).map_err(|e| record_err!(space, code, "{}", e))?;
            if raw.bytes == 0 {
                return Err(record_err!(space, code, "byte length must be at least 1"));
            }
            set.insert(OpcodeRecord {
                code,
                mnemonic: raw.mnemonic,
                byte_length: raw.bytes,
                cycle_counts: raw.cycles,
                operands: raw.operands,
            })?;
        }
        Ok(set)
    }
}

fn parse_code(key: &str) -> Option<u8> {
    let c = RE_CODE.captures(key)?;
    u8::from_str_radix(c.get(1)?.as_str(), 16).ok()
}

/// Both opcode spaces of a description along with where they came from.
#[derive(Debug, Clone)]
pub struct InstructionSet {
    /// file name of the description (for artifact headers)
    pub source: String,
    pub primary: OpcodeSet,
    pub extended: OpcodeSet,
}
impl InstructionSet {
    pub fn space(&self, space: OpcodeSpace) -> &OpcodeSet {
        match space {
            OpcodeSpace::Primary => &self.primary,
            OpcodeSpace::Extended => &self.extended,
        }
    }
    pub fn spaces(&self) -> [&OpcodeSet; 2] { [&self.primary, &self.extended] }

    pub fn from_json_str(json: &str, source: &str) -> Result<Self, Error> {
        let doc: Value = serde_json::from_str(json)?;
        let top = doc
            .as_object()
            .ok_or_else(|| malformed_err!("{}: top level must be an object", source))?;
        let mut spaces = Vec::with_capacity(2);
        for space in OpcodeSpace::ALL {
            let value = top
                .get(space.key())
                .ok_or_else(|| malformed_err!("{}: missing top-level key \"{}\"", source, space.key()))?;
            spaces.push(OpcodeSet::from_value(space, value)?);
        }
        let extended = spaces.pop().ok_or_else(|| general_err!("missing extended space"))?;
        let primary = spaces.pop().ok_or_else(|| general_err!("missing primary space"))?;
        Ok(InstructionSet {
            source: source.to_string(),
            primary,
            extended,
        })
    }
    pub fn read_from_file(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::new(ErrorKind::IO, format!("cannot read {}: {}", path.display(), e).as_str()))?;
        let source = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().to_string());
        Self::from_json_str(&json, &source)
    }
}
