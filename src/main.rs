//! # Opcode code generator
//!
//! Turns a JSON description of a CPU's instruction set into the source fragments a
//! hand-written core is built around: the dispatch table, handler declarations,
//! guarded "unimplemented" stubs and opcode enums, for both the unprefixed and
//! CB-prefixed opcode spaces.
//!
//! ## Getting Started
//! ```
//! cargo run -- --all data/Opcodes.json
//! ```
//! ...or if you've already built the binary then just...
//! ```
//! opgen --all data/Opcodes.json
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod term;
mod artifact;
mod config;
mod decls;
mod dupcheck;
mod enums;
mod error;
mod naming;
mod opcodes;
mod stubs;
mod table;
use crate::artifact::Artifact;
use crate::opcodes::InstructionSet;
use std::result::Result;
use std::{fmt, io};
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    term::init();
    // process_file does all the work
    if let Err(e) = process_file(&config::settings()) {
        eprintln!("{}: {}", red!("ERROR"), e);
        return Err(Box::new(e));
    }
    Ok(())
}

fn show_opcodes(iset: &InstructionSet, settings: &config::Settings) {
    let set = iset.space(settings.show_space);
    for &code in &settings.show {
        match set.get(code) {
            Some(record) => println!("{}", record.describe()),
            None => warn!("no {} opcode 0x{:02X} in {}", set.space, code, iset.source),
        }
    }
}

/// process_file drives a whole run: load, check both spaces, then render and write
/// every requested artifact. Nothing is written unless everything before it succeeded.
fn process_file(settings: &config::Settings) -> Result<Vec<Artifact>, Error> {
    let iset = InstructionSet::read_from_file(&settings.input)?;
    info!(
        "Loaded {} {} and {} {} opcodes from {}",
        iset.primary.len(),
        iset.primary.space,
        iset.extended.len(),
        iset.extended.space,
        settings.input.display()
    );
    show_opcodes(&iset, settings);
    dupcheck::check_all(&iset)?;
    if settings.kinds.is_empty() {
        if settings.show.is_empty() {
            warn!("nothing selected (use --table, --decls, --impls, --enums or --all); no files written");
        }
        return Ok(Vec::new());
    }
    let artifacts = artifact::render_all(&iset, settings)?;
    artifact::commit(&artifacts)?;
    Ok(artifacts)
}
