use crate::artifact::{format_utc, ArtifactKind, CoreNames, OutputDirs, Stamp};
use crate::opcodes::OpcodeSpace;
use clap::Parser;
use clap_num::maybe_hex;
use lazy_static::lazy_static;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Instruction-set description (JSON) to generate from
    #[arg(default_value = "data/Opcodes.json")]
    pub file: PathBuf,

    /// Generate opcode tables
    #[arg(short, long)]
    pub table: bool,

    /// Generate CPU instruction declarations
    #[arg(short, long)]
    pub decls: bool,

    /// Generate CPU instruction implementation stubs
    #[arg(short, long)]
    pub impls: bool,

    /// Generate opcode enums
    #[arg(short, long)]
    pub enums: bool,

    /// Generate all files
    #[arg(short, long)]
    pub all: bool,

    /// Directory for files compiled only into the core (tables, stubs)
    #[arg(long, default_value = "src/boyboy/core/cpu/generated")]
    pub private_dir: PathBuf,

    /// Directory for files included by public headers (declarations, enums)
    #[arg(long, default_value = "include/boyboy/core/cpu/generated")]
    pub public_dir: PathBuf,

    /// Namespace of the CPU core
    #[arg(long, default_value = "boyboy::cpu")]
    pub namespace: String,

    /// Class that owns the opcode handlers
    #[arg(long, default_value = "Cpu")]
    pub class_name: String,

    /// Header providing the unimplemented-opcode error
    #[arg(long, default_value = "boyboy/common/errors.h")]
    pub errors_header: String,

    /// Error thrown by generated stubs
    #[arg(long, default_value = "boyboy::common::errors::UnimplementedOpcode")]
    pub unimplemented_error: String,

    /// Leave the generation timestamp out of file headers
    #[arg(long)]
    pub no_timestamp: bool,

    /// Use this text as the generation timestamp (overrides SOURCE_DATE_EPOCH)
    #[arg(long, conflicts_with = "no_timestamp")]
    pub timestamp: Option<String>,

    /// Print details of an opcode (hex ok with '0x'); may be repeated
    #[arg(long,value_parser=maybe_hex::<u8>)]
    pub show: Vec<u8>,

    /// --show looks in the CB-prefixed space
    #[arg(long)]
    pub cb: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "test/opcodes.json", "--all", "--no-timestamp"])
    } else {
        Args::parse()
    };
}

/// Everything a generation run needs, independent of where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    /// artifact kinds to produce; empty means validate only
    pub kinds: Vec<ArtifactKind>,
    pub dirs: OutputDirs,
    pub names: CoreNames,
    pub stamp: Stamp,
    /// opcodes to print details for, and the space they're looked up in
    pub show: Vec<u8>,
    pub show_space: OpcodeSpace,
}
impl Settings {
    pub fn from_args(args: &Args, source_date_epoch: Option<&str>) -> Settings {
        let kinds = if args.all {
            ArtifactKind::ALL.to_vec()
        } else {
            ArtifactKind::ALL
                .into_iter()
                .filter(|k| match k {
                    ArtifactKind::Table => args.table,
                    ArtifactKind::Declarations => args.decls,
                    ArtifactKind::Stubs => args.impls,
                    ArtifactKind::Enums => args.enums,
                })
                .collect()
        };
        let stamp = if args.no_timestamp {
            Stamp::Omit
        } else if let Some(ts) = &args.timestamp {
            Stamp::Fixed(ts.clone())
        } else if let Some(secs) = source_date_epoch.and_then(|s| s.trim().parse::<u64>().ok()) {
            Stamp::Fixed(format_utc(secs))
        } else {
            Stamp::Now
        };
        Settings {
            input: args.file.clone(),
            kinds,
            dirs: OutputDirs {
                private: args.private_dir.clone(),
                public: args.public_dir.clone(),
            },
            names: CoreNames {
                namespace: args.namespace.clone(),
                class_name: args.class_name.clone(),
                errors_header: args.errors_header.clone(),
                unimplemented_error: args.unimplemented_error.clone(),
            },
            stamp,
            show: args.show.clone(),
            show_space: if args.cb { OpcodeSpace::Extended } else { OpcodeSpace::Primary },
        }
    }
}

pub fn settings() -> Settings {
    let epoch = std::env::var("SOURCE_DATE_EPOCH").ok();
    Settings::from_args(&ARGS, epoch.as_deref())
}
