use crate::dupcheck::Collision;
use std::{convert::From, fmt};

/// Simple custom Error for the opcode generator
pub struct Error {
    pub kind: ErrorKind,
    /// every identifier collision found (only for ErrorKind::DuplicateIdentifier)
    pub collisions: Vec<Collision>,
    pub msg: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// missing top-level space, missing or ill-typed record field, bad opcode key
    MalformedInput,
    /// two codes in the same space derive the same identifier
    DuplicateIdentifier,
    /// an artifact could not be written to its target location
    OutputWrite,
    /// underlying io error while reading input
    IO,
    /// catch-all for other errors
    General,
}

impl Error {
    pub fn new(kind: ErrorKind, message: &str) -> Error {
        Error {
            kind,
            collisions: Vec::new(),
            msg: String::from(message),
        }
    }
    pub fn duplicates(collisions: Vec<Collision>) -> Error {
        let count = collisions.len();
        Error {
            kind: ErrorKind::DuplicateIdentifier,
            collisions,
            msg: format!("{} duplicate function name{} detected", count, if count == 1 { "" } else { "s" }),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, e.to_string().as_str()) }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self { Error::new(ErrorKind::MalformedInput, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}: {}", red!("opgen::Error"), self) }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)?;
        for c in &self.collisions {
            write!(f, "\n{}", c)?;
        }
        Ok(())
    }
}
impl std::error::Error for Error {}
