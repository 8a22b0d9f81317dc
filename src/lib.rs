//! # `debas` main library
//!
//! This library recovers readable listings from BASIC programs that were saved in the
//! compressed (tokenized) form by GW-BASIC, BASICA, or QuickBASIC.
//!
//! ## Architecture
//!
//! The decoding pipeline is in `basic`:
//! * `basic::walker::Walker` follows the linked list of line records
//! * `basic::detokenizer::Detokenizer` turns each record's payload into text
//! * `basic::names` recovers the QuickBASIC name table
//! * `basic::Dialect` carries the token tables and the per dialect constants
//!
//! Decoding never fails on malformed content.  Unknown tokens are shown as escapes
//! like `<0xAB>`, and a broken pointer chain ends the listing early.
//! The only errors are at the boundary, e.g., when the program file cannot be read.
//!
//! ## Command Line
//!
//! The CLI subcommands are in `commands`, the `clap` definitions are in `cli.rs`.

pub mod basic;
pub mod commands;

use basic::{Dialect,DecodedLine};
use basic::detokenizer::Detokenizer;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Number of bytes examined when classifying a file
pub const CLASSIFY_WINDOW: usize = 512;

/// Rough nature of a BASIC file
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum FileClass {
    Ascii,
    Binary,
    Missing
}

impl std::fmt::Display for FileClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascii => write!(f,"ASCII"),
            Self::Binary => write!(f,"Binary"),
            Self::Missing => write!(f,"Missing")
        }
    }
}

/// Detokenize a program using the default dialect (GW-BASIC).
pub fn decode(buf: &[u8]) -> Vec<DecodedLine> {
    let dialect = Dialect::default();
    Detokenizer::new(&dialect).decode(buf)
}

/// Detokenize a program using the given dialect.
pub fn decode_with(buf: &[u8],dialect: &Dialect) -> Vec<DecodedLine> {
    Detokenizer::new(dialect).decode(buf)
}

/// Decide whether the bytes look like a plain text program or a tokenized one.
/// Only the first `CLASSIFY_WINDOW` bytes are examined, text needs more than 95% printable
/// ASCII (TAB, LF, CR allowed).  An empty slice is `Binary`.
pub fn classify_bytes(dat: &[u8]) -> FileClass {
    let chunk = &dat[0..usize::min(dat.len(),CLASSIFY_WINDOW)];
    if chunk.len()==0 {
        return FileClass::Binary;
    }
    let score = chunk.iter().filter(|b| (**b >= 32 && **b <= 126) || [9,10,13].contains(*b)).count();
    match score as f64 / chunk.len() as f64 > 0.95 {
        true => FileClass::Ascii,
        false => FileClass::Binary
    }
}

/// Classify a file on the local file system, `Missing` if it cannot be read.
pub fn classify_file(path: &str) -> FileClass {
    match std::fs::read(path) {
        Ok(dat) => classify_bytes(&dat),
        Err(e) => {
            log::debug!("{}: {}",path,e);
            FileClass::Missing
        }
    }
}

#[test]
fn test_classify() {
    assert_eq!(classify_bytes(b"10 PRINT \"HI\"\r\n20 END\r\n"),FileClass::Ascii);
    assert_eq!(classify_bytes(&[0xff,0x91,0x00,0x0d]),FileClass::Binary);
    assert_eq!(classify_bytes(&[]),FileClass::Binary);
    // one stray byte in 100 is still text
    let mut almost = vec![b'A';99];
    almost.push(0x91);
    assert_eq!(classify_bytes(&almost),FileClass::Ascii);
}
