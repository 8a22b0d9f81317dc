//! # MS-DOS BASIC detokenization
//!
//! Programs saved by GW-BASIC, BASICA or QuickBASIC in their compressed form are a
//! linked list of line records:
//!
//! `[next record offset: u16 LE][line number: u16 LE][payload ...][0x0D]`
//!
//! Records with line number 0 are administrative blocks that are followed but never listed.
//! The payload mixes plain ASCII with keyword tokens, two-byte extended tokens, and, for
//! QuickBASIC, single byte codes that index a table of variable names stored elsewhere in the file.
//!
//! * `token_maps` holds the keyword tables for each dialect
//! * `names` recovers the name table
//! * `walker` follows the pointer chain
//! * `detokenizer` turns record payloads into text and assembles the listing
//! * `settings` overlays user configuration on a built-in dialect

mod token_maps;
#[cfg(test)]
mod detokenize_test;
#[cfg(test)]
mod settings_test;
pub mod names;
pub mod walker;
pub mod detokenizer;
pub mod settings;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use log::info;

pub use token_maps::TokenTable;

/// Offset used by QuickBASIC name tables, anything earlier is header.
pub const QB_NAME_TABLE_MIN_OFFSET: usize = 0x100;
/// Marker that precedes the QuickBASIC name table.
pub const QB_NAME_TABLE_MARKER: [u8;2] = [0x00,0x02];
/// Conventional line terminator.
pub const EOL: u8 = 0x0D;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Dialect is unknown")]
    UnknownDialect,
    #[error("Configuration could not be interpreted")]
    Config
}

/// Where and how to look for the name table.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct NameTableLocator {
    pub marker: [u8;2],
    pub min_offset: usize
}

#[derive(Clone,Copy,Debug,PartialEq)]
pub enum DialectKind {
    GwBasic,
    QuickBasic
}

/// Everything the walker and decoder need to know about a dialect.
/// This is plain data, it is built once and passed around by reference.
#[derive(Clone,Debug)]
pub struct Dialect {
    pub kind: DialectKind,
    pub tokens: &'static TokenTable,
    /// bytes below this are name codes, 0 disables name codes
    pub name_code_limit: u8,
    pub terminator: u8,
    pub extended_leads: Vec<u8>,
    pub name_table: Option<NameTableLocator>,
    /// if offset 0 does not look like a record, scan for one
    pub scan_for_first_record: bool,
    /// after a chain ends, scan forward for another chain
    pub scan_after_chain: bool
}

impl Dialect {
    /// GW-BASIC and BASICA
    pub fn gw() -> Self {
        Self {
            kind: DialectKind::GwBasic,
            tokens: &token_maps::GW_TABLE,
            name_code_limit: 0,
            terminator: EOL,
            extended_leads: vec![0xfd,0xfe,0xff],
            name_table: None,
            scan_for_first_record: true,
            scan_after_chain: false
        }
    }
    /// QuickBASIC and QBasic
    pub fn qb() -> Self {
        Self {
            kind: DialectKind::QuickBasic,
            tokens: &token_maps::QB_TABLE,
            name_code_limit: 0x20,
            terminator: EOL,
            extended_leads: vec![0xfe,0xff],
            name_table: Some(NameTableLocator {
                marker: QB_NAME_TABLE_MARKER,
                min_offset: QB_NAME_TABLE_MIN_OFFSET
            }),
            scan_for_first_record: true,
            scan_after_chain: true
        }
    }
    /// Heuristic choice between the built-in dialects.
    /// If a QuickBASIC name table can be found the program is assumed to be QuickBASIC.
    pub fn detect(buf: &[u8]) -> Self {
        let qb = Self::qb();
        if !names::load_names(buf,&qb).is_empty() {
            info!("found name table, assuming QuickBASIC");
            return qb;
        }
        info!("no name table, assuming GW-BASIC");
        Self::gw()
    }
    pub fn is_extended_lead(&self,b: u8) -> bool {
        self.extended_leads.contains(&b)
    }
    pub fn is_name_code(&self,b: u8) -> bool {
        b < self.name_code_limit
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::gw()
    }
}

impl FromStr for Dialect {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "gw" => Ok(Self::gw()),
            "qb" => Ok(Self::qb()),
            _ => Err(Error::UnknownDialect)
        }
    }
}

/// One reconstructed program line
#[derive(Clone,Debug,PartialEq)]
pub struct DecodedLine {
    pub line_num: u16,
    pub text: String
}

impl fmt::Display for DecodedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text.len() {
            0 => write!(f,"{}",self.line_num),
            _ => write!(f,"{} {}",self.line_num,self.text)
        }
    }
}
