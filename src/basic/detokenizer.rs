//! Module containing the detokenizer
//!
//! Each payload byte is classified in this order:
//! terminator, NUL, extended lead, name code, single byte token, printable ASCII.
//! Anything left over, and any code that is missing from the tables, becomes an escape
//! such as `<0x8F>` or `<0xFF 20>`, so that the listing stays complete and the gaps are visible.

use std::cell::Cell;
use std::collections::HashMap;
use std::io::Write;
use log::{debug,trace};
use super::{Dialect,DecodedLine};
use super::names::{self,NameTable};
use super::walker::Walker;
use crate::STDRESULT;

const NO_SPACE_AFTER: &str = " (=<>+-*/^\\,;:";
const NO_SPACE_BEFORE: &str = " (),;:";

/// Handles detokenization for one dialect
pub struct Detokenizer<'a>
{
    dialect: &'a Dialect,
    detok_map: HashMap<u8,&'static str>,
    ext_detok_map: HashMap<(u8,u8),&'static str>,
    escapes: Cell<usize>
}

/// Accumulates ASCII runs and words, spacing is decided when the line is finished
struct LineBuilder {
    pieces: Vec<String>,
    ascii: String
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            pieces: Vec::new(),
            ascii: String::new()
        }
    }
    fn flush(&mut self) {
        if self.ascii.len() > 0 {
            self.pieces.push(std::mem::take(&mut self.ascii));
        }
    }
    fn push_char(&mut self,c: char) {
        self.ascii.push(c);
    }
    fn push_word(&mut self,word: &str) {
        self.flush();
        self.pieces.push(word.to_string());
    }
    /// Pieces are separated by one space, except after whitespace or an operator,
    /// and before whitespace or closing punctuation.
    fn finish(mut self) -> String {
        self.flush();
        let mut code = String::new();
        for piece in self.pieces {
            let glued = code.ends_with(|c: char| NO_SPACE_AFTER.contains(c)) || piece.starts_with(|c: char| NO_SPACE_BEFORE.contains(c));
            if code.len() > 0 && !glued {
                code += " ";
            }
            code += &piece;
        }
        code.trim().to_string()
    }
}

impl <'a> Detokenizer<'a>
{
    /// Create a new `Detokenizer` structure
    pub fn new(dialect: &'a Dialect) -> Self
    {
        Self {
            dialect,
            detok_map: dialect.tokens.single.iter().map(|(b,s)| (*b,*s)).collect(),
            ext_detok_map: dialect.tokens.extended.iter().map(|(k,s)| (*k,*s)).collect(),
            escapes: Cell::new(0)
        }
    }
    pub fn lookup_single(&self,b: u8) -> Option<&'static str> {
        self.detok_map.get(&b).copied()
    }
    pub fn lookup_extended(&self,lead: u8,next: u8) -> Option<&'static str> {
        self.ext_detok_map.get(&(lead,next)).copied()
    }
    /// Number of escapes produced since this detokenizer was created
    pub fn escape_count(&self) -> usize {
        self.escapes.get()
    }
    fn escape(&self,bytes: &[u8]) -> String {
        self.escapes.set(self.escapes.get() + 1);
        match bytes {
            [lead,next] => format!("<0x{:02X} {:02X}>",lead,next),
            _ => format!("<0x{:02X}>",bytes[0])
        }
    }
    /// Detokenize the payload between `start` and `end`, or up to the terminator if that comes first.
    /// Bounds are clamped to the buffer, a malformed span gives an empty or partial line.
    pub fn decode_line(&self,buf: &[u8],start: usize,end: usize,names: &NameTable) -> String {
        let end = usize::min(end,buf.len());
        let use_names = !names.is_empty();
        let mut line = LineBuilder::new();
        let mut addr = start;
        while addr < end {
            let b = buf[addr];
            if b==self.dialect.terminator {
                break;
            } else if b==0 {
                line.flush();
                addr += 1;
            } else if self.dialect.is_extended_lead(b) {
                if addr + 1 >= end {
                    trace!("extended lead {:02X} at end of line",b);
                    line.push_word(&self.escape(&[b]));
                    break;
                }
                let next = buf[addr+1];
                match self.lookup_extended(b,next) {
                    Some(tok) => line.push_word(tok),
                    None => {
                        debug!("unknown extended token {:02X} {:02X} at {}",b,next,addr);
                        line.push_word(&self.escape(&[b,next]));
                    }
                }
                addr += 2;
            } else if use_names && self.dialect.is_name_code(b) {
                match names.get(b) {
                    Some(name) => line.push_word(name),
                    None => {
                        debug!("name code {:02X} has no entry",b);
                        line.push_word(&self.escape(&[b]));
                    }
                }
                addr += 1;
            } else if b >= 0x81 {
                match self.lookup_single(b) {
                    Some(tok) => line.push_word(tok),
                    None => {
                        debug!("unknown token {:02X} at {}",b,addr);
                        line.push_word(&self.escape(&[b]));
                    }
                }
                addr += 1;
            } else if b >= 0x20 && b <= 0x7e {
                line.push_char(b as char);
                addr += 1;
            } else {
                line.push_word(&self.escape(&[b]));
                addr += 1;
            }
        }
        line.finish()
    }
    /// Detokenize a whole program, lines are in the order the pointer chain visits them
    pub fn decode(&self,buf: &[u8]) -> Vec<DecodedLine> {
        let names = names::load_names(buf,self.dialect);
        Walker::new(buf,self.dialect).map(|rec| {
            DecodedLine {
                line_num: rec.line_num,
                text: self.decode_line(buf,rec.payload_start,rec.payload_end,&names)
            }
        }).collect()
    }
}

/// Put the listing in a string, one line per record, each ending in a newline
pub fn listing_to_string(lines: &[DecodedLine]) -> String {
    let mut code = String::new();
    for line in lines {
        code += &line.to_string();
        code += "\n";
    }
    code
}

/// Write the listing to any sink
pub fn write_listing<W: Write>(lines: &[DecodedLine],sink: &mut W) -> STDRESULT {
    sink.write_all(listing_to_string(lines).as_bytes())?;
    sink.flush()?;
    Ok(())
}
