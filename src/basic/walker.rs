//! Module containing the line record walker.
//!
//! The walker follows the pointer chain from record to record, yielding the location
//! of every program line.  Administrative records (line number 0) are followed but not yielded.
//! The walk always terminates: every offset is visited at most once, and any pointer that is
//! zero, out of bounds, or already visited ends the chain.  What was found up to that point
//! is kept, a broken chain is not an error.
//! QuickBASIC may store a program as several chains, so when the dialect asks for it the walker
//! looks past the end of each chain for the next one.  The visited set is shared by all chains.

use std::collections::HashSet;
use binrw::BinRead;
use binrw::io::Cursor;
use log::{debug,info,warn};
use super::Dialect;

/// The fixed part of every record
#[derive(BinRead,Debug,Clone,Copy)]
#[br(little)]
pub struct RecordHeader {
    pub next: u16,
    pub line_num: u16
}

pub const HEADER_LEN: usize = 4;

/// Location of one program line within the buffer
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct LineRecord {
    pub offset: usize,
    pub next: usize,
    pub line_num: u16,
    pub payload_start: usize,
    /// exclusive, never beyond the buffer
    pub payload_end: usize
}

#[derive(Clone,Copy,Debug,PartialEq)]
enum State {
    SeekFirstRecord,
    WalkChain(usize),
    SeekNextChain,
    Done
}

/// Read the header at `offset`, or None if it does not fit in the buffer.
pub fn read_header(buf: &[u8],offset: usize) -> Option<RecordHeader> {
    if offset + HEADER_LEN > buf.len() {
        return None;
    }
    let mut curs = Cursor::new(&buf[offset..offset+HEADER_LEN]);
    RecordHeader::read(&mut curs).ok()
}

/// Iterates over the line records of a tokenized program
pub struct Walker<'a> {
    buf: &'a [u8],
    dialect: &'a Dialect,
    state: State,
    visited: HashSet<usize>,
    /// where the search for another chain begins, never decreases
    resume: usize
}

impl <'a> Walker<'a> {
    pub fn new(buf: &'a [u8],dialect: &'a Dialect) -> Self {
        Self {
            buf,
            dialect,
            state: State::SeekFirstRecord,
            visited: HashSet::new(),
            resume: 0
        }
    }
    /// true if the pointer can be followed (it may still lead to a visited record)
    fn in_bounds(&self,ptr: usize) -> bool {
        ptr > 0 && ptr < self.buf.len()
    }
    fn has_terminator(&self,start: usize,end: usize) -> bool {
        start < end && end <= self.buf.len() && self.buf[start..end].contains(&self.dialect.terminator)
    }
    /// Record that points forward to another record, with a terminator in between.
    fn linked_record(&self,offset: usize) -> bool {
        match read_header(self.buf,offset) {
            Some(h) => {
                let next = h.next as usize;
                next > offset && self.in_bounds(next) && self.has_terminator(offset + HEADER_LEN,next)
            },
            None => false
        }
    }
    /// Program line that ends the chain with a zero pointer, with a terminator before the buffer end.
    fn last_record(&self,offset: usize) -> bool {
        match read_header(self.buf,offset) {
            Some(h) => h.line_num!=0 && h.next==0 && self.has_terminator(offset + HEADER_LEN,self.buf.len()),
            None => false
        }
    }
    /// Admin block at the start of the buffer that points somewhere beyond its own header.
    fn admin_start(&self) -> bool {
        match read_header(self.buf,0) {
            Some(h) => h.line_num==0 && h.next as usize > HEADER_LEN && self.in_bounds(h.next as usize),
            None => false
        }
    }
    fn scan(&self,from: usize,step: usize,test: impl Fn(&Self,usize) -> bool) -> Option<usize> {
        let mut offset = from;
        while offset + HEADER_LEN <= self.buf.len() {
            if !self.visited.contains(&offset) && test(self,offset) {
                return Some(offset);
            }
            offset += step;
        }
        None
    }
    /// This is a heuristic.  Some files start with admin blocks at irregular offsets, or are
    /// shifted, so if offset 0 is not convincing we look at word aligned offsets for something
    /// that could be a record.  Records linked to a successor are preferred over a lone last record.
    /// There is no guarantee the candidate is the true first line.
    fn seek_first_record(&self) -> Option<usize> {
        if self.linked_record(0) || self.admin_start() || self.last_record(0) {
            return Some(0);
        }
        if !self.dialect.scan_for_first_record {
            return read_header(self.buf,0).map(|_| 0);
        }
        if let Some(offset) = self.scan(2,2,Self::linked_record).or_else(|| self.scan(2,2,Self::last_record)) {
            info!("first record found by scanning at offset {}",offset);
            return Some(offset);
        }
        match read_header(self.buf,0) {
            Some(h) if h.line_num!=0 => {
                debug!("no better candidate, taking offset 0 as is");
                Some(0)
            },
            _ => {
                warn!("no line records were found");
                None
            }
        }
    }
    /// Look past the chain just finished for the start of another one.
    fn seek_next_chain(&mut self) -> Option<usize> {
        let ans = Walker::scan(self,self.resume,1,Self::linked_record);
        if let Some(offset) = ans {
            info!("another chain starts at offset {}",offset);
            self.resume = usize::max(self.resume,offset + 1);
        }
        ans
    }
    fn end_chain(&self) -> State {
        match self.dialect.scan_after_chain {
            true => State::SeekNextChain,
            false => State::Done
        }
    }
    fn payload_end(&self,offset: usize,next: usize) -> usize {
        if next >= offset + HEADER_LEN && next <= self.buf.len() {
            next
        } else {
            self.buf.len()
        }
    }
    /// just past the terminator, or the end of the payload if there is none
    fn record_end(&self,start: usize,end: usize) -> usize {
        match self.buf[start..end].iter().position(|b| *b==self.dialect.terminator) {
            Some(p) => start + p + 1,
            None => end
        }
    }
}

impl <'a> Iterator for Walker<'a> {
    type Item = LineRecord;
    fn next(&mut self) -> Option<LineRecord> {
        loop {
            match self.state {
                State::Done => return None,
                State::SeekFirstRecord => {
                    self.state = match self.seek_first_record() {
                        Some(offset) => State::WalkChain(offset),
                        None => State::Done
                    };
                },
                State::SeekNextChain => {
                    self.state = match self.seek_next_chain() {
                        Some(offset) => State::WalkChain(offset),
                        None => State::Done
                    };
                },
                State::WalkChain(offset) => {
                    if !self.visited.insert(offset) {
                        warn!("cycle detected at offset {}, listing may be incomplete",offset);
                        self.state = self.end_chain();
                        continue;
                    }
                    let h = match read_header(self.buf,offset) {
                        Some(h) => h,
                        None => {
                            debug!("record header at {} is truncated",offset);
                            self.state = self.end_chain();
                            continue;
                        }
                    };
                    let next = h.next as usize;
                    if h.line_num==0 {
                        self.resume = usize::max(self.resume,offset + HEADER_LEN);
                        self.state = match self.in_bounds(next) {
                            true => {
                                debug!("skipping admin block at {}",offset);
                                State::WalkChain(next)
                            },
                            false => self.end_chain()
                        };
                        continue;
                    }
                    let rec = LineRecord {
                        offset,
                        next,
                        line_num: h.line_num,
                        payload_start: offset + HEADER_LEN,
                        payload_end: self.payload_end(offset,next)
                    };
                    self.resume = usize::max(self.resume,self.record_end(rec.payload_start,rec.payload_end));
                    self.state = match self.in_bounds(next) {
                        true if self.visited.contains(&next) => {
                            warn!("line {} points back to offset {}, ending chain",h.line_num,next);
                            self.end_chain()
                        },
                        true => State::WalkChain(next),
                        false => {
                            debug!("end of chain after line {}",h.line_num);
                            self.end_chain()
                        }
                    };
                    return Some(rec);
                }
            }
        }
    }
}
