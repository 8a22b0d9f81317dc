//! Name table recovery.
//!
//! QuickBASIC replaces identifiers in the line payloads with small integer codes.
//! The identifiers themselves are stored after a marker, as a sequence of length prefixed
//! ASCII strings, each followed by zero padding, ending with a zero length.

use log::{debug,info};
use super::Dialect;

/// Ordered identifier names, index 0 is reserved.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct NameTable {
    names: Vec<String>
}

impl NameTable {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }
    /// Build from a list that includes the reserved entry at index 0.
    pub fn from_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|s| s.to_string()).collect()
        }
    }
    /// Name for the given code, or None if there is no usable entry.
    pub fn get(&self,code: u8) -> Option<&str> {
        match self.names.get(code as usize) {
            Some(name) if name.len() > 0 => Some(name),
            _ => None
        }
    }
    /// true if there are no names apart from the reserved entry
    pub fn is_empty(&self) -> bool {
        self.names.iter().all(|s| s.len()==0)
    }
    /// number of entries including the reserved one
    pub fn len(&self) -> usize {
        self.names.len()
    }
}

fn find_marker(buf: &[u8],marker: &[u8;2],from: usize) -> Option<usize> {
    if from >= buf.len() {
        return None;
    }
    buf[from..].windows(2).position(|w| w==marker).map(|p| p + from)
}

/// Scan `buf` for the dialect's name table.
/// Not finding the table is normal, in that case the returned table is empty.
pub fn load_names(buf: &[u8],dialect: &Dialect) -> NameTable {
    let loc = match dialect.name_table {
        Some(loc) => loc,
        None => return NameTable::new()
    };
    let mut ptr = match find_marker(buf,&loc.marker,loc.min_offset) {
        Some(p) => p + 2,
        None => {
            debug!("name table marker not found");
            return NameTable::new();
        }
    };
    let mut ans = NameTable::from_names(&[""]);
    while ptr < buf.len() {
        let n = buf[ptr] as usize;
        if n==0 {
            break;
        }
        if ptr + 1 + n > buf.len() {
            debug!("name at {} runs past end of buffer",ptr);
            break;
        }
        let name = &buf[ptr+1..ptr+1+n];
        if !name.iter().all(|b| b.is_ascii_graphic()) {
            debug!("name at {} is not printable, ending table",ptr);
            break;
        }
        ans.names.push(String::from_utf8_lossy(name).to_string());
        ptr += 1 + n;
        while ptr < buf.len() && buf[ptr]==0 {
            ptr += 1;
        }
    }
    if ans.is_empty() {
        return NameTable::new();
    }
    info!("recovered {} names",ans.len()-1);
    ans
}
