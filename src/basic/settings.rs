//! Parse a dialect configuration string.
//!
//! The JSON object is laid over one of the built-in dialects.
//! Unknown keys are ignored, as are values of the wrong type or out of range,
//! in which case the built-in value is kept.
//!
//! ```json
//! {
//!     "nameCodeLimit": 32,
//!     "terminator": 13,
//!     "extendedLeads": [254,255],
//!     "scanForFirstRecord": true,
//!     "scanAfterChain": true,
//!     "nameTable": { "marker": [0,2], "minOffset": 256 }
//! }
//! ```

use serde_json;
use log::{warn,error};
use super::{Dialect,NameTableLocator,Error};
use crate::DYNERR;

/// Try to update a byte from a serde `Value` presumed to be an object.
/// If there is any error do not change the value.
fn update_json_u8(maybe_obj: &serde_json::Value, key: &str, lb: u8, curr: &mut u8) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            match x.as_u64() {
                Some(v) if v >= lb as u64 && v <= 0xff => *curr = v as u8,
                _ => warn!("ignoring {}: expected integer {}..=255",key,lb)
            }
        }
    }
}

fn update_json_bool(maybe_obj: &serde_json::Value, key: &str, curr: &mut bool) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            match x.as_bool() {
                Some(v) => *curr = v,
                None => warn!("ignoring {}: expected boolean",key)
            }
        }
    }
}

/// Try to update a byte list, every element must be at least `lb`.
/// If there is any error do not change the value.
fn update_json_vec_u8(maybe_obj: &serde_json::Value, key: &str, lb: u8, curr: &mut Vec<u8>) {
    if let Some(outer) = maybe_obj.as_object() {
        if let Some(x) = outer.get(key) {
            let mut ans: Vec<u8> = Vec::new();
            if let Some(a) = x.as_array() {
                for v in a {
                    match v.as_u64() {
                        Some(b) if b >= lb as u64 && b <= 0xff => ans.push(b as u8),
                        _ => {
                            warn!("ignoring {}: elements must be integers {}..=255",key,lb);
                            return;
                        }
                    }
                }
                *curr = ans;
            } else {
                warn!("ignoring {}: expected array",key);
            }
        }
    }
}

/// `null` turns the name table off, an object adjusts or creates it.
fn update_json_name_table(maybe_obj: &serde_json::Value, key: &str, curr: &mut Option<NameTableLocator>) {
    if let Some(outer) = maybe_obj.as_object() {
        match outer.get(key) {
            Some(serde_json::Value::Null) => *curr = None,
            Some(serde_json::Value::Object(obj)) => {
                let mut ans = match curr {
                    Some(loc) => *loc,
                    None => NameTableLocator { marker: super::QB_NAME_TABLE_MARKER, min_offset: super::QB_NAME_TABLE_MIN_OFFSET }
                };
                if let Some(m) = obj.get("marker") {
                    let pair: Vec<Option<u64>> = match m.as_array() {
                        Some(a) => a.iter().map(|v| v.as_u64()).collect(),
                        None => Vec::new()
                    };
                    match pair.as_slice() {
                        [Some(b0),Some(b1)] if *b0 <= 0xff && *b1 <= 0xff => {
                            ans.marker = [*b0 as u8,*b1 as u8];
                        },
                        _ => {
                            warn!("ignoring {}.marker: expected two bytes",key);
                            return;
                        }
                    }
                }
                if let Some(o) = obj.get("minOffset") {
                    match o.as_u64() {
                        Some(v) => ans.min_offset = v as usize,
                        None => {
                            warn!("ignoring {}.minOffset: expected integer",key);
                            return;
                        }
                    }
                }
                *curr = Some(ans);
            },
            Some(_) => warn!("ignoring {}: expected object or null",key),
            None => {}
        }
    }
}

/// Overlay the JSON configuration on `base`.
/// The string must be a JSON object, otherwise this is an error.
pub fn parse(json: &str,base: Dialect) -> Result<Dialect,DYNERR> {
    let mut ans = base;
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => {
            error!("dialect configuration: {}",e);
            return Err(Box::new(Error::Config));
        }
    };
    if !root.is_object() {
        error!("dialect configuration must be a JSON object");
        return Err(Box::new(Error::Config));
    }
    update_json_u8(&root,"terminator",1,&mut ans.terminator);
    update_json_vec_u8(&root,"extendedLeads",0x80,&mut ans.extended_leads);
    update_json_bool(&root,"scanForFirstRecord",&mut ans.scan_for_first_record);
    update_json_bool(&root,"scanAfterChain",&mut ans.scan_after_chain);
    update_json_name_table(&root,"nameTable",&mut ans.name_table);
    let mut limit = ans.name_code_limit;
    update_json_u8(&root,"nameCodeLimit",0,&mut limit);
    if limit > 0x20 {
        warn!("name code limit {} is above 0x20, using 0x20",limit);
        limit = 0x20;
    }
    ans.name_code_limit = limit;
    Ok(ans)
}
