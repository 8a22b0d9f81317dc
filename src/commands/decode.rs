//! ## Decode subcommand
//!
//! Reads a tokenized program, writes the listing to stdout or to a file.
//! A program that is malformed still produces whatever listing could be recovered,
//! only failure to read the input (or bad arguments) is an error.

use std::io::Read;
use std::str::FromStr;
use colored::Colorize;
use log::{error,info};
use super::CommandError;
use crate::basic::{Dialect,settings};
use crate::basic::detokenizer::{Detokenizer,write_listing};
use crate::{STDRESULT,DYNERR};

const RCH: &str = "unreachable was reached";

fn read_input(path: &str) -> Result<Vec<u8>,DYNERR> {
    if path=="-" {
        if atty::is(atty::Stream::Stdin) {
            error!("line entry is not supported for `decode`, please pipe something in");
            return Err(Box::new(CommandError::InvalidCommand));
        }
        let mut dat = Vec::new();
        std::io::stdin().read_to_end(&mut dat)?;
        return Ok(dat);
    }
    match std::fs::read(path) {
        Ok(dat) => Ok(dat),
        Err(e) => {
            error!("{}: {}",path,e);
            Err(Box::new(CommandError::FileNotFound))
        }
    }
}

fn select_dialect(cmd: &clap::ArgMatches,dat: &[u8]) -> Result<Dialect,DYNERR> {
    let base = match cmd.get_one::<String>("dialect").expect(RCH).as_str() {
        "auto" => Dialect::detect(dat),
        s => Dialect::from_str(s)?
    };
    match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json,base),
        None => Ok(base)
    }
}

pub fn decode(cmd: &clap::ArgMatches) -> STDRESULT {
    let src_path = cmd.get_one::<String>("input").expect(RCH);
    let dat = read_input(src_path)?;
    if dat.len()==0 {
        info!("{} is empty",src_path);
    } else if crate::classify_bytes(&dat)==crate::FileClass::Ascii {
        log::warn!("{} looks like plain text, the listing is probably garbage",src_path);
    }
    let dialect = select_dialect(cmd,&dat)?;
    let detokenizer = Detokenizer::new(&dialect);
    let lines = detokenizer.decode(&dat);
    match cmd.get_one::<String>("output") {
        Some(dst_path) => {
            let mut file = std::fs::File::create(dst_path)?;
            write_listing(&lines,&mut file)?;
            info!("saved {} lines to {}",lines.len(),dst_path);
        },
        None => write_listing(&lines,&mut std::io::stdout())?
    }
    if cmd.get_flag("escapes") {
        let count = detokenizer.escape_count();
        if count > 0 {
            eprintln!("! {} {}",count.to_string().bright_yellow(),"unknown tokens".bright_yellow());
        } else {
            eprintln!("\u{2713} {}","all tokens known".green());
        }
    }
    Ok(())
}
