use colored::Colorize;
use log::error;
use super::CommandError;
use crate::FileClass;
use crate::STDRESULT;

fn paths_from_list(list_path: &str) -> Result<Vec<String>,CommandError> {
    match std::fs::read(list_path) {
        Ok(dat) => Ok(String::from_utf8_lossy(&dat).lines()
            .map(|l| l.trim().to_string())
            .filter(|l| l.len() > 0)
            .collect()),
        Err(e) => {
            error!("{}: {}",list_path,e);
            Err(CommandError::FileNotFound)
        }
    }
}

pub fn classify(cmd: &clap::ArgMatches) -> STDRESULT {
    let paths: Vec<String> = match (cmd.get_many::<String>("files"),cmd.get_one::<String>("list")) {
        (Some(files),None) => files.map(|s| s.to_string()).collect(),
        (None,Some(list_path)) => paths_from_list(list_path)?,
        _ => return Err(Box::new(CommandError::InvalidCommand))
    };
    if paths.len()==0 {
        error!("no paths to classify");
        return Err(Box::new(CommandError::UnknownFormat));
    }
    let width = paths.iter().map(|p| p.len()).max().unwrap_or(0);
    for path in paths {
        let class = crate::classify_file(&path);
        let label = match class {
            FileClass::Ascii => class.to_string().green(),
            FileClass::Binary => class.to_string().bright_yellow(),
            FileClass::Missing => class.to_string().red()
        };
        println!("{:width$} {}",path,label,width=width);
    }
    Ok(())
}
