use clap::{crate_version, Arg, ArgAction, ArgGroup, Command, ValueHint};

const DIALECT_LONG_HELP: &str = "`gw` covers GW-BASIC and BASICA, `qb` covers QuickBASIC and QBasic.
`auto` picks `qb` if a QuickBASIC name table is found, otherwise `gw`.";
const CONFIG_LONG_HELP: &str = "JSON object laid over the selected dialect, recognized keys are
nameCodeLimit, terminator, extendedLeads, scanForFirstRecord, scanAfterChain, nameTable.
Example: '{\"nameCodeLimit\":16,\"nameTable\":{\"marker\":[0,2],\"minOffset\":256}}'";
const CLASSIFY_HELP: &str = "A file is ASCII if more than 95% of its first 512 bytes
are printable ASCII or TAB, LF, CR.  Unreadable files are reported as Missing.";

fn dialect_arg() -> Arg {
    Arg::new("dialect").short('t').long("dialect").help("BASIC dialect").value_name("DIALECT")
        .required(false)
        .value_parser(["gw","qb","auto"])
        .default_value("gw")
        .long_help(DIALECT_LONG_HELP)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").help("dialect settings as JSON string").value_name("JSON")
        .required(false)
        .long_help(CONFIG_LONG_HELP)
}

pub fn build_cli() -> Command {
    let long_help = "debas is always invoked with exactly one of several subcommands.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
listing to console:    `debas decode PROGRAM.BAS`
listing to file:       `debas decode PROGRAM.BAS -o program.txt`
QuickBASIC program:    `debas decode -t qb PROGRAM.BAS`
from a pipe:           `cat PROGRAM.BAS | debas decode -`
sort out binaries:     `debas classify *.BAS`";

    let mut main_cmd = Command::new("debas")
        .about("Recovers listings from tokenized MS-DOS BASIC programs.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("decode")
            .arg(Arg::new("input").help("tokenized program, or `-` for stdin").value_name("FILE")
                .value_hint(ValueHint::FilePath)
                .required(true)
            )
            .arg(Arg::new("output").short('o').long("output").help("save listing to file").value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .required(false)
            )
            .arg(dialect_arg())
            .arg(config_arg())
            .arg(Arg::new("escapes").long("escapes").help("report unknown tokens on stderr").action(ArgAction::SetTrue))
            .visible_alias("dtok")
            .about("detokenize a program, write listing to stdout or a file")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("classify")
            .arg(Arg::new("files").num_args(1..).help("files to classify").value_name("FILES")
                .value_hint(ValueHint::FilePath)
                .required(false)
            )
            .arg(Arg::new("list").short('l').long("list").help("file with one path per line").value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .required(false)
            )
            .group(
                ArgGroup::new("src")
                    .required(true)
                    .multiple(false)
                    .args(["files", "list"])
            )
            .about("tell ASCII programs from tokenized ones")
            .after_help(CLASSIFY_HELP)
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
