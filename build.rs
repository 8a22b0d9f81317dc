use clap::ValueEnum;

include!("src/cli.rs");

fn main() -> Result<(), std::io::Error> {
    if std::env::var("DOCS_RS").is_err() {
        let outdir = match std::env::var_os("CARGO_MANIFEST_DIR") {
            None => return Ok(()),
            Some(root) => std::path::Path::new(&root).join("completions"),
        };
        std::fs::create_dir_all(&outdir)?;

        let mut cmd = build_cli();

        for &shell in clap_complete::Shell::value_variants() {
            clap_complete::generate_to(shell, &mut cmd, "debas", &outdir)?;
        }
    }

    Ok(())
}
