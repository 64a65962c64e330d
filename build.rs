// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: catalog file path
fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .short('c')
        .long("catalog")
        .value_name("PATH")
        .help("Path to a TOML catalog file (builtin catalog when omitted)")
}

fn build_cli() -> Command {
    Command::new("pantry")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Pantry Contributors")
        .about("Recipe lookup with ingredient matching")
        .subcommand_required(true)
        .subcommand(
            Command::new("suggest")
                .about("Suggest recipes sharing at least one of the given ingredients")
                .arg(
                    Arg::new("ingredients")
                        .required(true)
                        .help("Comma-separated ingredient list"),
                )
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a recipe by exact name")
                .arg(Arg::new("name").required(true).help("Recipe name"))
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List every recipe in the catalog")
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("serve")
                .about("Start the web UI")
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .default_value("127.0.0.1:8080")
                        .help("Address to bind to"),
                )
                .arg(catalog_arg()),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    fs::write(out_dir.join("pantry.1"), buffer)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
