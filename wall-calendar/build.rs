use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rustc_version::{version_meta, Channel};

/// Input path to read first days of the week from
const FIRST_WEEKDAY_PATH: &str = "wall-calendar/data/first_weekday.txt";

/// Output path for the generated lookup function
const OUTPUT_FILE: &str = "first_weekday.rs";

fn detect_build_channel() {
    let channel = match version_meta().unwrap().channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={}", channel)
}

fn generate_first_weekday_table(out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut groups: Vec<(u8, Vec<String>)> = Vec::new();
    let lines = BufReader::new(File::open(FIRST_WEEKDAY_PATH)?).lines();

    for line in lines {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut words = line.split_whitespace();
        let offset: u8 = words.next().expect("missing offset").parse()?;
        assert!(offset < 7, "invalid weekday offset {offset}");

        let codes = words
            .map(|code| {
                assert!(
                    code.len() == 2 && code.bytes().all(|c| c.is_ascii_uppercase()),
                    "invalid country code {code}",
                );

                code.to_string()
            })
            .collect();

        groups.push((offset, codes));
    }

    let out_path = out_dir.join(OUTPUT_FILE);
    let mut output = BufWriter::new(File::create(&out_path)?);
    writeln!(output, "/// Generated from `{FIRST_WEEKDAY_PATH}`.")?;
    writeln!(output, "fn lookup_country(code: &str) -> Option<u8> {{")?;
    writeln!(output, "    match code {{")?;

    for (offset, codes) in &groups {
        let pattern: Vec<_> = codes.iter().map(|code| format!("{code:?}")).collect();
        writeln!(output, "        {} => Some({offset}),", pattern.join(" | "))?;
    }

    writeln!(output, "        _ => None,")?;
    writeln!(output, "    }}")?;
    writeln!(output, "}}")?;
    output.flush()?;

    println!("cargo::rerun-if-changed={FIRST_WEEKDAY_PATH}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir: PathBuf = env::var_os("OUT_DIR")
        .expect("cargo build didn't specify an `OUT_DIR` variable")
        .into();

    generate_first_weekday_table(&out_dir)?;
    detect_build_channel();
    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
