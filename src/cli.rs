// src/cli.rs
use std::{env, error::Error, fs, io::Read, path::PathBuf};

use scraper::Html;
use url::Url;

use crate::error::ScrapeError;
use crate::extract::{self, identity};
use crate::params::Params;
use crate::sink::{self, Delivered, Delivery};

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let html_doc = read_input(&params)?;
    let doc = Html::parse_document(&html_doc);

    let page_url = resolve_url(&params, &doc)?;
    identity::verify_sheet_page(&page_url)?;
    logf!("Scraping sheet at {}", page_url);

    let record = extract::character(&doc, &page_url)?;
    logf!(
        "Extracted {} ({}): {} abilities, {} skills, {} saves",
        record.name,
        record.summary(),
        record.ability_scores.len(),
        record.proficiencies.skills.len(),
        record.proficiencies.saving_throws.len(),
    );

    match sink::deliver(&record, &delivery(&params))? {
        Delivered::Clipboard => {
            println!("Copied to clipboard: {} — {}", record.name, record.summary());
            println!("Paste it into the summons tracker's import box.");
        }
        Delivered::File(path) => {
            println!("Wrote {}: {} — {}", path.display(), record.name, record.summary());
        }
        Delivered::Stdout | Delivered::ManualCopy => {}
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                params.url = Some(args.next().ok_or("Missing value for --url")?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--stdout" => params.to_stdout = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other == "-" || !other.starts_with('-') => {
                if params.input.is_some() {
                    return Err(format!("Unexpected arg: {}", other).into());
                }
                params.input = Some(PathBuf::from(other));
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

fn read_input(params: &Params) -> Result<String, Box<dyn Error>> {
    match &params.input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn resolve_url(params: &Params, doc: &Html) -> Result<Url, ScrapeError> {
    if let Some(u) = &params.url {
        return Ok(Url::parse(u)?);
    }
    identity::page_url(doc).ok_or(ScrapeError::NoPageUrl)
}

fn delivery(params: &Params) -> Delivery {
    if let Some(path) = &params.out {
        Delivery::File(path.clone())
    } else if params.to_stdout {
        Delivery::Stdout
    } else {
        Delivery::Clipboard
    }
}
