// src/params.rs
use std::path::PathBuf;

// Sheet site
pub const SHEET_HOST: &str = "dndbeyond.com";
pub const SHEET_PATH: &str = "/characters/";

// Provenance tag stamped into every payload
pub const ORIGIN_TAG: &str = "dndbeyond_sheet_scrape";

#[derive(Clone, Debug)]
pub struct Params {
    pub input: Option<PathBuf>,  // saved sheet HTML; "-" or absent reads stdin
    pub url: Option<String>,     // page URL; else recovered from the document
    pub out: Option<PathBuf>,    // write JSON to file instead of clipboard
    pub to_stdout: bool,         // print JSON instead of clipboard
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            url: None,
            out: None,
            to_stdout: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
