// src/sink.rs
//
// Last stop for a record: serialize once, hand off, done. The default
// destination is the system clipboard; when that fails (headless
// session, denied access) the JSON is printed for manual copy instead
// of escalating — re-running is the recovery path for everything else.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::record::CharacterRecord;

#[derive(Clone, Debug)]
pub enum Delivery {
    Clipboard,
    Stdout,
    File(PathBuf),
}

/// What actually happened, for the caller's status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivered {
    Clipboard,
    ManualCopy,
    Stdout,
    File(PathBuf),
}

pub fn deliver(record: &CharacterRecord, how: &Delivery) -> Result<Delivered, Box<dyn Error>> {
    let json = record.to_pretty_json()?;

    match how {
        Delivery::Stdout => {
            println!("{json}");
            Ok(Delivered::Stdout)
        }
        Delivery::File(path) => {
            fs::write(path, &json)?;
            Ok(Delivered::File(path.clone()))
        }
        Delivery::Clipboard => match copy_to_clipboard(&json) {
            Ok(()) => Ok(Delivered::Clipboard),
            Err(e) => {
                loge!("Clipboard write failed: {e}");
                eprintln!("Clipboard unavailable ({e}); copy the JSON below by hand:");
                println!("{json}");
                Ok(Delivered::ManualCopy)
            }
        },
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)
}
