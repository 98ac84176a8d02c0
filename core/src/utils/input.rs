use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use crate::{error::ClientError, models::envelope::Envelope};

/// Reads a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String, ClientError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    Ok(fs::read_to_string(path)?)
}

pub fn read_envelope(path: &Path) -> Result<Envelope, ClientError> {
    let raw = read_input(path)?;
    Envelope::from_json(&raw)
}
