use std::path::Path;

use crate::error::Error;

/// The 48-byte logo bitmap every licensed cartridge carries at 0x0104.
/// The boot ROM refuses to start a cartridge whose copy does not match;
/// for this core a mismatch is informational only.
pub(crate) const LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// A cartridge ROM image.
#[derive(Clone, Debug)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    /// Read a ROM image from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|err| Error::RomLoad(format!("{}: {err}", path.display())))?;
        Ok(Self { data })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the image carries the logo bitmap at 0x0104.
    pub fn has_valid_logo(&self) -> bool {
        self.data
            .get(0x0104..0x0104 + LOGO.len())
            .map_or(false, |slice| slice == LOGO.as_slice())
    }
}
