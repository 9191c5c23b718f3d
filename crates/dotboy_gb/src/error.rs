use thiserror::Error as ThisError;

/// Fatal faults of an emulation session.
///
/// The core never retries or recovers locally: every variant ends the
/// session. Bus transactions cannot fail, and the dense decode tables plus
/// the exhaustive handler match leave no room for a decoded instruction
/// without semantics, so the opcode holes and ROM loading are the only
/// fault sources.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Decode hit one of the SM83 opcode holes (0xD3, 0xDB, 0xDD, 0xE3,
    /// 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD).
    #[error("invalid opcode 0x{opcode:02X} at 0x{addr:04X}")]
    InvalidOpcode { addr: u16, opcode: u8 },

    /// The ROM image could not be loaded.
    #[error("failed to load ROM: {0}")]
    RomLoad(String),
}
