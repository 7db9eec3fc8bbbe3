// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master (initiator) specific functions.
use super::*;

/// Encode a command frame.
pub fn encode_command(frame: CommandFrame, buf: &mut [u8]) -> Result<usize> {
    if buf.len() < COMMAND_FRAME_LEN {
        return Err(Error::BufferSize);
    }
    let bytes: [u8; COMMAND_FRAME_LEN] = frame.into();
    buf[..COMMAND_FRAME_LEN].copy_from_slice(&bytes);
    Ok(COMMAND_FRAME_LEN)
}

/// Decode the answer to a read request.
///
/// All received bytes are drained and the last one wins. An empty answer
/// means the driver did not respond.
pub fn decode_state(buf: &[u8]) -> Result<RelayMask> {
    buf.last()
        .copied()
        .map(RelayMask::new)
        .ok_or(Error::NoResponse)
}
