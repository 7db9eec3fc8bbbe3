// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Driver (responder) specific functions.
use super::*;
use core::slice::ChunksExact;

/// Decode the first command of a receive buffer.
///
/// Returns `None` until a complete frame is available.
pub fn decode_command(buf: &[u8]) -> Result<Option<CommandFrame>> {
    if buf.len() < COMMAND_FRAME_LEN {
        return Ok(None);
    }
    CommandFrame::try_from(buf).map(Some)
}

/// Iterate over every complete command in a receive buffer.
///
/// A master may queue several writes before the driver's receive handler
/// runs, so one buffer can carry more than one frame.
#[must_use]
pub fn decode_commands(buf: &[u8]) -> Commands<'_> {
    Commands {
        chunks: buf.chunks_exact(COMMAND_FRAME_LEN),
    }
}

/// Commands iterator.
#[derive(Debug, Clone)]
pub struct Commands<'b> {
    chunks: ChunksExact<'b, u8>,
}

impl<'b> Commands<'b> {
    /// Bytes left over after the last complete frame.
    #[must_use]
    pub fn remainder(&self) -> &'b [u8] {
        self.chunks.remainder()
    }
}

impl Iterator for Commands<'_> {
    type Item = CommandFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks
            .next()
            .and_then(|chunk| CommandFrame::try_from(chunk).ok())
    }
}

/// Encode the answer to a read request.
pub fn encode_state(state: RelayMask, buf: &mut [u8]) -> Result<usize> {
    if buf.len() < STATE_FRAME_LEN {
        return Err(Error::BufferSize);
    }
    buf[0] = state.bits();
    Ok(STATE_FRAME_LEN)
}
