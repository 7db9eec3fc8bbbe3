// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{error::*, frame::*};

#[cfg(feature = "driver")]
pub mod driver;
#[cfg(feature = "master")]
pub mod master;

/// Size of a write transaction: `[command][relay_code]`.
pub const COMMAND_FRAME_LEN: usize = 2;

/// Size of a read transaction: `[state]`.
pub const STATE_FRAME_LEN: usize = 1;

type Result<T> = core::result::Result<T, Error>;

impl From<CommandFrame> for [u8; COMMAND_FRAME_LEN] {
    fn from(frame: CommandFrame) -> Self {
        [frame.command.value(), frame.relay_code.bits()]
    }
}

impl TryFrom<&[u8]> for CommandFrame {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < COMMAND_FRAME_LEN {
            return Err(Error::BufferSize);
        }
        Ok(CommandFrame {
            command: Command::new(bytes[0]),
            relay_code: RelayMask::new(bytes[1]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_frame_into_bytes() {
        let bytes: [u8; 2] = CommandFrame::new(Command::TurnOn, RelayMask::RELAY_3).into();
        assert_eq!(bytes, [0xCF, 0x04]);

        let bytes: [u8; 2] = CommandFrame::toggle_all().into();
        assert_eq!(bytes, [0xAA, 0x00]);

        let bytes: [u8; 2] = CommandFrame::new(Command::Unknown(0x13), RelayMask::RELAY_8).into();
        assert_eq!(bytes, [0x13, 0x80]);
    }

    #[test]
    fn command_frame_from_bytes() {
        let data: &[u8] = &[];
        assert_eq!(CommandFrame::try_from(data), Err(Error::BufferSize));
        let data: &[u8] = &[0xCA];
        assert_eq!(CommandFrame::try_from(data), Err(Error::BufferSize));

        let data: &[u8] = &[0xCA, 0x10];
        assert_eq!(
            CommandFrame::try_from(data).unwrap(),
            CommandFrame::new(Command::Toggle, RelayMask::RELAY_5)
        );

        let data: &[u8] = &[0x07, 0x01, 0xFF];
        assert_eq!(
            CommandFrame::try_from(data).unwrap(),
            CommandFrame::new(Command::Unknown(0x07), RelayMask::RELAY_1)
        );
    }
}
