// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

mod mask;

pub use self::mask::*;

/// A relay command.
///
/// It is represented by an unsigned 8 bit integer. The values are not
/// sequential and most of them share the high bits `0b11` so that a single
/// flipped bit rarely turns one command into another.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Command `0xFF`: energize every relay.
    AllOn,

    /// Command `0x00`: release every relay.
    AllOff,

    /// Command `0xC3`: take the relay code as the new mask.
    Set,

    /// Command `0xCF`: turn a single relay on.
    TurnOn,

    /// Command `0xC0`: turn a single relay off.
    TurnOff,

    /// Command `0xCA`: toggle a single relay.
    Toggle,

    /// Command `0xAA`: toggle every relay.
    ToggleAll,

    /// Any other byte.
    Unknown(u8),
}

impl Command {
    /// Create a new [`Command`] with `value`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        match value {
            0xFF => Self::AllOn,
            0x00 => Self::AllOff,
            0xC3 => Self::Set,
            0xCF => Self::TurnOn,
            0xC0 => Self::TurnOff,
            0xCA => Self::Toggle,
            0xAA => Self::ToggleAll,
            code => Self::Unknown(code),
        }
    }

    /// Get the [`u8`] value of the current [`Command`].
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::AllOn => 0xFF,
            Self::AllOff => 0x00,
            Self::Set => 0xC3,
            Self::TurnOn => 0xCF,
            Self::TurnOff => 0xC0,
            Self::Toggle => 0xCA,
            Self::ToggleAll => 0xAA,
            Self::Unknown(code) => code,
        }
    }

    /// `true` if the payload must be one of [`RelayMask::RELAYS`].
    #[must_use]
    pub const fn takes_single_relay(self) -> bool {
        matches!(self, Self::TurnOn | Self::TurnOff | Self::Toggle)
    }

    const fn get_name(self) -> &'static str {
        match self {
            Self::AllOn => "all on",
            Self::AllOff => "all off",
            Self::Set => "set",
            Self::TurnOn => "turn on",
            Self::TurnOff => "turn off",
            Self::Toggle => "toggle",
            Self::ToggleAll => "toggle all",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for Command {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd.value()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:0>2X})", self.get_name(), self.value())
    }
}

/// The write transaction from the master to the driver.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    pub command: Command,
    pub relay_code: RelayMask,
}

impl CommandFrame {
    #[must_use]
    pub const fn new(command: Command, relay_code: RelayMask) -> Self {
        Self {
            command,
            relay_code,
        }
    }

    /// `(AllOn, ALL_ON)`
    #[must_use]
    pub const fn all_on() -> Self {
        Self::new(Command::AllOn, RelayMask::ALL_ON)
    }

    /// `(AllOff, ALL_OFF)`
    #[must_use]
    pub const fn all_off() -> Self {
        Self::new(Command::AllOff, RelayMask::ALL_OFF)
    }

    /// `(ToggleAll, ALL_OFF)`, the driver ignores the payload.
    #[must_use]
    pub const fn toggle_all() -> Self {
        Self::new(Command::ToggleAll, RelayMask::ALL_OFF)
    }

    /// Apply this frame to `state`.
    ///
    /// Returns `None` for an [`Command::Unknown`] command. A frame whose
    /// payload fails the command's guard yields `state` unchanged.
    #[must_use]
    pub const fn apply(self, state: RelayMask) -> Option<RelayMask> {
        let Self {
            command,
            relay_code,
        } = self;
        let next = match command {
            Command::AllOn if relay_code.bits() == RelayMask::ALL_ON.bits() => RelayMask::ALL_ON,
            Command::AllOff if relay_code.bits() == RelayMask::ALL_OFF.bits() => RelayMask::ALL_OFF,
            Command::Set => relay_code,
            Command::TurnOn if relay_code.is_single_relay() => state.turn_on(relay_code),
            Command::TurnOff if relay_code.is_single_relay() => state.turn_off(relay_code),
            Command::Toggle if relay_code.is_single_relay() => state.toggle(relay_code),
            Command::ToggleAll => state.toggle_all(),
            Command::Unknown(_) => return None,
            _ => state,
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const COMMANDS: [(Command, u8); 7] = [
        (Command::AllOn, 0xFF),
        (Command::AllOff, 0x00),
        (Command::Set, 0xC3),
        (Command::TurnOn, 0xCF),
        (Command::TurnOff, 0xC0),
        (Command::Toggle, 0xCA),
        (Command::ToggleAll, 0xAA),
    ];

    #[test]
    fn command_into_u8() {
        for (cmd, value) in COMMANDS {
            assert_eq!(cmd.value(), value);
        }
        assert_eq!(Command::Unknown(0x42).value(), 0x42);
    }

    #[test]
    fn command_from_u8() {
        for (cmd, value) in COMMANDS {
            assert_eq!(Command::new(value), cmd);
        }
        assert_eq!(Command::new(0x01), Command::Unknown(0x01));
        assert_eq!(Command::new(0xCB), Command::Unknown(0xCB));
    }

    #[test]
    fn guarded_all_on_and_all_off() {
        let state = RelayMask::new(0x12);
        let frame = CommandFrame::new(Command::AllOn, RelayMask::ALL_ON);
        assert_eq!(frame.apply(state), Some(RelayMask::ALL_ON));
        let frame = CommandFrame::new(Command::AllOn, RelayMask::new(0x7F));
        assert_eq!(frame.apply(state), Some(state));

        let frame = CommandFrame::new(Command::AllOff, RelayMask::ALL_OFF);
        assert_eq!(frame.apply(state), Some(RelayMask::ALL_OFF));
        let frame = CommandFrame::new(Command::AllOff, RelayMask::RELAY_1);
        assert_eq!(frame.apply(state), Some(state));
    }

    #[test]
    fn set_takes_any_payload() {
        for bits in 0..=u8::MAX {
            let frame = CommandFrame::new(Command::Set, RelayMask::new(bits));
            assert_eq!(frame.apply(RelayMask::new(0x5A)), Some(RelayMask::new(bits)));
        }
    }

    #[test]
    fn single_relay_commands() {
        let state = RelayMask::new(0b_0000_1100);
        let on = CommandFrame::new(Command::TurnOn, RelayMask::RELAY_3);
        assert_eq!(on.apply(state), Some(RelayMask::new(0b_0000_1000)));
        let off = CommandFrame::new(Command::TurnOff, RelayMask::RELAY_1);
        assert_eq!(off.apply(state), Some(RelayMask::new(0b_0000_1101)));
        let toggle = CommandFrame::new(Command::Toggle, RelayMask::RELAY_5);
        assert_eq!(toggle.apply(state), Some(RelayMask::new(0b_0001_1100)));
    }

    #[test]
    fn single_relay_commands_reject_multi_bit_payload() {
        let state = RelayMask::new(0x0F);
        for cmd in [Command::TurnOn, Command::TurnOff, Command::Toggle] {
            assert!(cmd.takes_single_relay());
            for payload in [0x00, 0x09, 0xFF] {
                let frame = CommandFrame::new(cmd, RelayMask::new(payload));
                assert_eq!(frame.apply(state), Some(state));
            }
        }
    }

    #[test]
    fn toggle_all_ignores_payload() {
        let state = RelayMask::new(0x0F);
        let frame = CommandFrame::new(Command::ToggleAll, RelayMask::new(0x33));
        assert_eq!(frame.apply(state), Some(RelayMask::new(0xF0)));
        assert_eq!(CommandFrame::toggle_all().apply(state), Some(RelayMask::new(0xF0)));
    }

    #[test]
    fn unknown_command_is_not_applied() {
        let frame = CommandFrame::new(Command::Unknown(0x42), RelayMask::RELAY_1);
        assert_eq!(frame.apply(RelayMask::ALL_OFF), None);
    }
}
