// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Master role: command a relay driver and verify the outcome.
//!
//! Every mutating operation updates the shadow state first, sends one
//! command frame, reads the driver's state back and reports whether both
//! agree. There is no retry: on `Ok(false)` the caller decides whether to
//! re-issue the command or force agreement with [`RelayMaster::set_relay`].

use crate::{
    codec::{
        COMMAND_FRAME_LEN, STATE_FRAME_LEN,
        master::{decode_state, encode_command},
    },
    config::{Address, Config},
    error::{Error, MasterError},
    frame::{Command, CommandFrame, RelayMask},
    serial::SerialAction,
    transport::Transport,
};

type Result<T, E> = core::result::Result<T, MasterError<E>>;

/// Commands exactly one driver at a fixed bus address.
#[derive(Debug)]
pub struct RelayMaster<T> {
    transport: T,
    address: Address,
    shadow: RelayMask,
    observed: RelayMask,
}

impl<T: Transport> RelayMaster<T> {
    /// The shadow starts at `config.initial`, which [`Self::begin`] sends
    /// to the driver.
    pub const fn new(transport: T, config: Config) -> Self {
        Self {
            transport,
            address: config.address,
            shadow: config.initial,
            observed: config.initial,
        }
    }

    /// Force the driver into the initial shadow state.
    pub fn begin(&mut self) -> Result<bool, T::Error> {
        self.set_relay(self.shadow)
    }

    pub fn turn_all_on(&mut self) -> Result<bool, T::Error> {
        self.shadow = RelayMask::ALL_ON;
        self.issue(CommandFrame::all_on())
    }

    pub fn turn_all_off(&mut self) -> Result<bool, T::Error> {
        self.shadow = RelayMask::ALL_OFF;
        self.issue(CommandFrame::all_off())
    }

    pub fn toggle_all(&mut self) -> Result<bool, T::Error> {
        self.shadow = self.shadow.toggle_all();
        self.issue(CommandFrame::toggle_all())
    }

    /// Clears the relay's bit, see [`RelayMask::turn_on`].
    pub fn turn_on(&mut self, relay: RelayMask) -> Result<bool, T::Error> {
        self.single(Command::TurnOn, relay, RelayMask::turn_on)
    }

    /// Sets the relay's bit, see [`RelayMask::turn_off`].
    pub fn turn_off(&mut self, relay: RelayMask) -> Result<bool, T::Error> {
        self.single(Command::TurnOff, relay, RelayMask::turn_off)
    }

    pub fn toggle(&mut self, relay: RelayMask) -> Result<bool, T::Error> {
        self.single(Command::Toggle, relay, RelayMask::toggle)
    }

    /// Replace the whole mask. Every byte is a valid mask.
    pub fn set_relay(&mut self, mask: RelayMask) -> Result<bool, T::Error> {
        self.shadow = mask;
        self.issue(CommandFrame::new(Command::Set, mask))
    }

    /// Run the action mapped to a console character.
    ///
    /// Unmapped characters fail with [`Error::UnmappedInput`] before any
    /// bus traffic.
    pub fn toggle_from_serial(&mut self, ch: char) -> Result<bool, T::Error> {
        match SerialAction::from_char(ch) {
            Some(SerialAction::AllOff) => self.turn_all_off(),
            Some(SerialAction::AllOn) => self.turn_all_on(),
            Some(SerialAction::ToggleAll) => self.toggle_all(),
            Some(SerialAction::Toggle(relay)) => self.toggle(relay),
            None => Err(Error::UnmappedInput(ch).into()),
        }
    }

    /// Read the driver's state over the bus and remember it.
    ///
    /// Fails with [`Error::NoResponse`] if the driver sent nothing; the
    /// previously observed state is kept in that case.
    pub fn read_device_state(&mut self) -> Result<RelayMask, T::Error> {
        let mut buf = [0u8; STATE_FRAME_LEN];
        let count = self
            .transport
            .request(self.address, &mut buf)
            .map_err(MasterError::Transport)?;
        let state = decode_state(&buf[..count.min(buf.len())]).inspect_err(|_err| {
            #[cfg(feature = "log")]
            log::warn!("No state received from driver at 0x{:0>2X}", self.address);
        })?;
        self.observed = state;
        Ok(state)
    }

    /// State seen by the last read, without touching the bus.
    pub const fn observed(&self) -> RelayMask {
        self.observed
    }

    /// State the master expects the driver to be in.
    pub const fn shadow(&self) -> RelayMask {
        self.shadow
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    /// Bit test against the observed state. `relay` is not validated.
    pub const fn is_on(&self, relay: RelayMask) -> bool {
        self.observed.contains(relay)
    }

    /// Complement bit test against the observed state.
    pub const fn is_off(&self, relay: RelayMask) -> bool {
        self.observed.excludes(relay)
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    fn single(
        &mut self,
        command: Command,
        relay: RelayMask,
        update: fn(RelayMask, RelayMask) -> RelayMask,
    ) -> Result<bool, T::Error> {
        if !relay.is_single_relay() {
            return Err(Error::InvalidRelay(relay.bits()).into());
        }
        self.shadow = update(self.shadow, relay);
        self.issue(CommandFrame::new(command, relay))
    }

    fn issue(&mut self, frame: CommandFrame) -> Result<bool, T::Error> {
        let mut buf = [0u8; COMMAND_FRAME_LEN];
        let len = encode_command(frame, &mut buf)?;
        #[cfg(feature = "log")]
        log::debug!(
            "Sending {} [{}] to 0x{:0>2X}",
            frame.command,
            frame.relay_code,
            self.address
        );
        self.transport
            .send(self.address, &buf[..len])
            .map_err(MasterError::Transport)?;
        let observed = self.read_device_state()?;
        let verified = observed == self.shadow;
        #[cfg(feature = "log")]
        if !verified {
            log::warn!(
                "Driver at 0x{:0>2X} reports {} but {} was expected",
                self.address,
                observed,
                self.shadow
            );
        }
        Ok(verified)
    }
}
