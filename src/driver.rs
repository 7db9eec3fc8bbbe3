// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Driver role: the node wired to the relays.
//!
//! The bus peripheral's receive and request interrupts call into a
//! [`RelayDriver`] owned by the application. The transport delivers one
//! callback at a time, so the driver needs no locking of its own.

use crate::{
    codec::driver::{decode_commands, encode_state},
    config::{Address, Config},
    error::Error,
    frame::{CommandFrame, RelayMask},
    output::OutputStage,
};

/// Authoritative relay state plus the output stage it drives.
pub struct RelayDriver<O> {
    address: Address,
    state: RelayMask,
    output: O,
}

impl<O: OutputStage> RelayDriver<O> {
    /// Bind to `config.address` and start out with `config.initial`.
    ///
    /// Nothing reaches the output stage before [`Self::begin`].
    pub const fn new(config: Config, output: O) -> Self {
        Self {
            address: config.address,
            state: config.initial,
            output,
        }
    }

    /// Push the boot state to the relays.
    ///
    /// Call this once before the bus starts delivering transactions.
    pub fn begin(&mut self) -> Result<(), O::Error> {
        self.output.write(self.state)
    }

    /// Address the bus peripheral has to listen on.
    pub const fn address(&self) -> Address {
        self.address
    }

    pub const fn state(&self) -> RelayMask {
        self.state
    }

    /// Interpret a single `[command][relay_code]` pair.
    ///
    /// A frame that fails its guard leaves the state as it is but the state
    /// is written to the output stage anyway. Unknown commands are dropped
    /// without touching the output stage. The only error is a failing
    /// output stage.
    pub fn on_command(&mut self, command: u8, relay_code: u8) -> Result<(), O::Error> {
        self.apply(CommandFrame::new(command.into(), relay_code.into()))
    }

    /// Receive callback: handle every complete frame in `bytes`.
    pub fn on_receive(&mut self, bytes: &[u8]) -> Result<(), O::Error> {
        let mut commands = decode_commands(bytes);
        for frame in commands.by_ref() {
            self.apply(frame)?;
        }
        #[cfg(feature = "log")]
        if !commands.remainder().is_empty() {
            log::warn!(
                "Dropping incomplete command frame: {:X?}",
                commands.remainder()
            );
        }
        Ok(())
    }

    /// Request callback: the byte to answer a read with.
    pub const fn on_request(&self) -> RelayMask {
        self.state
    }

    /// Request callback for transports that hand out a reply buffer.
    pub fn on_request_into(&self, buf: &mut [u8]) -> Result<usize, Error> {
        encode_state(self.state, buf)
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Give back the output stage.
    pub fn release(self) -> O {
        self.output
    }

    fn apply(&mut self, frame: CommandFrame) -> Result<(), O::Error> {
        let Some(next) = frame.apply(self.state) else {
            #[cfg(feature = "log")]
            log::debug!("Ignoring unknown command 0x{:0>2X}", frame.command.value());
            return Ok(());
        };
        #[cfg(feature = "log")]
        log::debug!(
            "{} [{}]: {} -> {}",
            frame.command,
            frame.relay_code,
            self.state,
            next
        );
        self.state = next;
        self.output.write(self.state)
    }
}
