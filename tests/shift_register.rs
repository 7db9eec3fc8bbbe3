// SPDX-FileCopyrightText: Copyright (c) 2018-2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use embedded_hal::digital::{ErrorType, OutputPin};
use relay_bus::{BitOrder, OutputStage, RelayMask, ShiftRegister};
use std::{cell::RefCell, convert::Infallible, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Data,
    Clock,
    Latch,
}

type Trace = Rc<RefCell<Vec<(Line, bool)>>>;

struct MockPin {
    line: Line,
    trace: Trace,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.trace.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.trace.borrow_mut().push((self.line, true));
        Ok(())
    }
}

fn shift_register() -> (Trace, ShiftRegister<MockPin, MockPin, MockPin>) {
    let trace = Trace::default();
    let pin = |line| MockPin {
        line,
        trace: trace.clone(),
    };
    let sr = ShiftRegister::new(pin(Line::Data), pin(Line::Clock), pin(Line::Latch)).unwrap();
    (trace, sr)
}

/// Data bits sampled on every rising clock edge.
fn clocked_bits(trace: &[(Line, bool)]) -> Vec<bool> {
    let mut data = false;
    let mut bits = Vec::new();
    for &(line, level) in trace {
        match (line, level) {
            (Line::Data, level) => data = level,
            (Line::Clock, true) => bits.push(data),
            _ => {}
        }
    }
    bits
}

#[test]
fn new_pulls_all_lines_low() {
    let (trace, _sr) = shift_register();
    assert_eq!(
        *trace.borrow(),
        vec![(Line::Data, false), (Line::Clock, false), (Line::Latch, false)]
    );
}

#[test]
fn write_shifts_msb_first_between_latch_edges() {
    let (trace, mut sr) = shift_register();
    trace.borrow_mut().clear();
    sr.write(RelayMask::new(0b_1000_0110)).unwrap();

    let trace = trace.borrow();
    assert_eq!(trace.first(), Some(&(Line::Latch, false)));
    assert_eq!(trace.last(), Some(&(Line::Latch, true)));
    assert_eq!(
        clocked_bits(&trace),
        vec![true, false, false, false, false, true, true, false]
    );
    // clock returns low after each bit
    let clock: Vec<bool> = trace
        .iter()
        .filter(|(line, _)| *line == Line::Clock)
        .map(|&(_, level)| level)
        .collect();
    assert_eq!(clock.len(), 16);
    assert!(clock.chunks(2).all(|edge| *edge == [true, false]));
}

#[test]
fn write_lsb_first() {
    let (trace, sr) = shift_register();
    let mut sr = sr.with_bit_order(BitOrder::LsbFirst);
    trace.borrow_mut().clear();
    sr.write(RelayMask::RELAY_1).unwrap();
    assert_eq!(
        clocked_bits(&trace.borrow()),
        vec![true, false, false, false, false, false, false, false]
    );
}

#[test]
fn release_returns_pins() {
    let (_trace, sr) = shift_register();
    let (data, clock, latch) = sr.release();
    assert_eq!(data.line, Line::Data);
    assert_eq!(clock.line, Line::Clock);
    assert_eq!(latch.line, Line::Latch);
}
