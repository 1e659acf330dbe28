//! Scripted bus, delay and sink doubles for unit tests
//!
//! All three record into one shared log so tests can assert on the exact
//! interleaving of bus traffic, delays and input events.

use core::cell::RefCell;

use heapless::{Deque, Vec};
use nunchuk_hal::{AsyncBusTransport, BusTransport, InputSink, Key};
use nunchuk_protocol::FRAME_LEN;

/// One recorded interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Send(Vec<u8, 4>),
    Receive(usize),
    DelayUs(u32),
    Declare(Key),
    Report(Key, bool),
    Sync,
    Unregister,
}

pub type Log = RefCell<Vec<Op, 64>>;

pub fn new_log() -> Log {
    RefCell::new(Vec::new())
}

pub fn send(bytes: &[u8]) -> Op {
    Op::Send(Vec::from_slice(bytes).unwrap())
}

fn record(log: &Log, op: Op) {
    log.borrow_mut().push(op).unwrap();
}

/// Error injected by the mock bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Scripted reply to one receive
#[derive(Debug)]
pub enum Reply {
    Frame([u8; FRAME_LEN]),
    Short(usize),
    Fault,
}

pub struct MockTransport<'a> {
    log: &'a Log,
    sends: Deque<Result<usize, BusFault>, 8>,
    replies: Deque<Reply, 8>,
    idle_frame: [u8; FRAME_LEN],
}

impl<'a> MockTransport<'a> {
    /// Transport that accepts every send and answers with released buttons
    pub fn new(log: &'a Log) -> Self {
        Self {
            log,
            sends: Deque::new(),
            replies: Deque::new(),
            idle_frame: [0xFF; FRAME_LEN],
        }
    }

    /// Override the result of the next unscripted send
    pub fn script_send(&mut self, result: Result<usize, BusFault>) {
        self.sends.push_back(result).unwrap();
    }

    /// Queue the reply to the next unscripted receive
    pub fn script_reply(&mut self, reply: Reply) {
        self.replies.push_back(reply).unwrap();
    }

    fn do_send(&mut self, bytes: &[u8]) -> Result<usize, BusFault> {
        record(self.log, send(bytes));
        self.sends.pop_front().unwrap_or(Ok(bytes.len()))
    }

    fn do_receive(&mut self, buf: &mut [u8]) -> Result<usize, BusFault> {
        record(self.log, Op::Receive(buf.len()));
        match self.replies.pop_front() {
            Some(Reply::Frame(frame)) => {
                buf.copy_from_slice(&frame);
                Ok(FRAME_LEN)
            }
            Some(Reply::Short(n)) => {
                buf[..n].fill(0);
                Ok(n)
            }
            Some(Reply::Fault) => Err(BusFault),
            None => {
                buf.copy_from_slice(&self.idle_frame);
                Ok(FRAME_LEN)
            }
        }
    }
}

impl BusTransport for MockTransport<'_> {
    type Error = BusFault;

    fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.do_send(bytes)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.do_receive(buf)
    }
}

impl AsyncBusTransport for MockTransport<'_> {
    type Error = BusFault;

    async fn send(&mut self, bytes: &[u8]) -> Result<usize, Self::Error> {
        self.do_send(bytes)
    }

    async fn receive(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.do_receive(buf)
    }
}

pub struct MockDelay<'a> {
    log: &'a Log,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        record(self.log, Op::DelayUs(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        record(self.log, Op::DelayUs(us));
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        record(self.log, Op::DelayUs(ns / 1000));
    }

    async fn delay_us(&mut self, us: u32) {
        record(self.log, Op::DelayUs(us));
    }
}

/// Error returned when the sink refuses a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refused;

pub struct RecordingSink<'a> {
    log: &'a Log,
    refuse: Option<Key>,
}

impl<'a> RecordingSink<'a> {
    pub fn new(log: &'a Log) -> Self {
        Self { log, refuse: None }
    }

    pub fn refusing(log: &'a Log, key: Key) -> Self {
        Self {
            log,
            refuse: Some(key),
        }
    }
}

impl InputSink for RecordingSink<'_> {
    type Error = Refused;

    fn declare_key(&mut self, key: Key) -> Result<(), Self::Error> {
        if self.refuse == Some(key) {
            return Err(Refused);
        }
        record(self.log, Op::Declare(key));
        Ok(())
    }

    fn report_key(&mut self, key: Key, pressed: bool) {
        record(self.log, Op::Report(key, pressed));
    }

    fn sync(&mut self) {
        record(self.log, Op::Sync);
    }

    fn unregister(&mut self) {
        record(self.log, Op::Unregister);
    }
}

/// Ops produced by one successful read cycle with default timing
pub fn read_cycle() -> [Op; 3] {
    [send(&[0x00]), Op::DelayUs(2000), Op::Receive(FRAME_LEN)]
}

/// Drain the log
pub fn take(log: &Log) -> Vec<Op, 64> {
    core::mem::take(&mut *log.borrow_mut())
}
