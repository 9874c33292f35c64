//! Bounded, blocking single-producer single-consumer channel (spec §4.2).
//!
//! The scanner is a detached worker that must block on `send` when its
//! consumer falls behind, and the consumer must block on `recv` when
//! the scanner hasn't produced anything yet — so this is a
//! `std::sync::{Mutex, Condvar}` ring buffer, not an async channel.
//! Exactly one [`Sender`] and one [`Receiver`] must exist per
//! [`channel`] call; using more than one of either end is undefined
//! behavior per spec.md and is not checked here.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex};

/// Observable lifecycle state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Open,
    /// `close()` has been called but unreceived items remain.
    ClosedByProducer,
    /// Closed and every item has been received.
    Drained,
}

/// Outcome of a [`Sender::send`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    /// The channel was already closed; the item was not enqueued.
    Closed,
}

struct Buffer<T> {
    queue: VecDeque<T>,
    closed: bool,
}

struct Inner<T> {
    capacity: usize,
    buffer: Mutex<Buffer<T>>,
    not_full: Condvar,
    not_empty: Condvar,
}

/// The producer half. Only the sender may [`Sender::close`] the
/// channel.
pub struct Sender<T> {
    inner: Arc<Inner<T>>,
}

/// The consumer half.
pub struct Receiver<T> {
    inner: Arc<Inner<T>>,
}

/// Construct a bounded channel with room for `capacity` unreceived
/// items (spec.md recommends 8-64; `capacity` must be at least 1).
pub fn channel<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    assert!(capacity > 0, "channel capacity must be at least 1");
    let inner = Arc::new(Inner {
        capacity,
        buffer: Mutex::new(Buffer { queue: VecDeque::with_capacity(capacity), closed: false }),
        not_full: Condvar::new(),
        not_empty: Condvar::new(),
    });
    (Sender { inner: Arc::clone(&inner) }, Receiver { inner })
}

impl<T> Sender<T> {
    /// Blocks while the channel is full and open. Returns
    /// [`SendResult::Closed`] without enqueuing if the channel has
    /// already been closed (by a prior `close()` call on this same
    /// sender).
    pub fn send(&self, item: T) -> SendResult {
        let mut buf = self.inner.buffer.lock().unwrap();
        loop {
            if buf.closed {
                return SendResult::Closed;
            }
            if buf.queue.len() < self.inner.capacity {
                buf.queue.push_back(item);
                self.inner.not_empty.notify_one();
                return SendResult::Sent;
            }
            buf = self.inner.not_full.wait(buf).unwrap();
        }
    }

    /// Close the channel. Idempotent. Unblocks any pending `send`
    /// (which then observes [`SendResult::Closed`]) and wakes the
    /// receiver so it can drain remaining items then observe
    /// end-of-stream.
    pub fn close(&self) {
        let mut buf = self.inner.buffer.lock().unwrap();
        buf.closed = true;
        self.inner.not_full.notify_all();
        self.inner.not_empty.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.buffer.lock().unwrap().closed
    }
}

impl<T> Receiver<T> {
    /// Blocks while the channel is empty and open. Returns `Some` with
    /// the next item in FIFO order, or `None` once the channel is
    /// closed and fully drained.
    pub fn recv(&self) -> Option<T> {
        let mut buf = self.inner.buffer.lock().unwrap();
        loop {
            if let Some(item) = buf.queue.pop_front() {
                self.inner.not_full.notify_one();
                return Some(item);
            }
            if buf.closed {
                return None;
            }
            buf = self.inner.not_empty.wait(buf).unwrap();
        }
    }

    pub fn state(&self) -> ChannelState {
        let buf = self.inner.buffer.lock().unwrap();
        match (buf.closed, buf.queue.is_empty()) {
            (false, _) => ChannelState::Open,
            (true, true) => ChannelState::Drained,
            (true, false) => ChannelState::ClosedByProducer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fifo_order_preserved() {
        let (tx, rx) = channel::<i32>(8);
        for i in 0..5 {
            assert_eq!(tx.send(i), SendResult::Sent);
        }
        tx.close();
        let mut received = Vec::new();
        while let Some(v) = rx.recv() {
            received.push(v);
        }
        assert_eq!(received, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn close_drains_then_ends_stream() {
        let (tx, rx) = channel::<&str>(4);
        tx.send("a");
        tx.send("b");
        tx.close();
        assert_eq!(rx.recv(), Some("a"));
        assert_eq!(rx.recv(), Some("b"));
        assert_eq!(rx.recv(), None);
        assert_eq!(rx.recv(), None);
    }

    #[test]
    fn send_after_close_fails() {
        let (tx, _rx) = channel::<i32>(4);
        tx.close();
        assert_eq!(tx.send(1), SendResult::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let (tx, _rx) = channel::<i32>(4);
        tx.close();
        tx.close();
        assert!(tx.is_closed());
    }

    #[test]
    fn full_channel_blocks_sender_until_consumer_drains() {
        let (tx, rx) = channel::<i32>(2);
        tx.send(1);
        tx.send(2);
        let handle = thread::spawn(move || {
            // Blocks until the main thread receives at least one item.
            tx.send(3)
        });
        thread::sleep(Duration::from_millis(50));
        assert_eq!(rx.recv(), Some(1));
        assert_eq!(handle.join().unwrap(), SendResult::Sent);
        assert_eq!(rx.recv(), Some(2));
        assert_eq!(rx.recv(), Some(3));
    }

    #[test]
    fn closing_unblocks_a_waiting_receiver_in_finite_time() {
        let (tx, rx) = channel::<i32>(4);
        let handle = thread::spawn(move || rx.recv());
        thread::sleep(Duration::from_millis(50));
        tx.close();
        assert_eq!(handle.join().unwrap(), None);
    }

    #[test]
    fn state_reflects_lifecycle() {
        let (tx, rx) = channel::<i32>(4);
        assert_eq!(rx.state(), ChannelState::Open);
        tx.send(1);
        tx.close();
        assert_eq!(rx.state(), ChannelState::ClosedByProducer);
        rx.recv();
        assert_eq!(rx.state(), ChannelState::Drained);
    }
}
