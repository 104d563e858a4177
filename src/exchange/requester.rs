// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Requester (MOTE1) side of an exchange.

use super::{Ack, Duration, Instant};
use crate::error::Error;
use crate::frame::{Message, MessageKind, NodeId};

#[derive(Debug)]
struct Pending {
    counter: u16,
    deadline: Instant,
}

/// Requester exchange state.
///
/// Tracks up to `MAX_PENDING` outstanding exchanges in a fixed slot
/// table; no heap is used. Each exchange moves Idle → Pending on
/// [`start`](Self::start), then Pending → Acked on a matching response
/// ([`handle_response`](Self::handle_response)) or Pending → TimedOut on
/// deadline expiry ([`take_timed_out`](Self::take_timed_out)). Both end
/// states release the slot and the counter.
///
/// `MAX_PENDING` bounds the counters in flight and must stay far below
/// the 2^16 counter space; together with the allocator skipping counters
/// still pending, a wrap-around can never collide with an outstanding
/// exchange.
#[derive(Debug)]
pub struct Requester<const MAX_PENDING: usize> {
    pending: [Option<Pending>; MAX_PENDING],
    next_counter: u16,
    timeout: Duration,
}

impl<const MAX_PENDING: usize> Requester<MAX_PENDING> {
    /// The identity this role transmits as.
    ///
    /// The link layer addresses request frames to the peer,
    /// [`NodeId::Mote2`].
    pub const NODE: NodeId = NodeId::Mote1;

    /// Create a requester whose exchanges expire `timeout` after start.
    ///
    /// The wire format prescribes no deadline value; it is caller
    /// policy, as is any retry on timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            pending: [const { None }; MAX_PENDING],
            next_counter: 0,
            timeout,
        }
    }

    /// Start a new exchange for `value` at time `now`.
    ///
    /// On success the exchange is Pending and the returned REQUEST
    /// message is ready to encode and transmit. Fails with
    /// [`Error::PendingLimit`] when all slots are in use, leaving the
    /// table unchanged.
    pub fn start(&mut self, value: u16, now: Instant) -> Result<Message, Error> {
        let Some(idx) = self.pending.iter().position(Option::is_none) else {
            return Err(Error::PendingLimit);
        };
        let counter = self.alloc_counter();
        self.pending[idx] = Some(Pending {
            counter,
            deadline: now + self.timeout,
        });
        Ok(Message::request(counter, value))
    }

    // Monotonic increment, wrapping modulo 2^16. Counters still pending
    // are skipped; the free slot checked by the caller guarantees
    // termination.
    fn alloc_counter(&mut self) -> u16 {
        loop {
            let counter = self.next_counter;
            self.next_counter = self.next_counter.wrapping_add(1);
            if !self.is_pending(counter) {
                return counter;
            }
        }
    }

    /// Deliver a received response.
    ///
    /// Completes the Pending exchange whose counter matches and returns
    /// the result. A response with no matching Pending exchange is stale
    /// (already completed, timed out, or never sent) and is discarded
    /// without any state change; so is anything that is not a response.
    pub fn handle_response(&mut self, rsp: &Message) -> Option<Ack> {
        if rsp.kind != MessageKind::Response {
            return None;
        }
        for slot in self.pending.iter_mut() {
            if let Some(pending) = slot {
                if pending.counter == rsp.counter {
                    *slot = None;
                    return Some(Ack {
                        counter: rsp.counter,
                        value: rsp.value,
                    });
                }
            }
        }
        #[cfg(feature = "log")]
        log::debug!("Discarding stale response for counter {}", rsp.counter);
        None
    }

    /// Remove and return one exchange whose deadline has passed at `now`.
    ///
    /// A timed out exchange is a terminal failure; this layer never
    /// retries it. Call repeatedly until `None` to drain every expired
    /// exchange.
    pub fn take_timed_out(&mut self, now: Instant) -> Option<u16> {
        for slot in self.pending.iter_mut() {
            if let Some(pending) = slot {
                if pending.deadline <= now {
                    let counter = pending.counter;
                    *slot = None;
                    return Some(counter);
                }
            }
        }
        None
    }

    /// The earliest deadline among Pending exchanges.
    ///
    /// Platforms arm a single timer for this instant instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .iter()
            .filter_map(|slot| slot.as_ref())
            .map(|pending| pending.deadline)
            .min()
    }

    /// `true` if an exchange for `counter` is Pending.
    #[must_use]
    pub fn is_pending(&self, counter: u16) -> bool {
        self.pending
            .iter()
            .any(|slot| matches!(slot, Some(pending) if pending.counter == counter))
    }

    /// Number of Pending exchanges.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|slot| slot.is_some()).count()
    }
}
