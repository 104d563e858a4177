// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request/acknowledge exchange logic.
//!
//! The exchange layer is transport-free: the platform feeds it decoded
//! messages and timer events and transmits the frames it produces. Time
//! enters only as explicit monotonic timestamps supplied by the caller,
//! so no clock or executor is linked into the core.

#[cfg(feature = "requester")]
mod requester;
#[cfg(feature = "responder")]
mod responder;

#[cfg(feature = "requester")]
pub use requester::Requester;
#[cfg(feature = "responder")]
pub use responder::respond;

use core::ops::Add;

/// A point in time, in milliseconds since an arbitrary platform epoch.
///
/// The platform timer is the single source of these values; the crate
/// never reads a clock itself.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    millis: u64,
}

impl Instant {
    /// Create an [`Instant`] from a millisecond tick count.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Tick count in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

/// A span of time, in milliseconds.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// Create a [`Duration`] from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a [`Duration`] from seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs * 1000,
        }
    }

    /// The span in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.millis
    }
}

/// A completed exchange, delivered to the caller as the exchange result.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    /// Counter of the request this acknowledgment answers.
    pub counter: u16,
    /// Result value delivered by the responder.
    pub value: u16,
}
