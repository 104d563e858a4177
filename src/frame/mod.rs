// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

use crate::error::Error;

/// Number of bytes in a serialized exchange frame (kind + counter + value).
pub const FRAME_LEN: usize = 5;

/// Link-layer channel reserved for exchange frames.
///
/// The radio collaborator registers this channel when it frames and
/// addresses packets. The value is fixed and not negotiated.
pub const CHANNEL: u8 = 6;

/// The kind of an exchange message.
///
/// It is represented by an unsigned 8 bit integer.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Wire code `1`: a request issued by the requester.
    Request,

    /// Wire code `2`: a response produced by the responder.
    Response,

    /// Any other wire code.
    ///
    /// Unrecognized codes are a normal occurrence on a shared radio
    /// channel (cross-talk, corruption) and must not abort processing.
    Unknown(u8),
}

impl MessageKind {
    /// Create a new [`MessageKind`] with `value`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        match value {
            1 => Self::Request,
            2 => Self::Response,
            code => Self::Unknown(code),
        }
    }

    /// Get the [`u8`] value of the current [`MessageKind`].
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Request => 1,
            Self::Response => 2,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

/// A mote identity.
///
/// Exactly two identities participate in this protocol; there is no
/// discovery or registration step. Anything else observed on the channel
/// is foreign traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeId {
    /// Wire code `1`: the requesting mote.
    Mote1,

    /// Wire code `2`: the responding mote.
    Mote2,

    /// Any other wire code.
    Unknown(u8),
}

impl NodeId {
    /// Create a new [`NodeId`] with `value`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        match value {
            1 => Self::Mote1,
            2 => Self::Mote2,
            code => Self::Unknown(code),
        }
    }

    /// Get the [`u8`] value of the current [`NodeId`].
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Mote1 => 1,
            Self::Mote2 => 2,
            Self::Unknown(code) => code,
        }
    }

    const fn get_name(self) -> &'static str {
        match self {
            Self::Mote1 => "MOTE1",
            Self::Mote2 => "MOTE2",
            Self::Unknown(_) => "unknown mote",
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "{} (0x{code:0>2X})", self.get_name()),
            _ => write!(f, "{}", self.get_name()),
        }
    }
}

#[cfg(all(feature = "defmt", target_os = "none"))]
impl defmt::Format for NodeId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.get_name())
    }
}

/// A message exchanged between the two motes.
///
/// A message is constructed immediately before transmission, is immutable
/// in transit, and is consumed by the receiver's exchange logic.
#[cfg_attr(all(feature = "defmt", target_os = "none"), derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// Message kind carried in the first octet.
    pub kind: MessageKind,
    /// Exchange correlation id, assigned by the requester and echoed
    /// unchanged by the responder.
    pub counter: u16,
    /// Request payload or response result, depending on `kind`.
    pub value: u16,
}

impl Message {
    /// Create a new [`Message`].
    ///
    /// Fails with [`Error::KindCode`] if `kind` is not a valid wire kind,
    /// so an invalid kind is rejected before it can be transmitted.
    pub const fn new(kind: MessageKind, counter: u16, value: u16) -> Result<Self, Error> {
        if let MessageKind::Unknown(code) = kind {
            return Err(Error::KindCode(code));
        }
        Ok(Self {
            kind,
            counter,
            value,
        })
    }

    /// Create a request message.
    #[must_use]
    pub const fn request(counter: u16, value: u16) -> Self {
        Self {
            kind: MessageKind::Request,
            counter,
            value,
        }
    }

    /// Create a response message answering the request tagged `counter`.
    #[must_use]
    pub const fn response(counter: u16, value: u16) -> Self {
        Self {
            kind: MessageKind::Response,
            counter,
            value,
        }
    }
}
