// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Responder (MOTE2) side of an exchange.
//!
//! The responder is stateless and reactive: each request is answered
//! immediately or dropped, and nothing is retained across requests.

use crate::frame::{Message, MessageKind};

/// Answer a received request.
///
/// `process` computes the response value for the request payload; it
/// runs once, immediately. Returning `None` drops the request without an
/// answer; the receive path never blocks waiting for application logic,
/// and a dropped request is never answered later.
///
/// The response echoes the request counter unchanged. At most one
/// response is produced per request; any retransmission is the
/// requester's policy alone. Frames other than requests are ignored and
/// `process` is not invoked for them.
pub fn respond<F>(request: &Message, process: F) -> Option<Message>
where
    F: FnOnce(u16) -> Option<u16>,
{
    if request.kind != MessageKind::Request {
        return None;
    }
    process(request.value).map(|value| Message::response(request.counter, value))
}
