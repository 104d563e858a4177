// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Requester (MOTE1) specific framing functions.
use super::*;

/// Encode a request frame.
pub fn encode_request(counter: u16, value: u16, buf: &mut [u8]) -> Result<usize> {
    Message::request(counter, value).encode(buf)
}

/// Decode a received frame as a response.
///
/// Frames that do not decode and frames that are not responses are
/// dropped here (`None`) and never reach the exchange state. Dropping
/// is routine on a shared radio channel and is not an error.
pub fn decode_response(buf: &[u8]) -> Option<Message> {
    let res = Message::try_from(buf);
    #[cfg(feature = "log")]
    let res = res.inspect_err(|&err| log::warn!("Failed to decode response frame: {err}"));
    let msg = res.ok()?;
    if msg.kind != MessageKind::Response {
        #[cfg(feature = "log")]
        log::debug!("Ignoring frame with kind {} while awaiting a response", msg.kind);
        return None;
    }
    Some(msg)
}
