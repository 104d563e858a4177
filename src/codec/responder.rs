// SPDX-FileCopyrightText: Copyright (c) 2025 slowtec GmbH <post@slowtec.de>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Responder (MOTE2) specific framing functions.
use super::*;

/// Decode a received frame as a request.
///
/// Frames that do not decode and frames that are not requests are
/// dropped here (`None`); no response is generated for them.
pub fn decode_request(buf: &[u8]) -> Option<Message> {
    let res = Message::try_from(buf);
    #[cfg(feature = "log")]
    let res = res.inspect_err(|&err| log::warn!("Failed to decode request frame: {err}"));
    let msg = res.ok()?;
    if msg.kind != MessageKind::Request {
        #[cfg(feature = "log")]
        log::debug!("Ignoring frame with kind {} while awaiting a request", msg.kind);
        return None;
    }
    Some(msg)
}

/// Encode a response frame answering the request tagged `counter`.
pub fn encode_response(counter: u16, value: u16, buf: &mut [u8]) -> Result<usize> {
    Message::response(counter, value).encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_request() {
        let req = &[0x01, 0x00, 0x07, 0x00, 0x2A];
        assert_eq!(decode_request(req), Some(Message::request(7, 42)));
    }

    #[test]
    fn decode_response_frame_is_dropped() {
        let rsp = &[0x02, 0x00, 0x07, 0x00, 0x2A];
        assert_eq!(decode_request(rsp), None);
    }

    #[test]
    fn decode_corrupted_request() {
        let truncated = &[0x01, 0x00, 0x07, 0x00];
        assert_eq!(decode_request(truncated), None);

        let empty: &[u8] = &[];
        assert_eq!(decode_request(empty), None);
    }

    #[test]
    fn encode_response_frame() {
        let mut buf = [0u8; 16];
        let sz = encode_response(0x2222, 0xABCD, &mut buf).expect("Error encoding response");
        assert_eq!(&buf[..sz], &[0x02, 0x22, 0x22, 0xAB, 0xCD]);
    }
}
