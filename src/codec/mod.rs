use crate::{error::Error, frame::*};
use byteorder::{BigEndian, ByteOrder};
use core::convert::TryFrom;

#[cfg(feature = "requester")]
pub mod requester;
#[cfg(feature = "responder")]
pub mod responder;

type Result<T> = core::result::Result<T, Error>;

impl Message {
    /// Serialize the message into `buf`.
    ///
    /// All multi-byte fields are written in big-endian (network) byte
    /// order. Returns the number of bytes written ([`FRAME_LEN`]).
    ///
    /// Fails with [`Error::BufferSize`] if `buf` is too small and with
    /// [`Error::KindCode`] if the message kind is not a valid wire kind;
    /// nothing is written in either case.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < FRAME_LEN {
            return Err(Error::BufferSize);
        }
        if let MessageKind::Unknown(code) = self.kind {
            return Err(Error::KindCode(code));
        }
        buf[0] = self.kind.value();
        BigEndian::write_u16(&mut buf[1..3], self.counter);
        BigEndian::write_u16(&mut buf[3..5], self.value);
        Ok(FRAME_LEN)
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = Error;

    /// Deserialize a message from `bytes`.
    ///
    /// The byte length must match the fixed layout exactly; the radio
    /// collaborator delivers packets whole or not at all, so anything
    /// shorter or longer is corruption.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FRAME_LEN {
            return Err(Error::FrameLength(bytes.len()));
        }
        let kind = match MessageKind::new(bytes[0]) {
            MessageKind::Unknown(code) => return Err(Error::KindCode(code)),
            kind => kind,
        };
        let counter = BigEndian::read_u16(&bytes[1..3]);
        let value = BigEndian::read_u16(&bytes[3..5]);
        Ok(Message {
            kind,
            counter,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_request_frame() {
        let buf = &mut [0u8; FRAME_LEN];
        let len = Message::request(0x1234, 0xABCD).encode(buf).unwrap();
        assert_eq!(len, FRAME_LEN);
        assert_eq!(
            buf,
            &[
                0x01, // kind
                0x12, // counter
                0x34, // counter
                0xAB, // value
                0xCD, // value
            ]
        );
    }

    #[test]
    fn encode_response_frame() {
        let buf = &mut [0u8; FRAME_LEN];
        Message::response(7, 43).encode(buf).unwrap();
        assert_eq!(buf, &[0x02, 0x00, 0x07, 0x00, 0x2B]);
    }

    #[test]
    fn encode_into_undersized_buffer() {
        let buf = &mut [0u8; FRAME_LEN - 1];
        assert_eq!(
            Message::request(0, 0).encode(buf).err().unwrap(),
            Error::BufferSize
        );
    }

    #[test]
    fn encode_unknown_kind() {
        let msg = Message {
            kind: MessageKind::Unknown(0x77),
            counter: 0,
            value: 0,
        };
        let buf = &mut [0u8; FRAME_LEN];
        assert_eq!(msg.encode(buf).err().unwrap(), Error::KindCode(0x77));
        // Nothing must have been written.
        assert_eq!(buf, &[0u8; FRAME_LEN]);
    }

    #[test]
    fn decode_request_frame() {
        let bytes: &[u8] = &[0x01, 0x00, 0x07, 0x00, 0x2A];
        let msg = Message::try_from(bytes).unwrap();
        assert_eq!(msg, Message::request(7, 42));
    }

    #[test]
    fn decode_response_frame() {
        let bytes: &[u8] = &[0x02, 0x12, 0x34, 0xAB, 0xCD];
        let msg = Message::try_from(bytes).unwrap();
        assert_eq!(msg, Message::response(0x1234, 0xABCD));
    }

    #[test]
    fn decode_frame_with_invalid_length() {
        let empty: &[u8] = &[];
        assert_eq!(
            Message::try_from(empty).err().unwrap(),
            Error::FrameLength(0)
        );

        let truncated: &[u8] = &[0x01, 0x00, 0x07, 0x00];
        assert_eq!(
            Message::try_from(truncated).err().unwrap(),
            Error::FrameLength(4)
        );

        let oversized: &[u8] = &[0x01, 0x00, 0x07, 0x00, 0x2A, 0x00];
        assert_eq!(
            Message::try_from(oversized).err().unwrap(),
            Error::FrameLength(6)
        );
    }

    #[test]
    fn decode_frame_with_invalid_kind() {
        let bytes: &[u8] = &[0x00, 0x00, 0x07, 0x00, 0x2A];
        assert_eq!(Message::try_from(bytes).err().unwrap(), Error::KindCode(0));

        let bytes: &[u8] = &[0xFF, 0x00, 0x07, 0x00, 0x2A];
        assert_eq!(
            Message::try_from(bytes).err().unwrap(),
            Error::KindCode(0xFF)
        );
    }

    #[test]
    fn round_trip() {
        let messages = &[
            Message::request(0, 0),
            Message::request(7, 42),
            Message::request(u16::MAX, u16::MAX),
            Message::response(0, 1),
            Message::response(0xFFFF, 0),
            Message::response(0x8000, 0x7FFF),
        ];
        for msg in messages {
            let buf = &mut [0u8; FRAME_LEN];
            let len = msg.encode(buf).unwrap();
            assert_eq!(*msg, Message::try_from(&buf[..len]).unwrap());
        }
    }
}
