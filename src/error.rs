use core::fmt;

/// moteack-core Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid message kind code
    KindCode(u8),
    /// Invalid buffer size
    BufferSize,
    /// Invalid frame length
    FrameLength(usize),
    /// All pending exchange slots are in use
    PendingLimit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match self {
            KindCode(code) => write!(f, "Invalid message kind code: 0x{code:0>2X}"),
            BufferSize => write!(f, "Invalid buffer size"),
            FrameLength(len) => write!(
                f,
                "Invalid frame length: {len}, expected {}",
                crate::frame::FRAME_LEN
            ),
            PendingLimit => write!(f, "All pending exchange slots are in use"),
        }
    }
}
