//! Error handling, using `failure`.

/// Something that can go wrong while encoding or decoding a PDU.
///
/// Every failure is reported synchronously to the caller; there's no retrying or logging layer
/// in here. On an encoding failure, throw the output away and start again with a fresh buffer
/// (the buffer handed back by an encoding function is only valid on success).
#[derive(Fail, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PduError {
    /// A phone number contained something that isn't a decimal digit.
    #[fail(display = "Invalid character {:?} in phone number", _0)]
    InvalidInput(char),
    /// The declared output capacity is too small for what was being encoded.
    #[fail(display = "Output buffer too small")]
    BufferTooSmall,
    /// The message text is over the 160-septet limit of a single SMS.
    #[fail(display = "Message text too long ({} septets; the limit is 160)", _0)]
    TextTooLong(usize),
    /// A PDU being decoded was truncated or otherwise malformed.
    #[fail(display = "Invalid PDU: {}", _0)]
    InvalidPdu(&'static str),
}
pub type PduResult<T> = Result<T, PduError>;
