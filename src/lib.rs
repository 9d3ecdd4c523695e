//! The `sms-pdu` library encodes SMS messages into binary SMS-SUBMIT PDUs (Protocol Data
//! Units, as specified in 3GPP TS 23.040) for handing to an AT-command cellular modem.
//!
//! PDU mode is what you want when talking to a modem, as opposed to the ostensibly friendlier
//! "text mode": it's the only mode that behaves the same across vendors, and the encoding is
//! simple enough (some nibble-swapping and 7-bit bit-packing) that there's no real reason to
//! avoid it.
//!
//! The usual flow is: parse the recipient into a [`PduAddress`](pdu/struct.PduAddress.html),
//! make a [`SubmitPdu`](pdu/struct.SubmitPdu.html) with `simple_message`, and call `as_bytes`
//! with however much room your transmit buffer has. You get back the PDU bytes and the TPDU
//! length to quote in `AT+CMGS=<len>`; hex-encode the bytes with
//! [`HexData`](pdu/struct.HexData.html) and the modem does the rest. If all three inputs are
//! just strings, [`encode_submit`](pdu/fn.encode_submit.html) does the whole thing in one call.
//!
//! Everything here is a pure function from inputs to bytes: no I/O, no state, nothing async.
//! The AT command framing itself is the caller's problem.

#[macro_use] extern crate log;
#[macro_use] extern crate failure_derive;
#[macro_use] extern crate num_derive;

pub use crate::errors::{PduError, PduResult};
pub use crate::pdu::encode_submit;

macro_rules! check_offset {
    ($b:ident, $offset:ident, $reason:expr) => {
        if $b.get($offset).is_none() {
            return Err(PduError::InvalidPdu(concat!("Offset check failed for: ", $reason)));
        }
    }
}

pub mod errors;
pub mod gsm_encoding;
pub mod pdu;
