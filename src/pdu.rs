//! Encoding (and decoding) SMS-SUBMIT PDUs - the binary message format defined in 3GPP TS
//! 23.040 that modems accept in PDU mode.
//!
//! The layout of a SUBMIT PDU, for reference:
//!
//! - SMSC address length in octets (or 0 to use the modem's configured SMSC), then the
//!   type-of-address octet and the SMSC digits;
//! - the first octet (message type and friends - `0x11` for a bog-standard submission);
//! - message reference (0 lets the modem pick);
//! - destination address *digit count*, type-of-address octet, and the digits;
//! - protocol identifier, data coding scheme, validity period;
//! - user data length in septets, then the 7-bit-packed text.
//!
//! Phone number digits are "semi-octet" packed: two digits per octet, first digit in the low
//! nibble, and a `0xF` filler nibble on the end if the count is odd. Yes, this means the
//! number appears byte-swapped when you hexdump it. No, nobody knows why.

use std::fmt;
use std::str::FromStr;
use std::convert::TryFrom;
use num::FromPrimitive;
use crate::errors::*;
use crate::gsm_encoding::{self, MAX_SEPTETS};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromPrimitive)]
pub enum TypeOfNumber {
    Unknown = 0b0_000_0000,
    International = 0b0_001_0000,
    National = 0b0_010_0000,
    Special = 0b0_011_0000,
    Gsm = 0b0_101_0000,
    Short = 0b0_110_0000,
    Reserved = 0b0_111_0000
}
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromPrimitive)]
pub enum NumberingPlanIdentification {
    NetworkDetermined = 0b0_000_0000,
    IsdnTelephone = 0b0_000_0001,
    Data = 0b0_000_0011,
    Telex = 0b0_000_0100,
    National = 0b0_000_1000,
    Private = 0b0_000_1001,
    Ermes = 0b0_000_1010
}
/// The type-of-address octet that precedes an encoded phone number.
///
/// The default (international number, ISDN/telephone plan) encodes to the `0x91` you see in
/// front of nearly every real-world number.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressType {
    pub type_of_number: TypeOfNumber,
    pub numbering_plan_identification: NumberingPlanIdentification
}
impl Default for AddressType {
    fn default() -> Self {
        AddressType {
            type_of_number: TypeOfNumber::International,
            numbering_plan_identification: NumberingPlanIdentification::IsdnTelephone
        }
    }
}
impl TryFrom<u8> for AddressType {
    type Error = PduError;
    fn try_from(b: u8) -> PduResult<Self> {
        let ton = b & 0b0_111_0000;
        let ton = TypeOfNumber::from_u8(ton)
            .ok_or(PduError::InvalidPdu("invalid type_of_number"))?;
        let npi = b & 0b0_000_1111;
        let npi = NumberingPlanIdentification::from_u8(npi)
            .ok_or(PduError::InvalidPdu("invalid numbering_plan_identification"))?;
        Ok(Self {
            type_of_number: ton,
            numbering_plan_identification: npi
        })
    }
}
impl Into<u8> for AddressType {
    fn into(self) -> u8 {
        let mut ret: u8 = 0b1_000_0000;
        ret |= self.type_of_number as u8;
        ret |= self.numbering_plan_identification as u8;
        ret
    }
}
/// A phone number, stored as raw digit values (0 through 9, one per byte).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(pub Vec<u8>);
impl<'a> From<&'a [u8]> for PhoneNumber {
    /// Decodes a semi-octet-packed number, dropping the `0xF` filler nibble if present.
    fn from(b: &[u8]) -> Self {
        let mut ret = vec![];
        for b in b.iter() {
            let first = b & 0b0000_1111;
            let second = (b & 0b1111_0000) >> 4;
            ret.push(first);
            if second != 0b0000_1111 {
                ret.push(second);
            }
        }
        PhoneNumber(ret)
    }
}
impl PhoneNumber {
    /// Makes a `PhoneNumber` from a string of decimal digits (no `+`, no separators).
    ///
    /// Any character outside `'0'..='9'` is rejected with `InvalidInput`. (The C drivers this
    /// was modelled on famously check `digit < '0' && digit > '9'`, which rejects nothing at
    /// all; this is what that check was trying to say.)
    pub fn from_digits(digits: &str) -> PduResult<Self> {
        let mut buf = Vec::with_capacity(digits.len());
        for c in digits.chars() {
            match c {
                '0'..='9' => buf.push(c as u8 - b'0'),
                c => return Err(PduError::InvalidInput(c))
            }
        }
        Ok(PhoneNumber(buf))
    }
    /// Semi-octet packs the digits: digit 2i in the low nibble of octet i, digit 2i+1 in the
    /// high nibble, with an odd digit count padded out with `0xF`.
    ///
    /// Needs `(digits + 1) / 2` octets; fails with `BufferTooSmall` (writing nothing) if that
    /// exceeds `capacity`.
    pub fn as_semi_octets(&self, capacity: usize) -> PduResult<Vec<u8>> {
        let needed = (self.0.len() + 1) / 2;
        if needed > capacity {
            return Err(PduError::BufferTooSmall);
        }
        let mut ret = Vec::with_capacity(needed);
        let mut cur = 0b0000_0000;
        for (i, b) in self.0.iter().enumerate() {
            let mut b = *b;
            if i % 2 == 0 {
                cur |= b;
            }
            else {
                b = b << 4;
                cur |= b;
                ret.push(cur);
                cur = 0b0000_0000;
            }
        }
        if self.0.len() % 2 != 0 {
            cur |= 0b1111_0000;
            ret.push(cur);
        }
        Ok(ret)
    }
}
/// A phone number plus its type-of-address - what actually goes into a PDU address field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduAddress {
    pub type_addr: AddressType,
    pub number: PhoneNumber
}
impl fmt::Display for PduAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.type_addr.type_of_number {
            TypeOfNumber::International => "+",
            _ => ""
        };
        write!(f, "{}", prefix)?;
        for b in self.number.0.iter() {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}
impl FromStr for PduAddress {
    type Err = PduError;
    /// Parses a number like `+447700900123` or `0800001066`. A leading `+` marks the number
    /// as international; everything after it must be a decimal digit.
    fn from_str(st: &str) -> PduResult<Self> {
        let (digits, ton) = if st.starts_with('+') {
            (&st[1..], TypeOfNumber::International)
        }
        else {
            (st, TypeOfNumber::Unknown)
        };
        let number = PhoneNumber::from_digits(digits)?;
        Ok(PduAddress {
            type_addr: AddressType {
                type_of_number: ton,
                numbering_plan_identification: NumberingPlanIdentification::IsdnTelephone
            },
            number
        })
    }
}
impl<'a> TryFrom<&'a [u8]> for PduAddress {
    type Error = PduError;
    /// Decodes an address field: length octet, type-of-address, semi-octet digits.
    ///
    /// The length octet is not interpreted here (its meaning depends on which field the
    /// address sits in); the digit count comes from the slice length.
    fn try_from(b: &[u8]) -> PduResult<Self> {
        if b.len() < 3 {
            Err(PduError::InvalidPdu("tried to make a PduAddress from less than 3 bytes"))?
        }
        let type_addr = AddressType::try_from(b[1])?;
        let number = PhoneNumber::from(&b[2..]);
        Ok(PduAddress { type_addr, number })
    }
}
impl PduAddress {
    /// Encodes this address as a PDU field, bounds-checked against `capacity`.
    ///
    /// `broken_len` controls what the length octet counts: the destination address field
    /// counts *digits* (`true`), while the SMSC field counts *octets including the
    /// type-of-address* (`false`). Not this library's fault.
    pub fn as_bytes(&self, broken_len: bool, capacity: usize) -> PduResult<Vec<u8>> {
        let needed = 2 + (self.number.0.len() + 1) / 2;
        if needed > capacity {
            return Err(PduError::BufferTooSmall);
        }
        let mut ret = vec![];
        ret.push(self.type_addr.into());
        ret.extend(self.number.as_semi_octets(capacity - 1)?);
        let len = if broken_len {
            self.number.0.len()
        } else {
            ret.len()
        };
        ret.insert(0, len as u8);
        Ok(ret)
    }
}
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromPrimitive)]
pub enum MessageType {
    SmsDeliver = 0b000000_00,
    SmsCommand = 0b000000_10,
    SmsSubmit = 0b000000_01,
    Reserved = 0b000000_11
}
/// TP-VPF: how the validity period field (if any) is to be read. Lives in bits 3-4 of the
/// first octet.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromPrimitive)]
pub enum VpFieldValidity {
    Invalid = 0b000_00_000,
    Enhanced = 0b000_01_000,
    Relative = 0b000_10_000,
    Absolute = 0b000_11_000,
}
/// The first octet of a SUBMIT PDU: message type plus assorted flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PduFirstOctet {
    pub mti: MessageType,
    pub rd: bool,
    pub vpf: VpFieldValidity,
    pub srr: bool,
    pub udhi: bool,
    pub rp: bool
}
impl From<u8> for PduFirstOctet {
    fn from(b: u8) -> Self {
        let rd = (b & 0b00000100) > 0;
        let srr = (b & 0b00100000) > 0;
        let udhi = (b & 0b01000000) > 0;
        let rp = (b & 0b10000000) > 0;
        let mti = MessageType::from_u8(b & 0b000000_11)
            .expect("MessageType conversions should be exhaustive!");
        let vpf = VpFieldValidity::from_u8(b & 0b000_11_000)
            .expect("VpFieldValidity conversions should be exhaustive!");
        PduFirstOctet { rd, srr, udhi, rp, mti, vpf }
    }
}
impl Into<u8> for PduFirstOctet {
    fn into(self) -> u8 {
        let mut ret = 0b0000_0000;
        ret |= self.mti as u8;
        ret |= self.vpf as u8;
        if self.rd {
            ret |= 0b00000100;
        }
        if self.srr {
            ret |= 0b00100000;
        }
        if self.udhi {
            ret |= 0b01000000;
        }
        if self.rp {
            ret |= 0b10000000;
        }
        ret
    }
}
/// DCS value for the GSM 7-bit default alphabet, uncompressed, no message class.
pub const DCS_GSM_7BIT: u8 = 0x00;
/// A relative validity period of 10 days, the conventional default.
pub const VP_RELATIVE_TEN_DAYS: u8 = 0xB0;

/// An SMS-SUBMIT PDU, ready for encoding.
///
/// `user_data` holds *unpacked* septets (one per byte); packing happens in
/// [`as_bytes`](#method.as_bytes), where the capacity bound is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPdu {
    pub sca: Option<PduAddress>,
    pub first_octet: PduFirstOctet,
    pub message_reference: u8,
    pub destination: PduAddress,
    pub dcs: u8,
    pub validity_period: u8,
    pub user_data: Vec<u8>
}
impl SubmitPdu {
    /// Sets the SMSC address explicitly (instead of the 0 length octet that tells the modem
    /// to use its configured one).
    pub fn set_sca(&mut self, sca: PduAddress) {
        self.sca = Some(sca);
    }
    /// Makes a plain single-part message: first octet `0x11` (SMS-SUBMIT, relative validity
    /// period), reference 0, 7-bit alphabet, valid for 10 days.
    ///
    /// `text` is taken as ASCII; each character becomes one septet. Anything over 160
    /// characters won't encode (`as_bytes` will say `TextTooLong`) - this library doesn't do
    /// concatenated SMS.
    pub fn simple_message(destination: PduAddress, text: &str) -> Self {
        SubmitPdu {
            sca: None,
            first_octet: PduFirstOctet {
                mti: MessageType::SmsSubmit,
                rd: false,
                vpf: VpFieldValidity::Relative,
                rp: false,
                udhi: false,
                srr: false
            },
            message_reference: 0,
            destination,
            dcs: DCS_GSM_7BIT,
            validity_period: VP_RELATIVE_TEN_DAYS,
            user_data: text.bytes().map(|b| b & 0b0111_1111).collect()
        }
    }
    /// Encodes the PDU, never writing past `capacity` bytes.
    ///
    /// Returns the encoded bytes and the TPDU length - the length *excluding* the SMSC
    /// field, which is the number to quote in `AT+CMGS=<len>`.
    ///
    /// Encoding is a single fail-fast pass: each field's capacity is checked immediately
    /// before it is written, and the first field that wouldn't fit aborts the whole encode
    /// with `BufferTooSmall`. There's no partial output to worry about, since the buffer is
    /// only handed back on success.
    pub fn as_bytes(&self, capacity: usize) -> PduResult<(Vec<u8>, usize)> {
        trace!("encoding SUBMIT PDU to {} ({} septets, capacity {})",
               self.destination, self.user_data.len(), capacity);
        let mut ret = vec![];
        let mut scalen = 1;
        if let Some(ref sca) = self.sca {
            let sca = sca.as_bytes(false, capacity)?;
            scalen = sca.len();
            ret.extend(sca);
        }
        else {
            if capacity < 1 {
                return Err(PduError::BufferTooSmall);
            }
            ret.push(0);
        }
        // first octet, message reference, destination length, destination type-of-address
        if ret.len() + 4 > capacity {
            return Err(PduError::BufferTooSmall);
        }
        ret.push(self.first_octet.into());
        ret.push(self.message_reference);
        ret.extend(self.destination.as_bytes(true, capacity - ret.len())?);
        // protocol identifier, DCS, validity period, user data length
        if ret.len() + 4 > capacity {
            return Err(PduError::BufferTooSmall);
        }
        ret.push(0);
        ret.push(self.dcs);
        if self.first_octet.vpf != VpFieldValidity::Invalid {
            ret.push(self.validity_period);
        }
        if self.user_data.len() > MAX_SEPTETS {
            return Err(PduError::TextTooLong(self.user_data.len()));
        }
        ret.push(self.user_data.len() as u8);
        ret.extend(gsm_encoding::pack_7bit(&self.user_data, capacity - ret.len())?);
        let tpdu_len = ret.len() - scalen;
        debug!("encoded SUBMIT PDU: {} bytes, TPDU length {}", ret.len(), tpdu_len);
        Ok((ret, tpdu_len))
    }
    /// Decodes an encoded SUBMIT PDU (the SMSC field included) back into a `SubmitPdu`.
    ///
    /// Only the 7-bit default alphabet is understood; any other DCS value is rejected.
    pub fn from_bytes(b: &[u8]) -> PduResult<Self> {
        if b.len() < 1 {
            Err(PduError::InvalidPdu("tried to make a SubmitPdu from an empty buffer"))?
        }
        let scalen = b[0] as usize;
        let mut offset = scalen + 1;
        let sca = if scalen > 0 {
            let o = offset - 1;
            check_offset!(b, o, "SMSC address");
            Some(PduAddress::try_from(&b[0..offset])?)
        }
        else {
            None
        };
        check_offset!(b, offset, "first octet");
        let first_octet = PduFirstOctet::from(b[offset]);
        if first_octet.mti != MessageType::SmsSubmit {
            Err(PduError::InvalidPdu("message type is not SMS-SUBMIT"))?
        }
        offset += 1;
        check_offset!(b, offset, "message reference");
        let message_reference = b[offset];
        offset += 1;
        check_offset!(b, offset, "destination address length");
        let dest_len_digits = b[offset] as usize;
        // The length octet counts digits (nybbles); two digits per octet, rounding up, plus
        // the length and type-of-address octets themselves.
        let dest_octets = (dest_len_digits + 1) / 2 + 2;
        let dest_end = offset + dest_octets;
        let de = dest_end - 1;
        check_offset!(b, de, "destination address");
        let destination = PduAddress::try_from(&b[offset..dest_end])?;
        offset += dest_octets;
        check_offset!(b, offset, "protocol identifier");
        let _pid = b[offset];
        offset += 1;
        check_offset!(b, offset, "data coding scheme");
        let dcs = b[offset];
        if dcs != DCS_GSM_7BIT {
            Err(PduError::InvalidPdu("unsupported data coding scheme"))?
        }
        offset += 1;
        let validity_period = if first_octet.vpf != VpFieldValidity::Invalid {
            check_offset!(b, offset, "validity period");
            let vp = b[offset];
            offset += 1;
            vp
        }
        else {
            0
        };
        check_offset!(b, offset, "user data length");
        let user_data_len = b[offset] as usize;
        offset += 1;
        if b.len() - offset < gsm_encoding::packed_len(user_data_len) {
            Err(PduError::InvalidPdu("user data shorter than its declared length"))?
        }
        let user_data = gsm_encoding::unpack_7bit(&b[offset..], user_data_len);
        Ok(SubmitPdu {
            sca,
            first_octet,
            message_reference,
            destination,
            dcs,
            validity_period,
            user_data
        })
    }
    /// The message text, decoded back from septets.
    pub fn text(&self) -> String {
        self.user_data.iter().map(|b| *b as char).collect()
    }
}
/// Encodes an SMS in one go: service centre number (empty string to use the modem's), a
/// destination number, ASCII text, and the room you have for the output.
///
/// Returns the PDU bytes and the TPDU length for `AT+CMGS=<len>`.
pub fn encode_submit(service_centre: &str, destination: &str,
                     text: &str, capacity: usize) -> PduResult<(Vec<u8>, usize)> {
    debug!("encoding SMS to {} ({} chars)", destination, text.len());
    let mut pdu = SubmitPdu::simple_message(destination.parse()?, text);
    if !service_centre.is_empty() {
        pdu.set_sca(service_centre.parse()?);
    }
    pdu.as_bytes(capacity)
}
/// Wrapper that displays a byte slice as uppercase hex - the form PDUs travel in on the AT
/// side.
pub struct HexData<'a>(pub &'a [u8]);
impl<'a> fmt::Display for HexData<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
       for b in self.0.iter() {
           write!(f, "{:02X}", b)?;
       }
       Ok(())
    }
}
impl<'a> HexData<'a> {
    /// Parses a hex string back into bytes.
    pub fn decode(data: &str) -> PduResult<Vec<u8>> {
        data.as_bytes()
            .chunks(2)
            .map(::std::str::from_utf8)
            .map(|x| {
                match x {
                    Ok(x) => u8::from_str_radix(x, 16)
                        .map_err(|_| PduError::InvalidPdu("invalid hex string")),
                    Err(_) => Err(PduError::InvalidPdu("invalid hex string"))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn semi_octet_even_length() {
        let num = PhoneNumber::from_digits("1234567890").unwrap();
        assert_eq!(num.as_semi_octets(5).unwrap(),
                   vec![0x21, 0x43, 0x65, 0x87, 0x09]);
    }
    #[test]
    fn semi_octet_odd_length_gets_filler() {
        let num = PhoneNumber::from_digits("12345").unwrap();
        assert_eq!(num.as_semi_octets(3).unwrap(),
                   vec![0x21, 0x43, 0xF5]);
    }
    #[test]
    fn semi_octet_sizes() {
        let digits = "123456789012345";
        for n in 0..digits.len() {
            let num = PhoneNumber::from_digits(&digits[..n]).unwrap();
            assert_eq!(num.as_semi_octets(8).unwrap().len(), (n + 1) / 2);
        }
    }
    #[test]
    fn semi_octet_capacity() {
        let num = PhoneNumber::from_digits("1234567890").unwrap();
        assert_eq!(num.as_semi_octets(4), Err(PduError::BufferTooSmall));
    }
    #[test]
    fn semi_octet_round_trip() {
        for digits in &["1234567890", "12345", "07700900123", "1", ""] {
            let num = PhoneNumber::from_digits(digits).unwrap();
            let enc = num.as_semi_octets(16).unwrap();
            assert_eq!(PhoneNumber::from(&enc as &[u8]), num);
        }
    }
    #[test]
    fn non_digits_are_rejected() {
        assert_eq!(PhoneNumber::from_digits("123a456"),
                   Err(PduError::InvalidInput('a')));
        assert_eq!("12-34".parse::<PduAddress>(),
                   Err(PduError::InvalidInput('-')));
        assert_eq!("+4477a".parse::<PduAddress>(),
                   Err(PduError::InvalidInput('a')));
    }
    #[test]
    fn address_parsing() {
        let addr: PduAddress = "+447700900123".parse().unwrap();
        assert_eq!(addr.type_addr.type_of_number, TypeOfNumber::International);
        let toa: u8 = addr.type_addr.into();
        assert_eq!(toa, 0x91);
        assert_eq!(addr.to_string(), "+447700900123");
        let addr: PduAddress = "0800001066".parse().unwrap();
        assert_eq!(addr.type_addr.type_of_number, TypeOfNumber::Unknown);
        assert_eq!(addr.to_string(), "0800001066");
    }
    #[test]
    fn first_octet_simple_submit_is_0x11() {
        let pdu = SubmitPdu::simple_message("123".parse().unwrap(), "x");
        let fo: u8 = pdu.first_octet.into();
        assert_eq!(fo, 0x11);
        assert_eq!(PduFirstOctet::from(0x11), pdu.first_octet);
    }
    #[test]
    fn encode_submit_reference_vector() {
        let (bytes, tpdu_len) = encode_submit("", "1234567890", "Hi", 256).unwrap();
        assert_eq!(bytes, vec![
            0x00,                               // no SMSC
            0x11,                               // SMS-SUBMIT, relative VP
            0x00,                               // message reference
            0x0A, 0x91,                         // 10 digits, international
            0x21, 0x43, 0x65, 0x87, 0x09,       // 1234567890, semi-octet packed
            0x00,                               // PID
            0x00,                               // DCS: 7-bit default
            0xB0,                               // VP: 10 days
            0x02,                               // UDL: 2 septets
            0xC8, 0x34                          // "Hi"
        ]);
        assert_eq!(tpdu_len, 15);
        assert_eq!(format!("{}", HexData(&bytes)),
                   "0011000A912143658709000000B002C834");
    }
    #[test]
    fn encode_submit_with_smsc() {
        let (bytes, tpdu_len) = encode_submit("+447785016005", "1234567890", "Hi", 256)
            .unwrap();
        assert_eq!(&bytes[..9], &[
            0x07, 0x91,                               // 7 octets follow; international
            0x44, 0x77, 0x58, 0x10, 0x06, 0x50,       // 447785016005
            0x11
        ]);
        // the TPDU length never includes the SMSC field
        assert_eq!(tpdu_len, bytes.len() - 8);
    }
    #[test]
    fn text_too_long() {
        let text: String = ::std::iter::repeat('a').take(161).collect();
        assert_eq!(encode_submit("", "1234567890", &text, 256),
                   Err(PduError::TextTooLong(161)));
        let text: String = ::std::iter::repeat('a').take(160).collect();
        assert!(encode_submit("", "1234567890", &text, 256).is_ok());
    }
    #[test]
    fn buffer_too_small() {
        // 16 bytes is the exact size of the reference vector; anything less must fail.
        for capacity in 0..16 {
            assert_eq!(encode_submit("", "1234567890", "Hi", capacity),
                       Err(PduError::BufferTooSmall),
                       "capacity {} should not have been enough", capacity);
        }
        let (bytes, _) = encode_submit("", "1234567890", "Hi", 16).unwrap();
        assert_eq!(bytes.len(), 16);
    }
    #[test]
    fn encoding_is_deterministic() {
        let a = encode_submit("+447785016005", "1234567890", "hellohello", 256).unwrap();
        let b = encode_submit("+447785016005", "1234567890", "hellohello", 256).unwrap();
        assert_eq!(a, b);
    }
    #[test]
    fn decode_round_trip() {
        let mut pdu = SubmitPdu::simple_message("+447700900123".parse().unwrap(),
                                                "The quick brown fox");
        assert_eq!(SubmitPdu::from_bytes(&pdu.as_bytes(256).unwrap().0).unwrap(), pdu);
        pdu.set_sca("+447785016005".parse().unwrap());
        let decoded = SubmitPdu::from_bytes(&pdu.as_bytes(256).unwrap().0).unwrap();
        assert_eq!(decoded, pdu);
        assert_eq!(decoded.text(), "The quick brown fox");
        assert_eq!(decoded.destination.to_string(), "+447700900123");
    }
    #[test]
    fn decode_rejects_truncated_pdus() {
        let (bytes, _) = encode_submit("", "1234567890", "Hi", 256).unwrap();
        for n in 0..bytes.len() {
            assert!(SubmitPdu::from_bytes(&bytes[..n]).is_err(),
                    "truncation to {} bytes should not decode", n);
        }
    }
    #[test]
    fn decode_rejects_non_7bit_dcs() {
        let (mut bytes, _) = encode_submit("", "1234567890", "Hi", 256).unwrap();
        bytes[11] = 0x08; // UCS-2
        assert_eq!(SubmitPdu::from_bytes(&bytes),
                   Err(PduError::InvalidPdu("unsupported data coding scheme")));
    }
    #[test]
    fn hex_data() {
        assert_eq!(HexData::decode("0011000A").unwrap(),
                   vec![0x00, 0x11, 0x00, 0x0A]);
        assert!(HexData::decode("zz").is_err());
        assert_eq!(format!("{}", HexData(&[0xDE, 0xAD, 0xBE, 0xEF])), "DEADBEEF");
    }
}
