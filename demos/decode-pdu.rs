use sms_pdu::pdu::{HexData, SubmitPdu};
use std::io::prelude::*;

fn main() {
    println!("Input PDUs");
    let stdin = ::std::io::stdin();
    let lock = stdin.lock();
    for ln in lock.lines() {
        let ln = ln.unwrap();
        let bytes = HexData::decode(&ln).unwrap();
        let pdu = SubmitPdu::from_bytes(&bytes).unwrap();
        println!("PDU: {:?}", pdu);
        println!("Recipient: {}", pdu.destination);
        println!("Message: {:?}", pdu.text());
    }
}
