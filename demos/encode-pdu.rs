use sms_pdu::pdu::{HexData, SubmitPdu};
use std::io::prelude::*;

fn main() {
    env_logger::init().unwrap();
    println!("Input messages in the form recipient;message");
    let stdin = ::std::io::stdin();
    let lock = stdin.lock();
    for ln in lock.lines() {
        let ln = ln.unwrap();
        let ln = ln.splitn(2, ';').collect::<Vec<_>>();
        if ln.len() != 2 {
            println!("Try something like +447700900123;hello");
            continue;
        }
        let recipient = match ln[0].parse() {
            Ok(r) => r,
            Err(e) => {
                println!("Bad recipient: {}", e);
                continue;
            }
        };
        let pdu = SubmitPdu::simple_message(recipient, ln[1]);
        match pdu.as_bytes(256) {
            Ok((bytes, tpdu_len)) => {
                println!("AT+CMGS={}", tpdu_len);
                println!("{}", HexData(&bytes));
            },
            Err(e) => println!("Failed to encode: {}", e)
        }
    }
}
