use std::{env, net::Ipv4Addr, thread::sleep};

use anyhow::Context;
use publisher::{Publisher, BROKER_PORT, DEFAULT_PAYLOAD, SEND_INTERVAL};

fn main() -> anyhow::Result<()> {
    let mut args = env::args();
    args.next().unwrap();

    let broker_addr: Ipv4Addr = args
        .next()
        .expect("1st argument should be the broker IPv4 address")
        .parse()
        .context("broker address is not a valid IPv4 address")?;
    let app_name = args
        .next()
        .expect("2nd argument should be the application name");
    let topic = args.next().expect("3rd argument should be the topic name");
    let payload = args.next().unwrap_or_else(|| DEFAULT_PAYLOAD.to_string());

    let mut publisher = Publisher::register((broker_addr, BROKER_PORT).into(), &app_name, &topic)?;

    loop {
        publisher.publish(&payload)?;
        println!("LOG: send data to IoT Core successfully.");
        sleep(SEND_INTERVAL);
    }
}
