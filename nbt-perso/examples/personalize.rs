// Personalization walkthrough over a mock channel.

// This example drives each profile against a MockChannel and prints the
// APDU traffic it produces, which is exactly what a real reader-backed
// Channel implementation would transmit.

use nbt_perso::prelude::*;
use nbt_perso::session;
use nbt_perso::utils::bytes_to_hex_spaced;

// Minimal DER SEQUENCE standing in for a real certificate and key.
const TINY_DER: [u8; 5] = [0x30, 0x03, 0x02, 0x01, 0x01];

fn run_profile(name: &str, profile: &dyn UseCase) -> Result<()> {
    let mut channel = MockChannel::new();
    channel.push_ok(64);

    println!("=== {} ===", name);
    session::run(&mut channel, |ch| profile.execute(ch))?;
    for request in &channel.sent {
        println!("  >> {}", bytes_to_hex_spaced(request));
    }
    println!("  ({} commands)\n", channel.sent.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let brand = BrandProtection::new(
        Some("https://brand.example/check"),
        TINY_DER.to_vec(),
        TINY_DER.to_vec(),
    )?;
    run_profile("brand protection", &brand)?;

    let handover = ConnectionHandover::from_hex("00:11:22:33:44:55")?;
    run_profile("connection handover", &handover)?;

    run_profile("pass-through", &PassThrough::new())?;
    run_profile("default state reset", &DefaultState::new())?;

    Ok(())
}
