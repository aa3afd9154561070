use nbt_perso::test_support::mock_with_ok;
use nbt_perso::transport::MockChannel;
use nbt_perso::usecase::{ConnectionHandover, PassThrough, UseCase};
use nbt_perso::Error;

#[path = "../common/fixtures.rs"]
mod fixtures;

#[test]
fn full_personalization_sequence() {
    let mut mock = mock_with_ok(19);
    ConnectionHandover::from_hex(fixtures::sample_address_hex())
        .unwrap()
        .execute(&mut mock)
        .unwrap();

    // content write, policy flow, interface configuration
    assert_eq!(mock.sent.len(), 19);

    // The OOB record carries the address LSB first plus the local name.
    let content = &mock.sent[2];
    let wire_address: &[u8] = &[0x55, 0x44, 0x33, 0x22, 0x11, 0x00];
    assert!(content
        .windows(wire_address.len())
        .any(|window| window == wire_address));
    let name: &[u8] = b"NBT";
    assert!(content.windows(3).any(|window| window == name));

    // Content file stays readable everywhere, contact writes are denied.
    assert_eq!(
        mock.sent[5],
        vec![0x00, 0xD7, 0x00, 0x00, 0x06, 0xE1, 0x04, 0x40, 0x40, 0x40, 0x00]
    );

    // Pass-through GPIO function, both interfaces stay on.
    assert_eq!(mock.sent[17], vec![0x00, 0x20, 0xC0, 0x30, 0x01, 0x04]);
    assert_eq!(mock.sent[18], vec![0x00, 0x20, 0xC0, 0x60, 0x01, 0x11]);
}

#[test]
fn malformed_address_never_touches_the_channel() {
    let result = ConnectionHandover::from_hex("not-a-mac");
    assert!(matches!(result, Err(Error::Encoding(_))));
}

#[test]
fn truncated_address_is_a_length_error() {
    assert!(matches!(
        ConnectionHandover::from_hex("0011223344"),
        Err(Error::InvalidDeviceAddress { actual: 5 })
    ));
}

#[test]
fn pass_through_configures_without_content() {
    let mut mock = MockChannel::new();
    mock.push_ok(16);
    PassThrough::new().execute(&mut mock).unwrap();

    assert_eq!(mock.sent.len(), 16);
    // No update-binary outside the CC triad: the content file is untouched.
    let binary_writes: Vec<_> = mock
        .sent
        .iter()
        .filter(|request| request[1] == 0xD6)
        .collect();
    assert_eq!(binary_writes.len(), 1);
    assert_eq!(&binary_writes[0][..4], &[0x00, 0xD6, 0x00, 0x0F]);
}
