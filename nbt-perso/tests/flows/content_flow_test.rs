use nbt_perso::constants::NDEF_FILE_CAPACITY;
use nbt_perso::content::{ConnectionHandoverEncoder, ContentEncoder};
use nbt_perso::flows::{erase_content, write_content};
use nbt_perso::test_support::mock_with_ok;
use nbt_perso::transport::MockChannel;
use nbt_perso::Error;

#[path = "../common/fixtures.rs"]
mod fixtures;

#[test]
fn encoded_message_round_trips_to_the_content_file() {
    let message = ConnectionHandoverEncoder::new(fixtures::sample_address())
        .with_local_name("NBT")
        .encode()
        .unwrap();

    let mut mock = mock_with_ok(3);
    write_content(&mut mock, &message).unwrap();

    // Single chunk: 2-byte length prefix followed by the message verbatim
    let chunk = &mock.sent[2];
    assert_eq!(&chunk[..4], &[0x00, 0xD6, 0x00, 0x00]);
    let expected_len = (message.len() as u16).to_be_bytes();
    assert_eq!(&chunk[5..7], &expected_len);
    assert_eq!(&chunk[7..], &message[..]);
}

#[test]
fn capacity_boundary_is_exact() {
    let mut mock = mock_with_ok(6);
    let at_capacity = vec![0x00; NDEF_FILE_CAPACITY];
    write_content(&mut mock, &at_capacity).unwrap();

    let mut mock = MockChannel::new();
    mock.push_ok(1);
    let over_capacity = vec![0x00; NDEF_FILE_CAPACITY + 1];
    assert!(matches!(
        write_content(&mut mock, &over_capacity),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn erase_after_write_restores_the_blank_pattern() {
    let mut written = mock_with_ok(3);
    write_content(&mut written, &[0xD1, 0x01, 0x00]).unwrap();

    let mut erased = mock_with_ok(8);
    erase_content(&mut erased).unwrap();

    // The erase ends by zeroing the stored length.
    assert_eq!(
        erased.sent.last().unwrap(),
        &vec![0x00, 0xD6, 0x00, 0x00, 0x02, 0x00, 0x00]
    );
}
