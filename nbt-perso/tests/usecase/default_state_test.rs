use nbt_perso::constants::DEFAULT_FAP_TABLE;
use nbt_perso::test_support::mock_with_ok;
use nbt_perso::transport::MockChannel;
use nbt_perso::usecase::{DefaultState, UseCase};

#[test]
fn reset_restores_policies_then_wipes_content() {
    let mut mock = mock_with_ok(24);
    DefaultState::new().execute(&mut mock).unwrap();

    // configuration (16 round trips) followed by the erase (8 round trips)
    assert_eq!(mock.sent.len(), 24);

    // All seven factory policies go out in fixed order.
    for (request, entry) in mock.sent[1..8].iter().zip([
        &DEFAULT_FAP_TABLE[0..6],   // CC
        &DEFAULT_FAP_TABLE[6..12],  // NDEF
        &DEFAULT_FAP_TABLE[36..42], // policy table
        &DEFAULT_FAP_TABLE[12..18], // proprietary 1
        &DEFAULT_FAP_TABLE[18..24], // proprietary 2
        &DEFAULT_FAP_TABLE[24..30], // proprietary 3
        &DEFAULT_FAP_TABLE[30..36], // proprietary 4
    ]) {
        assert_eq!(request[1], 0xD7);
        assert_eq!(&request[5..], entry);
    }

    // Factory interface configuration: I2C interrupt, both interfaces.
    assert_eq!(mock.sent[14], vec![0x00, 0x20, 0xC0, 0x30, 0x01, 0x03]);
    assert_eq!(mock.sent[15], vec![0x00, 0x20, 0xC0, 0x60, 0x01, 0x11]);

    // The erase ends by zeroing the stored content length.
    assert_eq!(
        mock.sent.last().unwrap(),
        &vec![0x00, 0xD6, 0x00, 0x00, 0x02, 0x00, 0x00]
    );
}

#[test]
fn probe_accepts_only_the_exact_factory_table() {
    let mut mock = MockChannel::new();
    mock.push_ok(1);
    mock.push_data(&DEFAULT_FAP_TABLE);
    assert!(DefaultState::is_default(&mut mock).unwrap());

    let mut truncated = MockChannel::new();
    truncated.push_ok(1);
    truncated.push_data(&DEFAULT_FAP_TABLE[..36]);
    assert!(!DefaultState::is_default(&mut truncated).unwrap());
}
