use nbt_perso::constants::DEFAULT_FAP_TABLE;
use nbt_perso::protocol::{execute, Command};
use nbt_perso::transport::MockChannel;
use nbt_perso::Error;

#[test]
fn execute_returns_response_data() {
    let mut mock = MockChannel::new();
    mock.push_data(&DEFAULT_FAP_TABLE);

    let response = execute(&mut mock, &Command::ReadPolicyTable).unwrap();
    assert_eq!(response.data[..], DEFAULT_FAP_TABLE[..]);
    assert_eq!(mock.sent, vec![Command::ReadPolicyTable.encode()]);
}

#[test]
fn execute_surfaces_device_status_word() {
    let mut mock = MockChannel::new();
    mock.push_status(0x6A82); // file or application not found
    assert!(matches!(
        execute(&mut mock, &Command::SelectApplication),
        Err(Error::Command { sw: 0x6A82 })
    ));
}

#[test]
fn execute_propagates_transport_failure() {
    let mut mock = MockChannel::new();
    // No queued response at all
    assert!(matches!(
        execute(&mut mock, &Command::SelectApplication),
        Err(Error::Transport(_))
    ));
}

#[test]
fn execute_rejects_truncated_response() {
    let mut mock = MockChannel::new();
    mock.push_response(vec![0x90]);
    assert!(matches!(
        execute(&mut mock, &Command::SelectApplication),
        Err(Error::InvalidLength { expected: 2, .. })
    ));
}
