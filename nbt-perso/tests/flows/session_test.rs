use nbt_perso::flows::write_content;
use nbt_perso::session;
use nbt_perso::test_support::mock_with_ok;
use nbt_perso::transport::MockChannel;

#[test]
fn session_brackets_a_flow_with_connect_and_disconnect() {
    let mut mock = mock_with_ok(3);
    session::run(&mut mock, |channel| {
        write_content(channel, &[0xD1, 0x01, 0x00])
    })
    .unwrap();

    assert_eq!(mock.connects, 1);
    assert_eq!(mock.disconnects, 1);
    assert_eq!(mock.sent.len(), 3);
}

#[test]
fn session_disconnects_even_when_the_flow_fails() {
    let mut mock = MockChannel::new();
    mock.push_status(0x6A82); // application select rejected
    let result = session::run(&mut mock, |channel| {
        write_content(channel, &[0xD1, 0x01, 0x00])
    });

    assert!(result.is_err());
    assert_eq!(mock.disconnects, 1);
}
