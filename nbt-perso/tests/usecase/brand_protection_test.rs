use nbt_perso::test_support::mock_with_ok;
use nbt_perso::usecase::{BrandProtection, UseCase};
use nbt_perso::utils::{certificate_from_pem, key_from_pem};

#[path = "../common/fixtures.rs"]
mod fixtures;

fn sample_profile() -> BrandProtection {
    let cert = certificate_from_pem(fixtures::SAMPLE_CERT_PEM).unwrap();
    let key = key_from_pem(fixtures::SAMPLE_KEY_PEM).unwrap();
    BrandProtection::new(Some("https://brand.example/check"), cert, key).unwrap()
}

#[test]
fn full_personalization_sequence() {
    let mut mock = mock_with_ok(21);
    sample_profile().execute(&mut mock).unwrap();

    // key write, content write, policy flow, interface configuration
    assert_eq!(mock.sent.len(), 21);

    // The brand signing key lands in its slot first.
    assert_eq!(&mock.sent[1][..4], &[0x00, 0xE2, 0xA0, 0x02]);

    // The content write carries the COTT url.
    let content = &mock.sent[4];
    let url_bytes: &[u8] = b"brand.example/check?cott=";
    assert!(content
        .windows(url_bytes.len())
        .any(|window| window == url_bytes));

    // CC and content files lose their contactless access.
    assert_eq!(
        mock.sent[6],
        vec![0x00, 0xD7, 0x00, 0x00, 0x06, 0xE1, 0x03, 0x00, 0x00, 0x40, 0x00]
    );
    assert_eq!(
        mock.sent[7],
        vec![0x00, 0xD7, 0x00, 0x00, 0x06, 0xE1, 0x04, 0x00, 0x00, 0x40, 0x00]
    );

    // Locked proprietary files show up denied in the CC payload.
    let cc_write = &mock.sent[16];
    assert_eq!(&cc_write[..5], &[0x00, 0xD6, 0x00, 0x0F, 32]);
    for record in cc_write[5..].chunks(8) {
        assert_eq!(&record[6..], &[0xFF, 0xFF]);
    }

    // GPIO disabled, both interfaces stay on.
    assert_eq!(mock.sent[19], vec![0x00, 0x20, 0xC0, 0x30, 0x01, 0x01]);
    assert_eq!(mock.sent[20], vec![0x00, 0x20, 0xC0, 0x60, 0x01, 0x11]);
}

#[test]
fn aborts_without_further_commands_when_key_write_fails() {
    let mut mock = mock_with_ok(1);
    mock.push_status(0x6982); // security status not satisfied
    assert!(sample_profile().execute(&mut mock).is_err());
    assert_eq!(mock.sent.len(), 2);
}
