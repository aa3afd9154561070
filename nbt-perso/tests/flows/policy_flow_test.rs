use nbt_perso::constants::{DEFAULT_FAP_TABLE, PP1_FILE, PP2_FILE, PP3_FILE, PP4_FILE};
use nbt_perso::fap::{FileAccessPolicy, PolicySet};
use nbt_perso::flows::{apply_access_policies, is_default_state};
use nbt_perso::test_support::mock_with_ok;
use nbt_perso::transport::MockChannel;

#[test]
fn locking_proprietary_files_denies_them_in_the_cc_payload() {
    let mut mock = mock_with_ok(13);

    let mut policies = PolicySet::defaults();
    policies.file1 = FileAccessPolicy::locked(PP1_FILE);
    policies.file2 = FileAccessPolicy::locked(PP2_FILE);
    policies.file3 = FileAccessPolicy::locked(PP3_FILE);
    policies.file4 = FileAccessPolicy::locked(PP4_FILE);
    apply_access_policies(&mut mock, &policies).unwrap();

    // The CC payload write is the second-to-last command.
    let cc_write = &mock.sent[11];
    assert_eq!(&cc_write[..5], &[0x00, 0xD6, 0x00, 0x0F, 32]);
    for (i, record) in cc_write[5..].chunks(8).enumerate() {
        assert_eq!(&record[..3], &[0x05, 0x06, 0xE1]);
        assert_eq!(record[3], 0xA1 + i as u8);
        assert_eq!(&record[4..6], &[0x04, 0x00]);
        // Locked file: both contact conditions denied
        assert_eq!(&record[6..], &[0xFF, 0xFF]);
    }
}

#[test]
fn open_proprietary_files_grant_access_in_the_cc_payload() {
    let mut mock = mock_with_ok(13);
    apply_access_policies(&mut mock, &PolicySet::defaults()).unwrap();

    for record in mock.sent[11][5..].chunks(8) {
        assert_eq!(&record[6..], &[0x00, 0x00]);
    }
}

#[test]
fn default_state_probe_round_trip() {
    let mut mock = MockChannel::new();
    mock.push_ok(1);
    mock.push_data(&DEFAULT_FAP_TABLE);
    assert!(is_default_state(&mut mock).unwrap());

    // A freshly personalized table no longer matches.
    let mut table = DEFAULT_FAP_TABLE;
    table[8] = 0x00; // NDEF contactless read denied
    let mut mock = MockChannel::new();
    mock.push_ok(1);
    mock.push_data(&table);
    assert!(!is_default_state(&mut mock).unwrap());
}
