use nbt_perso::constants::{
    BSK_SLOT, CONFIGURATOR_AID, NDEF_FILE, PERSO_AID, TAG_COMM_IF_ENABLE, TAG_GPIO_FUNCTION,
};
use nbt_perso::fap::FileAccessPolicy;
use nbt_perso::protocol::Command;

#[test]
fn full_command_catalogue_encodes_to_documented_bytes() {
    let mut select_app = vec![0x00, 0xA4, 0x04, 0x00, PERSO_AID.len() as u8];
    select_app.extend_from_slice(&PERSO_AID);
    select_app.push(0x00);
    assert_eq!(Command::SelectApplication.encode(), select_app);

    let mut select_configurator = vec![0x00, 0xA4, 0x04, 0x00, CONFIGURATOR_AID.len() as u8];
    select_configurator.extend_from_slice(&CONFIGURATOR_AID);
    select_configurator.push(0x00);
    assert_eq!(Command::SelectConfigurator.encode(), select_configurator);

    assert_eq!(
        Command::SelectFile { file_id: NDEF_FILE }.encode(),
        vec![0x00, 0xA4, 0x00, 0x0C, 0x02, 0xE1, 0x04]
    );

    assert_eq!(
        Command::UpdateBinary {
            offset: 0x01FE,
            data: vec![0xAA, 0xBB],
        }
        .encode(),
        vec![0x00, 0xD6, 0x01, 0xFE, 0x02, 0xAA, 0xBB]
    );

    assert_eq!(
        Command::UpdatePolicy {
            policy: FileAccessPolicy::default_cc(),
        }
        .encode(),
        vec![0x00, 0xD7, 0x00, 0x00, 0x06, 0xE1, 0x03, 0x40, 0x00, 0x40, 0x00]
    );

    assert_eq!(
        Command::ReadPolicyTable.encode(),
        vec![0x00, 0xB7, 0x00, 0x00, 0x00]
    );

    assert_eq!(
        Command::SetConfig {
            tag: TAG_GPIO_FUNCTION,
            value: 0x04,
        }
        .encode(),
        vec![0x00, 0x20, 0xC0, 0x30, 0x01, 0x04]
    );

    assert_eq!(
        Command::SetConfig {
            tag: TAG_COMM_IF_ENABLE,
            value: 0x11,
        }
        .encode(),
        vec![0x00, 0x20, 0xC0, 0x60, 0x01, 0x11]
    );

    assert_eq!(
        Command::PersonalizeData {
            slot: BSK_SLOT,
            data: vec![0x01, 0x02],
        }
        .encode(),
        vec![0x00, 0xE2, 0xA0, 0x02, 0x02, 0x01, 0x02]
    );
}

#[test]
fn configurator_tags_match_device_values() {
    assert_eq!(TAG_GPIO_FUNCTION.as_u16(), 0xC030);
    assert_eq!(TAG_COMM_IF_ENABLE.as_u16(), 0xC060);
}

#[test]
fn instruction_bytes_match_encodings() {
    let commands = [
        Command::SelectApplication,
        Command::SelectFile { file_id: NDEF_FILE },
        Command::ReadPolicyTable,
        Command::PersonalizeData {
            slot: BSK_SLOT,
            data: vec![0x00],
        },
    ];
    for command in &commands {
        assert_eq!(command.encode()[1], command.instruction());
    }
}
