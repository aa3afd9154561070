// nbt-perso/src/flows/policy.rs

use log::debug;

use crate::cc::build_cc_payload;
use crate::constants::{CC_FILE, CC_WRITE_OFFSET, DEFAULT_FAP_TABLE};
use crate::fap::{FileAccessPolicy, PolicySet};
use crate::protocol::{execute, Command};
use crate::transport::Channel;
use crate::Result;

/// Apply a complete policy assignment: update all seven policy table
/// entries in fixed order, then rebuild the CC payload from the
/// proprietary-file policies so both encodings stay consistent.
///
/// The CC file's own policy normally forbids writing it, so the rebuild
/// runs as an unlock/write/re-lock triad. If a step fails after the
/// unlock, the tag is left with the permissive CC policy; that gap is
/// inherent to the device's command set, which has no transaction
/// primitive.
pub fn apply_access_policies(channel: &mut dyn Channel, policies: &PolicySet) -> Result<()> {
    debug!("applying access policies for 7 files");
    execute(channel, &Command::SelectApplication)?;
    for policy in policies.in_update_order() {
        execute(
            channel,
            &Command::UpdatePolicy { policy: *policy },
        )?;
    }
    write_cc_file(channel, policies)
}

/// Rebuild and write the CC payload for the four proprietary files.
fn write_cc_file(channel: &mut dyn Channel, policies: &PolicySet) -> Result<()> {
    let [file1, file2, file3, file4] = policies.proprietary();
    let payload = build_cc_payload(file1, file2, file3, file4);

    debug!("rewriting CC payload ({} bytes)", payload.len());
    execute(channel, &Command::SelectApplication)?;
    execute(
        channel,
        &Command::UpdatePolicy {
            policy: FileAccessPolicy::cc_unlock(),
        },
    )?;
    execute(channel, &Command::SelectFile { file_id: CC_FILE })?;
    execute(
        channel,
        &Command::UpdateBinary {
            offset: CC_WRITE_OFFSET,
            data: payload.to_vec(),
        },
    )?;
    execute(
        channel,
        &Command::UpdatePolicy {
            policy: FileAccessPolicy::default_cc(),
        },
    )?;
    Ok(())
}

/// Read the raw policy table bytes for comparison against the factory
/// pattern. Read-only; never mutates the tag.
pub fn read_policy_table(channel: &mut dyn Channel) -> Result<Vec<u8>> {
    execute(channel, &Command::SelectApplication)?;
    let response = execute(channel, &Command::ReadPolicyTable)?;
    Ok(response.data)
}

/// A tag is in default state iff its policy table reads back exactly as
/// the factory pattern.
pub fn is_default_state(channel: &mut dyn Channel) -> Result<bool> {
    let table = read_policy_table(channel)?;
    Ok(table[..] == DEFAULT_FAP_TABLE[..])
}
