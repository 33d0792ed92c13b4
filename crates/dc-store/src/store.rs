//! Channel state persistence.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use dc_core::Channel;
use serde::{Deserialize, Serialize};

use crate::StoreResult;

const STATE_FILE_NAME: &str = ".dryer-channels.json";

/// On-disk form of the committed map, one optional field per channel.
///
/// Fields are declared alphabetically so the pretty-printed file stays
/// key-sorted. Unknown keys in an existing file are ignored; channels absent
/// from the file stay unset and read as 0.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DiskState {
    #[serde(skip_serializing_if = "Option::is_none")]
    blower_vfd: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exhaust_damper: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lower_damper: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    upper_damper: Option<u8>,
}

impl DiskState {
    fn from_committed(committed: &BTreeMap<Channel, u8>) -> Self {
        let mut state = Self::default();
        for (&channel, &value) in committed {
            *state.slot_mut(channel) = Some(value);
        }
        state
    }

    fn into_committed(self) -> BTreeMap<Channel, u8> {
        let mut committed = BTreeMap::new();
        for channel in Channel::ALL {
            if let Some(value) = self.slot(channel) {
                committed.insert(channel, value);
            }
        }
        committed
    }

    fn slot(&self, channel: Channel) -> Option<u8> {
        match channel {
            Channel::LowerDamper => self.lower_damper,
            Channel::UpperDamper => self.upper_damper,
            Channel::BlowerVfd => self.blower_vfd,
            Channel::ExhaustDamper => self.exhaust_damper,
        }
    }

    fn slot_mut(&mut self, channel: Channel) -> &mut Option<u8> {
        match channel {
            Channel::LowerDamper => &mut self.lower_damper,
            Channel::UpperDamper => &mut self.upper_damper,
            Channel::BlowerVfd => &mut self.blower_vfd,
            Channel::ExhaustDamper => &mut self.exhaust_damper,
        }
    }
}

/// Durable mapping of channel to last-committed value.
///
/// Two maps: `committed` is authoritative and persisted; `pending` is the
/// diff not yet flushed to hardware. `set_value` updates both and rewrites
/// the state file before returning.
#[derive(Debug)]
pub struct ChannelStore {
    path: PathBuf,
    committed: BTreeMap<Channel, u8>,
    pending: BTreeMap<Channel, u8>,
}

impl ChannelStore {
    /// Open the store backed by `path`.
    ///
    /// Loads the persisted state if the file exists; otherwise initializes
    /// every channel to its power-on default and persists once, establishing
    /// the file. Pending starts as a full copy of committed so the first
    /// flush after session start programs every channel.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut store = Self {
            path,
            committed: BTreeMap::new(),
            pending: BTreeMap::new(),
        };

        if store.path.is_file() {
            tracing::info!(path = %store.path.display(), "loading channel state");
            store.committed = load_state(&store.path)?;
        } else {
            tracing::info!(path = %store.path.display(), "creating channel state file");
            for channel in Channel::ALL {
                store.committed.insert(channel, channel.default_value());
            }
            store.save()?;
        }

        store.pending = store.committed.clone();
        Ok(store)
    }

    /// Conventional per-user state file location.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STATE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Set a channel value and persist the committed map.
    ///
    /// The in-memory update is applied before the durable write, so reads
    /// keep reflecting the operator's adjustment even when persistence is
    /// degraded; the persistence error still propagates.
    pub fn set_value(&mut self, channel: Channel, value: u8) -> StoreResult<()> {
        self.committed.insert(channel, value);
        self.pending.insert(channel, value);
        self.save()
    }

    /// Committed value for `channel`, or 0 if it was never set.
    pub fn get_value(&self, channel: Channel) -> u8 {
        self.committed.get(&channel).copied().unwrap_or(0)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain the pending diff for a hardware flush.
    pub fn take_pending(&mut self) -> BTreeMap<Channel, u8> {
        std::mem::take(&mut self.pending)
    }

    /// Mark every committed value as pending (session entry).
    pub fn mark_all_pending(&mut self) {
        self.pending = self.committed.clone();
    }

    /// Put a failed frame's entries back into pending.
    ///
    /// Entries written since the frame was drained take precedence, so a
    /// retry never resurrects a stale value.
    pub fn restore_pending(&mut self, entries: BTreeMap<Channel, u8>) {
        for (channel, value) in entries {
            self.pending.entry(channel).or_insert(value);
        }
    }

    /// Rewrite the state file from the committed map.
    ///
    /// Writes to a sibling temp file and renames over the target, so an
    /// interrupted write never leaves a truncated state file behind.
    fn save(&self) -> StoreResult<()> {
        let disk = DiskState::from_committed(&self.committed);
        let json = serde_json::to_string_pretty(&disk)?;

        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn load_state(path: &Path) -> StoreResult<BTreeMap<Channel, u8>> {
    let content = fs::read_to_string(path)?;
    let disk: DiskState = serde_json::from_str(&content)?;
    Ok(disk.into_committed())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dc_store_{name}_{}", std::process::id()));
        dir.join("channels.json")
    }

    #[test]
    fn fresh_store_writes_defaults() {
        let path = temp_state_path("fresh");
        let _ = fs::remove_file(&path);

        let store = ChannelStore::open(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(store.get_value(Channel::LowerDamper), 255);
        assert_eq!(store.get_value(Channel::BlowerVfd), 0);
    }

    #[test]
    fn get_after_set() {
        let path = temp_state_path("get_after_set");
        let _ = fs::remove_file(&path);

        let mut store = ChannelStore::open(&path).unwrap();
        for channel in Channel::ALL {
            store.set_value(channel, 77).unwrap();
            assert_eq!(store.get_value(channel), 77);
        }
    }

    #[test]
    fn take_pending_drains() {
        let path = temp_state_path("take_pending");
        let _ = fs::remove_file(&path);

        let mut store = ChannelStore::open(&path).unwrap();
        store.take_pending();
        assert!(!store.has_pending());

        store.set_value(Channel::BlowerVfd, 40).unwrap();
        let pending = store.take_pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.get(&Channel::BlowerVfd), Some(&40));
        assert!(!store.has_pending());
    }

    #[test]
    fn restore_pending_keeps_newer_writes() {
        let path = temp_state_path("restore_pending");
        let _ = fs::remove_file(&path);

        let mut store = ChannelStore::open(&path).unwrap();
        store.take_pending();

        store.set_value(Channel::BlowerVfd, 40).unwrap();
        let frame = store.take_pending();

        // A newer adjustment lands while the frame is in flight.
        store.set_value(Channel::BlowerVfd, 90).unwrap();
        store.restore_pending(frame);

        let pending = store.take_pending();
        assert_eq!(pending.get(&Channel::BlowerVfd), Some(&90));
    }

    #[test]
    fn disk_state_round_trips_partial_maps() {
        let mut committed = BTreeMap::new();
        committed.insert(Channel::BlowerVfd, 52);
        committed.insert(Channel::LowerDamper, 255);

        let json = serde_json::to_string(&DiskState::from_committed(&committed)).unwrap();
        assert!(json.contains("\"blowerVfd\":52"));
        // Channels never set are omitted from the file.
        assert!(!json.contains("upperDamper"));

        let back: DiskState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_committed(), committed);
    }

    #[test]
    fn no_temp_file_left_after_save() {
        let path = temp_state_path("no_tmp");
        let _ = fs::remove_file(&path);

        let mut store = ChannelStore::open(&path).unwrap();
        store.set_value(Channel::ExhaustDamper, 12).unwrap();

        let mut tmp_name = OsString::from(path.as_os_str());
        tmp_name.push(".tmp");
        assert!(!PathBuf::from(tmp_name).exists());
    }
}
