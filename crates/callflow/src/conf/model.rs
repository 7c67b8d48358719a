use serde::{Deserialize, Serialize};

use crate::source::DEFAULT_CHUNK_BYTES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallflowConfig {
    /// Switch log scanned by every query.
    pub log_path: String,
    /// Bytes read from the log per await point.
    pub read_chunk_bytes: usize,
}

impl Default for CallflowConfig {
    fn default() -> Self {
        Self {
            log_path: "/var/log/freeswitch/freeswitch.log".to_string(),
            read_chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }
}
