//! External connectivity contract
//!
//! The connectivity graph that groups wire endpoints into logical networks
//! lives outside this crate. The collision index only needs it for one
//! consistency check: both ends of a wire being added must already belong
//! to the same local network.

use serde::{Deserialize, Serialize};

use crate::wire::WireEnd;

/// Identity of one local network partition in the connectivity graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub u64);

/// Resolves a wire endpoint to the local network it belongs to
pub trait NetworkProvider: Send + Sync {
    fn local_network(&self, end: WireEnd) -> NetworkId;
}
