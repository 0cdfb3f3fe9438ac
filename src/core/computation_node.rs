// Copyright @yucwang 2021

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Default ID for a node that was not given an explicit one.
pub fn generate_node_id(type_name: &str) -> String {
    let seq = NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}", type_name, seq)
}

/// Identity and description surface shared by everything the scene
/// holds, mainly for logging.
pub trait ComputationNode {
    fn id(&self) -> &str;

    // Output string for a single computation node.
    fn to_string(&self) -> String;
}
