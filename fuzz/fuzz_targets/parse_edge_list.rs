#![no_main]

use biconn_core::acyclic_path_nodes;
use biconn_core::edge_list::{DuplicatePolicy, parse_edge_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(list) = parse_edge_list(data, DuplicatePolicy::Warn) else {
        return;
    };
    if let (Some(s), Some(t)) = (&list.source, &list.target) {
        let nodes = acyclic_path_nodes(&list.store, s, t).into_nodes();
        assert!(nodes.len() <= list.store.node_count());
    }
});
