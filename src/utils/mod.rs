pub mod node_index;
