pub mod sorted_edge_mapping;
