pub mod prim;
pub mod spanning_tree;
