pub mod cartellino;
pub mod link;
pub mod link_type;
pub mod tree;
