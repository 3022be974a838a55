pub mod fixtures;
pub mod shards;
