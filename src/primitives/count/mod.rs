mod count;
mod counted;
mod counting;

pub use count::Count;
pub use counted::Counted;
pub use counting::Counting;
