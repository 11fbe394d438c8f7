mod collection;

pub use collection::{DrainSorted, EmptyCollection, OrderedCollection};
