mod array;
mod inner;
mod traits;


pub use array::DynamicArray;
