pub mod traits;

// Reference implementation (the no-backend variant's store)
pub mod memory;
