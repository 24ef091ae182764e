// Route handlers for the two keyword operations.

pub mod extract;
pub mod search;
