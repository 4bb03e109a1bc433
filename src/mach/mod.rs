/*!
## Rust Machine Module

This Rust module is the address space and tree-walking evaluator for Integ.

*/

/// Default limit on allocated cells.
pub const MAX_CELLS: usize = 1 << 24;

mod device;
mod memory;
mod operation;
mod runtime;

pub use device::Buffer;
pub use device::Device;
pub use memory::Memory;
pub use operation::Operation;
pub use runtime::Config;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
