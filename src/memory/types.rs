/*!
 * Memory Types
 * Common types for sub-page allocation
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allocation result
pub type AllocResult<T> = Result<T, AllocError>;

/// Allocator errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum AllocError {
    #[error("Zero-sized allocation")]
    #[diagnostic(code(memory::zero_size))]
    ZeroSize,

    #[error("Allocation of {requested} bytes exceeds page size {page_size}")]
    #[diagnostic(
        code(memory::too_large),
        help("Sub-page allocations never span pages.")
    )]
    TooLarge { requested: usize, page_size: usize },

    #[error("Out of memory: no run of {sub_pages} free sub-pages")]
    #[diagnostic(code(memory::out_of_memory), help("Free existing allocations first."))]
    OutOfMemory { sub_pages: usize },

    #[error("Invalid address: page {page}, offset {offset}")]
    #[diagnostic(code(memory::invalid_address))]
    InvalidAddress { page: usize, offset: usize },

    #[error("Double free: page {page}, sub-page {sub_page}")]
    #[diagnostic(code(memory::double_free))]
    DoubleFree { page: usize, sub_page: usize },

    #[error("Invalid geometry: page {page_size}B, sub-page {sub_page_size}B")]
    #[diagnostic(
        code(memory::invalid_geometry),
        help("Sub-page size must be non-zero and divide the page size.")
    )]
    InvalidGeometry {
        page_size: usize,
        sub_page_size: usize,
    },
}

/// Location of an allocation: page index and first sub-page within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubPageAddr {
    pub page: usize,
    pub offset: usize,
}
