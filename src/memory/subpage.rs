/*!
 * Sub-Page Allocator
 * First-fit allocation of contiguous sub-pages within fixed-size pages
 */

use super::types::{AllocError, AllocResult, SubPageAddr};
use crate::core::limits::{DEFAULT_PAGE_SIZE, DEFAULT_SUB_PAGE_SIZE};
use tracing::debug;

/// Bitmap allocator over `page_count` pages of `page_size` bytes
///
/// Each page is split into `page_size / sub_page_size` sub-pages. Requests
/// are rounded up to whole sub-pages and placed at the first run of free
/// sub-pages found, scanning pages in order. Allocations never span pages.
#[derive(Debug, Clone)]
pub struct SubPageAllocator {
    page_size: usize,
    sub_page_size: usize,
    per_page: usize,
    // Flattened bitmap: page-major, `true` = in use
    used: Vec<bool>,
}

impl SubPageAllocator {
    pub fn new(page_size: usize, sub_page_size: usize, page_count: usize) -> AllocResult<Self> {
        if sub_page_size == 0 || page_size < sub_page_size || page_size % sub_page_size != 0 {
            return Err(AllocError::InvalidGeometry {
                page_size,
                sub_page_size,
            });
        }

        let per_page = page_size / sub_page_size;
        Ok(Self {
            page_size,
            sub_page_size,
            per_page,
            used: vec![false; per_page * page_count],
        })
    }

    /// Allocator with default 4KB pages split into 256B sub-pages
    pub fn with_pages(page_count: usize) -> Self {
        let per_page = DEFAULT_PAGE_SIZE / DEFAULT_SUB_PAGE_SIZE;
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sub_page_size: DEFAULT_SUB_PAGE_SIZE,
            per_page,
            used: vec![false; per_page * page_count],
        }
    }

    /// Reserve `size` bytes
    pub fn allocate(&mut self, size: usize) -> AllocResult<SubPageAddr> {
        let needed = self.sub_pages_for(size)?;

        for (page, bitmap) in self.used.chunks_mut(self.per_page).enumerate() {
            let mut run = 0;
            for idx in 0..bitmap.len() {
                if bitmap[idx] {
                    run = 0;
                    continue;
                }
                run += 1;
                if run == needed {
                    let offset = idx + 1 - needed;
                    bitmap[offset..=idx].fill(true);
                    debug!(page, offset, sub_pages = needed, "sub-pages allocated");
                    return Ok(SubPageAddr { page, offset });
                }
            }
        }

        Err(AllocError::OutOfMemory { sub_pages: needed })
    }

    /// Release an allocation of `size` bytes at `addr`
    ///
    /// The whole range is checked before any sub-page is released.
    pub fn free(&mut self, addr: SubPageAddr, size: usize) -> AllocResult<()> {
        let count = self.sub_pages_for(size)?;
        if addr.page >= self.page_count() || addr.offset + count > self.per_page {
            return Err(AllocError::InvalidAddress {
                page: addr.page,
                offset: addr.offset,
            });
        }

        let start = addr.page * self.per_page + addr.offset;
        let range = &mut self.used[start..start + count];
        if let Some(pos) = range.iter().position(|in_use| !in_use) {
            return Err(AllocError::DoubleFree {
                page: addr.page,
                sub_page: addr.offset + pos,
            });
        }

        range.fill(false);
        debug!(page = addr.page, offset = addr.offset, sub_pages = count, "sub-pages freed");
        Ok(())
    }

    fn sub_pages_for(&self, size: usize) -> AllocResult<usize> {
        if size == 0 {
            return Err(AllocError::ZeroSize);
        }
        if size > self.page_size {
            return Err(AllocError::TooLarge {
                requested: size,
                page_size: self.page_size,
            });
        }
        Ok(size.div_ceil(self.sub_page_size))
    }

    pub fn page_count(&self) -> usize {
        self.used.len() / self.per_page
    }

    pub fn sub_pages_per_page(&self) -> usize {
        self.per_page
    }

    /// Free sub-pages across all pages
    pub fn free_sub_pages(&self) -> usize {
        self.used.iter().filter(|in_use| !**in_use).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up_to_sub_pages() {
        let mut alloc = SubPageAllocator::new(1024, 128, 1).unwrap();
        let addr = alloc.allocate(129).unwrap();
        assert_eq!(addr, SubPageAddr { page: 0, offset: 0 });
        assert_eq!(alloc.free_sub_pages(), 6);
    }

    #[test]
    fn test_first_fit_moves_to_next_page() {
        let mut alloc = SubPageAllocator::new(512, 128, 2).unwrap();
        alloc.allocate(384).unwrap();
        let addr = alloc.allocate(256).unwrap();
        assert_eq!(addr, SubPageAddr { page: 1, offset: 0 });
    }

    #[test]
    fn test_reuses_freed_hole() {
        let mut alloc = SubPageAllocator::new(512, 128, 1).unwrap();
        let a = alloc.allocate(128).unwrap();
        let _b = alloc.allocate(128).unwrap();
        alloc.free(a, 128).unwrap();
        assert_eq!(alloc.allocate(100).unwrap(), a);
    }

    #[test]
    fn test_rejects_bad_requests() {
        let mut alloc = SubPageAllocator::with_pages(1);
        assert_eq!(alloc.allocate(0), Err(AllocError::ZeroSize));
        assert!(matches!(
            alloc.allocate(DEFAULT_PAGE_SIZE + 1),
            Err(AllocError::TooLarge { .. })
        ));
        assert!(SubPageAllocator::new(1000, 300, 1).is_err());
    }

    #[test]
    fn test_double_free_detected() {
        let mut alloc = SubPageAllocator::new(512, 128, 1).unwrap();
        let a = alloc.allocate(128).unwrap();
        alloc.free(a, 128).unwrap();
        assert_eq!(
            alloc.free(a, 128),
            Err(AllocError::DoubleFree { page: 0, sub_page: 0 })
        );
    }
}
