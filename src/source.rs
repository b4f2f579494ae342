use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use indexmap::IndexMap;

/// Default page size for [`ChunkedFileSource`].
pub const DEFAULT_PAGE_LEN: usize = 1_000_000;

/// Rough byte budget for the page cache; the page count limit derives from it.
const CACHE_BUDGET: usize = 2_000_000;

/// Random-access read-only view over the parser input.
///
/// `at` must accept arbitrary offsets and return `0` at or past the end of
/// the input; the parser relies on that sentinel instead of bounds checks.
/// Reads take `&mut self` because implementations may maintain a cache.
pub trait ByteSource {
    fn len(&self) -> usize;

    fn at(&mut self, offset: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for &[u8] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&mut self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn at(&mut self, offset: usize) -> u8 {
        self.get(offset).copied().unwrap_or(0)
    }
}

/// Page-cached random access over a seekable file.
///
/// Pages are fetched lazily on first touch. When the cache exceeds
/// `max(2, 2_000_000 / page_len)` pages the oldest fetched page is evicted,
/// never the page just fetched. A read failure yields an empty page, which
/// the parser observes as end-of-input.
pub struct ChunkedFileSource {
    file: File,
    len: usize,
    page_len: usize,
    max_pages: usize,
    pages: IndexMap<usize, Vec<u8>>,
}

impl ChunkedFileSource {
    /// Wrap an already-open file. `page_len` values below 2 select the
    /// default page size.
    pub fn new(mut file: File, page_len: usize) -> io::Result<Self> {
        let page_len = if page_len < 2 {
            DEFAULT_PAGE_LEN
        } else {
            page_len
        };
        let len = file.seek(SeekFrom::End(0))? as usize;
        Ok(Self {
            file,
            len,
            page_len,
            max_pages: (CACHE_BUDGET / page_len).max(2),
            pages: IndexMap::new(),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P, page_len: usize) -> io::Result<Self> {
        Self::new(File::open(path)?, page_len)
    }

    pub fn page_len(&self) -> usize {
        self.page_len
    }

    fn fetch(&mut self, page_index: usize) {
        if self.pages.contains_key(&page_index) {
            return;
        }
        let mut buf = vec![0u8; self.page_len];
        let mut filled = 0usize;
        if self
            .file
            .seek(SeekFrom::Start((page_index * self.page_len) as u64))
            .is_ok()
        {
            loop {
                match self.file.read(&mut buf[filled..]) {
                    Ok(0) => break,
                    Ok(n) => {
                        filled += n;
                        if filled == buf.len() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(_) => break,
                }
            }
        }
        buf.truncate(filled);
        self.pages.insert(page_index, buf);
        while self.pages.len() > self.max_pages {
            let oldest = self.pages.get_index(0).map(|(&k, _)| k);
            match oldest {
                Some(k) if k != page_index => {
                    self.pages.shift_remove(&k);
                }
                _ => break,
            }
        }
    }

    /// Write bytes at an arbitrary offset, invalidating any cached pages
    /// the write touches. Used by external tooling, never by the parser.
    pub fn write_at(&mut self, offset: usize, bytes: &[u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset as u64))?;
        self.file.write_all(bytes)?;
        self.len = self.len.max(offset + bytes.len());
        let first = offset / self.page_len;
        let last = (offset + bytes.len()).saturating_sub(1) / self.page_len;
        for page_index in first..=last {
            self.pages.shift_remove(&page_index);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn cached_page_count(&self) -> usize {
        self.pages.len()
    }
}

impl ByteSource for ChunkedFileSource {
    fn len(&self) -> usize {
        self.len
    }

    fn at(&mut self, offset: usize) -> u8 {
        if offset >= self.len {
            return 0;
        }
        let page_index = offset / self.page_len;
        let in_page = offset % self.page_len;
        self.fetch(page_index);
        self.pages
            .get(&page_index)
            .and_then(|page| page.get(in_page))
            .copied()
            .unwrap_or(0)
    }
}
