use mealtrail_primitives::error::ApiError;
use mealtrail_primitives::models::{
    ActivityLogRow, FacetsResponse, LogFilter, LogPageResponse, PageRequest,
};
use tracing::warn;

/// A query the caller must now issue, tagged with the sequence number used
/// to discard superseded responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub seq: u64,
    pub filter: LogFilter,
    pub page: PageRequest,
}

/// View state behind the activity-log table and its dependent filter
/// dropdowns. Selecting a module clears the sub-module selection, so an
/// inconsistent module/sub-module pair is never sent; every filter or
/// page-size change snaps back to the first page. Responses race under
/// rapid filter changes, so each transition hands out a fresh sequence
/// number and only the latest one is ever rendered.
#[derive(Debug)]
pub struct LogViewState {
    module: String,
    sub_module: String,
    page_index: i64,
    page_size: i64,
    loading: bool,
    issued_seq: u64,
    entries: Vec<ActivityLogRow>,
    total_count: i64,
    facets: FacetsResponse,
}

impl LogViewState {
    pub fn new(page_size: i64) -> Self {
        Self {
            module: String::new(),
            sub_module: String::new(),
            page_index: 0,
            page_size,
            loading: false,
            issued_seq: 0,
            entries: Vec::new(),
            total_count: 0,
            facets: FacetsResponse::empty(),
        }
    }

    pub fn set_module(&mut self, module: impl Into<String>) -> PageQuery {
        self.module = module.into();
        self.sub_module.clear();
        self.page_index = 0;
        self.issue()
    }

    pub fn set_sub_module(&mut self, sub_module: impl Into<String>) -> PageQuery {
        self.sub_module = sub_module.into();
        self.page_index = 0;
        self.issue()
    }

    pub fn set_page_index(&mut self, index: i64) -> PageQuery {
        self.page_index = index;
        self.issue()
    }

    pub fn set_page_size(&mut self, size: i64) -> PageQuery {
        self.page_size = size;
        self.page_index = 0;
        self.issue()
    }

    /// Re-issue the current query without changing any selection.
    pub fn refresh(&mut self) -> PageQuery {
        self.issue()
    }

    fn issue(&mut self) -> PageQuery {
        self.issued_seq += 1;
        self.loading = true;
        PageQuery {
            seq: self.issued_seq,
            filter: self.filter(),
            page: PageRequest::new(self.page_index, self.page_size),
        }
    }

    /// The filter the current selections describe; empty strings mean "no
    /// selection".
    pub fn filter(&self) -> LogFilter {
        LogFilter {
            module: (!self.module.is_empty()).then(|| self.module.clone()),
            sub_module: (!self.sub_module.is_empty()).then(|| self.sub_module.clone()),
        }
    }

    /// Feed a page response back in. Returns false when the response was
    /// discarded because a newer query has been issued since; `loading`
    /// stays on until the latest query resolves. A failed fetch renders as
    /// an empty page rather than an error.
    pub fn apply_page(&mut self, seq: u64, result: Result<LogPageResponse, ApiError>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.entries = page.entries;
                self.total_count = page.total_count;
            }
            Err(e) => {
                warn!("activity page fetch failed, showing empty page: {}", e);
                let fallback = LogPageResponse::empty();
                self.entries = fallback.entries;
                self.total_count = fallback.total_count;
            }
        }
        true
    }

    /// A failed facet fetch degrades to empty dropdowns.
    pub fn apply_facets(&mut self, result: Result<FacetsResponse, ApiError>) {
        self.facets = result.unwrap_or_else(|e| {
            warn!("facet fetch failed, showing empty facets: {}", e);
            FacetsResponse::empty()
        });
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn sub_module(&self) -> &str {
        &self.sub_module
    }

    pub fn page_index(&self) -> i64 {
        self.page_index
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[ActivityLogRow] {
        &self.entries
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn facets(&self) -> &FacetsResponse {
        &self.facets
    }

    pub fn total_pages(&self) -> i64 {
        if self.page_size < 1 {
            return 0;
        }
        (self.total_count + self.page_size - 1) / self.page_size
    }
}
