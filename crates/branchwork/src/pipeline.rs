//! Collection pipeline: filter, sort, reverse, limit.

use std::cmp::Ordering;
use std::fmt;

/// Item filter predicate.
pub type FilterFn<T> = Box<dyn Fn(&T) -> bool>;

/// Item comparator.
pub type SortFn<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Transform directives applied to a source collection.
///
/// Stages always run in the same order: filter, stable sort, reverse, limit.
/// The pipeline holds no state between runs.
///
/// # Example
///
/// ```rust
/// use branchwork::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .filter(|n: &i32| *n != 4)
///     .sort(|a: &i32, b: &i32| a.cmp(b))
///     .reverse(true)
///     .limit(2);
///
/// let items = [3, 4, 1, 2];
/// let out: Vec<i32> = pipeline.apply(Some(&items[..]), false).into_iter().copied().collect();
/// assert_eq!(out, vec![3, 2]);
/// ```
pub struct Pipeline<T> {
    filter: Option<FilterFn<T>>,
    sort: Option<SortFn<T>>,
    reverse: bool,
    limit: Option<usize>,
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Pipeline {
            filter: None,
            sort: None,
            reverse: false,
            limit: None,
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("filter", &self.filter.is_some())
            .field("sort", &self.sort.is_some())
            .field("reverse", &self.reverse)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<T> Pipeline<T> {
    /// Creates a pipeline with no transforms.
    pub fn new() -> Self {
        Pipeline::default()
    }

    /// Keeps only items for which `filter` returns `true`.
    pub fn filter(mut self, filter: impl Fn(&T) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Stable-sorts items with `sort`.
    pub fn sort(mut self, sort: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.sort = Some(Box::new(sort));
        self
    }

    /// Reverses the sequence after sorting.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Keeps at most `limit` items. Zero means no limit.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` if no transform is configured.
    pub fn is_identity(&self) -> bool {
        self.filter.is_none()
            && self.sort.is_none()
            && !self.reverse
            && self.effective_limit().is_none()
    }

    fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }

    /// Runs the pipeline over `source`.
    ///
    /// No source yields an empty sequence. With `debug` set, one DEBUG event
    /// describes the run.
    pub fn apply<'a>(&self, source: Option<&'a [T]>, debug: bool) -> Vec<&'a T> {
        let Some(source) = source else {
            return Vec::new();
        };

        let mut items: Vec<&'a T> = match &self.filter {
            Some(filter) => source.iter().filter(|item| filter(*item)).collect(),
            None => source.iter().collect(),
        };

        if let Some(sort) = &self.sort {
            items.sort_by(|a, b| sort(*a, *b));
        }

        if self.reverse {
            items.reverse();
        }

        if let Some(limit) = self.effective_limit() {
            items.truncate(limit);
        }

        if debug {
            tracing::debug!(
                original = source.len(),
                processed = items.len(),
                filter = self.filter.is_some(),
                sort = self.sort.is_some(),
                reverse = self.reverse,
                limit = ?self.effective_limit(),
                "collection pipeline"
            );
        }

        items
    }
}
