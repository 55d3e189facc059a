//! Per-token records of inclusive suffixes and compound hyphens.
//!
//! Storage is always present. When tracking is disabled it keeps zero
//! capacity and every record call is a no-op. When enabled, the lists grow
//! geometrically on demand with `try_reserve_exact`, so an allocation
//! failure is reported to the caller instead of aborting.

use thiserror::Error;

/// Capacity of a list on its first growth.
const INITIAL_CAPACITY: usize = 10;

/// Tracking storage could not grow.
///
/// The cursor that returned this error is left as it was before the call,
/// so the call can be retried once memory is available.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrackingError {
    /// Growing a tracking list failed.
    #[error("failed to grow {what} tracking storage to {requested} entries")]
    Alloc {
        /// Which list (`suffix` or `hyphen`).
        what: &'static str,
        /// Capacity that was requested.
        requested: usize,
    },
}

/// Absolute code-point span of an inclusive suffix, separator included.
///
/// For `auteur-rice-x-s` the span covers `-rice-x-s`: `start` is the
/// offset of the first separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SuffixSpan {
    /// Offset of the separator.
    pub start: usize,
    /// Offset one past the last character of the suffix.
    pub end: usize,
}

impl SuffixSpan {
    /// Length in code points.
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span is empty (never the case for recorded spans).
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.end == self.start
    }
}

/// List lengths at a point in time, for rollback.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Mark {
    suffixes: usize,
    hyphens: usize,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Tracking {
    enabled: bool,
    suffixes: Vec<SuffixSpan>,
    hyphens: Vec<usize>,
    #[cfg(test)]
    fail_growth: bool,
}

impl Tracking {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    #[inline]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Forget all records, keeping the allocated capacity.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.suffixes.clear();
        self.hyphens.clear();
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            suffixes: self.suffixes.len(),
            hyphens: self.hyphens.len(),
        }
    }

    pub(crate) fn rollback(&mut self, mark: Mark) {
        self.suffixes.truncate(mark.suffixes);
        self.hyphens.truncate(mark.hyphens);
    }

    /// Drop the records taken before `mark`, keeping the later ones.
    pub(crate) fn discard_before(&mut self, mark: Mark) {
        self.suffixes.drain(..mark.suffixes);
        self.hyphens.drain(..mark.hyphens);
    }

    pub(crate) fn record_suffix(&mut self, start: usize, end: usize) -> Result<(), TrackingError> {
        if !self.enabled {
            return Ok(());
        }
        let fail = self.growth_fails();
        reserve_one(&mut self.suffixes, "suffix", fail)?;
        self.suffixes.push(SuffixSpan { start, end });
        Ok(())
    }

    pub(crate) fn record_hyphen(&mut self, pos: usize) -> Result<(), TrackingError> {
        if !self.enabled {
            return Ok(());
        }
        let fail = self.growth_fails();
        reserve_one(&mut self.hyphens, "hyphen", fail)?;
        self.hyphens.push(pos);
        Ok(())
    }

    #[inline]
    pub(crate) fn suffixes(&self) -> &[SuffixSpan] {
        &self.suffixes
    }

    #[inline]
    pub(crate) fn hyphens(&self) -> &[usize] {
        &self.hyphens
    }

    /// Allocated capacity of the suffix and hyphen lists.
    #[cfg(test)]
    pub(crate) fn capacities(&self) -> (usize, usize) {
        (self.suffixes.capacity(), self.hyphens.capacity())
    }

    /// Make every subsequent growth fail, as if the allocator were exhausted.
    #[cfg(test)]
    pub(crate) fn set_fail_growth(&mut self, fail: bool) {
        self.fail_growth = fail;
    }

    #[cfg(test)]
    fn growth_fails(&self) -> bool {
        self.fail_growth
    }

    #[cfg(not(test))]
    #[inline]
    #[allow(clippy::unused_self)]
    fn growth_fails(&self) -> bool {
        false
    }
}

/// Make room for one more entry, doubling the capacity when full.
fn reserve_one<T>(list: &mut Vec<T>, what: &'static str, fail: bool) -> Result<(), TrackingError> {
    if list.len() < list.capacity() {
        return Ok(());
    }
    let additional = list.capacity().max(INITIAL_CAPACITY);
    let requested = list.capacity() + additional;
    if fail {
        return Err(TrackingError::Alloc { what, requested });
    }
    list.try_reserve_exact(additional)
        .map_err(|_| TrackingError::Alloc { what, requested })
}
