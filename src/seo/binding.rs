//! Reactive head binding.
//!
//! Each derived field is a pure function of (config, route, page,
//! overrides). [`SeoBinding`] owns the overrides and the sink; callers
//! hand it the current inputs whenever any of them may have changed, and
//! it pushes new head entries only when the derived metadata differs.

use super::derive::{DerivedMetadata, SeoInputs, SeoOptions, derive};
use super::head::HeadSink;
use super::register;

/// Metadata bound to a head sink for the lifetime of a page.
#[derive(Debug)]
pub struct SeoBinding<S: HeadSink> {
    options: SeoOptions,
    sink: S,
    current: Option<DerivedMetadata>,
    registrations: usize,
}

impl<S: HeadSink> SeoBinding<S> {
    pub fn new(options: SeoOptions, sink: S) -> Self {
        Self {
            options,
            sink,
            current: None,
            registrations: 0,
        }
    }

    /// Re-derive from `inputs`; register when the result changed.
    ///
    /// Returns `true` if the sink was updated.
    pub fn update(&mut self, inputs: &SeoInputs<'_>) -> bool {
        let next = derive(inputs, &self.options);
        if self.current.as_ref() == Some(&next) {
            return false;
        }

        register(&next, &mut self.sink);
        self.current = Some(next);
        self.registrations += 1;
        true
    }

    /// Metadata last pushed to the sink.
    pub fn current(&self) -> Option<&DerivedMetadata> {
        self.current.as_ref()
    }

    /// Number of times the sink was updated.
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    pub fn options(&self) -> &SeoOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
