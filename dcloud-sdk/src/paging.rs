//! # Paging
//!
//! A cursor over the items returned by a `List` call, shared by every client through the
//! [`ListPages`] trait.
//!
//! The cursor is lazy: nothing is sent until the first [`PageIterator::next`]. It then
//! issues exactly **one** call and walks the items of that single response. Page tokens
//! are never sent back, so only the first page of a result set is ever visible.
//!
//! ```text
//! fresh ──next()──► loaded ──next()…──► exhausted
//!   │                                      ▲
//!   └──────── call failed ──► failed       └── empty page
//! ```
//!
//! Failures are sticky: once the call fails, every later operation short-circuits to the
//! same [`CallError`] without touching the network again.
use crate::{error::CallError, options::CallOptions};
use futures_util::{Stream, stream};
use std::{
    collections::VecDeque,
    fmt,
    future::Future,
    ops::{Deref, DerefMut},
};

/// A client exposing a `List`-style call whose response carries a repeated field.
pub trait ListPages {
    type Request;
    type Item;

    /// Performs the call and extracts the listed items from the response.
    fn list_page(
        &self,
        request: Self::Request,
        options: CallOptions,
    ) -> impl Future<Output = Result<Vec<Self::Item>, CallError>>;
}

pub struct PageIterator<C: ListPages> {
    client: C,
    // Consumed by the one and only call, `None` afterwards.
    pending: Option<(C::Request, CallOptions)>,
    err: Option<CallError>,
    requested: usize,
    items: VecDeque<C::Item>,
}

impl<C: ListPages> PageIterator<C> {
    pub fn new(client: C, request: C::Request, options: CallOptions) -> Self {
        Self {
            client,
            pending: Some((request, options)),
            err: None,
            requested: 0,
            items: VecDeque::new(),
        }
    }

    /// Advances to the next item, fetching the page on the first call.
    ///
    /// Returns `false` once the page is exhausted or the call failed; check
    /// [`PageIterator::error`] to tell the two apart.
    pub async fn next(&mut self) -> bool {
        if self.err.is_some() {
            return false;
        }
        if self.items.len() > 1 {
            self.items.pop_front();
            return true;
        }
        self.items.clear();

        let Some((request, options)) = self.pending.take() else {
            return false;
        };

        match self.client.list_page(request, options).await {
            Ok(items) => {
                tracing::debug!(items = items.len(), "fetched page");
                self.items = items.into();
                !self.items.is_empty()
            }
            Err(err) => {
                self.err = Some(err);
                false
            }
        }
    }

    /// Returns the current item.
    ///
    /// # Panics
    ///
    /// If called before a successful [`PageIterator::next`] or after it returned `false`.
    pub fn value(&self) -> &C::Item {
        match self.items.front() {
            Some(item) => item,
            None => panic!("calling value on empty iterator"),
        }
    }

    /// Collects up to `size` items, or every remaining item when `size` is `0`.
    ///
    /// Items gathered before a failure are discarded and the failure is returned.
    pub async fn take(&mut self, size: usize) -> Result<Vec<C::Item>, CallError>
    where
        C::Item: Clone,
    {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        let size = if size == 0 { usize::MAX } else { size };
        let mut this = Remaining::acquire(self, size);
        let mut result = Vec::new();

        while this.requested > 0 && this.next().await {
            this.requested -= 1;
            result.push(this.value().clone());
        }

        match &this.err {
            Some(err) => Err(err.clone()),
            None => Ok(result),
        }
    }

    pub async fn take_all(&mut self) -> Result<Vec<C::Item>, CallError>
    where
        C::Item: Clone,
    {
        self.take(0).await
    }

    /// The failure that stopped the iterator, if any.
    pub fn error(&self) -> Option<&CallError> {
        self.err.as_ref()
    }

    /// Turns the cursor into a stream of items.
    ///
    /// The stream ends with the page, or after yielding the failure once.
    pub fn into_stream(self) -> impl Stream<Item = Result<C::Item, CallError>>
    where
        C::Item: Clone,
    {
        stream::unfold(Some(self), |state| async move {
            let Some(mut iter) = state else {
                return None;
            };

            if iter.next().await {
                let item = iter.value().clone();
                Some((Ok(item), Some(iter)))
            } else {
                iter.err.take().map(|err| (Err(err), None))
            }
        })
    }
}

impl<C: ListPages> fmt::Debug for PageIterator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("started", &self.pending.is_none())
            .field("buffered", &self.items.len())
            .field("err", &self.err)
            .finish_non_exhaustive()
    }
}

/// Holds the take counter of an iterator and zeroes it when dropped, so an early return
/// or a cancelled `take` never leaks a budget into the next call.
struct Remaining<'a, C: ListPages> {
    iter: &'a mut PageIterator<C>,
}

impl<'a, C: ListPages> Remaining<'a, C> {
    fn acquire(iter: &'a mut PageIterator<C>, size: usize) -> Self {
        iter.requested = size;
        Self { iter }
    }
}

impl<C: ListPages> Deref for Remaining<'_, C> {
    type Target = PageIterator<C>;

    fn deref(&self) -> &Self::Target {
        self.iter
    }
}

impl<C: ListPages> DerefMut for Remaining<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.iter
    }
}

impl<C: ListPages> Drop for Remaining<'_, C> {
    fn drop(&mut self) {
        self.iter.requested = 0;
    }
}
