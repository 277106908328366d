//! The two crawl stages.
//!
//! 1. **Discovery** ([`index`]): walk listing pages 1..N in order and collect
//!    an [`ArticleStub`](crate::models::ArticleStub) per article card
//! 2. **Enrichment** ([`enrich`]): fetch every stub's detail page through
//!    [`detail`] with a bounded number in flight, keeping discovery order
//!
//! Discovery failures are fatal. Enrichment failures are logged and the
//! affected article keeps sentinel detail fields.

pub mod detail;
pub mod enrich;
pub mod index;

#[cfg(test)]
pub(crate) mod fake;
