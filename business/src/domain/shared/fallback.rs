use crate::domain::errors::RepositoryError;

/// Where a resolved list actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The store answered with at least one record.
    Remote,
    /// The store answered with zero records; the static catalog was used.
    FallbackAfterEmpty,
    /// The store query failed; the static catalog was used.
    FallbackAfterError,
}

/// A display-ready list plus the provenance the UI needs to disclose it.
///
/// Resolution is total: a page always receives a populated list, never an
/// error. The `fetch_error` flag is the only thing that distinguishes a
/// broken store from an unseeded one.
#[derive(Debug, Clone)]
pub struct ResolvedList<T> {
    pub records: Vec<T>,
    pub source: DataSource,
}

impl<T> ResolvedList<T> {
    pub fn using_remote_data(&self) -> bool {
        self.source == DataSource::Remote
    }

    pub fn fetch_error(&self) -> bool {
        self.source == DataSource::FallbackAfterError
    }
}

/// Applies the fallback policy to a store query outcome.
///
/// - query error: fallback records, `FallbackAfterError`
/// - zero records: fallback records, `FallbackAfterEmpty`
/// - otherwise: the remote records unmodified, `Remote`
pub fn resolve_with_fallback<T>(
    outcome: Result<Vec<T>, RepositoryError>,
    fallback: Vec<T>,
) -> ResolvedList<T> {
    match outcome {
        Err(_) => ResolvedList {
            records: fallback,
            source: DataSource::FallbackAfterError,
        },
        Ok(records) if records.is_empty() => ResolvedList {
            records: fallback,
            source: DataSource::FallbackAfterEmpty,
        },
        Ok(records) => ResolvedList {
            records,
            source: DataSource::Remote,
        },
    }
}
