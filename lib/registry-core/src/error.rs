use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Catalog query that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogQuery {
    Routes,
    InternalRoutes,
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogQuery::Routes => f.write_str("routes"),
            CatalogQuery::InternalRoutes => f.write_str("internal routes"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{context}: {source}")]
    Catalog {
        context: &'static str,
        query: CatalogQuery,
        #[source]
        source: anyhow::Error,
    },

    #[error("not implemented. use InstancesByPort instead")]
    NotImplemented,
}

impl CoreError {
    pub fn catalog(context: &'static str, query: CatalogQuery, source: anyhow::Error) -> Self {
        CoreError::Catalog {
            context,
            query,
            source,
        }
    }

    /// The catalog query behind this error, if any
    pub fn query(&self) -> Option<CatalogQuery> {
        match self {
            CoreError::Catalog { query, .. } => Some(*query),
            CoreError::NotImplemented => None,
        }
    }
}
