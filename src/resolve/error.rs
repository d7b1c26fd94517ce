use thiserror::Error;

use super::client::LookupError;

/// Why a molecule name could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The name denotes a bare element or isotope. Nuclide requests must go
    /// through the nuclide API; they are never cached by the molecule cache.
    #[error("'{name}' denotes a nuclide, not a molecule; use the nuclide API instead")]
    NameIsNuclide { name: String },

    /// The external lookup failed (network, non-success response, unusable
    /// body). Nothing is cached, so a later call retries from scratch.
    #[error("cannot resolve '{name}': {source}")]
    LookupUnavailable {
        name: String,
        #[source]
        source: LookupError,
    },
}

impl ResolveError {
    /// The name the failed resolution was asked for.
    pub fn name(&self) -> &str {
        match self {
            ResolveError::NameIsNuclide { name } => name,
            ResolveError::LookupUnavailable { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_offending_name() {
        let err = ResolveError::NameIsNuclide {
            name: "hydrogen".to_string(),
        };
        assert!(err.to_string().contains("'hydrogen'"));
        assert_eq!(err.name(), "hydrogen");

        let err = ResolveError::LookupUnavailable {
            name: "wader".to_string(),
            source: LookupError::Status {
                url: "http://example.invalid/wader/formula".to_string(),
                status: 404,
            },
        };
        assert!(err.to_string().contains("'wader'"));
        assert_eq!(err.name(), "wader");
    }
}
