use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    /// The source directory contained nothing to load.
    #[error("No Parquet files found in '{dir}'")]
    NoSources { dir: PathBuf },

    #[error("Failed to {operation} '{path}': {source}")]
    PathError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read Parquet file '{path}': {source}")]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error("Could not bind to '{addr}': {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },
}

pub type Result<T> = std::result::Result<T, LensError>;

impl LensError {
    pub fn path(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::PathError { operation, path: path.into(), source }
    }

    pub fn parquet(path: impl Into<PathBuf>, source: parquet::errors::ParquetError) -> Self {
        Self::Parquet { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_error_names_operation_and_path() {
        let err = LensError::path(
            "read directory",
            "/no/such/dir",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("read directory"));
        assert!(msg.contains("/no/such/dir"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn no_sources_mentions_directory() {
        let err = LensError::NoSources { dir: PathBuf::from("logs") };
        assert_eq!(err.to_string(), "No Parquet files found in 'logs'");
    }

    #[tokio::test]
    async fn bind_error_keeps_its_source() {
        use std::error::Error as _;
        use warp::Filter;

        // Hold the port so the second bind fails
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let routes = warp::any().map(|| "ok");
        let err = match warp::serve(routes).try_bind_ephemeral(addr) {
            Ok(_) => panic!("bind to a held port succeeded"),
            Err(source) => LensError::Bind { addr, source },
        };
        assert!(err.to_string().starts_with(&format!("Could not bind to '{}'", addr)));
        assert!(err.source().is_some());
    }
}
