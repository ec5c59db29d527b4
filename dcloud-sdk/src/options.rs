//! # Call Options
//!
//! Per-call settings attached to the outgoing request: gRPC metadata (headers) and an
//! optional deadline, sent to the server as `grpc-timeout`.
//!
//! Header keys and values are validated when the options are built, so a client call
//! never fails because of malformed options.
use std::str::FromStr;
use std::time::Duration;
use tonic::metadata::{
    MetadataKey, MetadataMap, MetadataValue,
    errors::{InvalidMetadataKey, InvalidMetadataValue},
};

#[derive(thiserror::Error, Debug)]
pub enum CallOptionsError {
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    metadata: MetadataMap,
    timeout: Option<Duration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ASCII metadata entry, replacing any previous value for `key`.
    pub fn header(mut self, key: &str, value: &str) -> Result<Self, CallOptionsError> {
        let meta_key =
            MetadataKey::from_str(key).map_err(|source| CallOptionsError::InvalidMetadataKey {
                key: key.to_string(),
                source,
            })?;
        let meta_value = MetadataValue::from_str(value).map_err(|source| {
            CallOptionsError::InvalidMetadataValue {
                key: key.to_string(),
                source,
            }
        })?;
        self.metadata.insert(meta_key, meta_value);
        Ok(self)
    }

    /// Adds every `(key, value)` pair as a header.
    pub fn headers<I, K, V>(self, headers: I) -> Result<Self, CallOptionsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        headers
            .into_iter()
            .try_fold(self, |opts, (k, v)| opts.header(k.as_ref(), v.as_ref()))
    }

    /// Sets the deadline the server should apply to the call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    pub(crate) fn into_request<T>(self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        *request.metadata_mut() = self.metadata;
        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_and_timeout_end_up_in_the_request() {
        let opts = CallOptions::new()
            .headers([("x-request-id", "42"), ("authorization", "Bearer token")])
            .unwrap()
            .timeout(Duration::from_secs(5));

        let request = opts.into_request(());

        assert_eq!(
            request.metadata().get("x-request-id").unwrap().to_str().unwrap(),
            "42"
        );
        assert_eq!(
            request.metadata().get("authorization").unwrap().to_str().unwrap(),
            "Bearer token"
        );
        assert!(request.metadata().get("grpc-timeout").is_some());
    }

    #[test]
    fn invalid_header_key_is_rejected() {
        let err = CallOptions::new().header("bad key", "value").unwrap_err();

        assert!(matches!(
            err,
            CallOptionsError::InvalidMetadataKey { ref key, .. } if key == "bad key"
        ));
    }

    #[test]
    fn invalid_header_value_is_rejected() {
        let err = CallOptions::new().header("x-key", "line\nbreak").unwrap_err();

        assert!(matches!(err, CallOptionsError::InvalidMetadataValue { .. }));
    }
}
