// Request body accumulation

use anyhow::Context;
use bytes::{Buf, BufMut};
use futures::{Stream, StreamExt};

use crate::{GatewayError, Result};

/// Concatenate a body stream into one UTF-8 string.
///
/// Chunks are appended in arrival order. The read stops with
/// `PayloadTooLarge` as soon as the total would pass `limit`, and with
/// `Internal` if the stream yields an error before it ends.
pub async fn read_body<S, B, E>(stream: S, limit: usize) -> Result<String>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: Buf,
    E: std::error::Error + Send + Sync + 'static,
{
    futures::pin_mut!(stream);

    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("request body stream failed")?;
        if body.len() + chunk.remaining() > limit {
            return Err(GatewayError::PayloadTooLarge { limit });
        }
        body.put(chunk);
    }

    String::from_utf8(body).map_err(|_| GatewayError::bad_request("request body is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::stream;
    use std::io;

    fn chunks(parts: &[&'static str]) -> impl Stream<Item = std::result::Result<Bytes, io::Error>> {
        stream::iter(
            parts
                .iter()
                .map(|p| Ok(Bytes::from_static(p.as_bytes())))
                .collect::<Vec<_>>(),
        )
    }

    #[tokio::test]
    async fn test_concatenates_in_order() {
        let body = read_body(chunks(&["{\"query\":", " \"{ message }\"", "}"]), 1024)
            .await
            .unwrap();
        assert_eq!(body, "{\"query\": \"{ message }\"}");
    }

    #[tokio::test]
    async fn test_empty_stream_is_empty_body() {
        let body = read_body(chunks(&[]), 1024).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_stream_error_is_internal() {
        let items: Vec<std::result::Result<Bytes, io::Error>> = vec![
            Ok(Bytes::from_static(b"{\"query\"")),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away")),
            Ok(Bytes::from_static(b"}")),
        ];
        let err = read_body(stream::iter(items), 1024).await.unwrap_err();
        assert!(matches!(err, GatewayError::Internal(_)));
    }

    #[tokio::test]
    async fn test_limit_is_inclusive() {
        let body = read_body(chunks(&["abcd", "efgh"]), 8).await.unwrap();
        assert_eq!(body, "abcdefgh");

        let err = read_body(chunks(&["abcd", "efgh", "i"]), 8).await.unwrap_err();
        assert!(matches!(err, GatewayError::PayloadTooLarge { limit: 8 }));
    }

    #[test]
    fn test_invalid_utf8_is_bad_request() {
        let items: Vec<std::result::Result<Bytes, io::Error>> =
            vec![Ok(Bytes::from_static(&[0x7b, 0xff, 0x7d]))];
        let err = tokio_test::block_on(read_body(stream::iter(items), 1024)).unwrap_err();
        assert!(matches!(err, GatewayError::BadRequest(_)));
    }
}
