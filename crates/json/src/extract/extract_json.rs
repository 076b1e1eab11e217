use crate::RequestContext;
use crate::body::OptionReqBody;
use crate::config::{JsonConfig, is_json_content_type};
use crate::decode::decode;
use crate::error::{BoxError, DecodeError};
use crate::extract::{FromRequest, Json};
use crate::shape::Shape;
use crate::utils::ensure;
use async_trait::async_trait;
use bytes::Bytes;
use http_body::Body as HttpBody;
use http_body_util::{BodyExt, LengthLimitError, Limited};

#[async_trait]
impl<T, B> FromRequest<B> for Json<T>
where
    T: Shape + Send + 'static,
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Error = DecodeError;

    async fn from_request(req: &RequestContext<'_>, body: OptionReqBody<B>) -> Result<Self, Self::Error> {
        let config = JsonConfig::from_request(req);
        ensure!(
            !config.content_type_required() || is_json_content_type(req.headers()),
            DecodeError::UnsupportedMediaType
        );

        let limit = config.max_size();
        let bytes = body.apply(|b| collect_body(b, limit)).await?;

        decode::<T>(&bytes, &config).map(Json)
    }
}

/// Reads the whole body, or up to `limit` bytes of it.
async fn collect_body<B>(body: B, limit: Option<usize>) -> Result<Bytes, DecodeError>
where
    B: HttpBody<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let Some(limit) = limit else {
        return body.collect().await.map(|c| c.to_bytes()).map_err(DecodeError::internal);
    };

    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => Err(DecodeError::TooLarge { limit }),
        Err(e) => Err(DecodeError::internal(e)),
    }
}
