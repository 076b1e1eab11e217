use crate::RequestContext;
use crate::body::OptionReqBody;
use crate::responder::Responder;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

/// Builds a value out of a request, consuming its body when needed.
#[async_trait]
pub trait FromRequest<B>: Sized {
    type Error: Responder + Send;

    async fn from_request(req: &RequestContext<'_>, body: OptionReqBody<B>) -> Result<Self, Self::Error>;
}

#[async_trait]
impl<T, B> FromRequest<B> for Option<T>
where
    T: FromRequest<B> + Send + 'static,
    B: Send + 'static,
{
    type Error = Infallible;

    async fn from_request(req: &RequestContext<'_>, body: OptionReqBody<B>) -> Result<Self, Self::Error> {
        match T::from_request(req, body).await {
            Ok(t) => Ok(Some(t)),
            Err(_) => {
                debug!(uri = %req.uri(), "optional extraction failed, continue without it");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<T, B> FromRequest<B> for Result<T, T::Error>
where
    T: FromRequest<B> + Send + 'static,
    B: Send + 'static,
{
    type Error = Infallible;

    async fn from_request(req: &RequestContext<'_>, body: OptionReqBody<B>) -> Result<Self, Self::Error> {
        Ok(T::from_request(req, body).await)
    }
}
