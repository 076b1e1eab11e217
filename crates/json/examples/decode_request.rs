use bytes::Bytes;
use http::Request;
use http_body_util::{BodyExt, Full};
use serde::Deserialize;
use strict_json::{JsonConfig, Shape, handle_json};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Debug)]
struct Order {
    item: String,
    quantity: u32,
}

impl Shape for Order {}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let bodies = [
        r#"{"item": "coffee", "quantity": 2}"#,
        r#"{"item": "coffee", "quantity": "two"}"#,
        r#"{"item": "coffee", "quantity": 2, "discount": 100}"#,
        r#"{"item": "coffee", "quantity": 2}{"item": "tea", "quantity": 1}"#,
        r#"{"item": "coffee""#,
        "",
    ];

    for body in bodies {
        let mut request = Request::post("/orders").body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap();
        request.extensions_mut().insert(JsonConfig::new().limit(4 * 1024));

        let response = handle_json(request, |order: Order| async move {
            info!(item = %order.item, quantity = order.quantity, "order accepted");
            format!("ordered {} x {}", order.quantity, order.item)
        })
        .await;

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        info!(%status, response = %String::from_utf8_lossy(&bytes), request = body, "handled request");
    }
}
