use crate::types::{FunctionUrlResponse, ResponseHeaders, HELLO_BODY, STATUS_OK};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

/// Builds the one and only response this function ever returns.
pub fn hello_world() -> FunctionUrlResponse {
    FunctionUrlResponse {
        status_code: STATUS_OK,
        headers: ResponseHeaders::default(),
        body: HELLO_BODY.to_string(),
    }
}

/// Lambda entry point for Function URL invocations.
/// The event and the context are logged, but never inspected.
pub async fn handler(event: LambdaEvent<Value>) -> Result<FunctionUrlResponse, Error> {
    let (event, ctx) = event.into_parts();

    info!("Handler invoked, request ID: {}", ctx.request_id);
    debug!("Event: {:?}", event);
    debug!("Context: {:?}", ctx);

    // return `FunctionUrlResponse` (it will be serialized to JSON by the runtime)
    Ok(hello_world())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn invoke_with(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[test]
    fn hello_world_has_fixed_fields() {
        let resp = hello_world();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, "Hello World!!");
        assert_eq!(resp.headers.content_type, "text/plain");
        assert_eq!(resp.headers.access_control_allow_origin, "*");
    }

    #[tokio::test]
    async fn empty_event_returns_hello_world() {
        let resp = handler(invoke_with(json!({}))).await.unwrap();

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "statusCode": 200,
                "headers": {
                    "Content-Type": "text/plain",
                    "Access-Control-Allow-Origin": "*"
                },
                "body": "Hello World!!"
            })
        );
    }

    #[tokio::test]
    async fn null_and_odd_payloads_are_ignored() {
        let expected = hello_world();

        for payload in [
            Value::Null,
            json!("not an object"),
            json!([1, 2, 3]),
            json!({"statusCode": 500, "body": "nope"}),
        ] {
            let resp = handler(invoke_with(payload)).await.unwrap();
            assert_eq!(resp, expected);
        }
    }

    #[tokio::test]
    async fn populated_context_is_ignored() {
        let mut ctx = Context::default();
        ctx.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
        ctx.invoked_function_arn = "arn:aws:lambda:us-east-1:123456789012:function:hello".to_string();

        let resp = handler(LambdaEvent::new(json!({}), ctx)).await.unwrap();
        assert_eq!(resp, hello_world());
    }
}
