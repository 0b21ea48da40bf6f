use hello_lambda::{handler, init_tracing};
use lambda_runtime::{service_fn, Error};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    init_tracing()?;

    if let Err(e) = lambda_runtime::run(service_fn(handler)).await {
        error!("Runtime error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
