#[tokio::main]
async fn main() {
    if let Err(err) = wecredit_backend_rust::start_web_server().await {
        tracing::error!("Server failed: {err:?}");
        std::process::exit(1);
    }
}
