/// Landing/liveness response, independent of the product store.
pub async fn hello() -> &'static str {
    "Hello world\n"
}
