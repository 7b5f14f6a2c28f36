#[tokio::main]
async fn main() {
    payroll_backend::run().await;
}
