use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    mealtrail::run().await
}
