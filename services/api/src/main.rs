use career_match_api::{format_failure, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", format_failure(&err));
        std::process::exit(1);
    }
}
