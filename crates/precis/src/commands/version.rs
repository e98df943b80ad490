pub fn run() -> anyhow::Result<()> {
    println!("precis {}", env!("CARGO_PKG_VERSION"));
    println!("Extractive summarization with frequency, tfidf, position and hybrid scoring");
    Ok(())
}
