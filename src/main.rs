use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

// Import from our modular crates
use bookbot_cli::{
    BookAssistant, display_banner, display_book_count, handle_input_with_history, print_help,
};
use bookbot_core::{BookRecord, VectorStore};
use bookbot_openai::OpenAiClient;
use bookbot_rag::{BookIndexer, LocalVectorStore, QdrantVectorStore, TitleRetriever, load_books};

#[derive(Parser)]
#[command(name = "bookbot")]
#[command(about = "Book recommendation chatbot with RAG and tool-calling", long_about = None)]
struct Cli {
    /// Directory containing the source PDF
    #[arg(short, long, default_value = "files")]
    data_dir: PathBuf,

    /// One-shot query instead of interactive mode
    #[arg(short, long)]
    query: Option<String>,

    /// Number of nearest neighbours to retrieve per query
    #[arg(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Persistence file for the local vector store
    #[arg(long, default_value = "book_vectors.json")]
    store_file: PathBuf,

    /// Use a Qdrant server instead of the local store
    #[arg(long)]
    qdrant_url: Option<String>,

    /// Qdrant collection name
    #[arg(long, default_value = "book_summaries")]
    collection: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize components
    let client = Arc::new(OpenAiClient::from_env()?);

    let books = load_books(&cli.data_dir)?;
    println!("{} Parsed {} book records", "📖".blue(), books.len());

    if let Some(url) = cli.qdrant_url.clone() {
        let store = QdrantVectorStore::connect(
            &url,
            &cli.collection,
            OpenAiClient::EMBEDDING_DIMENSION,
        )
        .await?;
        println!("{} Connected to Qdrant collection '{}'", "✅".green(), cli.collection);
        run(cli, client, Arc::new(store), books).await
    } else {
        let store = LocalVectorStore::with_persistence(&cli.store_file)?;
        println!(
            "{} Using local vector store at '{}'",
            "✅".green(),
            cli.store_file.display()
        );
        run(cli, client, Arc::new(store), books).await
    }
}

async fn run<V: VectorStore + 'static>(
    cli: Cli,
    client: Arc<OpenAiClient>,
    store: Arc<V>,
    books: Vec<BookRecord>,
) -> Result<()> {
    // Upload embeddings to the vector store
    let indexer = BookIndexer::new(client.clone(), store.clone());
    let indexed = indexer.index_books(&books).await?;
    println!("{} Indexed {} book summaries", "✅".green(), indexed);

    let retriever = TitleRetriever::new(client.clone(), store.clone()).with_top_k(cli.top_k);
    let assistant = BookAssistant::new(client, books);

    // Handle one-shot query mode
    if let Some(query) = &cli.query {
        let candidates = retriever.retrieve(query).await?;
        let reply = assistant.answer(query, &candidates).await?;
        println!("{}", reply);
        return Ok(());
    }

    // Interactive mode
    display_banner();

    let mut history = Vec::new();

    loop {
        let input = handle_input_with_history(&mut history).await?;

        if input.is_empty() {
            continue;
        }

        let input_lower = input.to_lowercase();

        // Handle special commands
        if input_lower == "exit" || input_lower == "quit" {
            println!("{}", "👋 Goodbye!".green());
            break;
        }

        if input_lower == "help" {
            print_help();
            continue;
        }

        println!("{} Searching the shelves...", "🔎".blue());

        match retriever.retrieve(&input).await {
            Ok(candidates) => match assistant.answer(&input, &candidates).await {
                Ok(reply) => {
                    println!("{}", reply);
                    display_book_count(store.as_ref()).await;
                }
                Err(e) => {
                    println!("{} Chat failed: {}", "❌".red(), e);
                }
            },
            Err(e) => {
                println!("{} Retrieval failed: {}", "❌".red(), e);
            }
        }
    }

    Ok(())
}
