use std::io::{self, BufRead, Write};

use docchat_chat::{BackendClient, ChatSession};
use docchat_core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let backend_url = config.backend_url();
    println!("📄 docchat — chat with your documents");
    println!("Backend: {backend_url}");
    println!("(empty line or 'sair' to quit)\n");

    let mut session = ChatSession::new(BackendClient::new(backend_url));
    if let Some(greeting) = session.transcript().last() {
        println!("assistente: {}\n", greeting.text);
    }

    let stdin = io::stdin();
    loop {
        print!("você: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() || input.eq_ignore_ascii_case("sair") {
            break;
        }
        let reply = session.submit(input).await;
        println!("assistente: {reply}\n");
    }
    Ok(())
}
