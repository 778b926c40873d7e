use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};

use vocab_engine::builder::build_record;
use vocab_engine::llm::{CompletionBackend, OpenAiBackend};
use vocab_engine::record::LexicalRecord;
use vocab_engine::store::{NotionStore, UpsertOutcome};
use vocab_engine::{stress, tags, trace_init};

#[derive(Parser)]
#[command(name = "vocabtool", about = "Lexical record builder and uploader")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a record for one word or phrase and upsert it
    Add {
        /// English word or phrase to record
        word: String,
    },

    /// Interactively add words until "exit"
    Repl,

    /// Romanize an IPA transcription with stress casing
    Stress {
        /// IPA transcription, optionally /slashed/ or [bracketed]
        ipa: String,
    },

    /// Show the heuristic tags for a word
    Tags {
        /// English word to classify
        word: String,
    },
}

struct Clients {
    backend: OpenAiBackend,
    store: NotionStore,
}

fn env_or_die(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        eprintln!("Error: {name} is not set");
        process::exit(1);
    })
}

fn load_clients() -> Clients {
    Clients {
        backend: OpenAiBackend::new(env_or_die("OPENAI_API_KEY")),
        store: NotionStore::new(
            env_or_die("NOTION_API_KEY"),
            env_or_die("NOTION_DATABASE_ID"),
        ),
    }
}

fn print_record(record: &LexicalRecord) {
    println!("Part of Speech: {}", record.pos.display_label());
    if !record.definition_jp.is_empty() {
        println!("Definition (JP): {}", record.definition_jp);
    }
    if !record.example.is_empty() {
        println!("Example Sentence: {}", record.example);
    }
    if !record.stress.is_empty() {
        println!("Stress: {}", record.stress);
    }
    if !record.ipa.is_empty() {
        println!("IPA: {}", record.ipa);
    }
    if !record.katakana.is_empty() {
        println!("Katakana: {}", record.katakana);
    }
    if !record.tags.is_empty() {
        println!("Tags: {}", record.tags.join(", "));
    }
}

fn add_word(backend: &dyn CompletionBackend, store: &NotionStore, word: &str) -> bool {
    let record = match build_record(backend, word) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error building record for '{word}': {e}");
            return false;
        }
    };
    match store.upsert(&record) {
        Ok(UpsertOutcome::Created) => println!("Added '{}' to the database.", record.word),
        Ok(UpsertOutcome::Updated) => println!("Updated '{}' in the database.", record.word),
        Err(e) => {
            eprintln!("Error upserting '{}': {e}", record.word);
            return false;
        }
    }
    print_record(&record);
    true
}

fn repl(clients: &Clients) {
    let stdin = io::stdin();
    loop {
        print!("word> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word.eq_ignore_ascii_case("exit") {
            break;
        }
        add_word(&clients.backend, &clients.store, word);
        println!();
    }
}

fn main() {
    trace_init::init_tracing(&std::env::temp_dir());

    let cli = Cli::parse();
    match cli.command {
        Command::Add { word } => {
            let clients = load_clients();
            if !add_word(&clients.backend, &clients.store, &word) {
                process::exit(1);
            }
        }
        Command::Repl => {
            let clients = load_clients();
            repl(&clients);
        }
        Command::Stress { ipa } => {
            println!("{}", stress::romanize(&ipa));
        }
        Command::Tags { word } => {
            let picked = tags::heuristic_tags(&word);
            if picked.is_empty() {
                println!("(no tags)");
            } else {
                println!("{}", picked.join(", "));
            }
        }
    }
}
