use clap::{Parser, Subcommand};
use log::debug;
use recipe_finder::{FinderConfig, RecipeSession, SearchError};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by name
    Search {
        /// Name or part of a name, e.g. "chicken"
        query: String,
    },
    /// Type each argument into the search field in turn and print suggestions
    Suggest {
        #[arg(required = true)]
        keystrokes: Vec<String>,
    },
    /// Show a recipe's ingredients and steps
    Show {
        id: String,
        /// Step to highlight (1-based)
        #[arg(short, long, default_value_t = 1)]
        step: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args.command).await {
        Ok(code) => code,
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<ExitCode, SearchError> {
    let config = FinderConfig::load()?;
    let session = RecipeSession::from_config(&config)?;

    match command {
        Command::Search { query } => {
            let results = session.submit(&query).await?;
            if results.is_empty() {
                if let Some(message) = session.search().view().message() {
                    println!("{message}");
                }
            }
            for recipe in results {
                println!("{:>6}  {}  {}", recipe.id, recipe.name, recipe.thumbnail_url);
            }
        }
        Command::Suggest { keystrokes } => {
            for text in &keystrokes {
                session.type_query(text);
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            tokio::time::sleep(config.debounce() + Duration::from_millis(50)).await;

            for suggestion in session.suggest().view().suggestions {
                println!("{:>6}  {}", suggestion.id, suggestion.name);
            }
        }
        Command::Show { id, step } => {
            let recipe = match session.open_recipe(&id).await {
                Ok(recipe) => recipe,
                Err(SearchError::ValidationError) => return Err(SearchError::ValidationError),
                Err(err) => {
                    debug!("{:?}", err);
                    if let Some(message) = session.detail().view().message() {
                        eprintln!("{message}");
                    }
                    return Ok(ExitCode::FAILURE);
                }
            };
            session.detail().go_to_step(step.saturating_sub(1));

            println!("{}\n", recipe.name);
            println!("Ingredients:");
            for ingredient in &recipe.ingredients {
                println!("  - {ingredient}");
            }

            println!("\nInstructions:");
            match session.detail().view().navigator() {
                Some(navigator) if !navigator.is_empty() => {
                    for (index, text) in navigator.steps().iter().enumerate() {
                        let marker = if index == navigator.current_index() { '>' } else { ' ' };
                        println!("{marker} {:>2}. {text}", index + 1);
                    }
                    if let Some(progress) = navigator.progress() {
                        println!("\nStep {progress}");
                    }
                }
                _ => println!("  {}", recipe.instructions_text()),
            }

            if let Some(embed) = recipe.embed_url() {
                println!("\nVideo: {embed}");
            }
        }
    }

    session.teardown();
    Ok(ExitCode::SUCCESS)
}
