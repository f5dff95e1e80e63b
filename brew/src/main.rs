//! Sequential recipe runner.
//!
//! Reads a recipe choice (argument or one line of stdin), runs the recipe's
//! actions in order against a fresh context, and prints one status line per
//! action.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use brew::core::context::Context;
use brew::core::error::{LookupError, RunError};
use brew::core::recipe::Recipe;
use brew::core::validate::validate_recipe;
use brew::engine::Engine;
use brew::exit_codes;
use brew::io::prompt::prompt_choice;
use brew::io::recipe_book::load_recipe_book;
use brew::io::status::StdoutSink;
use brew::logging;
use brew::select::normalize_choice;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "brew", version, about = "Sequential recipe runner")]
struct Cli {
    /// TOML recipe book merged over the built-in recipes.
    #[arg(long, global = true, env = "BREW_RECIPES")]
    recipes: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a recipe. Prompts on stdin when CHOICE is omitted.
    Run {
        /// Recipe name (case-insensitive).
        choice: Option<String>,
        /// Print the final context as JSON after the status lines.
        #[arg(long)]
        json: bool,
    },
    /// List recipes and their steps.
    List,
    /// List registered actions.
    Actions,
    /// Check that recipes only use known actions and available fields.
    Check {
        /// Recipe to check; all recipes when omitted.
        choice: Option<String>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let recipes = cli.recipes.as_deref();
    match cli.command {
        Command::Run { choice, json } => cmd_run(recipes, choice, json),
        Command::List => cmd_list(recipes),
        Command::Actions => cmd_actions(),
        Command::Check { choice } => cmd_check(recipes, choice),
    }
}

/// Map a failure to its stable exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(run_err) = err.downcast_ref::<RunError>() {
        return match run_err {
            RunError::Lookup(_) => exit_codes::LOOKUP,
            RunError::MissingField(_) => exit_codes::MISSING_FIELD,
        };
    }
    if err.downcast_ref::<LookupError>().is_some() {
        return exit_codes::LOOKUP;
    }
    exit_codes::INVALID
}

fn cmd_run(recipes: Option<&Path>, choice: Option<String>, json: bool) -> Result<()> {
    let book = load_recipe_book(recipes)?;
    let choice = match choice {
        Some(choice) => choice,
        None => prompt_choice(&mut io::stdin().lock(), &mut io::stdout().lock(), &book.names())?,
    };
    debug!(choice = %normalize_choice(&choice), "recipe chosen");

    let engine = Engine::default();
    let ctx = engine
        .run_named(&book, &choice, Context::fresh(), &mut StdoutSink)
        .with_context(|| format!("run recipe '{}'", normalize_choice(&choice)))?;

    if json {
        let rendered = serde_json::to_string(&ctx).context("serialize final context")?;
        println!("{rendered}");
    }
    Ok(())
}

fn cmd_list(recipes: Option<&Path>) -> Result<()> {
    let book = load_recipe_book(recipes)?;
    for (name, recipe) in book.iter() {
        println!("{name}: {recipe}");
    }
    Ok(())
}

fn cmd_actions() -> Result<()> {
    let engine = Engine::default();
    for action in engine.registry().iter() {
        println!("{}: {}", action.name(), action.description());
    }
    Ok(())
}

fn cmd_check(recipes: Option<&Path>, choice: Option<String>) -> Result<()> {
    let book = load_recipe_book(recipes)?;
    let selected: Vec<(String, &Recipe)> = match choice {
        Some(choice) => vec![(normalize_choice(&choice), book.select(&choice)?)],
        None => book
            .iter()
            .map(|(name, recipe)| (name.to_string(), recipe))
            .collect(),
    };

    let engine = Engine::default();
    let available = Context::fresh().present_fields();
    let mut failed = 0;
    for (name, recipe) in selected {
        let errors = validate_recipe(engine.registry(), recipe, &available);
        if errors.is_empty() {
            println!("ok: {name}");
        } else {
            failed += 1;
            println!("fail: {name}\n- {}", errors.join("\n- "));
        }
    }
    if failed > 0 {
        bail!("{failed} recipe(s) failed checks");
    }
    Ok(())
}
