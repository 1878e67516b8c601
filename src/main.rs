use chrono::Local;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result, eyre};
use std::path::{Path, PathBuf};
use tasklist::{
    Config, Priority, SqliteStorage, TaskFilter, TaskInput, TaskStore, jsonl, parse_due_date, render,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "tasklist - Persistent task list with filtering")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Directory holding the store (overrides config)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add(TaskArgs),

    /// Replace the title and details of a task
    Edit {
        /// Task id or unique id prefix
        id: String,
        #[command(flatten)]
        task: TaskArgs,
    },

    /// Mark a task completed, or pending again
    Toggle {
        /// Task id or unique id prefix
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task id or unique id prefix
        id: String,
    },

    /// Show every field of a task
    Show {
        /// Task id or unique id prefix
        id: String,
    },

    /// Delete all tasks
    Clear {
        /// Confirm deleting every task
        #[arg(long)]
        yes: bool,
    },

    /// List tasks
    List {
        /// all, pending, completed or high
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Show task counters
    Stats,

    /// Write all tasks to a JSONL file
    Export { path: PathBuf },

    /// Import tasks from a JSONL file, or a JSON array when the extension is .json
    Import { path: PathBuf },

    /// Add the example tasks
    Seed,
}

#[derive(Args)]
struct TaskArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short, long)]
    description: Option<String>,

    /// Category (trabalho, pessoal, estudos, saude, outro, or any other label)
    #[arg(short, long)]
    category: Option<String>,

    /// low, medium or high
    #[arg(short, long)]
    priority: Option<Priority>,

    /// Due date as YYYY-MM-DD
    #[arg(long)]
    due: Option<String>,
}

impl TaskArgs {
    fn into_input(self) -> Result<TaskInput> {
        let mut input = TaskInput::new(self.title);
        if let Some(description) = self.description {
            input = input.description(description);
        }
        if let Some(category) = self.category {
            input = input.category(category);
        }
        if let Some(priority) = self.priority {
            input = input.priority(priority);
        }
        if let Some(due) = self.due {
            input = input.due_date(parse_due_date(&due)?);
        }
        Ok(input)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(store_path) = cli.store_path {
        config.store_path = Some(store_path);
    }

    let storage = SqliteStorage::open(config.store_dir()).context("Failed to open store")?;
    let mut store = TaskStore::open_with_key(storage, config.slot_key.clone());

    if config.seed_when_empty && store.is_empty() {
        store.seed_examples(Local::now().date_naive())?;
        println!("{}", "Example tasks added".blue());
    }

    run(&mut store, &config, cli.command)
}

fn run(store: &mut TaskStore<SqliteStorage>, config: &Config, command: Commands) -> Result<()> {
    let date_format = config.date_format.as_str();

    match command {
        Commands::Add(args) => {
            let task = store.add(args.into_input()?)?;
            println!("{}", "Task added".green());
            println!("{}", render::task_line(&task, date_format));
        }
        Commands::Edit { id, task } => {
            let id = resolve(store, &id)?;
            match store.update(&id, task.into_input()?)? {
                Some(task) => {
                    println!("{}", "Task updated".green());
                    println!("{}", render::task_line(&task, date_format));
                }
                None => println!("No task with id {}", id),
            }
        }
        Commands::Toggle { id } => {
            let id = resolve(store, &id)?;
            match store.toggle_completion(&id)? {
                Some(true) => println!("{}", "Task marked as completed".blue()),
                Some(false) => println!("{}", "Task marked as pending".blue()),
                None => println!("No task with id {}", id),
            }
        }
        Commands::Delete { id } => {
            let id = resolve(store, &id)?;
            if store.delete(&id)? {
                println!("{}", "Task deleted".yellow());
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::Show { id } => {
            let id = resolve(store, &id)?;
            match store.get(&id) {
                Some(task) => print!("{}", render::task_detail(task, date_format)),
                None => println!("No task with id {}", id),
            }
        }
        Commands::Clear { yes } => {
            if store.is_empty() {
                println!("There are no tasks to clear");
            } else if !yes {
                return Err(eyre!(
                    "Refusing to delete all {} tasks without --yes (this cannot be undone)",
                    store.len()
                ));
            } else {
                let removed = store.clear_all()?;
                println!("{}", format!("Removed all {} tasks", removed).red());
            }
        }
        Commands::List { filter } => {
            let filter = TaskFilter::parse_lenient(&filter);
            let tasks = store.filter(filter);
            if tasks.is_empty() {
                println!("{}", render::empty_state(filter));
            }
            for task in tasks {
                println!("{}", render::task_line(task, date_format));
            }
        }
        Commands::Stats => {
            println!("{}", render::stats_line(&store.stats()));
        }
        Commands::Export { path } => {
            jsonl::write_jsonl(&path, store.tasks())
                .wrap_err_with(|| format!("Failed to export to {}", path.display()))?;
            println!("Exported {} tasks to {}", store.len(), path.display());
        }
        Commands::Import { path } => {
            let tasks = read_import(&path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            let added = store.import(tasks)?;
            println!("Imported {} tasks", added);
        }
        Commands::Seed => {
            let added = store.seed_examples(Local::now().date_naive())?;
            println!("{}", format!("Added {} example tasks", added.len()).blue());
        }
    }

    Ok(())
}

fn resolve(store: &TaskStore<SqliteStorage>, fragment: &str) -> Result<String> {
    Ok(store.resolve_id(fragment)?.unwrap_or_else(|| fragment.to_string()))
}

fn read_import(path: &Path) -> tasklist::Result<Vec<tasklist::Task>> {
    if path.extension().and_then(|s| s.to_str()) == Some("json") {
        jsonl::read_json_array(path)
    } else {
        jsonl::read_jsonl(path)
    }
}
