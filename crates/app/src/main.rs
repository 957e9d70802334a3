use std::fmt;

use g3_core::catalog::{self, Greeting, StepText};
use g3_core::model::{Checkpoint, Language, LanguageError, PageId, PageSnapshot, StepId, WordPair};
use g3_core::progress;
use services::{AppServices, QuizMix, StepPresenter, TutorialEvent};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingCommand,
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    UnknownEvent(String),
    InvalidStep { raw: String },
    Language(LanguageError),
    InvalidMix { raw: String },
    InvalidWord { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingCommand => write!(f, "missing command"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::UnknownEvent(name) => write!(f, "unknown event: {name}"),
            ArgsError::InvalidStep { raw } => write!(f, "unknown step: {raw}"),
            ArgsError::Language(err) => write!(f, "{err}"),
            ArgsError::InvalidMix { raw } => write!(f, "invalid quiz mix: {raw}"),
            ArgsError::InvalidWord { raw } => {
                write!(f, "expected english=telugu, got: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [--db <sqlite_url>] status   [--page <page>] [--start] [--reading]");
    eprintln!("  app [--db <sqlite_url>] show     [--page <page>] [--start] [--reading]");
    eprintln!("  app [--db <sqlite_url>] event    <event> [step] [--page <page>] [--start] [--reading]");
    eprintln!("  app [--db <sqlite_url>] language <english|telugu> [--page <page>]");
    eprintln!("  app [--db <sqlite_url>] reset");
    eprintln!("  app [--db <sqlite_url>] quiz     <translation|passage|mixed> <english=telugu>...");
    eprintln!();
    eprintln!("Pages: home, story-page, vault-page, quiz-page, or a location like /wordVault.html");
    eprintln!();
    eprintln!("Events:");
    eprintln!("  comic-opened, book-opened, word-clicked, popup-closed, story-completed,");
    eprintln!("  words-added, step-completed <step>, next <step>, escape, tag-created,");
    eprintln!("  template-created, quiz-completed, acknowledge");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://g3.sqlite3");
    eprintln!("  --page home");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  G3_DB_URL, G3_AI_BASE_URL, G3_AI_API_KEY, G3_AI_MODEL, RUST_LOG");
}

#[derive(Debug)]
enum Command {
    Status,
    Show,
    Event(TutorialEvent),
    Language(Language),
    Reset,
    Quiz { mix: QuizMix, words: Vec<WordPair> },
}

impl Command {
    fn parse(positional: Vec<String>) -> Result<Self, ArgsError> {
        let mut rest = positional.into_iter();
        let name = rest.next().ok_or(ArgsError::MissingCommand)?;
        let command = match name.as_str() {
            "status" => Self::Status,
            "show" => Self::Show,
            "reset" => Self::Reset,
            "event" => {
                let event = rest.next().ok_or(ArgsError::MissingValue { flag: "event" })?;
                Self::Event(parse_event(&event, &mut rest)?)
            }
            "language" => {
                let raw = rest.next().ok_or(ArgsError::MissingValue { flag: "language" })?;
                Self::Language(raw.parse().map_err(ArgsError::Language)?)
            }
            "quiz" => {
                let raw = rest.next().ok_or(ArgsError::MissingValue { flag: "quiz" })?;
                let mix = parse_mix(&raw)?;
                let words = rest.by_ref().map(|raw| parse_word(&raw)).collect::<Result<_, _>>()?;
                Self::Quiz { mix, words }
            }
            _ => return Err(ArgsError::UnknownCommand(name)),
        };
        if let Some(extra) = rest.next() {
            return Err(ArgsError::UnknownArg(extra));
        }
        Ok(command)
    }
}

fn parse_event(
    name: &str,
    rest: &mut impl Iterator<Item = String>,
) -> Result<TutorialEvent, ArgsError> {
    let mut step = |flag: &'static str| -> Result<StepId, ArgsError> {
        let raw = require_value(rest, flag)?;
        StepId::from_key(&raw).ok_or(ArgsError::InvalidStep { raw })
    };
    Ok(match name {
        "comic-opened" => TutorialEvent::ComicOpened,
        "book-opened" => TutorialEvent::BookOpened,
        "word-clicked" => TutorialEvent::WordClicked,
        "popup-closed" => TutorialEvent::PopupClosed,
        "story-completed" => TutorialEvent::StoryCompleted,
        "words-added" => TutorialEvent::WordsAddedToVault,
        "step-completed" => TutorialEvent::StepCompleted(step("step-completed")?),
        "next" => TutorialEvent::NextClicked(step("next")?),
        "escape" => TutorialEvent::EscapePressed,
        "tag-created" => TutorialEvent::TagCreated,
        "template-created" => TutorialEvent::TemplateCreated,
        "quiz-completed" => TutorialEvent::QuizCompleted,
        "acknowledge" => TutorialEvent::CompletionAcknowledged,
        _ => return Err(ArgsError::UnknownEvent(name.to_string())),
    })
}

fn parse_mix(raw: &str) -> Result<QuizMix, ArgsError> {
    match raw {
        "translation" => Ok(QuizMix::Translation),
        "passage" => Ok(QuizMix::Passage),
        "mixed" => Ok(QuizMix::Mixed),
        _ => Err(ArgsError::InvalidMix {
            raw: raw.to_string(),
        }),
    }
}

fn parse_word(raw: &str) -> Result<WordPair, ArgsError> {
    let (english, telugu) = raw.split_once('=').ok_or_else(|| ArgsError::InvalidWord {
        raw: raw.to_string(),
    })?;
    if english.trim().is_empty() {
        return Err(ArgsError::InvalidWord {
            raw: raw.to_string(),
        });
    }
    Ok(WordPair::new(english.trim(), telugu.trim()))
}

fn parse_page(raw: &str) -> PageId {
    match PageId::parse(raw) {
        PageId::Unknown => PageId::from_location(raw),
        page => page,
    }
}

struct Args {
    db_url: String,
    page: PageSnapshot,
    command: Command,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("G3_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://g3.sqlite3".into(), normalize_sqlite_url);
        let mut page = PageSnapshot::new(PageId::Home);
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--page" => {
                    let value = require_value(args, "--page")?;
                    page.page = parse_page(&value);
                }
                "--start" => page.start_control = true,
                "--reading" => page.reading_marker = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        Ok(Self {
            db_url,
            page,
            command: Command::parse(positional)?,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Prints tutorial output to the terminal.
struct ConsolePresenter;

impl StepPresenter for ConsolePresenter {
    fn request_language(&mut self, prompt: &Greeting) {
        println!("{}", prompt.title);
        println!("{}", prompt.body);
        for language in [Language::English, Language::Telugu] {
            println!("  [{}] app language {language}", catalog::language_label(language));
        }
    }

    fn welcome(&mut self, greeting: &Greeting) {
        println!("{}", greeting.title);
        println!("{}", greeting.body);
    }

    fn show(&mut self, step: StepId, text: &StepText) {
        println!();
        println!("{} ({step})", text.title);
        println!("  {}", text.content);
        if let Some(target) = step.target() {
            println!("  -> {} [{target}]", text.action);
        } else {
            println!("  -> {}", text.action);
        }
        if step.has_next_button() {
            println!("  [next] app event next {step}");
        } else if step.completes_on_target_click() {
            println!("  [done] app event step-completed {step}");
        }
    }

    fn clear(&mut self) {
        debug!("tutorial cleared");
    }

    fn celebrate(&mut self, text: &StepText, finish_label: &str) {
        println!();
        println!("{}", text.title);
        println!("  {}", text.content);
        println!("  [{finish_label}]");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url).await?;

    match args.command {
        Command::Status => {
            let store = services.progress();
            let checkpoints = store.load_checkpoints_or_default().await;
            let language = store.load_language_or_default().await;
            println!("language: {language}");
            println!(
                "progress: {}/{}",
                checkpoints.set_count(),
                Checkpoint::ALL.len()
            );
            for checkpoint in checkpoints.reached() {
                println!("  {checkpoint}");
            }
            let stage = progress::stage_name(&args.page, &checkpoints).unwrap_or("none");
            match progress::next_step(&args.page, &checkpoints) {
                Some(step) => println!("next on {}: {step} (stage {stage})", args.page.page),
                None => println!("next on {}: nothing (stage {stage})", args.page.page),
            }
        }
        Command::Show => {
            let mut engine = services.tutorial_engine(ConsolePresenter);
            let state = engine.init(args.page).await;
            if engine.current_step().is_none() {
                println!("state: {state:?}, nothing to show");
            }
        }
        Command::Event(event) => {
            let mut engine = services.tutorial_engine(ConsolePresenter);
            engine.init(args.page).await;
            let step = engine.handle(event).await;
            println!();
            match step {
                Some(step) => println!("state: {:?}, showing {step}", engine.state()),
                None => println!("state: {:?}, nothing shown", engine.state()),
            }
        }
        Command::Language(language) => {
            let mut engine = services.tutorial_engine(ConsolePresenter);
            engine.init(args.page).await;
            engine.handle(TutorialEvent::LanguageChosen(language)).await;
        }
        Command::Reset => {
            let mut engine = services.tutorial_engine(ConsolePresenter);
            engine.init(args.page).await;
            engine.handle(TutorialEvent::Reset).await;
        }
        Command::Quiz { mix, words } => {
            let quiz = services.quiz();
            let mut rng = rand::rng();
            let questions = quiz.generate_questions(&words, mix, &mut rng).await;
            if questions.is_empty() {
                println!("no questions: add words with a Telugu translation");
            }
            for (idx, question) in questions.iter().enumerate() {
                println!();
                if let Some(passage) = question.passage.as_deref() {
                    println!("{passage}");
                }
                println!("{}. {}", idx + 1, question.prompt);
                for (opt_idx, option) in question.options.iter().enumerate() {
                    let mark = if *option == question.correct { '*' } else { ' ' };
                    println!("  {mark} {}) {option}", opt_idx + 1);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
