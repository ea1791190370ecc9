// Kirchenjahr - command line front end
// Bible references, the liturgical calendar and service plans

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

use kirchenjahr::bible;
use kirchenjahr::calendar::{
    self, assign_eg_numbers, find_events_for_date, find_events_in_range, find_next_event,
    find_next_event_from_today, format_event_date, group_by_season_with_label,
    liturgical_color_class, HymnIndex,
};
use kirchenjahr::config;
use kirchenjahr::error::AppError;
use kirchenjahr::models::{ChurchEvent, ServicePlan, Settings};
use kirchenjahr::service::{self, component_config, effective_duration_minutes, format_duration};
use kirchenjahr::utils::{logging, truncate_chars};

#[derive(Debug, Parser)]
#[command(name = "kirchenjahr", version, about = "Church year calendar and service planning")]
struct Cli {
    /// Log at debug level regardless of RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a bible reference such as "Joh 3,16-18".
    Reference {
        #[arg(required = true)]
        text: Vec<String>,
        /// List book names starting with the input instead of parsing it.
        #[arg(long)]
        suggest: bool,
    },
    /// Print the reference formats the parser understands.
    Examples,
    /// Summarise an ICS calendar of the church year.
    Calendar {
        /// ICS file; defaults to `calendar_path` from the settings.
        file: Option<PathBuf>,
        /// Only the next event on or after today (or --from).
        #[arg(long)]
        next: bool,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Only events on this day.
        #[arg(long, conflicts_with_all = ["from", "to", "next"])]
        on: Option<NaiveDate>,
        #[arg(long)]
        by_season: bool,
        /// Print events as JSON.
        #[arg(long)]
        json: bool,
        /// Hymn-book index used to fill in EG numbers.
        #[arg(long)]
        hymn_index: Option<PathBuf>,
    },
    /// Show durations and share texts for a service plan stored as JSON.
    Plan {
        file: PathBuf,
        /// Print the musician and sexton texts as well.
        #[arg(long)]
        share: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = cli.verbose.then_some(LevelFilter::Debug);
    if let Err(e) = logging::init_logging_with_level(level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        logging::log_error_with_context(&e, "kirchenjahr");
        eprintln!("Error: {}", user_message(&e));
        std::process::exit(1);
    }
}

/// Library errors are shown through their safe text; file paths and parser
/// internals stay in the log.
fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<AppError>() {
        Some(app_error) if error.chain().count() > 1 => {
            format!("{}: {}", error, app_error.to_safe_string())
        }
        Some(app_error) => app_error.to_safe_string(),
        None => format!("{:#}", error),
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = config::load_settings().context("Failed to load settings")?;

    match cli.command {
        Command::Reference { text, suggest } => run_reference(&text.join(" "), suggest),
        Command::Examples => {
            for example in bible::examples() {
                println!("{}", example);
            }
            Ok(())
        }
        Command::Calendar {
            file,
            next,
            from,
            to,
            on,
            by_season,
            json,
            hymn_index,
        } => {
            let file = file
                .or_else(|| settings.calendar_path.clone())
                .context("No calendar file given and no calendar_path configured")?;
            let hymn_index = hymn_index.or_else(|| settings.hymn_index_path.clone());
            let filter = EventFilter { next, from, to, on };
            run_calendar(&file, hymn_index.as_deref(), filter, by_season, json, &settings)
        }
        Command::Plan { file, share } => run_plan(&file, share, &settings),
    }
}

fn run_reference(input: &str, suggest: bool) -> Result<()> {
    if suggest {
        let suggestions = bible::suggestions(input);
        if suggestions.is_empty() {
            println!("Keine Vorschläge für {:?}", input);
        }
        for suggestion in suggestions {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    let reference = bible::parse_required(input)?;
    println!("{}", reference.normalized);
    println!("  Buch:   {}", reference.book);
    println!("  Kapitel: {}", reference.chapter);
    match reference.verse_end {
        Some(end) => println!("  Verse:  {}-{}", reference.verse_start, end),
        None => println!("  Vers:   {}", reference.verse_start),
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct EventFilter {
    next: bool,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    on: Option<NaiveDate>,
}

impl EventFilter {
    fn apply<'a>(&self, events: &'a [ChurchEvent]) -> Vec<&'a ChurchEvent> {
        if let Some(day) = self.on {
            return find_events_for_date(events, day);
        }
        if self.next {
            let next = match self.from {
                Some(from) => find_next_event(events, from),
                None => find_next_event_from_today(events),
            };
            return next.into_iter().collect();
        }
        match (self.from, self.to) {
            (None, None) => events.iter().collect(),
            (from, to) => find_events_in_range(
                events,
                from.unwrap_or(NaiveDate::MIN),
                to.unwrap_or(NaiveDate::MAX),
            ),
        }
    }
}

fn run_calendar(
    file: &Path,
    hymn_index: Option<&Path>,
    filter: EventFilter,
    by_season: bool,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let mut events = calendar::read_calendar_file(file)
        .with_context(|| format!("Failed to read calendar {}", file.display()))?;
    info!("Loaded {} events from {}", events.len(), file.display());

    if let Some(path) = hymn_index {
        let index = HymnIndex::from_file(path)
            .with_context(|| format!("Failed to read hymn index {}", path.display()))?;
        let assigned = assign_eg_numbers(&mut events, &index);
        info!("Assigned {} EG numbers from {} titles", assigned, index.len());
    }

    let selected: Vec<ChurchEvent> = filter.apply(&events).into_iter().cloned().collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("Keine Termine gefunden");
        return Ok(());
    }

    if by_season {
        for (season, group) in group_by_season_with_label(&selected, &settings.unknown_season_label) {
            println!("{} ({})", season, group.len());
            for event in group {
                print_event_line(event);
            }
            println!();
        }
    } else if filter.next {
        for event in &selected {
            print_event_details(event);
        }
    } else {
        for event in &selected {
            print_event_line(event);
        }
    }

    Ok(())
}

fn print_event_line(event: &ChurchEvent) {
    let color = event.liturgical_color.as_deref().unwrap_or("-");
    println!(
        "  {}  {:<40} {}",
        event.date.format("%d.%m.%Y"),
        truncate_chars(&event.summary, 40),
        color
    );
}

fn print_event_details(event: &ChurchEvent) {
    println!("{}", event.summary);
    println!("{}", format_event_date(event.date));

    let class = liturgical_color_class(event.liturgical_color.as_deref());
    let fields = [
        ("Farbe", event.liturgical_color.as_deref().map(|c| format!("{} ({:?})", c, class))),
        ("Zeit", event.season.clone()),
        ("Wochenspruch", event.weekly_verse.clone()),
        ("Psalm", event.psalm.clone()),
        ("AT-Lesung", event.old_testament_reading.clone()),
        ("Epistel", event.epistle.clone()),
        ("Evangelium", event.gospel.clone()),
        ("Predigttext", event.sermon_text.clone()),
        ("Wochenlied", event.hymn.clone()),
        ("EG", eg_numbers(event)),
        ("Link", event.url.clone()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {:<13} {}", format!("{}:", label), value);
        }
    }

    if let Some(perikopen) = &event.perikopen {
        println!("  Perikopen:");
        for (series, text) in perikopen {
            println!("    {:<4} {}", series, text);
        }
    }
}

fn eg_numbers(event: &ChurchEvent) -> Option<String> {
    let numbers: Vec<&str> = [event.hymn1_eg.as_deref(), event.hymn2_eg.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    (!numbers.is_empty()).then(|| numbers.join(" / "))
}

fn run_plan(file: &Path, share: bool, settings: &Settings) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read service plan {}", file.display()))?;
    let mut plan: ServicePlan = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse service plan {}", file.display()))?;
    plan.components.sort_by_key(|c| c.order_position);
    service::ordering::renumber(&mut plan.components);

    let wpm = settings.words_per_minute;
    println!("{} - {}", plan.title, format_event_date(plan.date));
    for component in &plan.components {
        let label = component_config(component.component_type).label;
        let detail = component
            .hymn_number
            .as_deref()
            .or(component.bible_reference.as_deref())
            .unwrap_or("");
        println!(
            "  {:>2}. {:<22} {:<18} {:>7}",
            component.order_position + 1,
            truncate_chars(&component.title, 22),
            if detail.is_empty() { label } else { detail },
            format_duration(effective_duration_minutes(component, wpm))
        );
    }

    let summary = service::summarize(&plan.components, wpm);
    println!();
    println!("Gesamtdauer: {}", format_duration(summary.total_minutes));
    println!("davon berechnet: {}", summary.calculated_display());

    if share {
        println!();
        println!("{}", service::musician_list(&plan, wpm));
        println!();
        println!("{}", service::sexton_list(&plan, wpm));
    }

    Ok(())
}
