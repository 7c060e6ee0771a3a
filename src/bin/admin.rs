//! CLI administration tool for the site content.
//!
//! Manages blog posts and events, reviews contact inquiries and moderates
//! testimonials through the same services the website uses.
//!
//! # Usage
//!
//! ```bash
//! # Publish a post
//! cargo run --bin admin -- blog create --title "Launching our AI lab" --content "..."
//!
//! # Events this year matching "summit"
//! cargo run --bin admin -- event list --search summit --period this-year
//!
//! # Demo requests from the past week
//! cargo run --bin admin -- inquiry list --type demo --period past-seven-days
//!
//! # Approve pending testimonials in one batch
//! cargo run --bin admin -- testimonial list --approved false
//! cargo run --bin admin -- testimonial approve 3 4 7
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server.

use site_content::config::{Config, mask_connection_string};
use site_content::domain::entities::{
    BlogPost, BlogPostPatch, Event, EventPatch, InquiryType, NewBlogPost, NewEvent, Rating,
};
use site_content::domain::period::Period;
use site_content::domain::repositories::{
    BlogPostFilter, EventFilter, InquiryFilter, TestimonialFilter,
};
use site_content::site::{ADMIN_INDEX_TITLE, ADMIN_SITE_HEADER, ADMIN_SITE_TITLE};
use site_content::state::AppState;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// CLI tool for managing the site content.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Manage events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Review contact inquiries
    Inquiry {
        #[command(subcommand)]
        action: InquiryAction,
    },

    /// Moderate testimonials
    Testimonial {
        #[command(subcommand)]
        action: TestimonialAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Date range filter shared by every list command.
#[derive(Clone, Copy, Default, ValueEnum)]
enum PeriodArg {
    #[default]
    AnyDate,
    Today,
    PastSevenDays,
    ThisMonth,
    ThisYear,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::AnyDate => Period::AnyDate,
            PeriodArg::Today => Period::Today,
            PeriodArg::PastSevenDays => Period::PastSevenDays,
            PeriodArg::ThisMonth => Period::ThisMonth,
            PeriodArg::ThisYear => Period::ThisYear,
        }
    }
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    search: Option<String>,

    /// Only records from this period
    #[arg(short, long, value_enum, default_value_t)]
    period: PeriodArg,
}

#[derive(Subcommand)]
enum BlogAction {
    /// List posts, newest first
    List(ListArgs),

    /// Show one post
    Show { id: i64 },

    /// Publish a new post (prompts for missing fields)
    Create {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Image path under the media directory, e.g. `blog_images/lab.jpg`
        #[arg(short, long)]
        image: Option<String>,
    },

    /// Change fields of a post
    Update {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long, conflicts_with = "clear_image")]
        image: Option<String>,

        /// Remove the image
        #[arg(long)]
        clear_image: bool,
    },

    /// Delete a post
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum EventAction {
    /// List events by date
    List(ListArgs),

    /// Show one event
    Show { id: i64 },

    /// Create an event (prompts for missing fields)
    Create {
        #[arg(short, long)]
        title: Option<String>,

        /// `YYYY-MM-DD HH:MM` (UTC), `YYYY-MM-DD` or RFC 3339
        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        details: Option<String>,

        #[arg(short, long)]
        image: Option<String>,
    },

    /// Change fields of an event
    Update {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        details: Option<String>,

        #[arg(short, long, conflicts_with = "clear_image")]
        image: Option<String>,

        #[arg(long)]
        clear_image: bool,
    },

    /// Delete an event
    Delete {
        id: i64,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum InquiryAction {
    /// List inquiries, newest first
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only this inquiry type
        #[arg(short = 't', long = "type", value_parser = parse_inquiry_type)]
        inquiry_type: Option<InquiryType>,
    },

    /// Show one inquiry
    Show { id: i64 },

    /// Delete the selected inquiries
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum TestimonialAction {
    /// List testimonials, newest first
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Filter by approval state
        #[arg(short, long)]
        approved: Option<bool>,

        /// Only this star rating
        #[arg(short, long, value_parser = parse_rating)]
        rating: Option<Rating>,
    },

    /// Show one testimonial
    Show { id: i64 },

    /// Approve the selected testimonials
    Approve {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Delete the selected testimonials
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    println!("{}", ADMIN_SITE_HEADER.bright_blue().bold());
    println!();

    let Some(command) = cli.command else {
        println!("{}", ADMIN_INDEX_TITLE.bright_white());
        println!();
        println!(
            "  Run {} to see the available commands.",
            "admin --help".bright_cyan()
        );
        return Ok(());
    };

    let database_url = Config::load_database_url()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let state = AppState::new(Arc::new(pool));

    match command {
        Commands::Blog { action } => handle_blog_action(action, &state).await?,
        Commands::Event { action } => handle_event_action(action, &state).await?,
        Commands::Inquiry { action } => handle_inquiry_action(action, &state).await?,
        Commands::Testimonial { action } => handle_testimonial_action(action, &state).await?,
        Commands::Db { action } => handle_db_action(action, &state).await?,
    }

    Ok(())
}

// ─── Blog ────────────────────────────────────────────────────────────────────

async fn handle_blog_action(action: BlogAction, state: &AppState) -> Result<()> {
    let service = &state.blog_service;

    match action {
        BlogAction::List(args) => {
            let period = Period::from(args.period);
            let now = Utc::now();
            let filter = BlogPostFilter {
                search: args.search,
                published_since: period.since(now),
                published_before: period.until(now),
            };
            let posts = service.search_posts(filter).await?;
            print_posts(&posts);
        }
        BlogAction::Show { id } => {
            let post = service.get_post(id).await?;
            print_post(&post);
        }
        BlogAction::Create {
            title,
            content,
            image,
        } => {
            let new_post = NewBlogPost {
                title: prompt_if_missing(title, "Title")?,
                content: prompt_if_missing(content, "Content")?,
                image,
            };
            let post = service.create_post(new_post).await?;
            success(&format!("Blog post \"{}\" was added successfully.", post));
        }
        BlogAction::Update {
            id,
            title,
            content,
            image,
            clear_image,
        } => {
            let patch = BlogPostPatch {
                title,
                content,
                image: image_change(image, clear_image),
            };
            let post = service.update_post(id, patch).await?;
            success(&format!("Blog post \"{}\" was changed successfully.", post));
        }
        BlogAction::Delete { id, yes } => {
            let post = service.get_post(id).await?;
            if !confirm(&format!("Delete blog post \"{post}\"?"), yes)? {
                return Ok(());
            }
            service.delete_post(id).await?;
            success(&format!("Blog post \"{post}\" was deleted successfully."));
        }
    }

    Ok(())
}

/// Prints posts as a table.
///
/// ```text
///   ID    Title                                      Published          Image
///   ─────────────────────────────────────────────────────────────────────────
///   12    Launching our AI lab                       2025-03-02 09:15   yes
/// ```
fn print_posts(posts: &[BlogPost]) {
    if posts.is_empty() {
        println!("{}", "  No blog posts found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<42} {:<18} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Published".bright_white().bold(),
        "Image".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for post in posts {
        println!(
            "  {:<5} {:<42} {:<18} {}",
            post.id.to_string().bright_black(),
            truncate(&post.title, 40).cyan(),
            post.publication_date.format("%Y-%m-%d %H:%M").to_string(),
            yes_no(post.has_image())
        );
    }

    print_total(posts.len());
}

fn print_post(post: &BlogPost) {
    println!("  {}", post.title.bright_white().bold());
    println!(
        "  Published: {}",
        post.publication_date.format("%Y-%m-%d %H:%M UTC")
    );
    println!("  Image:     {}", post.image.as_deref().unwrap_or("-"));
    println!();
    println!("{}", post.content);
}

// ─── Events ──────────────────────────────────────────────────────────────────

async fn handle_event_action(action: EventAction, state: &AppState) -> Result<()> {
    let service = &state.event_service;

    match action {
        EventAction::List(args) => {
            let period = Period::from(args.period);
            let now = Utc::now();
            let filter = EventFilter {
                search: args.search,
                date_since: period.since(now),
                date_before: period.until(now),
            };
            let events = service.search_events(filter).await?;
            print_events(&events, now);
        }
        EventAction::Show { id } => {
            let event = service.get_event(id).await?;
            print_event(&event, Utc::now());
        }
        EventAction::Create {
            title,
            date,
            location,
            details,
            image,
        } => {
            let title = prompt_if_missing(title, "Title")?;
            let date = prompt_if_missing(date, "Date (YYYY-MM-DD HH:MM, UTC)")?;
            let new_event = NewEvent {
                title,
                event_date: parse_event_date(&date)?,
                location: prompt_if_missing(location, "Location")?,
                details: prompt_if_missing(details, "Details")?,
                image,
            };
            let event = service.create_event(new_event).await?;
            success(&format!("Event \"{}\" was added successfully.", event));
        }
        EventAction::Update {
            id,
            title,
            date,
            location,
            details,
            image,
            clear_image,
        } => {
            let patch = EventPatch {
                title,
                event_date: date.as_deref().map(parse_event_date).transpose()?,
                location,
                details,
                image: image_change(image, clear_image),
            };
            let event = service.update_event(id, patch).await?;
            success(&format!("Event \"{}\" was changed successfully.", event));
        }
        EventAction::Delete { id, yes } => {
            let event = service.get_event(id).await?;
            if !confirm(&format!("Delete event \"{event}\"?"), yes)? {
                return Ok(());
            }
            service.delete_event(id).await?;
            success(&format!("Event \"{event}\" was deleted successfully."));
        }
    }

    Ok(())
}

/// Prints events as a table with their status at `now`.
fn print_events(events: &[Event], now: DateTime<Utc>) {
    if events.is_empty() {
        println!("{}", "  No events found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<32} {:<18} {:<24} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Date".bright_white().bold(),
        "Location".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for event in events {
        let status = if event.is_upcoming_at(now) {
            event.status_at(now).label().green()
        } else {
            event.status_at(now).label().red()
        };

        println!(
            "  {:<5} {:<32} {:<18} {:<24} {}",
            event.id.to_string().bright_black(),
            truncate(&event.title, 30).cyan(),
            event.event_date.format("%Y-%m-%d %H:%M").to_string(),
            truncate(&event.location, 22),
            status
        );
    }

    print_total(events.len());
}

fn print_event(event: &Event, now: DateTime<Utc>) {
    println!("  {}", event.title.bright_white().bold());
    println!("  Date:     {}", event.event_date.format("%Y-%m-%d %H:%M UTC"));
    println!("  Location: {}", event.location);
    println!("  Status:   {}", event.status_at(now).label());
    println!("  Image:    {}", event.image.as_deref().unwrap_or("-"));
    println!();
    println!("{}", event.details);
}

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DD` (midnight) or RFC 3339. Naive
/// values are taken as UTC.
fn parse_event_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Ok(dt.and_utc());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid event date '{value}'"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

// ─── Inquiries ───────────────────────────────────────────────────────────────

async fn handle_inquiry_action(action: InquiryAction, state: &AppState) -> Result<()> {
    let service = &state.inquiry_service;

    match action {
        InquiryAction::List { list, inquiry_type } => {
            let period = Period::from(list.period);
            let now = Utc::now();
            let filter = InquiryFilter {
                search: list.search,
                inquiry_type,
                submitted_since: period.since(now),
                submitted_before: period.until(now),
            };
            let inquiries = service.search_inquiries(filter).await?;

            if inquiries.is_empty() {
                println!("{}", "  No inquiries found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<22} {:<28} {:<22} {:<28} {}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Email".bright_white().bold(),
                "Company".bright_white().bold(),
                "Type".bright_white().bold(),
                "Submitted".bright_white().bold()
            );
            println!("  {}", "─".repeat(125).bright_black());

            for inquiry in &inquiries {
                println!(
                    "  {:<5} {:<22} {:<28} {:<22} {:<28} {}",
                    inquiry.id.to_string().bright_black(),
                    truncate(&inquiry.name, 20).cyan(),
                    truncate(&inquiry.email, 26),
                    truncate(inquiry.company_name.as_deref().unwrap_or("-"), 20),
                    inquiry.inquiry_type.label(),
                    inquiry.submitted_at.format("%Y-%m-%d %H:%M")
                );
            }

            print_total(inquiries.len());
        }
        InquiryAction::Show { id } => {
            let inquiry = service.get_inquiry(id).await?;

            println!("  {}", inquiry.to_string().bright_white().bold());
            println!("  Email:     {}", inquiry.email);
            println!(
                "  Company:   {}",
                inquiry.company_name.as_deref().unwrap_or("-")
            );
            println!("  Type:      {}", inquiry.inquiry_type.label());
            println!(
                "  Submitted: {}",
                inquiry.submitted_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!();
            println!("{}", inquiry.message);
        }
        InquiryAction::Delete { ids, yes } => {
            if !confirm(&format!("Delete {} inquiry(ies)?", ids.len()), yes)? {
                return Ok(());
            }
            let deleted = service.delete_inquiries(&ids).await?;
            success(&format!("Successfully deleted {deleted} inquiry(ies)."));
        }
    }

    Ok(())
}

// ─── Testimonials ────────────────────────────────────────────────────────────

async fn handle_testimonial_action(action: TestimonialAction, state: &AppState) -> Result<()> {
    let service = &state.testimonial_service;

    match action {
        TestimonialAction::List {
            list,
            approved,
            rating,
        } => {
            let period = Period::from(list.period);
            let now = Utc::now();
            let filter = TestimonialFilter {
                search: list.search,
                is_approved: approved,
                rating,
                submitted_since: period.since(now),
                submitted_before: period.until(now),
            };
            let testimonials = service.search_testimonials(filter).await?;

            if testimonials.is_empty() {
                println!("{}", "  No testimonials found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<22} {:<22} {:<7} {:<10} {}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Company".bright_white().bold(),
                "Rating".bright_white().bold(),
                "Approved".bright_white().bold(),
                "Submitted".bright_white().bold()
            );
            println!("  {}", "─".repeat(90).bright_black());

            for t in &testimonials {
                let approved = if t.is_approved {
                    "yes".green()
                } else {
                    "pending".yellow()
                };

                println!(
                    "  {:<5} {:<22} {:<22} {:<7} {:<10} {}",
                    t.id.to_string().bright_black(),
                    truncate(&t.name, 20).cyan(),
                    truncate(t.company.as_deref().unwrap_or("-"), 20),
                    t.rating.stars(),
                    approved,
                    t.submitted_at.format("%Y-%m-%d %H:%M")
                );
            }

            print_total(testimonials.len());
        }
        TestimonialAction::Show { id } => {
            let t = service.get_testimonial(id).await?;

            println!("  {}", t.to_string().bright_white().bold());
            println!("  Company:   {}", t.company.as_deref().unwrap_or("-"));
            println!("  Rating:    {} ({})", t.rating.stars(), t.rating.label());
            println!("  Approved:  {}", yes_no(t.is_approved));
            println!(
                "  Submitted: {}",
                t.submitted_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!();
            println!("{}", t.comment);
        }
        TestimonialAction::Approve { ids } => {
            let approved = service.approve(&ids).await?;
            success(&format!(
                "{approved} testimonial(s) were successfully approved."
            ));
        }
        TestimonialAction::Delete { ids, yes } => {
            if !confirm(&format!("Delete {} testimonial(s)?", ids.len()), yes)? {
                return Ok(());
            }
            let deleted = service.delete(&ids).await?;
            success(&format!("Successfully deleted {deleted} testimonial(s)."));
        }
    }

    Ok(())
}

// ─── Database ────────────────────────────────────────────────────────────────

async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(state.pool.as_ref()).await?;

            println!("{}", "✓ Database connection OK".green().bold());
        }
    }

    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_inquiry_type(value: &str) -> Result<InquiryType, String> {
    value.parse::<InquiryType>().map_err(|_| {
        let codes: Vec<&str> = InquiryType::ALL.iter().map(|t| t.code()).collect();
        format!("expected one of: {}", codes.join(", "))
    })
}

fn parse_rating(value: &str) -> Result<Rating, String> {
    let stars: i64 = value.parse().map_err(|e| format!("{e}"))?;
    Rating::new(stars).map_err(|e| e.to_string())
}

/// `--image` sets the image, `--clear-image` removes it, neither keeps it.
fn image_change(image: Option<String>, clear: bool) -> Option<Option<String>> {
    if clear { Some(None) } else { image.map(Some) }
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::new().with_prompt(prompt).interact_text()?),
    }
}

/// Asks before a destructive change unless `--yes` was given.
fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "✗ Cancelled".red());
    }
    Ok(confirmed)
}

fn success(message: &str) {
    println!();
    println!("{}", format!("✓ {message}").green().bold());
    println!();
}

fn print_total(count: usize) {
    println!();
    println!("  Total: {}", count.to_string().bright_white().bold());
    println!("  {}", ADMIN_SITE_TITLE.bright_black());
    println!();
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".bright_black() }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
