use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use shelfwise::api::{CmdMessage, MessageLevel, PageSummary};
use shelfwise::config::ShelfConfig;
use shelfwise::model::{BookRecord, ReadingStatus};
use shelfwise::view::{PageButton, StatusCounts};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 14;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_books(books: &[BookRecord]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    for book in books {
        let id = format!("{}  ", book.short_id());
        let fixed_width = 2 + id.width() + STATUS_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let label = format!("{} · {}", book.title, book.author);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        let status = format!("{:<width$}", book.status.label(), width = STATUS_WIDTH);

        println!(
            "  {}{}{}{}{}",
            id.yellow(),
            label,
            " ".repeat(padding),
            color_status(&book.status, &status),
            format_time_ago(book.created_at).dimmed()
        );
    }
}

pub fn print_page_footer(page: &PageSummary, counts: &StatusCounts) {
    println!();
    let info = page.info;
    if info.total > 0 {
        println!(
            "{}",
            format!(
                "Showing {}-{} of {} · sorted by {} {}",
                info.start, info.end, info.total, page.sort.column, page.sort.direction
            )
            .dimmed()
        );
    }

    if page.total_pages > 1 {
        let buttons: Vec<String> = page
            .buttons
            .iter()
            .map(|button| match button {
                PageButton::Page(n) if *n == page.current_page => {
                    format!("[{}]", n).bold().to_string()
                }
                PageButton::Page(n) => n.to_string(),
                PageButton::Ellipsis => "…".to_string(),
            })
            .collect();
        println!("Pages: {}", buttons.join(" "));
    }

    let badges: Vec<String> = counts
        .badges()
        .into_iter()
        .map(|(filter, count)| {
            let badge = format!("{} ({})", filter, count);
            if filter == page.status {
                badge.bold().underline().to_string()
            } else {
                badge
            }
        })
        .collect();
    println!("{}", badges.join("  "));

    if !page.query.is_empty() {
        println!("{}", format!("Search: \"{}\"", page.query).dimmed());
    }
}

pub fn print_stats(counts: &StatusCounts) {
    let rows = [
        ("Total", counts.all),
        (ReadingStatus::WantToRead.label(), counts.want_to_read),
        (ReadingStatus::Reading.label(), counts.reading),
        (ReadingStatus::Finished.label(), counts.finished),
    ];
    for (label, count) in rows {
        println!("  {:<14}{:>6}", label, count);
    }
    println!();
    println!(
        "{}",
        format!("{}% of your shelf is finished", counts.finished_percent()).dimmed()
    );
}

pub fn print_config(config: &ShelfConfig) {
    for key in ShelfConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn color_status(status: &ReadingStatus, text: &str) -> ColoredString {
    match status {
        ReadingStatus::Finished => text.green(),
        ReadingStatus::Reading => text.cyan(),
        ReadingStatus::WantToRead => text.normal(),
        ReadingStatus::Other(_) => text.dimmed(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
