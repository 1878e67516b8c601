// Text views of tasks for terminal output

use crate::filter::TaskFilter;
use crate::models::{Priority, Stats, Task};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date, falling back to ISO form when `date_format` is invalid
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        out.clear();
        out.push_str(&date.format(FALLBACK_DATE_FORMAT).to_string());
    }
    out
}

fn priority_badge(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => priority.label().red().bold(),
        Priority::Medium => priority.label().yellow(),
        Priority::Low => priority.label().green(),
    }
}

/// One-line summary: status, title, category, priority, due date, id
pub fn task_line(task: &Task, date_format: &str) -> String {
    let status = if task.completed { "[x]".green() } else { "[ ]".normal() };
    let title = if task.completed {
        task.title.dimmed().strikethrough()
    } else {
        task.title.bold()
    };

    let mut line = format!(
        "{} {} ({}, {})",
        status,
        title,
        task.category.label().cyan(),
        priority_badge(task.priority)
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!(" due {}", format_date(due, date_format)));
    }
    line.push_str(&format!("  {}", task.id.dimmed()));
    line
}

/// Multi-line view of every field
pub fn task_detail(task: &Task, date_format: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", task.title.bold()));
    out.push_str(&format!("  id:        {}\n", task.id));
    out.push_str(&format!(
        "  status:    {}\n",
        if task.completed { "completed" } else { "pending" }
    ));
    out.push_str(&format!("  category:  {}\n", task.category.label()));
    out.push_str(&format!("  priority:  {}\n", priority_badge(task.priority)));
    if let Some(due) = task.due_date {
        out.push_str(&format!("  due:       {}\n", format_date(due, date_format)));
    }
    out.push_str(&format!(
        "  created:   {}\n",
        task.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if !task.description.is_empty() {
        out.push_str(&format!("\n  {}\n", task.description));
    }
    out
}

pub fn stats_line(stats: &Stats) -> String {
    format!(
        "{} total, {} pending, {} completed",
        stats.total.to_string().bold(),
        stats.pending.to_string().yellow(),
        stats.completed.to_string().green()
    )
}

/// Message shown when a view has no tasks
pub fn empty_state(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "No tasks yet. Add your first one with `tasklist add <title>`.",
        _ => "No tasks match the selected filter.",
    }
}
