//! Command execution over the two dashboard stores.
//!
//! # Responsibility
//! - Map parsed commands to store calls.
//! - Own user-facing notice text; the core only returns typed errors.

use crate::command::{Command, TaskFilter, HELP};
use dashboard_core::{
    ScheduleError, ScheduleEvent, ScheduleStore, Task, TaskError, TaskListQuery, TaskListStore,
};
use log::warn;

/// Title + description pair shown after an action, as the web UI's toasts did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const TASK_ADDED: Notice = Notice {
        title: "Task Added",
        description: "Your task has been added successfully",
    };
    pub const TASK_REQUIRED: Notice = Notice {
        title: "Task Required",
        description: "Please enter a task description",
    };
    pub const TASK_DELETED: Notice = Notice {
        title: "Task Deleted",
        description: "Your task has been deleted",
    };
    pub const EVENT_ADDED: Notice = Notice {
        title: "Event Added",
        description: "Your event has been added to the timetable",
    };
    pub const MISSING_INFORMATION: Notice = Notice {
        title: "Missing Information",
        description: "Please fill in all event details",
    };
    pub const INVALID_TIME: Notice = Notice {
        title: "Invalid Time",
        description: "Pick an hourly slot between 9:00 and 17:00",
    };
    pub const EVENT_DELETED: Notice = Notice {
        title: "Event Deleted",
        description: "Your event has been removed from the timetable",
    };

    fn render(self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// Result of running one command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Outcome {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn notice(notice: Notice) -> Self {
        Self::lines(vec![notice.render()])
    }
}

#[derive(Default)]
pub struct Dashboard {
    tasks: TaskListStore,
    schedule: ScheduleStore,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Help => Outcome::lines(vec![HELP.to_string()]),
            Command::Quit => Outcome {
                lines: Vec::new(),
                quit: true,
            },
            Command::TaskAdd { priority, title } => match self.tasks.add(&title, priority) {
                Ok(task) => Outcome::lines(vec![Notice::TASK_ADDED.render(), task_line(&task)]),
                Err(TaskError::EmptyTitle) => Outcome::notice(Notice::TASK_REQUIRED),
                Err(err) => failure(&err),
            },
            Command::TaskToggle(id) => match self.tasks.toggle(id) {
                Ok(task) => Outcome::lines(vec![task_line(&task)]),
                Err(err) if err.is_not_found() => Outcome::lines(vec![format!("no task {id}")]),
                Err(err) => failure(&err),
            },
            // The notice fires whether or not the id existed, as the web UI did.
            Command::TaskDelete(id) => match self.tasks.delete(id) {
                Ok(_) => Outcome::notice(Notice::TASK_DELETED),
                Err(err) => failure(&err),
            },
            Command::TaskList(filter) => {
                let query = match filter {
                    TaskFilter::All => TaskListQuery::default(),
                    TaskFilter::Done => TaskListQuery::completed(),
                    TaskFilter::Pending => TaskListQuery::pending(),
                };
                match self.tasks.list_filtered(&query) {
                    Ok(tasks) => Outcome::lines(tasks.iter().map(task_line).collect()),
                    Err(err) => failure(&err),
                }
            }
            Command::TaskStats => match self.tasks.stats() {
                Ok(stats) => Outcome::lines(vec![
                    format!("Total Tasks: {}", stats.total),
                    format!("Completed: {}", stats.completed),
                    format!("In Progress: {}", stats.pending),
                    format!("Productivity: {}%", stats.completion_percent),
                ]),
                Err(err) => failure(&err),
            },
            Command::EventAdd { day, time, title } => {
                match self.schedule.add(&title, &time, Some(day)) {
                    Ok(event) => {
                        Outcome::lines(vec![Notice::EVENT_ADDED.render(), event_line(&event)])
                    }
                    Err(ScheduleError::EmptyTitle | ScheduleError::EmptyTime) => {
                        Outcome::notice(Notice::MISSING_INFORMATION)
                    }
                    Err(ScheduleError::InvalidTime(_)) => Outcome::notice(Notice::INVALID_TIME),
                    Err(err) => failure(&err),
                }
            }
            Command::EventAt { day, time } => match self.schedule.events_at(day, time) {
                Ok(events) => Outcome::lines(events.iter().map(event_line).collect()),
                Err(err) => failure(&err),
            },
            Command::EventList => match self.schedule.list() {
                Ok(events) => Outcome::lines(events.iter().map(event_line).collect()),
                Err(err) => failure(&err),
            },
            Command::EventDelete(id) => match self.schedule.delete(id) {
                Ok(true) => Outcome::notice(Notice::EVENT_DELETED),
                Ok(false) => Outcome::lines(vec![format!("no event {id}")]),
                Err(err) => failure(&err),
            },
            Command::Grid => match self.schedule.week_grid() {
                Ok(grid) => Outcome::lines(
                    grid.rows
                        .iter()
                        .map(|row| {
                            let cells: Vec<String> = row
                                .cells
                                .iter()
                                .map(|cell| {
                                    let titles: Vec<&str> =
                                        cell.events.iter().map(|e| e.title.as_str()).collect();
                                    format!("{}=[{}]", cell.day, titles.join(", "))
                                })
                                .collect();
                            format!("{:>5} {}", row.time.to_string(), cells.join(" "))
                        })
                        .collect(),
                ),
                Err(err) => failure(&err),
            },
        }
    }
}

fn failure(err: &dyn std::error::Error) -> Outcome {
    warn!("event=command_failed module=cli status=error error={err}");
    Outcome::lines(vec![format!("error: {err}")])
}

fn task_line(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{mark}] {} ({}) {}", task.title, task.priority, task.id)
}

fn event_line(event: &ScheduleEvent) -> String {
    format!(
        "{} {} {} {}",
        event.day, event.time, event.title, event.id
    )
}

#[cfg(test)]
mod tests {
    use super::{Dashboard, Notice};
    use crate::command::parse_line;

    fn run(dashboard: &mut Dashboard, line: &str) -> Vec<String> {
        let command = parse_line(line).unwrap().unwrap();
        dashboard.execute(command).lines
    }

    #[test]
    fn task_add_reports_notice_and_blank_title_warns() {
        let mut dashboard = Dashboard::new();

        let added = run(&mut dashboard, "task add high Buy milk");
        assert_eq!(added[0], "Task Added: Your task has been added successfully");
        assert!(added[1].starts_with("[ ] Buy milk (high)"));

        let blank = run(&mut dashboard, "task add low");
        assert_eq!(
            blank,
            vec!["Task Required: Please enter a task description".to_string()]
        );
        assert_eq!(run(&mut dashboard, "task list").len(), 1);
    }

    #[test]
    fn missing_event_time_reports_missing_information() {
        let mut dashboard = Dashboard::new();
        let lines = run(&mut dashboard, "event add monday");
        assert_eq!(lines, vec![format!(
            "{}: {}",
            Notice::MISSING_INFORMATION.title,
            Notice::MISSING_INFORMATION.description
        )]);
        assert!(run(&mut dashboard, "event list").is_empty());
    }

    #[test]
    fn event_round_trip_through_grid() {
        let mut dashboard = Dashboard::new();
        let added = run(&mut dashboard, "event add mon 9:00 Math class");
        assert_eq!(added[0], "Event Added: Your event has been added to the timetable");

        let at = run(&mut dashboard, "event at monday 09:00");
        assert_eq!(at.len(), 1);
        assert!(at[0].starts_with("Monday 9:00 Math class"));
        assert!(run(&mut dashboard, "event at tuesday 9:00").is_empty());

        let grid = run(&mut dashboard, "grid");
        assert_eq!(grid.len(), 9);
        assert!(grid[0].contains("Monday=[Math class]"));
    }

    #[test]
    fn stats_follow_toggles() {
        let mut dashboard = Dashboard::new();
        let added = run(&mut dashboard, "task add Write report");
        let id = added[1].rsplit(' ').next().unwrap().to_string();
        run(&mut dashboard, &format!("task toggle {id}"));

        let stats = run(&mut dashboard, "task stats");
        assert_eq!(stats[1], "Completed: 1");
        assert_eq!(stats[3], "Productivity: 100%");
    }
}
