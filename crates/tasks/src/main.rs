//! To-do list CLI
//!
//! Interactive menu over a task list persisted to `tasks.json`. Every
//! mutation saves immediately, so quitting never loses work.

mod store;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use store::{filtered_indices, load_tasks, save_tasks, Task};

const FILE_NAME: &str = "tasks.json";

fn show_menu() {
    println!();
    println!("====== TO-DO LIST APP ======");
    println!("1. View All Tasks");
    println!("2. View Pending Tasks");
    println!("3. View Completed Tasks");
    println!("4. Add Task");
    println!("5. Mark Task as Completed");
    println!("6. Remove Task");
    println!("7. Exit");
}

/// Print `label` and read one trimmed line; `None` means stdin closed.
fn prompt(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

fn view_tasks(tasks: &[Task], completed: Option<bool>) {
    let indices = filtered_indices(tasks, completed);
    if indices.is_empty() {
        let what = match completed {
            Some(false) => "pending tasks",
            Some(true) => "completed tasks",
            None => "tasks",
        };
        println!();
        println!("No {} found.", what);
        return;
    }

    println!();
    println!("Your Tasks:");
    for (n, &i) in indices.iter().enumerate() {
        let mark = if tasks[i].completed { "x" } else { " " };
        println!("{}. {} [{}]", n + 1, tasks[i].title, mark);
    }
}

fn add_task(tasks: &mut Vec<Task>, path: &Path) {
    let Some(title) = prompt("Enter task title: ") else {
        return;
    };
    if title.is_empty() {
        println!("Task title cannot be empty.");
        return;
    }
    tasks.push(Task::new(&title));
    if let Err(e) = save_tasks(path, tasks) {
        eprintln!("{}", e);
    }
    println!("'{}' added successfully!", title);
}

fn mark_completed(tasks: &mut [Task], path: &Path) {
    view_tasks(tasks, Some(false));
    let pending = filtered_indices(tasks, Some(false));
    if pending.is_empty() {
        return;
    }
    let Some(input) = prompt("Enter the number of the task to complete: ") else {
        return;
    };
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= pending.len() => {
            let i = pending[n - 1];
            tasks[i].completed = true;
            if let Err(e) = save_tasks(path, tasks) {
                eprintln!("{}", e);
            }
            println!("'{}' marked as completed!", tasks[i].title);
        }
        Ok(_) => println!("Invalid task number."),
        Err(_) => println!("Please enter a valid number."),
    }
}

fn remove_task(tasks: &mut Vec<Task>, path: &Path) {
    view_tasks(tasks, None);
    if tasks.is_empty() {
        return;
    }
    let Some(input) = prompt("Enter the number of the task to remove: ") else {
        return;
    };
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= tasks.len() => {
            let removed = tasks.remove(n - 1);
            if let Err(e) = save_tasks(path, tasks) {
                eprintln!("{}", e);
            }
            println!("'{}' removed.", removed.title);
        }
        Ok(_) => println!("Invalid task number."),
        Err(_) => println!("Please enter a valid number."),
    }
}

fn main() {
    let path = PathBuf::from(FILE_NAME);
    let mut tasks = match load_tasks(&path) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("{}", e);
            Vec::new()
        }
    };

    loop {
        show_menu();
        let Some(choice) = prompt("Choose an option (1-7): ") else {
            break;
        };
        match choice.as_str() {
            "1" => view_tasks(&tasks, None),
            "2" => view_tasks(&tasks, Some(false)),
            "3" => view_tasks(&tasks, Some(true)),
            "4" => add_task(&mut tasks, &path),
            "5" => mark_completed(&mut tasks, &path),
            "6" => remove_task(&mut tasks, &path),
            "7" => {
                println!("Goodbye! Your tasks are saved.");
                break;
            }
            _ => println!("Invalid option, try again."),
        }
    }
}
