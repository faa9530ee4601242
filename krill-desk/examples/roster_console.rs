// krill-desk/examples/roster_console.rs
// Line-oriented shell driving the desk controller against a live backend.
//
// Usage:
//   cargo run --example roster_console [base_url]
//   KRILL_BASE_URL=http://localhost:8080 cargo run --example roster_console

use std::io::{BufRead, Write};

use krill_client::ClientConfig;
use krill_desk::{
    Desk, Employee, Field, Intent, ListState, Notification, NotificationLevel,
};
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let base_url = std::env::args().nth(1).unwrap_or_else(|| {
        std::env::var("KRILL_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
    });
    tracing::info!(%base_url, "connecting to roster backend");

    let mut desk = Desk::new(&ClientConfig::new(&base_url));
    let mut notifications = desk.subscribe();

    desk.handle(Intent::Load).await;
    print_notifications(&mut notifications);
    print_state(&desk);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print_state(&desk),
            "list" | "reload" => desk.handle(Intent::Load).await,
            "add" => desk.handle(Intent::AddClicked).await,
            "edit" => match parts.next() {
                Some(id) => desk.handle(Intent::EditClicked(id.to_string())).await,
                None => println!("usage: edit <id>"),
            },
            "set" => match (parts.next().and_then(parse_field), parts.next()) {
                (Some(field), Some(first)) => {
                    let mut value = first.to_string();
                    for word in parts {
                        value.push(' ');
                        value.push_str(word);
                    }
                    desk.handle(Intent::FieldChanged(field, value)).await;
                }
                _ => println!(
                    "usage: set <name|email|password|role|about|phone|pic> <value>"
                ),
            },
            "submit" => desk.handle(Intent::Submit).await,
            "cancel" => desk.handle(Intent::CancelForm).await,
            "delete" => match parts.next() {
                Some(id) => {
                    desk.handle(Intent::DeleteClicked(id.to_string())).await;
                    println!("confirm with 'confirm', abort with 'dismiss'");
                }
                None => println!("usage: delete <id>"),
            },
            "confirm" => desk.handle(Intent::ConfirmDelete).await,
            "dismiss" => desk.handle(Intent::DismissDelete).await,
            other => println!("unknown command '{other}', try 'help'"),
        }

        print_notifications(&mut notifications);
        print_state(&desk);
    }

    Ok(())
}

fn parse_field(name: &str) -> Option<Field> {
    match name {
        "name" => Some(Field::Name),
        "email" => Some(Field::Email),
        "password" => Some(Field::Password),
        "role" => Some(Field::Role),
        "about" => Some(Field::About),
        "phone" => Some(Field::PhoneNumber),
        "pic" => Some(Field::ProfilePic),
        _ => None,
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                reload the roster");
    println!("  add                 open an empty form");
    println!("  edit <id>           open the form for an employee");
    println!("  set <field> <value> change one form field");
    println!("  submit | cancel     close the form");
    println!("  delete <id>         ask to delete (then confirm/dismiss)");
    println!("  show | help | quit");
}

fn print_notifications(rx: &mut broadcast::Receiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        let tag = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        let marker = if notification.pending { "..." } else { "" };
        println!("[{tag}] {}{marker}", notification.message);
    }
}

fn print_state(desk: &Desk) {
    match &desk.state().list {
        ListState::Idle => println!("(not loaded)"),
        ListState::Loading => println!("(loading)"),
        ListState::Failed(message) => println!("!! {message}"),
        ListState::Ready(employees) => {
            if employees.is_empty() {
                println!("no employees");
            } else {
                for employee in employees {
                    print_row(employee);
                }
            }
        }
    }

    if let Some(form) = &desk.state().form {
        let draft = &form.draft;
        println!(
            "form [{:?}] name='{}' email='{}' role='{}' phone='{}'",
            form.mode, draft.name, draft.email, draft.role, draft.phone_number
        );
    }
    if let Some(id) = &desk.state().pending_delete {
        println!("pending delete: {id}");
    }
}

fn print_row(employee: &Employee) {
    println!(
        "{:<10} {:<20} {:<24} {:<12} {:<14} {}",
        employee.id.as_deref().unwrap_or("-"),
        employee.name,
        employee.email,
        Employee::display_or_na(employee.role.as_deref()),
        Employee::display_or_na(employee.phone_number.as_deref()),
        employee.status_label()
    );
}
