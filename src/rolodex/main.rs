use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolodex::api::{CmdMessage, MessageLevel, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use rolodex::view::{ConsoleView, View};

mod args;
use args::Cli;

/// The command table, in display order.
const COMMANDS: &[(&str, &str)] = &[
    ("hello", "Show a greeting"),
    ("add", "Add a contact: add <name> <phone>"),
    ("change", "Replace a phone: change <name> <old_phone> <new_phone>"),
    ("phone", "Show a contact's numbers: phone <name>"),
    ("all", "Show every contact"),
    ("delete", "Delete a contact: delete <name>"),
    ("add-birthday", "Set a birthday: add-birthday <name> <DD.MM.YYYY>"),
    ("show-birthday", "Show a birthday: show-birthday <name>"),
    ("birthdays", "Show upcoming birthdays: birthdays [days]"),
    ("commands", "Show all commands"),
    ("exit/close", "Save and quit"),
];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RolodexApi<FileStore>,
    view: ConsoleView,
    upcoming_days: i64,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    ctx.view.display_message("Welcome to the assistant bot!\n");
    ctx.view.display_contacts(ctx.api.book().records());
    ctx.view.display_commands(COMMANDS);

    loop {
        let Some(line) = ctx.view.get_input("Enter a command: ")? else {
            break;
        };
        let line = line.trim().to_lowercase();
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        if matches!(command, "exit" | "close") {
            break;
        }

        let outcome = match command {
            "hello" => {
                ctx.view.display_message("Hello! How can I help you?");
                Ok(())
            }
            "commands" => {
                ctx.view.display_commands(COMMANDS);
                Ok(())
            }
            "add" => handle_add(&mut ctx, &args),
            "change" => handle_change(&mut ctx, &args),
            "phone" => handle_phone(&ctx, &args),
            "all" => handle_all(&ctx),
            "delete" => handle_delete(&mut ctx, &args),
            "add-birthday" => handle_add_birthday(&mut ctx, &args),
            "show-birthday" => handle_show_birthday(&ctx, &args),
            "birthdays" => handle_birthdays(&ctx, &args),
            _ => {
                ctx.view.display_message("Invalid command.");
                Ok(())
            }
        };

        // One error-to-text mapping, applied uniformly; a bad command never
        // ends the session.
        if let Err(e) = outcome {
            ctx.view.display_message(&error_line(&e));
        }
    }

    ctx.api.close()?;
    ctx.view.display_message("Good bye!");
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .ok_or_else(|| RolodexError::Store("Could not determine data directory".to_string()))?;
    let data_dir = proj_dirs.data_dir().to_path_buf();

    let config = RolodexConfig::load(&data_dir).unwrap_or_default();
    let path = match &cli.store {
        Some(path) => path.clone(),
        None => data_dir.join(&config.data_file),
    };

    let api = RolodexApi::open(FileStore::new(path))?;
    Ok(AppContext {
        api,
        view: ConsoleView,
        upcoming_days: i64::from(config.upcoming_days),
    })
}

fn handle_add(ctx: &mut AppContext, args: &[&str]) -> Result<()> {
    let [name, phone] = take_args(args, "Usage: add <name> <phone>")?;
    let result = ctx.api.add_contact(name, phone)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_change(ctx: &mut AppContext, args: &[&str]) -> Result<()> {
    let [name, old, new] = take_args(args, "Usage: change <name> <old_phone> <new_phone>")?;
    let result = ctx.api.change_phone(name, old, new)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_phone(ctx: &AppContext, args: &[&str]) -> Result<()> {
    let [name] = take_args(args, "Usage: phone <name>")?;
    let result = ctx.api.show_phone(name)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_all(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    ctx.view.display_contacts(&result.listed_contacts);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, args: &[&str]) -> Result<()> {
    let [name] = take_args(args, "Usage: delete <name>")?;
    let result = ctx.api.remove_contact(name)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_add_birthday(ctx: &mut AppContext, args: &[&str]) -> Result<()> {
    let [name, birthday] = take_args(args, "Usage: add-birthday <name> <DD.MM.YYYY>")?;
    let result = ctx.api.add_birthday(name, birthday)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_show_birthday(ctx: &AppContext, args: &[&str]) -> Result<()> {
    let [name] = take_args(args, "Usage: show-birthday <name>")?;
    let result = ctx.api.show_birthday(name)?;
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

fn handle_birthdays(ctx: &AppContext, args: &[&str]) -> Result<()> {
    let days = match args {
        [] => ctx.upcoming_days,
        [raw] => raw
            .parse()
            .map_err(|_| RolodexError::Usage("Usage: birthdays [days]".to_string()))?,
        _ => return Err(RolodexError::Usage("Usage: birthdays [days]".to_string())),
    };

    let result = ctx.api.upcoming_birthdays(days)?;
    ctx.view.display_notes(&result.lines);
    print_messages(&ctx.view, &result.messages);
    Ok(())
}

/// Exactly `N` arguments, or a usage error.
fn take_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| RolodexError::Usage(usage.to_string()))
}

/// The single error-to-text mapping for the command surface.
fn error_line(err: &RolodexError) -> String {
    match err {
        RolodexError::Validation(msg)
        | RolodexError::NotFound(msg)
        | RolodexError::Usage(msg)
        | RolodexError::Store(msg) => msg.clone(),
        other => format!("An error occurred: {other}"),
    }
}

fn print_messages(view: &ConsoleView, messages: &[CmdMessage]) {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        view.display_message(&line.to_string());
    }
}
