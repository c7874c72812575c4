use std::borrow::Cow;
use std::sync::Arc;

use crossterm::style::Stylize;
use reedline::{
    FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus,
    Reedline, Signal,
};

use account_cli::config::config::Config;
use account_cli::data::account_view::AccountView;
use account_cli::data::loader::load_accounts_from_file;
use account_cli::data::pager::{paginate, DEFAULT_PAGE_SIZE};
use account_cli::utils::app_paths::AppPaths;

mod table_display;

use table_display::{display_page, display_page_json, export_to_csv};

struct AccountPrompt;

impl Prompt for AccountPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("accounts> ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

fn print_help() {
    println!("{}", "Account CLI - Searchable account list".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  account-cli [OPTIONS] FILE.csv");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {}    - Print one page of matches and exit",
        "--query <text>".green()
    );
    println!(
        "  {}        - Page to print (out-of-range values are clamped)",
        "--page <n>".green()
    );
    println!(
        "  {}   - Records per page (default 20)",
        "--page-size <n>".green()
    );
    println!("  {}            - Print the page as JSON", "--json".green());
    println!(
        "  {} - Generate config file with defaults",
        "--generate-config".green()
    );
    println!();
    println!("{}", "Interactive commands:".yellow());
    println!(
        "  {}            - Filter by name, email, address or gender",
        "<text>".green()
    );
    println!("  {}         - Jump to a page", "\\page <n>".green());
    println!(
        "  {} - Move between pages",
        "\\next \\prev \\first \\last".green()
    );
    println!("  {}              - Clear the current filter", "\\all".green());
    println!(
        "  {} - Export the filtered set to CSV",
        "\\export <filename>".green()
    );
    println!("  {}            - Clear screen", "\\clear".green());
    println!("  {}             - Show this help", "\\help".green());
    println!("  {}     - Exit", "\\q (or Ctrl+D)".green());
    println!();
}

fn main() -> anyhow::Result<()> {
    account_cli::utils::logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_help();
        return Ok(());
    }

    // Check for config file generation
    if args.contains(&"--generate-config".to_string()) {
        match Config::get_config_path() {
            Ok(path) => {
                let config_content = Config::create_default_with_comments();
                if let Some(parent) = path.parent() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        eprintln!("Error creating config directory: {}", e);
                        std::process::exit(1);
                    }
                }
                if let Err(e) = std::fs::write(&path, config_content) {
                    eprintln!("Error writing config file: {}", e);
                    std::process::exit(1);
                }
                println!("Configuration file created at: {:?}", path);
                println!("Edit this file to customize the account browser.");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error determining config path: {}", e);
                std::process::exit(1);
            }
        }
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!(
            "{}",
            format!("Could not load config, using defaults: {}", e).yellow()
        );
        Config::default()
    });

    let flag_value = |name: &str| -> Option<String> {
        args.iter()
            .position(|arg| arg == name)
            .and_then(|pos| args.get(pos + 1))
            .cloned()
    };

    let query = flag_value("--query");
    // An unparsable --page value requests page 1; out-of-range values are
    // clamped downstream.
    let page_flag = flag_value("--page").map(|s| s.parse::<i64>().unwrap_or(1));
    let page_size = flag_value("--page-size")
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(if config.behavior.page_size > 0 {
            config.behavior.page_size
        } else {
            DEFAULT_PAGE_SIZE
        });
    let as_json = args.contains(&"--json".to_string());

    let data_file = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--") && arg.ends_with(".csv"))
        .cloned();

    let data_file = match data_file {
        Some(file) => file,
        None => {
            eprintln!("{}", "No CSV file given.".red());
            println!();
            print_help();
            std::process::exit(1);
        }
    };

    // The file read is the only place a load can fail; everything past
    // this point absorbs malformed data into defaults.
    let accounts = match load_accounts_from_file(&data_file) {
        Ok(accounts) => accounts,
        Err(e) => {
            eprintln!("{}", format!("Failed to load accounts: {:#}", e).red());
            std::process::exit(1);
        }
    };

    let mut view = AccountView::new(Arc::new(accounts));

    // One-shot mode: print the requested page and exit.
    if query.is_some() || page_flag.is_some() || as_json {
        if let Some(ref term) = query {
            view.apply_search(term);
        }
        let page = paginate(&view, page_flag.unwrap_or(1), page_size);
        if as_json {
            display_page_json(&page)?;
        } else {
            display_page(&page, page_size, view.search_term(), &config);
        }
        return Ok(());
    }

    println!(
        "{}",
        format!("Loaded {} accounts from {}", view.total_count(), data_file).cyan()
    );
    run_repl(view, page_size, &config)
}

fn run_repl(mut view: AccountView, page_size: usize, config: &Config) -> anyhow::Result<()> {
    print_help();

    let mut line_editor = Reedline::create();
    if config.behavior.enable_history {
        match AppPaths::history_file() {
            Ok(path) => {
                match FileBackedHistory::with_file(config.behavior.max_history_entries, path) {
                    Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                    Err(e) => eprintln!("{}", format!("History disabled: {}", e).yellow()),
                }
            }
            Err(e) => eprintln!("{}", format!("History disabled: {}", e).yellow()),
        }
    }

    let prompt = AccountPrompt;

    let mut page = paginate(&view, 1, page_size);
    display_page(&page, page_size, view.search_term(), config);

    loop {
        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(buffer) => {
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if trimmed == "\\help" {
                    print_help();
                    continue;
                }

                if trimmed == "\\clear" {
                    print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
                    continue;
                }

                if trimmed == "\\q" || trimmed == "\\quit" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed.starts_with("\\export") {
                    let parts: Vec<&str> = trimmed.split_whitespace().collect();
                    if parts.len() < 2 {
                        eprintln!("{}", "Usage: \\export <filename>".red());
                        continue;
                    }
                    match export_to_csv(&view, parts[1]) {
                        Ok(count) => println!(
                            "{}",
                            format!("Exported {} accounts to {}", count, parts[1]).green()
                        ),
                        Err(e) => eprintln!("{}", format!("Export error: {}", e).red()),
                    }
                    continue;
                }

                let requested: i64 = if trimmed == "\\next" {
                    page.current_page as i64 + 1
                } else if trimmed == "\\prev" {
                    page.current_page as i64 - 1
                } else if trimmed == "\\first" {
                    1
                } else if trimmed == "\\last" {
                    page.total_pages as i64
                } else if trimmed.starts_with("\\page") {
                    let parts: Vec<&str> = trimmed.split_whitespace().collect();
                    match parts.get(1).and_then(|p| p.parse::<i64>().ok()) {
                        Some(n) => n,
                        None => {
                            eprintln!("{}", "Usage: \\page <number>".red());
                            continue;
                        }
                    }
                } else if trimmed == "\\all" {
                    view.clear_search();
                    1
                } else if trimmed.starts_with('\\') {
                    eprintln!(
                        "{}",
                        format!("Unknown command: {} (try \\help)", trimmed).red()
                    );
                    continue;
                } else {
                    // Anything else is a search term; a new search returns
                    // to page 1.
                    view.apply_search(&buffer);
                    1
                };

                page = paginate(&view, requested, page_size);
                display_page(&page, page_size, view.search_term(), config);
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    Ok(())
}
