use clap::Parser;
use coverflow::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;

/// An interactive terminal wizard for decision-flow definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow definition JSON file
    #[arg(default_value = "data/coverage_flow.json")]
    flow_path: String,

    /// Suppress the banner and progress lines
    #[arg(short, long)]
    quiet: bool,
}

/// What the rendered slide is waiting for, with owned data so the wizard can
/// be mutated after rendering.
enum Pending {
    /// Intro/helper: pick one of these action ids.
    Actions(Vec<String>),
    /// Question: pick one of these option values.
    Options(Vec<String>),
    /// Terminal result was rendered; offer a restart.
    Finished,
    /// Cursor or result key failed to resolve.
    Broken,
}

/// What the user typed at an option prompt.
enum Input {
    Choice(usize),
    Back,
    Restart,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let flow = FlowDefinition::from_file(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load flow definition '{}': {}",
            &cli.flow_path, e
        ))
    });
    let flow = Arc::new(flow);

    if !cli.quiet {
        println!("--- Coverflow Interactive Wizard ---");
        println!(
            "Loaded '{}' ({} nodes, {} results)\n",
            &cli.flow_path,
            flow.nodes.len(),
            flow.results.len()
        );
    }

    let mut wizard = Wizard::new(flow);

    loop {
        let pending = render_slide(&wizard, cli.quiet);

        match pending {
            Pending::Actions(action_ids) => match read_choice(action_ids.len(), &wizard) {
                Input::Choice(choice) => {
                    if let Err(e) = wizard.choose_action(&action_ids[choice]) {
                        exit_with_error(&format!("Wizard rejected action: {}", e));
                    }
                }
                Input::Back => {
                    wizard.back();
                }
                Input::Restart => wizard.restart(),
            },
            Pending::Options(values) => match read_choice(values.len(), &wizard) {
                Input::Choice(choice) => {
                    if let Err(e) = wizard.select(&values[choice]) {
                        exit_with_error(&format!("Wizard rejected selection: {}", e));
                    }
                    // Selection and confirmation are decoupled in the
                    // engine; the terminal shell confirms immediately.
                    if let Err(e) = wizard.advance() {
                        exit_with_error(&format!("Wizard rejected advance: {}", e));
                    }
                }
                Input::Back => {
                    wizard.back();
                }
                Input::Restart => wizard.restart(),
            },
            Pending::Finished => {
                let again = prompt_for_input("Start over? [y/N]", Some("n"));
                if !again.eq_ignore_ascii_case("y") {
                    break;
                }
                wizard.restart();
            }
            Pending::Broken => {
                println!("Result incomplete. Please complete the wizard to view results.");
                wizard.restart();
            }
        }
        println!();
    }
}

/// Prints the current slide and returns what it is waiting for.
fn render_slide(wizard: &Wizard, quiet: bool) -> Pending {
    if !quiet {
        let chrome = wizard.chrome();
        if let (Some(step), Some(total)) = (chrome.step, chrome.total_steps) {
            println!("[Step {} of {}]", step, total);
        }
    }

    match wizard.view() {
        SlideView::Intro { node } => {
            println!("== {} ==", node.title);
            for line in &node.body {
                println!("{}", line);
            }
            for (index, action) in node.actions.iter().enumerate() {
                println!("  {}: {}", index + 1, action.label);
            }
            Pending::Actions(node.actions.iter().map(|a| a.id.clone()).collect())
        }
        SlideView::Question { node, selected } => {
            println!("== {} ==", node.title);
            for line in node.prompt.lines() {
                println!("{}", line);
            }
            if let Some(helper) = &node.helper_text {
                println!("({})", helper);
            }
            for (index, option) in node.options.iter().enumerate() {
                let marker = if selected.map(|s| s.value.as_str()) == Some(option.value.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!(" {}{}: {}", marker, index + 1, option.label);
            }
            Pending::Options(node.options.iter().map(|o| o.value.clone()).collect())
        }
        SlideView::Helper { node } => {
            println!("== {} ==", node.title);
            for line in &node.body {
                println!("{}", line);
            }
            for (index, action) in node.actions.iter().enumerate() {
                println!("  {}: {}", index + 1, action.label);
            }
            Pending::Actions(node.actions.iter().map(|a| a.id.clone()).collect())
        }
        SlideView::Result {
            outcome,
            reasons,
            answers,
            provisional,
        } => {
            println!("== Result ==");
            let document = render_document(outcome, &reasons, &answers, wizard.session().flags());
            println!("{}", document);
            if provisional {
                println!("\n(Provisional result)");
            }
            Pending::Finished
        }
        SlideView::Incomplete => Pending::Broken,
    }
}

/// Reads a 1-based option choice, or a `b`/`r` navigation command.
fn read_choice(option_count: usize, wizard: &Wizard) -> Input {
    loop {
        let hint = if wizard.can_go_back() {
            "choice (or b = back, r = restart)"
        } else {
            "choice (or r = restart)"
        };
        let input = prompt_for_input(hint, None);
        match input.as_str() {
            "b" if wizard.can_go_back() => return Input::Back,
            "r" => return Input::Restart,
            _ => {}
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Input::Choice(n - 1),
            _ => println!(
                "Invalid choice. Please enter a number between 1 and {}.",
                option_count
            ),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
