use std::io::{self, Write};

use clap::Parser;

use convertx_rs::book::{BookProvider, MockBookProvider};
use convertx_rs::engine::types::{Destination, Direction};
use convertx_rs::persist::json::JsonProfileStore;
use convertx_rs::persist::{Profile, ProfileStore};
use convertx_rs::session::ConvertSession;
use convertx_rs::telemetry;
use convertx_rs::view::{annotate_orders, render_rows, Summary};

#[derive(Parser, Debug)]
#[command(name = "convertx", about = "Launchpad convert flow, CLI edition")]
struct Args {
    /// Where the wallet/order profile lives
    #[arg(long, default_value = "convertx-profile.json")]
    profile: String,

    /// Seed for the mock order book
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn print_state(session: &ConvertSession) {
    let summary = Summary::new(&session.request(), &session.result);
    print!("{}", summary.render());
    println!(
        "Wallet: {:.2} reference / {:.2} token | direction: {:?} | sort: {:?}",
        session.profile.reference_balance,
        session.profile.token_balance,
        session.direction,
        session.sort_mode,
    );
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env

    let args = Args::parse();
    let filter = std::env::var("CONVERTX_LOG").unwrap_or_else(|_| "info".to_string());
    telemetry::init_tracing(&filter);
    telemetry::init_metrics();

    let mut store = JsonProfileStore::new(&args.profile);
    let profile = match store.load().await? {
        Some(p) => {
            println!("Restored profile from {}", args.profile);
            p
        }
        None => {
            println!("No profile found, starting fresh");
            Profile::default()
        }
    };

    let book = MockBookProvider::new(args.seed).snapshot();
    let mut session = ConvertSession::new(book, profile);

    loop {
        let command = read_line("\nconvertx> ")?.to_lowercase();
        match command.as_str() {
            "help" | "h" => {
                println!("Available commands:");
                println!("  amount <n>        - Set the amount to spend/sell");
                println!("  buy               - Switch to acquire direction");
                println!("  sell              - Switch to dispose direction");
                println!("  sort              - Toggle best-price / best-fill");
                println!("  from <token>      - Filter acquire pool by source token ('any' clears)");
                println!("  to <token> <chain> - Filter dispose pool by destination ('any' clears)");
                println!("  list              - Show the candidate orders with fills");
                println!("  summary           - Show the allocation summary");
                println!("  confirm           - Execute the selection and update the wallet");
                println!("  post <amt> <px> <token> <chain> - Place a standing order");
                println!("  quit, q           - Exit");
            }
            cmd if cmd.starts_with("amount") => {
                let rest = cmd.trim_start_matches("amount").trim();
                session.set_amount(rest);
                print_state(&session);
            }
            "buy" => {
                session.set_direction(Direction::Acquire);
                print_state(&session);
            }
            "sell" => {
                session.set_direction(Direction::Dispose);
                print_state(&session);
            }
            "sort" => {
                session.toggle_sort_mode();
                print_state(&session);
            }
            cmd if cmd.starts_with("from") => {
                let rest = cmd.trim_start_matches("from").trim();
                if rest.is_empty() {
                    println!("Source tokens: {}", session.book.source_tokens().join(", "));
                    continue;
                }
                if rest == "any" {
                    session.set_source_token(None);
                } else {
                    session.set_source_token(Some(rest.to_uppercase()));
                }
                print_state(&session);
            }
            cmd if cmd.starts_with("to") => {
                let parts: Vec<&str> = cmd.trim_start_matches("to").split_whitespace().collect();
                match parts.as_slice() {
                    [] => {
                        let dests: Vec<String> = session
                            .book
                            .destinations()
                            .into_iter()
                            .map(|(token, chain)| format!("{} on {}", token, chain))
                            .collect();
                        println!("Destinations: {}", dests.join(", "));
                        continue;
                    }
                    ["any"] => session.set_destination(None),
                    [token, chain] => session.set_destination(Some(Destination {
                        token: token.to_uppercase(),
                        chain: chain.to_string(),
                    })),
                    _ => {
                        println!("Usage: to <token> <chain>");
                        continue;
                    }
                }
                print_state(&session);
            }
            "list" => {
                let rows = annotate_orders(session.current_pool(), &session.result);
                print!("{}", render_rows(&rows));
            }
            "summary" => print_state(&session),
            "confirm" => {
                if session.confirm(&mut store).await? {
                    println!("✅ Conversion executed");
                    print_state(&session);
                } else {
                    println!("❌ Nothing to execute (empty selection or insufficient balance)");
                }
            }
            cmd if cmd.starts_with("post") => {
                let parts: Vec<&str> = cmd.trim_start_matches("post").split_whitespace().collect();
                if let [amt, px, token, chain] = parts.as_slice() {
                    if let (Ok(amount), Ok(price)) = (amt.parse::<f64>(), px.parse::<f64>()) {
                        match session
                            .place_standing_order(
                                &mut store,
                                amount,
                                price,
                                token.to_uppercase(),
                                chain.to_string(),
                            )
                            .await?
                        {
                            Some(id) => println!("✅ Standing order {} placed", id),
                            None => println!("❌ Rejected: amount and price must be positive"),
                        }
                    } else {
                        println!("Invalid numbers");
                    }
                } else {
                    println!("Usage: post <amount> <price> <token> <chain>");
                }
            }
            "quit" | "q" | "exit" => {
                println!("Goodbye!");
                break;
            }
            "" => continue,
            _ => {
                println!("Unknown command. Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}
