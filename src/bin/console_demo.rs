// Interactive console shell for the travel experiences demo
//
// This binary is the presentation adapter: it owns the only mutable AppState,
// translates typed commands into Events and carries out the Effects the
// library hands back. All filtering, pricing and booking logic lives in the
// library crate.
use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_experiences_demo::{
    handle_event, load_sample_catalog, AppState, Catalog, DismissReason, Effect, Event,
};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("travel_experiences_demo=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logger();

    let catalog = load_sample_catalog()?;
    info!(experiences = catalog.len(), "loaded sample catalog");

    let mut state = AppState::new();

    println!("Travel Experiences - mock booking demo");
    print_help(&catalog);

    // initial render, like the page load
    dispatch(&mut state, &catalog, Event::ShowAll);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command {
            "filter" => Event::CountrySelected(rest.to_string()),
            "search" => Event::SearchChanged(rest.to_string()),
            "all" => Event::ShowAll,
            "open" | "book" if !rest.is_empty() => Event::ExperienceOpened(rest.to_string()),
            "name" => Event::TravelerNameChanged(rest.to_string()),
            "travelers" => Event::TravelerCountChanged(rest.to_string()),
            "price" => Event::PricePerPersonChanged(rest.to_string()),
            "submit" => Event::BookingSubmitted,
            "close" => Event::ModalDismissed(DismissReason::CloseButton),
            "link" => Event::ExternalLinkRequested,
            "help" => {
                print_help(&catalog);
                continue;
            }
            "quit" | "exit" => break,
            _ => {
                println!("Unknown command '{line}', try 'help'");
                continue;
            }
        };

        dispatch(&mut state, &catalog, event);
    }

    Ok(())
}

// Forward one event to the library and carry out the returned effects
fn dispatch(state: &mut AppState, catalog: &Catalog, event: Event) {
    for effect in handle_event(state, catalog, event) {
        match effect {
            Effect::RenderResults => render_results(state, catalog),
            Effect::OpenModal => render_modal(state, catalog),
            Effect::RefreshSummary => render_summary(state),
            Effect::ShowReceipt => render_receipt(state),
            Effect::CloseModal => println!("(modal closed)"),
            Effect::OpenExternal(url) => println!("Opening {url} in a new window"),
        }
    }
}

fn print_help(catalog: &Catalog) {
    println!("Commands:");
    println!("  filter <country|all>   filter by country ({})", catalog.countries().join(", "));
    println!("  search <text>          free-text search in title and description");
    println!("  all                    reset filter and search");
    println!("  open <id>              open details / booking for an experience");
    println!("  name <text>            set traveler name");
    println!("  travelers <n>          set traveler count");
    println!("  price <amount>         override price per person");
    println!("  submit                 simulate the booking");
    println!("  close                  close the booking view");
    println!("  link                   open the prototype document");
    println!("  quit                   leave the demo");
}

fn render_results(state: &AppState, catalog: &Catalog) {
    let Some(ids) = &state.results else {
        return;
    };

    if ids.is_empty() {
        println!("No experiences found.");
        return;
    }

    println!();
    for id in ids {
        // ids come straight from the catalog, so the lookup always succeeds
        if let Some(experience) = catalog.find(id) {
            println!(
                "[{}] {} | {}",
                experience.id, experience.country, experience.duration
            );
            println!("    {}", experience.title);
            println!("    {}", experience.description);
            println!("    ${:.2} per person", experience.price);
        }
    }
    println!();
}

fn render_modal(state: &AppState, catalog: &Catalog) {
    let Some(draft) = state.open_draft() else {
        return;
    };
    let Some(experience) = catalog.find(&draft.experience_id) else {
        return;
    };

    println!();
    println!("=== {} ===", experience.title);
    println!("{} - {}", experience.country, experience.description);
    println!(
        "Booking form: travelers={} price=${:.2}",
        draft.traveler_count, draft.price_per_person
    );
}

fn render_summary(state: &AppState) {
    if let Some(summary) = state.current_summary() {
        println!(
            "Total: ${:.2} | Platform commission (10%): ${:.2}",
            summary.total, summary.commission
        );
    }
}

fn render_receipt(state: &AppState) {
    let Some(receipt) = state.shown_receipt() else {
        return;
    };

    println!();
    println!("Booking simulated for: {}", receipt.traveler_name);
    println!("Experience: {}", receipt.experience_title);
    println!("Travelers: {}", receipt.traveler_count);
    println!("Total (USD): ${:.2}", receipt.total);
    println!("Platform commission (10%): ${:.2}", receipt.commission);
    println!("{}", receipt.note);
    println!();
}
