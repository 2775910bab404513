use clap::Parser;
use kochbuch::{artifact, builder, cli, config, error, scanner, session};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use kochbuch_common::IngredientUniverse;
use session::{CookingSession, Debouncer, SessionCommand};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Build { recipes, output } => {
            println!("🍲 kochbuch - Datenaufbau\n");

            let recipes_dir = recipes.unwrap_or_else(|| config.recipes_dir.clone());
            let output_path = output.unwrap_or_else(|| config.data_path.clone());

            println!("[1/3] Rezepte suchen in {}...", recipes_dir.display());
            let sources = scanner::scan_folder(&recipes_dir)?;
            println!("✔ {} Rezeptquellen gefunden\n", sources.len());

            println!("[2/3] Rezepte einlesen...");
            let report = builder::build_collection(&sources, &config.connector);
            for rejection in &report.rejections {
                println!("  ✘ {}: {}", rejection.file_name, rejection.reason);
            }
            if cli.verbose {
                for recipe in &report.recipes {
                    println!(
                        "  ✔ {} ({} Zutatengruppen)",
                        recipe.title,
                        recipe.ingredients.len()
                    );
                }
            }
            println!(
                "✔ {} Rezepte gebaut, {} abgelehnt\n",
                report.recipes.len(),
                report.rejections.len()
            );

            if report.recipes.is_empty() {
                println!(
                    "⚠ Keine Rezepte gebaut - {} bleibt unverändert",
                    output_path.display()
                );
                return Ok(());
            }

            println!("[3/3] Datendatei schreiben...");
            artifact::save(&output_path, &report.recipes)?;
            println!("✔ Gespeichert: {}", output_path.display());

            println!("\n✅ Fertig");
        }

        Commands::Suggest { data, have } => {
            let recipes = load_recipes(&config, data)?;
            let mut session = CookingSession::new(recipes, &config.assumed_ingredients);

            if let Some(list) = have {
                for item in list.split(',') {
                    let item = item.trim();
                    if !item.is_empty() {
                        session.select_ingredient(item);
                    }
                }
            }

            print_rankings(&mut session);
        }

        Commands::Cook { data } => {
            let recipes = load_recipes(&config, data)?;
            run_cook(recipes, &config).await?;
        }

        Commands::Ingredients { data, filter } => {
            let recipes = load_recipes(&config, data)?;
            let universe = IngredientUniverse::from_recipes(&recipes);
            let query = filter.unwrap_or_default();

            let entries = universe.filter(&query);
            if entries.is_empty() {
                println!("Keine Zutaten gefunden");
            } else {
                for entry in entries {
                    println!("{}", entry);
                }
            }
        }

        Commands::Config {
            show,
            set_recipes_dir,
        } => {
            let mut config = config;

            if let Some(dir) = set_recipes_dir {
                config.set_recipes_dir(dir)?;
                println!("✔ Rezeptordner gesetzt");
            }

            if show {
                println!("Konfiguration:");
                println!("  Rezeptordner: {}", config.recipes_dir.display());
                println!("  Datendatei:   {}", config.data_path.display());
                println!("  Bindewort:    {}", config.connector);
                println!(
                    "  Immer da:     {}",
                    config.assumed_ingredients.join(", ")
                );
                println!("  Verzögerung:  {}ms", config.debounce_ms);
            }
        }
    }

    Ok(())
}

fn load_recipes(
    config: &Config,
    data: Option<PathBuf>,
) -> Result<Vec<kochbuch_common::RecipeData>> {
    let data_path = data.unwrap_or_else(|| config.data_path.clone());
    artifact::load(&data_path)
}

/// Interactive loop: reacts to entered lines and to the debounced filter.
/// The session state is mutated only here.
async fn run_cook(recipes: Vec<kochbuch_common::RecipeData>, config: &Config) -> Result<()> {
    let mut session = CookingSession::new(recipes, &config.assumed_ingredients);
    let mut debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));

    println!("🍲 kochbuch - Was koche ich heute?\n");
    print_help();
    print_rankings(&mut session);
    print_ingredients(&session);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,  // EOF
                };
                match SessionCommand::parse(&line) {
                    SessionCommand::Add(key) => {
                        if session.select_ingredient(&key) {
                            print_rankings(&mut session);
                            print_ingredients(&session);
                        } else {
                            println!("'{}' ist schon ausgewählt", key);
                        }
                    }
                    SessionCommand::Remove(key) => {
                        if session.deselect_ingredient(&key) {
                            print_rankings(&mut session);
                            print_ingredients(&session);
                        } else {
                            println!("'{}' war nicht ausgewählt", key);
                        }
                    }
                    SessionCommand::Filter(query) => {
                        debouncer.schedule(query);
                    }
                    SessionCommand::Show(position) => {
                        print_recipe(&mut session, position);
                    }
                    SessionCommand::List => {
                        print_rankings(&mut session);
                        print_ingredients(&session);
                    }
                    SessionCommand::Help => print_help(),
                    SessionCommand::Quit => break,
                    SessionCommand::Unknown(input) => {
                        println!("Unbekannte Eingabe: '{}' ('hilfe' zeigt die Befehle)", input);
                    }
                }
            }
            query = debouncer.fired() => {
                session.set_filter(&query);
                print_ingredients(&session);
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Befehle:");
    println!("  + Zutat    Zutat auswählen");
    println!("  - Zutat    Zutat abwählen");
    println!("  / Text     verfügbare Zutaten filtern (leer: Filter löschen)");
    println!("  zeigen N   Rezept an Listenposition N anzeigen");
    println!("  liste      Rezeptliste erneut ausgeben");
    println!("  ende       beenden\n");
}

fn print_rankings(session: &mut CookingSession) {
    if session.is_empty() {
        println!("Keine Rezepte in der Sammlung");
        return;
    }

    println!("\nRezepte:");
    for (position, (index, result)) in session.rankings().into_iter().enumerate() {
        let title = session
            .recipe(index)
            .map(|recipe| recipe.title.as_str())
            .unwrap_or_default();
        println!(
            "{:>3}. {}  {}/{} Zutaten",
            position + 1,
            title,
            result.satisfied_groups,
            result.total_groups
        );
    }
}

fn print_ingredients(session: &CookingSession) {
    let selected = session.selected_ingredients();
    if selected.is_empty() {
        println!("\nAusgewählt: (keine)");
    } else {
        println!("\nAusgewählt: {}", selected.join(", "));
    }

    let possible = session.possible_ingredients();
    if possible.is_empty() {
        println!("Verfügbar:  (keine Treffer)");
    } else {
        println!("Verfügbar:  {}", possible.join(", "));
    }
}

fn print_recipe(session: &mut CookingSession, position: usize) {
    let ranked = session.rankings();
    match ranked.get(position - 1) {
        Some(&(index, _)) => {
            if let Some(recipe) = session.recipe(index) {
                println!("\n── {} ──", recipe.title);
                println!("{}", recipe.html);
            }
        }
        None => println!("Keine Listenposition {}", position),
    }
}
