use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kochbuch")]
#[command(about = "Rezeptsammlung mit Zutaten-Abgleich", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Ausführliche Ausgabe
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rezeptquellen einlesen und die Datendatei erzeugen
    Build {
        /// Ordner mit den Rezept-Markdowndateien (Standard: aus der Konfiguration)
        #[arg(short, long)]
        recipes: Option<PathBuf>,

        /// Ausgabedatei (Standard: assets/data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rezepte nach Zutatenabdeckung sortiert ausgeben
    Suggest {
        /// Datendatei
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Vorhandene Zutaten, kommagetrennt
        #[arg(long)]
        have: Option<String>,
    },

    /// Interaktive Zutatenauswahl mit laufender Rezeptsortierung
    Cook {
        /// Datendatei
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Alle bekannten Zutaten auflisten
    Ingredients {
        /// Datendatei
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Nur Zutaten mit diesem Präfix
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Konfiguration anzeigen/ändern
    Config {
        /// Konfiguration anzeigen
        #[arg(long)]
        show: bool,

        /// Rezeptordner setzen
        #[arg(long)]
        set_recipes_dir: Option<PathBuf>,
    },
}
