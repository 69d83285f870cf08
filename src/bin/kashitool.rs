use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use kashi_engine::extract::{extract_pronunciations, format_text, ExtractOptions, SentenceAnalysis};
use kashi_engine::hangul::long_sound_to_hyphen;
use kashi_engine::lattice::LatticeDocument;
use kashi_engine::render::{render_sheet, RenderOptions};
use kashi_engine::settings;
use kashi_engine::sheet::LyricSheet;
use kashi_engine::{kana_to_hangul, trace_init};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "kashitool", about = "Japanese lyrics to Hangul pronunciation")]
struct Cli {
    /// Settings TOML replacing the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe kana to Hangul
    Kana {
        /// Hiragana or katakana text
        text: String,
        /// Spell long vowels out instead of writing `-`
        #[arg(long)]
        long_vowel: bool,
    },

    /// Replace spelled-out long vowels in Hangul with `-`
    Hyphenate {
        /// Hangul text
        hangul: String,
    },

    /// Extract readings from analyzer lattice dumps (JSON)
    Analyze {
        /// Lattice JSON files, one line each
        #[arg(required = true)]
        lattice_files: Vec<String>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
        /// Print a table instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        text: bool,
    },

    /// Render an analyzed lyric sheet (JSON) to text
    Render {
        /// Sheet JSON, `{"lines": [...]}`
        sheet_file: String,
        /// Spell long vowels out instead of writing `-`
        #[arg(long)]
        long_vowel: bool,
        /// Do not put spaces between words
        #[arg(long)]
        no_space: bool,
        /// Resolve ん to ㄴ/ㅁ/ㅇ by context
        #[arg(long)]
        clarify_nasal: bool,
        /// Resolve っ to ㅅ/ㄱ/ㄷ/ㅂ/ㄹ by context
        #[arg(long)]
        clarify_geminate: bool,
        /// Print each original line above its rendering
        #[arg(long)]
        show_original: bool,
    },

    /// Print the built-in settings TOML
    DefaultSettings,
}

fn analyze_file(path: &str, options: &ExtractOptions) -> SentenceAnalysis {
    let json = die!(fs::read_to_string(path), "Failed to read {path}: {}");
    let doc = die!(LatticeDocument::from_json(&json), "Failed to parse {path}: {}");
    let text = doc.text.clone();
    let lattice = die!(doc.into_lattice(), "Invalid lattice in {path}: {}");
    SentenceAnalysis::new(text, extract_pronunciations(&lattice, options))
}

fn main() {
    let cli = Cli::parse();
    trace_init::init_stderr();

    if let Some(path) = &cli.settings {
        let content = die!(fs::read_to_string(path), "Failed to read {path}: {}");
        die!(settings::init_custom(content), "Invalid settings in {path}: {}");
    }

    match cli.command {
        Command::Kana { text, long_vowel } => {
            println!("{}", kana_to_hangul(&text, !long_vowel));
        }

        Command::Hyphenate { hangul } => {
            println!("{}", long_sound_to_hyphen(&hangul));
        }

        Command::Analyze {
            lattice_files,
            pretty,
            text,
        } => {
            let options = ExtractOptions::default();
            for path in &lattice_files {
                let analysis = analyze_file(path, &options);
                if text {
                    print!("{}", format_text(&analysis));
                } else if pretty {
                    let json = die!(serde_json::to_string_pretty(&analysis), "JSON error: {}");
                    println!("{json}");
                } else {
                    let json = die!(serde_json::to_string(&analysis), "JSON error: {}");
                    println!("{json}");
                }
            }
        }

        Command::Render {
            sheet_file,
            long_vowel,
            no_space,
            clarify_nasal,
            clarify_geminate,
            show_original,
        } => {
            let json = die!(
                fs::read_to_string(&sheet_file),
                "Failed to read {sheet_file}: {}"
            );
            let sheet = die!(LyricSheet::from_json(&json), "Failed to parse {sheet_file}: {}");

            let defaults = RenderOptions::default();
            let options = RenderOptions {
                use_hyphen: defaults.use_hyphen && !long_vowel,
                add_space: defaults.add_space && !no_space,
                clarify_nasal: defaults.clarify_nasal || clarify_nasal,
                clarify_geminate: defaults.clarify_geminate || clarify_geminate,
                show_original: defaults.show_original || show_original,
            };
            println!("{}", render_sheet(&sheet, &options));
        }

        Command::DefaultSettings => {
            print!("{}", settings::default_toml());
        }
    }
}
