// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolves a styled text document and prints what a renderer would receive.
//!
//! ```text
//! cargo run -p showcase -- --sample clickable --click 20 --tag "Click Me" --click 27
//! cargo run -p showcase -- --parser tree path/to/document.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use spanwiz::span_json::{self, TreeJsonParser, TypedJsonParser};
use spanwiz::span_resolve::{AttributeRun, ResolvedAttributes};
use spanwiz::{ClickEvent, JsonParser, RenderableText, SpanWiz, route_click};
use spanwiz_dev::DocumentSamples;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ParserChoice {
    /// Decode straight into serde records.
    Typed,
    /// Decode through a JSON value tree.
    Tree,
}

impl ParserChoice {
    fn name(self) -> &'static str {
        match self {
            Self::Typed => TypedJsonParser::NAME,
            Self::Tree => TreeJsonParser::NAME,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "showcase", about, long_about = None)]
struct Cli {
    /// JSON document to resolve. Defaults to every built-in sample.
    #[arg(value_name = "FILE", conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Resolve one built-in sample by name
    #[arg(short, long)]
    sample: Option<String>,

    /// Decoder to use
    #[arg(short, long, value_enum, default_value_t = ParserChoice::Typed)]
    parser: ParserChoice,

    /// Character offset to click (repeatable)
    #[arg(long = "click", value_name = "OFFSET")]
    clicks: Vec<usize>,

    /// Tag of interest for clicks, in addition to URL (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Print the decoded document back as JSON
    #[arg(long)]
    echo: bool,

    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbosity: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(match cli.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let Some(parser) = span_json::parser_by_name(cli.parser.name()) else {
        eprintln!("unknown parser {:?}", cli.parser.name());
        return ExitCode::FAILURE;
    };
    let spanwiz = SpanWiz::new(parser);

    let documents = match load_documents(&cli) {
        Ok(documents) => documents,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for (name, json) in &documents {
        println!("== {name} ({})", spanwiz.parser().name());
        match spanwiz.create_with_diagnostics(json) {
            Ok((text, diagnostics)) => {
                if cli.echo {
                    echo(spanwiz.parser(), json);
                }
                print_text(&text);
                for diagnostic in &diagnostics {
                    println!("  skipped: {diagnostic}");
                }
                let tags: Vec<&str> = cli.tags.iter().map(String::as_str).collect();
                for &offset in &cli.clicks {
                    print_click(&text, offset, &tags);
                }
            }
            Err(error) => {
                println!("  error: {error}");
                failed = true;
            }
        }
        println!();
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_documents(cli: &Cli) -> Result<Vec<(String, String)>, String> {
    if let Some(path) = &cli.file {
        let json = std::fs::read_to_string(path)
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;
        return Ok(vec![(path.display().to_string(), json)]);
    }
    let samples = DocumentSamples::new();
    let selected: Vec<_> = match &cli.sample {
        Some(name) => vec![
            samples
                .get(name)
                .ok_or_else(|| format!("no sample named {name:?}"))?,
        ],
        None => samples.all().to_vec(),
    };
    Ok(selected
        .into_iter()
        .map(|sample| (sample.name.to_owned(), sample.json.to_owned()))
        .collect())
}

fn echo(parser: &impl JsonParser, json: &str) {
    let encoded = parser
        .parse(json)
        .map_err(|error| error.to_string())
        .and_then(|document| span_json::to_json_pretty(&document).map_err(|e| e.to_string()));
    match encoded {
        Ok(encoded) => println!("{encoded}"),
        Err(error) => println!("  cannot echo: {error}"),
    }
}

fn print_text(text: &RenderableText) {
    println!("  text: {:?} ({} chars)", text.text(), text.len());
    for (range, attrs) in text.runs() {
        println!(
            "  run {:>3}..{:<3} {:?}: {}",
            range.start(),
            range.end(),
            text.slice(range),
            describe(attrs)
        );
    }
    for (tag, ranges) in text.tag_table().iter() {
        for tagged in ranges {
            println!(
                "  tag {tag:?} {:?} -> {}",
                text.slice(tagged.range),
                tagged.value
            );
        }
    }
}

fn print_click(text: &RenderableText, offset: usize, tags: &[&str]) {
    let event = route_click(text, offset, tags, &mut |link: &str| {
        println!("  click {offset}: open {link}");
    });
    match event {
        ClickEvent::Link(_) => {}
        ClickEvent::Tagged(hit) => println!("  click {offset}: {} -> {}", hit.tag, hit.value),
        ClickEvent::Plain { .. } => {
            let covering: Vec<AttributeRun<'_>> = text.attributes_at(offset).collect();
            println!("  click {offset}: plain text under {} run(s)", covering.len());
        }
    }
}

fn describe(attrs: &ResolvedAttributes) -> String {
    let mut parts = Vec::new();
    if let Some(weight) = attrs.font_weight {
        parts.push(format!("weight {weight}"));
    }
    if attrs.font_style.is_some() {
        parts.push("italic".to_owned());
    }
    if attrs.decoration.underline {
        parts.push("underline".to_owned());
    }
    if attrs.decoration.line_through {
        parts.push("line-through".to_owned());
    }
    if let Some(color) = attrs.color {
        parts.push(format!("color {}", hex(color)));
    }
    if let Some(color) = attrs.background {
        parts.push(format!("background {}", hex(color)));
    }
    if let Some(size) = attrs.font_size {
        parts.push(format!("size {size}pt"));
    }
    if let Some(family) = attrs.font_family {
        parts.push(format!("family {family}"));
    }
    if let Some(shift) = attrs.baseline_shift {
        parts.push(format!("shift {:+}", shift.ascent_fraction()));
    }
    if let Some(spacing) = attrs.letter_spacing {
        parts.push(format!("spacing {spacing}"));
    }
    if let Some(shadow) = attrs.shadow {
        parts.push(format!(
            "shadow {} offset {:?} blur {}",
            hex(shadow.color),
            shadow.offset,
            shadow.blur_radius
        ));
    }
    parts.join(", ")
}

fn hex(color: spanwiz::span_resolve::Color) -> String {
    let c = color.to_rgba8();
    if c.a == 0xFF {
        format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", c.a, c.r, c.g, c.b)
    }
}
