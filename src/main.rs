//! Object store inspection tool
//! Author: kartik4905
//!
//! Imports a template document into a fresh object store and reports what the
//! store ended up holding: object count, roots and page identifiers.

use std::path::PathBuf;
use std::process;

use clap::{Arg, Command, ValueEnum};
use pdf_objstore::{Logger, Object, ObjectStore, StoreOptions};
use tracing::{error, info};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn build_cli() -> Command {
    Command::new("objstore")
        .about("Import a PDF template into an object store and inspect it")
        .arg(
            Arg::new("template")
                .help("Template PDF to import")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("options")
                .long("options")
                .short('o')
                .help("JSON file with store options")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .short('p')
                .help("Print the object identifier of this page (negative counts from the end)")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log level")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("warn"),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches.get_one::<LogLevel>("verbose").unwrap_or(&LogLevel::Warn);
    Logger::with_level(log_level.as_filter()).init();

    let mut options = match matches.get_one::<PathBuf>("options") {
        Some(path) => match StoreOptions::from_json_file(path) {
            Ok(options) => options,
            Err(e) => {
                error!("{}", e);
                eprintln!("objstore: {}", e);
                process::exit(2);
            }
        },
        None => StoreOptions::default(),
    };
    if let Some(template) = matches.get_one::<PathBuf>("template") {
        options.template = Some(template.clone());
    }

    let store = match ObjectStore::with_options(&options) {
        Ok(store) => store,
        Err(e) => {
            error!("{}", e);
            eprintln!("objstore: {}", e);
            process::exit(1);
        }
    };
    info!(objects = store.len(), "store ready");

    if let Some(&k) = matches.get_one::<i64>("page") {
        match store.page_identifier_at(k) {
            Some(id) => println!("{}", id),
            None => {
                eprintln!("objstore: no page at index {}", k);
                process::exit(1);
            }
        }
        return;
    }

    println!("objects: {}", store.len());
    println!("info:    {}", store.info());
    println!("root:    {}", store.root());
    if let Some(pages) = store.pages() {
        println!("pages:   {}", pages);
    }
    let ids: Vec<String> = store.page_ids().iter().map(ToString::to_string).collect();
    println!("leaves:  [{}]", ids.join(", "));
    if let Some(Object::LiteralString(title)) = store.info().data.get("Title") {
        println!("title:   {}", String::from_utf8_lossy(title));
    }
}
