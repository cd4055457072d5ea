use amerbrit::{
    Dictionaries, ErrorResponse, TranslateRequest, Translator, load_dictionaries_from_dir,
};
use clap::{Arg, ArgAction, Command};
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("amerbrit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate English text between American and British conventions")
        .arg(
            Arg::new("text")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .short('l')
                .help("american-to-british or british-to-american")
                .default_value("american-to-british"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .short('p')
                .help("Print the translation without highlight markup")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Print the JSON response body instead of text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dict-dir")
                .long("dict-dir")
                .short('d')
                .help("Load dictionaries from this directory instead of the built-in set"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("List every change")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let locale = matches.get_one::<String>("locale").cloned();
    let plain = matches.get_flag("plain");
    let json = matches.get_flag("json");
    let verbose = matches.get_flag("verbose");

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let dictionaries = match matches.get_one::<String>("dict-dir") {
        Some(dir) => load_dictionaries_from_dir(Path::new(dir)),
        None => Dictionaries::builtin(),
    };
    let translator = match dictionaries.and_then(|dictionaries| Translator::new(&dictionaries)) {
        Ok(translator) => translator,
        Err(e) => {
            eprintln!("❌ Failed to load dictionaries: {}", e);
            return Err(e.into());
        }
    };

    let request = TranslateRequest {
        text: Some(text),
        locale,
    };
    let result = request
        .validate()
        .and_then(|(text, direction)| translator.translate(text, direction));

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            if json {
                println!("{}", serde_json::to_string(&ErrorResponse::from(e.clone()))?);
            } else {
                eprintln!("❌ {}", e);
            }
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result.to_response())?);
    } else if plain {
        println!("{}", result.plain());
    } else {
        println!("{}", result.translation());
    }

    if verbose {
        eprintln!();
        eprintln!("🔁 {} ({} changes)", result.direction(), result.change_count());
        for change in result.changes() {
            eprintln!("   - {}", change);
        }
        let replacements: Vec<&str> = result.annotated().highlighted().collect();
        if !replacements.is_empty() {
            eprintln!("✏️  {}", replacements.join(", "));
        }
    }

    Ok(())
}

/// Read the whole of stdin, dropping one trailing newline
fn read_stdin() -> io::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading text from stdin, end with Ctrl-D");
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
