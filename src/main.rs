use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use seglex::{config::config::LexerConfig, display_error, init_tracing, lexer::lexer::Lexer};

fn usage() -> ! {
    eprintln!("Usage: seglex <file> [--config <config.toml>]");
    exit(2)
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let (file_path, config_path) = match args.as_slice() {
        [file] => (file, None),
        [file, flag, config] if flag == "--config" => (file, Some(config)),
        _ => usage(),
    };

    let file_name = PathBuf::from(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let config = match config_path {
        Some(path) => LexerConfig::load(path),
        None => Ok(LexerConfig::preset("sql")),
    };

    let lexer = match config.and_then(Lexer::new) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("Error: {}", err);
            exit(1)
        }
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", file_path, err);
            exit(1)
        }
    };

    let start = Instant::now();

    match lexer.lex(&source) {
        Ok(segments) => {
            for segment in &segments {
                segment.debug();
            }
            println!("Lexed {} segments in {:?}", segments.len(), start.elapsed());
        }
        Err(err) => {
            display_error(&err, &source, &file_name);
            exit(1)
        }
    }
}
