use crate::{ChunkedFileSource, JsonParser, Options, from_file, loads_with_log, parse_bytes};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE    Write output to FILE (default stdout)\n\
               --pretty         Pretty-print output with two-space indent\n\
               --logs           Print parse diagnostics to stderr\n\
               --stream-stable  Keep string output prefix-stable\n\
               --chunked        Read INPUT through the chunked file source\n\
               --chunk-size N   Page size for --chunked (default 1000000)\n\
               --max-depth N    Nesting depth cap (default 1024)\n\
           -h, --help           Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    pretty: bool,
    logs: bool,
    chunked: bool,
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut mode = CliMode {
        input: None,
        output: None,
        pretty: false,
        logs: false,
        chunked: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--pretty" => {
                mode.pretty = true;
            }
            "--logs" => {
                mode.logs = true;
                opts.logging = true;
            }
            "--stream-stable" => {
                opts.stream_stable = true;
            }
            "--chunked" => {
                mode.chunked = true;
            }
            "--chunk-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --chunk-size");
                    std::process::exit(2);
                }
                opts.chunk_length = args[i].parse().unwrap_or(0);
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --max-depth");
                    std::process::exit(2);
                }
                opts.max_depth = args[i].parse().unwrap_or(1024);
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }

    (opts, mode)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let (value, log) = match (&mode.input, mode.chunked) {
        (Some(path), true) => {
            if mode.logs {
                let source = ChunkedFileSource::open(path, opts.chunk_length)?;
                let mut parser = JsonParser::new(source, opts.clone());
                let value = parser.parse()?;
                (value, parser.into_logs())
            } else {
                (from_file(path, &opts)?, Vec::new())
            }
        }
        (Some(path), false) => {
            let content = fs::read(path)?;
            if mode.logs {
                let text = String::from_utf8_lossy(&content);
                let (value, log) = loads_with_log(&text, &opts)?;
                (value, log)
            } else {
                (parse_bytes(&content, &opts)?, Vec::new())
            }
        }
        (None, chunked) => {
            if chunked {
                eprintln!("--chunked requires an INPUT file");
                std::process::exit(2);
            }
            let mut content = Vec::new();
            io::stdin().read_to_end(&mut content)?;
            if mode.logs {
                let text = String::from_utf8_lossy(&content);
                let (value, log) = loads_with_log(&text, &opts)?;
                (value, log)
            } else {
                (parse_bytes(&content, &opts)?, Vec::new())
            }
        }
    };

    let rendered = if mode.pretty {
        value.dump_pretty()
    } else {
        value.dump()
    };
    out_writer.write_all(rendered.as_bytes())?;
    out_writer.write_all(b"\n")?;
    out_writer.flush()?;

    if mode.logs {
        for entry in &log {
            eprintln!("{} | near: {:?}", entry.message, entry.context);
        }
    }

    Ok(())
}
