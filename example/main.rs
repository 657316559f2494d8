//! Parse an HTTP/1 message head and print its fields.
//!
//! ```not_rust
//! h1dump [--response] [--chunk N] [FILE]
//! ```
//!
//! Reads FILE, or stdin, feeding it to the parser `N` bytes at a time when `--chunk` is given.
//! Limits are read from `H1_MAX_URI`, `H1_MAX_HEADER_BLOCK` and `H1_MAX_HEADERS`.
use h1parse::{Header, Limits, ParseResult, Parser};
use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
};

struct Args {
    response: bool,
    chunk: Option<usize>,
    path: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: h1dump [--response] [--chunk N] [FILE]");
            return ExitCode::from(2);
        }
    };

    let limits = match limits_from_env() {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("invalid limits: {err}");
            return ExitCode::from(2);
        }
    };

    let input = match read_input(args.path.as_deref()) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut parser = match Parser::try_with_limits(limits) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // grow the buffer the way a connection read loop would
    let step = args.chunk.unwrap_or(input.len()).max(1);
    let mut end = 0;

    loop {
        end = input.len().min(end + step);
        let buf = &input[..end];

        let code = if args.response {
            match parser.parse_response(buf) {
                ParseResult::Ok(res) => {
                    println!("version: {}", res.version());
                    println!("status:  {}", res.status());
                    println!("reason:  {}", String::from_utf8_lossy(res.reason()));
                    print_headers(res.headers());
                    println!("head:    {} bytes", res.head_len());
                    return ExitCode::SUCCESS;
                }
                result => result.code(),
            }
        } else {
            match parser.parse_request(buf) {
                ParseResult::Ok(req) => {
                    println!("method:  {}", req.method());
                    println!("uri:     {}", String::from_utf8_lossy(req.uri()));
                    println!("version: {}", req.version());
                    print_headers(req.headers());
                    println!("head:    {} bytes", req.head_len());
                    return ExitCode::SUCCESS;
                }
                result => result.code(),
            }
        };

        if let Some(err) = parser.error() {
            eprintln!("error: {err} ({code})");
            return ExitCode::FAILURE;
        }

        log::debug!("incomplete after {end} bytes");

        if end == input.len() {
            eprintln!("error: incomplete message head ({code})");
            return ExitCode::FAILURE;
        }
    }
}

fn print_headers<'b>(headers: impl ExactSizeIterator<Item = Header<'b>>) {
    println!("headers: {}", headers.len());
    for Header { name, value } in headers {
        println!(
            "  {}: {}",
            String::from_utf8_lossy(name),
            String::from_utf8_lossy(value)
        );
    }
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        response: false,
        chunk: None,
        path: None,
    };
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--response" => args.response = true,
            "--chunk" => {
                let value = iter.next().ok_or("missing value for `--chunk`")?;
                let n = value
                    .parse::<usize>()
                    .map_err(|err| format!("invalid `--chunk` value {value:?}: {err}"))?;
                args.chunk = Some(n);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option `{arg}`")),
            _ if args.path.is_none() => args.path = Some(arg),
            _ => return Err(format!("unexpected argument `{arg}`")),
        }
    }

    Ok(args)
}

fn limits_from_env() -> Result<Limits, String> {
    fn var(key: &str, default: usize) -> Result<usize, String> {
        match env::var(key) {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|err| format!("{key}={value:?}: {err}")),
            Err(_) => Ok(default),
        }
    }

    Limits::try_from_usize(
        var("H1_MAX_URI", h1parse::DEFAULT_MAX_URI_LEN.into())?,
        var("H1_MAX_HEADER_BLOCK", h1parse::DEFAULT_MAX_HEADER_BLOCK_LEN.into())?,
        var("H1_MAX_HEADERS", h1parse::DEFAULT_MAX_HEADERS.into())?,
    )
    .map_err(|err| err.to_string())
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        Some("-") | None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => fs::read(path),
    }
}
