//! Command-line driver for the lists core.
//!
//! Sends one request through the routing table against the configured
//! SQLite file and prints the response.

use clap::{Parser, ValueEnum};
use lists_core::db::open_db;
use lists_core::{
    init_logging, logging_status, AppConfig, FormData, HtmlRenderer, HttpResponse, ListService,
    Method, Request, Router, SqliteListRepository,
};
use log::info;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "lists")]
#[command(version, about = "Send one request to the to-do lists core.")]
struct Cli {
    /// Request method; defaults to GET, or POST when form fields are given
    #[arg(short = 'X', long, value_enum)]
    method: Option<MethodArg>,
    /// Request path, e.g. `/` or `/lists/new`
    path: String,
    /// Form fields as `key=value`
    fields: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Get,
    Post,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Get => Method::Get,
            MethodArg::Post => Method::Post,
        }
    }
}

impl Cli {
    fn to_request(&self) -> Result<Request, String> {
        let mut form = FormData::new();
        for field in &self.fields {
            form.insert_pair(field)?;
        }

        let method = match self.method {
            Some(method) => method.into(),
            None if form.is_empty() => Method::Get,
            None => Method::Post,
        };
        Ok(Request {
            method,
            path: self.path.clone(),
            form,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(response) => {
            print_response(&response);
            ExitCode::from(exit_status(&response))
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<HttpResponse, String> {
    let request = cli.to_request()?;
    let config = AppConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref() {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", log_dir.display()))?;
        init_logging(&config.log_level, log_dir)?;
        if let Some((level, active_dir)) = logging_status() {
            info!(
                "event=cli_start module=cli status=ok level={} log_dir={}",
                level,
                active_dir.display()
            );
        }
    }

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open database `{}`: {err}",
            config.db_path.display()
        )
    })?;
    let repo = SqliteListRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let router = Router::new(ListService::new(repo), HtmlRenderer);

    let response = router.handle(&request);
    info!(
        "event=cli_request module=cli status={} method={} path={}",
        response.status, request.method, request.path
    );
    Ok(response)
}

/// 0 for 2xx/3xx responses, 1 otherwise.
fn exit_status(response: &HttpResponse) -> u8 {
    if response.is_success() {
        0
    } else {
        1
    }
}

fn print_response(response: &HttpResponse) {
    println!("status={}", response.status);
    if let Some(location) = response.location.as_deref() {
        println!("location={location}");
    }
    if let Some(template) = response.template {
        println!("template={template}");
    }
    if !response.body.is_empty() {
        println!();
        print!("{}", response.body);
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status, Cli};
    use clap::error::ErrorKind;
    use clap::Parser;
    use lists_core::{HttpResponse, Method};

    #[test]
    fn path_without_fields_defaults_to_get() {
        let cli = Cli::try_parse_from(["lists", "/"]).unwrap();
        let request = cli.to_request().unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/");
        assert!(request.form.is_empty());
    }

    #[test]
    fn fields_default_to_post_and_keep_text_after_first_equals() {
        let cli = Cli::try_parse_from(["lists", "/lists/new", "item_text=a=b c"]).unwrap();
        let request = cli.to_request().unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/lists/new");
        assert_eq!(request.form.get("item_text"), Some("a=b c"));
    }

    #[test]
    fn explicit_method_overrides_default() {
        let cli = Cli::try_parse_from(["lists", "-X", "post", "/lists/new"]).unwrap();
        assert_eq!(cli.to_request().unwrap().method, Method::Post);

        let cli = Cli::try_parse_from(["lists", "--method", "get", "/", "x=1"]).unwrap();
        assert_eq!(cli.to_request().unwrap().method, Method::Get);
    }

    #[test]
    fn malformed_field_is_rejected() {
        let cli = Cli::try_parse_from(["lists", "/lists/new", "item_text"]).unwrap();
        let err = cli.to_request().unwrap_err();
        assert!(err.contains("key=value"));

        let cli = Cli::try_parse_from(["lists", "/lists/new", "=milk"]).unwrap();
        assert!(cli.to_request().unwrap_err().contains("empty key"));
    }

    #[test]
    fn missing_path_is_a_usage_error() {
        let err = Cli::try_parse_from(["lists"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = Cli::try_parse_from(["lists", "-X", "delete", "/"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn help_and_version_are_not_requests() {
        let help = Cli::try_parse_from(["lists", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let version = Cli::try_parse_from(["lists", "/lists/new", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn exit_status_follows_response_class() {
        assert_eq!(exit_status(&HttpResponse::ok("lists/home.html", String::new())), 0);
        assert_eq!(exit_status(&HttpResponse::redirect("/lists/x/")), 0);
        assert_eq!(exit_status(&HttpResponse::error(404, "Not Found")), 1);
        assert_eq!(exit_status(&HttpResponse::error(405, "Method Not Allowed")), 1);
        assert_eq!(exit_status(&HttpResponse::error(500, "Internal Server Error")), 1);
    }
}
