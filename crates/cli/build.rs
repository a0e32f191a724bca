use std::{env, fs, path::PathBuf};

fn output_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::arg!(-f --format <FORMAT> "Output format (text, json)")
            .value_name("FORMAT")
            .default_value("text")
            .value_parser(["text", "json"]),
    )
    .arg(
        clap::arg!(-o --output <FILE> "Output file (default: stdout)")
            .value_name("FILE")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let score = output_args(
        clap::Command::new("score")
            .about("Score the readability of a text, file or URL")
            .arg(clap::arg!(<INPUT> "URL to fetch, local file, or '-' for stdin"))
            .arg(clap::arg!(--html "Treat the input as HTML and score its article text"))
            .arg(
                clap::arg!(--profile <PROFILE> "Scoring profile")
                    .default_value("heuristic")
                    .value_parser(["heuristic", "precise"]),
            )
            .arg(clap::arg!(--legacy "Add the legacy HIX score")),
    );

    let analyze = output_args(
        clap::Command::new("analyze")
            .about("Analyse the articles of one or more sites from their sitemaps")
            .arg(
                clap::arg!(-c --config <FILE> "Site configuration file")
                    .value_parser(clap::value_parser!(std::path::PathBuf)),
            )
            .arg(clap::arg!(--site <SITE> "Additional site as NAME=SITEMAP_PATH").action(clap::ArgAction::Append))
            .arg(clap::arg!(--delay_ms <MS> "Delay between requests in milliseconds")),
    );

    let audit = output_args(
        clap::Command::new("audit")
            .about("Run an SEO/GEO audit of one page")
            .arg(clap::arg!(<INPUT> "URL to fetch or local HTML file"))
            .arg(clap::arg!(--url <URL> "Page URL to audit a local file as")),
    );

    let mut cmd = clap::Command::new("lesbar")
        .version(env!("CARGO_PKG_VERSION"))
        .author("lesbar contributors")
        .about("German readability scoring and content analysis")
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").global(true))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").global(true))
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(score)
        .subcommand(analyze)
        .subcommand(audit);

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "lesbar", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "lesbar", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "lesbar", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "lesbar", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
