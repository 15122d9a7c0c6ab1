use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use drift_protocol::{serialize_json, serialize_json_pretty, SequencePayload, ToolNextAction};
use drift_router::profile::profile_path_from_env;
use drift_router::{capabilities, lookup, Category, IntentRouter, RouterProfile};
use response::CommandResponse;
use serde_json::json;
use std::path::PathBuf;

mod render;
mod response;

#[derive(Parser)]
#[command(name = "drift-nav")]
#[command(about = "Route agent requests to drift tool sequences", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,

    /// Router profile with extra keyword rules (overrides DRIFT_ROUTER_PROFILE)
    #[arg(long, global = true)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a request into a task category
    Classify(RequestArgs),

    /// Classify a request and print the recommended tool sequence
    Route(RequestArgs),

    /// Print the tool sequence for a category tag
    Sequence(SequenceArgs),

    /// Answer a single-fact question with one surgical tool
    Lookup(RequestArgs),

    /// Print the drift_capabilities document
    Capabilities(CapabilitiesArgs),

    /// List category tags in priority order
    Categories(JsonArgs),
}

#[derive(Args)]
struct RequestArgs {
    /// Free-text request (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

impl RequestArgs {
    fn text(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Args)]
struct SequenceArgs {
    /// Category tag, e.g. `refactor` or `security-review`
    category: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CapabilitiesArgs {
    /// Pretty-print the document
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct JsonArgs {
    /// Output JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Classify(args) | Commands::Route(args) | Commands::Lookup(args) => args.json,
        Commands::Sequence(args) => args.json,
        Commands::Categories(args) => args.json,
        Commands::Capabilities(_) => true,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    if let Err(err) = run(&cli) {
        if json_output {
            println!("{}", serialize_json(&CommandResponse::from_error(&err))?);
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

fn load_router(cli: &Cli) -> Result<IntentRouter> {
    let path = cli.profile.clone().or_else(profile_path_from_env);
    let Some(path) = path else {
        return Ok(IntentRouter::builtin().clone());
    };
    let profile = RouterProfile::from_file(&path)
        .with_context(|| format!("Failed to load router profile {}", path.display()))?;
    log::info!(
        "Using router profile '{}' from {}",
        profile.name(),
        path.display()
    );
    Ok(IntentRouter::from_profile(&profile))
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Classify(args) => run_classify(&load_router(cli)?, args),
        Commands::Route(args) => run_route(&load_router(cli)?, args),
        Commands::Sequence(args) => run_sequence(&load_router(cli)?, args),
        Commands::Lookup(args) => run_lookup(&load_router(cli)?, args),
        Commands::Capabilities(args) => run_capabilities(&load_router(cli)?, args),
        Commands::Categories(args) => run_categories(&load_router(cli)?, args),
    }
}

fn run_classify(router: &IntentRouter, args: &RequestArgs) -> Result<()> {
    let request = args.text();
    let hit = router.classify_with_keyword(&request);
    if args.json {
        let data = json!({
            "request": request,
            "category": hit.map(|h| h.category.tag()),
            "matched_keyword": hit.map(|h| h.keyword),
        });
        println!("{}", serialize_json(&CommandResponse::ok(data))?);
    } else {
        match hit {
            Some(hit) => println!("{} (keyword: {:?})", hit.category, hit.keyword),
            None => println!("no match"),
        }
    }
    Ok(())
}

fn run_route(router: &IntentRouter, args: &RequestArgs) -> Result<()> {
    let route = router.route(&args.text())?;
    if args.json {
        let payload = route.to_payload();
        println!(
            "{}",
            serialize_json(&CommandResponse::ok(serde_json::to_value(payload)?))?
        );
    } else {
        print!("{}", render::route(&route));
    }
    Ok(())
}

fn run_sequence(router: &IntentRouter, args: &SequenceArgs) -> Result<()> {
    let category: Category = args.category.parse()?;
    let sequence = router.sequence_for(category)?;
    if args.json {
        let payload = SequencePayload {
            category: category.tag().to_string(),
            steps: sequence.to_steps(),
        };
        println!(
            "{}",
            serialize_json(&CommandResponse::ok(serde_json::to_value(payload)?))?
        );
    } else {
        print!("{}", render::sequence(category.tag(), &sequence));
    }
    Ok(())
}

fn run_lookup(router: &IntentRouter, args: &RequestArgs) -> Result<()> {
    let question = args.text();
    let entry = lookup(&question);
    let fallback_reason = match router.classify(&question) {
        Some(category) => {
            format!("No surgical lookup matched; `route` classifies this as {category}.")
        }
        None => "No surgical lookup matched; route the request instead.".to_string(),
    };
    if args.json {
        let response = match entry {
            Some(entry) => CommandResponse::ok(json!({
                "found": true,
                "lookup": entry.to_protocol(),
            })),
            None => CommandResponse::ok_with_next(
                json!({ "found": false }),
                vec![ToolNextAction {
                    tool: "route".to_string(),
                    args: json!({ "request": question }),
                    reason: fallback_reason,
                }],
            ),
        };
        println!("{}", serialize_json(&response)?);
    } else {
        match entry {
            Some(entry) => print!("{}", render::lookup(entry)),
            None => println!("{fallback_reason} Try `drift-nav route`."),
        }
    }
    Ok(())
}

fn run_capabilities(router: &IntentRouter, args: &CapabilitiesArgs) -> Result<()> {
    let doc = capabilities(router)?;
    if args.pretty {
        println!("{}", serialize_json_pretty(&doc)?);
    } else {
        println!("{}", serialize_json(&doc)?);
    }
    Ok(())
}

fn run_categories(router: &IntentRouter, args: &JsonArgs) -> Result<()> {
    let caps = capabilities(router)?;
    let tags: Vec<String> = caps
        .agent_navigation_guide
        .decision_tree
        .into_iter()
        .filter_map(|node| node.category)
        .collect();
    if args.json {
        println!(
            "{}",
            serialize_json(&CommandResponse::ok(json!({ "categories": tags })))?
        );
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
    Ok(())
}
