mod display;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use zenthera_ai::{AiConfig, BriefRefiner};
use zenthera_core::{
    Budget, CategoryFilter, Field, Navigator, Portfolio, Route, Sector, ServiceTag, Viewport,
    parse_optional,
};
use zenthera_rfp::{FormConfig, FormController, ResetPolicy};

#[derive(Parser)]
#[command(name = "zenthera", version, about = "Zenthera Groups site: portfolio and Request for Proposal")]
struct Cli {
    /// Generative text API credential. Without it, AI refinement runs offline.
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Text-generation model identifier.
    #[arg(long, global = true, default_value = zenthera_ai::prompt::DEFAULT_MODEL)]
    model: String,

    /// Base URL of the text-generation service.
    #[arg(long, global = true, default_value = zenthera_ai::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Portfolio catalogue (JSON array) replacing the built-in one.
    #[arg(long, global = true)]
    portfolio: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the navigation bar and the page a location resolves to.
    Routes {
        /// Location to resolve, e.g. `/projects/3` or `#/quote`.
        #[arg(default_value = "/")]
        location: String,
    },
    /// List portfolio projects, optionally filtered by category.
    Projects {
        /// Category button label, e.g. "OFFSHORE". Defaults to all projects.
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Show one portfolio project.
    Project { id: u32 },
    /// Rewrite a rough project idea into a technical brief.
    Refine {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Fill in and submit a Request for Proposal.
    Rfp(RfpArgs),
}

#[derive(Args)]
struct RfpArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    company: Option<String>,
    /// Job title.
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    project_name: Option<String>,
    #[arg(long)]
    location: Option<String>,
    /// One of the fixed sector labels; an empty value clears it.
    #[arg(long)]
    sector: Option<String>,
    /// One of the fixed budget labels; an empty value clears it.
    #[arg(long)]
    budget: Option<String>,
    #[arg(long)]
    timeline: Option<String>,
    /// Toggle a service (repeatable; naming a service twice deselects it).
    #[arg(long = "service")]
    services: Vec<ServiceTag>,
    #[arg(long)]
    description: Option<String>,
    /// Rough idea to refine with AI and append to the description (repeatable).
    #[arg(long = "ai-prompt")]
    ai_prompts: Vec<String>,
    /// Simulated submission latency in milliseconds.
    #[arg(long, default_value_t = 1500)]
    submit_delay_ms: u64,
    /// What "submit another request" keeps: retain-contact or clear-all.
    #[arg(long, default_value_t = ResetPolicy::RetainContact)]
    reset_policy: ResetPolicy,
    /// Print the confirmation as JSON.
    #[arg(long)]
    json: bool,
    /// After submitting, reset the form and show the draft carried over.
    #[arg(long)]
    another: bool,
}

/// The terminal has no scroll position; record the request instead.
struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn scroll_to_top(&self) {
        debug!("viewport scrolled to top");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    info!("zenthera v{}", env!("CARGO_PKG_VERSION"));

    let mut ai_config = AiConfig::default().with_api_key(cli.api_key.clone());
    ai_config.model = cli.model.clone();
    ai_config.endpoint = cli.endpoint.clone();

    match cli.command {
        Command::Routes { location } => {
            let mut nav = Navigator::new(Arc::new(TerminalViewport), None);
            let route = nav.navigate(&location)?;
            print!("{}", display::render_nav(&nav));
            println!();
            println!("{} -> {}", route.path(), route.title());
            if let Route::ProjectDetail(id) = route {
                let portfolio = load_portfolio(cli.portfolio.as_ref())?;
                match portfolio.get(id) {
                    Some(p) => print!("{}", display::render_project(p)),
                    None => println!("No project with id {id}."),
                }
            }
        }
        Command::Projects { filter } => {
            let portfolio = load_portfolio(cli.portfolio.as_ref())?;
            let filter = filter
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or_default();
            let matches = portfolio.filter(&filter);
            info!(filter = %filter, count = matches.len(), "portfolio filtered");
            print!("{}", display::render_portfolio(&matches, &filter));
        }
        Command::Project { id } => {
            let portfolio = load_portfolio(cli.portfolio.as_ref())?;
            let project = portfolio
                .get(id)
                .with_context(|| format!("no project with id {id}"))?;
            print!("{}", display::render_project(project));
        }
        Command::Refine { text } => {
            let input = text.join(" ");
            if input.trim().is_empty() {
                bail!("nothing to refine");
            }
            let refiner = BriefRefiner::from_config(&ai_config);
            println!("{}", refiner.refine(&input).await);
        }
        Command::Rfp(args) => run_rfp(args, &ai_config).await?,
    }

    Ok(())
}

fn load_portfolio(path: Option<&PathBuf>) -> anyhow::Result<Portfolio> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(Portfolio::from_json(&json)?)
        }
        None => Ok(Portfolio::builtin()?),
    }
}

async fn run_rfp(args: RfpArgs, ai_config: &AiConfig) -> anyhow::Result<()> {
    let config = FormConfig {
        submit_delay: Duration::from_millis(args.submit_delay_ms),
        reset_policy: args.reset_policy,
    };
    let mut form = FormController::new(config, Arc::new(TerminalViewport));

    let text_fields = [
        (Field::FirstName, args.first_name),
        (Field::LastName, args.last_name),
        (Field::Email, args.email),
        (Field::Phone, args.phone),
        (Field::Company, args.company),
        (Field::Role, args.role),
        (Field::ProjectName, args.project_name),
        (Field::Location, args.location),
        (Field::Timeline, args.timeline),
        (Field::Description, args.description),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }
    if let Some(label) = args.sector {
        form.set_sector(parse_optional::<Sector>(&label)?);
    }
    if let Some(label) = args.budget {
        form.set_budget(parse_optional::<Budget>(&label)?);
    }
    for tag in args.services {
        form.toggle_service(tag);
    }

    if !args.ai_prompts.is_empty() {
        let refiner = BriefRefiner::from_config(ai_config);
        if !refiner.is_online() {
            eprintln!("  No API key configured; AI refinement is offline.");
        }
        for prompt in args.ai_prompts {
            form.set_ai_prompt(prompt);
            if !form.refine_scope(&refiner).await {
                eprintln!("  Skipped empty AI prompt.");
            }
        }
    }

    let missing = form.draft().missing_required();
    if !missing.is_empty() {
        print!("{}", display::render_draft(form.draft()));
        let names: Vec<String> = missing.iter().map(|f| format!("--{f}")).collect();
        bail!("required fields missing: {}", names.join(", "));
    }

    eprintln!("  Submitting proposal request...");
    let confirmation = form
        .submit()
        .await
        .cloned()
        .context("form was not accepting submissions")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&confirmation)?);
    } else {
        print!("{}", display::render_confirmation(&confirmation));
    }

    if args.another {
        form.reset();
        println!();
        println!("Submit Another Request");
        println!();
        print!("{}", display::render_draft(form.draft()));
    }
    Ok(())
}
