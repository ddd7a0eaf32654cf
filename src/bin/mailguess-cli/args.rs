use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use mailguess::{ClientOptions, DEFAULT_ENDPOINT, FormState};

#[derive(Parser)]
#[command(name = "mailguess-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,

    /// URL de l'endpoint /validate
    #[arg(long, env = "MAILGUESS_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// timeout côté client en ms (0 = aucun, le transport décide)
    #[arg(long = "timeout-ms", env = "MAILGUESS_TIMEOUT_MS", default_value_t = 0, global = true)]
    pub timeout_ms: u64,

    /// format: human|json|csv
    #[arg(long, value_enum, default_value_t = Format::Human, global = true)]
    pub format: Format,

    /// écrit le rapport dans un fichier (json/csv uniquement)
    #[arg(long, global = true)]
    pub out: Option<String>,

    /// -v info, -vv debug, -vvv trace (RUST_LOG a priorité)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// erreurs uniquement
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// soumet un formulaire passé en options
    Submit(SubmitArgs),
    /// demande chaque champ sur le terminal, puis soumet
    Interactive {
        /// transmet light_mode=true au serveur
        #[arg(long)]
        light_mode: bool,
    },
}

#[derive(Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub first: String,
    #[arg(long, default_value = "")]
    pub middle: String,
    #[arg(long, default_value = "")]
    pub last: String,
    /// texte libre, découpé sur les espaces (ex: "TI vendas")
    #[arg(long, default_value = "")]
    pub extras: String,
    #[arg(long)]
    pub domain: String,
    /// transmet light_mode=true au serveur
    #[arg(long)]
    pub light_mode: bool,
}

impl SubmitArgs {
    pub fn form_state(&self) -> FormState {
        FormState {
            first: self.first.clone(),
            middle: self.middle.clone(),
            last: self.last.clone(),
            extras: self.extras.clone(),
            domain: self.domain.clone(),
            light_mode: self.light_mode,
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            timeout_ms: self.timeout_ms,
        }
    }

    pub fn is_human(&self) -> bool {
        self.format == Format::Human
    }
}
