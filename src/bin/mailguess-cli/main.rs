//! mailguess-cli — soumet un nom + domaine à `/validate` et affiche les
//! adresses confirmées.
//!
//! Codes de sortie : 0 résultats affichés, 1 requête en échec ou erreur
//! fatale, 2 erreur d'usage (option invalide, champ obligatoire manquant).

mod args;
mod logging;
mod output;
mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use mailguess::{FormController, FormState, Phase, SubmitOutcome, Transport, ValidationClient};
use tracing::debug;

use crate::args::{Cli, Commands};

const EXIT_USAGE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("avertissement: {err:#}");
    }

    match run(&cli).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("erreur: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> Result<u8> {
    let form = match &cli.cmd {
        Commands::Submit(submit) => submit.form_state(),
        Commands::Interactive { light_mode } => {
            let mut stdin = io::stdin().lock();
            let mut stderr = io::stderr();
            prompt::read_form(&mut stdin, &mut stderr, *light_mode)?
        }
    };

    if let Some(code) = usage_status(&form, &mut io::stderr()) {
        return Ok(code);
    }

    let options = cli.client_options();
    let client = ValidationClient::http(&options)?;
    debug!(endpoint = client.endpoint(), "client ready");
    let controller = FormController::new(client);

    let mut stderr = io::stderr();
    let outcome = if cli.is_human() && !cli.quiet {
        submit_and_watch(&controller, &form, Some(&mut stderr)).await
    } else {
        submit_and_watch(&controller, &form, None::<&mut io::Stderr>).await
    };
    output::write_report(&outcome, &controller.current_view(), cli)?;

    Ok(output::exit_status(&outcome))
}

/// `Some(2)` si un champ obligatoire manque, après avoir écrit l'erreur.
fn usage_status<W: Write>(form: &FormState, err_out: &mut W) -> Option<u8> {
    let err = form.check_required().err()?;
    let _ = writeln!(err_out, "erreur: {err}");
    Some(EXIT_USAGE)
}

/// Mène une soumission ; la vue "pending" observée sur le canal est recopiée
/// dans `pending_out`.
async fn submit_and_watch<T: Transport, W: Write>(
    controller: &FormController<T>,
    form: &FormState,
    mut pending_out: Option<&mut W>,
) -> SubmitOutcome {
    let mut panel = controller.subscribe();
    let submit = controller.submit(form);
    tokio::pin!(submit);

    loop {
        tokio::select! {
            biased;
            changed = panel.changed() => match changed {
                Ok(()) => {
                    let view = panel.borrow_and_update().view.clone();
                    if view.phase() == Phase::Pending {
                        if let Some(out) = pending_out.as_deref_mut() {
                            let _ = writeln!(out, "{view}");
                        }
                    }
                }
                Err(_) => break,
            },
            outcome = &mut submit => return outcome,
        }
    }
    submit.await
}
