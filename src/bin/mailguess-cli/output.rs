use anyhow::{Context, Result, bail};
use mailguess::{ResultsView, SubmitOutcome, ValidationResponse};

use crate::args::{Cli, Format};

pub fn write_report(outcome: &SubmitOutcome, view: &ResultsView, cli: &Cli) -> Result<()> {
    match cli.format {
        Format::Human => {
            println!("{view}");
            Ok(())
        }
        Format::Json => write_json(outcome, cli),
        Format::Csv => write_csv(outcome, cli),
    }
}

/// Code de sortie : 0 résultats affichés, 1 requête en échec.
pub fn exit_status(outcome: &SubmitOutcome) -> u8 {
    match outcome {
        SubmitOutcome::Errored(_) => 1,
        SubmitOutcome::Rendered(_) | SubmitOutcome::Superseded => 0,
    }
}

/// Objet réponse tel quel, ou `{"error": ".."}` si la requête a échoué.
pub fn json_report(outcome: &SubmitOutcome) -> Result<serde_json::Value> {
    match outcome {
        SubmitOutcome::Rendered(response) => Ok(serde_json::to_value(response)?),
        SubmitOutcome::Errored(err) => Ok(serde_json::json!({ "error": err.to_string() })),
        SubmitOutcome::Superseded => bail!("soumission remplacée par une plus récente"),
    }
}

fn write_json(outcome: &SubmitOutcome, cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(&json_report(outcome)?)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn write_csv(outcome: &SubmitOutcome, cli: &Cli) -> Result<()> {
    let response = match outcome {
        SubmitOutcome::Rendered(response) => response,
        SubmitOutcome::Errored(err) => {
            eprintln!("{}", mailguess::render_error(err));
            return Ok(());
        }
        SubmitOutcome::Superseded => bail!("soumission remplacée par une plus récente"),
    };

    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv_rows(&mut wtr, response)?;
        let data = wtr.into_inner().context("flush csv buffer")?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        write_csv_rows(&mut wtr, response)?;
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &SubmitOutcome, _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

#[cfg(feature = "with-csv")]
fn write_csv_rows<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    response: &ValidationResponse,
) -> Result<()> {
    wtr.write_record(["address", "domain", "catch_all"])?;
    for (address, domain) in csv_rows(response) {
        wtr.write_record([
            address,
            domain,
            if response.catch_all { "true" } else { "false" },
        ])?;
    }
    Ok(())
}

/// `(adresse, domaine)` pour chaque adresse confirmée, dans l'ordre du serveur.
#[cfg_attr(not(feature = "with-csv"), allow(dead_code))]
pub fn csv_rows(response: &ValidationResponse) -> Vec<(&str, &str)> {
    response
        .confirmed
        .iter()
        .map(|address| {
            let domain = address.rsplit_once('@').map(|(_, d)| d).unwrap_or("");
            (address.as_str(), domain)
        })
        .collect()
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use mailguess::ClientError;

    fn rendered() -> SubmitOutcome {
        SubmitOutcome::Rendered(ValidationResponse {
            confirmed: vec!["ana@empresa.com".into()],
            total_tested: 5,
            catch_all: false,
        })
    }

    fn errored() -> SubmitOutcome {
        SubmitOutcome::Errored(ClientError::transport(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    #[test]
    fn exit_status_follows_outcome() {
        assert_eq!(exit_status(&rendered()), 0);
        assert_eq!(exit_status(&errored()), 1);
        assert_eq!(exit_status(&SubmitOutcome::Superseded), 0);
    }

    #[test]
    fn json_report_is_the_response_object() {
        let value = json_report(&rendered()).expect("json value");
        assert_eq!(
            value,
            serde_json::json!({
                "confirmed": ["ana@empresa.com"],
                "total_tested": 5,
                "catch_all": false
            })
        );
    }

    #[test]
    fn json_report_carries_error_message() {
        let value = json_report(&errored()).expect("json value");
        assert_eq!(
            value,
            serde_json::json!({ "error": "request failed: connection refused" })
        );
    }

    #[test]
    fn json_report_rejects_superseded() {
        assert!(json_report(&SubmitOutcome::Superseded).is_err());
    }

    #[test]
    fn out_file_is_replaced_atomically() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let path = path.to_str().expect("utf8 path");

        std::fs::write(path, "old").expect("seed file");
        write_all_atomically(path, b"{\"confirmed\":[]}").expect("write report");

        assert_eq!(
            std::fs::read_to_string(path).expect("read report"),
            "{\"confirmed\":[]}"
        );
        assert!(!std::path::Path::new(&format!("{path}.tmp")).exists());
    }

    #[test]
    fn csv_rows_split_domain() {
        let response = ValidationResponse {
            confirmed: vec!["ana@empresa.com".into(), "ana.silva@empresa.com".into()],
            total_tested: 12,
            catch_all: false,
        };
        assert_eq!(
            csv_rows(&response),
            vec![
                ("ana@empresa.com", "empresa.com"),
                ("ana.silva@empresa.com", "empresa.com"),
            ]
        );
    }
}
