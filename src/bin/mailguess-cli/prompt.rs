use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use mailguess::{FormError, FormState, looks_like_domain};

/// Pose chaque question sur `output` et lit les réponses ligne par ligne
/// depuis `input`. Le domaine est demandé en premier, jusqu'à avoir une forme
/// plausible ; le prénom est redemandé tant qu'il est vide.
pub fn read_form<R, W>(input: &mut R, output: &mut W, light_mode: bool) -> Result<FormState>
where
    R: BufRead,
    W: Write,
{
    let domain = loop {
        let answer = ask(input, output, "Domain (ex: empresa.com): ")?
            .trim()
            .to_lowercase();
        if looks_like_domain(&answer) {
            break answer;
        }
        writeln!(output, "{}", FormError::invalid_domain(answer))?;
    };

    let first = loop {
        let answer = ask(input, output, "First name: ")?;
        if !answer.is_empty() {
            break answer;
        }
        writeln!(output, "{}", FormError::missing("first"))?;
    };

    let middle = ask(input, output, "Middle name (ENTER to skip): ")?;
    let last = ask(input, output, "Last name (ENTER to skip): ")?;
    let extras = ask(input, output, "Extras (department etc., optional): ")?;

    Ok(FormState {
        first,
        middle,
        last,
        extras,
        domain,
        light_mode,
    })
}

fn ask<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("lecture de stdin")?;
    if read == 0 {
        bail!("stdin fermé avant la fin du formulaire");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
