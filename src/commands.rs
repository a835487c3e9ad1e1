//! Subcommand handlers. Each one validates locally, issues at most the
//! requests its web screen would, and writes the result to `out`.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;
use std::path::{Path, PathBuf};

use loans::confirm::DeleteConfirmation;
use loans::requirements::requirements_for;
use loans::status;
use loans::types::{LoanApplication, LoanType};
use loans::validation::{
    APPRAISAL_PROOF_REQUIRED, Field, FieldErrors, FileMeta, INCOME_PROOF_REQUIRED, LoanApplicationForm,
};
use serde::Serialize;

use crate::backend::{BackendClient, Upload};
use crate::cli::{ApplyArgs, Command, DeleteArgs, LoanSubcommand, SimulateArgs, StaffLogin, UserSubcommand};
use crate::config::{Config, OutputFormat};
use crate::error::CliError;
use crate::render;

/// Run one subcommand against the configured backend.
///
/// # Errors
///
/// Local validation failures, refused confirmations or staff logins, and
/// backend or transport failures.
pub async fn run(config: &Config, command: Command, out: &mut impl Write) -> Result<(), CliError> {
    let backend = BackendClient::new(config)?;
    match command {
        Command::User(user) => run_user(&backend, config.output, user.command, out).await,
        Command::Loan(loan) => run_loan(&backend, config, loan.command, out).await,
        Command::Simulate(args) => simulate(&backend, config.output, args, out).await,
        Command::Requirements { loan_type } => show_requirements(config.output, loan_type, out),
    }
}

fn emit<T, W>(out: &mut W, output: OutputFormat, value: &T, table: impl FnOnce(&T) -> String) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let rendered = match output {
        OutputFormat::Json => render::json(value)?,
        OutputFormat::Table => table(value),
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}

// =============================================================================
// USERS
// =============================================================================

async fn run_user(
    backend: &BackendClient,
    output: OutputFormat,
    command: UserSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        UserSubcommand::Register(args) => {
            let user = args.into_form().validate(today()).map_err(CliError::Validation)?;
            let created = backend.register_user(&user).await?;
            tracing::info!(id = ?created.id, "user registered");
            emit(out, output, &created, |user| {
                format!("Usuario registrado con éxito.\n{}", render::user_details(user))
            })
        }
        UserSubcommand::List => {
            let users = backend.list_users().await?;
            emit(out, output, users.as_slice(), render::user_table)
        }
        UserSubcommand::Get { id } => {
            let user = backend.fetch_user(id).await?.ok_or_else(|| CliError::UserNotFound(format!("#{id}")))?;
            emit(out, output, &user, render::user_details)
        }
        UserSubcommand::Find { name } => {
            let name = name.trim();
            let user = backend.find_user(name).await?.ok_or_else(|| CliError::UserNotFound(name.to_owned()))?;
            emit(out, output, &user, render::user_details)
        }
    }
}

// =============================================================================
// LOAN APPLICATIONS
// =============================================================================

async fn run_loan(
    backend: &BackendClient,
    config: &Config,
    command: LoanSubcommand,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let output = config.output;
    match command {
        LoanSubcommand::Apply(args) => apply(backend, output, args, out).await,
        LoanSubcommand::List { owner } => {
            let owner = owner.as_deref().map(str::trim).filter(|name| !name.is_empty());
            let loans = match owner {
                Some(name) => backend.loans_by_owner(name).await?,
                None => backend.list_loans().await?,
            };
            if loans.is_empty() && output == OutputFormat::Table {
                writeln!(out, "No se encontraron solicitudes.")?;
                return Ok(());
            }
            emit(out, output, loans.as_slice(), render::loan_table)
        }
        LoanSubcommand::Get { id } => {
            let loan = backend.fetch_loan(id).await?.ok_or(CliError::LoanNotFound(id))?;
            emit(out, output, &loan, render::loan_details)
        }
        LoanSubcommand::Delete(args) => delete(backend, output, args, out).await,
        LoanSubcommand::Evaluate { id, login } => {
            staff_login(config, &login)?;
            let verdict = backend.evaluate_loan(id).await?;
            let evaluation = Evaluation { outcome: verdict.trim(), application: reload(backend, id).await };
            emit(out, output, &evaluation, |evaluation| match &evaluation.application {
                Some(loan) => format!("{}\n{}", evaluation.outcome, render::loan_details(loan)),
                None => evaluation.outcome.to_owned(),
            })
        }
        LoanSubcommand::SetStatus { id, status: new_status, login } => {
            staff_login(config, &login)?;
            let new_status = new_status.trim();
            if new_status.is_empty() {
                return Err(CliError::StatusRequired);
            }
            let body = backend.change_status(id, new_status).await?;
            writeln!(out, "{}", status::change_summary(id, new_status, &body))?;
            Ok(())
        }
    }
}

fn staff_login(config: &Config, login: &StaffLogin) -> Result<(), CliError> {
    let user = login.user.as_deref().unwrap_or_default();
    let password = login.password.as_deref().unwrap_or_default();
    config.staff.check(user, password).inspect_err(|_| tracing::warn!(user, "staff login refused"))?;
    Ok(())
}

#[derive(Serialize)]
struct Evaluation<'a> {
    #[serde(rename = "resultado")]
    outcome: &'a str,
    #[serde(rename = "solicitud")]
    application: Option<LoanApplication>,
}

/// Record after an evaluation; a failed reload only logs.
async fn reload(backend: &BackendClient, id: i64) -> Option<LoanApplication> {
    backend
        .fetch_loan(id)
        .await
        .inspect_err(|err| tracing::warn!(id, error = %err, "could not reload application"))
        .ok()
        .flatten()
}

async fn apply(
    backend: &BackendClient,
    output: OutputFormat,
    args: ApplyArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let income = match args.income_proof.as_deref() {
        Some(path) => Some(document(path).await?),
        None => None,
    };
    let appraisal = match args.appraisal_proof.as_deref() {
        Some(path) => Some(document(path).await?),
        None => None,
    };
    let form = LoanApplicationForm {
        income_proof: income.as_ref().map(|(_, meta)| meta.clone()),
        appraisal_proof: appraisal.as_ref().map(|(_, meta)| meta.clone()),
        ..args.text_form()
    };
    let draft = form.validate().map_err(CliError::Validation)?;

    let income = read_upload(income, Field::IncomeProof, INCOME_PROOF_REQUIRED).await?;
    let appraisal = read_upload(appraisal, Field::AppraisalProof, APPRAISAL_PROOF_REQUIRED).await?;
    let created = backend.create_loan(&draft, income, appraisal).await?;
    tracing::info!(id = ?created.id, "loan application created");

    emit(out, output, &created, |loan| {
        let headline = match loan.id {
            Some(id) => format!("Su solicitud #{id} fue registrada y está en revisión inicial."),
            None => "Su solicitud fue registrada y está en revisión inicial.".to_owned(),
        };
        format!("{headline}\n{}", render::loan_details(loan))
    })
}

/// File metadata as the browser would report it: name, extension MIME, size.
async fn document(path: &Path) -> Result<(PathBuf, FileMeta), CliError> {
    let metadata =
        tokio::fs::metadata(path).await.map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    Ok((path.to_path_buf(), FileMeta::new(name, "", metadata.len())))
}

async fn read_upload(
    document: Option<(PathBuf, FileMeta)>,
    field: Field,
    required: &'static str,
) -> Result<Upload, CliError> {
    let Some((path, meta)) = document else {
        let mut errors = FieldErrors::new();
        errors.insert(field, required);
        return Err(CliError::Validation(errors));
    };
    let bytes = tokio::fs::read(&path).await.map_err(|source| CliError::Read { path, source })?;
    Ok(Upload { meta, bytes })
}

async fn delete(
    backend: &BackendClient,
    output: OutputFormat,
    args: DeleteArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = args.id;
    let confirmation = DeleteConfirmation::new(args.full_name.unwrap_or_default(), args.id_number.unwrap_or_default());
    let record = backend.fetch_loan(id).await?.ok_or(CliError::LoanNotFound(id))?;
    confirmation.verify(&record).inspect_err(|refused| tracing::warn!(id, %refused, "delete refused"))?;

    backend.delete_loan(id).await?;
    tracing::info!(id, "loan application deleted");
    emit(out, output, &record, |_| format!("Solicitud #{id} eliminada."))
}

// =============================================================================
// SIMULATION & REQUIREMENTS
// =============================================================================

async fn simulate(
    backend: &BackendClient,
    output: OutputFormat,
    args: SimulateArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let request = args.into_form().validate().map_err(CliError::Validation)?;
    let notes = requirements_for(request.loan_type).advisories(Some(request.term_years), Some(request.interest_rate));
    for note in &notes {
        tracing::warn!("{note}");
    }
    let result = backend.simulate(&request).await?;
    emit(out, output, &result, render::simulation)
}

#[derive(Serialize)]
struct RequirementsView {
    #[serde(rename = "tipoPrestamo")]
    loan_type: LoanType,
    plazo: String,
    tasa: String,
    financiamiento: String,
    documentos: &'static [&'static str],
}

fn show_requirements(output: OutputFormat, loan_type: Option<LoanType>, out: &mut impl Write) -> Result<(), CliError> {
    let types = loan_type.map_or_else(|| LoanType::ALL.to_vec(), |t| vec![t]);
    match output {
        OutputFormat::Json => {
            let views: Vec<RequirementsView> = types
                .iter()
                .map(|t| {
                    let req = requirements_for(*t);
                    RequirementsView {
                        loan_type: *t,
                        plazo: req.term_hint(),
                        tasa: req.rate_hint(),
                        financiamiento: req.financing_hint(),
                        documentos: req.documents,
                    }
                })
                .collect();
            writeln!(out, "{}", render::json(&views)?)?;
        }
        OutputFormat::Table => {
            let blocks: Vec<String> = types.iter().map(|t| render::requirements(requirements_for(*t))).collect();
            writeln!(out, "{}", blocks.join("\n\n"))?;
        }
    }
    Ok(())
}
