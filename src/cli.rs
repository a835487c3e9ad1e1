//! Command-line surface. Every screen of the web client has a subcommand;
//! numeric inputs are taken as text so the shared form validation reports
//! the same messages the browser shows.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use loans::types::{CreditHistory, LoanType, SavingsCapacity};
use loans::validation::{LoanApplicationForm, RegistrationForm, SimulationForm};

#[derive(Parser, Debug)]
#[command(name = "prestabanco", version, about = "PrestaBanco mortgage loan client")]
pub struct Cli {
    /// Backend root, including the `/api` prefix.
    #[arg(long, global = true, env = "PRESTABANCO_BASE_URL", default_value = loans::api::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        global = true,
        env = "PRESTABANCO_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Expected staff user for evaluation commands.
    #[arg(long, global = true, env = "PRESTABANCO_STAFF_USER", hide_env_values = true)]
    pub staff_user: Option<String>,

    /// Expected staff password for evaluation commands.
    #[arg(long, global = true, env = "PRESTABANCO_STAFF_PASSWORD", hide_env_values = true)]
    pub staff_password: Option<String>,

    /// Print records as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Applicant accounts.
    User(UserCommand),
    /// Loan applications.
    Loan(LoanCommand),
    /// Ask the backend to simulate a loan.
    Simulate(SimulateArgs),
    /// Show the requirement table for one or every loan type.
    Requirements {
        loan_type: Option<LoanType>,
    },
}

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    Register(RegisterArgs),
    List,
    Get {
        id: i64,
    },
    /// Look up a user by exact full name.
    Find {
        name: String,
    },
}

#[derive(Args, Debug)]
pub struct LoanCommand {
    #[command(subcommand)]
    pub command: LoanSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LoanSubcommand {
    Apply(ApplyArgs),
    List {
        /// Exact owner full name; every application when omitted.
        #[arg(long)]
        owner: Option<String>,
    },
    Get {
        id: i64,
    },
    /// Delete after confirming the owner's name and ID number.
    Delete(DeleteArgs),
    Evaluate {
        id: i64,
        #[command(flatten)]
        login: StaffLogin,
    },
    /// Force a status code such as `E4_PRE_APROBADA`.
    SetStatus {
        id: i64,
        status: String,
        #[command(flatten)]
        login: StaffLogin,
    },
}

#[derive(Args, Debug, Default)]
pub struct RegisterArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    /// `YYYY-MM-DD`.
    #[arg(long)]
    pub birth_date: Option<String>,
    #[arg(long)]
    pub id_type: Option<String>,
    #[arg(long)]
    pub id_number: Option<String>,
    #[arg(long)]
    pub marital_status: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub monthly_income: Option<String>,
    #[arg(long)]
    pub current_debts: Option<String>,
    #[arg(long, default_value = "BUENO")]
    pub credit_history: CreditHistory,
    #[arg(long)]
    pub employment_type: Option<String>,
    #[arg(long)]
    pub years_employed: Option<String>,
    #[arg(long)]
    pub savings_balance: Option<String>,
    #[arg(long)]
    pub savings_history: Option<String>,
    #[arg(long)]
    pub dependents: Option<String>,
    #[arg(long)]
    pub user_type: Option<String>,
    #[arg(long, default_value = "ADECUADA")]
    pub savings_capacity: SavingsCapacity,
}

impl RegisterArgs {
    pub fn into_form(self) -> RegistrationForm {
        RegistrationForm {
            full_name: self.full_name.unwrap_or_default(),
            birth_date: self.birth_date.unwrap_or_default(),
            id_type: self.id_type.unwrap_or_default(),
            id_number: self.id_number.unwrap_or_default(),
            marital_status: self.marital_status.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            monthly_income: self.monthly_income.unwrap_or_default(),
            current_debts: self.current_debts.unwrap_or_default(),
            credit_history: self.credit_history,
            employment_type: self.employment_type.unwrap_or_default(),
            years_employed: self.years_employed.unwrap_or_default(),
            savings_balance: self.savings_balance.unwrap_or_default(),
            savings_history: self.savings_history.unwrap_or_default(),
            dependents: self.dependents.unwrap_or_default(),
            user_type: self.user_type.unwrap_or_default(),
            savings_capacity: self.savings_capacity,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub loan_type: Option<LoanType>,
    #[arg(long)]
    pub amount: Option<String>,
    /// Term in whole years.
    #[arg(long)]
    pub term: Option<String>,
    /// Annual interest rate in percent.
    #[arg(long)]
    pub rate: Option<String>,
    #[arg(long)]
    pub property_value: Option<String>,
    /// jpg, png or pdf, at most 5 MB.
    #[arg(long)]
    pub income_proof: Option<PathBuf>,
    /// jpg, png or pdf, at most 5 MB.
    #[arg(long)]
    pub appraisal_proof: Option<PathBuf>,
}

impl ApplyArgs {
    /// Text fields of the form; documents are attached once read from disk.
    pub fn text_form(&self) -> LoanApplicationForm {
        LoanApplicationForm {
            full_name: self.full_name.clone().unwrap_or_default(),
            loan_type: self.loan_type,
            amount: self.amount.clone().unwrap_or_default(),
            term: self.term.clone().unwrap_or_default(),
            rate: self.rate.clone().unwrap_or_default(),
            property_value: self.property_value.clone().unwrap_or_default(),
            income_proof: None,
            appraisal_proof: None,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    pub id: i64,
    /// Owner full name, exactly as registered.
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub id_number: Option<String>,
}

/// Credentials typed by the operator, checked against the staff gate.
#[derive(Args, Debug, Default)]
pub struct StaffLogin {
    #[arg(long = "login", env = "PRESTABANCO_LOGIN_USER")]
    pub user: Option<String>,
    #[arg(long = "password", env = "PRESTABANCO_LOGIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    #[arg(long)]
    pub amount: Option<String>,
    /// Term in whole years.
    #[arg(long)]
    pub term: Option<String>,
    #[arg(long)]
    pub rate: Option<String>,
    #[arg(long)]
    pub loan_type: Option<LoanType>,
    /// Insurance costs; zero when omitted.
    #[arg(long)]
    pub insurance: Option<String>,
    /// Commission costs; zero when omitted.
    #[arg(long)]
    pub commissions: Option<String>,
}

impl SimulateArgs {
    pub fn into_form(self) -> SimulationForm {
        SimulationForm {
            amount: self.amount.unwrap_or_default(),
            term: self.term.unwrap_or_default(),
            rate: self.rate.unwrap_or_default(),
            loan_type: self.loan_type,
            insurance: self.insurance.unwrap_or_default(),
            commissions: self.commissions.unwrap_or_default(),
        }
    }
}
