use clap::{Parser, Subcommand};
use custdeck::application::desk::{CustomerDesk, CustomerDetail};
use custdeck::domain::credentials::Credentials;
use custdeck::domain::customer::{Customer, CustomerId};
use custdeck::domain::ports::{AuthenticatorBox, CustomerDirectory, CustomerDirectoryBox};
use custdeck::domain::view::{SortDirection, SortKey, ViewMode};
use custdeck::infrastructure::in_memory::InMemoryCustomerDirectory;
use custdeck::infrastructure::seed::initial_customers;
use custdeck::infrastructure::simulated_auth::{DEFAULT_DELAY, SimulatedAuthenticator};
use custdeck::interfaces::csv::customer_reader::CustomerReader;
use custdeck::interfaces::csv::customer_writer::CustomerWriter;
use custdeck::interfaces::terminal::{EMPTY_MESSAGE, write_detail, write_grid};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Customer dataset CSV file. Uses the built-in dataset when omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search and sort the customer list
    List {
        /// Case-insensitive search over name, email and ID
        #[arg(short, long, default_value = "")]
        query: String,

        /// Column to sort by (name, id, email, registeredDate, status)
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(short, long, default_value = "asc")]
        direction: SortDirection,

        /// Presentation (grid, list)
        #[arg(short, long, default_value = "grid")]
        view: ViewMode,

        /// Print the list as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Show a single customer
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },
    /// Sign in against the demo authenticator
    Login {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        /// Simulated round-trip delay in milliseconds
        #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the directory from the CSV file, skipping rows that fail to parse
/// or repeat an id.
async fn load_directory(data: Option<PathBuf>) -> Result<CustomerDirectoryBox> {
    let Some(path) = data else {
        let directory = InMemoryCustomerDirectory::from_customers(initial_customers()).into_diagnostic()?;
        return Ok(Box::new(directory));
    };

    let directory = InMemoryCustomerDirectory::new();
    let file = File::open(&path).into_diagnostic()?;
    let mut loaded = 0usize;
    for customer in CustomerReader::new(file).customers() {
        match customer {
            Ok(customer) => {
                if let Err(e) = directory.insert(customer).await {
                    warn!("Skipping customer row: {}", e);
                } else {
                    loaded += 1;
                }
            }
            Err(e) => warn!("Skipping customer row: {}", e),
        }
    }
    info!(path = %path.display(), loaded, "loaded customer dataset");
    Ok(Box::new(directory))
}

fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let Cli { data, command, .. } = cli;

    match command {
        Command::List {
            query,
            sort,
            direction,
            view,
            json,
        } => {
            let desk = CustomerDesk::new(load_directory(data).await?, demo_authenticator(0));
            let mut list = desk.open_list().await.into_diagnostic()?;

            let sort_key = SortKey::from_column(&sort);
            if sort_key.is_none() {
                warn!(column = %sort, "unknown sort column, keeping input order");
            }
            list.set_sort(sort_key, direction);
            list.set_query(query);
            list.set_view_mode(view);

            let params = list.params().clone();
            let customers: &[Customer] = list.view();

            if json {
                return write_json(customers);
            }

            let stdout = io::stdout();
            match params.view_mode {
                ViewMode::List if customers.is_empty() => {
                    writeln!(stdout.lock(), "{EMPTY_MESSAGE}").into_diagnostic()?
                }
                ViewMode::Grid => write_grid(&mut stdout.lock(), customers, &params).into_diagnostic()?,
                ViewMode::List => CustomerWriter::new(stdout.lock())
                    .write_customers(customers)
                    .into_diagnostic()?,
            }
        }
        Command::Show { id, json } => {
            let desk = CustomerDesk::new(load_directory(data).await?, demo_authenticator(0));
            let detail = desk.detail(&CustomerId::new(id)).await.into_diagnostic()?;

            if json {
                return match &detail {
                    CustomerDetail::Found(customer) => write_json(customer.as_ref()),
                    CustomerDetail::NotFound(_) => write_json(&serde_json::Value::Null),
                };
            }
            write_detail(&mut io::stdout().lock(), &detail).into_diagnostic()?;
        }
        Command::Login {
            email,
            password,
            delay_ms,
        } => {
            let desk = CustomerDesk::new(load_directory(data).await?, demo_authenticator(delay_ms));
            let session = desk
                .sign_in(&Credentials::new(email, password))
                .await
                .into_diagnostic()?;
            println!("{}", session.message);
        }
    }

    Ok(())
}

fn demo_authenticator(delay_ms: u64) -> AuthenticatorBox {
    Box::new(SimulatedAuthenticator::new(Duration::from_millis(delay_ms)))
}
