use authpay::application::authorizer::{RobotCheckAuthorizer, SmsAuthorizer};
use authpay::application::processor::PaymentProcessor;
use authpay::domain::order::Order;
use authpay::domain::ports::{AuthorizerRef, InputSourceRef};
use authpay::infrastructure::console::{ConsoleInput, StdoutNotifier};
use authpay::infrastructure::in_memory::ScriptedInput;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AuthorizerKind {
    /// One-time code sent by SMS
    Sms,
    /// "Are you a robot" question
    Robot,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How the payment is authorized
    #[arg(long, value_enum, default_value_t = AuthorizerKind::Sms)]
    authorizer: AuthorizerKind,

    /// Seed for the order id and SMS code. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Read answers from this file, one per line, instead of the terminal.
    #[arg(long)]
    responses: Option<PathBuf>,

    /// Print the simulated SMS message on stderr.
    #[arg(long)]
    show_code: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input: InputSourceRef = if let Some(path) = cli.responses {
        let file = File::open(path).into_diagnostic()?;
        Arc::new(ScriptedInput::from_reader(BufReader::new(file)).into_diagnostic()?)
    } else {
        Arc::new(ConsoleInput::new())
    };

    let mut order = Order::with_rng(&mut rng);

    let authorizer: AuthorizerRef = match cli.authorizer {
        AuthorizerKind::Sms => {
            let sms = Arc::new(SmsAuthorizer::new(input));
            let code = sms.generate_code_with(&mut rng).await;
            if cli.show_code {
                eprintln!("SMS to customer: your verification code is {}", code.as_str());
            }
            sms
        }
        AuthorizerKind::Robot => Arc::new(RobotCheckAuthorizer::new(input)),
    };

    let processor = PaymentProcessor::new(authorizer, Arc::new(StdoutNotifier));
    processor.pay(&mut order).await?;

    println!("{}", serde_json::to_string(&order).into_diagnostic()?);

    Ok(())
}
