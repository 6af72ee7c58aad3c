use chrono::Utc;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use tierpay::application::service::PaymentService;
use tierpay::application::transition::UserStatusService;
use tierpay::domain::payment::{PaymentAmount, PaymentMethodInfo};
use tierpay::domain::ports::UserUpdateStore;
use tierpay::domain::user::{Tier, TierOperation, User};
use tierpay::infrastructure::in_memory::InMemoryUserUpdateStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and process a card payment
    Pay {
        /// Payment method label, e.g. CARD or CREDIT_CARD
        #[arg(long, default_value = "CARD")]
        method: String,

        /// Card network label: VISA, MASTERCARD or AMEX
        #[arg(long)]
        card_type: String,

        #[arg(long)]
        card_number: String,

        /// Expiry in MM/YY form
        #[arg(long)]
        expiry: String,

        #[arg(long)]
        cvv: String,

        #[arg(long, default_value = "")]
        holder: String,

        #[arg(long)]
        amount: Decimal,

        #[arg(long, default_value = "USD")]
        currency: String,
    },
    /// Adjudicate a user tier change and record it
    Status {
        /// Current tier: freemium, basic or premium
        #[arg(long)]
        from: String,

        /// Target tier
        #[arg(long)]
        to: String,

        /// upgrade or downgrade
        #[arg(long)]
        operation: String,

        #[arg(long, default_value = "demo-user")]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Pay {
            method,
            card_type,
            card_number,
            expiry,
            cvv,
            holder,
            amount,
            currency,
        } => {
            let info = PaymentMethodInfo {
                payment_method: method,
                card_number,
                card_expiry_date: expiry,
                card_type,
                card_cvv: cvv,
                card_holder_name: holder,
            };
            let amount = PaymentAmount::new(amount, currency);

            let service = PaymentService::with_defaults();
            let success = service.process(&info, &amount).await.into_diagnostic()?;
            if success {
                println!(
                    "payment of {} {} processed successfully",
                    amount.value, amount.currency
                );
            } else {
                println!("payment was not processed");
            }
        }
        Command::Status {
            from,
            to,
            operation,
            user_id,
        } => {
            let current: Tier = from.parse().map_err(|e: String| miette::miette!(e))?;
            let target: Tier = to.parse().map_err(|e: String| miette::miette!(e))?;
            let operation: TierOperation = operation.parse().into_diagnostic()?;

            let user = User::new(user_id, "demo user", "demo@example.com", current);
            let service = UserStatusService::new(user);
            match operation {
                TierOperation::Upgrade => service.upgrade(target).into_diagnostic()?,
                TierOperation::Downgrade => service.downgrade(target).into_diagnostic()?,
            }

            // The check only adjudicates; apply the move and record it so it
            // could be reverted by a fuller system.
            let mut user = service.user().clone();
            user.set_tier(target);
            let user_id = user.id.clone();

            let store = InMemoryUserUpdateStore::new();
            let update_id = store
                .update_user_info(Utc::now(), &user_id, user)
                .await
                .into_diagnostic()?;

            println!("user status changed to {target} (update id: {update_id})");
        }
    }

    Ok(())
}
