//! Sofra demo - drives one scripted ordering session in memory.
//!
//! # Usage
//!
//! ```bash
//! # Order two hamburgers and a pizza, paying at the door
//! sofra-demo --items 1,1,2
//!
//! # Pay by card instead
//! sofra-demo --items 1,4 --method card
//! ```
//!
//! Configuration (delivery fee, currency, cookie TTL) comes from the
//! environment; see `config` for the variables and their defaults.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;

use sofra_core::MenuItemId;
use sofra_widget::catalog::Catalog;
use sofra_widget::checkout::{CardDetails, PaymentMethod, PaymentRequest};
use sofra_widget::config::WidgetConfig;
use sofra_widget::{AppState, Widget};

#[derive(Parser)]
#[command(name = "sofra-demo")]
#[command(author, version, about = "Scripted ordering session for the Sofra widget")]
struct Cli {
    /// Comma-separated menu item ids to add to the cart
    #[arg(long, value_delimiter = ',', default_value = "1,1,2")]
    items: Vec<i32>,

    /// Payment method: card or door
    #[arg(long, default_value = "door")]
    method: PaymentMethodArg,

    /// Accept preference cookies before checking out
    #[arg(long)]
    consent: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PaymentMethodArg {
    Card,
    Door,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(arg: PaymentMethodArg) -> Self {
        match arg {
            PaymentMethodArg::Card => Self::Card,
            PaymentMethodArg::Door => Self::Door,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = WidgetConfig::from_env()?;
    let catalog = Catalog::default_menu(config.currency);
    let state = AppState::in_memory(config, catalog);
    let mut widget = Widget::new(state);

    for item in widget.menu() {
        tracing::info!(id = %item.id, name = %item.name, price = %item.price, "Menu item");
    }

    let method = PaymentMethod::from(cli.method);
    if cli.consent {
        let alert = widget.accept_consent(method);
        tracing::info!("{}", alert.message);
    }

    for id in cli.items {
        let view = widget.add_item(MenuItemId::new(id));
        tracing::info!(items = view.item_count, total = %view.total, "Added item {id}");
    }

    let saved = widget.save_address("Home", "Bağdat Cad.", "İstanbul")?;
    tracing::info!("{}", saved.summary);

    let screen = widget.begin_checkout()?;
    tracing::info!(
        subtotal = %screen.subtotal,
        delivery = %screen.delivery_fee,
        total = %screen.total,
        address = %screen.address_display,
        "Checkout"
    );

    let card = matches!(method, PaymentMethod::Card).then(|| CardDetails {
        holder_name: "Ayşe Yılmaz".to_owned(),
        card_number: "4111111111111111".to_owned(),
        expiry_month: "12".to_owned(),
        expiry_year: "2031".to_owned(),
        cvv: "123".to_owned(),
    });

    let placed = widget.confirm_payment(&PaymentRequest {
        method,
        address_line: String::new(),
        card,
    })?;
    tracing::info!(
        items = placed.cart.item_count,
        state = ?widget.checkout_state(),
        "{}",
        placed.alert.message
    );

    Ok(())
}
