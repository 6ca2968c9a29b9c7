//! Checkout commands.

use clap::Args;
use maison_storefront::checkout::place_cart_order;
use maison_storefront::orders::place_cod_order;
use maison_storefront::{
    CartStore, CheckoutError, CheckoutVariant, CouponOutcome, CustomerForm, FileStorage, OrderLog,
    StorefrontConfig,
};
use tracing::{info, warn};

/// Cash-on-delivery customer details.
#[derive(Debug, Args)]
pub struct CodArgs {
    /// Full name
    #[arg(long)]
    name: String,
    /// Phone number (+92 or 0 prefix optional)
    #[arg(long)]
    phone: String,
    /// Email address
    #[arg(long, default_value = "")]
    email: String,
    /// Street address
    #[arg(long)]
    street: String,
    /// Apartment or house number
    #[arg(long, default_value = "")]
    apartment: String,
    /// Colony or area
    #[arg(long)]
    colony: String,
    /// City
    #[arg(long)]
    city: String,
    /// Postal code
    #[arg(long, default_value = "")]
    postal_code: String,
    /// Landmarks or delivery notes
    #[arg(long, default_value = "")]
    address: String,
}

impl From<CodArgs> for CustomerForm {
    fn from(args: CodArgs) -> Self {
        Self {
            full_name: args.name,
            phone_number: args.phone,
            email: args.email,
            street_address: args.street,
            apartment_number: args.apartment,
            colony: args.colony,
            city: args.city,
            postal_code: args.postal_code,
            complete_address: args.address,
        }
    }
}

/// Print the quote for the current cart.
pub fn quote(storage: FileStorage, config: &StorefrontConfig, cod: bool) {
    let cart = CartStore::load(storage);
    let variant = if cod {
        CheckoutVariant::CashOnDelivery
    } else {
        CheckoutVariant::CartPanel
    };
    let quote = config.checkout.quote(&cart, variant);

    info!("Subtotal: {}", quote.subtotal);
    if quote.shipping.is_zero() {
        info!("Shipping: free");
    } else {
        info!(
            "Shipping: {} (free above {})",
            quote.shipping, config.checkout.free_shipping_threshold
        );
    }
    if variant.applies_tax() {
        info!("Tax: {}", quote.tax);
    }
    info!("Total: {}", quote.total);
}

/// Check a coupon code.
pub fn coupon(config: &StorefrontConfig, code: &str) {
    match config.checkout.apply_coupon(code) {
        CouponOutcome::Accepted { percent } => {
            info!("Coupon applied! You saved {percent}% with code {}", code.to_uppercase());
        }
        CouponOutcome::Rejected => {
            warn!("Invalid coupon. Please check your coupon code and try again.");
        }
    }
}

/// Place the order from the cart panel.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart is empty.
pub fn place(storage: FileStorage, config: &StorefrontConfig) -> Result<(), CheckoutError> {
    let mut cart = CartStore::load(storage);
    let order = place_cart_order(&mut cart, &config.checkout)?;
    info!(
        "Order placed successfully! Your order of {} has been confirmed.",
        order.quote.total
    );
    Ok(())
}

/// Place a cash-on-delivery order.
///
/// # Errors
///
/// Returns `CheckoutError` if the details are invalid, the cart is empty, or
/// the order log cannot be written.
pub async fn cod(
    storage: FileStorage,
    config: &StorefrontConfig,
    args: CodArgs,
) -> Result<(), CheckoutError> {
    let mut cart = CartStore::load(storage.clone());
    let log = OrderLog::new(storage);

    info!("Placing order...");
    let order = place_cod_order(&mut cart, &log, args.into(), config.checkout_latency).await?;

    let shipping = config.checkout.shipping_for(order.total);
    info!(
        "Order confirmed! Your order #{} has been placed. Pay {} on delivery; you will receive a call for confirmation.",
        order.id,
        order.total + shipping
    );
    Ok(())
}
